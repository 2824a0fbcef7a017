use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Result;
use crate::mealplan::client::{DEFAULT_API_BASE_URL, DEFAULT_MODEL};
use crate::mealplan::GeminiClient;

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "biolife";

/// Runtime settings resolved from flags and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub model: String,
    pub api_url: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone().unwrap_or_else(default_data_dir),
            model: cli.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url: cli
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }

    /// Build the Gemini client. The API key is read from the environment here,
    /// so commands that never call the service do not need it.
    pub fn gemini_client(&self) -> Result<GeminiClient> {
        Ok(GeminiClient::from_env()?
            .with_model(&self.model)
            .with_base_url(&self.api_url))
    }
}

/// Platform data directory, or `./.biolife` when none is known.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".biolife"))
}
