use thiserror::Error;

/// Message shown to the user whenever a meal plan cannot be generated.
pub const MEAL_PLAN_FAILURE_MESSAGE: &str = "Erro ao conectar com a IA. Verifique sua conexão.";

#[derive(Debug, Error)]
pub enum BioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Stored data in slot '{key}' is unreadable: {source}")]
    CorruptSlot {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),

    #[error("Meal plan service returned status {status}: {message}")]
    ServiceStatus { status: u16, message: String },

    #[error("Meal plan service returned no text")]
    EmptyResponse,

    #[error("A meal plan request is already in progress")]
    RequestInFlight,

    #[error("{}", MEAL_PLAN_FAILURE_MESSAGE)]
    MealPlanUnavailable,
}

impl BioError {
    /// Whether this came from the meal-plan service or its reply, as opposed
    /// to local storage, configuration or request bookkeeping.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            BioError::Http(_)
                | BioError::Json(_)
                | BioError::ServiceStatus { .. }
                | BioError::EmptyResponse
        )
    }
}

pub type Result<T> = std::result::Result<T, BioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_failures() {
        let status = BioError::ServiceStatus {
            status: 503,
            message: "unavailable".to_string(),
        };
        let parse = BioError::from(serde_json::from_str::<u32>("x").unwrap_err());

        assert!(status.is_service_failure());
        assert!(parse.is_service_failure());
        assert!(BioError::EmptyResponse.is_service_failure());
    }

    #[test]
    fn test_local_failures_are_not_service_failures() {
        let io = BioError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"));

        assert!(!io.is_service_failure());
        assert!(!BioError::RequestInFlight.is_service_failure());
        assert!(!BioError::MissingApiKey("GEMINI_API_KEY").is_service_failure());
        assert!(!BioError::InvalidInput("x".to_string()).is_service_failure());
    }
}
