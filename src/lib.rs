pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interface;
pub mod logging;
pub mod mealplan;
pub mod metrics;
pub mod models;
pub mod state;

pub use error::{BioError, Result};
pub use models::{MealPlan, UserProfile, WeightEntry};
pub use state::AppState;
