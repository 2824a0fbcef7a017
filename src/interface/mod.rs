pub mod prompts;
pub mod render;

pub use prompts::{edit_profile, prompt_field, prompt_yes_no};
pub use render::{
    display_dashboard, display_history, display_meal_plan, display_profile, display_view,
};
