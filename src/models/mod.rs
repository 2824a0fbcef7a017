mod history;
mod meal;
mod profile;

pub use history::WeightEntry;
pub use meal::{Meal, MealPlan, MealSlot};
pub use profile::{ActivityLevel, Gender, Goal, ProfileField, UserProfile};
