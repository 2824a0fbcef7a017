pub mod client;
pub mod prompt;

use tracing::{info, warn};

use crate::error::Result;
use crate::metrics::target_calories;
use crate::models::{MealPlan, UserProfile};
use crate::state::{AppState, KeyValueStore};

pub use client::{GeminiClient, MealPlanService, DEFAULT_MODEL, GEMINI_API_KEY_ENV};
pub use prompt::{build_prompt, meal_plan_schema, parse_meal_plan};

/// Turns a profile into a generated meal plan using a [`MealPlanService`].
pub struct MealPlanRequester<S> {
    service: S,
}

impl<S: MealPlanService> MealPlanRequester<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// One attempt, no retry.
    pub async fn request(&self, profile: &UserProfile) -> Result<MealPlan> {
        let target = target_calories(profile);
        let prompt = build_prompt(profile, target);
        info!(target_calories = target, goal = %profile.goal, "requesting meal plan");

        let text = self.service.generate(&prompt, &meal_plan_schema()).await?;
        let plan = parse_meal_plan(&text)?;

        let odd = prompt::slots_with_unexpected_item_count(&plan);
        if !odd.is_empty() {
            warn!(slots = ?odd, "meal plan has item counts outside requested bounds");
        }

        Ok(plan)
    }
}

/// Drive the request state machine on `state`: begin, call the service, settle.
pub async fn refresh_meal_plan<K, S>(
    state: &mut AppState<K>,
    requester: &MealPlanRequester<S>,
) -> Result<()>
where
    K: KeyValueStore,
    S: MealPlanService,
{
    let ticket = state.begin_meal_plan_request()?;
    let profile = state.profile().clone();
    let outcome = requester.request(&profile).await;
    state.finish_meal_plan_request(ticket, outcome)
}
