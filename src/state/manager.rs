use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::error::{BioError, Result};
use crate::metrics::calculate_bmi;
use crate::models::{Goal, MealPlan, ProfileField, UserProfile, WeightEntry};
use crate::state::persistence::{
    self, KeyValueStore, HISTORY_KEY, MEAL_PLAN_KEY, PROFILE_KEY,
};

/// Screen currently presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Profile,
    Meals,
}

/// Lifecycle of the meal-plan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Proof that a meal-plan request was started. Only one can exist at a time.
#[must_use = "a started request must be finished"]
#[derive(Debug)]
pub struct RequestTicket {
    _private: (),
}

/// Which storage slots to clear in [`AppState::reset`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetScope {
    pub profile: bool,
    pub history: bool,
    pub meal_plan: bool,
}

impl ResetScope {
    pub fn is_empty(&self) -> bool {
        !self.profile && !self.history && !self.meal_plan
    }

    /// Remove the selected slots straight from the store.
    ///
    /// Works without loading the state, so an unreadable slot can still be
    /// cleared.
    pub fn apply<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        for (selected, key) in [
            (self.profile, PROFILE_KEY),
            (self.history, HISTORY_KEY),
            (self.meal_plan, MEAL_PLAN_KEY),
        ] {
            if selected {
                store.remove(key)?;
            }
        }
        info!(scope = ?self, "storage reset");
        Ok(())
    }
}

/// Owns the profile, weight history and meal plan, and writes every accepted
/// change back to the key-value store.
pub struct AppState<S: KeyValueStore> {
    store: S,
    profile: UserProfile,
    /// Newest first.
    history: Vec<WeightEntry>,
    meal_plan: Option<MealPlan>,
    view: View,
    request: RequestStatus,
}

impl<S: KeyValueStore> AppState<S> {
    /// Load all entities from the store, falling back to defaults.
    pub fn load(store: S) -> Result<Self> {
        let profile = persistence::load_profile(&store)?;
        let history = persistence::load_history(&store)?;
        let meal_plan = persistence::load_meal_plan(&store)?;

        debug!(
            entries = history.len(),
            has_meal_plan = meal_plan.is_some(),
            "state loaded"
        );

        Ok(Self {
            store,
            profile,
            history,
            meal_plan,
            view: View::default(),
            request: RequestStatus::default(),
        })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn history(&self) -> &[WeightEntry] {
        &self.history
    }

    pub fn meal_plan(&self) -> Option<&MealPlan> {
        self.meal_plan.as_ref()
    }

    pub fn active_view(&self) -> View {
        self.view
    }

    pub fn request_status(&self) -> RequestStatus {
        self.request
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// BMI for the current profile.
    pub fn current_bmi(&self) -> f64 {
        calculate_bmi(self.profile.weight, self.profile.height)
    }

    /// Replace the profile wholesale.
    pub fn update_profile(&mut self, profile: UserProfile) -> Result<()> {
        self.profile = profile;
        persistence::save_profile(&mut self.store, &self.profile)
    }

    /// Set one numeric field, clamped to its bounds.
    pub fn set_field(&mut self, field: ProfileField, value: f64) -> Result<()> {
        let mut profile = self.profile.clone();
        field.set(&mut profile, value)?;
        self.update_profile(profile)
    }

    pub fn set_goal(&mut self, goal: Goal) -> Result<()> {
        let profile = UserProfile {
            goal,
            ..self.profile.clone()
        };
        self.update_profile(profile)
    }

    /// Record the current profile weight as a new history entry.
    pub fn add_weight_entry(&mut self) -> Result<&WeightEntry> {
        self.add_weight_entry_at(Local::now())
    }

    pub(crate) fn add_weight_entry_at(&mut self, now: DateTime<Local>) -> Result<&WeightEntry> {
        let bmi = calculate_bmi(self.profile.weight, self.profile.height);
        let id = self.next_entry_id(now.timestamp_millis());
        let date = now.format("%d/%m").to_string();

        let entry = WeightEntry::new(id, date, self.profile.weight, bmi);
        info!(id = %entry.id, weight = entry.weight, bmi = entry.bmi, "weight recorded");

        self.history.insert(0, entry);
        persistence::save_history(&mut self.store, &self.history)?;
        self.view = View::Dashboard;
        Ok(&self.history[0])
    }

    /// Millisecond timestamp id, bumped past any existing id so ids stay unique.
    fn next_entry_id(&self, now_ms: i64) -> String {
        let latest = self
            .history
            .iter()
            .filter_map(|e| e.id.parse::<i64>().ok())
            .max();

        match latest {
            Some(latest) if latest >= now_ms => (latest + 1).to_string(),
            _ => now_ms.to_string(),
        }
    }

    /// Remove a single entry. Returns false (and writes nothing) if absent.
    pub fn delete_history_entry(&mut self, id: &str) -> Result<bool> {
        let before = self.history.len();
        self.history.retain(|e| e.id != id);

        if self.history.len() == before {
            debug!(id, "no history entry to delete");
            return Ok(false);
        }

        persistence::save_history(&mut self.store, &self.history)?;
        info!(id, "history entry deleted");
        Ok(true)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        let removed = self.history.len();
        self.history.clear();
        persistence::save_history(&mut self.store, &self.history)?;
        info!(removed, "history cleared");
        Ok(())
    }

    /// Move the meal-plan request from idle to pending.
    ///
    /// Fails with [`BioError::RequestInFlight`] while another request is pending.
    pub fn begin_meal_plan_request(&mut self) -> Result<RequestTicket> {
        if self.request == RequestStatus::Pending {
            return Err(BioError::RequestInFlight);
        }
        self.request = RequestStatus::Pending;
        Ok(RequestTicket { _private: () })
    }

    /// Settle a pending request. A successful plan replaces the stored one and
    /// switches to the meal-plan view; a failure leaves the old plan in place.
    pub fn finish_meal_plan_request(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<MealPlan>,
    ) -> Result<()> {
        let RequestTicket { _private: () } = ticket;

        match outcome {
            Ok(plan) => {
                if let Err(e) = persistence::save_meal_plan(&mut self.store, &plan) {
                    self.request = RequestStatus::Failed;
                    return Err(e);
                }
                info!(calories = plan.calories, "meal plan stored");
                self.meal_plan = Some(plan);
                self.view = View::Meals;
                self.request = RequestStatus::Succeeded;
                Ok(())
            }
            Err(e) => {
                self.request = RequestStatus::Failed;
                warn!(error = %e, "meal plan request failed");
                Err(e)
            }
        }
    }

    /// Clear the selected storage slots and restore their defaults.
    pub fn reset(&mut self, scope: ResetScope) -> Result<()> {
        scope.apply(&mut self.store)?;
        if scope.profile {
            self.profile = UserProfile::default();
        }
        if scope.history {
            self.history.clear();
        }
        if scope.meal_plan {
            self.meal_plan = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Meal;
    use crate::state::persistence::MemoryStore;
    use chrono::TimeZone;

    fn sample_plan(calories: u32) -> MealPlan {
        let meal = Meal {
            title: "Almoço".to_string(),
            description: "Prato feito".to_string(),
            items: vec!["Arroz".to_string(), "Feijão".to_string(), "Frango".to_string()],
        };
        MealPlan {
            breakfast: meal.clone(),
            lunch: meal.clone(),
            snack: meal.clone(),
            dinner: meal,
            calories,
        }
    }

    /// Reads like an empty store, refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_add_weight_entry_prepends_with_frozen_bmi() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();
        state.navigate(View::Profile);

        let entry = state.add_weight_entry_at(fixed_time()).unwrap().clone();
        assert_eq!(entry.bmi, 22.9);
        assert_eq!(entry.weight, 70.0);
        assert_eq!(entry.date, "07/03");
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.active_view(), View::Dashboard);

        // A later height change does not touch recorded BMIs.
        state.set_field(ProfileField::Height, 180.0).unwrap();
        assert_eq!(state.history()[0].bmi, 22.9);
    }

    #[test]
    fn test_entry_ids_unique_within_same_millisecond() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();
        let first = state.add_weight_entry_at(fixed_time()).unwrap().id.clone();
        let second = state.add_weight_entry_at(fixed_time()).unwrap().id.clone();

        assert_ne!(first, second);
        assert_eq!(state.history()[0].id, second);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();
        state.add_weight_entry_at(fixed_time()).unwrap();

        assert!(!state.delete_history_entry("does-not-exist").unwrap());
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_delete_and_clear_persist() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();
        let id = state.add_weight_entry_at(fixed_time()).unwrap().id.clone();
        state.add_weight_entry_at(fixed_time()).unwrap();

        assert!(state.delete_history_entry(&id).unwrap());
        assert_eq!(persistence::load_history(state.store()).unwrap().len(), 1);

        state.clear_history().unwrap();
        assert!(persistence::load_history(state.store()).unwrap().is_empty());
    }

    #[test]
    fn test_profile_mutations_persist() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();
        state.set_goal(Goal::Lose).unwrap();
        state.set_field(ProfileField::Weight, 82.0).unwrap();

        let stored = persistence::load_profile(state.store()).unwrap();
        assert_eq!(stored.goal, Goal::Lose);
        assert_eq!(stored.weight, 82.0);
    }

    #[test]
    fn test_second_request_rejected_while_pending() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();
        let ticket = state.begin_meal_plan_request().unwrap();
        assert_eq!(state.request_status(), RequestStatus::Pending);

        assert!(matches!(
            state.begin_meal_plan_request(),
            Err(BioError::RequestInFlight)
        ));

        state
            .finish_meal_plan_request(ticket, Ok(sample_plan(2000)))
            .unwrap();
        assert_eq!(state.request_status(), RequestStatus::Succeeded);
        assert!(state.begin_meal_plan_request().is_ok());
    }

    #[test]
    fn test_successful_request_stores_plan_and_switches_view() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();
        let ticket = state.begin_meal_plan_request().unwrap();
        state
            .finish_meal_plan_request(ticket, Ok(sample_plan(1800)))
            .unwrap();

        assert_eq!(state.active_view(), View::Meals);
        assert_eq!(state.meal_plan().map(|p| p.calories), Some(1800));
        assert_eq!(
            persistence::load_meal_plan(state.store()).unwrap(),
            Some(sample_plan(1800))
        );
    }

    #[test]
    fn test_failed_request_keeps_previous_plan() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();
        let ticket = state.begin_meal_plan_request().unwrap();
        state
            .finish_meal_plan_request(ticket, Ok(sample_plan(1800)))
            .unwrap();
        state.navigate(View::Dashboard);

        let ticket = state.begin_meal_plan_request().unwrap();
        let result = state.finish_meal_plan_request(ticket, Err(BioError::EmptyResponse));

        assert!(result.is_err());
        assert_eq!(state.request_status(), RequestStatus::Failed);
        assert_eq!(state.active_view(), View::Dashboard);
        assert_eq!(state.meal_plan().map(|p| p.calories), Some(1800));
    }

    #[test]
    fn test_unsaved_plan_is_not_reported_as_success() {
        let mut state = AppState::load(ReadOnlyStore).unwrap();
        let ticket = state.begin_meal_plan_request().unwrap();

        let result = state.finish_meal_plan_request(ticket, Ok(sample_plan(1800)));

        assert!(matches!(result, Err(BioError::Io(_))));
        assert_eq!(state.request_status(), RequestStatus::Failed);
        assert!(state.meal_plan().is_none());
        assert_eq!(state.active_view(), View::Dashboard);
    }

    #[test]
    fn test_set_field_rejects_nan_without_writing() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();

        assert!(matches!(
            state.set_field(ProfileField::Height, f64::NAN),
            Err(BioError::InvalidInput(_))
        ));
        assert_eq!(state.profile().height, 175.0);
        assert!(state.store().get(PROFILE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_reset_scope_clears_unreadable_slot() {
        let mut store = MemoryStore::new();
        store.set(PROFILE_KEY, "{not json").unwrap();
        assert!(matches!(
            AppState::load(store.clone()),
            Err(BioError::CorruptSlot { .. })
        ));

        ResetScope {
            profile: true,
            ..Default::default()
        }
        .apply(&mut store)
        .unwrap();

        let state = AppState::load(store).unwrap();
        assert_eq!(state.profile(), &UserProfile::default());
    }

    #[test]
    fn test_reset_selected_slots() {
        let mut state = AppState::load(MemoryStore::new()).unwrap();
        state.set_goal(Goal::Gain).unwrap();
        state.add_weight_entry_at(fixed_time()).unwrap();

        state
            .reset(ResetScope {
                history: true,
                ..Default::default()
            })
            .unwrap();

        assert!(state.history().is_empty());
        assert_eq!(state.profile().goal, Goal::Gain);
        assert!(state.store().get(HISTORY_KEY).unwrap().is_none());
    }
}
