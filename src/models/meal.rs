use serde::{Deserialize, Deserializer, Serialize};

/// One meal section of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
}

/// The four meal slots of a daily plan, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    /// JSON key of this slot in the plan object.
    pub fn key(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }

    /// Section title the generator is instructed to use.
    pub fn title(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Desjejum",
            MealSlot::Lunch => "Almoço",
            MealSlot::Snack => "Lanche",
            MealSlot::Dinner => "Jantar Proteico",
        }
    }
}

/// A generated daily meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub snack: Meal,
    pub dinner: Meal,

    /// Daily calorie target in kcal.
    #[serde(deserialize_with = "deserialize_calories")]
    pub calories: u32,
}

impl MealPlan {
    pub fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Meals paired with their slot, in serving order.
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &Meal)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.meal(slot)))
    }
}

// The generator's schema declares calories as a generic number.
fn deserialize_calories<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "invalid calorie value: {}",
            value
        )));
    }
    Ok(value.round() as u32)
}
