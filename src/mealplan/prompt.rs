use serde_json::{json, Value};

use crate::error::{BioError, Result};
use crate::models::{MealPlan, MealSlot, UserProfile};

/// Inclusive bounds on items per meal requested from the generator.
pub const MIN_ITEMS_PER_MEAL: usize = 3;
pub const MAX_ITEMS_PER_MEAL: usize = 5;

/// Build the natural-language request for a daily meal plan.
pub fn build_prompt(profile: &UserProfile, target_calories: i32) -> String {
    let titles: Vec<String> = MealSlot::ALL
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            format!(
                "    {}. Para {} use o título: \"{}\"",
                i + 1,
                slot_phrase(*slot),
                slot.title()
            )
        })
        .collect();

    format!(
        "Gere um cardápio diário personalizado (formato JSON) para este perfil brasileiro:\n\
         \x20   - Idade: {age} anos\n\
         \x20   - Gênero: {gender}\n\
         \x20   - Objetivo: {goal}\n\
         \x20   - Nível de Atividade: {activity}\n\
         \x20   - Meta calórica: {target} kcal.\n\
         \n\
         \x20   IMPORTANTE: Você DEVE usar exatamente estes títulos para as seções de refeição:\n\
         {titles}\n\
         \n\
         \x20   Instruções:\n\
         \x20   - Use alimentos saudáveis da culinária brasileira.\n\
         \x20   - Cada refeição deve ter {min} a {max} itens.\n\
         \x20   - Retorne descrições nutricionais focadas em nitidez e clareza.",
        age = profile.age,
        gender = profile.gender,
        goal = profile.goal,
        activity = profile.activity_level,
        target = target_calories,
        titles = titles.join("\n"),
        min = MIN_ITEMS_PER_MEAL,
        max = MAX_ITEMS_PER_MEAL,
    )
}

fn slot_phrase(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Breakfast => "o café da manhã",
        MealSlot::Lunch => "o almoço",
        MealSlot::Snack => "o lanche",
        MealSlot::Dinner => "o jantar",
    }
}

/// Response schema: four meal objects plus a numeric calorie total, all required.
pub fn meal_plan_schema() -> Value {
    let meal = json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "items": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["title", "description", "items"]
    });

    let mut properties = serde_json::Map::new();
    for slot in MealSlot::ALL {
        properties.insert(slot.key().to_string(), meal.clone());
    }
    properties.insert("calories".to_string(), json!({ "type": "NUMBER" }));

    let mut required: Vec<&str> = MealSlot::ALL.iter().map(|s| s.key()).collect();
    required.push("calories");

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required
    })
}

/// Parse the generator's text payload into a meal plan.
pub fn parse_meal_plan(text: &str) -> Result<MealPlan> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BioError::EmptyResponse);
    }
    Ok(serde_json::from_str(text)?)
}

/// Slots whose item count falls outside the requested bounds.
pub fn slots_with_unexpected_item_count(plan: &MealPlan) -> Vec<MealSlot> {
    plan.meals()
        .filter(|(_, meal)| {
            !(MIN_ITEMS_PER_MEAL..=MAX_ITEMS_PER_MEAL).contains(&meal.items.len())
        })
        .map(|(slot, _)| slot)
        .collect()
}
