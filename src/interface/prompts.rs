use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{ActivityLevel, Gender, Goal, ProfileField, UserProfile};

/// Prompt for a numeric profile field, re-asking until it is within bounds.
pub fn prompt_field(field: ProfileField, current: f64) -> Result<f64> {
    let (min, max) = field.bounds();
    let value: f64 = Input::new()
        .with_prompt(format!("{} ({}, {}-{})", field.label(), field.unit(), min, max))
        .default(current)
        .validate_with(move |v: &f64| -> std::result::Result<(), String> {
            if field.contains(*v) {
                Ok(())
            } else {
                Err(format!("Informe um valor entre {} e {}", min, max))
            }
        })
        .interact_text()?;
    Ok(value)
}

fn prompt_choice<T: Copy + PartialEq + ToString>(
    prompt: &str,
    options: &[T],
    current: T,
) -> Result<T> {
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let default = options.iter().position(|o| *o == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

pub fn prompt_gender(current: Gender) -> Result<Gender> {
    prompt_choice("GÊNERO", &Gender::ALL, current)
}

pub fn prompt_activity(current: ActivityLevel) -> Result<ActivityLevel> {
    prompt_choice("NÍVEL DE ATIVIDADE", &ActivityLevel::ALL, current)
}

pub fn prompt_goal(current: Goal) -> Result<Goal> {
    prompt_choice("META DE DESEMPENHO", &Goal::ALL, current)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through every profile field and return the edited profile.
pub fn edit_profile(profile: &UserProfile) -> Result<UserProfile> {
    let mut edited = profile.clone();

    for field in ProfileField::ALL {
        let value = prompt_field(field, field.get(&edited))?;
        field.set(&mut edited, value)?;
    }

    edited.gender = prompt_gender(edited.gender)?;
    edited.activity_level = prompt_activity(edited.activity_level)?;
    edited.goal = prompt_goal(edited.goal)?;

    Ok(edited)
}
