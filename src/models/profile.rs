use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{BioError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Feminino")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
        }
    }
}

/// Activity levels, ordered from least to most active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum ActivityLevel {
    #[serde(rename = "Sedentário")]
    Sedentary,
    #[serde(rename = "Levemente Ativo")]
    LightlyActive,
    #[serde(rename = "Moderadamente Ativo")]
    ModeratelyActive,
    #[serde(rename = "Muito Ativo")]
    VeryActive,
    #[serde(rename = "Atleta / Extremamente Ativo")]
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentário",
            ActivityLevel::LightlyActive => "Levemente Ativo",
            ActivityLevel::ModeratelyActive => "Moderadamente Ativo",
            ActivityLevel::VeryActive => "Muito Ativo",
            ActivityLevel::ExtraActive => "Atleta / Extremamente Ativo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Goal {
    #[serde(rename = "Emagrecer")]
    Lose,
    #[serde(rename = "Manter Peso")]
    Maintain,
    #[serde(rename = "Ganhar Massa")]
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Lose => "Emagrecer",
            Goal::Maintain => "Manter Peso",
            Goal::Gain => "Ganhar Massa",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Gender, ActivityLevel, Goal);

/// The user's biometric profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in whole years.
    pub age: u32,
    pub gender: Gender,
    /// Height in centimetres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::Male,
            height: 175.0,
            weight: 70.0,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::Maintain,
        }
    }
}

/// Numeric profile fields that are edited as bounded sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Age,
    Height,
    Weight,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [ProfileField::Age, ProfileField::Height, ProfileField::Weight];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Age => "IDADE",
            ProfileField::Height => "ALTURA",
            ProfileField::Weight => "PESO",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ProfileField::Age => "anos",
            ProfileField::Height => "cm",
            ProfileField::Weight => "kg",
        }
    }

    /// Inclusive (min, max) bounds.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            ProfileField::Age => (15.0, 100.0),
            ProfileField::Height => (120.0, 230.0),
            ProfileField::Weight => (30.0, 200.0),
        }
    }

    pub fn contains(self, value: f64) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&value)
    }

    pub fn get(self, profile: &UserProfile) -> f64 {
        match self {
            ProfileField::Age => f64::from(profile.age),
            ProfileField::Height => profile.height,
            ProfileField::Weight => profile.weight,
        }
    }

    /// Write `value` into the profile, clamped to the field bounds.
    ///
    /// NaN and infinities are rejected with [`BioError::InvalidInput`] and
    /// leave the profile untouched.
    pub fn set(self, profile: &mut UserProfile, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(BioError::InvalidInput(format!(
                "{} must be a number, got {}",
                self.label(),
                value
            )));
        }

        let (min, max) = self.bounds();
        let value = value.clamp(min, max);
        match self {
            ProfileField::Age => profile.age = value.round() as u32,
            ProfileField::Height => profile.height = value,
            ProfileField::Weight => profile.weight = value,
        }
        Ok(())
    }
}
