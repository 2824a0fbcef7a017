use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::models::{ActivityLevel, Gender, Goal};

/// Bio LIFE — track your weight, BMI and energy needs, and get AI meal plans.
#[derive(Parser, Debug)]
#[command(name = "biolife")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the profile, history and meal plan.
    #[arg(short, long, global = true, env = "BIOLIFE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Gemini model used for meal plans.
    #[arg(long, global = true, env = "BIOLIFE_MODEL")]
    pub model: Option<String>,

    /// Gemini API base URL.
    #[arg(long, global = true, env = "BIOLIFE_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show the BMI gauge, weight chart and history.
    #[default]
    Dashboard,

    /// Show or edit the biometric profile.
    Profile(ProfileArgs),

    /// Record the current weight in the history.
    Record {
        /// Update the profile weight (kg) before recording.
        #[arg(short, long)]
        weight: Option<f64>,
    },

    /// Delete one history entry.
    Delete {
        /// Entry id, as shown on the dashboard.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete the whole history.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the stored meal plan.
    Meals,

    /// Request a new meal plan from the AI service.
    Generate,

    /// Export the history as CSV.
    Export {
        /// Output file.
        #[arg(short, long, default_value = crate::export::EXPORT_FILE_NAME)]
        output: PathBuf,
    },

    /// Clear stored data.
    Reset {
        /// Restore the default profile.
        #[arg(long)]
        profile: bool,

        /// Delete the weight history.
        #[arg(long)]
        history: bool,

        /// Delete the stored meal plan.
        #[arg(long)]
        meals: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Age in years (15-100).
    #[arg(long)]
    pub age: Option<f64>,

    /// Height in cm (120-230).
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kg (30-200).
    #[arg(long)]
    pub weight: Option<f64>,

    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    #[arg(long, value_enum)]
    pub activity: Option<ActivityLevel>,

    #[arg(long, value_enum)]
    pub goal: Option<Goal>,

    /// Edit every field interactively.
    #[arg(short, long)]
    pub interactive: bool,
}

impl ProfileArgs {
    /// True when no field flag was given.
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.height.is_none()
            && self.weight.is_none()
            && self.gender.is_none()
            && self.activity.is_none()
            && self.goal.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_dashboard() {
        let cli = Cli::parse_from(["biolife"]);
        assert!(matches!(cli.command.unwrap_or_default(), Command::Dashboard));
    }

    #[test]
    fn test_profile_flags() {
        let cli = Cli::parse_from([
            "biolife", "profile", "--age", "40", "--gender", "female", "--activity",
            "very-active", "--goal", "lose",
        ]);
        match cli.command {
            Some(Command::Profile(args)) => {
                assert_eq!(args.age, Some(40.0));
                assert_eq!(args.gender, Some(Gender::Female));
                assert_eq!(args.activity, Some(ActivityLevel::VeryActive));
                assert_eq!(args.goal, Some(Goal::Lose));
                assert!(!args.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_export_default_output() {
        let cli = Cli::parse_from(["biolife", "export"]);
        match cli.command {
            Some(Command::Export { output }) => {
                assert_eq!(output, PathBuf::from("biolife_evolucao.csv"))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["biolife", "-vv", "meals"]);
        assert_eq!(cli.verbose, 2);
    }
}
