use clap::Parser;
use tracing::{debug, warn};

use biolife_rs::cli::{Cli, Command, ProfileArgs};
use biolife_rs::config::Config;
use biolife_rs::error::{BioError, Result};
use biolife_rs::export::export_history;
use biolife_rs::interface::{display_history, display_view, edit_profile, prompt_yes_no};
use biolife_rs::logging::init_logging;
use biolife_rs::mealplan::{refresh_meal_plan, MealPlanRequester};
use biolife_rs::models::ProfileField;
use biolife_rs::state::{AppState, FileStore, ResetScope, View};

type State = AppState<FileStore>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from_cli(&cli);
    debug!(data_dir = %config.data_dir.display(), model = %config.model, "configuration resolved");

    let mut store = FileStore::open(&config.data_dir)?;

    let command = cli.command.unwrap_or_default();
    let mut state = match command {
        Command::Reset {
            profile,
            history,
            meals,
        } => return cmd_reset(&mut store, ResetScope { profile, history, meal_plan: meals }),
        _ => AppState::load(store)?,
    };

    match command {
        Command::Dashboard => state.navigate(View::Dashboard),
        Command::Profile(args) => cmd_profile(&mut state, args)?,
        Command::Record { weight } => cmd_record(&mut state, weight)?,
        Command::Delete { id, yes } => cmd_delete(&mut state, &id, yes)?,
        Command::Clear { yes } => cmd_clear(&mut state, yes)?,
        Command::Meals => state.navigate(View::Meals),
        Command::Generate => cmd_generate(&mut state, &config).await?,
        Command::Export { output } => {
            export_history(&output, state.history())?;
            println!("Histórico exportado para {}", output.display());
            return Ok(());
        }
        // Handled before loading.
        Command::Reset { .. } => return Ok(()),
    }

    display_view(&state);
    Ok(())
}

/// Apply profile flags, or edit interactively when asked.
fn cmd_profile(state: &mut State, args: ProfileArgs) -> Result<()> {
    state.navigate(View::Profile);

    if args.interactive {
        let edited = edit_profile(state.profile())?;
        return state.update_profile(edited);
    }

    if args.is_empty() {
        return Ok(());
    }

    let mut profile = state.profile().clone();
    for (field, value) in [
        (ProfileField::Age, args.age),
        (ProfileField::Height, args.height),
        (ProfileField::Weight, args.weight),
    ] {
        if let Some(value) = value {
            field.set(&mut profile, value)?;
            if !field.contains(value) {
                let (min, max) = field.bounds();
                warn!(field = field.label(), value, min, max, "value clamped to range");
            }
        }
    }
    if let Some(gender) = args.gender {
        profile.gender = gender;
    }
    if let Some(activity) = args.activity {
        profile.activity_level = activity;
    }
    if let Some(goal) = args.goal {
        profile.goal = goal;
    }

    state.update_profile(profile)
}

fn cmd_record(state: &mut State, weight: Option<f64>) -> Result<()> {
    if let Some(weight) = weight {
        state.set_field(ProfileField::Weight, weight)?;
    }
    let entry = state.add_weight_entry()?;
    println!("Registro gravado: {}kg, IMC {}", entry.weight, entry.bmi);
    Ok(())
}

fn cmd_delete(state: &mut State, id: &str, yes: bool) -> Result<()> {
    state.navigate(View::Dashboard);

    if !yes && !prompt_yes_no("Deseja remover este registro do histórico?", false)? {
        return Ok(());
    }

    if !state.delete_history_entry(id)? {
        println!("Nenhum registro com id {}.", id);
    }
    Ok(())
}

fn cmd_clear(state: &mut State, yes: bool) -> Result<()> {
    state.navigate(View::Dashboard);

    if state.history().is_empty() {
        display_history(state.history());
        return Ok(());
    }

    if !yes
        && !prompt_yes_no(
            "ATENÇÃO: Isso apagará TODOS os dados do histórico. Continuar?",
            false,
        )?
    {
        return Ok(());
    }

    state.clear_history()
}

async fn cmd_generate(state: &mut State, config: &Config) -> Result<()> {
    let client = config.gemini_client()?;
    let requester = MealPlanRequester::new(client);

    println!("Processando dieta...");
    refresh_meal_plan(state, &requester).await.map_err(|e| {
        if e.is_service_failure() {
            warn!(error = %e, "meal plan generation failed");
            BioError::MealPlanUnavailable
        } else {
            e
        }
    })
}

/// Clear slots without loading them first, so unreadable data can be removed.
fn cmd_reset(store: &mut FileStore, scope: ResetScope) -> Result<()> {
    if scope.is_empty() {
        println!("Informe ao menos uma opção:");
        println!("  --profile   Restaura o perfil padrão");
        println!("  --history   Apaga o histórico de peso");
        println!("  --meals     Apaga o cardápio salvo");
        return Ok(());
    }

    scope.apply(store)?;
    println!("Dados apagados.");
    Ok(())
}
