use crate::metrics::{
    bmi_category, calculate_bmr, calculate_tdee, gauge_band, gauge_percentage, target_calories,
    GaugeBand, GAUGE_BMI_MAX, GAUGE_BMI_MIN,
};
use crate::models::{MealPlan, ProfileField, UserProfile, WeightEntry};
use crate::state::{AppState, KeyValueStore, View};

const GAUGE_WIDTH: usize = 40;
const CHART_WIDTH: usize = 30;

/// Render whichever view is active.
pub fn display_view<S: KeyValueStore>(state: &AppState<S>) {
    match state.active_view() {
        View::Dashboard => display_dashboard(state),
        View::Profile => display_profile(state.profile()),
        View::Meals => display_meal_plan(state.meal_plan()),
    }
}

/// One-line BMI dial: colour bands over the gauge range, needle drawn as `|`.
pub fn render_gauge(bmi: f64, width: usize) -> String {
    let width = width.max(2);
    let needle = (gauge_percentage(bmi) / 100.0 * (width - 1) as f64).round() as usize;

    (0..width)
        .map(|i| {
            if i == needle {
                return '|';
            }
            let cell_bmi =
                GAUGE_BMI_MIN + (GAUGE_BMI_MAX - GAUGE_BMI_MIN) * i as f64 / (width - 1) as f64;
            match gauge_band(cell_bmi) {
                GaugeBand::Emerald => '-',
                GaugeBand::Amber => '~',
                GaugeBand::Red => '#',
            }
        })
        .collect()
}

/// Horizontal bar chart of the history, oldest first.
pub fn render_weight_chart(history: &[WeightEntry], width: usize) -> Vec<String> {
    if history.is_empty() {
        return vec!["Sem dados analíticos".to_string()];
    }

    let (min, max) = history
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), e| (lo.min(e.weight), hi.max(e.weight)));
    let (lo, hi) = (min - 1.0, max + 1.0);

    history
        .iter()
        .rev()
        .map(|e| {
            let len = ((e.weight - lo) / (hi - lo) * width as f64).round() as usize;
            format!("{:>5} {:<width$} {}kg", e.date, "█".repeat(len), e.weight, width = width)
        })
        .collect()
}

pub fn display_dashboard<S: KeyValueStore>(state: &AppState<S>) {
    let bmi = state.current_bmi();
    let category = bmi_category(bmi);

    println!();
    println!("=== Bio LIFE ===");
    println!();
    println!("IMC {:.1}  [{}]  {}", bmi, render_gauge(bmi, GAUGE_WIDTH), category.label());
    println!();

    println!("--- Evolução ---");
    for line in render_weight_chart(state.history(), CHART_WIDTH) {
        println!("  {}", line);
    }
    println!();

    display_history(state.history());
}

pub fn display_history(history: &[WeightEntry]) {
    println!("--- Logs de Atividade ---");
    if history.is_empty() {
        println!("  O histórico será gerado aqui.");
        println!();
        return;
    }

    for entry in history {
        let (day, month) = entry.day_month();
        println!(
            "  {}/{}  {:>6}kg  IMC {:<5}  id {}",
            day, month, entry.weight, entry.bmi, entry.id
        );
    }
    println!();
}

pub fn display_profile(profile: &UserProfile) {
    println!();
    println!("=== Biometria ===");
    println!();

    for field in ProfileField::ALL {
        println!(
            "  {:<8} {} {}",
            field.label(),
            field.get(profile),
            field.unit()
        );
    }
    println!("  {:<8} {}", "GÊNERO", profile.gender);
    println!("  {:<8} {}", "ATIVIDADE", profile.activity_level);
    println!("  {:<8} {}", "META", profile.goal);
    println!();

    println!("--- Gasto Energético ---");
    println!("  TMB:          {} kcal", calculate_bmr(profile));
    println!("  GET:          {} kcal", calculate_tdee(profile));
    println!("  Meta diária:  {} kcal", target_calories(profile));
    println!();
}

pub fn display_meal_plan(plan: Option<&MealPlan>) {
    let Some(plan) = plan else {
        println!();
        println!("Nenhum cardápio salvo. Use 'generate' para processar sua dieta.");
        println!();
        return;
    };

    println!();
    println!("=== Cardápio IA ===");
    println!();
    println!("Cálculo calórico diário: {} kcal", plan.calories);

    for (_, meal) in plan.meals() {
        println!();
        println!("--- {} ---", meal.title);
        println!("  {}", meal.description);
        for item in &meal.items {
            println!("  * {}", item);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_needle_position() {
        let low = render_gauge(10.0, 11);
        assert!(low.starts_with('|'));

        let high = render_gauge(45.0, 11);
        assert!(high.ends_with('|'));

        let mid = render_gauge(27.5, 11);
        assert_eq!(mid.chars().position(|c| c == '|'), Some(5));
        assert_eq!(mid.chars().count(), 11);
    }

    #[test]
    fn test_gauge_bands() {
        let gauge = render_gauge(15.0, 26);
        assert!(gauge.contains('-'));
        assert!(gauge.contains('~'));
        assert!(gauge.ends_with('#'));
    }

    #[test]
    fn test_chart_empty() {
        assert_eq!(render_weight_chart(&[], 10), vec!["Sem dados analíticos"]);
    }

    #[test]
    fn test_chart_is_chronological() {
        let history = vec![
            WeightEntry::new("2".to_string(), "08/03".to_string(), 72.0, 23.5),
            WeightEntry::new("1".to_string(), "07/03".to_string(), 70.0, 22.9),
        ];
        let lines = render_weight_chart(&history, 10);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("07/03"));
        assert!(lines[1].starts_with("08/03"));
        assert!(lines[1].matches('█').count() > lines[0].matches('█').count());
    }
}
