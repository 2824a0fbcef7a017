use serde::{Deserialize, Serialize};

/// A recorded weight measurement.
///
/// The BMI is captured at recording time and never recomputed, even if the
/// profile height changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Time-derived identifier (epoch milliseconds).
    pub id: String,

    /// Display date, `dd/mm`.
    pub date: String,

    /// Weight in kilograms.
    pub weight: f64,

    pub bmi: f64,
}

impl WeightEntry {
    pub fn new(id: String, date: String, weight: f64, bmi: f64) -> Self {
        Self {
            id,
            date,
            weight,
            bmi,
        }
    }

    /// Split the display date into its (day, month) parts.
    pub fn day_month(&self) -> (&str, &str) {
        self.date.split_once('/').unwrap_or((self.date.as_str(), ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_month() {
        let entry = WeightEntry::new("1".to_string(), "07/03".to_string(), 70.0, 22.9);
        assert_eq!(entry.day_month(), ("07", "03"));

        let odd = WeightEntry::new("2".to_string(), "hoje".to_string(), 70.0, 22.9);
        assert_eq!(odd.day_month(), ("hoje", ""));
    }
}
