use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::WeightEntry;

/// Default file name for exported history.
pub const EXPORT_FILE_NAME: &str = "biolife_evolucao.csv";

const HEADERS: [&str; 3] = ["Data", "Peso (kg)", "IMC"];

/// Write the history as CSV, one row per entry in stored order.
pub fn write_history_csv<W: Write>(writer: W, history: &[WeightEntry]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADERS)?;
    for entry in history {
        csv.write_record([
            entry.date.clone(),
            entry.weight.to_string(),
            entry.bmi.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Export the history to a CSV file at `path`.
pub fn export_history<P: AsRef<Path>>(path: P, history: &[WeightEntry]) -> Result<()> {
    let file = File::create(path)?;
    write_history_csv(file, history)
}
