use crate::errors::AppResult;
use crate::models::WorkDayRecord;
use std::path::Path;

pub const CSV_HEADERS: [&str; 9] = [
    "Date",
    "Jour",
    "Heure Début",
    "Heure Fin",
    "Durée",
    "Gains Nets (€)",
    "Taux Net (€/h)",
    "Gains Bruts (€)",
    "Taux Brut (€/h)",
];

/// Weekday column; filled in by whoever consumes the file.
const WEEKDAY_PLACEHOLDER: &str = "N/A";

/// Semicolon-separated, one row per record, header first.
pub(super) fn write_csv(path: &Path, records: &[&WorkDayRecord]) -> AppResult<()> {
    let mut wtr = ::csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)?;

    wtr.write_record(CSV_HEADERS)?;

    for r in records {
        wtr.write_record(&[
            r.date.clone(),
            WEEKDAY_PLACEHOLDER.to_string(),
            r.start_time.clone(),
            r.end_time.clone(),
            r.duration_display.clone(),
            format!("{:.2}", r.net_earning),
            format!("{:.2}", r.net_rate),
            format!("{:.2}", r.gross_earning),
            format!("{:.2}", r.gross_rate),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
