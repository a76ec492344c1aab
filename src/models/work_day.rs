use serde::Serialize;

/// A completed session. Built once at punch-out and never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkDayRecord {
    pub date: String,             // local "YYYY-MM-DD" of the punch-in
    pub start_time: String,       // local "HH:MM"
    pub end_time: String,         // local "HH:MM"
    pub start_iso: String,        // UTC "YYYY-MM-DDTHH:MM:SSZ"
    pub end_iso: String,          // UTC "YYYY-MM-DDTHH:MM:SSZ"
    pub duration_display: String, // "<h>h <mm>m"
    pub duration_ms: i64,
    pub gross_earning: f64,
    pub net_earning: f64,
    pub gross_rate: f64,
    pub net_rate: f64,
}

impl WorkDayRecord {
    /// Text fields in on-disk order; used by the store to check they are encodable.
    pub fn text_fields(&self) -> [&str; 6] {
        [
            &self.date,
            &self.start_time,
            &self.end_time,
            &self.start_iso,
            &self.end_iso,
            &self.duration_display,
        ]
    }

    pub fn time_range(&self) -> String {
        format!("{} → {}", self.start_time, self.end_time)
    }
}
