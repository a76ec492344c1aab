//! Application aggregate: rates, punch tracker, history and view month.
//! The CLI (or any other front end) talks only to this type.

use crate::core::calculator::earnings::Earnings;
use crate::core::calculator::projection::Projection;
use crate::core::calculator::summary::{MonthSummary, records_in_month, summarize_month};
use crate::core::calendar::{self, DateIndex, ViewMonth};
use crate::core::clock::Clock;
use crate::core::session::{PunchOutcome, SessionTracker};
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat};
use crate::models::{CalendarCell, RateConfig, WorkDayRecord};
use crate::store::{RecordStore, StoredData};
use chrono::NaiveTime;
use std::path::Path;
use tracing::{info, warn};

/// Result of a punch. The transition always happened; `save_error` tells
/// whether it also reached the disk.
#[derive(Debug)]
pub struct Punch {
    pub outcome: PunchOutcome,
    pub save_error: Option<AppError>,
}

impl Punch {
    pub fn persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

pub struct AppState {
    rates: RateConfig,
    tracker: SessionTracker,
    history: Vec<WorkDayRecord>,
    view: ViewMonth,
    store: RecordStore,
    clock: Box<dyn Clock>,
}

impl AppState {
    /// Load the store and position the view on the clock's current month.
    pub fn open(store: RecordStore, clock: Box<dyn Clock>) -> Self {
        let StoredData {
            config,
            active,
            history,
        } = store.load();
        let view = ViewMonth::containing(clock.today());

        Self {
            rates: config,
            tracker: SessionTracker::resume(active),
            history,
            view,
            store,
            clock,
        }
    }

    fn snapshot(&self) -> StoredData {
        StoredData {
            config: self.rates,
            active: self.tracker.active().copied(),
            history: self.history.clone(),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.store.save(&self.snapshot())
    }

    #[tracing::instrument(skip(self))]
    pub fn toggle(&mut self) -> AppResult<Punch> {
        let outcome = self.tracker.toggle(self.clock.as_ref(), &self.rates)?;

        if let PunchOutcome::PunchedOut(record) = &outcome {
            self.history.insert(0, record.clone());
            info!(date = %record.date, duration = %record.duration_display, "session recorded");
        }

        let save_error = self.save().err();
        if let Some(e) = &save_error {
            warn!(error = %e, "punch kept in memory but not saved");
        }

        Ok(Punch {
            outcome,
            save_error,
        })
    }

    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    pub fn elapsed_display(&self) -> String {
        self.tracker.elapsed_display(self.clock.as_ref())
    }

    pub fn live_earnings(&self) -> Option<Earnings> {
        self.tracker.live_earnings(self.clock.as_ref())
    }

    pub fn projected_until(&self, target: NaiveTime) -> Option<Projection> {
        self.tracker.projected_until(target)
    }

    pub fn rates(&self) -> RateConfig {
        self.rates
    }

    /// Update rates for future punches and save. The open session keeps its snapshot.
    pub fn set_rates(&mut self, gross: Option<f64>, net: Option<f64>) -> AppResult<RateConfig> {
        self.rates = self.rates.with_rates(gross, net)?;
        self.save()?;
        Ok(self.rates)
    }

    pub fn history_snapshot(&self) -> &[WorkDayRecord] {
        &self.history
    }

    pub fn records_on(&self, date: &str) -> Vec<&WorkDayRecord> {
        DateIndex::build(&self.history).all(date).to_vec()
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    pub fn change_month(&mut self, delta: i32) -> AppResult<ViewMonth> {
        self.view = self.view.shifted(delta)?;
        Ok(self.view)
    }

    pub fn set_view(&mut self, year: i32, month: u32) -> AppResult<ViewMonth> {
        self.view = ViewMonth::new(year, month)?;
        Ok(self.view)
    }

    pub fn calendar_grid(&self, year: i32, month: u32) -> AppResult<Vec<CalendarCell<'_>>> {
        calendar::project(year, month, &self.history, self.clock.today())
    }

    pub fn view_grid(&self) -> AppResult<Vec<CalendarCell<'_>>> {
        self.calendar_grid(self.view.year(), self.view.month())
    }

    pub fn month_summary(&self, year: i32, month: u32) -> MonthSummary {
        summarize_month(&self.history, year, month)
    }

    pub fn export_csv(&self, path: &Path) -> AppResult<usize> {
        self.export(path, &ExportFormat::Csv, None)
    }

    /// Write the history (optionally one month of it) to `path`; returns the row count.
    pub fn export(
        &self,
        path: &Path,
        format: &ExportFormat,
        month: Option<ViewMonth>,
    ) -> AppResult<usize> {
        let records: Vec<&WorkDayRecord> = match month {
            Some(m) => records_in_month(&self.history, m.year(), m.month()).collect(),
            None => self.history.iter().collect(),
        };
        export::write(path, format, &records)?;
        Ok(records.len())
    }
}
