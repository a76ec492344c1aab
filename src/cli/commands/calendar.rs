use super::parse_month_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::GRID_COLS;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::models::{CalendarCell, DayClass};
use crate::ui::messages::header;
use crate::utils::formatting::format_money;
use ansi_term::{Colour, Style};

const WEEKDAYS: [&str; GRID_COLS] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub fn handle(cmd: &Commands, cfg: &Config, state: &mut AppState) -> AppResult<()> {
    if let Commands::Calendar { month, offset } = cmd {
        if let Some((year, m)) = parse_month_arg(month)? {
            state.set_view(year, m)?;
        }
        let view = state.change_month(*offset)?;

        header(view.title());
        print!("{}", render_grid(&state.view_grid()?));
        println!("{}", legend());

        let summary = state.month_summary(view.year(), view.month());
        println!(
            "\nSessions: {}   Worked: {}   Gross: {}   Net: {}",
            summary.records,
            summary.duration_display(),
            format_money(summary.gross, &cfg.currency),
            format_money(summary.net, &cfg.currency)
        );
    }
    Ok(())
}

fn style_for(class: DayClass) -> Style {
    match class {
        DayClass::Today => Colour::Blue.bold(),
        DayClass::FullDay => Colour::Green.bold(),
        DayClass::PartialDay => Colour::Yellow.bold(),
        DayClass::Normal | DayClass::Blank => Style::new(),
    }
}

/// Weekday header plus one line per week; weeks without any day are skipped.
pub fn render_grid(cells: &[CalendarCell<'_>]) -> String {
    let mut out = WEEKDAYS.join(" ");
    out.push('\n');

    for week in cells.chunks(GRID_COLS) {
        if week.iter().all(CalendarCell::is_blank) {
            continue;
        }
        let line = week
            .iter()
            .map(|cell| match cell.day {
                Some(d) => style_for(cell.class).paint(format!("{d:>2}")).to_string(),
                None => "  ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn legend() -> String {
    [DayClass::FullDay, DayClass::PartialDay, DayClass::Today]
        .iter()
        .map(|c| style_for(*c).paint(format!("■ {}", c.label())).to_string())
        .collect::<Vec<_>>()
        .join("  ")
}
