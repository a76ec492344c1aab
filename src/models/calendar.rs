use super::work_day::WorkDayRecord;

/// Classification of one grid position of the month calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    Blank,
    Normal,
    Today,
    FullDay,
    PartialDay,
}

impl DayClass {
    pub fn label(&self) -> &'static str {
        match self {
            DayClass::Blank => "blank",
            DayClass::Normal => "normal",
            DayClass::Today => "today",
            DayClass::FullDay => "full",
            DayClass::PartialDay => "partial",
        }
    }
}

/// One derived calendar cell; borrows the history it was projected from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarCell<'a> {
    pub day: Option<u32>,
    pub class: DayClass,
    pub record: Option<&'a WorkDayRecord>,
}

impl CalendarCell<'_> {
    pub fn blank() -> Self {
        Self {
            day: None,
            class: DayClass::Blank,
            record: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.class == DayClass::Blank
    }
}
