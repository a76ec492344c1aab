pub mod calculator;
pub mod calendar;
pub mod clock;
pub mod session;
pub mod state;
