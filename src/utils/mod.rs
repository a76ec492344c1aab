pub mod date;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod table;
pub mod time;
