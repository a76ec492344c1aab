pub mod earnings;
pub mod projection;
pub mod summary;
