pub mod limit;
pub mod style;
