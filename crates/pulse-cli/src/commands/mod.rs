pub mod articles;
pub mod check;
pub mod config;
pub mod dashboard;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod watch;
