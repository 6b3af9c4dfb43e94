pub mod dashboard;
pub mod desktop;
