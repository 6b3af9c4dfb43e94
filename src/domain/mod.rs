pub mod format;
pub mod market;
pub mod notifications;
pub mod paging;
pub mod property;
pub mod query;
pub mod sales;
pub mod ui_state;
