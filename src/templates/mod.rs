pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::card;
pub use layouts::dashboard::dashboard_layout;
pub use layouts::desktop::desktop_layout;
