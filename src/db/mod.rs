pub mod connection;
pub mod properties;
pub mod seed;
pub mod source;

pub use connection::{init_db, Database};
pub use properties::SqlitePropertySource;
pub use source::{PropertyQuery, PropertySource};
