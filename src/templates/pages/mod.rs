pub mod account;
pub mod admin_sales;
pub mod dashboard;
pub mod error;
pub mod home;
pub mod listings;
pub mod property;

pub use account::{account_page, AccountSection};
pub use admin_sales::admin_sales_page;
pub use dashboard::{dashboard_page, DashboardVm};
pub use error::error_page;
pub use home::home_page;
pub use listings::listings_page;
pub use property::property_page;
