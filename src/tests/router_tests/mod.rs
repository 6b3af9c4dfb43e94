mod dashboard_tests;
mod export_tests;
mod home_tests;
mod listings_tests;
mod sales_tests;
