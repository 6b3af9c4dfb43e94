pub mod assets;
pub mod errors;
pub mod html;
pub mod json;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use assets::asset_response;
pub use errors::html_error_response;

pub use html::html_response;
pub use json::json_response;
pub use xlsx::xlsx_response;
