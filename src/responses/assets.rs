// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const MAIN_CSS: &str = include_str!("../../static/main.css");
const PLACEHOLDER_SVG: &str = include_str!("../../static/placeholder.svg");

/// Serves the assets compiled into the binary. `name` is the path below
/// `/static/`.
pub fn asset_response(name: &str) -> ResultResp {
    let (body, content_type) = match name {
        "main.css" => (MAIN_CSS, mime::TEXT_CSS_UTF_8.as_ref()),
        "placeholder.svg" => (PLACEHOLDER_SVG, mime::IMAGE_SVG.as_ref()),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
