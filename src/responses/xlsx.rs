// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Spreadsheet download. Exports follow the query string, so they are
/// never cached.
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    let disposition = format!("attachment; filename=\"{}\"", filename.replace('"', ""));
    let length = buffer.len().to_string();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_MIME)
        .header("Content-Disposition", disposition)
        .header("Content-Length", length)
        .header("Cache-Control", "no-store")
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_download_headers() {
        let resp = xlsx_response(b"PK".to_vec(), "properties.xlsx").unwrap();
        let headers = resp.headers();

        assert_eq!(headers.get("Content-Type").unwrap(), XLSX_MIME);
        assert_eq!(
            headers.get("Content-Disposition").unwrap(),
            "attachment; filename=\"properties.xlsx\""
        );
        assert_eq!(headers.get("Content-Length").unwrap(), "2");
    }
}
