use crate::domain::property::PropertyRecord;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 12] = [
    "Title",
    "City",
    "State",
    "Zip",
    "Type",
    "Status",
    "Price",
    "Beds",
    "Baths",
    "Sq Ft",
    "Amenities",
    "Listed",
];

pub fn export_listings_xlsx(records: &[&PropertyRecord]) -> ResultResp {
    let buffer = listings_workbook(records)?;
    xlsx_response(buffer, "properties.xlsx")
}

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

/// Cell values for one record, in `HEADERS` order.
pub fn listing_row(p: &PropertyRecord) -> [Cell; 12] {
    let amenities = p
        .amenities
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    [
        Cell::Text(p.title.clone()),
        Cell::Text(p.address.city.clone()),
        Cell::Text(p.address.state.clone()),
        Cell::Text(p.address.zip_code.clone()),
        Cell::Text(p.property_type.label().to_string()),
        Cell::Text(p.status.label().to_string()),
        Cell::Number(p.price as f64),
        Cell::Number(p.bedrooms_or_zero() as f64),
        Cell::Number(p.bathrooms_or_zero() as f64),
        Cell::Number(p.square_feet.unwrap_or(0) as f64),
        Cell::Text(amenities),
        Cell::Text(p.created_at.format("%Y-%m-%d").to_string()),
    ]
}

/// One row per record, in the order given.
pub fn listing_rows(records: &[&PropertyRecord]) -> Vec<[Cell; 12]> {
    records.iter().map(|p| listing_row(p)).collect()
}

/// One header row, then `listing_rows`.
pub fn listings_workbook(records: &[&PropertyRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, row) in listing_rows(records).iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let written = match cell {
                Cell::Text(text) => worksheet.write_string(r, col as u16, text),
                Cell::Number(n) => worksheet.write_number(r, col as u16, *n),
            };
            written.map_err(|e| {
                ServerError::XlsxError(format!("Failed to write {} in row {}: {}", HEADERS[col], r, e))
            })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
