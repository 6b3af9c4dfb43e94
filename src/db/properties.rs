// src/db/properties.rs
use crate::db::connection::Database;
use crate::db::source::{PropertyQuery, PropertySource};
use crate::domain::property::{Address, ListingStatus, PropertyRecord, PropertyType};
use crate::errors::ServerError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Type, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::de::DeserializeOwned;

const SELECT_COLUMNS: &str = r#"
    select
        id, title, price, street, city, state, zip_code, property_type, status,
        bedrooms, bathrooms, square_feet, amenities, images, featured,
        description, created_at
    from properties
"#;

/// Listings stored in the `properties` table.
#[derive(Clone, Debug)]
pub struct SqlitePropertySource {
    db: Database,
}

impl SqlitePropertySource {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl PropertySource for SqlitePropertySource {
    fn fetch_properties(&self, query: &PropertyQuery) -> Result<Vec<PropertyRecord>, ServerError> {
        let sql = if query.featured_only {
            format!("{SELECT_COLUMNS} where featured = 1 order by rowid")
        } else {
            format!("{SELECT_COLUMNS} order by rowid")
        };

        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

            let rows = stmt
                .query_map([], map_row)
                .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r.map_err(|e| ServerError::DbError(format!("Row decode failed: {e}")))?);
            }
            Ok(out)
        })
    }

    fn find_property(&self, id: &str) -> Result<Option<PropertyRecord>, ServerError> {
        self.db.with_conn(|conn| {
            conn.query_row(&format!("{SELECT_COLUMNS} where id = ?1"), params![id], map_row)
                .optional()
                .map_err(|e| ServerError::DbError(format!("Lookup of {id} failed: {e}")))
        })
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<PropertyRecord> {
    Ok(PropertyRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        price: row.get(2)?,
        address: Address {
            street: row.get(3)?,
            city: row.get(4)?,
            state: row.get(5)?,
            zip_code: row.get(6)?,
        },
        property_type: row.get(7)?,
        status: row.get(8)?,
        bedrooms: row.get(9)?,
        bathrooms: row.get(10)?,
        square_feet: row.get(11)?,
        amenities: json_column(row, 12)?,
        images: json_column(row, 13)?,
        featured: row.get(14)?,
        description: row.get(15)?,
        created_at: row.get(16)?,
    })
}

// Amenities and images are stored as JSON arrays in TEXT columns.
fn json_column<T: DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub fn insert_property(conn: &Connection, p: &PropertyRecord) -> Result<(), ServerError> {
    let amenities = serde_json::to_string(&p.amenities)
        .map_err(|e| ServerError::DbError(format!("Encode amenities failed: {e}")))?;
    let images = serde_json::to_string(&p.images)
        .map_err(|e| ServerError::DbError(format!("Encode images failed: {e}")))?;

    conn.execute(
        r#"
        insert into properties (
            id, title, price, street, city, state, zip_code, property_type, status,
            bedrooms, bathrooms, square_feet, amenities, images, featured,
            description, created_at
        )
        values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
        "#,
        params![
            p.id,
            p.title,
            p.price,
            p.address.street,
            p.address.city,
            p.address.state,
            p.address.zip_code,
            p.property_type,
            p.status,
            p.bedrooms,
            p.bathrooms,
            p.square_feet,
            amenities,
            images,
            p.featured,
            p.description,
            p.created_at,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("Insert of {} failed: {e}", p.id)))?;

    Ok(())
}

pub fn count_properties(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from properties", [], |row| row.get(0))
        .map_err(|e| ServerError::DbError(format!("Count failed: {e}")))
}

impl ToSql for PropertyType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for PropertyType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

impl ToSql for ListingStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for ListingStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}
