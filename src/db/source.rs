// src/db/source.rs
use crate::domain::property::PropertyRecord;
use crate::errors::ServerError;

/// What a page asks the data layer for. Narrowing by user criteria happens
/// afterwards in `domain::query`, never here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyQuery {
    pub featured_only: bool,
}

impl PropertyQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn featured() -> Self {
        Self {
            featured_only: true,
        }
    }
}

/// Where listings come from. Records are returned in storage order.
pub trait PropertySource {
    fn fetch_properties(&self, query: &PropertyQuery) -> Result<Vec<PropertyRecord>, ServerError>;

    fn find_property(&self, id: &str) -> Result<Option<PropertyRecord>, ServerError>;
}

/// Fixed in-memory listings, used by tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<PropertyRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }

    /// Parses the same JSON shape as the seed file.
    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        let records = serde_json::from_str(json)
            .map_err(|e| ServerError::BadRequest(format!("invalid listings JSON: {e}")))?;
        Ok(Self::new(records))
    }
}

impl PropertySource for InMemorySource {
    fn fetch_properties(&self, query: &PropertyQuery) -> Result<Vec<PropertyRecord>, ServerError> {
        Ok(self
            .records
            .iter()
            .filter(|r| !query.featured_only || r.featured)
            .cloned()
            .collect())
    }

    fn find_property(&self, id: &str) -> Result<Option<PropertyRecord>, ServerError> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }
}
