use crate::data::SEED_PROPERTIES_JSON;
use crate::db::connection::{init_db, Database};
use crate::db::seed::seed_properties_if_empty;
use astra::{Body, Response};
use http::{Method, Request};
use std::fs;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique sqlite path under the system temp dir.
pub fn temp_db_path(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir()
        .join(format!("homepulse_{prefix}_{nanos}.sqlite3"))
        .to_string_lossy()
        .into_owned()
}

/// Temp-file database that deletes its files when dropped.
pub struct TestDb {
    db: Database,
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let path = self.db.path();
        for file in [path.to_string(), format!("{path}-journal"), format!("{path}-wal")] {
            let _ = fs::remove_file(file);
        }
    }
}

/// Fresh database with the production schema, no rows.
pub fn temp_db(prefix: &str) -> TestDb {
    let db = TestDb {
        db: Database::new(temp_db_path(prefix)),
    };

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// Fresh database with the production schema and seed listings.
pub fn init_test_db() -> TestDb {
    let db = temp_db("router");

    seed_properties_if_empty(&db, SEED_PROPERTIES_JSON)
        .unwrap_or_else(|e| panic!("Seeding failed: {e}"));

    db
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("Failed to read body");
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body()
        .reader()
        .read_to_end(&mut body)
        .expect("Failed to read body");
    body
}

#[test]
fn test_db_removes_its_file_on_drop() {
    let db = temp_db("cleanup");
    let path = db.path().to_string();
    db.with_conn(|conn| crate::db::properties::count_properties(conn))
        .unwrap();
    assert!(Path::new(&path).exists());

    drop(db);
    assert!(!Path::new(&path).exists());
}
