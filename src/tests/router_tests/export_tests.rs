use crate::router::handle;
use crate::tests::utils::{body_bytes, body_string, get, init_test_db};

#[test]
fn exports_filtered_view_as_xlsx() {
    let db = init_test_db();

    let resp = handle(get("/properties/export.xlsx?location=Lagos"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("properties.xlsx"));

    let bytes = body_bytes(resp);
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn api_returns_count_and_sorted_records() {
    let db = init_test_db();

    let resp = handle(get("/api/properties?status=For+Rent&sort=price_asc"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["count"], 2);

    let ids: Vec<&str> = json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["cal-003", "enu-002"]);
}

#[test]
fn api_unknown_sort_keeps_storage_order() {
    let db = init_test_db();

    let body = body_string(handle(get("/api/properties?sort=random&location=Enugu"), &db).unwrap());
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    let ids: Vec<&str> = json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["enu-001", "enu-002", "enu-003"]);
}
