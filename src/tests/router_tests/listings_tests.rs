use crate::router::{handle, handle_with_page_size};
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn lists_every_property_by_default() {
    let db = init_test_db();

    let resp = handle(get("/properties"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Showing 11 properties"));
    // Nine per page, newest first.
    assert!(body.contains(r#"href="/properties/lag-001""#));
    assert!(!body.contains(r#"href="/properties/abj-002""#));
    assert!(body.contains("page=2"));
}

#[test]
fn second_page_holds_the_oldest_listings() {
    let db = init_test_db();
    let body = body_string(handle(get("/properties?page=2"), &db).unwrap());

    assert!(body.contains("Showing 11 properties"));
    assert!(body.contains(r#"href="/properties/lag-002""#));
    assert!(body.contains(r#"href="/properties/abj-002""#));
    assert!(!body.contains(r#"href="/properties/lag-001""#));
}

#[test]
fn page_size_comes_from_caller() {
    let db = init_test_db();
    let body = body_string(handle_with_page_size(get("/properties"), &db, 20).unwrap());

    assert!(body.contains(r#"href="/properties/abj-002""#));
    assert!(!body.contains("page=2"));
}

#[test]
fn location_search_is_case_insensitive() {
    let db = init_test_db();
    let body = body_string(handle(get("/properties?location=lagos"), &db).unwrap());

    assert!(body.contains("Showing 3 properties"));
    assert!(body.contains(r#"href="/properties/lag-003""#));
    assert!(!body.contains(r#"href="/properties/enu-001""#));
}

#[test]
fn combined_criteria_narrow_together() {
    let db = init_test_db();
    let body = body_string(handle(get("/properties?type=Condo&beds=2"), &db).unwrap());

    assert!(body.contains("Showing 1 property"));
    assert!(body.contains(r#"href="/properties/lag-003""#));
}

#[test]
fn price_label_is_shown_but_not_applied() {
    let db = init_test_db();
    let body = body_string(handle(get("/properties?price=Over+%241M"), &db).unwrap());

    assert!(body.contains("Showing 11 properties"));
    assert!(body.contains("is not applied"));
}

#[test]
fn unknown_type_label_is_ignored() {
    let db = init_test_db();
    let body = body_string(handle(get("/properties?type=Castle"), &db).unwrap());
    assert!(body.contains("Showing 11 properties"));
}

#[test]
fn empty_result_shows_empty_state() {
    let db = init_test_db();
    let body = body_string(handle(get("/properties?location=zzzz"), &db).unwrap());

    assert!(body.contains("Showing 0 properties"));
    assert!(body.contains("No properties found"));
}

#[test]
fn list_view_switches_layout() {
    let db = init_test_db();
    let body = body_string(handle(get("/properties?view=list"), &db).unwrap());
    assert!(body.contains(r#"<div class="list">"#));
}

#[test]
fn detail_page_shows_property() {
    let db = init_test_db();

    let resp = handle(get("/properties/lag-001"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Luxury Penthouse in Ikoyi"));
    assert!(body.contains("$1,450,000"));
    assert!(body.contains("5 Baths"));
    assert!(body.contains("Amenities"));
}

#[test]
fn missing_property_is_not_found() {
    let db = init_test_db();
    let err = handle(get("/properties/does-not-exist"), &db).err().expect("expected an error");
    assert_eq!(err.status(), 404);
}

#[test]
fn location_search_is_not_trimmed() {
    let db = init_test_db();
    let body = body_string(handle(get("/properties?location=+lagos"), &db).unwrap());

    assert!(body.contains("Showing 0 properties"));
    assert!(body.contains(r#"value=" lagos""#));
}
