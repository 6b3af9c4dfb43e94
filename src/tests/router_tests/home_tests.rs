use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn home_page_renders_sections() {
    let db = init_test_db();

    let resp = handle(get("/"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Find Your Dream Home"));
    assert!(body.contains("Market Trends"));
    assert!(body.contains("What Our Clients Say"));
    assert!(body.contains(r#"action="/properties""#));
    assert!(body.contains("/properties?location=Calabar"));
}

#[test]
fn home_page_lists_featured_newest_first() {
    let db = init_test_db();
    let body = body_string(handle(get("/"), &db).unwrap());

    // Every featured seed record is linked, and nothing that isn't featured.
    assert!(body.contains("/properties/enu-001"));
    assert!(body.contains("/properties/cal-001"));
    assert!(body.contains("/properties/lag-001"));
    assert!(!body.contains("/properties/abj-002"));
}

#[test]
fn testimonial_fragment_wraps_index() {
    let db = init_test_db();

    let first = body_string(handle(get("/testimonials?index=0"), &db).unwrap());
    let wrapped = body_string(handle(get("/testimonials?index=3"), &db).unwrap());
    assert_eq!(first, wrapped);
    assert!(!first.contains("<html"));
    assert!(first.contains(r#"id="testimonial-slide""#));
}

#[test]
fn unknown_path_is_not_found() {
    let db = init_test_db();

    let err = handle(get("/nope"), &db).err().expect("expected an error");
    assert_eq!(err.status(), 404);

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Not Found"));
}

#[test]
fn non_get_is_not_found() {
    let db = init_test_db();
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/properties")
        .body(astra::Body::empty())
        .unwrap();

    assert!(handle(req, &db).is_err());
}

#[test]
fn home_page_opens_requested_testimonial() {
    let db = init_test_db();
    let body = body_string(handle(get("/?testimonial=1"), &db).unwrap());
    assert!(body.contains(crate::data::TESTIMONIALS[1].name));
}

#[test]
fn serves_stylesheet() {
    let db = init_test_db();

    let resp = handle(get("/static/main.css"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(".property-card"));

    assert!(handle(get("/static/missing.js"), &db).is_err());
}
