use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn overview_is_the_default_tab() {
    let db = init_test_db();

    let resp = handle(get("/admin-dashboard/sales"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sales Analytics"));
    assert!(body.contains("Growth Rate"));
    assert!(body.contains("Monthly Sales"));
}

#[test]
fn unknown_tab_falls_back_to_overview() {
    let db = init_test_db();
    let body = body_string(handle(get("/admin-dashboard/sales?tab=weekly"), &db).unwrap());
    assert!(body.contains("Growth Rate"));
}

#[test]
fn yearly_tab_lists_every_year() {
    let db = init_test_db();
    let body = body_string(handle(get("/admin-dashboard/sales?tab=yearly"), &db).unwrap());

    for year in ["2020", "2021", "2022", "2023", "2024"] {
        assert!(body.contains(year));
    }
    assert!(body.contains("$351,389"));
}

#[test]
fn price_range_tab_shows_shares() {
    let db = init_test_db();
    let body = body_string(handle(get("/admin-dashboard/sales?tab=price-range"), &db).unwrap());

    assert!(body.contains("Sales by Price Range"));
    assert!(body.contains("Over $1M"));
    assert!(body.contains("30%"));
}
