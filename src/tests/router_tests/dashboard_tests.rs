use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn admin_dashboard_shows_profile_and_notifications() {
    let db = init_test_db();

    let resp = handle(get("/admin-dashboard"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("Adaeze Nwosu"));
    assert!(body.contains("System Update"));
    assert!(body.contains("New Report Available"));
    assert!(body.contains("/admin-dashboard/sales"));
    assert!(body.contains(r#"<span class="badge">3</span>"#));
}

#[test]
fn user_dashboard_falls_back_to_email_name() {
    let db = init_test_db();
    let body = body_string(handle(get("/user-dashboard"), &db).unwrap());

    assert!(body.contains("Welcome back, buyer."));
    assert!(body.contains("buyer@example.ng"));
    assert!(!body.contains("/admin-dashboard/sales"));
    assert!(body.contains("/user-dashboard/profile"));
}

#[test]
fn chrome_state_comes_from_query() {
    let db = init_test_db();
    let body = body_string(
        handle(get("/agent-dashboard?theme=dark&sidebar=closed"), &db).unwrap(),
    );

    assert!(body.contains(r#"class="dashboard dark""#));
    assert!(!body.contains(r#"class="sidebar""#));
    // The theme toggle flips back to light and keeps the sidebar closed.
    assert!(body.contains("/agent-dashboard?theme=light&amp;sidebar=closed"));
}

#[test]
fn unknown_role_is_not_found() {
    let db = init_test_db();
    assert!(handle(get("/guest-dashboard"), &db).is_err());
}

#[test]
fn user_menu_links_resolve() {
    let db = init_test_db();

    let profile = handle(get("/user-dashboard/profile"), &db).expect("Handler failed");
    assert_eq!(profile.status(), 200);
    let body = body_string(profile);
    assert!(body.contains("buyer@example.ng"));
    assert!(body.contains("Your details"));

    let settings = handle(get("/agent-dashboard/settings?theme=dark"), &db).expect("Handler failed");
    assert_eq!(settings.status(), 200);
    let body = body_string(settings);
    assert!(body.contains(r#"class="dashboard dark""#));
    assert!(body.contains("/agent-dashboard/settings?theme=light"));
}

#[test]
fn unknown_account_section_is_not_found() {
    let db = init_test_db();

    let err = handle(get("/user-dashboard/billing"), &db)
        .err()
        .expect("expected an error");
    assert_eq!(err.status(), 404);
    assert!(handle(get("/guest-dashboard/profile"), &db).is_err());
}
