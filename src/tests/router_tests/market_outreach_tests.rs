use crate::errors::CrmError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, state_with_mailer, test_state};

#[test]
fn market_page_offers_the_search_form() {
    let state = test_state();
    let resp = handle(get("/market"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Search Comparable Listings"));
}

#[test]
fn search_lists_all_sample_dealerships() {
    let state = test_state();
    let resp = handle(
        post_form("/market/search", "make=Honda&model=Civic&year=2014&max_price=0"),
        &state,
    )
    .expect("Failed to handle request");

    let body = body_string(resp);
    assert!(body.contains("Results for 2014 Honda Civic"));
    for dealership in [
        "Auto Town LA",
        "Pacific Auto Center",
        "Riverside Auto Sales",
        "National AutoMart",
        "Desert Cars Phoenix",
        "Vegas Value Motors",
    ] {
        assert!(body.contains(dealership), "missing {dealership}");
    }
}

#[test]
fn search_respects_the_price_cap() {
    let state = test_state();
    let resp = handle(
        post_form(
            "/market/search",
            "make=Honda&model=Civic&year=2014&max_price=6000",
        ),
        &state,
    )
    .unwrap();

    let body = body_string(resp);
    // 6200, 6350, and 6100 listings are over the cap.
    assert!(!body.contains("Auto Town LA"));
    assert!(!body.contains("National AutoMart"));
    assert!(!body.contains("Desert Cars Phoenix"));
    assert!(body.contains("Pacific Auto Center"));
    assert!(body.contains("Vegas Value Motors"));
}

#[test]
fn search_requires_make_and_model() {
    let state = test_state();
    let err = handle(
        post_form("/market/search", "make=+&model=Civic&year=2014"),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[test]
fn saving_a_market_contact_lands_in_the_rolodex() {
    let state = test_state();
    let resp = handle(
        post_form(
            "/market/contact",
            "dealership=Auto+Town+LA&phone=213-555-0123&make=Honda&model=Civic&year=2014&max_price=0",
        ),
        &state,
    )
    .expect("Failed to handle request");

    // Confirmation shows on the still-rendered results page.
    let body = body_string(resp);
    assert!(body.contains("Contact for Auto Town LA saved!"));
    assert!(body.contains("Results for 2014 Honda Civic"));

    let body = body_string(handle(get("/contacts"), &state).unwrap());
    assert!(body.contains("Auto Town LA"));
    assert!(body.contains("Seller"));
}

#[test]
fn inquiry_preview_renders_the_template() {
    let state = test_state();
    let resp = handle(
        post_form(
            "/market/inquiry",
            "year=2014&make=Honda&model=Civic&dealership=Auto+Town+LA",
        ),
        &state,
    )
    .expect("Failed to handle request");

    let body = body_string(resp);
    assert!(body.contains("Vehicle Sourcing Inquiry - 2014 Honda Civic"));
    assert!(body.contains("Dear Auto Town LA Team,"));
    assert!(body.contains("AnthonyRodas@velocitycarssale.com"));
    // No mail service configured, so no send form.
    assert!(body.contains("No mail service configured"));
}

#[test]
fn sending_without_a_mailer_is_a_delivery_error() {
    let state = test_state();
    let err = handle(
        post_form(
            "/outreach/send",
            "to=sales%40autotownla.example&subject=Hi&body=Hello",
        ),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::Delivery(_)));
}

#[test]
fn sending_hands_the_email_to_the_mail_service() {
    let (state, sent) = state_with_mailer(false);

    let resp = handle(
        post_form(
            "/outreach/send",
            "to=sales%40autotownla.example&subject=Vehicle+Sourcing+Inquiry&body=Dear+Team",
        ),
        &state,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Email sent to sales@autotownla.example"));

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "sales@autotownla.example");
    assert_eq!(sent[0].subject, "Vehicle Sourcing Inquiry");
    assert_eq!(sent[0].body, "Dear Team");
}

#[test]
fn delivery_failure_surfaces_without_touching_the_store() {
    let (state, sent) = state_with_mailer(true);

    let err = handle(
        post_form(
            "/outreach/send",
            "to=sales%40autotownla.example&subject=Hi&body=Hello",
        ),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::Delivery(_)));
    assert!(sent.lock().unwrap().is_empty());

    // Store tables are all still empty.
    let store = state.lock_store().unwrap();
    assert!(store.vehicles.is_empty());
    assert!(store.contacts.is_empty());
    assert!(store.follow_ups.is_empty());
}
