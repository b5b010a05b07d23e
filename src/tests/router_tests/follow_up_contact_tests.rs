use crate::errors::CrmError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_state};

#[test]
fn logging_a_follow_up_shows_it_in_the_table() {
    let state = test_state();

    let resp = handle(
        post_form(
            "/follow-ups",
            "dealership=Auto+Town+LA&phone=213-555-0123&email=sales%40autotownla.example\
             &message=Asked+about+the+Civic&date=2024-03-01&needs_follow_up=on",
        ),
        &state,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Follow-up logged!"));
    assert!(body.contains("Auto Town LA"));
    assert!(body.contains("2024-03-01"));
    assert!(body.contains("Days Since Contact"));
}

#[test]
fn unchecked_box_logs_a_resolved_touch() {
    let state = test_state();
    handle(
        post_form(
            "/follow-ups",
            "dealership=Auto+Town+LA&phone=&email=&message=&date=2024-03-01",
        ),
        &state,
    )
    .unwrap();

    let store = state.lock_store().unwrap();
    assert!(!store.follow_ups.get(1).unwrap().needs_follow_up);
}

#[test]
fn pending_filter_hides_resolved_entries() {
    let state = test_state();
    handle(
        post_form(
            "/follow-ups",
            "dealership=Auto+Town+LA&phone=&email=&message=&date=2024-03-01&needs_follow_up=on",
        ),
        &state,
    )
    .unwrap();
    handle(
        post_form(
            "/follow-ups",
            "dealership=Pacific+Auto+Center&phone=&email=&message=&date=2024-03-02",
        ),
        &state,
    )
    .unwrap();

    let body = body_string(handle(get("/follow-ups?pending=1"), &state).unwrap());
    assert!(body.contains("Auto Town LA"));
    assert!(!body.contains("Pacific Auto Center"));

    let body = body_string(handle(get("/follow-ups"), &state).unwrap());
    assert!(body.contains("Auto Town LA"));
    assert!(body.contains("Pacific Auto Center"));
}

#[test]
fn toggling_resolves_and_reopens() {
    let state = test_state();
    handle(
        post_form(
            "/follow-ups",
            "dealership=Auto+Town+LA&phone=&email=&message=&date=2024-03-01&needs_follow_up=on",
        ),
        &state,
    )
    .unwrap();

    let resp = handle(post_form("/follow-ups/toggle", "id=1&value=0"), &state)
        .expect("Failed to handle request");
    let body = body_string(resp);
    assert!(body.contains("Follow-up resolved."));
    {
        let store = state.lock_store().unwrap();
        assert!(!store.follow_ups.get(1).unwrap().needs_follow_up);
    }

    let resp = handle(post_form("/follow-ups/toggle", "id=1&value=1"), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Marked as needing follow-up."));
    let store = state.lock_store().unwrap();
    assert!(store.follow_ups.get(1).unwrap().needs_follow_up);
}

#[test]
fn toggling_a_missing_entry_is_not_found() {
    let state = test_state();
    let err = handle(post_form("/follow-ups/toggle", "id=42&value=0"), &state).unwrap_err();
    assert!(matches!(err, CrmError::NotFound(_)));
}

#[test]
fn adding_a_contact_lists_it_with_its_type() {
    let state = test_state();

    let resp = handle(
        post_form(
            "/contacts",
            "name=Buyer+Bob&phone=702-555-0001&kind=Buyer&associated_vin=",
        ),
        &state,
    )
    .expect("Failed to handle request");

    let body = body_string(resp);
    assert!(body.contains("Contact added!"));
    assert!(body.contains("Buyer Bob"));
    assert!(body.contains("Buyer"));
}

#[test]
fn contact_without_a_name_is_rejected() {
    let state = test_state();
    let err = handle(
        post_form("/contacts", "name=+&phone=702-555-0001&kind=Buyer"),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[test]
fn unknown_contact_type_is_rejected() {
    let state = test_state();
    let err = handle(
        post_form("/contacts", "name=Bob&phone=702-555-0001&kind=Wholesaler"),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[test]
fn seller_on_the_add_car_form_creates_a_linked_contact() {
    let state = test_state();
    handle(
        post_form(
            "/vehicles",
            "vin=VIN001&make=Honda&model=Civic&year=2014\
             &seller_name=Jane+Doe&seller_phone=213-555-0188",
        ),
        &state,
    )
    .unwrap();

    let body = body_string(handle(get("/contacts"), &state).unwrap());
    assert!(body.contains("Jane Doe"));
    assert!(body.contains("VIN001"));

    let store = state.lock_store().unwrap();
    let contact = store.contacts.get(1).unwrap();
    assert_eq!(contact.associated_vin.as_deref(), Some("VIN001"));
}
