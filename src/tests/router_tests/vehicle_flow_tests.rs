use crate::errors::CrmError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_state};

#[test]
fn dashboard_loads_with_empty_store() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Business Dashboard"));
    assert!(body.contains("No cars yet"));
}

#[test]
fn adding_a_car_puts_it_on_the_watchlist() {
    let state = test_state();

    let resp = handle(
        post_form("/vehicles", "vin=VIN001&make=Honda&model=Civic&year=2014"),
        &state,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Car added to watchlist!"));
    assert!(body.contains("VIN001"));
    assert!(body.contains("Watch"));
}

#[test]
fn form_values_are_percent_decoded() {
    let state = test_state();

    let resp = handle(
        post_form("/vehicles", "vin=VIN001&make=Land+Rover&model=Range%20Rover&year=2016"),
        &state,
    )
    .expect("Failed to handle request");

    let body = body_string(resp);
    assert!(body.contains("Land Rover"));
    assert!(body.contains("Range Rover"));
}

#[test]
fn duplicate_vin_is_a_conflict() {
    let state = test_state();
    handle(
        post_form("/vehicles", "vin=VIN001&make=Honda&model=Civic&year=2014"),
        &state,
    )
    .unwrap();

    let err = handle(
        post_form("/vehicles", "vin=VIN001&make=Ford&model=Focus&year=2012"),
        &state,
    )
    .unwrap_err();
    assert_eq!(err, CrmError::DuplicateKey("VIN001".to_string()));

    // Only the first car is in the store.
    let body = body_string(handle(get("/vehicles"), &state).unwrap());
    assert!(body.contains("Honda"));
    assert!(!body.contains("Ford"));
}

#[test]
fn out_of_range_year_is_rejected() {
    let state = test_state();
    let err = handle(
        post_form("/vehicles", "vin=VIN001&make=Honda&model=Civic&year=1965"),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[test]
fn missing_form_field_is_a_bad_request() {
    let state = test_state();
    let err = handle(
        post_form("/vehicles", "vin=VIN001&make=Honda&year=2014"),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::BadRequest(_)));
}

#[test]
fn purchase_then_sale_walks_the_full_lifecycle() {
    let state = test_state();
    handle(
        post_form("/vehicles", "vin=VIN001&make=Honda&model=Civic&year=2014"),
        &state,
    )
    .unwrap();

    let resp = handle(
        post_form(
            "/transactions/purchase",
            "vin=VIN001&date=2024-03-01&price=6000",
        ),
        &state,
    )
    .expect("Failed to handle request");
    let body = body_string(resp);
    assert!(body.contains("Car marked as purchased!"));

    let resp = handle(
        post_form("/transactions/sold", "vin=VIN001&date=2024-04-15&price=7500"),
        &state,
    )
    .expect("Failed to handle request");
    let body = body_string(resp);
    assert!(body.contains("Car marked as sold!"));

    // Dashboard now counts one sold car and shows the derived profit.
    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Sold"));
    assert!(body.contains("$1,500.00"));
}

#[test]
fn selling_an_unpurchased_car_is_an_invalid_transition() {
    let state = test_state();
    handle(
        post_form("/vehicles", "vin=VIN001&make=Honda&model=Civic&year=2014"),
        &state,
    )
    .unwrap();

    let err = handle(
        post_form("/transactions/sold", "vin=VIN001&date=2024-04-15&price=7500"),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::InvalidTransition { .. }));

    // The car is still on the watchlist.
    let body = body_string(handle(get("/vehicles"), &state).unwrap());
    assert!(body.contains("Watch"));
}

#[test]
fn non_positive_price_is_rejected_before_lookup() {
    let state = test_state();
    let err = handle(
        post_form("/transactions/purchase", "vin=GHOST&date=2024-03-01&price=0"),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[test]
fn non_finite_price_is_rejected() {
    let state = test_state();
    handle(
        post_form("/vehicles", "vin=VIN001&make=Honda&model=Civic&year=2014"),
        &state,
    )
    .unwrap();

    for price in ["NaN", "inf", "-inf"] {
        let err = handle(
            post_form(
                "/transactions/purchase",
                &format!("vin=VIN001&date=2024-03-01&price={price}"),
            ),
            &state,
        )
        .unwrap_err();
        assert!(matches!(err, CrmError::BadRequest(_)), "price {price}");
    }

    // No purchase leg ever landed.
    let body = body_string(handle(get("/vehicles"), &state).unwrap());
    assert!(body.contains("Watch"));
}

#[test]
fn transitions_on_unknown_vins_are_not_found() {
    let state = test_state();
    let err = handle(
        post_form(
            "/transactions/purchase",
            "vin=GHOST&date=2024-03-01&price=6000",
        ),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::NotFound(_)));
}

#[test]
fn deleting_a_car_removes_it_from_every_view() {
    let state = test_state();
    handle(
        post_form("/vehicles", "vin=VIN001&make=Honda&model=Civic&year=2014"),
        &state,
    )
    .unwrap();

    let resp = handle(post_form("/transactions/delete", "vin=VIN001"), &state)
        .expect("Failed to handle request");
    let body = body_string(resp);
    assert!(body.contains("Car with VIN VIN001 deleted."));

    let body = body_string(handle(get("/vehicles"), &state).unwrap());
    assert!(!body.contains("VIN001"));
}

#[test]
fn unknown_routes_fall_through_to_not_found() {
    let state = test_state();
    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, CrmError::NotFound(_)));
}
