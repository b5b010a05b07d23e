use crate::errors::CrmError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, get, post_form, test_state};

fn seed_sold_car(state: &AppState) {
    handle(
        post_form("/vehicles", "vin=VIN001&make=Honda&model=Civic&year=2014"),
        state,
    )
    .unwrap();
    handle(
        post_form("/transactions/purchase", "vin=VIN001&date=2024-03-01&price=6000"),
        state,
    )
    .unwrap();
    handle(
        post_form("/transactions/sold", "vin=VIN001&date=2024-04-15&price=7500"),
        state,
    )
    .unwrap();
}

#[test]
fn vehicle_export_downloads_the_full_report() {
    let state = test_state();
    seed_sold_car(&state);

    let resp = handle(get("/export/vehicles.csv"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .expect("missing Content-Disposition")
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("CarFlipCRM_Report.csv"));

    let body = body_string(resp);
    assert!(body.starts_with(
        "VIN,Make,Model,Year,Purchase Date,Purchase Price ($),\
         Sold Date,Sold Price ($),Profit ($),Status\n"
    ));
    assert!(body.contains("VIN001,Honda,Civic,2014,2024-03-01,6000,2024-04-15,7500,1500,Sold"));
}

#[test]
fn contact_export_downloads_the_rolodex() {
    let state = test_state();
    handle(
        post_form("/contacts", "name=Buyer+Bob&phone=702-555-0001&kind=Buyer"),
        &state,
    )
    .unwrap();

    let resp = handle(get("/export/contacts.csv"), &state).expect("Failed to handle request");
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("Contacts_Report.csv"));

    let body = body_string(resp);
    assert!(body.starts_with("Name,Phone,Type,Associated VIN\n"));
    assert!(body.contains("Buyer Bob,702-555-0001,Buyer,"));
}

#[test]
fn clearing_vehicles_leaves_contacts_alone() {
    let state = test_state();
    handle(
        post_form(
            "/vehicles",
            "vin=VIN001&make=Honda&model=Civic&year=2014&seller_name=Jane&seller_phone=555",
        ),
        &state,
    )
    .unwrap();

    let resp = handle(post_form("/settings/clear-vehicles", ""), &state)
        .expect("Failed to handle request");
    assert!(body_string(resp).contains("CRM data cleared!"));

    let store = state.lock_store().unwrap();
    assert!(store.vehicles.is_empty());
    assert_eq!(store.contacts.len(), 1);
}

#[test]
fn clearing_contacts_leaves_vehicles_alone() {
    let state = test_state();
    handle(
        post_form(
            "/vehicles",
            "vin=VIN001&make=Honda&model=Civic&year=2014&seller_name=Jane&seller_phone=555",
        ),
        &state,
    )
    .unwrap();

    let resp = handle(post_form("/settings/clear-contacts", ""), &state)
        .expect("Failed to handle request");
    assert!(body_string(resp).contains("Contacts data cleared!"));

    let store = state.lock_store().unwrap();
    assert!(store.contacts.is_empty());
    assert_eq!(store.vehicles.len(), 1);
}

#[test]
fn mmr_band_shows_both_bounds() {
    let state = test_state();
    let resp = handle(post_form("/tools/mmr", "reference=10000"), &state)
        .expect("Failed to handle request");

    let body = body_string(resp);
    assert!(body.contains("$10,000.00"));
    assert!(body.contains("$8,500.00"));
    assert!(body.contains("$9,200.00"));
}

#[test]
fn negative_reference_is_rejected() {
    let state = test_state();
    let err = handle(post_form("/tools/mmr", "reference=-1"), &state).unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[test]
fn estimator_applies_mileage_and_condition() {
    let state = test_state();
    let resp = handle(
        post_form(
            "/tools/estimate",
            "base_value=25000&mileage=45000&condition=Good",
        ),
        &state,
    )
    .expect("Failed to handle request");

    let body = body_string(resp);
    assert!(body.contains("Estimated value in Good condition:"));
    assert!(body.contains("$23,000.00"));
}

#[test]
fn estimator_floors_worn_out_cars_at_scrap_value() {
    let state = test_state();
    let resp = handle(
        post_form(
            "/tools/estimate",
            "base_value=2000&mileage=90000&condition=Poor",
        ),
        &state,
    )
    .unwrap();

    let body = body_string(resp);
    assert!(body.contains("$1,600.00"));
}

#[test]
fn offer_sheet_previews_then_downloads() {
    let state = test_state();
    let form = "vin=1HGCM82633A004352&stock_number=ST-104&make=Honda&model=Accord\
                &trim=EX&mileage=96000&price=6350&notes=Minor+door+ding";

    let preview = body_string(handle(post_form("/tools/offer", form), &state).unwrap());
    assert!(preview.contains("Dealer Offer Sheet"));
    assert!(preview.contains("$6,350.00"));
    assert!(preview.contains("/tools/offer/download"));

    let resp = handle(post_form("/tools/offer/download", form), &state)
        .expect("Failed to handle request");
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("OfferSheet_1HGCM82633A004352.txt"));

    let body = body_string(resp);
    assert!(body.starts_with("Dealer Offer Sheet"));
    assert!(body.contains("Offer Price:         $6,350.00"));
    assert!(body.contains("Notes:               Minor door ding"));
}

#[test]
fn offer_sheet_without_a_make_is_rejected() {
    let state = test_state();
    let err = handle(
        post_form(
            "/tools/offer",
            "vin=VIN1&stock_number=&make=+&model=Accord&trim=&mileage=0&price=0&notes=",
        ),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[test]
fn pitch_previews_then_downloads() {
    let state = test_state();
    let form = "description=2012-2015+Civic%2C+under+100k+miles";

    let preview = body_string(handle(post_form("/tools/pitch", form), &state).unwrap());
    assert!(preview.contains("2012-2015 Civic, under 100k miles"));

    let resp = handle(post_form("/tools/pitch/download", form), &state)
        .expect("Failed to handle request");
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("Pitch.txt"));
    assert_eq!(
        body_string(resp),
        "Hi, I'm looking for a vehicle with the following specs: \
         2012-2015 Civic, under 100k miles. If you have something that fits \
         or close, let me know. Cash buyer, ready to move fast."
    );
}

#[test]
fn blank_pitch_description_is_rejected() {
    let state = test_state();
    let err = handle(post_form("/tools/pitch", "description=+"), &state).unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[test]
fn analytics_rolls_profit_up_by_month() {
    let state = test_state();
    seed_sold_car(&state);
    handle(
        post_form("/vehicles", "vin=VIN002&make=Toyota&model=Corolla&year=2015"),
        &state,
    )
    .unwrap();

    let body = body_string(handle(get("/analytics"), &state).unwrap());
    assert!(body.contains("2024-04"));
    assert!(body.contains("$1,500.00"));
    assert!(body.contains("Total realized profit:"));
    assert!(body.contains("Watching"));
}

#[test]
fn analytics_is_calm_when_empty() {
    let state = test_state();
    let body = body_string(handle(get("/analytics"), &state).unwrap());
    assert!(body.contains("No sales recorded yet."));
    assert!(body.contains("No cars tracked yet."));
}
