use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use chrono::{Local, NaiveDate};
use url::form_urlencoded;

use crate::commands::{dispatch, Command, SellerInfo};
use crate::domain::contact::{Contact, ContactType};
use crate::domain::follow_up::FollowUp;
use crate::domain::valuation::{acquisition_band, estimate_value, Condition};
use crate::domain::vehicle::{Vehicle, VehicleStatus};
use crate::errors::{CrmError, ResultResp};
use crate::market::{comparable_listings, MarketQuery};
use crate::outreach::{self, Draft, OfferSheet};
use crate::reports;
use crate::responses::{csv_response, html_response, text_response};
use crate::state::AppState;
use crate::templates::pages;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(req.uri().query());

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => dashboard(state),

        ("GET", "/vehicles") => vehicles(state, None),
        ("POST", "/vehicles") => add_vehicle(state, read_form(&mut req)?),

        ("GET", "/market") => html_response(pages::market_page()),
        ("POST", "/market/search") => market_search(read_form(&mut req)?, None),
        ("POST", "/market/contact") => market_contact(state, read_form(&mut req)?),
        ("POST", "/market/inquiry") => market_inquiry(state, read_form(&mut req)?),
        ("POST", "/outreach/send") => outreach_send(state, read_form(&mut req)?),

        ("GET", "/transactions") => transactions(state, None),
        ("POST", "/transactions/purchase") => mark_purchased(state, read_form(&mut req)?),
        ("POST", "/transactions/sold") => mark_sold(state, read_form(&mut req)?),
        ("POST", "/transactions/delete") => delete_vehicle(state, read_form(&mut req)?),

        ("GET", "/follow-ups") => {
            let pending_only = query.get("pending").map(String::as_str) == Some("1");
            follow_ups(state, pending_only, None)
        }
        ("POST", "/follow-ups") => log_follow_up(state, read_form(&mut req)?),
        ("POST", "/follow-ups/toggle") => toggle_follow_up(state, read_form(&mut req)?),

        ("GET", "/contacts") => contacts(state, None),
        ("POST", "/contacts") => add_contact(state, read_form(&mut req)?),

        ("GET", "/tools") => html_response(pages::tools_page(None, None)),
        ("POST", "/tools/mmr") => tools_mmr(read_form(&mut req)?),
        ("POST", "/tools/estimate") => tools_estimate(read_form(&mut req)?),
        ("POST", "/tools/offer") => tools_offer(read_form(&mut req)?, false),
        ("POST", "/tools/offer/download") => tools_offer(read_form(&mut req)?, true),
        ("POST", "/tools/pitch") => tools_pitch(read_form(&mut req)?, false),
        ("POST", "/tools/pitch/download") => tools_pitch(read_form(&mut req)?, true),

        ("GET", "/analytics") => analytics(state),

        ("GET", "/settings") => html_response(pages::settings_page(None)),
        ("GET", "/export/vehicles.csv") => export_vehicles(state),
        ("GET", "/export/contacts.csv") => export_contacts(state),
        ("POST", "/settings/clear-vehicles") => clear(state, Command::ClearVehicles),
        ("POST", "/settings/clear-contacts") => clear(state, Command::ClearContacts),

        _ => Err(CrmError::NotFound(format!("no route for {method} {path}"))),
    }
}

// ---------- pages ----------

fn dashboard(state: &AppState) -> ResultResp {
    let store = state.lock_store()?;
    let breakdown = reports::profit::status_breakdown(store.vehicles.iter());
    let all: Vec<&Vehicle> = store.vehicles.iter().collect();
    let recent = &all[all.len().saturating_sub(5)..];
    html_response(pages::dashboard_page(&breakdown, recent))
}

fn vehicles(state: &AppState, message: Option<String>) -> ResultResp {
    let store = state.lock_store()?;
    let all: Vec<&Vehicle> = store.vehicles.iter().collect();
    html_response(pages::vehicles_page(&all, message.as_deref()))
}

fn transactions(state: &AppState, message: Option<String>) -> ResultResp {
    let store = state.lock_store()?;
    let watching: Vec<&Vehicle> = store
        .vehicles
        .find(|v| v.status() == VehicleStatus::Watch)
        .collect();
    let purchased: Vec<&Vehicle> = store
        .vehicles
        .find(|v| v.status() == VehicleStatus::Purchased)
        .collect();
    let all: Vec<&Vehicle> = store.vehicles.iter().collect();
    html_response(pages::transactions_page(
        &watching,
        &purchased,
        &all,
        message.as_deref(),
    ))
}

fn follow_ups(state: &AppState, pending_only: bool, message: Option<String>) -> ResultResp {
    let store = state.lock_store()?;
    let entries: Vec<&FollowUp> = if pending_only {
        store.follow_ups.find(|f| f.needs_follow_up).collect()
    } else {
        store.follow_ups.iter().collect()
    };
    let today = Local::now().date_naive();
    html_response(pages::follow_ups_page(
        &entries,
        pending_only,
        today,
        message.as_deref(),
    ))
}

fn contacts(state: &AppState, message: Option<String>) -> ResultResp {
    let store = state.lock_store()?;
    let all: Vec<&Contact> = store.contacts.iter().collect();
    html_response(pages::contacts_page(&all, message.as_deref()))
}

fn analytics(state: &AppState) -> ResultResp {
    let store = state.lock_store()?;
    let months = reports::profit::monthly_profit(store.vehicles.iter());
    let total = reports::profit::total_profit(store.vehicles.iter());
    let breakdown = reports::profit::status_breakdown(store.vehicles.iter());
    html_response(pages::analytics_page(&months, total, &breakdown))
}

// ---------- vehicle commands ----------

fn add_vehicle(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let seller = match (optional(&form, "seller_name"), optional(&form, "seller_phone")) {
        (Some(name), Some(phone)) => Some(SellerInfo {
            name: name.to_string(),
            phone: phone.to_string(),
        }),
        _ => None,
    };
    let command = Command::AddVehicle {
        vin: require(&form, "vin")?.to_string(),
        make: require(&form, "make")?.to_string(),
        model: require(&form, "model")?.to_string(),
        year: require_i32(&form, "year")?,
        seller,
    };

    let outcome = {
        let mut store = state.lock_store()?;
        dispatch(&mut store, command)?
    };
    vehicles(state, Some(outcome.message))
}

fn mark_purchased(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let command = Command::MarkPurchased {
        vin: require(&form, "vin")?.to_string(),
        date: require_date(&form, "date")?,
        price: require_f64(&form, "price")?,
    };
    let outcome = {
        let mut store = state.lock_store()?;
        dispatch(&mut store, command)?
    };
    transactions(state, Some(outcome.message))
}

fn mark_sold(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let command = Command::MarkSold {
        vin: require(&form, "vin")?.to_string(),
        date: require_date(&form, "date")?,
        price: require_f64(&form, "price")?,
    };
    let outcome = {
        let mut store = state.lock_store()?;
        dispatch(&mut store, command)?
    };
    transactions(state, Some(outcome.message))
}

fn delete_vehicle(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let command = Command::DeleteVehicle {
        vin: require(&form, "vin")?.to_string(),
    };
    let outcome = {
        let mut store = state.lock_store()?;
        dispatch(&mut store, command)?
    };
    transactions(state, Some(outcome.message))
}

// ---------- market research ----------

fn market_query(form: &HashMap<String, String>) -> Result<MarketQuery, CrmError> {
    let query = MarketQuery {
        make: require(form, "make")?.trim().to_string(),
        model: require(form, "model")?.trim().to_string(),
        year: require_i32(form, "year")?,
        max_price: optional(form, "max_price")
            .map(|raw| parse_f64(raw, "max_price"))
            .transpose()?
            .unwrap_or(0.0),
    };
    if query.make.is_empty() || query.model.is_empty() {
        return Err(CrmError::Validation(
            "make and model are required to search the market".to_string(),
        ));
    }
    Ok(query)
}

fn market_search(form: HashMap<String, String>, message: Option<String>) -> ResultResp {
    let query = market_query(&form)?;
    let listings = comparable_listings(&query);
    html_response(pages::market_results_page(
        &query,
        &listings,
        message.as_deref(),
    ))
}

fn market_contact(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let command = Command::SaveMarketContact {
        dealership: require(&form, "dealership")?.to_string(),
        phone: require(&form, "phone")?.to_string(),
    };
    let outcome = {
        let mut store = state.lock_store()?;
        dispatch(&mut store, command)?
    };
    // The form echoes the active search, so land back on the results.
    market_search(form, Some(outcome.message))
}

fn market_inquiry(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let draft = outreach::sourcing_inquiry(
        require_i32(&form, "year")?,
        require(&form, "make")?,
        require(&form, "model")?,
        require(&form, "dealership")?,
    );
    html_response(pages::inquiry_preview_page(&draft, state.mailer.is_some()))
}

fn outreach_send(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let to = require(&form, "to")?.trim().to_string();
    if to.is_empty() {
        return Err(CrmError::Validation(
            "recipient email must not be empty".to_string(),
        ));
    }
    let email = Draft {
        subject: require(&form, "subject")?.to_string(),
        body: require(&form, "body")?.to_string(),
    }
    .addressed_to(&to);

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        CrmError::Delivery("no mail service configured; set BREVO_API_KEY".to_string())
    })?;
    if let Err(err) = mailer.send(&email) {
        eprintln!("⚠️ Outreach delivery failed: {err}");
        return Err(err);
    }

    println!("✅ Sourcing inquiry sent to {}", email.to);
    html_response(pages::inquiry_sent_page(&email.to))
}

// ---------- follow-ups and contacts ----------

fn log_follow_up(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let command = Command::LogFollowUp {
        dealership: require(&form, "dealership")?.to_string(),
        phone: form.get("phone").cloned().unwrap_or_default(),
        email: form.get("email").cloned().unwrap_or_default(),
        message: form.get("message").cloned().unwrap_or_default(),
        date_sent: require_date(&form, "date")?,
        needs_follow_up: form.contains_key("needs_follow_up"),
    };
    let outcome = {
        let mut store = state.lock_store()?;
        dispatch(&mut store, command)?
    };
    follow_ups(state, false, Some(outcome.message))
}

fn toggle_follow_up(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let command = Command::SetNeedsFollowUp {
        id: require_i64(&form, "id")?,
        value: require(&form, "value")? == "1",
    };
    let outcome = {
        let mut store = state.lock_store()?;
        dispatch(&mut store, command)?
    };
    let pending_only = form.get("pending").map(String::as_str) == Some("1");
    follow_ups(state, pending_only, Some(outcome.message))
}

fn add_contact(state: &AppState, form: HashMap<String, String>) -> ResultResp {
    let command = Command::AddContact {
        name: require(&form, "name")?.to_string(),
        phone: require(&form, "phone")?.to_string(),
        kind: require(&form, "kind")?.parse::<ContactType>()?,
        associated_vin: optional(&form, "associated_vin").map(str::to_string),
    };
    let outcome = {
        let mut store = state.lock_store()?;
        dispatch(&mut store, command)?
    };
    contacts(state, Some(outcome.message))
}

// ---------- dealer tools ----------

fn tools_mmr(form: HashMap<String, String>) -> ResultResp {
    let reference = require_f64(&form, "reference")?;
    let (low, high) = acquisition_band(reference)?;
    let result = pages::MmrVm {
        reference,
        low,
        high,
    };
    html_response(pages::tools_page(Some(&result), None))
}

fn tools_estimate(form: HashMap<String, String>) -> ResultResp {
    let base_value = require_f64(&form, "base_value")?;
    let mileage = require_u32(&form, "mileage")?;
    let condition = require(&form, "condition")?.parse::<Condition>()?;
    let result = pages::EstimateVm {
        base_value,
        mileage,
        condition,
        value: estimate_value(base_value, mileage, condition),
    };
    html_response(pages::tools_page(None, Some(&result)))
}

fn tools_offer(form: HashMap<String, String>, download: bool) -> ResultResp {
    let offer = OfferSheet {
        vin: require(&form, "vin")?.trim().to_string(),
        stock_number: form.get("stock_number").cloned().unwrap_or_default(),
        make: require(&form, "make")?.trim().to_string(),
        model: require(&form, "model")?.trim().to_string(),
        trim: form.get("trim").cloned().unwrap_or_default(),
        mileage: require_u32(&form, "mileage")?,
        price: require_f64(&form, "price")?,
        notes: form.get("notes").cloned().unwrap_or_default(),
    };
    offer.validate()?;

    let text = offer.render();
    if download {
        let filename = format!("OfferSheet_{}.txt", offer.vin);
        text_response(text, &filename)
    } else {
        html_response(pages::offer_preview_page(&offer, &text))
    }
}

fn tools_pitch(form: HashMap<String, String>, download: bool) -> ResultResp {
    let description = require(&form, "description")?.trim().to_string();
    if description.is_empty() {
        return Err(CrmError::Validation(
            "please describe the car you're looking for".to_string(),
        ));
    }

    let text = outreach::pitch(&description);
    if download {
        text_response(text, "Pitch.txt")
    } else {
        html_response(pages::pitch_preview_page(&description, &text))
    }
}

// ---------- exports and clearing ----------

fn export_vehicles(state: &AppState) -> ResultResp {
    let csv = {
        let store = state.lock_store()?;
        reports::csv::vehicles_csv(store.vehicles.iter())
    };
    csv_response(csv, "CarFlipCRM_Report.csv")
}

fn export_contacts(state: &AppState) -> ResultResp {
    let csv = {
        let store = state.lock_store()?;
        reports::csv::contacts_csv(store.contacts.iter())
    };
    csv_response(csv, "Contacts_Report.csv")
}

fn clear(state: &AppState, command: Command) -> ResultResp {
    let outcome = {
        let mut store = state.lock_store()?;
        dispatch(&mut store, command)?
    };
    html_response(pages::settings_page(Some(&outcome.message)))
}

// ---------- request plumbing ----------

/// Reads and decodes an `application/x-www-form-urlencoded` POST body.
fn read_form(req: &mut Request) -> Result<HashMap<String, String>, CrmError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| CrmError::BadRequest(format!("unreadable request body: {e}")))?;
    Ok(form_urlencoded::parse(&buf).into_owned().collect())
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn require<'a>(form: &'a HashMap<String, String>, field: &str) -> Result<&'a str, CrmError> {
    form.get(field)
        .map(String::as_str)
        .ok_or_else(|| CrmError::BadRequest(format!("missing form field '{field}'")))
}

/// Non-empty trimmed value, if the field was posted at all.
fn optional<'a>(form: &'a HashMap<String, String>, field: &str) -> Option<&'a str> {
    form.get(field)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn require_i32(form: &HashMap<String, String>, field: &str) -> Result<i32, CrmError> {
    let raw = require(form, field)?;
    raw.trim()
        .parse()
        .map_err(|_| CrmError::BadRequest(format!("'{raw}' is not a valid number for '{field}'")))
}

fn require_i64(form: &HashMap<String, String>, field: &str) -> Result<i64, CrmError> {
    let raw = require(form, field)?;
    raw.trim()
        .parse()
        .map_err(|_| CrmError::BadRequest(format!("'{raw}' is not a valid number for '{field}'")))
}

fn require_u32(form: &HashMap<String, String>, field: &str) -> Result<u32, CrmError> {
    let raw = require(form, field)?;
    raw.trim()
        .parse()
        .map_err(|_| CrmError::BadRequest(format!("'{raw}' is not a valid number for '{field}'")))
}

fn require_f64(form: &HashMap<String, String>, field: &str) -> Result<f64, CrmError> {
    parse_f64(require(form, field)?, field)
}

fn parse_f64(raw: &str, field: &str) -> Result<f64, CrmError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CrmError::BadRequest(format!("'{raw}' is not a valid number for '{field}'")))?;
    // "NaN" and "inf" are parseable f64s but never valid form input.
    if !value.is_finite() {
        return Err(CrmError::BadRequest(format!(
            "'{raw}' is not a valid number for '{field}'"
        )));
    }
    Ok(value)
}

fn require_date(form: &HashMap<String, String>, field: &str) -> Result<NaiveDate, CrmError> {
    let raw = require(form, field)?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CrmError::BadRequest(format!("'{raw}' is not a valid date for '{field}'")))
}
