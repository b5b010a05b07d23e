// src/reports/csv.rs

use crate::domain::contact::Contact;
use crate::domain::vehicle::Vehicle;

/// Flat-text exports of the store tables.
///
/// Column orders are fixed contracts: they match the report files the
/// business already circulates, so they are spelled out here rather than
/// derived from the structs.

pub const VEHICLE_COLUMNS: [&str; 10] = [
    "VIN",
    "Make",
    "Model",
    "Year",
    "Purchase Date",
    "Purchase Price ($)",
    "Sold Date",
    "Sold Price ($)",
    "Profit ($)",
    "Status",
];

pub const CONTACT_COLUMNS: [&str; 4] = ["Name", "Phone", "Type", "Associated VIN"];

/// Renders the vehicle table as CSV, one row per vehicle in table order.
/// Absent purchase and sale fields become empty cells.
pub fn vehicles_csv<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> String {
    let mut out = String::new();
    push_row(&mut out, VEHICLE_COLUMNS.iter().map(|c| c.to_string()));

    for v in vehicles {
        push_row(
            &mut out,
            [
                v.vin.clone(),
                v.make.clone(),
                v.model.clone(),
                v.year.to_string(),
                v.purchase_date.map(|d| d.to_string()).unwrap_or_default(),
                v.purchase_price.map(|p| p.to_string()).unwrap_or_default(),
                v.sold_date.map(|d| d.to_string()).unwrap_or_default(),
                v.sold_price.map(|p| p.to_string()).unwrap_or_default(),
                v.profit.map(|p| p.to_string()).unwrap_or_default(),
                v.status().to_string(),
            ]
            .into_iter(),
        );
    }
    out
}

/// Renders the contact table as CSV, one row per contact in table order.
pub fn contacts_csv<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> String {
    let mut out = String::new();
    push_row(&mut out, CONTACT_COLUMNS.iter().map(|c| c.to_string()));

    for c in contacts {
        push_row(
            &mut out,
            [
                c.name.clone(),
                c.phone.clone(),
                c.kind.to_string(),
                c.associated_vin.clone().unwrap_or_default(),
            ]
            .into_iter(),
        );
    }
    out
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&quote(&field));
    }
    out.push('\n');
}

/// Standard CSV quoting: wrap a field containing a comma, quote, or
/// newline, doubling any embedded quotes.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
