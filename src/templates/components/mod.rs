use chrono::NaiveDate;
use maud::{html, Markup};

use crate::domain::contact::Contact;
use crate::domain::follow_up::FollowUp;
use crate::domain::vehicle::Vehicle;
use crate::outreach::usd;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}

/// Confirmation line rendered after a command goes through.
pub fn flash(message: &str) -> Markup {
    html! {
        p class="flash" { (message) }
    }
}

pub fn metric(label: &str, value: usize) -> Markup {
    html! {
        div class="metric" {
            span class="metric-value" { (value) }
            span class="metric-label" { (label) }
        }
    }
}

/// The inventory table shared by the dashboard and vehicles pages.
/// Empty transaction cells stay blank, mirroring the CSV export.
pub fn vehicle_table(vehicles: &[&Vehicle]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "VIN" }
                    th { "Make" }
                    th { "Model" }
                    th { "Year" }
                    th { "Purchase Date" }
                    th { "Purchase Price" }
                    th { "Sold Date" }
                    th { "Sold Price" }
                    th { "Profit" }
                    th { "Status" }
                }
            }
            tbody {
                @for v in vehicles {
                    tr {
                        td { (v.vin) }
                        td { (v.make) }
                        td { (v.model) }
                        td { (v.year) }
                        td { @if let Some(d) = v.purchase_date { (d) } }
                        td { @if let Some(p) = v.purchase_price { (usd(p)) } }
                        td { @if let Some(d) = v.sold_date { (d) } }
                        td { @if let Some(p) = v.sold_price { (usd(p)) } }
                        td { @if let Some(p) = v.profit { (usd(p)) } }
                        td { (v.status()) }
                    }
                }
            }
        }
    }
}

pub fn contact_table(contacts: &[&Contact]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Name" }
                    th { "Phone" }
                    th { "Type" }
                    th { "Associated VIN" }
                }
            }
            tbody {
                @for c in contacts {
                    tr {
                        td { (c.name) }
                        td { (c.phone) }
                        td { (c.kind) }
                        td { @if let Some(vin) = &c.associated_vin { (vin) } }
                    }
                }
            }
        }
    }
}

/// Follow-up log with a per-row toggle. `pending_only` is echoed back so
/// the toggle returns to the same view.
pub fn follow_up_table(entries: &[&FollowUp], today: NaiveDate, pending_only: bool) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Dealership" }
                    th { "Phone" }
                    th { "Email" }
                    th { "Message" }
                    th { "Date Sent" }
                    th { "Days Since Contact" }
                    th { "Needs Follow-Up" }
                    th { }
                }
            }
            tbody {
                @for f in entries {
                    tr {
                        td { (f.dealership) }
                        td { (f.phone) }
                        td { (f.email) }
                        td { (f.message) }
                        td { (f.date_sent) }
                        td { (f.days_since_sent(today)) }
                        td { @if f.needs_follow_up { "Yes" } @else { "No" } }
                        td {
                            form action="/follow-ups/toggle" method="post" {
                                input type="hidden" name="id" value=(f.id);
                                input type="hidden" name="value"
                                    value=(if f.needs_follow_up { "0" } else { "1" });
                                @if pending_only {
                                    input type="hidden" name="pending" value="1";
                                }
                                button type="submit" {
                                    @if f.needs_follow_up { "Mark done" } @else { "Reopen" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
