// templates/pages/transactions.rs

use maud::{html, Markup};

use crate::domain::vehicle::Vehicle;
use crate::templates::components::flash;
use crate::templates::desktop_layout;

/// The three lifecycle forms. Each select only offers the VINs the
/// transition is legal for, so the usual path never sees a state error.
pub fn transactions_page(
    watching: &[&Vehicle],
    purchased: &[&Vehicle],
    all: &[&Vehicle],
    message: Option<&str>,
) -> Markup {
    desktop_layout(
        "Transactions",
        html! {
            h1 { "Transactions" }

            @if let Some(message) = message {
                (flash(message))
            }

            section class="card" {
                h3 { "Mark as Purchased" }
                @if watching.is_empty() {
                    p class="empty" { "No cars in watchlist to mark as purchased." }
                } @else {
                    form class="stacked" action="/transactions/purchase" method="post" {
                        label for="purchase-vin" { "Car" }
                        select name="vin" id="purchase-vin" required {
                            @for v in watching {
                                option value=(v.vin) { (v.vin) " (" (v.label()) ")" }
                            }
                        }

                        label for="purchase-date" { "Purchase Date" }
                        input type="date" name="date" id="purchase-date" required;

                        label for="purchase-price" { "Purchase Price" }
                        input type="number" name="price" id="purchase-price"
                            min="0" step="any" required;

                        p { button type="submit" { "Mark as Purchased" } }
                    }
                }
            }

            section class="card" {
                h3 { "Mark as Sold" }
                @if purchased.is_empty() {
                    p class="empty" { "No purchased cars to mark as sold." }
                } @else {
                    form class="stacked" action="/transactions/sold" method="post" {
                        label for="sold-vin" { "Car" }
                        select name="vin" id="sold-vin" required {
                            @for v in purchased {
                                option value=(v.vin) { (v.vin) " (" (v.label()) ")" }
                            }
                        }

                        label for="sold-date" { "Sold Date" }
                        input type="date" name="date" id="sold-date" required;

                        label for="sold-price" { "Sold Price" }
                        input type="number" name="price" id="sold-price"
                            min="0" step="any" required;

                        p { button type="submit" { "Mark as Sold" } }
                    }
                }
            }

            section class="card" {
                h3 { "Delete Car" }
                @if all.is_empty() {
                    p class="empty" { "No cars to delete." }
                } @else {
                    form class="stacked" action="/transactions/delete" method="post" {
                        label for="delete-vin" { "Car" }
                        select name="vin" id="delete-vin" required {
                            @for v in all {
                                option value=(v.vin) { (v.vin) " (" (v.label()) ")" }
                            }
                        }
                        p { button type="submit" { "Delete" } }
                    }
                }
            }
        },
    )
}
