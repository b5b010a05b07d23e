// templates/pages/tools.rs

use maud::{html, Markup};

use crate::domain::valuation::Condition;
use crate::outreach::{usd, OfferSheet};
use crate::templates::desktop_layout;

/// Result of the wholesale band calculator.
pub struct MmrVm {
    pub reference: f64,
    pub low: f64,
    pub high: f64,
}

/// Result of the value estimator.
pub struct EstimateVm {
    pub base_value: f64,
    pub mileage: u32,
    pub condition: Condition,
    pub value: f64,
}

pub fn tools_page(mmr: Option<&MmrVm>, estimate: Option<&EstimateVm>) -> Markup {
    desktop_layout(
        "Dealer Tools",
        html! {
            h1 { "Dealer Tools" }

            section class="card" {
                h3 { "Wholesale Buy Band" }
                form class="stacked" action="/tools/mmr" method="post" {
                    label for="reference" { "Reference value (MMR)" }
                    input type="number" name="reference" id="reference"
                        min="0" step="any" required
                        value=(mmr.map(|m| m.reference).unwrap_or(6000.0));
                    p { button type="submit" { "Calculate" } }
                }
                @if let Some(m) = mmr {
                    p class="flash" {
                        "Target buy range for " (usd(m.reference)) ": "
                        strong { (usd(m.low)) " to " (usd(m.high)) }
                    }
                }
            }

            section class="card" {
                h3 { "Value Estimator" }
                form class="stacked" action="/tools/estimate" method="post" {
                    label for="base_value" { "Base value" }
                    input type="number" name="base_value" id="base_value"
                        min="0" step="any" required
                        value=(estimate.map(|e| e.base_value).unwrap_or(25_000.0));

                    label for="mileage" { "Mileage" }
                    input type="number" name="mileage" id="mileage" min="0" required
                        value=(estimate.map(|e| e.mileage).unwrap_or(45_000));

                    label for="condition" { "Condition" }
                    select name="condition" id="condition" {
                        @for condition in Condition::ALL {
                            option value=(condition.as_str())
                                selected[estimate.map(|e| e.condition) == Some(condition)] {
                                (condition)
                            }
                        }
                    }

                    p { button type="submit" { "Estimate" } }
                }
                @if let Some(e) = estimate {
                    p class="flash" {
                        "Estimated value in " (e.condition) " condition: "
                        strong { (usd(e.value)) }
                    }
                }
            }

            section class="card" {
                h3 { "Dealer Offer Sheet" }
                form class="stacked" action="/tools/offer" method="post" {
                    label for="offer-vin" { "VIN" }
                    input type="text" name="vin" id="offer-vin" required;

                    label for="stock_number" { "Stock # (optional)" }
                    input type="text" name="stock_number" id="stock_number";

                    label for="offer-make" { "Make" }
                    input type="text" name="make" id="offer-make" required;

                    label for="offer-model" { "Model" }
                    input type="text" name="model" id="offer-model" required;

                    label for="offer-trim" { "Trim (optional)" }
                    input type="text" name="trim" id="offer-trim";

                    label for="offer-mileage" { "Mileage" }
                    input type="number" name="mileage" id="offer-mileage" min="0" required;

                    label for="offer-price" { "Offer Price" }
                    input type="number" name="price" id="offer-price" min="0" step="any" required;

                    label for="offer-notes" { "Notes" }
                    textarea name="notes" id="offer-notes" rows="2" {}

                    p { button type="submit" { "Build Offer Sheet" } }
                }
            }

            section class="card" {
                h3 { "Quick Pitch" }
                form class="stacked" action="/tools/pitch" method="post" {
                    label for="description" { "Describe the car you're looking for" }
                    textarea name="description" id="description" rows="3" {}
                    p { button type="submit" { "Generate Pitch" } }
                }
            }
        },
    )
}

pub fn offer_preview_page(offer: &OfferSheet, text: &str) -> Markup {
    desktop_layout(
        "Dealer Tools",
        html! {
            h1 { "Offer Sheet" }

            section class="card" {
                h3 { (offer.make) " " (offer.model) " (" (offer.vin) ")" }
                pre class="letter" { (text) }

                form action="/tools/offer/download" method="post" {
                    (offer_echo(offer))
                    button type="submit" { "Download as .txt" }
                }
            }

            p { a href="/tools" { "Back to Dealer Tools" } }
        },
    )
}

pub fn pitch_preview_page(description: &str, text: &str) -> Markup {
    desktop_layout(
        "Dealer Tools",
        html! {
            h1 { "Quick Pitch" }

            section class="card" {
                pre class="letter" { (text) }

                form action="/tools/pitch/download" method="post" {
                    input type="hidden" name="description" value=(description);
                    button type="submit" { "Download as .txt" }
                }
            }

            p { a href="/tools" { "Back to Dealer Tools" } }
        },
    )
}

fn offer_echo(offer: &OfferSheet) -> Markup {
    html! {
        input type="hidden" name="vin" value=(offer.vin);
        input type="hidden" name="stock_number" value=(offer.stock_number);
        input type="hidden" name="make" value=(offer.make);
        input type="hidden" name="model" value=(offer.model);
        input type="hidden" name="trim" value=(offer.trim);
        input type="hidden" name="mileage" value=(offer.mileage);
        input type="hidden" name="price" value=(offer.price);
        input type="hidden" name="notes" value=(offer.notes);
    }
}
