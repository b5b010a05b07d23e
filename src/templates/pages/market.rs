// templates/pages/market.rs

use maud::{html, Markup};

use crate::market::{ComparableListing, MarketQuery};
use crate::outreach::usd;
use crate::templates::components::flash;
use crate::templates::desktop_layout;

pub fn market_page() -> Markup {
    desktop_layout(
        "Market Research",
        html! {
            h1 { "Market Research" }

            section class="card" {
                h3 { "Search Comparable Listings" }
                (search_form(None))
            }
        },
    )
}

pub fn market_results_page(
    query: &MarketQuery,
    listings: &[ComparableListing],
    message: Option<&str>,
) -> Markup {
    desktop_layout(
        "Market Research",
        html! {
            h1 { "Market Research" }

            @if let Some(message) = message {
                (flash(message))
            }

            section class="card" {
                h3 { "Search Comparable Listings" }
                (search_form(Some(query)))
            }

            h2 { "Results for " (query.year) " " (query.make) " " (query.model) }

            @if listings.is_empty() {
                p class="empty" { "No sample listings under that price cap." }
            } @else {
                @for listing in listings {
                    section class="card" {
                        h3 { (listing.source) }
                        p {
                            strong { (usd(listing.price)) }
                            " | " (listing.mileage) " miles | " (listing.location)
                        }
                        p { "Phone: " (listing.phone) }

                        form action="/market/contact" method="post" style="display: inline-block; margin-right: 0.5rem;" {
                            input type="hidden" name="dealership" value=(listing.source);
                            input type="hidden" name="phone" value=(listing.phone);
                            (query_echo(query))
                            button type="submit" { "Save Contact" }
                        }
                        form action="/market/inquiry" method="post" style="display: inline-block;" {
                            input type="hidden" name="year" value=(listing.year);
                            input type="hidden" name="make" value=(listing.make);
                            input type="hidden" name="model" value=(listing.model);
                            input type="hidden" name="dealership" value=(listing.source);
                            button type="submit" { "Draft Inquiry Email" }
                        }
                    }
                }
            }
        },
    )
}

fn search_form(query: Option<&MarketQuery>) -> Markup {
    html! {
        form class="stacked" action="/market/search" method="post" {
            label for="make" { "Make" }
            input type="text" name="make" id="make" required
                value=(query.map(|q| q.make.as_str()).unwrap_or(""));

            label for="model" { "Model" }
            input type="text" name="model" id="model" required
                value=(query.map(|q| q.model.as_str()).unwrap_or(""));

            label for="year" { "Year" }
            input type="number" name="year" id="year" min="1980" max="2030"
                value=(query.map(|q| q.year).unwrap_or(2015));

            label for="max_price" { "Max Price (0 for no cap)" }
            input type="number" name="max_price" id="max_price" min="0" step="any"
                value=(query.map(|q| q.max_price).unwrap_or(0.0));

            p { button type="submit" { "Search" } }
        }
    }
}

// Hidden copy of the active query so a post from the results page can
// land back on the same results.
fn query_echo(query: &MarketQuery) -> Markup {
    html! {
        input type="hidden" name="make" value=(query.make);
        input type="hidden" name="model" value=(query.model);
        input type="hidden" name="year" value=(query.year);
        input type="hidden" name="max_price" value=(query.max_price);
    }
}
