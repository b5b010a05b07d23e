// templates/pages/vehicles.rs

use maud::{html, Markup};

use crate::domain::vehicle::{Vehicle, MAX_YEAR, MIN_YEAR};
use crate::templates::components::{flash, vehicle_table};
use crate::templates::desktop_layout;

pub fn vehicles_page(vehicles: &[&Vehicle], message: Option<&str>) -> Markup {
    desktop_layout(
        "Vehicles",
        html! {
            h1 { "Vehicles" }

            @if let Some(message) = message {
                (flash(message))
            }

            section class="card" {
                h3 { "Add Car to Watchlist" }
                form class="stacked" action="/vehicles" method="post" {
                    label for="vin" { "VIN" }
                    input type="text" name="vin" id="vin" required;

                    label for="make" { "Make" }
                    input type="text" name="make" id="make" required;

                    label for="model" { "Model" }
                    input type="text" name="model" id="model" required;

                    label for="year" { "Year" }
                    input type="number" name="year" id="year"
                        min=(MIN_YEAR) max=(MAX_YEAR) value="2015" required;

                    h4 { "Seller contact (optional)" }
                    label for="seller_name" { "Seller Name" }
                    input type="text" name="seller_name" id="seller_name";

                    label for="seller_phone" { "Seller Phone" }
                    input type="text" name="seller_phone" id="seller_phone";

                    p { button type="submit" { "Add Car" } }
                }
            }

            section class="card" {
                h3 { "Inventory" }
                @if vehicles.is_empty() {
                    p class="empty" { "Nothing in the pipeline yet." }
                } @else {
                    (vehicle_table(vehicles))
                }
            }
        },
    )
}
