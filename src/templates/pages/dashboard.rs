use maud::{html, Markup};

use crate::domain::vehicle::Vehicle;
use crate::reports::profit::StatusBreakdown;
use crate::templates::components::{metric, vehicle_table};
use crate::templates::desktop_layout;

pub fn dashboard_page(breakdown: &StatusBreakdown, recent: &[&Vehicle]) -> Markup {
    desktop_layout(
        "Dashboard",
        html! {
            h1 { "Business Dashboard" }

            div class="metric-grid" {
                (metric("Total Cars", breakdown.total()))
                (metric("Watching", breakdown.watching))
                (metric("Purchased", breakdown.purchased))
                (metric("Sold", breakdown.sold))
            }

            @if recent.is_empty() {
                p class="empty" { "No cars yet. Add your first one from the Vehicles page." }
            } @else {
                section class="card" {
                    h3 { "Recent Cars" }
                    (vehicle_table(recent))
                }
            }
        },
    )
}
