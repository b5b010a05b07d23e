// templates/pages/analytics.rs

use maud::{html, Markup};

use crate::outreach::usd;
use crate::reports::profit::StatusBreakdown;
use crate::templates::desktop_layout;

pub fn analytics_page(
    months: &[(String, f64)],
    total_profit: f64,
    breakdown: &StatusBreakdown,
) -> Markup {
    // Widths for the inline profit bars, scaled against the best month.
    let best = months
        .iter()
        .map(|(_, p)| p.abs())
        .fold(0.0_f64, f64::max);

    desktop_layout(
        "Analytics",
        html! {
            h1 { "Analytics" }

            section class="card" {
                h3 { "Monthly Profit" }
                @if months.is_empty() {
                    p class="empty" { "No sales recorded yet." }
                } @else {
                    table {
                        thead {
                            tr { th { "Month" } th { "Profit" } th { } }
                        }
                        tbody {
                            @for (month, profit) in months {
                                tr {
                                    td { (month) }
                                    td { (usd(*profit)) }
                                    td style="width: 40%;" {
                                        @if *profit > 0.0 && best > 0.0 {
                                            div class="bar"
                                                style=(format!("width: {:.0}%;", profit / best * 100.0)) {}
                                        }
                                    }
                                }
                            }
                        }
                    }
                    p { "Total realized profit: " strong { (usd(total_profit)) } }
                }
            }

            section class="card" {
                h3 { "Inventory by Status" }
                @if breakdown.total() == 0 {
                    p class="empty" { "No cars tracked yet." }
                } @else {
                    table {
                        thead {
                            tr { th { "Status" } th { "Count" } }
                        }
                        tbody {
                            tr { td { "Watching" }  td { (breakdown.watching) } }
                            tr { td { "Purchased" } td { (breakdown.purchased) } }
                            tr { td { "Sold" }      td { (breakdown.sold) } }
                        }
                    }
                }
            }
        },
    )
}
