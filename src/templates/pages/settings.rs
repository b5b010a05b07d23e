// templates/pages/settings.rs

use maud::{html, Markup};

use crate::templates::components::{card, flash};
use crate::templates::desktop_layout;

pub fn settings_page(message: Option<&str>) -> Markup {
    desktop_layout(
        "Settings",
        html! {
            h1 { "Settings & Export" }

            @if let Some(message) = message {
                (flash(message))
            }

            (card("Download Reports", html! {
                ul {
                    li { a href="/export/vehicles.csv" { "Download CRM CSV Report" } }
                    li { a href="/export/contacts.csv" { "Download Contacts CSV Report" } }
                }
            }))

            (card("Clear Data", html! {
                p class="empty" {
                    "Records live in memory only. Clearing cannot be undone, and a restart \
                     clears everything anyway."
                }
                form action="/settings/clear-vehicles" method="post"
                    style="display: inline-block; margin-right: 0.5rem;" {
                    button type="submit" { "Clear All CRM Data" }
                }
                form action="/settings/clear-contacts" method="post"
                    style="display: inline-block;" {
                    button type="submit" { "Clear Contacts Data" }
                }
            }))
        },
    )
}
