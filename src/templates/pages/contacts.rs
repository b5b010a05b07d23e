// templates/pages/contacts.rs

use maud::{html, Markup};

use crate::domain::contact::{Contact, ContactType};
use crate::templates::components::{contact_table, flash};
use crate::templates::desktop_layout;

pub fn contacts_page(contacts: &[&Contact], message: Option<&str>) -> Markup {
    desktop_layout(
        "Contacts",
        html! {
            h1 { "Contacts" }

            @if let Some(message) = message {
                (flash(message))
            }

            section class="card" {
                h3 { "Add Contact" }
                form class="stacked" action="/contacts" method="post" {
                    label for="name" { "Name" }
                    input type="text" name="name" id="name" required;

                    label for="phone" { "Phone" }
                    input type="text" name="phone" id="phone" required;

                    label for="kind" { "Type" }
                    select name="kind" id="kind" {
                        @for kind in ContactType::ALL {
                            option value=(kind.as_str()) { (kind) }
                        }
                    }

                    label for="associated_vin" { "Associated VIN (optional)" }
                    input type="text" name="associated_vin" id="associated_vin";

                    p { button type="submit" { "Add Contact" } }
                }
            }

            section class="card" {
                h3 { "Saved Contacts" }
                @if contacts.is_empty() {
                    p class="empty" { "No contacts saved yet." }
                } @else {
                    (contact_table(contacts))
                }
            }
        },
    )
}
