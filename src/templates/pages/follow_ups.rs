// templates/pages/follow_ups.rs

use chrono::NaiveDate;
use maud::{html, Markup};

use crate::domain::follow_up::FollowUp;
use crate::templates::components::{flash, follow_up_table};
use crate::templates::desktop_layout;

pub fn follow_ups_page(
    entries: &[&FollowUp],
    pending_only: bool,
    today: NaiveDate,
    message: Option<&str>,
) -> Markup {
    desktop_layout(
        "Follow-ups",
        html! {
            h1 { "Follow-up Tracker" }

            @if let Some(message) = message {
                (flash(message))
            }

            section class="card" {
                h3 { "Log Dealership Contact" }
                form class="stacked" action="/follow-ups" method="post" {
                    label for="dealership" { "Dealership" }
                    input type="text" name="dealership" id="dealership" required;

                    label for="phone" { "Phone" }
                    input type="text" name="phone" id="phone";

                    label for="email" { "Email" }
                    input type="email" name="email" id="email";

                    label for="message" { "Message" }
                    textarea name="message" id="message" rows="3" {}

                    label for="date" { "Date Sent" }
                    input type="date" name="date" id="date" required;

                    p {
                        label {
                            input type="checkbox" name="needs_follow_up" checked;
                            " Needs follow-up"
                        }
                    }

                    p { button type="submit" { "Log Follow-up" } }
                }
            }

            section class="card" {
                h3 { "Logged Contacts" }
                p {
                    @if pending_only {
                        a href="/follow-ups" { "Show all" }
                    } @else {
                        a href="/follow-ups?pending=1" { "Show only contacts needing follow-up" }
                    }
                }
                @if entries.is_empty() {
                    p class="empty" {
                        @if pending_only { "Nothing waiting on a follow-up." }
                        @else { "No follow-ups logged yet." }
                    }
                } @else {
                    (follow_up_table(entries, today, pending_only))
                }
            }
        },
    )
}
