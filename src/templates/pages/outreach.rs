// templates/pages/outreach.rs

use maud::{html, Markup};

use crate::outreach::Draft;
use crate::templates::desktop_layout;

/// Preview of a drafted sourcing inquiry, with a send form when a mail
/// service is configured.
pub fn inquiry_preview_page(draft: &Draft, mailer_configured: bool) -> Markup {
    desktop_layout(
        "Outreach",
        html! {
            h1 { "Sourcing Inquiry" }

            section class="card" {
                h3 { (draft.subject) }
                pre class="letter" { (draft.body) }
            }

            section class="card" {
                h3 { "Send" }
                @if mailer_configured {
                    form class="stacked" action="/outreach/send" method="post" {
                        input type="hidden" name="subject" value=(draft.subject);
                        input type="hidden" name="body" value=(draft.body);

                        label for="to" { "Dealership email" }
                        input type="email" name="to" id="to" required;

                        p { button type="submit" { "Send Inquiry" } }
                    }
                } @else {
                    p class="empty" {
                        "No mail service configured. Set BREVO_API_KEY and restart to send \
                         from here, or copy the text above."
                    }
                }
            }
        },
    )
}

pub fn inquiry_sent_page(to: &str) -> Markup {
    desktop_layout(
        "Outreach",
        html! {
            h1 { "Sourcing Inquiry" }
            p class="flash" { "Email sent to " (to) "." }
            p { a href="/market" { "Back to Market Research" } }
        },
    )
}
