use maud::{html, Markup, PreEscaped, DOCTYPE};

const MAIN_CSS: &str = "
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2430; }
header { display: flex; align-items: center; justify-content: space-between;
         padding: 0.6rem 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,0.15); }
header h3 { margin: 0; color: #524ed2; }
nav ul { list-style: none; display: flex; gap: 1rem; margin: 0; padding: 0;
         flex-wrap: wrap; }
nav a { text-decoration: none; color: #1f2430; }
nav a:hover { color: #524ed2; }
main.container { max-width: 980px; margin: 1.5rem auto; padding: 0 1rem; }
.card { border: 1px solid #e2e2ea; border-radius: 8px; padding: 1rem 1.25rem;
        margin-bottom: 1.25rem; }
.card h3 { margin-top: 0; }
table { border-collapse: collapse; width: 100%; font-size: 0.95rem; }
th, td { border-bottom: 1px solid #e2e2ea; padding: 0.4rem 0.6rem;
         text-align: left; }
th { background: #f7f7fb; }
form.stacked label { display: block; margin: 0.5rem 0 0.15rem; }
input, select, textarea { padding: 6px; font-size: 1rem; }
button { padding: 8px 16px; font-size: 1rem; cursor: pointer; }
.metric-grid { display: flex; gap: 1rem; flex-wrap: wrap; margin: 1rem 0; }
.metric { border: 1px solid #e2e2ea; border-radius: 8px; padding: 0.8rem 1.4rem;
          text-align: center; min-width: 7rem; }
.metric-value { display: block; font-size: 1.8rem; font-weight: bold; }
.metric-label { color: #555; }
.flash { background: #e7f7ee; border: 1px solid #10b981; border-radius: 6px;
         padding: 0.6rem 1rem; }
.empty { color: #555; font-style: italic; }
pre.letter { background: #f7f7fb; border: 1px solid #e2e2ea; border-radius: 6px;
             padding: 1rem; white-space: pre-wrap; }
.bar { background: #524ed2; height: 0.9rem; border-radius: 3px; }
";

/// Shared page chrome: header with the section nav, then the page body.
pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | VelocityCarDeals CRM" }
                style { (PreEscaped(MAIN_CSS)) }
            }
            body {
                header {
                    h3 { "VelocityCarDeals CRM" }
                    nav {
                        ul {
                            li { a href="/" { "Dashboard" } }
                            li { a href="/vehicles" { "Vehicles" } }
                            li { a href="/market" { "Market Research" } }
                            li { a href="/transactions" { "Transactions" } }
                            li { a href="/follow-ups" { "Follow-ups" } }
                            li { a href="/contacts" { "Contacts" } }
                            li { a href="/tools" { "Dealer Tools" } }
                            li { a href="/analytics" { "Analytics" } }
                            li { a href="/settings" { "Settings" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
