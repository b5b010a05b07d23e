use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod commands;
mod domain;
mod errors;
mod mailer;
mod market;
mod outreach;
mod reports;
mod responses;
mod router;
mod state;
mod store;
mod templates;

#[cfg(test)]
mod tests;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn main() {
    // 1️⃣ Build the shared state: empty store, mailer if configured
    let state = Arc::new(AppState::from_env());

    if state.mailer.is_some() {
        println!("📧 Outreach mail enabled (Brevo)");
    } else {
        println!("📧 No BREVO_API_KEY set; outreach emails are preview-only");
    }

    // 2️⃣ Resolve the bind address
    let addr = std::env::var("CRM_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = match addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid CRM_ADDR '{addr}': {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    println!("Starting VelocityCarDeals CRM at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(&err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
