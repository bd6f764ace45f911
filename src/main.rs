use std::sync::Arc;

use zepeda_site::contact::{ContactState, contact_routes};
use zepeda_site::pages::site_routes;
use zepeda_site::sms::SmsForwarder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    // Forwarder config is read once at startup; missing Twilio credentials
    // put it in log-only mode rather than failing the server.
    let forwarder = Arc::new(SmsForwarder::from_env());

    let app = site_routes().merge(contact_routes(ContactState { forwarder }));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(port, "Site server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
