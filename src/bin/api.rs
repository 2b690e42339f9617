use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tubesum::{app_state::AppState, config::Config, routes, summarizer::stopwords};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;

    // Shared read-only resources are loaded before the first request.
    let stopwords = stopwords::warm_up();
    info!(stopwords, "stopword set loaded");

    let app = routes::router(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(
        addr = %config.bind_addr(),
        transcript_timeout = ?config.transcript_timeout(),
        "tubesum listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
