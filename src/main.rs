use petcare::{app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let state = AppState::init()?;
    let log = &state.config.log;

    if log.json {
        tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .init();
    }

    tracing::info!(
        round_to_cents = state.config.pricing.round_to_cents,
        missing_price = state.config.pricing.missing_price,
        "pricing options loaded"
    );

    let (host, port) = (state.config.host.clone(), state.config.port);
    let router = app::build_app(state);
    app::serve(router, &host, port).await
}
