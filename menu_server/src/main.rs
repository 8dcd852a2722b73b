//! Menu server: reads config from the environment (and `.env`), seeds the store,
//! and serves the GraphQL endpoint plus health routes.
//!
//! Run from repo root: `cargo run -p menu-server`

use menu_graphql::{app, load_from_env, AppState, MenuStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("menu_graphql=info,menu_server=info")),
        )
        .init();

    let config = load_from_env()?;
    let store = if config.seed {
        MenuStore::seeded(config.id_strategy)
    } else {
        MenuStore::new(config.id_strategy)
    };
    tracing::info!(
        id_strategy = ?config.id_strategy,
        update_policy = ?config.update_policy,
        seed = config.seed,
        "menu store ready"
    );

    let state = AppState::new(store, config.update_policy);
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("GraphQL endpoint at http://{}/graphql", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
