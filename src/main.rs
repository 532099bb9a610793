//! # charsearch Main Entry Point
//!
//! Lists characters, then searches as you type one query per line.

use anyhow::{Context, Result};
use charsearch::{
    config, AppController, ApiCharacterRepository, CharacterApiClient, CharacterRepository,
    CommandLineArgs,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();

    let profile_name = cmd_args.profile();
    let profile_path = config::get_profile_path();
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);
    let settings = config::load_settings(profile_name, &profile_path)?;

    let client = CharacterApiClient::new(&settings.base_url)
        .with_context(|| format!("invalid base URL '{}'", settings.base_url))?;
    let repository: Arc<dyn CharacterRepository> = Arc::new(ApiCharacterRepository::new(client));

    let mut app = AppController::new(repository, &settings, std::io::stdout(), cmd_args.verbose());

    if let Some(query) = cmd_args.query() {
        return app.run_once(query).await;
    }

    if atty::is(atty::Stream::Stdin) {
        println!("Type a name and press Enter to search, Ctrl+D to quit");
    }
    app.run(BufReader::new(tokio::io::stdin())).await
}

fn init_tracing_subscriber() {
    let mut filter = EnvFilter::from_env(format!(
        "{}_LOG_LEVEL",
        env!("CARGO_PKG_NAME").to_uppercase()
    ));
    for directive in ["reqwest=warn", "hyper=warn", "hyper_util=warn", "rustls=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
