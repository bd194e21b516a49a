use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordbook::{config, repl, store};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wordbook=warn".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let settings = config::load_settings();

  if let Err(e) = store::category::seed_starter_category() {
    tracing::warn!("Failed to seed starter category: {}", e);
  }

  if let Err(e) = repl::run(settings).await {
    eprintln!("wordbook exited with an error: {e}");
    std::process::exit(1);
  }
}
