/// Initialize the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "donation_ledger=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
