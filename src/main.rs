use satchel_store::KvStore;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting satchel");

    let mut store = KvStore::new();
    store.insert("a", "1");
    store.insert("a", "2");
    store.insert("b", "3");

    tracing::info!(inserted = 3, "Demo pairs stored");
}
