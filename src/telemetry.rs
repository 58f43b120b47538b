use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Compose multiple layers into a `tracing` subscriber.
///
/// # Layers
/// `tracing-subscriber` introduces the `Layer` trait: instead of one all-encompassing subscriber,
/// we build a *processing pipeline* out of smaller pieces. The cornerstone is `Registry`, which
/// does not record traces itself - it stores span metadata and relationships and exposes them to
/// the layers wrapped around it: here a filter, the JSON storage layer and the bunyan formatter.
///
/// # Implementation Notes
/// We are using `impl Subscriber` as return type to avoid having to spell out the actual type of
/// the returned subscriber, which is indeed quite complex. The `Sink` parameter lets callers
/// choose where the formatted records go - `std::io::stdout` for the binary, `std::io::sink` in
/// tests to keep the output quiet unless `TEST_LOG` is set.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // Fall back to printing all spans at `env_filter` level or above if the RUST_LOG environment
    // variable has not been set.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    // The `with` method is provided by `SubscriberExt`, an extension trait for `Subscriber`
    // exposed by `tracing_subscriber`.
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Register a subscriber as global default to process span data.
///
/// It should only be called once!
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    // Redirect all `log`'s events to our subscriber.
    LogTracer::init().expect("Failed to set logger");
    // `set_global_default` specifies what subscriber should be used to process spans.
    set_global_default(subscriber).expect("Failed to set subscriber");
}
