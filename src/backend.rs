use crate::domain::SubscriberEmail;
use std::time::Duration;

/// The seam between the submission workflow and whatever service actually records subscribers.
///
/// The workflow only ever sees this trait, so swapping the simulated backend for a real network
/// client (or for an instrumented double in tests) changes nothing in the caller contract. Note
/// that `register` takes a [`SubscriberEmail`], not a raw string: by the time a request reaches
/// a backend, validation has already happened by construction.
pub trait SubscriptionBackend {
    /// Record `email` as a new subscriber.
    ///
    /// Failures are unexpected by definition - there is no structured error vocabulary a caller
    /// could act on, hence the opaque `anyhow::Error`. The workflow converts any failure into a
    /// generic "try again later" outcome.
    fn register(
        &self,
        email: &SubscriberEmail,
    ) -> impl std::future::Future<Output = Result<(), anyhow::Error>> + Send;
}

/// A stand-in for a real subscription service.
///
/// It models the one property of a remote call that matters to the caller: latency. `register`
/// suspends for a fixed duration and then succeeds; there is no transport underneath and nothing
/// is persisted. The sleep is the single suspension point of the whole submission path - once a
/// call starts it always resolves, no cancellation, no timeout distinct from the delay itself.
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl SubscriptionBackend for SimulatedBackend {
    #[tracing::instrument(
        name = "Registering subscriber with the newsletter service",
        skip(self),
        fields(subscriber_email = %email)
    )]
    async fn register(&self, email: &SubscriberEmail) -> Result<(), anyhow::Error> {
        // Artificial latency standing in for the round-trip of a real subscription request.
        tokio::time::sleep(self.latency).await;

        // In a real deployment this is where the subscriber record would be handed to the
        // newsletter service.
        tracing::info!("Subscribing email: {}", email);

        Ok(())
    }
}
