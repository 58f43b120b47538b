use crate::backend::SubscriptionBackend;
use crate::domain::{EmailValidationError, SubscriberEmail};

/// The outcome of a subscription attempt, in the exact shape the presentation layer consumes to
/// pick between its two views: "form with an inline error" and "confirmation".
///
/// Invariant: `success == true` always carries the positive confirmation message; `success == false`
/// always carries exactly one failure reason, with validation failures taking precedence over
/// backend failures (an invalid address never reaches the backend, so the two can never both
/// occur for the same call).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubscriptionResult {
    pub success: bool,
    pub message: String,
}

pub const CONFIRMATION_MESSAGE: &str = "You've been successfully subscribed!";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

impl SubscriptionResult {
    fn subscribed() -> Self {
        Self {
            success: true,
            message: CONFIRMATION_MESSAGE.into(),
        }
    }

    fn rejected(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Everything that can go wrong between receiving a candidate address and hearing back from the
/// backend. The two variants are handled differently at the workflow boundary: a validation error
/// is user-facing copy, a backend error is logged and replaced by a generic message.
#[derive(thiserror::Error, Debug)]
enum SubscribeError {
    #[error(transparent)]
    Validation(#[from] EmailValidationError),
    #[error("Failed to register the subscriber with the newsletter service")]
    Backend(#[source] anyhow::Error),
}

/// Attempt to subscribe `candidate` to the newsletter.
///
/// The workflow re-validates the candidate even if the caller already did - it must not trust
/// upstream validation. On a validation failure it resolves immediately and the backend is never
/// called. On a valid address it performs exactly one backend call: no retries, no deduplication,
/// no cancellation. Every failure mode is converted into a [`SubscriptionResult`] right here;
/// no error escapes to the caller.
///
/// Calls are fully independent - no state survives from one invocation to the next, so invoking
/// `subscribe` twice performs two backend calls. Keeping at most one call in flight per form is
/// the caller's job (the driver disables re-entry by awaiting each result before prompting again).
#[tracing::instrument(name = "Subscribing a new email to the newsletter", skip(backend))]
pub async fn subscribe(
    candidate: &str,
    backend: &impl SubscriptionBackend,
) -> SubscriptionResult {
    match try_subscribe(candidate, backend).await {
        Ok(()) => SubscriptionResult::subscribed(),
        Err(SubscribeError::Validation(reason)) => {
            tracing::info!("Rejected candidate address: {reason}");
            SubscriptionResult::rejected(reason.to_string())
        }
        Err(SubscribeError::Backend(cause)) => {
            tracing::error!(error.cause_chain = ?cause, "Subscription request failed");
            SubscriptionResult::rejected(GENERIC_FAILURE_MESSAGE.into())
        }
    }
}

async fn try_subscribe(
    candidate: &str,
    backend: &impl SubscriptionBackend,
) -> Result<(), SubscribeError> {
    // `?` converts the validation error via the `From` implementation generated by `thiserror`.
    let email = SubscriberEmail::parse(candidate.to_owned())?;

    backend
        .register(&email)
        .await
        .map_err(SubscribeError::Backend)?;

    Ok(())
}
