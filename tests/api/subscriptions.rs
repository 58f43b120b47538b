use crate::helpers::{init_tracing, CountingBackend, FailingBackend};
use newsletter_signup::backend::SimulatedBackend;
use newsletter_signup::subscription::{
    subscribe, CONFIRMATION_MESSAGE, GENERIC_FAILURE_MESSAGE,
};
use std::time::Duration;

#[tokio::test]
async fn a_valid_email_is_subscribed_successfully() {
    // Arrange
    init_tracing();
    let backend = CountingBackend::new();

    // Act
    let outcome = subscribe("ursula_le_guin@gmail.com", &backend).await;

    // Assert
    assert!(outcome.success);
    assert_eq!(outcome.message, CONFIRMATION_MESSAGE);
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn an_invalid_email_is_rejected_without_reaching_the_backend() {
    // Arrange
    init_tracing();
    let backend = CountingBackend::new();

    // Act
    let outcome = subscribe("not-an-email", &backend).await;

    // Assert
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Please enter a valid email address");
    // The workflow must bail out before performing the remote call.
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn an_empty_submission_reports_the_missing_address() {
    // Arrange
    init_tracing();
    let backend = CountingBackend::new();

    // Act
    let outcome = subscribe("", &backend).await;

    // Assert
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Email is required");
    assert_eq!(backend.calls(), 0);
}

/// `start_paused` freezes tokio's clock: time only advances when every task is idle, and then it
/// jumps straight to the next timer deadline. That makes the latency assertion exact instead of
/// "roughly 1500ms, give or take scheduler noise".
#[tokio::test(start_paused = true)]
async fn subscription_resolves_only_after_the_simulated_latency() {
    // Arrange
    init_tracing();
    let latency = Duration::from_millis(1500);
    let backend = SimulatedBackend::new(latency);
    let started_at = tokio::time::Instant::now();

    // Act
    let outcome = subscribe("ursula_le_guin@gmail.com", &backend).await;

    // Assert
    assert!(outcome.success);
    assert_eq!(outcome.message, CONFIRMATION_MESSAGE);
    // The paused clock advanced by exactly the artificial delay: the call resolved after the
    // latency elapsed and not a moment before.
    assert_eq!(started_at.elapsed(), latency);
}

#[tokio::test]
async fn a_backend_failure_surfaces_the_generic_retry_message() {
    // Arrange
    init_tracing();
    let backend = FailingBackend::new();

    // Act
    let outcome = subscribe("ursula_le_guin@gmail.com", &backend).await;

    // Assert
    assert!(!outcome.success);
    assert_eq!(outcome.message, GENERIC_FAILURE_MESSAGE);
    // The failure happened in the backend, not before it: exactly one call was attempted and it
    // was not retried.
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn sequential_submissions_are_independent() {
    // Arrange
    init_tracing();
    let backend = CountingBackend::new();

    // Act - a successful submission followed by an invalid one.
    let first = subscribe("ursula_le_guin@gmail.com", &backend).await;
    let second = subscribe("not-an-email", &backend).await;

    // Assert - no residual state from the first call leaks into the second.
    assert!(first.success);
    assert!(!second.success);
    assert_eq!(second.message, "Please enter a valid email address");
    assert_eq!(backend.calls(), 1);

    // And the other way around: a rejection does not poison a later valid submission.
    let third = subscribe("ursula_le_guin@gmail.com", &backend).await;
    assert!(third.success);
    assert_eq!(third.message, CONFIRMATION_MESSAGE);
    assert_eq!(backend.calls(), 2);
}
