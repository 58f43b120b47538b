use newsletter_signup::backend::SimulatedBackend;
use newsletter_signup::configuration::get_configuration;
use newsletter_signup::subscription::subscribe;
use newsletter_signup::telemetry::{get_subscriber, init_subscriber};
use std::io::Write;

/// A terminal stand-in for the signup form: prompt for an address, submit it, and either show the
/// inline error and offer the form again, or show the confirmation view and stop. Awaiting each
/// submission before re-prompting is what keeps at most one call in flight, the same discipline a
/// form enforces by disabling its submit button while a request is pending.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration()?;

    let subscriber = get_subscriber(
        configuration.application.name.clone(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let backend = SimulatedBackend::new(configuration.backend.latency());

    println!("Subscribe to My Newsletter");
    println!("Get the latest updates, tips, and exclusive content delivered straight to your inbox.");

    loop {
        print!("Enter your email: ");
        std::io::stdout().flush()?;

        let mut candidate = String::new();
        // EOF means the user closed the stream; treat it like walking away from the form.
        if std::io::stdin().read_line(&mut candidate)? == 0 {
            break;
        }

        let outcome = subscribe(candidate.trim(), &backend).await;
        if outcome.success {
            println!("Thank you! {}", outcome.message);
            println!(
                "We've sent a confirmation email to {}. We respect your privacy. Unsubscribe at any time.",
                candidate.trim()
            );
            break;
        }

        println!("{}", outcome.message);
    }

    Ok(())
}
