use validator::validate_email;

/// The reason a candidate address was refused.
///
/// The `Display` implementation doubles as the inline message shown next to the form field, so the
/// wording here is user-facing copy, not debugging output.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    #[error("Email is required")]
    EmptyInput,
    #[error("Please enter a valid email address")]
    MalformedAddress,
}

/// # Type Driven Development
/// Making an incorrect usage pattern unrepresentable, by construction, is known as *type driven
/// development*: we encode the constraints of the domain we are modelling inside the type system
/// and lean on the compiler to enforce them.
///
/// `SubscriberEmail` is such a "new-type": the only way to obtain one is via [`SubscriberEmail::parse`],
/// therefore every instance in the program is known to have passed validation. Everything downstream
/// of parsing (the submission workflow, the backend seam) can take a `SubscriberEmail` and stop
/// worrying about malformed input.
#[derive(Debug, Clone)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Returns an instance of `SubscriberEmail` if the input satisfies our validation constraints
    /// on email addresses, the matching [`EmailValidationError`] otherwise.
    ///
    /// The check is deliberately permissive - the general shape `local-part@domain`, with a `.`
    /// somewhere in the domain - rather than full RFC 5322 compliance. Rejecting an exotic but
    /// technically legal address is acceptable; accepting a structurally malformed one is not.
    /// This is the single canonical rule: both the form-level check and the submission workflow
    /// go through `parse`, so they cannot drift apart on edge cases.
    pub fn parse(s: String) -> Result<SubscriberEmail, EmailValidationError> {
        // `.trim()` returns a view over the input `s` without leading/trailing whitespace-like
        // characters. A whitespace-only submission is reported as a missing address, not a
        // malformed one.
        if s.trim().is_empty() {
            return Err(EmailValidationError::EmptyInput);
        }

        if !validate_email(&s) || !domain_contains_separator(&s) {
            return Err(EmailValidationError::MalformedAddress);
        }

        Ok(Self(s))
    }
}

/// `validate_email` accepts addresses whose domain has no `.` separator (e.g. `user@localhost`).
/// Those are legal on an intranet but never what a newsletter subscriber meant to type, so we
/// require at least one separator after the last `@`.
fn domain_contains_separator(s: &str) -> bool {
    s.rsplit_once('@')
        .map_or(false, |(_, domain)| domain.contains('.'))
}

/// The caller gets a shared reference to the inner string. This gives the caller **read-only**
/// access, they have no way to compromise our invariants!
impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // We just forward to the Display implementation of the wrapped String.
        self.0.fmt(f)
    }
}
