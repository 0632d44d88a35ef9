//! Top-level handler example showing how to route recommendation service errors.
//!
//! This example shows how to:
//! - Raise each error kind from the layer that owns it
//! - Propagate errors unchanged with `?`
//! - Map the discriminant to a response status
//! - Report errors once, at the handler, with `DomainError::log`
//! - Convert errors to user-friendly messages
//!
//! # Running
//!
//! ```bash
//! RUST_LOG=recommender_errors=info cargo run --example recommendation_handler
//! ```

use recommender_errors::{DomainError, DomainErrorKind, DomainResult};
use tracing_subscriber::EnvFilter;

struct Request<'a> {
    token: &'a str,
    top_k: i64,
}

fn authenticate(token: &str) -> DomainResult<()> {
    if token.starts_with("Bearer ") {
        Ok(())
    } else {
        Err(DomainError::authentication("invalid token"))
    }
}

fn validate(top_k: i64) -> DomainResult<usize> {
    usize::try_from(top_k)
        .ok()
        .filter(|k| *k > 0)
        .ok_or_else(|| DomainError::invalid_argument("top_k must be positive"))
}

fn compute(top_k: usize, catalogue: &[&str]) -> DomainResult<Vec<String>> {
    if catalogue.is_empty() {
        return Err(DomainError::recommendation("no candidates found"));
    }
    Ok(catalogue.iter().take(top_k).map(|s| s.to_string()).collect())
}

fn recommend(request: &Request<'_>, catalogue: &[&str]) -> DomainResult<Vec<String>> {
    authenticate(request.token)?;
    let top_k = validate(request.top_k)?;
    compute(top_k, catalogue)
}

/// Map a domain error to (status, body) the way an HTTP front end might
fn respond(error: &DomainError) -> (u16, String) {
    let status = match error.kind() {
        DomainErrorKind::Authentication => 401,
        DomainErrorKind::InvalidArgument => 400,
        DomainErrorKind::Recommendation => 503,
    };
    (status, error.user_message())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("recommender_errors=info".parse()?),
        )
        .init();

    let catalogue = ["espresso", "croissant", "muffin"];
    let cases: [(&str, Request<'_>, &[&str]); 4] = [
        ("valid", Request { token: "Bearer abc", top_k: 2 }, &catalogue),
        ("bad token", Request { token: "abc", top_k: 2 }, &catalogue),
        ("bad top_k", Request { token: "Bearer abc", top_k: 0 }, &catalogue),
        ("empty catalogue", Request { token: "Bearer abc", top_k: 2 }, &[]),
    ];

    println!("=== Recommendation Handler ===\n");
    for (label, request, items) in &cases {
        match recommend(request, items) {
            Ok(recommendations) => println!("{label}: 200 {recommendations:?}"),
            Err(error) => {
                error.log();
                let (status, body) = respond(&error);
                println!("{label}: {status} {body}");
                println!("  kind:     {}", error.kind());
                println!("  category: {:?}", error.category());
                println!("  message:  {}", error.message());
            }
        }
    }

    Ok(())
}
