//! Test helper utilities for recommender-errors integration tests
//!
//! Simulates the service layers that raise domain errors so tests can drive
//! realistic propagation paths.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use recommender_errors::{DomainError, DomainResult};

/// A recommendation request as the input-validation layer sees it
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub token: String,
    pub user_id: String,
    pub top_k: i64,
}

impl RecommendationRequest {
    /// A request that passes every layer
    pub fn valid() -> Self {
        Self {
            token: "valid-token".to_string(),
            user_id: "user-1".to_string(),
            top_k: 3,
        }
    }
}

/// Authentication layer
pub fn authenticate(token: &str) -> DomainResult<()> {
    if token == "valid-token" {
        Ok(())
    } else {
        Err(DomainError::authentication("invalid token"))
    }
}

/// Input-validation layer
pub fn validate(request: &RecommendationRequest) -> DomainResult<usize> {
    if request.user_id.is_empty() {
        return Err(DomainError::invalid_argument("user_id is required"));
    }
    usize::try_from(request.top_k)
        .ok()
        .filter(|k| *k > 0)
        .ok_or_else(|| DomainError::invalid_argument("top_k must be positive"))
}

/// Recommendation-computation layer over a fixed catalogue
pub fn compute(user_id: &str, top_k: usize, catalogue: &[&str]) -> DomainResult<Vec<String>> {
    if catalogue.is_empty() {
        return Err(DomainError::recommendation(format!(
            "no candidates found for {user_id}"
        )));
    }
    Ok(catalogue.iter().take(top_k).map(|s| s.to_string()).collect())
}

/// Full request path; every layer's error propagates unmodified through `?`
pub fn recommend(request: &RecommendationRequest, catalogue: &[&str]) -> DomainResult<Vec<String>> {
    authenticate(&request.token)?;
    let top_k = validate(request)?;
    compute(&request.user_id, top_k, catalogue)
}
