//! Failure handling for market queries.

/// How [`MarketClient`](super::MarketClient) reacts to a non-200 answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the status and return an empty result.
    ///
    /// `is_available` still fails. Every other error kind is returned.
    #[default]
    Compat,
    /// Return every failure as an error.
    Strict,
}

impl FailurePolicy {
    /// Whether a non-200 answer is turned into an empty result.
    pub fn swallows_http_failures(&self) -> bool {
        matches!(self, FailurePolicy::Compat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compat() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::Compat);
        assert!(FailurePolicy::Compat.swallows_http_failures());
        assert!(!FailurePolicy::Strict.swallows_http_failures());
    }
}
