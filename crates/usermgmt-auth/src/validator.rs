use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::Arc;

use usermgmt_config::AuthConfig;

/// Token value that is always rejected.
pub const DENIED_TOKEN: &str = "invalid";

/// Decides whether a raw bearer token is acceptable.
///
/// Validity is a pure function of the token value: no session, no expiry.
pub trait TokenValidator: Send + Sync + Debug {
    fn is_valid(&self, token: &str) -> bool;
}

fn is_denied(token: &str) -> bool {
    token.is_empty() || token == DENIED_TOKEN
}

/// Accepts every token except the empty one and [`DENIED_TOKEN`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTokenValidator;

impl TokenValidator for PlaceholderTokenValidator {
    fn is_valid(&self, token: &str) -> bool {
        !is_denied(token)
    }
}

/// Accepts only tokens from a fixed set.
#[derive(Debug, Clone, Default)]
pub struct AllowListTokenValidator {
    tokens: HashSet<String>,
}

impl AllowListTokenValidator {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl TokenValidator for AllowListTokenValidator {
    fn is_valid(&self, token: &str) -> bool {
        !is_denied(token) && self.tokens.contains(token)
    }
}

/// Picks the validator described by the configuration.
pub fn validator_from_config(config: &AuthConfig) -> Arc<dyn TokenValidator> {
    match &config.tokens {
        Some(tokens) => Arc::new(AllowListTokenValidator::new(tokens.iter().cloned())),
        None => Arc::new(PlaceholderTokenValidator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_rejects_empty() {
        assert!(!PlaceholderTokenValidator.is_valid(""));
    }

    #[test]
    fn test_placeholder_rejects_sentinel() {
        assert!(!PlaceholderTokenValidator.is_valid("invalid"));
    }

    #[test]
    fn test_placeholder_accepts_anything_else() {
        assert!(PlaceholderTokenValidator.is_valid("anything-else"));
        assert!(PlaceholderTokenValidator.is_valid("INVALID"));
        assert!(PlaceholderTokenValidator.is_valid("Bearer"));
    }

    #[test]
    fn test_allow_list_accepts_only_listed() {
        let validator = AllowListTokenValidator::new(["alpha", "beta"]);
        assert!(validator.is_valid("alpha"));
        assert!(validator.is_valid("beta"));
        assert!(!validator.is_valid("gamma"));
        assert!(!validator.is_valid(""));
    }

    #[test]
    fn test_allow_list_never_accepts_sentinel() {
        let validator = AllowListTokenValidator::new([DENIED_TOKEN]);
        assert!(!validator.is_valid(DENIED_TOKEN));
    }

    #[test]
    fn test_from_config_selects_implementation() {
        let placeholder = validator_from_config(&AuthConfig::default());
        assert!(placeholder.is_valid("whatever"));

        let allow_list = validator_from_config(&AuthConfig::from_raw(Some("secret")));
        assert!(allow_list.is_valid("secret"));
        assert!(!allow_list.is_valid("whatever"));
    }
}
