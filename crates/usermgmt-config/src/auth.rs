use std::env;

use crate::split_list;

/// Token validation settings.
///
/// `tokens` is `None` unless `AUTH_TOKENS` names at least one token, in which
/// case only those tokens are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub tokens: Option<Vec<String>>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self::from_raw(env::var("AUTH_TOKENS").ok().as_deref())
    }

    pub fn from_raw(raw: Option<&str>) -> Self {
        let tokens = raw.map(split_list).filter(|tokens| !tokens.is_empty());
        Self { tokens }
    }
}
