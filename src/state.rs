use std::sync::Arc;

use usermgmt_auth::{TokenValidator, validator_from_config};
use usermgmt_config::{AuthConfig, CorsConfig};

use crate::modules::users::store::UserStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub token_validator: Arc<dyn TokenValidator>,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Fresh state around an empty store.
    pub fn new(token_validator: Arc<dyn TokenValidator>, cors_config: CorsConfig) -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            token_validator,
            cors_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(
        validator_from_config(&AuthConfig::from_env()),
        CorsConfig::from_env(),
    )
}
