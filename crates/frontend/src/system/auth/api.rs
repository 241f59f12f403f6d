use contracts::system::auth::{LoginRequest, RegistrationRequest};
use serde_json::Value;

use crate::shared::api_utils::{ApiClient, FetchError};

/// Login with email and password. The response body is not interpreted.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<Value, FetchError> {
    log::info!("login attempt for {}", request.email.trim());
    client.post_json("/user/login", request).await
}

/// Register a new user
pub async fn register(
    client: &ApiClient,
    request: &RegistrationRequest,
) -> Result<Value, FetchError> {
    log::info!("registration for {}", request.email.trim());
    client.post_json("/user/registration", request).await
}
