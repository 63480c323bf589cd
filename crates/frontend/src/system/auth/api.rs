use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::users::Usuario;

use crate::shared::{ApiClient, ApiError, ApiRequest, Fetched};

/// Login with email and password; stores the returned token on success
pub async fn login(
    client: &ApiClient,
    email: String,
    contrasena: String,
) -> Result<LoginResponse, ApiError> {
    let request = ApiRequest::post("/login").json(&LoginRequest { email, contrasena })?;
    let response: LoginResponse = client.send(request).await?;
    client.tokens().set_token(&response.access_token);
    Ok(response)
}

/// Best-effort server logout; the local token is cleared in every case
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    let result = client.send::<serde_json::Value>(ApiRequest::post("/logout")).await;
    client.tokens().clear_token();
    result.map(|_| ())
}

/// Get current user info (empty user when unavailable)
pub async fn fetch_me(client: &ApiClient) -> Fetched<Usuario> {
    client
        .fetch_or(ApiRequest::get("/auth/me"), Usuario::default())
        .await
}
