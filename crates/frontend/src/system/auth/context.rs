use contracts::system::users::Usuario;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::{ApiClient, ApiError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Usuario>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Provides one shared `ApiClient` and the auth state to the component tree
#[component]
pub fn ApiProvider(client: ApiClient, children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore the session from the stored token on mount
    let restore_client = client.clone();
    Effect::new(move |_| {
        let client = restore_client.clone();
        spawn_local(async move {
            if client.tokens().token().is_none() {
                return;
            }
            match api::fetch_me(&client).await.into_result() {
                Ok(user) => set_auth_state.set(AuthState { user: Some(user) }),
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    client.tokens().clear_token();
                }
            }
        });
    });

    provide_context(client);
    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access the shared client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiProvider not found in component tree")
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("ApiProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("ApiProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login and publish the user
pub async fn do_login(email: String, contrasena: String) -> Result<(), ApiError> {
    let client = use_api();
    let (_, set_auth_state) = use_auth();

    let response = api::login(&client, email, contrasena).await?;
    set_auth_state.set(AuthState {
        user: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout; local state is cleared even if the server call fails
pub async fn do_logout() -> Result<(), ApiError> {
    let client = use_api();
    let (_, set_auth_state) = use_auth();

    let result = api::logout(&client).await;
    set_auth_state.set(AuthState::default());

    result
}
