use contracts::domain::common::EntityId;
use contracts::system::users::{
    CreateUsuarioDto, PatchUsuarioDto, Rol, UpdateUsuarioDto, Usuario,
};

use crate::shared::{ApiClient, ApiError, ApiRequest, Fetched};

/// Fetch all users
pub async fn fetch_usuarios(client: &ApiClient) -> Fetched<Vec<Usuario>> {
    client.fetch_or(ApiRequest::get("/usuarios"), Vec::new()).await
}

/// Create new user
pub async fn create_usuario(client: &ApiClient, dto: &CreateUsuarioDto) -> Result<Usuario, ApiError> {
    client.send(ApiRequest::post("/usuarios").json(dto)?).await
}

pub async fn fetch_usuario(client: &ApiClient, id: &EntityId) -> Fetched<Usuario> {
    client
        .fetch_or(ApiRequest::get(format!("/usuarios/{}", id)), Usuario::default())
        .await
}

/// Replace user
pub async fn update_usuario(
    client: &ApiClient,
    id: &EntityId,
    dto: &UpdateUsuarioDto,
) -> Result<Usuario, ApiError> {
    client
        .send(ApiRequest::put(format!("/usuarios/{}", id)).json(dto)?)
        .await
}

/// Partially update user
pub async fn patch_usuario(
    client: &ApiClient,
    id: &EntityId,
    dto: &PatchUsuarioDto,
) -> Result<Usuario, ApiError> {
    client
        .send(ApiRequest::patch(format!("/usuarios/{}", id)).json(dto)?)
        .await
}

pub async fn delete_usuario(client: &ApiClient, id: &EntityId) -> Result<(), ApiError> {
    client
        .send::<serde_json::Value>(ApiRequest::delete(format!("/usuarios/{}", id)))
        .await
        .map(|_| ())
}

/// Fetch roles for display next to users
pub async fn fetch_roles(client: &ApiClient) -> Fetched<Vec<Rol>> {
    client.fetch_or(ApiRequest::get("/roles"), Vec::new()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{test_client, MockTransport};
    use crate::shared::transport::{HttpMethod, RequestBody};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_usuarios_offline_is_empty() {
        let transport = MockTransport::new();
        transport.push_network_error("offline");
        let client = test_client(&transport);

        let usuarios = fetch_usuarios(&client).await;
        assert!(usuarios.is_fallback());
        assert!(usuarios.into_inner().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_usuario_fallback_is_empty_user() {
        let transport = MockTransport::new();
        transport.push_network_error("offline");
        let client = test_client(&transport);

        let usuario = fetch_usuario(&client, &EntityId::from(8)).await.into_inner();
        assert_eq!(usuario, Usuario::default());
        assert_eq!(
            transport.last_request().unwrap().url,
            "http://127.0.0.1:8000/usuarios/8"
        );
    }

    #[tokio::test]
    async fn test_patch_usuario_sends_only_changed_fields() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({"id": 2, "nombre": "Luis", "nombre_usuario": "luis", "email": "nuevo@qroo.gob.mx"}),
        );
        let client = test_client(&transport);

        let dto = PatchUsuarioDto {
            email: Some("nuevo@qroo.gob.mx".into()),
            ..Default::default()
        };
        let usuario = patch_usuario(&client, &EntityId::from(2), &dto).await.unwrap();
        assert_eq!(usuario.email, "nuevo@qroo.gob.mx");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Patch);
        assert_eq!(
            sent.body,
            RequestBody::Json(r#"{"email":"nuevo@qroo.gob.mx"}"#.into())
        );
    }

    #[tokio::test]
    async fn test_create_usuario_surfaces_status() {
        let transport = MockTransport::new();
        transport.push_json(400, json!({"detail": "El email ya existe"}));
        let client = test_client(&transport);

        let dto = CreateUsuarioDto {
            nombre: "Ana".into(),
            nombre_usuario: "ana".into(),
            email: "ana@qroo.gob.mx".into(),
            contrasena: "secreta".into(),
            rol_id: Some(EntityId::from(1)),
        };
        let err = create_usuario(&client, &dto).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.detail(), Some("El email ya existe"));
    }

    #[tokio::test]
    async fn test_delete_usuario_surfaces_status() {
        let transport = MockTransport::new();
        transport.push_text(403, "Forbidden");
        let client = test_client(&transport);

        let err = delete_usuario(&client, &EntityId::from(3)).await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(transport.last_request().unwrap().method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn test_fetch_roles() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([{"id": 1, "nombre": "Administrador"}]));
        let client = test_client(&transport);

        let roles = fetch_roles(&client).await;
        assert!(roles.is_fresh());
        assert_eq!(roles.value()[0].nombre, "Administrador");
    }
}
