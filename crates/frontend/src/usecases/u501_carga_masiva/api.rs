use crate::shared::transport::UploadFile;
use crate::shared::{ApiClient, ApiError, ApiRequest};

/// Upload a consumption spreadsheet for bulk import
///
/// The file travels as multipart form data under the configured field name;
/// no Content-Type header is set so the browser can add the boundary.
pub async fn upload_consumos(
    client: &ApiClient,
    file: UploadFile,
) -> Result<serde_json::Value, ApiError> {
    let field = client.config().upload.field_name.clone();
    log::info!(
        "Uploading {} ({} bytes) as '{}'",
        file.file_name,
        file.bytes.len(),
        field
    );
    client
        .send(ApiRequest::post("/consumos/carga-masiva").multipart(field, file))
        .await
}

/// Upload straight from an `<input type="file">` selection
pub async fn upload_consumos_file(
    client: &ApiClient,
    file: &web_sys::File,
) -> Result<serde_json::Value, ApiError> {
    let file = UploadFile::from_web_file(file).await?;
    upload_consumos(client, file).await
}
