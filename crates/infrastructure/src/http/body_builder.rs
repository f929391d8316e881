//! Request body construction for the reqwest transport.
//!
//! Turns the transport-agnostic domain body into a real reqwest body,
//! including multipart forms with in-memory and file-backed parts.

use std::path::Path;

use elodan_application::TransportError;
use elodan_domain::{FormData, FormField, RequestBody};
use reqwest::multipart::{Form, Part};

/// Attaches the domain body to a reqwest request builder.
///
/// Multipart forms let reqwest set the content type itself so the
/// boundary string is correct; the gateway has already stripped any
/// explicit content-type header for those.
///
/// # Errors
///
/// Returns [`TransportError::InvalidBody`] when the body cannot be
/// serialized or a file part cannot be read.
pub async fn attach_body(
    builder: reqwest::RequestBuilder,
    body: &RequestBody,
) -> Result<reqwest::RequestBuilder, TransportError> {
    match body {
        RequestBody::None => Ok(builder),

        RequestBody::Json(value) => {
            let content = serde_json::to_string(value)
                .map_err(|e| TransportError::InvalidBody(e.to_string()))?;
            Ok(builder.body(content))
        }

        RequestBody::Form(form) => Ok(builder.multipart(build_multipart_form(form).await?)),
    }
}

/// Builds a multipart form from the domain form fields.
async fn build_multipart_form(form: &FormData) -> Result<Form, TransportError> {
    let mut multipart = Form::new();

    for field in form.fields() {
        match field {
            FormField::Text { name, value } => {
                multipart = multipart.text(name.clone(), value.clone());
            }

            FormField::Bytes {
                name,
                filename,
                content,
                mime,
            } => {
                let mime_type = mime.clone().unwrap_or_else(|| {
                    mime_guess::from_path(filename)
                        .first_or_octet_stream()
                        .to_string()
                });
                let part = Part::bytes(content.clone())
                    .file_name(filename.clone())
                    .mime_str(&mime_type)
                    .map_err(|e| TransportError::InvalidBody(format!("invalid MIME type: {e}")))?;
                multipart = multipart.part(name.clone(), part);
            }

            FormField::File { name, path } => {
                let file_path = Path::new(path);
                let content = tokio::fs::read(file_path).await.map_err(|e| {
                    TransportError::InvalidBody(format!("{}: {e}", file_path.display()))
                })?;

                let filename = file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("file")
                    .to_string();

                let mime_type = mime_guess::from_path(file_path)
                    .first_or_octet_stream()
                    .to_string();

                let part = Part::bytes(content)
                    .file_name(filename)
                    .mime_str(&mime_type)
                    .map_err(|e| TransportError::InvalidBody(format!("invalid MIME type: {e}")))?;
                multipart = multipart.part(name.clone(), part);
            }
        }
    }

    Ok(multipart)
}
