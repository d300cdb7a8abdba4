//! Image uploads.
//!
//! Clients send a base64 payload, optionally as a `data:` URL, with the original file
//! name. Only image extensions are accepted. Files are stored under a random name in
//! the upload directory, which the router serves at `/uploads`.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use uuid::Uuid;

use crate::{model::upload::UploadDto, server::error::AppError};

/// Largest accepted decoded file size.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Request body cap for the upload route: a base64 `MAX_UPLOAD_BYTES` file plus JSON framing.
pub const UPLOAD_BODY_LIMIT: usize = 7 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// URL prefix the upload directory is served under.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

pub struct UploadService<'a> {
    dir: &'a Path,
}

impl<'a> UploadService<'a> {
    pub fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    /// Decodes and stores an upload.
    ///
    /// # Returns
    /// - `Ok(url)` - Public path of the stored file, e.g. `/uploads/<uuid>.png`
    /// - `Err(AppError::BadRequest)` - Bad extension, invalid base64, empty or too large
    /// - `Err(AppError::IoErr)` - The file could not be written
    pub async fn save(&self, dto: UploadDto) -> Result<String, AppError> {
        let extension = image_extension(&dto.file_name)?;
        let bytes = decode_payload(&dto.data)?;

        tokio::fs::create_dir_all(self.dir).await?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::write(self.dir.join(&file_name), &bytes).await?;

        tracing::debug!("Stored upload {} ({} bytes)", file_name, bytes.len());

        Ok(format!("{}/{}", UPLOAD_URL_PREFIX, file_name))
    }
}

fn image_extension(file_name: &str) -> Result<String, AppError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::bad_request(format!(
            "Only {} files can be uploaded",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    Ok(extension)
}

fn decode_payload(data: &str) -> Result<Vec<u8>, AppError> {
    let payload = match data.strip_prefix("data:") {
        Some(rest) => match rest.split_once(";base64,") {
            Some((_, payload)) => payload,
            None => return Err(AppError::bad_request("Data URLs must be base64 encoded")),
        },
        None => data,
    };
    let payload = payload.trim();

    // Four base64 characters decode to three bytes.
    if payload.len() / 4 * 3 > MAX_UPLOAD_BYTES + 3 {
        return Err(too_large());
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|_| AppError::bad_request("Upload is not valid base64"))?;

    if bytes.is_empty() {
        return Err(AppError::bad_request("Upload is empty"));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(too_large());
    }

    Ok(bytes)
}

fn too_large() -> AppError {
    AppError::bad_request(format!(
        "Uploads are limited to {} MiB",
        MAX_UPLOAD_BYTES / (1024 * 1024)
    ))
}
