use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadDto {
    /// Original file name; only its extension is kept.
    pub file_name: String,
    /// Base64 payload, optionally prefixed as a `data:<mime>;base64,` URL.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadedFileDto {
    pub url: String,
}
