//! Typed client for the processing backend.
//!
//! The backend owns every interesting operation (clustering, outline
//! extraction, storage); this module only speaks its three endpoints and
//! decodes what they return. Responses are decoded wholesale into the types
//! below and merged into page state as complete values, never field by field.

use std::collections::BTreeMap;

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::config;

/// What `POST /upload` answers with. The backend may omit the identifier on
/// partial failures, so it defaults to empty and callers must check it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub unique_filename: String,
}

/// A stored painting as returned by `GET /painting/{id}`. The record carries
/// more fields than this; `img_url` is the only one the page consumes.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PaintingRecord {
    pub img_url: String,
}

/// Output of one `POST /process` call. Any subset of fields may be present;
/// whatever arrives replaces the previous set entirely.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ProcessedImageSet {
    #[serde(default)]
    pub img_cluster_url: Option<String>,
    #[serde(default)]
    pub img_outline_url: Option<String>,
    /// Paint labels to RGB triples. BTreeMap keeps the legend ordering stable.
    #[serde(default)]
    pub label_color_mapping: Option<BTreeMap<String, [u8; 3]>>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("backend returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Backend-provided failure detail, when there is one worth showing.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

/// Upload one user-selected image as multipart field `file`.
pub async fn upload_image(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".into()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network("could not attach file".into()))?;

    let resp = Request::post(&config::endpoint("upload"))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// Fetch a painting by its server-issued identifier.
pub async fn fetch_painting(id: &str) -> Result<PaintingRecord, ApiError> {
    let resp = Request::get(&config::endpoint(&format!("painting/{id}")))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// Ask the backend to cluster and outline the current upload.
pub async fn process_image() -> Result<ProcessedImageSet, ApiError> {
    let resp = Request::post(&config::endpoint("process"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

async fn decode<T: for<'de> Deserialize<'de>>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status,
            detail: error_detail(status, &body),
        });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// FastAPI reports failures as `{"detail": "..."}`; fall back to the bare
/// status when the body is anything else.
fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned))
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_detail_reads_fastapi_shape() {
        assert_eq!(
            error_detail(500, r#"{"detail": "Image not found"}"#),
            "Image not found"
        );
    }

    #[test]
    fn error_detail_falls_back_on_non_json_body() {
        assert_eq!(error_detail(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(error_detail(404, ""), "HTTP 404");
        assert_eq!(error_detail(500, r#"{"message": "nope"}"#), "HTTP 500");
    }

    #[test]
    fn upload_response_tolerates_missing_identifier() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"status": "complete", "image_url": "http://x/u.png"}"#)
                .unwrap();
        assert_eq!(resp.image_url, "http://x/u.png");
        assert_eq!(resp.unique_filename, "");
    }

    #[test]
    fn processed_set_decodes_partial_payload() {
        let set: ProcessedImageSet =
            serde_json::from_str(r#"{"img_cluster_url": "c.png"}"#).unwrap();
        assert_eq!(set.img_cluster_url.as_deref(), Some("c.png"));
        assert_eq!(set.img_outline_url, None);
        assert_eq!(set.label_color_mapping, None);
    }

    #[test]
    fn processed_set_decodes_palette_in_label_order() {
        let set: ProcessedImageSet = serde_json::from_str(
            r#"{"label_color_mapping": {"2": [0, 255, 0], "1": [255, 0, 0]}}"#,
        )
        .unwrap();
        let mapping = set.label_color_mapping.unwrap();
        let labels: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["1", "2"]);
        assert_eq!(mapping["1"], [255, 0, 0]);
    }

    #[test]
    fn status_error_exposes_detail_only_when_present() {
        let err = ApiError::Status {
            status: 500,
            detail: "Image not found".into(),
        };
        assert_eq!(err.detail(), Some("Image not found"));
        assert_eq!(ApiError::Network("timeout".into()).detail(), None);
    }
}
