//! HTTP service for uploading CSV files to the analysis backend.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult};

/// Response from the backend `/upload` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Textual summary of the uploaded data.
    pub summary: String,
    /// Server-relative path to the generated plot, empty when the
    /// backend produced none.
    #[serde(default)]
    pub image: String,
}

/// Upload a CSV file to the backend.
///
/// Sends one multipart part, field name `file`, carrying the raw bytes
/// under the original filename. Any transport error, non-2xx status, or
/// undecodable body comes back as [`AppError::Upload`] with the detail
/// preserved for logging.
pub async fn upload_csv(file: File, backend_url: &str) -> AppResult<AnalysisResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

    let url = format!("{}/upload", backend_url.trim_end_matches('/'));
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Upload(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Upload(format!(
            "Server error ({}): {}",
            response.status(),
            error_text
        )));
    }

    response
        .json::<AnalysisResponse>()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to parse response: {}", e)))
}

/// Resolve a server-relative image path against the backend origin.
///
/// The backend returns paths rooted at its own origin (`/plot`), which
/// the browser would otherwise resolve against the frontend host. An
/// empty path means no image.
pub fn resolve_image_url(backend_url: &str, image_path: &str) -> Option<String> {
    if image_path.is_empty() {
        return None;
    }
    let origin = backend_url.trim_end_matches('/');
    if image_path.starts_with('/') {
        Some(format!("{}{}", origin, image_path))
    } else {
        Some(format!("{}/{}", origin, image_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "summary": "rows=5",
            "image": "/plots/1.png"
        }"#;

        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.summary, "rows=5");
        assert_eq!(response.image, "/plots/1.png");
    }

    #[test]
    fn test_response_with_empty_image() {
        let json = r#"{"summary": "No summary found.", "image": ""}"#;

        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert!(response.image.is_empty());
    }

    #[test]
    fn test_response_without_image_field() {
        let json = r#"{"summary": "count    5.0"}"#;

        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.summary, "count    5.0");
        assert!(response.image.is_empty());
    }

    #[test]
    fn test_resolve_image_url() {
        assert_eq!(
            resolve_image_url("http://localhost:5000", "/plots/1.png").as_deref(),
            Some("http://localhost:5000/plots/1.png")
        );
        // Tolerate a trailing slash on the origin and a bare path.
        assert_eq!(
            resolve_image_url("http://localhost:5000/", "/plot").as_deref(),
            Some("http://localhost:5000/plot")
        );
        assert_eq!(
            resolve_image_url("http://localhost:5000", "plot").as_deref(),
            Some("http://localhost:5000/plot")
        );
        assert_eq!(resolve_image_url("http://localhost:5000", ""), None);
    }
}
