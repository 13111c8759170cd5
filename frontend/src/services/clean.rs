//! HTTP service for sending files to the cleaning backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult, CleanResponse};

/// Upload a file to the cleaning service.
///
/// POSTs the file as multipart form data under the field name `file` to
/// `{backend_url}/clean-data` and parses the JSON response. The browser
/// fills in the multipart boundary and the file's own name.
pub async fn clean_file(file: File, backend_url: &str) -> AppResult<CleanResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", &file)
        .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

    let url = format!("{}/clean-data", backend_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    // The backend answers 400 with a plain detail string for rejected
    // files ("Only CSV/Excel allowed", "File too large") - surface it.
    if !response.ok() {
        let detail = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server(response.status(), detail));
    }

    response
        .json::<CleanResponse>()
        .await
        .map_err(|e| AppError::Parse(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::types::CleanResponse;

    #[test]
    fn test_response_deserialization() {
        // Shape returned by the current cleaning service
        let json = r#"{
            "message": "Smart cleaning complete",
            "download_file": "temp/cleaned_123e4567-e89b-12d3-a456-426614174000.csv",
            "report": {
                "rows_before": 1042,
                "rows_after": 987,
                "duplicates_removed": 31,
                "null_rows_removed": 12,
                "columns_standardized": true,
                "anomalies_removed": 12,
                "file_auto_deleted_in_seconds": 300
            }
        }"#;

        let result: Result<CleanResponse, _> = serde_json::from_str(json);
        assert!(result.is_ok());

        let response = result.unwrap();
        assert_eq!(response.message, "Smart cleaning complete");
        assert!(response.download_file.starts_with("temp/cleaned_"));
        assert_eq!(response.report.rows_before, 1042);
        assert_eq!(response.report.rows_after, 987);
        assert_eq!(response.report.duplicates_removed, 31);
        assert_eq!(response.report.null_rows_removed, 12);
        assert_eq!(response.report.anomalies_removed, Some(12));
        assert_eq!(response.report.columns_standardized, Some(true));
        assert_eq!(response.report.file_auto_deleted_in_seconds, 300);
    }
}
