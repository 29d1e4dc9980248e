use serde::Deserialize;

/// Envelope wrapped around every catalog API payload.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    pub fn into_data(self) -> Result<T, ServiceError> {
        if !self.is_success() {
            return Err(ServiceError::Rejected(self.message));
        }

        self.data.ok_or(ServiceError::MissingData(self.message))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The API answered 2xx but with an `error` envelope.
    #[error("API rejected the request: {0}")]
    Rejected(String),

    #[error("API response carried no data: {0}")]
    MissingData(String),

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let res: ApiResponse<u32> =
            serde_json::from_str(r#"{"status":"success","message":"ok","data":7}"#).unwrap();
        assert_eq!(res.into_data().unwrap(), 7);
    }

    #[test]
    fn error_envelope_is_rejected_with_message() {
        let res: ApiResponse<u32> =
            serde_json::from_str(r#"{"status":"error","message":"Movie not found","data":null}"#)
                .unwrap();
        match res.into_data() {
            Err(ServiceError::Rejected(msg)) => assert_eq!(msg, "Movie not found"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn success_without_data_is_an_error() {
        let res: ApiResponse<u32> = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(matches!(res.into_data(), Err(ServiceError::MissingData(_))));
    }
}
