//! The shared API response envelope.

use crate::error::ApiError;
use serde::Deserialize;

/// Error payload inside an envelope.
///
/// Older endpoints send a bare string, newer ones a `{message, code}`
/// object; both decode tolerantly.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Detail {
        message: String,
        #[serde(default)]
        code: Option<String>,
    },
    Message(String),
}

impl ErrorBody {
    fn message(&self) -> &str {
        match self {
            ErrorBody::Detail { message, .. } => message,
            ErrorBody::Message(m) => m,
        }
    }

    fn code(&self) -> Option<String> {
        match self {
            ErrorBody::Detail { code, .. } => code.clone(),
            ErrorBody::Message(_) => None,
        }
    }
}

/// `{ success, data, error }` wrapper used by every backend endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into the payload or an error.
    ///
    /// `success: false` is an error regardless of HTTP status and
    /// regardless of whether `data` happens to be populated. A successful
    /// envelope without data is also an error: "no data" responses must
    /// surface a message, never silently render empty.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            let (message, code) = match &self.error {
                Some(body) => (body.message().to_string(), body.code()),
                None => ("The server rejected the request.".to_string(), None),
            };
            return Err(ApiError::Rejected { message, code });
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err(ApiError::Rejected {
                message: "The server returned no data.".to_string(),
                code: self.error.as_ref().and_then(|e| e.code()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_data_unwraps() {
        let env: Envelope<Vec<i32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2],"error":null}"#).unwrap();
        assert_eq!(env.into_result().unwrap(), vec![1, 2]);
    }

    #[test]
    fn failure_is_error_even_with_data() {
        let env: Envelope<Vec<i32>> =
            serde_json::from_str(r#"{"success":false,"data":[1],"error":{"message":"nope","code":"E42"}}"#)
                .unwrap();
        match env.into_result() {
            Err(ApiError::Rejected { message, code }) => {
                assert_eq!(message, "nope");
                assert_eq!(code.as_deref(), Some("E42"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn string_error_body_decodes() {
        let env: Envelope<Vec<i32>> =
            serde_json::from_str(r#"{"success":false,"data":null,"error":"raster API failed"}"#)
                .unwrap();
        match env.into_result() {
            Err(ApiError::Rejected { message, code }) => {
                assert_eq!(message, "raster API failed");
                assert_eq!(code, None);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn success_without_data_is_error() {
        let env: Envelope<i32> =
            serde_json::from_str(r#"{"success":true,"data":null,"error":null}"#).unwrap();
        assert!(matches!(env.into_result(), Err(ApiError::Rejected { .. })));
    }

    #[test]
    fn missing_success_field_is_failure() {
        let env: Envelope<i32> = serde_json::from_str(r#"{"data":5}"#).unwrap();
        assert!(env.into_result().is_err());
    }
}
