use crate::application_port::*;
use crate::domain_model::*;
use serde::de::DeserializeOwned;

/// Interpret a response at the wrapper level: non-2xx becomes an error, a
/// 2xx body must decode into the expected shape.
pub(crate) fn decode<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ClientError> {
    if !response.is_success() {
        return Err(ClientError::Status {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_value(response.body).map_err(|e| ClientError::Decode(e.to_string()))
}

pub(crate) fn encode<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value, ClientError> {
    serde_json::to_value(payload).map_err(|e| ClientError::Decode(e.to_string()))
}
