use crate::codes;
use core_async::time::TimeoutError;
use core_service::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error reported across the bridge: a stable code plus the message text.
///
/// Serializes as `{"code": "...", "message": "..."}`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ChannelError {
    pub code: String,
    pub message: String,
}

impl ChannelError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(codes::INVALID_ARGUMENT, message)
    }

    pub fn not_implemented(method: &str) -> Self {
        Self::new(
            codes::NOT_IMPLEMENTED,
            format!("Method '{}' is not implemented", method),
        )
    }

    pub fn timeout(method: &str, err: TimeoutError) -> Self {
        Self::new(codes::CALL_TIMEOUT, format!("{} {}", method, err))
    }

    /// Tag a facade failure with the operation's code, keeping its message.
    pub fn operation(code: &str, err: &CoreError) -> Self {
        Self::new(code, err.to_string())
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == codes::INVALID_ARGUMENT
    }
}

pub type Result<T> = std::result::Result<T, ChannelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use core_async::time::Duration;

    #[test]
    fn test_operation_keeps_original_message() {
        let err = ChannelError::operation(
            codes::GET_USER_BY_ID_ERROR,
            &CoreError::InvalidArgument("User ID cannot be blank".into()),
        );
        assert_eq!(err.code, "GET_USER_BY_ID_ERROR");
        assert_eq!(err.message, "User ID cannot be blank");
    }

    #[test]
    fn test_timeout_message() {
        let err = ChannelError::timeout(
            "getUsers",
            TimeoutError {
                after: Duration::from_millis(50),
            },
        );
        assert_eq!(err.code, codes::CALL_TIMEOUT);
        assert_eq!(err.message, "getUsers operation timed out after 50ms");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(ChannelError::not_implemented("fly")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "NOT_IMPLEMENTED",
                "message": "Method 'fly' is not implemented"
            })
        );
    }
}
