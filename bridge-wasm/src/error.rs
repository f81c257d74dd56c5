//! Error conversion for JavaScript callers

use bridge_channel::ChannelError;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised by the wasm layer itself, before a call reaches the channel.
#[derive(Error, Debug)]
pub enum WasmError {
    /// Constructor options could not be read
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A value could not cross the JS boundary
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_wasm_bindgen::Error),
}

/// Result type for the wasm layer
pub type WasmResult<T> = Result<T, WasmError>;

/// Serializer producing plain JS objects (not `Map`) and plain numbers.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> WasmResult<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

/// Rejection value: `{ code, message }`.
pub(crate) fn channel_error_to_js(err: &ChannelError) -> JsValue {
    to_js(err).unwrap_or_else(|_| JsValue::from_str(&err.to_string()))
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        channel_error_to_js(&ChannelError::invalid_argument(err.to_string()))
    }
}
