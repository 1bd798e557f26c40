//! Wire envelopes: the request and response frames that carry commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, ErrorKind};

/// A positional JSON-RPC 1.0 request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
    pub id: Value,
}

/// A JSON-RPC 1.0 response. Both `result` and `error` are always present
/// on the wire; exactly one is meaningful.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub result: Value,
    pub error: Option<RpcError>,
    pub id: Value,
}

/// Error object carried in a failed response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl Response {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            result,
            error: None,
            id,
        }
    }

    pub fn failure(id: Value, error: RpcError) -> Self {
        Self {
            result: Value::Null,
            error: Some(error),
            id,
        }
    }

    /// Splits the response into its payload, surfacing a carried error.
    pub fn into_result(self) -> Result<Value, RpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result),
        }
    }
}

/// Request and response identifiers must be JSON scalars. Arrays and
/// objects cannot be matched back to their request reliably and are
/// rejected.
pub fn check_id(id: &Value) -> Result<(), Error> {
    match id {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
        Value::Array(_) | Value::Object(_) => Err(Error::new(
            ErrorKind::InvalidType,
            format!("request id must be a scalar, got {}", crate::field::value_label(id)),
        )),
    }
}
