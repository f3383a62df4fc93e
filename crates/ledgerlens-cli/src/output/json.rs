use std::io;

use ledgerlens_engine::{EngineError, SuccessEnvelope};
use serde::Serialize;
use serde_json::json;

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let payload = json!({
        "ok": true,
        "version": JSON_VERSION,
        "command": success.command,
        "data": success.data.clone(),
    });
    serialize_json_pretty(&payload)
}

pub fn render_error_json(error: &EngineError) -> io::Result<String> {
    let payload = json!({
        "error": {
            "code": error.code,
            "message": error.message,
            "recovery_steps": error.recovery_steps,
        }
    });
    serialize_json_pretty(&payload)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
