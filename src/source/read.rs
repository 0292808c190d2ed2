use crate::Result;
use crate::diagnostics;

use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse one JSON resource. The content is returned untouched.
pub fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| {
        diagnostics::error_message(format!("read profile resource {}", path.display()))
    })?;
    log::debug!("read {} ({} bytes)", path.display(), text.len());

    let value = serde_json::from_str(&text).with_context(|| {
        diagnostics::error_message(format!("parse JSON in {}", path.display()))
    })?;
    Ok(value)
}
