//! The `TimeNow` helper.

use chrono::Local;
use serde_json::Value;

use super::{Args, Helper, Signature};
use crate::core::Result;

pub(super) const HELPERS: &[Helper] = &[Helper::new("TimeNow", Signature::none(), time_now_helper)];

/// Current local time as RFC 3339 text, e.g. `2024-05-01T09:30:00.123456789+02:00`.
fn time_now_helper(_args: &Args<'_>) -> Result<Value> {
    Ok(Value::String(Local::now().to_rfc3339()))
}
