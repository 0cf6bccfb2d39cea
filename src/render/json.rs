use serde::Serialize;

/// Render any serializable result as indented JSON with sorted keys.
///
/// Going through `serde_json::Value` sorts object keys at every depth, so
/// struct field order never leaks into the output.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
