use crate::domain::models::JsonOut;
use serde::Serialize;

/// Print any serializable payload inside the `{ok, data}` envelope.
pub fn emit_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Render a slice as one text row per item, or as the JSON envelope.
pub fn print_rows<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_json(data);
    }
    for d in data {
        println!("{}", row(d));
    }
    Ok(())
}
