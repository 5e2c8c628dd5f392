use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&success_body(message, data))?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
            if let Some(Value::Object(fields)) = data {
                for (key, value) in fields {
                    match value {
                        Value::String(s) => println!("  {}: {}", key, s),
                        other => println!("  {}: {}", key, other),
                    }
                }
            }
        }
    }
    Ok(())
}

fn success_body(message: &str, data: Option<Value>) -> Value {
    let mut response = json!({
        "success": true,
        "message": message
    });

    if let (Some(Value::Object(fields)), Some(body)) = (data, response.as_object_mut()) {
        body.extend(fields);
    }

    response
}
