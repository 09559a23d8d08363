use std::collections::HashMap;

use tera::{Context, Tera, Value};

use crate::error::ReportError;
use crate::format::format_amount;

/// Render a raw Tera template against any serializable value.
///
/// The value's top-level fields become the template context. Templates
/// get an `amount` filter (`{{ cost | amount(decimals=2) }}`).
pub fn render_template<T: serde::Serialize>(
    template_name: &str,
    template_content: &str,
    value: &T,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.register_filter("amount", amount_filter);
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(value)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "rendered template");
    Ok(rendered)
}

fn amount_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let number = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg(format!("amount filter expects a number, got {value}")))?;
    let decimals = args.get("decimals").and_then(Value::as_u64).unwrap_or(0) as usize;
    Ok(Value::String(format_amount(number, decimals)))
}
