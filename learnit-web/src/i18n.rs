use serde_json::Value;
use std::collections::BTreeMap;

const EN_BUNDLE: &str = include_str!("../i18n/en.json");

thread_local! {
    static BUNDLE: Value =
        serde_json::from_str(EN_BUNDLE).unwrap_or(Value::Object(serde_json::Map::new()));
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        match current.get(k) {
            Some(value) => current = value,
            None => return None,
        }
    }
    Some(current)
}

fn plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            // Prefer plural categories if count provided
            if let Some(count_str) = args.and_then(|m| m.get("count")).copied() {
                if let Ok(count) = count_str.parse::<f64>() {
                    let category = plural_category(count);
                    if let Some(s) = map.get(category).and_then(Value::as_str) {
                        s.to_string()
                    } else if let Some(default) = map.get("_").and_then(Value::as_str) {
                        default.to_string()
                    } else {
                        return None;
                    }
                } else {
                    map.get("_")
                        .and_then(Value::as_str)
                        .map(std::string::ToString::to_string)?
                }
            } else if let Some(default) = map.get("_").and_then(Value::as_str) {
                default.to_string()
            } else {
                return None;
            }
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    BUNDLE.with(|bundle| get_nested_value(bundle, key).and_then(|v| render_value(v, args)))
}

/// Translate a key from the shipped bundle
///
/// Simple translation without variable substitution.
/// Returns the key itself when no entry exists.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Supports template variable replacement using ordered key-value pairs.
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
