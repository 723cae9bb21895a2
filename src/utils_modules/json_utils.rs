use crate::common::*;

#[doc = "Function that follows a dot separated path inside a json value."]
/// # Arguments
/// * `value` - Root json value
/// * `path`  - Dot separated field path. ex) `jvm.mem.heap_used_in_bytes`
///
/// # Returns
/// * Option<&Value> - None when any segment of the path is missing
pub fn get_value_by_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |acc, field| acc.get(field))
}

#[doc = "Function that reads an integer by path, defaulting to 0 when the field is missing."]
pub fn get_i64_or_default(value: &Value, path: &str) -> i64 {
    get_value_by_path(value, path)
        .and_then(Value::as_i64)
        .unwrap_or(0)
}

#[doc = "Function that reads a string by path, defaulting to an empty string when the field is missing."]
pub fn get_str_or_default(value: &Value, path: &str) -> String {
    get_value_by_path(value, path)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_value_by_path_follows_nested_fields() {
        let value: Value = json!({"a": {"b": {"c": 42}}});

        assert_eq!(get_i64_or_default(&value, "a.b.c"), 42);
        assert!(get_value_by_path(&value, "a.b.c.d").is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let value: Value = json!({"store": {}});

        assert_eq!(get_i64_or_default(&value, "store.size_in_bytes"), 0);
        assert_eq!(get_str_or_default(&value, "store.size"), "");
    }
}
