use std::collections::BTreeMap;

use serde_json::Value;

/// Key → translated string. Always flat; nested source structures are
/// flattened to dotted keys before the engine sees them.
pub type TranslationMap = BTreeMap<String, String>;

/// Flatten a translation payload to dotted keys.
///
/// Objects nest into dotted prefixes; string leaves become entries.
/// Non-string leaves (numbers, arrays, null) are not translations and are
/// dropped.
pub fn flatten_translations(value: &Value) -> TranslationMap {
    let mut map = TranslationMap::new();
    flatten_into(value, String::new(), &mut map);
    map
}

fn flatten_into(value: &Value, prefix: String, out: &mut TranslationMap) {
    match value {
        Value::Object(entries) => {
            for (name, child) in entries {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                flatten_into(child, key, out);
            }
        }
        Value::String(text) => {
            if !prefix.is_empty() {
                out.insert(prefix, text.clone());
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::flatten_translations;
    use serde_json::json;

    #[test]
    fn nests_become_dotted_keys() {
        let map = flatten_translations(&json!({
            "common": {
                "greeting": "Hello",
                "menu": { "save": "Save" }
            },
            "title": "Home"
        }));

        assert_eq!(map.get("common.greeting").map(String::as_str), Some("Hello"));
        assert_eq!(map.get("common.menu.save").map(String::as_str), Some("Save"));
        assert_eq!(map.get("title").map(String::as_str), Some("Home"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn non_string_leaves_are_dropped() {
        let map = flatten_translations(&json!({
            "count": 3,
            "flag": true,
            "items": ["a", "b"],
            "label": "Ok"
        }));

        assert_eq!(map.len(), 1, "only the string leaf survives");
        assert_eq!(map.get("label").map(String::as_str), Some("Ok"));
    }
}
