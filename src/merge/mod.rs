//! Gap-filling merge for page content.
//!
//! When several pages are fetched together, their `content` objects can be
//! combined into one view. The merge is *gap-filling*: a key already present
//! is never overwritten, later objects only contribute keys the accumulated
//! result lacks, and the fill recurses into nested objects.
//!
//! # Examples
//!
//! ```
//! use pagedata::merge::deep_fill;
//! use serde_json::json;
//!
//! let merged = deep_fill(&[
//!     json!({"title": "Home", "meta": {"author": "ann"}}),
//!     json!({"title": "ignored", "meta": {"year": 2020}, "footer": "f"}),
//! ]);
//!
//! assert_eq!(merged["title"], "Home");          // earlier wins
//! assert_eq!(merged["meta"]["author"], "ann");
//! assert_eq!(merged["meta"]["year"], 2020);     // nested gap filled
//! assert_eq!(merged["footer"], "f");            // top-level gap filled
//! ```

use serde_json::{Map, Value};

/// Merge JSON objects left to right, earlier keys winning.
///
/// Non-object inputs (including `null`) contribute nothing. The result is
/// always a JSON object, empty when no input was an object.
pub fn deep_fill(values: &[Value]) -> Value {
    let mut result = Value::Object(Map::new());
    for value in values {
        fill_into(&mut result, value);
    }
    result
}

/// Copy keys from `source` into `target` without overwriting existing ones,
/// recursing where both sides hold objects.
fn fill_into(target: &mut Value, source: &Value) {
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return;
    };
    for (key, source_value) in source_map {
        match target_map.get_mut(key) {
            Some(existing) if existing.is_object() && source_value.is_object() => {
                fill_into(existing, source_value);
            }
            Some(_) => {}
            None => {
                target_map.insert(key.clone(), source_value.clone());
            }
        }
    }
}
