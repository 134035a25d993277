use serde_json::Value;

use crate::core::FulfillmentError;

/// Walks `keys` through nested JSON objects.
///
/// An absent key anywhere along the chain resolves the whole lookup to
/// `Ok(None)`. A node that is present but not an object cannot be descended
/// into and is reported as a shape error, not an absence.
pub(crate) fn get_path<'a>(
    root: &'a Value,
    keys: &[&'static str],
) -> Result<Option<&'a Value>, FulfillmentError> {
    let mut current = root;

    for (depth, key) in keys.iter().enumerate() {
        let object = current
            .as_object()
            .ok_or_else(|| FulfillmentError::UnexpectedShape {
                path: joined_path(keys, depth),
                expected: "an object",
            })?;

        match object.get(*key) {
            Some(value) => current = value,
            None => return Ok(None),
        }
    }

    Ok(Some(current))
}

fn joined_path(keys: &[&str], depth: usize) -> String {
    if depth == 0 {
        "$".to_string()
    } else {
        keys[..depth].join(".")
    }
}
