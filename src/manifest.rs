use crate::resource_graph::domain::ResourceObject;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Parses manifest content into resource objects
///
/// Accepted shapes:
/// - a single JSON object or a JSON array of objects
/// - a list object carrying its members under `items`
/// - one or more YAML documents separated by `---`
///
/// Empty documents are skipped. Object order follows document order.
pub fn parse_manifest(content: &str) -> Result<Vec<ResourceObject>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let documents = if trimmed.starts_with('{') || trimmed.starts_with('[') {
        let value: Value = serde_json::from_str(trimmed).context("Failed to parse JSON manifest")?;
        vec![value]
    } else {
        parse_yaml_documents(content)?
    };

    let mut objects = Vec::new();
    for (index, document) in documents.into_iter().enumerate() {
        collect_objects(document, index + 1, &mut objects)?;
    }
    Ok(objects)
}

fn parse_yaml_documents(content: &str) -> Result<Vec<Value>> {
    serde_yaml_ng::Deserializer::from_str(content)
        .enumerate()
        .map(|(index, document)| {
            Value::deserialize(document)
                .with_context(|| format!("Failed to parse YAML document {}", index + 1))
        })
        .collect()
}

fn collect_objects(value: Value, document: usize, out: &mut Vec<ResourceObject>) -> Result<()> {
    match value {
        Value::Null => Ok(()),
        Value::Array(values) => {
            for value in values {
                collect_objects(value, document, out)?;
            }
            Ok(())
        }
        Value::Object(mut map) if is_list(&map) => {
            if let Some(Value::Array(items)) = map.remove("items") {
                for item in items {
                    collect_objects(item, document, out)?;
                }
            }
            Ok(())
        }
        value @ Value::Object(_) => {
            let object: ResourceObject = serde_json::from_value(value).with_context(|| {
                format!("Document {} is not a valid resource object", document)
            })?;
            out.push(object);
            Ok(())
        }
        other => anyhow::bail!(
            "Document {} must be an object or a list of objects, found: {}",
            document,
            other
        ),
    }
}

/// A list wrapper such as `kind: List` or `kind: PodList`
fn is_list(map: &serde_json::Map<String, Value>) -> bool {
    if !matches!(map.get("items"), Some(Value::Array(_))) {
        return false;
    }
    match map.get("kind").and_then(Value::as_str) {
        Some(kind) => kind.ends_with("List"),
        None => true,
    }
}
