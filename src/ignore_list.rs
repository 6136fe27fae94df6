//! Sorting of the icon ignore lists.
//!
//! The ignore file is YAML with a top-level mapping of icon categories to
//! lists of names. Sorting keeps every list in case-insensitive order so
//! additions produce small diffs. Lists outside that mapping are left alone,
//! but the rewritten file always has its mapping keys in sorted order.

use std::path::Path;

use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use tracing::{debug, info};

/// Sort every string list under `key` case-insensitively, in place.
///
/// Returns the number of lists that were sorted. Lists containing non-string
/// values are rejected.
pub fn sort_lists(document: &mut Value, key: &str) -> Result<usize> {
    let section = document
        .get_mut(key)
        .with_context(|| format!("Key {:?} not found", key))?;
    let categories: &mut Mapping = section
        .as_mapping_mut()
        .with_context(|| format!("Value under {:?} is not a mapping", key))?;

    let mut sorted = 0;
    for (category, names) in categories.iter_mut() {
        let category = category.as_str().unwrap_or("<non-string key>");
        let Some(list) = names.as_sequence_mut() else {
            debug!("Skipping {}: not a list", category);
            continue;
        };
        if let Some(bad) = list.iter().find(|v| !v.is_string()) {
            anyhow::bail!("{} contains a non-string entry: {:?}", category, bad);
        }
        list.sort_by_cached_key(|v| v.as_str().map(str::to_lowercase).unwrap_or_default());
        sorted += 1;
    }

    Ok(sorted)
}

/// Reorder the keys of every mapping in `value`, recursively.
fn sort_keys(value: &mut Value) {
    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(Value, Value)> = std::mem::take(mapping).into_iter().collect();
            entries.sort_by_cached_key(|(k, _)| key_text(k));
            for (_, v) in entries.iter_mut() {
                sort_keys(v);
            }
            *mapping = entries.into_iter().collect();
        }
        Value::Sequence(items) => items.iter_mut().for_each(sort_keys),
        Value::Tagged(tagged) => sort_keys(&mut tagged.value),
        _ => {}
    }
}

fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other).unwrap_or_default(),
    }
}

/// Load the ignore file at `path`, sort its lists and keys, and write it back.
pub fn sort_file(path: &Path, key: &str) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore list: {:?}", path))?;
    let mut document: Value = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse ignore list: {:?}", path))?;

    let sorted = sort_lists(&mut document, key)?;
    sort_keys(&mut document);

    let output = serde_yaml::to_string(&document)?;
    std::fs::write(path, output)
        .with_context(|| format!("Failed to write ignore list: {:?}", path))?;

    info!("Sorted {} lists in {:?}", sorted, path);
    Ok(sorted)
}
