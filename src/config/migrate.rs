use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Compare the config file against the current `Config` shape and add every
/// missing key with its default value. Keys already present are left as they
/// are, unknown keys are kept. Returns the names of the keys that were added.
pub fn fill_missing_fields(conf_file: &Path) -> AppResult<Vec<String>> {
    if !conf_file.exists() {
        return Err(AppError::Config(format!(
            "config file {} does not exist (run `geotimelog init`)",
            conf_file.display()
        )));
    }

    let content = fs::read_to_string(conf_file)?;
    let mut yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(&content)?
    };

    let defaults = serde_yaml::to_value(Config::default())?;

    let (Some(map), Some(default_map)) = (yaml.as_mapping_mut(), defaults.as_mapping()) else {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            conf_file.display()
        )));
    };

    let mut added = Vec::new();
    for (key, value) in default_map {
        if !map.contains_key(key) {
            map.insert(key.clone(), value.clone());
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&yaml)?;
        fs::write(conf_file, serialized)?;
    }

    Ok(added)
}

/// Keys of the config file that the current `Config` does not know about.
pub fn unknown_fields(conf_file: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(conf_file)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    let (Some(map), Some(default_map)) = (yaml.as_mapping(), defaults.as_mapping()) else {
        return Ok(Vec::new());
    };

    Ok(map
        .keys()
        .filter(|k| !default_map.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}
