use crate::error::{ClosyError, Result};
use crate::types::config::ClosyConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "closy.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".closy/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/closy/config.toml";

/// Loads the config that sits next to a session file.
///
/// Returns `None` when `dir` has no `closy.toml`; callers fall back to built-in defaults.
pub fn load_config(dir: &Path) -> Result<Option<ClosyConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(dir, global.as_deref())
}

pub(crate) fn load_config_with_global(
    dir: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ClosyConfig>> {
    let project_path = dir.join(DEFAULT_CONFIG_FILE);
    if !project_path.exists() {
        return Ok(None);
    }

    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([project_path.clone(), dir.join(DEFAULT_LOCAL_FILE)]);

    let mut merged = Table::new();
    for path in layers.filter(|path| path.exists()) {
        overlay(&mut merged, read_layer(&path)?);
        tracing::debug!(path = %path.display(), "applied config layer");
    }

    let cfg = ClosyConfig::deserialize(Value::Table(merged))
        .map_err(|e| ClosyError::ConfigParse(format!("{}: {}", project_path.display(), e)))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map_err(|e| ClosyError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Later layers win key by key; nested tables merge instead of replacing each other.
fn overlay(base: &mut Table, layer: Table) {
    for (key, incoming) in layer {
        match incoming {
            Value::Table(nested) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => overlay(existing, nested),
                _ => {
                    base.insert(key, Value::Table(nested));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_project_file_means_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn global_project_and_local_merge_in_order() {
        let dir = TempDir::new().expect("session dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
min_score = 2.0
max_results = 9

[logging]
level = "debug"
"#,
        )
        .expect("global config should write");

        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring]
min_score = 3.5

[outfits]
candidates = 5
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(dir.path().join(".closy")).expect("local dir should create");
        fs::write(
            dir.path().join(DEFAULT_LOCAL_FILE),
            r#"
[logging]
level = "info"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(dir.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let filter = cfg.filter_options();
        assert_eq!(filter.min_score, 3.5);
        assert_eq!(filter.max_results, 9);
        assert_eq!(cfg.outfit_thresholds().candidates, 5);
        assert_eq!(cfg.outfit_thresholds().min_candidates, 3);
        assert_eq!(cfg.log_level(), "info");
    }

    #[test]
    fn overlay_merges_nested_tables_and_replaces_scalars() {
        let mut base: Table = "[scoring]\nmin_score = 2.0\nmax_results = 4\n"
            .parse()
            .expect("base layer should parse");
        let layer: Table = "[scoring]\nmin_score = 4.0\n[report]\nformat = \"md\"\n"
            .parse()
            .expect("overlay layer should parse");
        overlay(&mut base, layer);

        let scoring = base["scoring"].as_table().expect("scoring stays a table");
        assert_eq!(scoring["min_score"].as_float(), Some(4.0));
        assert_eq!(scoring["max_results"].as_integer(), Some(4));
        assert_eq!(base["report"]["format"].as_str(), Some("md"));
    }

    #[test]
    fn invalid_values_are_rejected_after_merge() {
        let dir = TempDir::new().expect("session dir should be created");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[outfits]\ncandidates = 2\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(dir.path(), None).expect_err("min_candidates > candidates");
        assert!(matches!(err, ClosyError::ConfigParse(_)));
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let dir = TempDir::new().expect("session dir should be created");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[scoring\n")
            .expect("project config should write");

        match load_config_with_global(dir.path(), None) {
            Err(ClosyError::ConfigParse(message)) => assert!(message.contains("closy.toml")),
            other => panic!("expected config parse error, got {other:?}"),
        }
    }
}
