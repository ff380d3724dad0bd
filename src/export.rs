use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::model::ArticleConfig;

/// Write `config` as pretty JSON to `<dir>/<id>.json`, creating `dir` if needed.
pub fn export_to_dir(config: &ArticleConfig, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", config.id));
    write_json(config, &path)?;
    Ok(path)
}

pub fn write_json(config: &ArticleConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!("Exported {} to {}", config.id, path.display());
    Ok(())
}

pub fn read_json(path: &Path) -> Result<ArticleConfig> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Parse a keyword-set file: one set per line, keywords separated by commas.
/// Blank lines and `#` comments are skipped.
pub fn parse_keyword_sets(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|set| !set.is_empty())
        .collect()
}
