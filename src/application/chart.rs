//! Loading chart descriptions from JSON or TOML files.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Employee, OrgTree};

/// Supported chart file encodings, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Json,
    Toml,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> ApplicationResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(ApplicationError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Parse chart `content` in the given format.
pub fn parse_chart(content: &str, format: ChartFormat, path: &Path) -> ApplicationResult<Employee> {
    let parsed = match format {
        ChartFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ChartFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| ApplicationError::ChartParse {
        path: path.to_path_buf(),
        message,
    })
}

/// Read a chart file and build the org tree from it.
#[instrument(level = "debug")]
pub fn load_chart(path: &Path) -> ApplicationResult<OrgTree> {
    let path = expand_path(path);
    let format = ChartFormat::from_path(&path)?;
    let content = std::fs::read_to_string(&path).with_path_context("read chart", &path)?;
    debug!(?format, bytes = content.len(), "chart read");

    let root = parse_chart(&content, format, &path)?;
    Ok(OrgTree::new(root)?)
}
