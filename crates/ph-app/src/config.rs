//! Loading constants tables and scenario files from disk.

use crate::error::{AppError, AppResult};
use crate::scenario::ScenarioFile;
use ph_core::ChemConstants;
use serde::de::DeserializeOwned;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub fn parse_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> AppResult<T> {
    match format {
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content, format)
}

/// Load a constants table; omitted fields keep their standard values.
pub fn load_constants(path: &Path) -> AppResult<ChemConstants> {
    let constants: ChemConstants = read_document(path)?;
    constants.validate()?;
    tracing::debug!(path = %path.display(), "loaded constants table");
    Ok(constants)
}

pub fn load_scenarios(path: &Path) -> AppResult<ScenarioFile> {
    let file: ScenarioFile = read_document(path)?;
    tracing::debug!(
        path = %path.display(),
        count = file.scenarios.len(),
        "loaded scenario file"
    );
    Ok(file)
}

pub fn constants_to_yaml(constants: &ChemConstants) -> AppResult<String> {
    Ok(serde_yaml::to_string(constants)?)
}
