use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::budget::TimePeriod;
use crate::errors::Result;

const TMP_SUFFIX: &str = "tmp";

/// Layout and defaults of the budget form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BudgetConfig {
    pub income_labels: Vec<String>,
    pub spending_labels: Vec<String>,
    pub income_period: TimePeriod,
    pub spending_period: TimePeriod,
    pub overall_period: TimePeriod,
    pub display: DisplayOptions,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            income_labels: vec!["Wages".into(), "Loans".into(), "Sales".into()],
            spending_labels: vec!["Taxes".into(), "Credits".into(), "Food".into()],
            income_period: TimePeriod::Weekly,
            spending_period: TimePeriod::Weekly,
            overall_period: TimePeriod::Weekly,
            display: DisplayOptions::default(),
        }
    }
}

impl BudgetConfig {
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Paint a deficit red in rendered summaries.
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Loads and stores a [`BudgetConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the config, or returns the defaults when the file is absent.
    pub fn load(&self) -> Result<BudgetConfig> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = BudgetConfig::from_json_str(&data)?;
            debug!(path = %self.path.display(), "loaded budget config");
            Ok(config)
        } else {
            debug!(path = %self.path.display(), "no budget config, using defaults");
            Ok(BudgetConfig::default())
        }
    }

    pub fn save(&self, config: &BudgetConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
