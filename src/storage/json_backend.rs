use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::budget::BudgetData;
use crate::errors::Result;

use super::StorageBackend;

/// Fixed storage key for the single budget document.
const DOCUMENT_FILE: &str = "smart-budget-tracker.json";
const DEFAULT_DIR_NAME: &str = ".budget_tracker";
const TMP_SUFFIX: &str = "tmp";

/// File-backed storage for the budget document.
///
/// Saves are atomic: the document is written to a sibling temp file and
/// renamed into place, so a failed write leaves prior content untouched.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates storage rooted at `root`, defaulting to the application data
    /// directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let dir = root.unwrap_or_else(app_data_dir);
        ensure_dir(&dir)?;
        Ok(Self {
            path: dir.join(DOCUMENT_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn document_path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<BudgetData> {
        if !self.path.exists() {
            return Ok(BudgetData::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, data: &BudgetData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Returns the application data directory, defaulting to `~/.budget_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_TRACKER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
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

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
