use chrono::Utc;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::bills::BillRegister;
use crate::errors::{BillsError, Result};

use super::StorageBackend;

const REGISTER_FILE: &str = "bills.json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// JSON file storage with whole-collection replace semantics and rotating
/// timestamped backups.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        ensure_dir(&root)?;
        let backups_dir = root.join("backups");
        ensure_dir(&backups_dir)?;
        Ok(Self {
            root,
            backups_dir,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn register_path(&self) -> PathBuf {
        self.root.join(REGISTER_FILE)
    }

    pub fn list_backups(&self) -> Result<Vec<PathBuf>> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut backups = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                backups.push(path);
            }
        }
        backups.sort();
        Ok(backups)
    }

    fn prune_backups(&self) -> Result<()> {
        let backups = self.list_backups()?;
        if backups.len() <= self.retention {
            return Ok(());
        }
        // Timestamped names sort chronologically; drop the oldest.
        for stale in &backups[..backups.len() - self.retention] {
            fs::remove_file(stale)?;
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, register: &BillRegister) -> Result<()> {
        save_register_to_path(register, &self.register_path())
    }

    fn load(&self) -> Result<BillRegister> {
        let path = self.register_path();
        if !path.exists() {
            return Ok(BillRegister::new());
        }
        load_register_from_path(&path)
    }

    fn backup(&self, register: &BillRegister) -> Result<()> {
        let stamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let path = self.backups_dir.join(format!("bills_{}.json", stamp));
        save_register_to_path(register, &path)?;
        self.prune_backups()
    }
}

/// Writes the register atomically by staging to a temporary file and renaming
/// over the target, so a crash never leaves a half-written collection.
pub fn save_register_to_path(register: &BillRegister, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(register)?;
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a register snapshot. Missing fields on old records are defaulted at
/// this boundary, so the engine always receives fully-populated bills.
pub fn load_register_from_path(path: &Path) -> Result<BillRegister> {
    if !path.exists() {
        return Err(BillsError::Storage(format!(
            "register file `{}` not found",
            path.display()
        )));
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bills_core")
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
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
