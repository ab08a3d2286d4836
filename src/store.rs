use std::{fs, io, path::PathBuf};

use crate::models::Analytics;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("analytics file io: {0}")]
    Io(#[from] io::Error),
    #[error("analytics file schema: {0}")]
    Schema(#[from] serde_json::Error),
}

// Owns the path to the analytics JSON file. The path is injected so
// tests can point the store at a temporary file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // Load the analytics document, or the zero-valued document when no
    // file exists yet or the file is not JSON at all. A file that IS
    // JSON but is missing the counters (or has them at the wrong type)
    // is a schema error, not something to silently reset.
    pub fn load(&self) -> Result<Analytics, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Analytics::default()),
            Err(e) => return Err(e.into()),
        };

        let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) else {
            // Unreadable content: start over from zero. Lossy on purpose.
            return Ok(Analytics::default());
        };

        Ok(serde_json::from_value(value)?)
    }

    // Rewrite the whole document. Write-then-rename so a concurrent
    // reader never sees a half-written file. This does NOT serialize
    // concurrent writers; see record_visit.
    pub fn save(&self, analytics: &Analytics) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(analytics)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        fs::write(&tmp_path, text)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
