use crate::core::Storage;
use crate::utils::error::{ContextError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes reports into a directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).map_err(|source| ContextError::OutputDirError {
            path: self.base_path.clone(),
            source,
        })
    }

    async fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(name);
        // 先寫暫存檔再 rename，避免留下寫到一半的清單
        let tmp_path = self.base_path.join(format!(".{}.tmp", name));

        let write_error = |source: std::io::Error| ContextError::WriteError {
            path: full_path.clone(),
            source,
        };

        fs::write(&tmp_path, data).map_err(write_error)?;
        if let Err(source) = fs::rename(&tmp_path, &full_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_error(source));
        }

        Ok(full_path)
    }
}
