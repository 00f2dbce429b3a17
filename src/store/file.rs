//! One pretty-printed JSON document per set in a data directory.
//!
//! File names are the percent-encoded set id plus `.json`. Writes go to a
//! temp file that is then renamed over the target.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{RecordRepository, validate_record};
use crate::error::{Result, TrackerError};
use crate::models::{Record, check_progress};
use crate::utils::paths::{
    RECORD_EXTENSION, decode_record_id, encode_record_id, record_file_name, validate_file_size,
};

#[derive(Debug, Clone)]
pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    /// Use `dir` as the data directory; it is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(record_file_name(id))
    }

    fn write_atomic(&self, record: &Record) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| TrackerError::io(&self.dir, e))?;

        let path = self.path_for(&record.id);
        let temp = self.dir.join(format!("{}.tmp", record_file_name(&record.id)));
        let json = serde_json::to_string_pretty(record)
            .map_err(|source| TrackerError::Serialize { id: record.id.clone(), source })?;

        fs::write(&temp, json).map_err(|e| TrackerError::io(&temp, e))?;
        fs::rename(&temp, &path).map_err(|e| TrackerError::io(&path, e))?;

        debug!(set_id = %record.id, path = %path.display(), "wrote set file");
        Ok(())
    }
}

impl RecordRepository for FileRecordStore {
    fn create(&mut self, record: &Record) -> Result<()> {
        if record.id.is_empty() {
            return Err(TrackerError::validation("set id cannot be empty"));
        }
        validate_record(record)?;
        if self.exists(&record.id)? {
            return Err(TrackerError::DuplicateRecord { id: record.id.clone() });
        }
        self.write_atomic(record)
    }

    fn load(&self, id: &str) -> Result<Record> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(TrackerError::NotFound { id: id.to_string() });
        }

        let mut file = File::open(&path).map_err(|e| TrackerError::io(&path, e))?;
        validate_file_size(&file, &path).map_err(|e| TrackerError::malformed(id, e.to_string()))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| TrackerError::io(&path, e))?;

        let record: Record =
            serde_json::from_str(&contents).map_err(|e| TrackerError::malformed(id, e.to_string()))?;

        if record.id != id {
            return Err(TrackerError::malformed(
                id,
                format!("file holds set {} instead", record.id),
            ));
        }
        check_progress(&record.parts).map_err(|reason| TrackerError::malformed(id, reason))?;

        Ok(record)
    }

    fn save(&mut self, record: &Record) -> Result<()> {
        if !self.exists(&record.id)? {
            return Err(TrackerError::NotFound { id: record.id.clone() });
        }
        validate_record(record)?;
        self.write_atomic(record)
    }

    fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.path_for(id).is_file())
    }

    /// Ids sorted lexicographically; a missing data directory holds no sets
    fn list_ids(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| TrackerError::io(&self.dir, e))?;
        let mut ids = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| TrackerError::io(&self.dir, e))?;
            let path = entry.path();

            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match decode_record_id(stem) {
                // Only the canonical encoding counts, so one id never maps to two files
                Some(id) if encode_record_id(&id) == stem => ids.push(id),
                Some(id) => warn!(
                    path = %path.display(),
                    set_id = %id,
                    "skipping set file with non-canonical name"
                ),
                None => warn!(path = %path.display(), "skipping set file with undecodable name"),
            }
        }

        ids.sort();
        Ok(ids)
    }
}
