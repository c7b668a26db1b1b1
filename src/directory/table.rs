//! Directory implementation

use std::collections::{BTreeMap, HashMap};

use crate::error::{MfsError, Result};

use super::FileRecord;

struct Entry {
    record: FileRecord,
    seq: u64,
}

/// Name → record map with a reverse-insertion listing order
pub struct Directory {
    entries: HashMap<String, Entry>,

    /// Insertion sequence → name
    order: BTreeMap<u64, String>,

    next_seq: u64,

    max_name_len: usize,
}

impl Directory {
    /// Create an empty directory accepting names up to `max_name_len` bytes
    pub fn new(max_name_len: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
            max_name_len,
        }
    }

    /// Check a name against the length limit without inserting it
    pub fn check_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(MfsError::InvalidName);
        }
        if name.len() > self.max_name_len {
            return Err(MfsError::NameTooLong {
                len: name.len(),
                max: self.max_name_len,
            });
        }
        Ok(())
    }

    /// Add a record; the name must be valid and not yet present
    pub fn insert(&mut self, record: FileRecord) -> Result<()> {
        self.check_name(&record.name)?;
        if self.entries.contains_key(&record.name) {
            return Err(MfsError::AlreadyExists(record.name));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, record.name.clone());
        self.entries.insert(record.name.clone(), Entry { record, seq });
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&FileRecord> {
        self.entries
            .get(name)
            .map(|entry| &entry.record)
            .ok_or_else(|| MfsError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a record and hand it back so the caller can release its chain
    pub fn remove(&mut self, name: &str) -> Result<FileRecord> {
        let entry = self
            .entries
            .remove(name)
            .ok_or_else(|| MfsError::NotFound(name.to_string()))?;
        self.order.remove(&entry.seq);
        Ok(entry.record)
    }

    /// All records, most recently inserted first
    pub fn list(&self) -> Vec<&FileRecord> {
        self.order
            .values()
            .rev()
            .filter_map(|name| self.entries.get(name).map(|entry| &entry.record))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }
}
