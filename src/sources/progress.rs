//! Already downloaded song ids, persisted between runs.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::io::{read_json_or_default, write_json};

/// Set of song ids that have been downloaded, backed by a JSON file
/// holding a sorted array.
#[derive(Debug)]
pub struct DoneIds {
    path: PathBuf,
    ids: BTreeSet<u64>,
}

impl DoneIds {
    /// Loads the set from `path`. A missing file is an empty set.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let ids: Vec<u64> = read_json_or_default(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            ids: ids.into_iter().collect(),
        })
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Marks `id` as done and persists the set immediately.
    pub fn insert_and_save(&mut self, id: u64) -> Result<(), Error> {
        self.ids.insert(id);
        self.save()
    }

    pub fn save(&self) -> Result<(), Error> {
        let ids: Vec<u64> = self.ids.iter().copied().collect();
        write_json(&self.path, &ids)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
