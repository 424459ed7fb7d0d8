//! Stage 3b: merging of elided spellings.
use std::collections::HashMap;
use std::path::PathBuf;

use log::{info, warn};

use super::Pipeline;
use crate::elision::{load_merge_targets, merge_evidence, propose_mapping, MappingRow};
use crate::error::Error;
use crate::evidence::EvidenceEntry;
use crate::io::{read_json, write_json};

/// Merges evidence entries following a mapping file.
///
/// A missing mapping only deduplicates and caps examples.
/// When `propose` is set, a draft mapping computed from the input is written there first.
pub struct Elisions {
    src: PathBuf,
    dst: PathBuf,
    mapping: Option<PathBuf>,
    propose: Option<PathBuf>,
    max_examples: usize,
}

impl Elisions {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        mapping: Option<PathBuf>,
        propose: Option<PathBuf>,
        max_examples: usize,
    ) -> Self {
        Self {
            src,
            dst,
            mapping,
            propose,
            max_examples,
        }
    }
}

impl Pipeline<Vec<EvidenceEntry>> for Elisions {
    fn run(&self) -> Result<Vec<EvidenceEntry>, Error> {
        let entries: Vec<EvidenceEntry> = read_json(&self.src)?;
        info!("loaded {} entries from {:?}", entries.len(), self.src);

        if let Some(path) = &self.propose {
            let rows = propose_mapping(&entries);
            write_json(path, &rows)?;
            info!("proposed {} mapping rows -> {:?}", rows.len(), path);
        }

        let targets = match &self.mapping {
            Some(path) if path.exists() => {
                let rows: Vec<MappingRow> = read_json(path)?;
                load_merge_targets(&rows)
            }
            Some(path) => {
                warn!("mapping {:?} not found, nothing will be merged", path);
                HashMap::new()
            }
            None => HashMap::new(),
        };
        info!("{} elided forms to merge", targets.len());

        let before = entries.len();
        let merged = merge_evidence(entries, &targets, self.max_examples);
        write_json(&self.dst, &merged)?;
        info!(
            "wrote {} entries ({} merged away) -> {:?}",
            merged.len(),
            before - merged.len(),
            self.dst
        );
        Ok(merged)
    }
}
