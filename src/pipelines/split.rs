//! Stage 3: language buckets.
//!
//! The input is either an evidence list or an object keyed by token. Outputs
//! keep the input shape: one file per [Bucket], each item keeping its original
//! fields along with a `lid_meta` audit object.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::{Map, Value};

use super::Pipeline;
use crate::classify::{Bucket, Classifier, LidMeta};
use crate::error::Error;
use crate::identifiers::Identifier;
use crate::io::{read_json, write_json};

pub struct Split<'a, I: Identifier> {
    identifier: &'a I,
    src: PathBuf,
    out_dir: PathBuf,
    out_prefix: String,
    max_lines: usize,
    threshold: f64,
}

impl<'a, I: Identifier> Split<'a, I> {
    pub fn new(
        identifier: &'a I,
        src: PathBuf,
        out_dir: PathBuf,
        out_prefix: String,
        max_lines: usize,
        threshold: f64,
    ) -> Self {
        Self {
            identifier,
            src,
            out_dir,
            out_prefix,
            max_lines,
            threshold,
        }
    }

    /// `<out_dir>/<out_prefix>_<bucket>.json`
    pub fn bucket_path(&self, bucket: Bucket) -> PathBuf {
        self.out_dir
            .join(format!("{}_{}.json", self.out_prefix, bucket.name()))
    }

    /// Item with `lid_meta` attached. Items that are not objects are kept under `original`.
    fn annotate(item: Value, meta: &LidMeta) -> Result<Value, Error> {
        let mut obj = match item {
            Value::Object(obj) => obj,
            other => {
                let mut obj = Map::new();
                obj.insert("original".to_string(), other);
                obj
            }
        };
        obj.insert("lid_meta".to_string(), serde_json::to_value(meta)?);
        Ok(Value::Object(obj))
    }

    fn classify(&self, classifier: &Classifier<I>, token: &str, item: Value) -> Result<(Bucket, Value), Error> {
        let (bucket, meta) = classifier.classify(token, &item);
        debug!("{} -> {} ({:?})", token, bucket, meta.junk_reasons);
        Ok((bucket, Self::annotate(item, &meta)?))
    }

    fn write_buckets<T: serde::Serialize>(&self, buckets: &BTreeMap<Bucket, T>) -> Result<(), Error> {
        for (bucket, items) in buckets {
            let path = self.bucket_path(*bucket);
            write_json(&path, items)?;
        }
        Ok(())
    }

    fn split_list(&self, classifier: &Classifier<I>, items: Vec<Value>) -> Result<BTreeMap<Bucket, usize>, Error> {
        let mut buckets: BTreeMap<Bucket, Vec<Value>> =
            Bucket::ALL.iter().map(|b| (*b, Vec::new())).collect();
        for item in items {
            let token = item
                .get("word")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let (bucket, value) = self.classify(classifier, &token, item)?;
            buckets.entry(bucket).or_default().push(value);
        }
        self.write_buckets(&buckets)?;
        Ok(buckets.iter().map(|(b, items)| (*b, items.len())).collect())
    }

    fn split_map(&self, classifier: &Classifier<I>, items: Map<String, Value>) -> Result<BTreeMap<Bucket, usize>, Error> {
        let mut buckets: BTreeMap<Bucket, Map<String, Value>> =
            Bucket::ALL.iter().map(|b| (*b, Map::new())).collect();
        for (token, item) in items {
            let (bucket, value) = self.classify(classifier, &token, item)?;
            buckets.entry(bucket).or_default().insert(token, value);
        }
        self.write_buckets(&buckets)?;
        Ok(buckets.iter().map(|(b, items)| (*b, items.len())).collect())
    }
}

fn describe(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl<'a, I: Identifier> Pipeline<BTreeMap<Bucket, usize>> for Split<'a, I> {
    /// Returns the number of items written per bucket.
    fn run(&self) -> Result<BTreeMap<Bucket, usize>, Error> {
        let data: Value = read_json(&self.src)?;
        let classifier = Classifier::new(self.identifier, self.max_lines, self.threshold);

        let counts = match data {
            Value::Array(items) => self.split_list(&classifier, items)?,
            Value::Object(items) => self.split_map(&classifier, items)?,
            _ => {
                return Err(Error::Custom(format!(
                    "{:?}: expected a list of entries or an object keyed by token.",
                    self.src
                )))
            }
        };

        for (bucket, n) in &counts {
            info!("wrote {} ({} items)", describe(&self.bucket_path(*bucket)), n);
        }
        Ok(counts)
    }
}
