//! Zip archive access and table discovery.

use std::io::{Cursor, Read};

use tracing::debug;

use crate::error::ImportError;

/// An in-memory rule archive with its tables read out in archive order.
#[derive(Debug)]
pub struct RuleArchive {
    entries: Vec<(String, Vec<u8>)>,
}

impl RuleArchive {
    /// Read every file entry of a zip archive into memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImportError> {
        let mut zip = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut entries = Vec::with_capacity(zip.len());
        for index in 0..zip.len() {
            let mut file = zip.by_index(index)?;
            if !file.is_file() {
                continue;
            }
            let mut contents = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut contents)?;
            entries.push((file.name().to_string(), contents));
        }
        debug!(entries = entries.len(), "rule archive opened");
        Ok(Self { entries })
    }

    /// First `.csv` entry whose name contains any keyword,
    /// case-insensitively, in archive order.
    pub fn find_table(&self, keywords: &[&str]) -> Option<&str> {
        self.entries
            .iter()
            .map(|(name, _)| name.as_str())
            .find(|name| {
                let lower = name.to_lowercase();
                lower.ends_with(".csv") && keywords.iter().any(|keyword| lower.contains(keyword))
            })
    }

    pub fn read(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, contents)| contents.as_slice())
    }
}
