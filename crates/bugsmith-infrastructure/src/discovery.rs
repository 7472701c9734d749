//! Source file discovery
//!
//! Expands input paths into the source files of supported languages.
//! Directories are walked recursively; hidden and vendored directories are
//! skipped. Output is sorted so runs over the same tree see the same order.

use crate::constants::SKIPPED_DIRECTORIES;
use bugsmith_domain::Language;
use bugsmith_domain::error::{Error, Result};
use bugsmith_providers::language::supported_languages;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Language of a path, if its extension maps to a compiled-in grammar
pub fn detect_language(path: &Path) -> Option<Language> {
    let language = Language::from_extension(path.extension()?.to_str()?)?;
    supported_languages().contains(&language).then_some(language)
}

/// Every supported source file under `inputs`
///
/// A file given explicitly must be of a supported language; a missing
/// input is an I/O error.
pub fn discover_sources(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for input in inputs {
        let meta = std::fs::metadata(input)?;
        if meta.is_dir() {
            let found = WalkDir::new(input)
                .follow_links(false)
                .into_iter()
                .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
                .filter_map(std::result::Result::ok)
                .filter(|entry| entry.file_type().is_file())
                .filter(|entry| detect_language(entry.path()).is_some())
                .map(DirEntry::into_path);
            let before = out.len();
            out.extend(found);
            debug!(root = %input.display(), files = out.len() - before, "Discovered sources");
        } else if detect_language(input).is_some() {
            out.push(input.clone());
        } else {
            return Err(Error::UnsupportedLanguage {
                name: input.display().to_string(),
            });
        }
    }
    out.sort();
    out.dedup();
    Ok(out)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRECTORIES.contains(&name))
}
