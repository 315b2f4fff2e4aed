// ============================================================
// Layer 6 — Keyword Store
// ============================================================
// Manages the keyword file: the plain-text list of search
// terms, one per line.
//
// File format:
//   - UTF-8, one keyword per line
//   - blank lines are ignored
//   - lines starting with '#' are comments
//   - entries are lowercased on load (matching is
//     case-insensitive anyway, and the report prints the
//     keywords in lowercase)
//
// First run: if the file does not exist it is created with a
// comment header and two starter keywords, and the run simply
// proceeds with those — a missing keyword file is never an
// error. An existing file with no usable entries falls back
// to a single default keyword.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// Keywords written into a freshly created file
const DEFAULT_KEYWORDS: [&str; 2] = ["kontrakt", "avtale"];

/// Used when the file exists but contains no usable entries
const FALLBACK_KEYWORD: &str = "kontrakt";

pub struct KeywordStore {
    path: PathBuf,
}

impl KeywordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the keyword list, creating the file with defaults
    /// if it does not exist yet.
    pub fn load_or_create(&self) -> Result<Vec<String>> {
        if self.path.exists() {
            self.load()
        } else {
            tracing::info!("Creating keyword file '{}'", self.path.display());
            self.create_default()?;
            Ok(DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect())
        }
    }

    /// Read and filter the keyword file.
    fn load(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read keyword file '{}'", self.path.display()))?;

        let keywords: Vec<String> = content
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .map(|line| line.trim().to_lowercase())
            .collect();

        if keywords.is_empty() {
            tracing::warn!(
                "Keyword file '{}' has no usable entries, using '{}'",
                self.path.display(),
                FALLBACK_KEYWORD
            );
            return Ok(vec![FALLBACK_KEYWORD.to_string()]);
        }

        tracing::info!("Loaded {} keywords from '{}'", keywords.len(), self.path.display());
        Ok(keywords)
    }

    /// Write the starter file: a usage comment plus the defaults.
    fn create_default(&self) -> Result<()> {
        let mut content = String::from("# Skriv ett sokeord per linje\n");
        for keyword in DEFAULT_KEYWORDS {
            content.push_str(keyword);
            content.push('\n');
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Cannot create keyword file '{}'", self.path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir   = tempfile::tempdir().unwrap();
        let path  = dir.path().join("nokkelord.txt");
        let store = KeywordStore::new(&path);

        let keywords = store.load_or_create().unwrap();

        assert_eq!(keywords, vec!["kontrakt", "avtale"]);
        // The file now exists and round-trips to the same list
        assert!(path.exists());
        assert_eq!(store.load_or_create().unwrap(), keywords);
    }

    #[test]
    fn test_comments_and_blank_lines_are_ignored() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nokkelord.txt");
        fs::write(&path, "# kommentar\n\nKontrakt\n  leie  \n#avtale\n").unwrap();

        let keywords = KeywordStore::new(&path).load_or_create().unwrap();
        assert_eq!(keywords, vec!["kontrakt", "leie"]);
    }

    #[test]
    fn test_entries_are_lowercased() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nokkelord.txt");
        fs::write(&path, "AVTALE\nKontrakt\n").unwrap();

        let keywords = KeywordStore::new(&path).load_or_create().unwrap();
        assert_eq!(keywords, vec!["avtale", "kontrakt"]);
    }

    #[test]
    fn test_file_with_only_comments_falls_back() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nokkelord.txt");
        fs::write(&path, "# bare kommentarer her\n\n").unwrap();

        let keywords = KeywordStore::new(&path).load_or_create().unwrap();
        assert_eq!(keywords, vec!["kontrakt"]);
    }

    #[test]
    fn test_duplicates_are_preserved_in_order() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nokkelord.txt");
        fs::write(&path, "leie\navtale\nleie\n").unwrap();

        let keywords = KeywordStore::new(&path).load_or_create().unwrap();
        assert_eq!(keywords, vec!["leie", "avtale", "leie"]);
    }
}
