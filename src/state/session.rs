//! The shell's single "current result" slot.

use crate::types::GeneratedDocument;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Holds at most one generated document between user actions.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<GeneratedDocument>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current document, returning the previous one.
    pub fn store(&mut self, document: GeneratedDocument) -> Option<GeneratedDocument> {
        self.current.replace(document)
    }

    pub fn current(&self) -> Option<&GeneratedDocument> {
        self.current.as_ref()
    }

    /// Drop the current document ("generate another").
    pub fn clear(&mut self) -> Option<GeneratedDocument> {
        self.current.take()
    }

    /// Write the current document to `path`. Returns `false` when the slot is empty.
    pub fn save_current(&self, path: &Path) -> Result<bool> {
        match &self.current {
            Some(doc) => {
                save_document(doc, path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Write a document to disk as a standalone HTML file.
pub fn save_document(document: &GeneratedDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    std::fs::write(path, &document.html)
        .with_context(|| format!("Failed to write website to {}", path.display()))?;
    info!("Saved {} bytes to {}", document.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn doc(html: &str) -> GeneratedDocument {
        GeneratedDocument::new(html.to_string(), "test-model")
    }

    #[test]
    fn slot_holds_one_document() {
        let mut session = Session::new();
        assert!(session.current().is_none());
        assert!(session.store(doc("<!DOCTYPE html>a")).is_none());
        let prev = session.store(doc("<!DOCTYPE html>b")).unwrap();
        assert_eq!(prev.html, "<!DOCTYPE html>a");
        assert_eq!(session.current().unwrap().html, "<!DOCTYPE html>b");
        assert!(session.clear().is_some());
        assert!(session.current().is_none());
    }

    #[test]
    fn save_writes_exact_html() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("website.html");
        let mut session = Session::new();
        assert!(!session.save_current(&path).unwrap());
        assert!(!path.exists());

        session.store(doc("<!DOCTYPE html><p>é</p>"));
        assert!(session.save_current(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!DOCTYPE html><p>é</p>");
    }
}
