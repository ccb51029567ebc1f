//! Async reads of user-supplied document and rule files.

use std::path::Path;

use mechedit_core::prelude::*;

/// What a file is being loaded as; decides which extensions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Document,
    Rules,
}

impl FileKind {
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FileKind::Document => &["txt", "md", "markdown", "html", "htm"],
            FileKind::Rules => &["yml", "yaml"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Document => "document",
            FileKind::Rules => "rule file",
        }
    }

    /// Case-insensitive extension check
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions()
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

/// Read a whole file as UTF-8 text after checking its extension.
pub async fn read_text_file(path: &Path, kind: FileKind) -> Result<String> {
    if !kind.accepts(path) {
        return Err(Error::unsupported_file_type(path, kind.extensions()));
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::file_read(path, e.to_string()))?;

    debug!(
        "Read {} {} ({} bytes)",
        kind.label(),
        path.display(),
        content.len()
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_document_extensions() {
        assert!(FileKind::Document.accepts(Path::new("notes.md")));
        assert!(FileKind::Document.accepts(Path::new("page.HTM")));
        assert!(!FileKind::Document.accepts(Path::new("rules.yml")));
        assert!(!FileKind::Document.accepts(Path::new("README")));
    }

    #[test]
    fn test_rule_extensions() {
        assert!(FileKind::Rules.accepts(Path::new("vale.yaml")));
        assert!(!FileKind::Rules.accepts(Path::new("vale.json")));
    }

    #[tokio::test]
    async fn test_read_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        std::fs::write(&path, "Teh cat sat.\n").unwrap();

        let content = read_text_file(&path, FileKind::Document).await.unwrap();
        assert_eq!(content, "Teh cat sat.\n");
    }

    #[tokio::test]
    async fn test_read_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("draft.pdf");
        std::fs::write(&path, "binary").unwrap();

        let err = read_text_file(&path, FileKind::Document).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType { .. }));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_text_file(&dir.path().join("gone.md"), FileKind::Document)
            .await
            .unwrap_err();
        assert!(err.is_file_error());
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
