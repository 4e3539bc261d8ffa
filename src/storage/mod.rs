//! Output persistence.
//!
//! Records are written as JSONL: one JSON object per line, UTF-8, non-ASCII
//! characters left unescaped so the files load with generic
//! one-object-per-line readers.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::Article;

/// Incremental JSONL writer, opened once for the duration of a run.
pub struct JsonlWriter {
    file: File,
    written: usize,
}

impl JsonlWriter {
    /// Create (truncate) the output file, creating parent directories.
    ///
    /// The file exists from this point even if no record is ever appended.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = File::create(path).await?;
        Ok(Self { file, written: 0 })
    }

    /// Append one record as a single JSON line.
    pub async fn append(&mut self, article: &Article) -> Result<()> {
        let mut line = serde_json::to_string(article)?;
        line.push('\n');
        self.file.write_all(line.as_bytes()).await?;
        self.written += 1;
        Ok(())
    }

    /// Number of records appended so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered data to disk.
    pub async fn flush(&mut self) -> Result<()> {
        self.file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let mut writer = JsonlWriter::create(&path).await.unwrap();
        writer
            .append(&Article {
                title: "첫 기사".into(),
                body: "본문 하나".into(),
            })
            .await
            .unwrap();
        writer
            .append(&Article {
                title: "둘째 기사".into(),
                body: "본문 둘".into(),
            })
            .await
            .unwrap();
        writer.flush().await.unwrap();
        assert_eq!(writer.written(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Article = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.title, "첫 기사");

        // Non-ASCII written literally, not \u-escaped.
        assert!(content.contains("첫 기사"));
        assert!(!content.contains("\\u"));
    }

    #[tokio::test]
    async fn creates_file_and_parent_dirs_even_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deep/out.jsonl");

        let mut writer = JsonlWriter::create(&path).await.unwrap();
        writer.flush().await.unwrap();
        assert_eq!(writer.written(), 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.is_empty());
    }
}
