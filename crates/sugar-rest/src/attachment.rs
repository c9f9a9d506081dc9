//! File payloads for document revisions and note attachments.

use std::io::Read;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Error, Result};

/// A file to upload: its name and raw bytes. Sent base64-encoded.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    filename: String,
    content: Vec<u8>,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("filename", &self.filename)
            .field("len", &self.content.len())
            .finish()
    }
}

impl Attachment {
    pub fn from_bytes(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk. The stored filename is the path's final
    /// component.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let filename = basename(path)?;
        let content = tokio::fs::read(path).await?;
        Ok(Self { filename, content })
    }

    /// Drain an already-open reader (e.g. a `std::fs::File`).
    ///
    /// Directory components in `name` are dropped.
    pub fn from_reader(name: impl AsRef<Path>, mut reader: impl Read) -> Result<Self> {
        let filename = basename(name.as_ref())?;
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Ok(Self { filename, content })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Standard base64 of the content.
    pub fn encoded(&self) -> String {
        STANDARD.encode(&self.content)
    }
}

fn basename(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::invalid_input(format!("no file name in path {}", path.display()))
        })
}
