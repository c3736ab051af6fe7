//! Media selection
//!
//! The upload zone collects files by drag-drop, the file picker, or a pasted
//! URL. Everything it admits lands in a bounded [`Selection`] owned by the
//! upload page; the zone itself never uploads.

mod accept;

pub use accept::AcceptTypes;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// What the browser reports about a file before any bytes are read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// Content behind a selected entry
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileSource {
    Bytes(Arc<[u8]>),
    Url(String),
}

impl std::fmt::Debug for FileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileSource::Bytes(data) => write!(f, "Bytes({} bytes)", data.len()),
            FileSource::Url(url) => f.debug_tuple("Url").field(url).finish(),
        }
    }
}

/// One entry of the upload selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub source: FileSource,
}

/// Mime recorded for URL stand-ins
pub const URL_MIME: &str = "url";

impl SelectedFile {
    pub fn from_bytes(meta: FileMeta, data: Vec<u8>) -> Self {
        Self {
            name: meta.name,
            size: meta.size,
            mime: meta.mime,
            source: FileSource::Bytes(data.into()),
        }
    }

    /// Pseudo-file for a pasted URL. The URL is not fetched or validated.
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        let name = match url.rsplit('/').next() {
            Some(segment) if !segment.is_empty() => segment.to_string(),
            _ => "url-file".to_string(),
        };
        Some(Self {
            name,
            size: 0,
            mime: URL_MIME.to_string(),
            source: FileSource::Url(url.to_string()),
        })
    }

    pub fn is_url(&self) -> bool {
        matches!(self.source, FileSource::Url(_))
    }

    /// Second line under the file name in the selection list
    pub fn size_label(&self) -> String {
        if self.is_url() {
            "URL".to_string()
        } else {
            format_file_size(self.size)
        }
    }

    pub fn kind(&self) -> FileKind {
        if self.is_url() {
            FileKind::Link
        } else if self.mime.starts_with("image/") {
            FileKind::Image
        } else if self.mime.starts_with("video/") {
            FileKind::Video
        } else {
            FileKind::Other
        }
    }
}

/// Icon family for a selection entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Link,
    Image,
    Video,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    UnsupportedType,
    TooManyFiles,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::UnsupportedType => write!(f, "unsupported file type"),
            RejectReason::TooManyFiles => write!(f, "too many files"),
        }
    }
}

/// Outcome of offering candidates to the selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Admission {
    /// Candidate indices to read and add, in offer order
    pub accepted: Vec<usize>,
    pub rejected: Vec<(usize, RejectReason)>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Selection is full ({0} files)")]
    Full(usize),

    #[error("URL is blank")]
    BlankUrl,
}

/// Bounded, ordered list of files awaiting upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    files: Vec<SelectedFile>,
    max: usize,
}

impl Selection {
    pub fn new(max: usize) -> Self {
        Self {
            files: Vec::new(),
            max,
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.files.len() >= self.max
    }

    pub fn remaining(&self) -> usize {
        self.max.saturating_sub(self.files.len())
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn first(&self) -> Option<&SelectedFile> {
        self.files.first()
    }

    /// The drop zone and URL button are inert while uploading or at capacity
    pub fn input_disabled(&self, is_uploading: bool) -> bool {
        is_uploading || self.is_full()
    }

    /// Decide which candidates may be added. Nothing is mutated.
    pub fn admit(&self, accept: &AcceptTypes, candidates: &[FileMeta]) -> Admission {
        let mut admission = Admission::default();
        let mut room = self.remaining();

        for (index, candidate) in candidates.iter().enumerate() {
            if !accept.accepts(candidate) {
                tracing::warn!("Rejected {}: {}", candidate.name, RejectReason::UnsupportedType);
                admission.rejected.push((index, RejectReason::UnsupportedType));
            } else if room == 0 {
                tracing::warn!("Rejected {}: {}", candidate.name, RejectReason::TooManyFiles);
                admission.rejected.push((index, RejectReason::TooManyFiles));
            } else {
                room -= 1;
                admission.accepted.push(index);
            }
        }

        admission
    }

    /// Append files up to capacity; returns how many were added
    pub fn extend(&mut self, files: impl IntoIterator<Item = SelectedFile>) -> usize {
        let room = self.remaining();
        let before = self.files.len();
        self.files.extend(files.into_iter().take(room));
        self.files.len() - before
    }

    pub fn add_url(&mut self, url: &str) -> Result<(), SelectionError> {
        if self.is_full() {
            return Err(SelectionError::Full(self.max));
        }
        let file = SelectedFile::from_url(url).ok_or(SelectionError::BlankUrl)?;
        self.files.push(file);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<SelectedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Header above the list, e.g. `Selected Files (2/5)`
    pub fn heading(&self) -> String {
        format!("Selected Files ({}/{})", self.files.len(), self.max)
    }
}

/// Human-readable size, base 1024, at most two decimals
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let bytes = bytes as f64;
    let exponent = (bytes.ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes / 1024f64.powi(exponent as i32);

    let formatted = format!("{:.2}", value);
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", formatted, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, mime: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size: 1024,
            mime: mime.to_string(),
        }
    }

    fn file(name: &str) -> SelectedFile {
        SelectedFile::from_bytes(meta(name, "video/mp4"), vec![0u8; 4])
    }

    #[test]
    fn test_rejects_sixth_file_at_capacity() {
        let mut selection = Selection::new(5);
        assert_eq!(selection.extend((0..5).map(|i| file(&format!("{}.mp4", i)))), 5);
        assert!(selection.is_full());

        let admission = selection.admit(&AcceptTypes::default(), &[meta("6.mp4", "video/mp4")]);
        assert!(admission.accepted.is_empty());
        assert_eq!(admission.rejected, vec![(0, RejectReason::TooManyFiles)]);

        assert_eq!(selection.extend(vec![file("6.mp4")]), 0);
        assert_eq!(selection.len(), 5);
    }

    #[test]
    fn test_admit_truncates_to_remaining() {
        let mut selection = Selection::new(5);
        selection.extend((0..3).map(|i| file(&format!("{}.mp4", i))));

        let candidates = vec![
            meta("a.png", "image/png"),
            meta("b.txt", "text/plain"),
            meta("c.mp4", "video/mp4"),
            meta("d.mp4", "video/mp4"),
        ];
        let admission = selection.admit(&AcceptTypes::default(), &candidates);
        assert_eq!(admission.accepted, vec![0, 2]);
        assert_eq!(
            admission.rejected,
            vec![(1, RejectReason::UnsupportedType), (3, RejectReason::TooManyFiles)]
        );
    }

    #[test]
    fn test_count_never_exceeds_max() {
        let mut selection = Selection::new(2);
        selection.extend((0..10).map(|i| file(&format!("{}.mp4", i))));
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.add_url("https://x.test/a.mp4"), Err(SelectionError::Full(2)));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_url_stand_in() {
        let mut selection = Selection::new(5);
        selection.add_url("  https://cdn.example.com/media/clip.mp4 ").unwrap();
        let entry = selection.first().unwrap();
        assert_eq!(entry.name, "clip.mp4");
        assert_eq!(entry.size, 0);
        assert_eq!(entry.mime, "url");
        assert!(entry.is_url());
        assert_eq!(entry.size_label(), "URL");
        assert_eq!(entry.kind(), FileKind::Link);

        let trailing = SelectedFile::from_url("https://example.com/").unwrap();
        assert_eq!(trailing.name, "url-file");
        assert_eq!(selection.add_url("   "), Err(SelectionError::BlankUrl));
    }

    #[test]
    fn test_remove_by_index() {
        let mut selection = Selection::new(5);
        selection.extend(vec![file("a.mp4"), file("b.mp4"), file("c.mp4")]);
        assert_eq!(selection.remove(1).unwrap().name, "b.mp4");
        let names: Vec<_> = selection.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.mp4", "c.mp4"]);
        assert!(selection.remove(7).is_none());
        assert_eq!(selection.heading(), "Selected Files (2/5)");
    }

    #[test]
    fn test_input_disabled() {
        let mut selection = Selection::new(1);
        assert!(!selection.input_disabled(false));
        assert!(selection.input_disabled(true));
        selection.extend(vec![file("a.mp4")]);
        assert!(selection.input_disabled(false));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024 + 1024 * 1024 / 4), "5.25 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 * 1024), "3072 GB");
    }
}
