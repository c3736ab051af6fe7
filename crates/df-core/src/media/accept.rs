//! Accepted media types

use super::FileMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mime pattern to extension list, e.g. `image/*` -> `[.jpg, .png]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptTypes {
    types: BTreeMap<String, Vec<String>>,
}

impl Default for AcceptTypes {
    fn default() -> Self {
        Self::new()
            .with(
                "image/*",
                &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"],
            )
            .with("video/*", &[".mp4", ".mov", ".avi", ".mkv", ".webm", ".flv"])
    }
}

impl AcceptTypes {
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    pub fn with(mut self, mime: &str, extensions: &[&str]) -> Self {
        self.types.insert(
            mime.to_string(),
            extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
        );
        self
    }

    /// A file passes when either its declared mime or its extension is listed
    pub fn accepts(&self, file: &FileMeta) -> bool {
        let name = file.name.to_ascii_lowercase();
        self.types.iter().any(|(pattern, extensions)| {
            mime_matches(pattern, &file.mime) || extensions.iter().any(|ext| name.ends_with(ext))
        })
    }

    /// Value for the `accept` attribute of a file input
    pub fn input_attr(&self) -> String {
        self.types
            .iter()
            .flat_map(|(pattern, extensions)| {
                std::iter::once(pattern.clone()).chain(extensions.iter().cloned())
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn mime_matches(pattern: &str, mime: &str) -> bool {
    if mime.is_empty() {
        return false;
    }
    match pattern.strip_suffix("/*") {
        Some(major) => mime
            .split_once('/')
            .map(|(m, _)| m.eq_ignore_ascii_case(major))
            .unwrap_or(false),
        None => pattern.eq_ignore_ascii_case(mime),
    }
}
