use crate::naming::extension_from_url;
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

/// A downloaded label document and where it was stored.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchedLabel {
    /// The URL the document was downloaded from
    pub download_url: String,
    /// The raw document
    pub bytes: Vec<u8>,
    /// The extension implied by the URL's path, including the dot (e.g. `.pdf`)
    pub extension: Option<String>,
    /// Where the document was written
    pub path: PathBuf,
}

impl FetchedLabel {
    /// Write a downloaded document to `dir` as `{stem}{extension}`.
    ///
    /// The directory is created if it does not exist yet.
    pub fn store(
        download_url: impl Into<String>,
        bytes: Vec<u8>,
        dir: &Path,
        stem: &str,
    ) -> io::Result<Self> {
        let download_url = download_url.into();
        let extension = extension_from_url(&download_url);

        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{stem}{}", extension.as_deref().unwrap_or_default()));
        fs::write(&path, &bytes)?;

        Ok(Self {
            download_url,
            bytes,
            extension,
            path,
        })
    }

    /// Whether the document is a PDF, judged by its extension.
    pub fn is_pdf(&self) -> bool {
        self.extension
            .as_deref()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".pdf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_with_extension_from_url() {
        let dir = tempfile::tempdir().unwrap();
        let labels = dir.path().join("labels");

        let label = FetchedLabel::store(
            "https://cdn.example/files/label.PDF?sig=abc",
            b"%PDF-1.5".to_vec(),
            &labels,
            "01022024-101500-anna-GLS-a1",
        )
        .unwrap();

        assert_eq!(label.extension.as_deref(), Some(".PDF"));
        assert!(label.is_pdf());
        assert_eq!(label.path, labels.join("01022024-101500-anna-GLS-a1.PDF"));
        assert_eq!(fs::read(&label.path).unwrap(), b"%PDF-1.5");
    }

    #[test]
    fn stores_without_extension() {
        let dir = tempfile::tempdir().unwrap();

        let label = FetchedLabel::store(
            "https://cdn.example/files/label",
            b"ZPL".to_vec(),
            dir.path(),
            "stem",
        )
        .unwrap();

        assert_eq!(label.extension, None);
        assert!(!label.is_pdf());
        assert_eq!(label.path, dir.path().join("stem"));
    }
}
