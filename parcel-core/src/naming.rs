//! Naming policy for stored label documents.
//!
//! A label is stored as `{ddMMyyyy-HHmmss}-{username}-GLS-{unit}{extension}`,
//! where the user name and the unit identifier are reduced to lower-case
//! alphanumerics, hyphens and underscores.

use crate::CARRIER;
use std::path::Path;
use time::OffsetDateTime;
use url::Url;

/// Stands in for a segment that sanitizes to nothing.
pub const PLACEHOLDER_SEGMENT: &str = "unbekannt";

/// Reduce `value` to a file-name-safe, lower-case segment.
///
/// Keeps alphanumeric characters (including non-ASCII letters), `-` and
/// `_`, then strips leading and trailing `-`/`_`. An empty result becomes
/// [`PLACEHOLDER_SEGMENT`].
pub fn sanitize_segment(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|ch| ch.is_alphanumeric() || matches!(ch, '-' | '_'))
        .collect();
    let cleaned = kept.trim_matches(['-', '_']);

    if cleaned.is_empty() {
        PLACEHOLDER_SEGMENT.to_owned()
    } else {
        cleaned.to_lowercase()
    }
}

/// The file name of a label document without its extension.
pub fn label_file_stem(at: OffsetDateTime, username: &str, unit_id: &str) -> String {
    format!(
        "{:02}{:02}{:04}-{:02}{:02}{:02}-{}-{CARRIER}-{}",
        at.day(),
        u8::from(at.month()),
        at.year(),
        at.hour(),
        at.minute(),
        at.second(),
        sanitize_segment(username),
        sanitize_segment(unit_id),
    )
}

/// The extension (with its dot) of the last path segment of `url`.
///
/// Query and fragment are ignored. Returns `None` if the URL cannot be
/// parsed or its path has no extension.
pub fn extension_from_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    Path::new(url.path())
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::datetime;

    #[rstest]
    #[case::umlauts("Jürgen Müller!", "jürgenmüller")]
    #[case::separators("__Max-Mustermann_", "max-mustermann")]
    #[case::unit_id(" 12AB/34 ", "12ab34")]
    #[case::empty("", PLACEHOLDER_SEGMENT)]
    #[case::punctuation("!?* ./", PLACEHOLDER_SEGMENT)]
    #[case::only_separators("-_-", PLACEHOLDER_SEGMENT)]
    fn sanitizes_segments(#[case] input: &str, #[case] expected: &str) {
        let sanitized = sanitize_segment(input);
        assert_eq!(sanitized, expected);
        assert!(
            sanitized
                .chars()
                .all(|ch| ch.is_alphanumeric() || ch == '-' || ch == '_')
        );
        assert_eq!(sanitized, sanitized.to_lowercase());
    }

    #[test]
    fn builds_file_stem() {
        let at = datetime!(2024-02-01 09:05:07 UTC);
        assert_eq!(
            label_file_stem(at, "Jürgen Müller!", "A1"),
            "01022024-090507-jürgenmüller-GLS-a1"
        );
        assert_eq!(label_file_stem(at, "", "***"), "01022024-090507-unbekannt-GLS-unbekannt");
    }

    #[rstest]
    #[case::pdf("https://cdn.example/l/label.pdf", Some(".pdf"))]
    #[case::query("https://cdn.example/l/label.pdf?token=a.b", Some(".pdf"))]
    #[case::last_suffix("https://cdn.example/l/label.tar.gz", Some(".gz"))]
    #[case::none("https://cdn.example/l/label", None)]
    #[case::trailing_dot("https://cdn.example/l/label.", None)]
    #[case::hidden("https://cdn.example/l/.label", None)]
    #[case::garbage("not a url", None)]
    fn derives_extension(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(extension_from_url(url).as_deref(), expected);
    }
}
