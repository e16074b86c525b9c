use std::{path::Path, str::FromStr};

use mime_guess::Mime;
use serde::{Deserialize, Serialize};

/// The whitelist of file kinds the relay accepts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Jpeg,
    Png,
    Gif,
    Pdf,
}

impl FileKind {
    pub fn from_mime(mime: &Mime) -> Option<Self> {
        use mime_guess::mime::*;

        match (mime.type_(), mime.subtype()) {
            (IMAGE, JPEG) => Some(FileKind::Jpeg),
            (IMAGE, PNG) => Some(FileKind::Png),
            (IMAGE, GIF) => Some(FileKind::Gif),
            (APPLICATION, PDF) => Some(FileKind::Pdf),
            _ => None,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        mime_guess::from_path(path)
            .first()
            .and_then(|mime| Self::from_mime(&mime))
    }

    /// Accepts a file only if its extension and its declared content type
    /// both map into the whitelist. The two are checked independently and
    /// do not have to agree; the extension wins for the detected kind.
    pub fn detect(file_name: &str, content_type: &str) -> Option<Self> {
        let declared = Mime::from_str(content_type)
            .ok()
            .and_then(|mime| Self::from_mime(&mime));
        match (Self::from_path(file_name), declared) {
            (Some(kind), Some(_)) => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_whitelisted_kinds() {
        assert_eq!(FileKind::detect("scan.pdf", "application/pdf"), Some(FileKind::Pdf));
        assert_eq!(FileKind::detect("photo.jpg", "image/jpeg"), Some(FileKind::Jpeg));
        assert_eq!(FileKind::detect("photo.jpeg", "image/jpeg"), Some(FileKind::Jpeg));
        assert_eq!(FileKind::detect("pic.png", "image/png"), Some(FileKind::Png));
        assert_eq!(FileKind::detect("anim.gif", "image/gif"), Some(FileKind::Gif));
    }

    #[test]
    fn rejects_non_whitelisted() {
        assert_eq!(FileKind::detect("notes.txt", "text/plain"), None);
        assert_eq!(FileKind::detect("movie.mp4", "video/mp4"), None);
        // extension ok but declared type outside the whitelist
        assert_eq!(FileKind::detect("scan.pdf", "text/plain"), None);
        // declared type ok but extension outside the whitelist
        assert_eq!(FileKind::detect("scan.docx", "application/pdf"), None);
        assert_eq!(FileKind::detect("noext", "application/pdf"), None);
    }

    #[test]
    fn extension_wins_on_mismatch() {
        // both sides are whitelisted, even though they disagree
        assert_eq!(FileKind::detect("pic.png", "application/pdf"), Some(FileKind::Png));
    }
}
