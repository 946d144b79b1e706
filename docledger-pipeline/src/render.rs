//! Content-type classification for unsealed documents.
//!
//! The registry's recorded MIME type is authoritative. Sniffing from
//! magic bytes is a best-effort fallback used only when the recorded
//! type is absent or the generic `application/octet-stream`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// The MIME type that carries no information.
pub const GENERIC_MIME: &str = "application/octet-stream";

/// Coarse content kind inferred from a fixed signature table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Pdf,
    Png,
    Jpeg,
    Binary,
}

impl ContentKind {
    /// Classifies by magic-byte prefix: `%PDF`, the PNG signature, or
    /// the JPEG SOI marker. Anything else is opaque binary.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&[0x25, 0x50, 0x44, 0x46]) {
            Self::Pdf
        } else if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            Self::Png
        } else if bytes.starts_with(&[0xFF, 0xD8]) {
            Self::Jpeg
        } else {
            Self::Binary
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Binary => GENERIC_MIME,
        }
    }
}

/// How a viewer should present unsealed content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    InlineImage,
    EmbeddedDocument,
    Download,
}

/// Picks the effective MIME type: the explicit one when it says
/// something, the sniffed one when it does not.
pub fn resolve_mime(explicit: Option<&str>, bytes: &[u8]) -> String {
    match explicit {
        Some(mime) if !mime.is_empty() && mime != GENERIC_MIME => mime.to_string(),
        _ => ContentKind::sniff(bytes).mime().to_string(),
    }
}

/// Maps a MIME type onto a presentation decision.
pub fn disposition_for(mime: &str) -> Disposition {
    if mime.starts_with("image/") {
        Disposition::InlineImage
    } else if mime == "application/pdf" {
        Disposition::EmbeddedDocument
    } else {
        Disposition::Download
    }
}

/// Renders bytes as a `data:` URL for inline display.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
