//! Image-type sniffing
//!
//! Detection runs a fixed chain of strategies: the file header's magic bytes
//! first, then the file extension. [`ImageType::Unknown`] is only reported once
//! every strategy has come up empty.

use crate::filesystem::file_extension;
use crate::map_read_error;
use crate::utils::validation::ensure_exists;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const HEADER_LEN: u64 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Webp,
    Tiff,
    Ico,
    Avif,
    Heic,
    Svg,
    Unknown,
}

impl ImageType {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
            ImageType::Gif => "image/gif",
            ImageType::Bmp => "image/bmp",
            ImageType::Webp => "image/webp",
            ImageType::Tiff => "image/tiff",
            ImageType::Ico => "image/vnd.microsoft.icon",
            ImageType::Avif => "image/avif",
            ImageType::Heic => "image/heic",
            ImageType::Svg => "image/svg+xml",
            ImageType::Unknown => "application/octet-stream",
        }
    }

    /// Canonical file extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpg",
            ImageType::Png => "png",
            ImageType::Gif => "gif",
            ImageType::Bmp => "bmp",
            ImageType::Webp => "webp",
            ImageType::Tiff => "tiff",
            ImageType::Ico => "ico",
            ImageType::Avif => "avif",
            ImageType::Heic => "heic",
            ImageType::Svg => "svg",
            ImageType::Unknown => "bin",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        let image_type = match extension.trim_start_matches('.').to_lowercase().as_str() {
            "jpg" | "jpeg" | "jpe" | "jfif" => ImageType::Jpeg,
            "png" => ImageType::Png,
            "gif" => ImageType::Gif,
            "bmp" | "dib" => ImageType::Bmp,
            "webp" => ImageType::Webp,
            "tif" | "tiff" => ImageType::Tiff,
            "ico" => ImageType::Ico,
            "avif" => ImageType::Avif,
            "heic" | "heif" => ImageType::Heic,
            "svg" | "svgz" => ImageType::Svg,
            _ => return None,
        };
        Some(image_type)
    }

    pub fn is_known(self) -> bool {
        self != ImageType::Unknown
    }
}

/// One way of recognising an image type
trait DetectionStrategy {
    fn name(&self) -> &'static str;
    fn detect(&self, path: &Path) -> crate::Result<Option<ImageType>>;
}

struct SignatureStrategy;

impl DetectionStrategy for SignatureStrategy {
    fn name(&self) -> &'static str {
        "signature"
    }

    fn detect(&self, path: &Path) -> crate::Result<Option<ImageType>> {
        let file = map_read_error!(File::open(path), path)?;
        let mut header = Vec::new();
        map_read_error!(file.take(HEADER_LEN).read_to_end(&mut header), path)?;
        Ok(Some(sniff_bytes(&header)).filter(|t| t.is_known()))
    }
}

struct ExtensionStrategy;

impl DetectionStrategy for ExtensionStrategy {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn detect(&self, path: &Path) -> crate::Result<Option<ImageType>> {
        Ok(file_extension(path).and_then(|ext| ImageType::from_extension(&ext)))
    }
}

const STRATEGIES: [&dyn DetectionStrategy; 2] = [&SignatureStrategy, &ExtensionStrategy];

/// Determine the image type of the file at `path`.
///
/// A failing strategy is logged and the next one is tried.
///
/// # Errors
/// Returns `ArgumentError` when `path` does not exist.
pub fn detect_image_type(path: &Path) -> crate::Result<ImageType> {
    ensure_exists(path)?;

    for strategy in STRATEGIES {
        match strategy.detect(path) {
            Ok(Some(image_type)) => {
                log::debug!(
                    "{} detected as {:?} by {}",
                    path.display(),
                    image_type,
                    strategy.name()
                );
                return Ok(image_type);
            }
            Ok(None) => {}
            Err(error) => {
                log::warn!("{} detection failed for {}: {}", strategy.name(), path.display(), error);
            }
        }
    }
    Ok(ImageType::Unknown)
}

pub fn is_image(path: &Path) -> crate::Result<bool> {
    Ok(detect_image_type(path)?.is_known())
}

/// Recognise an image type from the leading bytes of its content
///
/// # Examples
/// ```
/// use toolbelt::image::{sniff_bytes, ImageType};
///
/// assert_eq!(sniff_bytes(b"GIF89a\x01\x00"), ImageType::Gif);
/// assert_eq!(sniff_bytes(b"plain text"), ImageType::Unknown);
/// ```
pub fn sniff_bytes(header: &[u8]) -> ImageType {
    match header {
        [0xFF, 0xD8, 0xFF, ..] => ImageType::Jpeg,
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => ImageType::Png,
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => ImageType::Gif,
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => ImageType::Webp,
        [b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => ImageType::Tiff,
        [0x00, 0x00, 0x01, 0x00, ..] => ImageType::Ico,
        [_, _, _, _, b'f', b't', b'y', b'p', brand @ ..] => match brand.get(..4) {
            Some(b"avif" | b"avis") => ImageType::Avif,
            Some(b"heic" | b"heix" | b"hevc" | b"heim" | b"heis") => ImageType::Heic,
            _ => ImageType::Unknown,
        },
        [b'B', b'M', ..] => ImageType::Bmp,
        _ if looks_like_svg(header) => ImageType::Svg,
        _ => ImageType::Unknown,
    }
}

fn looks_like_svg(header: &[u8]) -> bool {
    let text = String::from_utf8_lossy(header);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}
