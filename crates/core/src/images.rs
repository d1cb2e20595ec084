//! Naming of stored series images.
//!
//! Images are stored content-addressed: the file name is the SHA-256 of the
//! downloaded bytes followed by the extension of the source URL, so two series
//! pointing at the same picture share one file on disk.

use crate::error::CoreError;
use crate::hashing::sha256_hex;

/// Longest extension (without the dot) carried over from the source URL.
const MAX_EXTENSION_LEN: usize = 5;

/// Extension (including the leading dot) of the last path segment of `url`.
///
/// Query strings and fragments are ignored. Returns an empty string when the
/// segment has no usable extension.
pub fn url_extension(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();

    match segment.rfind('.') {
        Some(dot) if dot > 0 => {
            let ext = &segment[dot + 1..];
            if !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
            {
                &segment[dot..]
            } else {
                ""
            }
        }
        _ => "",
    }
}

/// File name under which the image downloaded from `url` is stored.
pub fn image_file_name(url: &str, content: &[u8]) -> String {
    format!("{}{}", sha256_hex(content), url_extension(url))
}

/// Reject stored names that could escape the image directory.
pub fn validate_file_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(CoreError::Internal(format!("invalid image file name '{name}'")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_of_plain_url() {
        assert_eq!(url_extension("http://photo/img.png"), ".png");
        assert_eq!(url_extension("https://cdn.example.com/a/b/poster.JPEG"), ".JPEG");
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(url_extension("http://photo/img.jpg?size=large#top"), ".jpg");
    }

    #[test]
    fn no_extension() {
        assert_eq!(url_extension("http://photo/img"), "");
        assert_eq!(url_extension("http://photo.example.com/"), "");
        assert_eq!(url_extension("http://photo/.hidden"), "");
        assert_eq!(url_extension("http://photo/img.verylongext"), "");
    }

    #[test]
    fn file_name_is_content_addressed() {
        let a = image_file_name("http://x/one.png", b"pixels");
        let b = image_file_name("http://y/two.png", b"pixels");
        assert_eq!(a, b);
        assert!(a.ends_with(".png"));
        assert_eq!(a.len(), 64 + 4);
        assert_ne!(a, image_file_name("http://x/one.png", b"other"));
    }

    #[test]
    fn traversal_names_are_rejected() {
        assert!(validate_file_name("abc.png").is_ok());
        assert!(validate_file_name("../etc/passwd").is_err());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("a\\b").is_err());
    }
}
