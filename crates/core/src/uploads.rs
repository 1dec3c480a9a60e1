//! Naming rules for uploaded files.
//!
//! Uploaded files land in `{upload_root}/{category}/{timestamp}_{name}` and are
//! addressed publicly as `/uploads/{category}/{timestamp}_{name}`.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Extensions accepted by every upload endpoint (compared lowercase).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "mp4", "mov", "avi"];

/// Public URL prefix under which uploaded files are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Stem used when sanitization strips a filename down to nothing.
const FALLBACK_STEM: &str = "upload";

/// Layout of the collision-avoidance prefix (second resolution).
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

static UNSAFE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.\-]").expect("valid regex"));

/// Return the lowercase extension after the last `.`, if any.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    Some(ext.to_lowercase())
}

/// Validate that `file_name` carries one of [`ALLOWED_EXTENSIONS`].
///
/// Returns the lowercase extension on success.
pub fn validate_extension(file_name: &str) -> Result<String, CoreError> {
    match file_extension(file_name) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(CoreError::InvalidFileType(format!(
            "'{file_name}' is not an allowed file type. Allowed: {}",
            ALLOWED_EXTENSIONS.join(", ")
        ))),
    }
}

/// Reduce a client-supplied filename to a safe, flat ASCII name.
///
/// Accents are folded away (NFKD, then non-ASCII dropped), path separators
/// become spaces, whitespace runs collapse to `_`, anything outside
/// `[A-Za-z0-9_.-]` is dropped and leading/trailing `.`/`_` are trimmed. The
/// result may be empty.
pub fn sanitize_filename(file_name: &str) -> String {
    let folded: String = file_name.nfkd().filter(char::is_ascii).collect();
    let flattened = folded.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS_RE.replace_all(&joined, "");
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Validate an upload category used as a directory name.
///
/// Only ASCII alphanumerics, `-` and `_` are allowed.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    let valid = !category.is_empty()
        && category
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid upload category '{category}'"
        )))
    }
}

/// Build the on-disk name for an upload.
///
/// `ext` is the already-validated extension of the original name; it is
/// re-appended when sanitization dropped it.
pub fn stored_filename(
    prefix: Option<&str>,
    file_name: &str,
    ext: &str,
    now: Timestamp,
) -> String {
    let mut safe = sanitize_filename(file_name);
    let keeps_ext = safe.to_lowercase().ends_with(&format!(".{ext}"));
    if !keeps_ext {
        let stem = if safe.is_empty() { FALLBACK_STEM } else { safe.as_str() };
        safe = format!("{stem}.{ext}");
    }

    let stamp = now.format(TIMESTAMP_FORMAT);
    match prefix {
        Some(p) => format!("{p}_{stamp}_{safe}"),
        None => format!("{stamp}_{safe}"),
    }
}

/// Public URL of a stored upload.
pub fn upload_url(category: &str, stored_name: &str) -> String {
    format!("{UPLOAD_URL_PREFIX}/{category}/{stored_name}")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    fn fixed_time() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2025, 8, 10, 6, 5, 9).unwrap()
    }

    #[test]
    fn all_allowed_extensions_pass_in_any_case() {
        for ext in ALLOWED_EXTENSIONS {
            assert_eq!(validate_extension(&format!("a.{ext}")).unwrap(), *ext);
            let upper = format!("a.{}", ext.to_uppercase());
            assert_eq!(validate_extension(&upper).unwrap(), *ext);
        }
    }

    #[test]
    fn disallowed_extensions_are_rejected() {
        for name in ["notes.txt", "run.exe", "page.html", "archive.tar.gz", "noext", ""] {
            assert_matches!(validate_extension(name), Err(CoreError::InvalidFileType(_)));
        }
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(validate_extension("photo.txt.PNG").unwrap(), "png");
        assert!(validate_extension("photo.png.txt").is_err());
    }

    #[test]
    fn sanitize_strips_path_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename(r"C:\Users\me\pic.jpg"), "C_Users_me_pic.jpg");
    }

    #[test]
    fn sanitize_collapses_whitespace_and_drops_unsafe_chars() {
        assert_eq!(sanitize_filename("My  Photo (1).JPG"), "My_Photo_1.JPG");
        assert_eq!(sanitize_filename("  .hidden.gif  "), "hidden.gif");
    }

    #[test]
    fn sanitize_folds_accents_to_ascii() {
        assert_eq!(sanitize_filename("café.png"), "cafe.png");
        assert_eq!(sanitize_filename("Maratón Quibdó año.JPG"), "Maraton_Quibdo_ano.JPG");
        assert_eq!(sanitize_filename("日本.png"), "png");
    }

    #[test]
    fn stored_filename_prefixes_timestamp() {
        let name = stored_filename(None, "race day.jpg", "jpg", fixed_time());
        assert_eq!(name, "20250810_060509_race_day.jpg");
    }

    #[test]
    fn stored_filename_with_prefix() {
        let name = stored_filename(Some("hero"), "intro.mp4", "mp4", fixed_time());
        assert_eq!(name, "hero_20250810_060509_intro.mp4");
    }

    #[test]
    fn stored_filename_restores_lost_extension() {
        let name = stored_filename(None, "../.png", "png", fixed_time());
        assert_eq!(name, "20250810_060509_png.png");

        let name = stored_filename(None, "фото.mov", "mov", fixed_time());
        assert_eq!(name, "20250810_060509_mov.mov");
    }

    #[test]
    fn stored_filename_falls_back_when_name_is_empty() {
        let name = stored_filename(None, "√√√.gif", "gif", fixed_time());
        assert_eq!(name, "20250810_060509_gif.gif");

        let name = stored_filename(None, "", "gif", fixed_time());
        assert_eq!(name, "20250810_060509_upload.gif");
    }

    #[test]
    fn category_validation() {
        assert!(validate_category("events").is_ok());
        assert!(validate_category("press-kit_2025").is_ok());
        assert_matches!(validate_category(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_category(".."), Err(CoreError::Validation(_)));
        assert_matches!(validate_category("a/b"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn url_layout() {
        assert_eq!(
            upload_url("gallery", "20250810_060509_a.png"),
            "/uploads/gallery/20250810_060509_a.png"
        );
    }
}
