//! Candidate file predicates
//!
//! Pure name-based rules deciding which directory entries are checked.
//! Nothing here touches the filesystem.

/// Extensions recognized when no allow-list is configured
pub const DEFAULT_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".bmp", ".tiff", ".webp"];

/// Operating-system metadata files that are silently ignored
pub const SYSTEM_FILES: [&str; 1] = ["Thumbs.db"];

/// Returns true for dotfiles and known OS metadata files
pub fn is_hidden_or_system(file_name: &str) -> bool {
    file_name.starts_with('.') || SYSTEM_FILES.contains(&file_name)
}

/// Case-insensitive suffix match of `file_name` against normalized extensions
pub fn has_supported_extension<S: AsRef<str>>(file_name: &str, extensions: &[S]) -> bool {
    let lowered = file_name.to_lowercase();
    extensions.iter().any(|ext| lowered.ends_with(ext.as_ref()))
}

/// Normalizes a user-supplied extension to lowercase with one leading dot.
///
/// Returns `None` for an empty or dot-only input.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

/// Renders an allow-list for messages, e.g. `.jpg, .png`
pub fn describe_extensions<S: AsRef<str>>(extensions: &[S]) -> String {
    extensions
        .iter()
        .map(|e| e.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_and_system_files() {
        assert!(is_hidden_or_system(".DS_Store"));
        assert!(is_hidden_or_system("._photo.jpg"));
        assert!(is_hidden_or_system("Thumbs.db"));
        assert!(!is_hidden_or_system("thumbs.db"));
        assert!(!is_hidden_or_system("photo.jpg"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert!(has_supported_extension("IMG_001.JPG", &DEFAULT_EXTENSIONS));
        assert!(has_supported_extension("scan.TiFF", &DEFAULT_EXTENSIONS));
        assert!(!has_supported_extension("notes.txt", &DEFAULT_EXTENSIONS));
        assert!(!has_supported_extension("jpg", &DEFAULT_EXTENSIONS));
        assert!(!has_supported_extension("photo.gif", &DEFAULT_EXTENSIONS));
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("JPG").as_deref(), Some(".jpg"));
        assert_eq!(normalize_extension(".Png").as_deref(), Some(".png"));
        assert_eq!(normalize_extension(" tif ").as_deref(), Some(".tif"));
        assert_eq!(normalize_extension("."), None);
        assert_eq!(normalize_extension(""), None);
    }

    #[test]
    fn test_describe_extensions() {
        assert_eq!(
            describe_extensions(&DEFAULT_EXTENSIONS),
            ".jpg, .jpeg, .png, .bmp, .tiff, .webp"
        );
    }
}
