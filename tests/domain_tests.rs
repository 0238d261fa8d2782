//! Domain layer tests
//!
//! Entities, file filter predicates and pixel-buffer invariants.

use proptest::prelude::*;
use rstest::*;
use vision_lint::domain::entities::{PixelBuffer, Samples};
use vision_lint::domain::services::file_filter::{
    DEFAULT_EXTENSIONS, has_supported_extension, is_hidden_or_system, normalize_extension,
};
use vision_lint::{Finding, IssueType, Severity};

// ============================================================================
// IssueType Tests
// ============================================================================

#[rstest]
#[case(IssueType::PathError, "Path Error", Severity::Critical)]
#[case(IssueType::NoImagesFound, "No Images Found", Severity::Critical)]
#[case(IssueType::EmptyFile, "Empty File", Severity::Critical)]
#[case(
    IssueType::CorruptedImage("imagesize".into()),
    "Corrupted Image (imagesize)",
    Severity::Critical
)]
#[case(
    IssueType::CorruptedImage("image".into()),
    "Corrupted Image (image)",
    Severity::Critical
)]
#[case(IssueType::ZeroPixelArea, "Zero Pixel Area", Severity::Critical)]
#[case(IssueType::GrayscaleAsRgb, "Grayscale as RGB", Severity::Warning)]
#[case(IssueType::UnknownError, "Unknown Error", Severity::Critical)]
fn test_issue_type_label_and_severity(
    #[case] issue: IssueType,
    #[case] label: &str,
    #[case] severity: Severity,
) {
    assert_eq!(issue.to_string(), label);
    assert_eq!(issue.severity(), severity);
}

#[test]
fn test_finding_severity_follows_issue_type() {
    let warning = Finding::new("a.png", IssueType::GrayscaleAsRgb, "R=G=B");
    let critical = Finding::new("b.png", IssueType::ZeroPixelArea, "(0, 4, 3)");

    assert_eq!(warning.severity(), Severity::Warning);
    assert!(!warning.is_critical());
    assert!(critical.is_critical());
}

#[test]
fn test_finding_serializes_flat_record() {
    let finding = Finding::new("data/x.jpg", IssueType::EmptyFile, "File size is 0 bytes");
    let json = serde_json::to_value(&finding).unwrap();

    assert_eq!(json["file_path"], "data/x.jpg");
    assert_eq!(json["checker_name"], "IntegrityChecker");
    assert_eq!(json["issue_type"], "Empty File");
    assert_eq!(json["severity"], "Critical");
    assert_eq!(json["message"], "File size is 0 bytes");
}

// ============================================================================
// PixelBuffer Tests
// ============================================================================

#[rstest]
#[case(0, 10, 3)]
#[case(10, 0, 1)]
#[case(0, 0, 4)]
fn test_zero_area_buffers(#[case] width: u32, #[case] height: u32, #[case] channels: u8) {
    let buffer = PixelBuffer::new(width, height, channels, Samples::U8(Vec::new()));
    assert!(buffer.has_zero_area());
}

#[test]
fn test_identical_planes_need_a_color_layout() {
    let rgba = PixelBuffer::new(1, 2, 4, Samples::U8(vec![5, 5, 5, 255, 9, 9, 9, 128]));
    let luma_alpha = PixelBuffer::new(2, 1, 2, Samples::U8(vec![7, 7, 7, 7]));
    let luma = PixelBuffer::new(2, 1, 1, Samples::U8(vec![1, 2]));

    assert!(rgba.has_identical_color_planes());
    assert!(!luma_alpha.has_identical_color_planes());
    assert!(!luma.has_identical_color_planes());
}

#[test]
fn test_high_depth_gray_planes() {
    let buffer = PixelBuffer::new(2, 1, 3, Samples::U16(vec![700, 700, 700, 3, 3, 3]));
    assert!(buffer.has_identical_color_planes());

    let color = PixelBuffer::new(1, 1, 3, Samples::F32(vec![0.5, 0.5, 0.25]));
    assert!(!color.has_identical_color_planes());
}

// ============================================================================
// File filter properties
// ============================================================================

proptest! {
    #[test]
    fn prop_dot_prefix_is_always_hidden(name in "[a-zA-Z0-9_.-]{0,24}") {
        let hidden = format!(".{name}");
        prop_assert!(is_hidden_or_system(&hidden));
    }

    #[test]
    fn prop_plain_names_are_not_hidden(name in "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,24}") {
        prop_assume!(name != "Thumbs.db");
        prop_assert!(!is_hidden_or_system(&name));
    }

    #[test]
    fn prop_extension_match_ignores_case(stem in "[a-zA-Z0-9_]{1,16}", idx in 0usize..6) {
        let ext = DEFAULT_EXTENSIONS[idx];
        let lower = format!("{stem}{ext}");
        let upper = lower.to_uppercase();

        prop_assert!(has_supported_extension(&lower, &DEFAULT_EXTENSIONS));
        prop_assert!(has_supported_extension(&upper, &DEFAULT_EXTENSIONS));
    }

    #[test]
    fn prop_foreign_suffix_is_rejected(stem in "[a-z0-9_]{1,16}", ext in "(txt|gif|json|db|jpgx|pn)") {
        let name = format!("{stem}.{ext}");
        prop_assert!(!has_supported_extension(&name, &DEFAULT_EXTENSIONS));
    }

    #[test]
    fn prop_normalized_extension_has_one_leading_dot(raw in "\\.?[a-zA-Z]{1,8}") {
        let normalized = normalize_extension(&raw).unwrap();
        prop_assert!(normalized.starts_with('.'));
        prop_assert!(!normalized[1..].starts_with('.'));
        prop_assert_eq!(normalized.clone(), normalized.to_lowercase());
    }
}
