use super::fixtures;
use crate::error::VerifyError;
use crate::expectations::Expectations;
use crate::headers::extract_table_headers;
use crate::page::PageSummary;

#[test]
fn test_fixture_summary() {
    let html = fixtures::load_page_fixture();
    let summary = PageSummary::parse(&html, &Expectations::default()).unwrap();

    assert_eq!(summary.title.as_deref(), Some("Size Chart"));
    assert_eq!(summary.unit_toggles, vec!["cm", "in"]);
    assert_eq!(summary.guides, vec!["LP", "L.Paha", "Hip", "PC", "FR"]);
    assert_eq!(summary.script_sources.len(), 1);
    assert!(summary.script_sources[0].contains("html2canvas"));
}

// The DOM view and the streaming scan must agree on the fixture
#[test]
fn test_summary_agrees_with_streaming_headers() {
    let html = fixtures::load_page_fixture();
    let expected = Expectations::default();
    let summary = PageSummary::parse(&html, &expected).unwrap();

    assert_eq!(summary.headers, extract_table_headers(&html, &expected.table_id));
    assert_eq!(summary.headers, expected.headers);
}

#[test]
fn test_empty_page_summary() {
    let summary = PageSummary::parse("", &Expectations::default()).unwrap();
    assert_eq!(summary.title, None);
    assert!(summary.headers.is_empty());
    assert!(summary.unit_toggles.is_empty());
    assert!(summary.guides.is_empty());
}

#[test]
fn test_invalid_selector_from_expectations() {
    let expected = Expectations {
        toggle_class: "unit toggle[".to_string(),
        ..Expectations::default()
    };
    let result = PageSummary::parse("<p></p>", &expected);
    assert!(matches!(result, Err(VerifyError::Selector { .. })));
}
