use crate::error::VerifyError;
use crate::expectations::Expectations;
use crate::seed::{default_seed, SizeLabel};
use anyhow::Result;
use std::fs;

#[test]
fn test_defaults_describe_the_shipped_page() {
    let expected = Expectations::default();
    assert_eq!(expected.table_id, "sizeTable");
    assert_eq!(expected.headers, vec!["Size", "LP", "L.Paha", "Hip", "PC", "FR"]);
    assert_eq!(expected.units, vec!["cm", "in"]);
    assert_eq!(expected.guide_count, 5);
    assert_eq!(expected.library, "html2canvas");

    let sizes: Vec<SizeLabel> = expected.seed.iter().map(|r| r.size).collect();
    assert_eq!(sizes, SizeLabel::ALL.to_vec());

    let m = expected.seed.iter().find(|r| r.size == SizeLabel::M).unwrap();
    let fields: [(&str, u32); 5] = [("lp", 76), ("lph", 59), ("hip", 86), ("pc", 100), ("fr", 32)];
    assert_eq!(m.fields(), fields);
}

#[test]
fn test_partial_override_keeps_defaults() {
    let expected = Expectations::from_json(r#"{ "guide_count": 6, "units": ["cm"] }"#).unwrap();
    assert_eq!(expected.guide_count, 6);
    assert_eq!(expected.units, vec!["cm"]);
    assert_eq!(expected.table_id, "sizeTable");
    assert_eq!(expected.seed, default_seed());
}

#[test]
fn test_seed_override() {
    let expected = Expectations::from_json(
        r#"{ "seed": [ { "size": "M", "lp": 1, "lph": 2, "hip": 3, "pc": 4, "fr": 5 } ] }"#,
    )
    .unwrap();
    assert_eq!(expected.seed.len(), 1);
    assert_eq!(expected.seed[0].size, SizeLabel::M);
    assert_eq!(expected.seed[0].fr, 5);
}

#[test]
fn test_duplicate_size_is_rejected() {
    let result = Expectations::from_json(
        r#"{ "seed": [
            { "size": "S", "lp": 1, "lph": 2, "hip": 3, "pc": 4, "fr": 5 },
            { "size": "S", "lp": 1, "lph": 2, "hip": 3, "pc": 4, "fr": 5 }
        ] }"#,
    );
    match result {
        Err(VerifyError::InconsistentExpectations(message)) => {
            assert!(message.contains("size S"), "unexpected message: {}", message)
        }
        other => panic!("expected inconsistent expectations, got {:?}", other),
    }
}

#[test]
fn test_duplicate_unit_is_rejected() {
    let result = Expectations::from_json(r#"{ "units": ["cm", "in", "cm"] }"#);
    assert!(matches!(
        result,
        Err(VerifyError::InconsistentExpectations(_))
    ));
}

#[test]
fn test_unknown_size_label_is_rejected() {
    let result = Expectations::from_json(
        r#"{ "seed": [ { "size": "XXXL", "lp": 1, "lph": 2, "hip": 3, "pc": 4, "fr": 5 } ] }"#,
    );
    assert!(matches!(result, Err(VerifyError::Json(_))));
}

#[test]
fn test_negative_measurement_is_rejected() {
    let result = Expectations::from_json(
        r#"{ "seed": [ { "size": "S", "lp": -1, "lph": 2, "hip": 3, "pc": 4, "fr": 5 } ] }"#,
    );
    assert!(matches!(result, Err(VerifyError::Json(_))));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("expectations.json");
    fs::write(&path, r#"{ "library": "dom-to-image" }"#)?;

    let expected = Expectations::load(&path)?;
    assert_eq!(expected.library, "dom-to-image");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Expectations::load(std::path::Path::new("does/not/exist.json"));
    assert!(matches!(result, Err(VerifyError::Io { .. })));
}

#[test]
fn test_size_label_parsing() {
    assert_eq!("XXL".parse::<SizeLabel>(), Ok(SizeLabel::XXL));
    assert_eq!(SizeLabel::XS.to_string(), "XS");
    assert!("xl".parse::<SizeLabel>().is_err());
}
