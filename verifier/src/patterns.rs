//! Regex probes over the raw page text.
//!
//! The seed records live inside an inline script and are never evaluated;
//! they are located as brace-bounded text blocks and probed field by field.
//! Attribute patterns only recognise double-quoted values.

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::seed::SizeLabel;

/// Finds the `{ ... }` block holding `size: "<label>"`.
///
/// Blocks are assumed to be flat: a nested `}` ends the match early.
pub fn find_record_block<'h>(html: &'h str, size: SizeLabel) -> Result<Option<&'h str>> {
    let pattern = format!(
        r#"\{{[^}}]*size:\s*"{}"[^}}]*\}}"#,
        regex::escape(size.as_str())
    );
    let re = Regex::new(&pattern)?;
    Ok(re.find(html).map(|m| m.as_str()))
}

/// Whether `block` declares `key: value`.
///
/// Word boundaries keep `lp` from matching inside `lph` and `76` from
/// matching the start of `760`.
pub fn field_matches(block: &str, key: &str, value: u32) -> Result<bool> {
    let pattern = format!(r"\b{}\s*:\s*{}\b", regex::escape(key), value);
    Ok(Regex::new(&pattern)?.is_match(block))
}

/// Pattern for a `<button>` carrying `class_name` in its class list.
fn toggle_prefix(class_name: &str) -> String {
    format!(
        r#"<button[^>]*class="[^"]*{}[^"]*""#,
        regex::escape(class_name)
    )
}

/// Whether a button with `class_name` also carries `data-unit="<unit>"`
/// after its class attribute.
pub fn has_unit_toggle(html: &str, class_name: &str, unit: &str) -> Result<bool> {
    let pattern = format!(
        r#"{}[^>]*data-unit="{}""#,
        toggle_prefix(class_name),
        regex::escape(unit)
    );
    Ok(Regex::new(&pattern)?.is_match(html))
}

pub fn count_unit_toggles(html: &str, class_name: &str) -> Result<usize> {
    count_matches(html, &toggle_prefix(class_name), false)
}

/// Counts `<article>` elements carrying `class_name`, ignoring ASCII case.
pub fn count_guide_items(html: &str, class_name: &str) -> Result<usize> {
    let pattern = format!(
        r#"<article[^>]*class="[^"]*{}[^"]*""#,
        regex::escape(class_name)
    );
    count_matches(html, &pattern, true)
}

/// Counts non-overlapping matches of `pattern`.
pub fn count_matches(html: &str, pattern: &str, case_insensitive: bool) -> Result<usize> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()?;
    Ok(re.find_iter(html).count())
}

pub fn contains_literal(html: &str, literal: &str) -> bool {
    html.contains(literal)
}
