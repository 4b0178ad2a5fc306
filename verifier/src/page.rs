//! DOM view of the page, used for `--inspect` output and as a second opinion
//! on what the streaming checks report.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VerifyError};
use crate::expectations::Expectations;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PageSummary {
    pub title: Option<String>,
    pub headers: Vec<String>,
    /// `data-unit` of each toggle button, in document order.
    pub unit_toggles: Vec<String>,
    /// Heading text of each guide article.
    pub guides: Vec<String>,
    pub script_sources: Vec<String>,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| VerifyError::Selector {
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

fn text_of(element: scraper::ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl PageSummary {
    pub fn parse(html: &str, expected: &Expectations) -> Result<Self> {
        let document = Html::parse_document(html);

        let title_selector = selector("title")?;
        let header_selector = selector(&format!("table#{} thead th", expected.table_id))?;
        let toggle_selector = selector(&format!("button.{}", expected.toggle_class))?;
        let guide_selector = selector(&format!("article.{}", expected.guide_class))?;
        let heading_selector = selector("h1, h2, h3, h4")?;
        let script_selector = selector("script[src]")?;

        let title = document
            .select(&title_selector)
            .next()
            .map(text_of)
            .filter(|t| !t.is_empty());

        let headers = document
            .select(&header_selector)
            .map(text_of)
            .filter(|t| !t.is_empty())
            .collect();

        let unit_toggles = document
            .select(&toggle_selector)
            .filter_map(|button| button.value().attr("data-unit"))
            .map(|unit| unit.to_string())
            .collect();

        let guides = document
            .select(&guide_selector)
            .map(|article| {
                article
                    .select(&heading_selector)
                    .next()
                    .map(text_of)
                    .unwrap_or_default()
            })
            .collect();

        let script_sources = document
            .select(&script_selector)
            .filter_map(|script| script.value().attr("src"))
            .map(|src| src.to_string())
            .collect();

        Ok(PageSummary {
            title,
            headers,
            unit_toggles,
            guides,
            script_sources,
        })
    }
}
