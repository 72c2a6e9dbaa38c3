//! HTML export document and section table lookup.
//!
//! A data-request export is a flat HTML page: an `<h1>` per game title,
//! an `<h2>` per data section under it, and one `<table>` after each
//! section heading. Lookup walks headings and tables in document order.

use crate::error::{ExportError, Result};
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Identifies the table of one data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLocator {
    /// Text of the `<h1>`, case-insensitive. An exact match wins over a
    /// heading that merely contains the text.
    pub title: &'static str,
    /// Text of a following `<h2>`, matched the same way, if the section has one.
    pub subsection: Option<&'static str>,
}

impl SectionLocator {
    pub const fn new(title: &'static str, subsection: Option<&'static str>) -> Self {
        Self { title, subsection }
    }

    /// Human-readable heading path used in error messages.
    pub fn heading(&self) -> String {
        match self.subsection {
            Some(subsection) => format!("{} / {}", self.title, subsection),
            None => self.title.to_string(),
        }
    }
}

/// Trimmed cell text of one section table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A parsed export document.
pub struct ExportDocument {
    html: Html,
}

impl ExportDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExportError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let source = fs::read_to_string(path)?;
        debug!("Read {} bytes from {}", source.len(), path.display());
        Ok(Self::parse(&source))
    }

    /// Find the table belonging to `locator` and extract its cells.
    pub fn find_table(&self, locator: &SectionLocator) -> Result<RawTable> {
        let landmarks = selector("h1, h2, table")?;
        let elements: Vec<ElementRef> = self.html.select(&landmarks).collect();

        let title_at = find_heading(&elements, "h1", locator.title).ok_or_else(|| {
            ExportError::SectionNotFound {
                title: locator.title.to_string(),
            }
        })?;

        let mut heading_at = title_at;
        if let Some(subsection) = locator.subsection {
            let section_end = elements[title_at + 1..]
                .iter()
                .position(|el| tag(el) == "h1")
                .map_or(elements.len(), |offset| title_at + 1 + offset);
            let offset = find_heading(&elements[title_at + 1..section_end], "h2", subsection)
                .ok_or_else(|| ExportError::SubsectionNotFound {
                    title: locator.title.to_string(),
                    subsection: subsection.to_string(),
                })?;
            heading_at = title_at + 1 + offset;
        }

        // A section ends at the next heading of its own level or above.
        let table = elements[heading_at + 1..]
            .iter()
            .find(|el| tag(el) != "h2" || locator.subsection.is_some())
            .filter(|el| tag(el) == "table")
            .ok_or_else(|| ExportError::TableNotFound {
                heading: locator.heading(),
            })?;

        let raw = extract_table(table, locator)?;
        debug!(
            "Section '{}': {} header cells, {} data rows",
            locator.heading(),
            raw.header.len(),
            raw.row_count()
        );
        Ok(raw)
    }
}

/// Position of the first `level` heading whose text equals `text`, else of
/// the first one containing it. Both comparisons ignore case.
fn find_heading(elements: &[ElementRef], level: &str, text: &str) -> Option<usize> {
    let headings = || {
        elements
            .iter()
            .enumerate()
            .filter(move |(_, el)| tag(el) == level)
    };

    headings()
        .find(|(_, el)| element_text(el).eq_ignore_ascii_case(text.trim()))
        .or_else(|| headings().find(|(_, el)| contains_ignore_case(&element_text(el), text)))
        .map(|(index, _)| index)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ExportError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

fn tag<'a>(element: &'a ElementRef<'a>) -> &'a str {
    element.value().name()
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

/// Split a table into its header row and data rows.
fn extract_table(table: &ElementRef, locator: &SectionLocator) -> Result<RawTable> {
    let mut rows = direct_rows(table).into_iter();

    let header: Vec<String> = rows
        .next()
        .map(|tr| {
            direct_cells(&tr, &["th", "td"])
                .iter()
                .map(element_text)
                .collect()
        })
        .unwrap_or_default();

    if header.is_empty() {
        return Err(ExportError::MissingHeaderRow {
            heading: locator.heading(),
        });
    }

    let rows = rows
        .map(|tr| {
            direct_cells(&tr, &["td"])
                .iter()
                .map(element_text)
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect();

    Ok(RawTable { header, rows })
}

/// `<tr>` children of a table, including those wrapped in row groups,
/// but never rows of a nested table.
fn direct_rows<'a>(table: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    rows
}

fn direct_cells<'a>(row: &ElementRef<'a>, tags: &[&str]) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| tags.contains(&el.value().name()))
        .collect()
}
