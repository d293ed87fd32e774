//! HTML extraction for the catalog index and department pages.

use crate::domain::model::Department;
use crate::utils::error::Result;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("link selector is valid"));
static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("paragraph selector is valid"));
static BOLD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("b").expect("bold selector is valid"));

/// Whether an index link points at a department page, e.g. `anth.html`.
pub fn is_department_link(href: &str) -> bool {
    href.ends_with(".html") && !href.contains("glossary") && !href.contains('/') && href.len() > 5
}

/// Treat the base URL as a directory so relative pages resolve beneath it.
pub fn directory_url(base_url: &str) -> Result<Url> {
    if base_url.ends_with('/') {
        Ok(Url::parse(base_url)?)
    } else {
        Ok(Url::parse(&format!("{}/", base_url))?)
    }
}

/// Collect department pages linked from the catalog index, in page order.
///
/// Page URLs are the directory base with the href appended, never a relative
/// resolution, so scheme-like hrefs stay under the catalog directory. A link
/// whose URL still cannot be built is logged and skipped.
///
/// A page linked more than once is deliberately listed only once, even though a
/// plain link walk would visit it again, so its courses are inserted a single time.
pub fn discover_departments(index_html: &str, base: &Url) -> Vec<Department> {
    let document = Html::parse_document(index_html);
    let mut seen = HashSet::new();
    let mut departments = Vec::new();

    for link in document.select(&LINK_SELECTOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !is_department_link(href) || !seen.insert(href.to_string()) {
            continue;
        }

        let abbrev = href.trim_end_matches(".html").to_string();
        let name = link.text().collect::<String>().trim().to_string();
        let url = match Url::parse(&format!("{}{}", base, href)) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping department link {}: {}", href, e);
                continue;
            }
        };
        tracing::trace!("Department link {} -> {}", abbrev, url);

        departments.push(Department { abbrev, name, url });
    }

    departments
}

/// Keep only the departments named in `filter` (case-insensitive); an empty filter keeps all.
pub fn filter_departments(departments: Vec<Department>, filter: &[String]) -> Vec<Department> {
    if filter.is_empty() {
        return departments;
    }
    let wanted: HashSet<String> = filter.iter().map(|d| d.trim().to_lowercase()).collect();
    departments
        .into_iter()
        .filter(|d| wanted.contains(&d.abbrev.to_lowercase()))
        .collect()
}

fn first_text_line(paragraph: ElementRef<'_>) -> Option<String> {
    let text = paragraph.text().collect::<String>();
    text.split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Header line of every course entry: each `<p>` holding a `<b>` contributes its first
/// non-blank text line.
pub fn extract_course_headers(department_html: &str) -> Vec<String> {
    let document = Html::parse_document(department_html);

    document
        .select(&PARAGRAPH_SELECTOR)
        .filter(|p| p.select(&BOLD_SELECTOR).next().is_some())
        .filter_map(first_text_line)
        .collect()
}
