//! Product link extraction from the fetched page.
//!
//! Finds the page title and every anchor carrying the configured class,
//! resolves root-relative links against the page URL, and keeps only the
//! complete records.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use url::Url;

/// A product link that made it into the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Visible anchor text, trimmed. Never empty.
    pub name: String,
    /// Absolute link.
    pub url: String,
}

/// An anchor as found in the page, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLink {
    pub name: String,
    /// `href` after resolution; `None` if the anchor has no `href`.
    pub url: Option<String>,
}

impl ProductLink {
    /// Convert into an output record if the link is complete
    ///
    /// A link is kept only when its name is non-empty and its URL exists and
    /// contains `http`.
    pub fn into_record(self) -> Option<ProductRecord> {
        let url = self.url?;
        if self.name.is_empty() || !url.contains("http") {
            return None;
        }
        Some(ProductRecord {
            name: self.name,
            url,
        })
    }
}

/// What was found in one page.
#[derive(Debug, Clone, Default)]
pub struct PageExtract {
    /// Trimmed `<title>` text, `None` if the page has no `<title>`.
    pub title: Option<String>,
    /// Every matching anchor in document order.
    pub links: Vec<ProductLink>,
}

/// Parse `html` and collect the title and the anchors with `link_class`.
///
/// Root-relative `href`s (starting with `/`) are resolved against `base`;
/// any other `href` is kept as written.
pub fn extract_page(html: &str, link_class: &str, base: &Url) -> PageExtract {
    let document = Html::parse_document(html);

    let title = select_first(&document, "title").map(|el| stripped_text(&el));

    let links = match Selector::parse("a") {
        Ok(selector) => document
            .select(&selector)
            .filter(|a| a.value().classes().any(|c| c == link_class))
            .map(|a| ProductLink {
                name: stripped_text(&a),
                url: a.value().attr("href").map(|href| resolve_href(base, href)),
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    PageExtract { title, links }
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

/// Text of an element with every text node trimmed and the non-empty
/// pieces joined without a separator.
fn stripped_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Resolve a root-relative `href` against the page URL.
///
/// Only `href`s starting with `/` are touched. If joining fails the raw
/// value is returned and the retention filter decides what happens to it.
pub fn resolve_href(base: &Url, href: &str) -> String {
    if !href.starts_with('/') {
        return href.to_string();
    }
    match base.join(href) {
        Ok(joined) => joined.to_string(),
        Err(e) => {
            tracing::debug!(href, error = %e, "could not resolve link");
            href.to_string()
        }
    }
}
