//! HTML Text Extractor - TextExtractor over the `scraper` crate.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;
use url::Url;

use crate::domain::content::Sections;
use crate::ports::{ExtractedPage, TextExtractor};

static LINK_SELECTOR: Lazy<Option<Selector>> = Lazy::new(|| Selector::parse("a[href]").ok());
static HEADING_SELECTOR: Lazy<Option<Selector>> =
    Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").ok());

const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript"];
const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Heading words that mark a section worth keeping.
const SECTION_KEYWORDS: &[&str] = &["service", "product", "solution", "about"];

/// Extracts visible text, same-origin links and keyword sections from HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTextExtractor;

impl HtmlTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn visible_text(document: &Html) -> String {
        let pieces: Vec<&str> = document
            .root_element()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) => {
                    let hidden = node.ancestors().any(|ancestor| {
                        ancestor
                            .value()
                            .as_element()
                            .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
                    });
                    (!hidden).then_some(&**text)
                }
                _ => None,
            })
            .collect();

        collapse_whitespace(&pieces.join(" "))
    }

    fn same_origin_links(document: &Html, base_url: &str) -> Vec<String> {
        let (Some(selector), Ok(base)) = (LINK_SELECTOR.as_ref(), Url::parse(base_url)) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut links = Vec::new();
        for anchor in document.select(selector) {
            let Some(href) = anchor.value().attr("href").map(str::trim) else {
                continue;
            };
            if let Some(link) = resolve_link(&base, base_url, href) {
                if seen.insert(link.clone()) {
                    links.push(link);
                }
            }
        }
        links
    }

    fn keyword_sections(document: &Html) -> Sections {
        let mut sections = Sections::new();
        let Some(selector) = HEADING_SELECTOR.as_ref() else {
            return sections;
        };

        for heading in document.select(selector) {
            let title = heading.text().collect::<String>().trim().to_string();
            let lowered = title.to_lowercase();
            if !SECTION_KEYWORDS.iter().any(|k| lowered.contains(k)) {
                continue;
            }

            let mut body = String::new();
            for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
                if HEADINGS.contains(&sibling.value().name()) {
                    break;
                }
                body.push_str(&sibling.text().collect::<String>());
                body.push(' ');
            }

            sections.insert(title, body.trim().to_string());
        }
        sections
    }
}

impl TextExtractor for HtmlTextExtractor {
    fn extract(&self, markup: &str, base_url: &str) -> ExtractedPage {
        let document = Html::parse_document(markup);
        ExtractedPage {
            text: Self::visible_text(&document),
            links: Self::same_origin_links(&document, base_url),
            sections: Self::keyword_sections(&document),
        }
    }
}

/// Absolute same-origin URL for `href` with the fragment dropped.
///
/// Only root-relative hrefs and hrefs starting with the base URL qualify.
/// The base page itself is never returned.
fn resolve_link(base: &Url, base_url: &str, href: &str) -> Option<String> {
    let mut url = if href.starts_with('/') {
        base.join(href).ok()?
    } else if href.starts_with(base_url) {
        Url::parse(href).ok()?
    } else {
        return None;
    };

    if url.origin() != base.origin() {
        return None;
    }

    url.set_fragment(None);
    if url.as_str().trim_end_matches('/') == base.as_str().trim_end_matches('/') {
        return None;
    }
    Some(url.to_string())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
