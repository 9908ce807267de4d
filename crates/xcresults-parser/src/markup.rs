//! HTML to page text
//!
//! Raw results pages wrap Hy-Tek style preformatted text in a `<pre>`. When a
//! page has no `<pre>`, the body is rendered to text with one line per block
//! element and table row, cells separated by two spaces, which keeps the
//! column-oriented row patterns working.

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector must compile"));
static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("static selector must compile"));
static PRE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("pre").expect("static selector must compile"));
static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("static selector must compile"));
static WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));

const SKIPPED: &[&str] = &["script", "style", "noscript", "template", "head"];

const BLOCKS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p",
    "section", "table", "tbody", "thead", "tfoot", "tr", "ul",
];

/// Page-level pieces the parser works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageMarkup {
    /// `<title>` text, whitespace collapsed
    pub title: Option<String>,
    /// First `<h1>` text, whitespace collapsed
    pub heading: Option<String>,
    /// Line-oriented page text
    pub text: String,
}

impl PageMarkup {
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);

        let title = first_text(&document, &TITLE);
        let heading = first_text(&document, &HEADING);

        let pre_blocks: Vec<String> = document
            .select(&PRE)
            .map(|pre| pre.text().collect::<String>())
            .collect();

        let text = if pre_blocks.is_empty() {
            let mut out = String::new();
            match document.select(&BODY).next() {
                Some(body) => render_blocks(body, &mut out),
                None => render_blocks(document.root_element(), &mut out),
            }
            out
        } else {
            pre_blocks.join("\n")
        };

        Self {
            title,
            heading,
            text: clean_text(&text),
        }
    }
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el| collapse_ws(&el.text().collect::<String>()))
        .filter(|s| !s.is_empty())
}

fn collapse_ws(s: &str) -> String {
    WS.replace_all(s, " ").trim().to_string()
}

/// Unify line endings and non-breaking spaces
fn clean_text(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n").replace('\u{a0}', " ")
}

fn render_blocks(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let collapsed = WS.replace_all(text, " ");
                let at_line_start = out.is_empty() || out.ends_with('\n') || out.ends_with(' ');
                if collapsed == " " && at_line_start {
                    continue;
                }
                out.push_str(&collapsed);
            }
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED.contains(&name) {
                    continue;
                }
                if name == "br" {
                    end_line(out);
                    continue;
                }
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = BLOCKS.contains(&name);
                if block {
                    end_line(out);
                }
                render_blocks(child_el, out);
                if name == "td" || name == "th" {
                    out.push_str("  ");
                }
                if block {
                    end_line(out);
                }
            }
            _ => {}
        }
    }
}

fn end_line(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
