//! Server-side HTML for the landing page and the results page.

use std::fmt::Write;
use std::num::NonZeroU64;
use std::time::Duration;

use crate::data_models::DisplayResult;
use crate::pagination::PageWindow;

pub const DEFAULT_HITS: u64 = 10;

/// Everything the results page shows.
#[derive(Debug, Clone)]
pub struct ResultsPage {
    pub query: String,
    pub hits: NonZeroU64,
    pub start: u64,
    pub total: u64,
    pub response_time: Duration,
    pub window: PageWindow,
    pub results: Vec<DisplayResult>,
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link to the page with zero-based index `page`.
pub fn page_href(query: &str, page: u64, hits: NonZeroU64) -> String {
    format!(
        "/?query={}&start={}&hits={}",
        urlencoding::encode(query),
        page.saturating_mul(hits.get()),
        hits
    )
}

pub fn landing_page() -> String {
    let mut html = String::new();
    open_document(&mut html, "Search");
    search_form(&mut html, "", DEFAULT_HITS);
    close_document(&mut html);
    html
}

pub fn results_page(page: &ResultsPage) -> String {
    let mut html = String::new();
    open_document(&mut html, &format!("{} - Search", page.query));
    search_form(&mut html, &page.query, page.hits.get());

    let _ = writeln!(html, "<main>");
    let _ = writeln!(
        html,
        "<p class=\"stats\">{} results ({:.3} seconds)</p>",
        page.total,
        page.response_time.as_secs_f64()
    );

    if page.results.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"no-results\">No results for <strong>{}</strong>.</p>",
            escape_html(&page.query)
        );
    } else {
        let _ = writeln!(html, "<ol class=\"results\" start=\"{}\">", page.start + 1);
        for result in &page.results {
            let _ = writeln!(
                html,
                "<li class=\"result\"><a href=\"{}\">{}</a><cite>{}</cite><p>{}</p></li>",
                escape_html(&result.href),
                escape_html(&result.title),
                escape_html(&result.display_url),
                escape_html(&result.description)
            );
        }
        let _ = writeln!(html, "</ol>");
    }

    pagination_nav(&mut html, page);

    let _ = writeln!(
        html,
        "<p class=\"page-count\">Page {} of {}</p>",
        page.window.current_page + 1,
        page.window.total_pages()
    );
    let _ = writeln!(html, "</main>");
    close_document(&mut html);
    html
}

fn pagination_nav(html: &mut String, page: &ResultsPage) {
    let window = &page.window;
    let _ = writeln!(html, "<nav class=\"pagination\">");

    if window.has_previous() {
        let _ = writeln!(
            html,
            "<a class=\"previous\" href=\"{}\">Previous</a>",
            escape_html(&page_href(&page.query, window.current_page - 1, page.hits))
        );
    }

    for &number in &window.visible_pages {
        if number == window.current_page {
            let _ = writeln!(html, "<span class=\"current\">{}</span>", number + 1);
        } else {
            let _ = writeln!(
                html,
                "<a href=\"{}\">{}</a>",
                escape_html(&page_href(&page.query, number, page.hits)),
                number + 1
            );
        }
    }

    if window.has_next() {
        let _ = writeln!(
            html,
            "<a class=\"next\" href=\"{}\">Next</a>",
            escape_html(&page_href(&page.query, window.current_page + 1, page.hits))
        );
    }

    let _ = writeln!(html, "</nav>");
}

fn open_document(html: &mut String, title: &str) {
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"/static/style.css\">");
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
}

fn search_form(html: &mut String, query: &str, hits: u64) {
    let _ = writeln!(html, "<header>");
    let _ = writeln!(html, "<form action=\"/\" method=\"get\">");
    let _ = writeln!(
        html,
        "<input type=\"text\" name=\"query\" value=\"{}\" autofocus>",
        escape_html(query)
    );
    let _ = writeln!(html, "<input type=\"hidden\" name=\"hits\" value=\"{hits}\">");
    let _ = writeln!(html, "<button type=\"submit\">Search</button>");
    let _ = writeln!(html, "</form>");
    let _ = writeln!(html, "</header>");
}

fn close_document(html: &mut String) {
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}

#[test]
fn test_page_href_encodes_query() {
    let hits = NonZeroU64::new(20).unwrap();
    assert_eq!(
        page_href("rust & go", 3, hits),
        "/?query=rust%20%26%20go&start=60&hits=20"
    );
}
