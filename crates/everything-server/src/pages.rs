//! HTML for the pages the server renders itself

use chrono::SecondsFormat;
use page_cache::CachedPage;
use rand::seq::SliceRandom;

const PLACEHOLDERS: &[&str] = &[
    "information-about-unicorns",
    "javascript-projects/pong-game",
    "how-to-brew-beer",
    "how-to-develop-an-ai",
    "javascript-projects/monte-carlo-simulation-to-calculate-pi",
    "news-articles",
    "page-list",
    "hello-world",
    "my-projects",
];

pub const QUOTA_EXCEEDED_HTML: &str = "Maximum number of generated pages reached. \
     In the meanwhile, check out the <a href=\"/cached\">cached pages</a>.";

pub const GENERATION_FAILED_HTML: &str = "Sorry, this page could not be generated right now. \
     Try again later or browse the <a href=\"/cached\">cached pages</a>.";

/// Prefix every title so cached pages are recognisable
pub fn mark_cached(html: &str) -> String {
    html.replace("<title>", "<title>[CACHED] ")
}

pub fn random_placeholder() -> &'static str {
    PLACEHOLDERS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("hello-world")
}

pub fn index_page(placeholder: &str) -> String {
    format!(
        "<html>\
         <head>\
           <title>The everything website</title>\
         </head>\
         <body>\
           <h2>AI-generated pages.</h2>\
           <p>\
           Every page on this website except this one and <a href=\"/cached\">the list of cached pages</a> are AI-generated.<br>\
           Because AI is slow, loading a page for the first time can take a few seconds.<br>\
           Feel free to enter any URL or topic you'd like, or use this input section below:<br>\
           <input type=\"text\" id=\"url\" placeholder=\"{}\">\
           <button onclick=\"location.href=document.getElementById('url').value.replaceAll(' ', '-')\">Go</button><br>\
           </p>\
         </body>\
         </html>",
        escape_html(placeholder)
    )
}

pub fn cached_listing(pages: &[CachedPage]) -> String {
    let links: String = pages
        .iter()
        .map(|page| {
            let path = escape_html(&page.path);
            format!(
                "<li><a href=\"{}\">{}</a> (Generated on {})<br></li>",
                path,
                path,
                page.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            )
        })
        .collect();

    format!(
        "<html>\
         <head>\
           <title>Cached pages</title>\
         </head>\
         <body>\
           <h1>Cached AI-generated pages:</h1>\
           <ul>{}</ul>\
         </body>\
         </html>",
        links
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
