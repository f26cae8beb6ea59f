// Link header parsing.
// Extracts the last page number from GitHub's `Link: <url>; rel="name"` pagination header.

use std::sync::OnceLock;

use regex::Regex;

/// Matches one `<url>; rel="name"` entry.
fn entry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<(?P<url>[^>]*)>\s*;\s*rel="?(?P<rel>\w+)"?"#).expect("Invalid link entry regex")
    })
}

/// Matches the `page` query parameter, preceded by `?` or `&`.
fn page_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[?&]page=(\d+)").expect("Invalid page regex"))
}

/// Page number of the `rel="last"` entry, or `None` when the header has none.
pub fn last_page(header: &str) -> Option<u32> {
    header
        .split(',')
        .filter_map(|entry| entry_regex().captures(entry))
        .filter(|caps| &caps["rel"] == "last")
        .filter_map(|caps| {
            page_regex()
                .captures(&caps["url"])
                .and_then(|page| page[1].parse::<u32>().ok())
        })
        .max()
}
