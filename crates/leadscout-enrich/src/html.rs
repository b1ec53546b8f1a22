//! HTML text extraction helpers.
//!
//! Third-party HTML is an opaque, possibly malformed data source; every
//! extractor here is tolerant and returns an `Option` or an empty value
//! rather than requiring document conformance.

use regex::Regex;

pub(crate) fn anchor_hrefs(html: &str) -> Vec<String> {
    let re = Regex::new(r#"(?is)<a\b[^>]*?href\s*=\s*["']([^"']+)["']"#).expect("valid href regex");
    re.captures_iter(html)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|href| {
            !href.is_empty()
                && !href.starts_with('#')
                && !href.starts_with("mailto:")
                && !href.starts_with("javascript:")
        })
        .collect()
}

/// Extracts the text of the first `max` heading elements (`h1`–`h3`) in
/// document order.
pub(crate) fn extract_headings(html: &str, max: usize) -> Vec<String> {
    let re = Regex::new(r"(?is)<h[1-3][^>]*>(.*?)</h[1-3]>").expect("valid heading regex");
    re.captures_iter(html)
        .filter_map(|cap| cap.get(1).map(|m| clean_text(m.as_str())))
        .filter(|text| !text.is_empty())
        .take(max)
        .collect()
}

/// Extracts the counter text of a profile tab anchor, e.g. the span inside
/// `<a href="...?tab=followers">` for `tab = "followers"`.
pub(crate) fn extract_tab_counter(html: &str, tab: &str) -> Option<String> {
    let anchor_re = Regex::new(&format!(
        r#"(?is)<a\b[^>]*?href\s*=\s*["'][^"']*\?tab={tab}["'][^>]*>(.*?)</a>"#
    ))
    .expect("valid tab anchor regex");
    let span_re = Regex::new(r"(?is)<span[^>]*>(.*?)</span>").expect("valid span regex");

    let inner = anchor_re.captures(html)?.get(1)?.as_str();
    let counter = span_re.captures(inner)?.get(1)?.as_str();
    Some(clean_text(counter))
}

/// Extracts the `og:description` meta content (profile bio), handling both
/// attribute orders.
pub(crate) fn extract_og_description(html: &str) -> String {
    let re = Regex::new(
        r#"(?is)<meta[^>]+property\s*=\s*["']og:description["'][^>]+content\s*=\s*["'](.*?)["'][^>]*>"#,
    )
    .expect("valid og description regex");

    if let Some(cap) = re.captures(html) {
        return clean_text(cap.get(1).map_or("", |m| m.as_str()));
    }

    let re_swapped = Regex::new(
        r#"(?is)<meta[^>]+content\s*=\s*["'](.*?)["'][^>]+property\s*=\s*["']og:description["'][^>]*>"#,
    )
    .expect("valid og description fallback regex");

    re_swapped
        .captures(html)
        .and_then(|cap| cap.get(1).map(|m| clean_text(m.as_str())))
        .unwrap_or_default()
}

/// Extracts `(repo_name, stars_text)` pairs from a repository-listing page.
///
/// Scans `<li itemprop="owns">` blocks for the repository-name anchor and the
/// stargazers anchor; a block without a name anchor is skipped, a missing
/// stargazers anchor yields `"0"`.
pub(crate) fn extract_repo_entries(html: &str) -> Vec<(String, String)> {
    let block_re = Regex::new(r#"(?is)<li\b[^>]*itemprop\s*=\s*["']owns["'][^>]*>(.*?)</li>"#)
        .expect("valid repo block regex");
    let name_re = Regex::new(
        r#"(?is)<a\b[^>]*itemprop\s*=\s*["']name codeRepository["'][^>]*>(.*?)</a>"#,
    )
    .expect("valid repo name regex");
    let stars_re = Regex::new(r#"(?is)<a\b[^>]*?href\s*=\s*["'][^"']*/stargazers["'][^>]*>(.*?)</a>"#)
        .expect("valid stargazers regex");

    let mut entries = Vec::new();
    for block in block_re.captures_iter(html) {
        let inner = block.get(1).map_or("", |m| m.as_str());
        let Some(name) = name_re
            .captures(inner)
            .and_then(|cap| cap.get(1).map(|m| clean_text(m.as_str())))
        else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let stars = stars_re
            .captures(inner)
            .and_then(|cap| cap.get(1).map(|m| clean_text(m.as_str())))
            .unwrap_or_else(|| "0".to_string());

        entries.push((name, stars));
    }
    entries
}

pub(crate) fn clean_text(input: &str) -> String {
    let tags = Regex::new(r"(?is)<[^>]+>").expect("valid tags regex");
    let no_tags = tags.replace_all(input, " ");
    no_tags
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_strips_tags_and_normalizes_space() {
        assert_eq!(clean_text("<b>Hello</b>\n\nworld"), "Hello world");
    }

    #[test]
    fn anchor_hrefs_skips_fragments_and_mailto() {
        let html = r##"
            <a href="/news">News</a>
            <a href="#top">Top</a>
            <a href="mailto:hi@example.com">Mail</a>
            <a href="https://example.com/blog">Blog</a>
        "##;
        let hrefs = anchor_hrefs(html);
        assert_eq!(hrefs, vec!["/news", "https://example.com/blog"]);
    }

    #[test]
    fn extract_headings_keeps_document_order_and_cap() {
        let html = r"
            <h2>Second level first</h2>
            <h1>Big one</h1>
            <h3>Third</h3>
            <h1>Fourth</h1>
            <h2>Fifth</h2>
            <h3>Sixth is dropped</h3>
        ";
        let headings = extract_headings(html, 5);
        assert_eq!(headings.len(), 5);
        assert_eq!(headings[0], "Second level first");
        assert_eq!(headings[4], "Fifth");
    }

    #[test]
    fn extract_tab_counter_finds_span_text() {
        let html = r#"
            <a class="Link--secondary" href="https://github.com/alice?tab=followers">
                <span class="text-bold">1.2k</span> followers
            </a>
        "#;
        assert_eq!(
            extract_tab_counter(html, "followers").as_deref(),
            Some("1.2k")
        );
        assert!(extract_tab_counter(html, "repositories").is_none());
    }

    #[test]
    fn extract_og_description_handles_both_attribute_orders() {
        let html = r#"<meta property="og:description" content="Cloud engineer and ML tinkerer">"#;
        assert_eq!(extract_og_description(html), "Cloud engineer and ML tinkerer");

        let swapped = r#"<meta content="Data person" property="og:description">"#;
        assert_eq!(extract_og_description(swapped), "Data person");

        assert_eq!(extract_og_description("<html></html>"), "");
    }

    #[test]
    fn extract_repo_entries_pairs_names_with_stars() {
        let html = r#"
            <li itemprop="owns">
                <a itemprop="name codeRepository" href="/alice/fast-api">fast-api</a>
                <a href="/alice/fast-api/stargazers">1.1k</a>
            </li>
            <li itemprop="owns">
                <a itemprop="name codeRepository" href="/alice/dotfiles">dotfiles</a>
            </li>
        "#;
        let entries = extract_repo_entries(html);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("fast-api".to_string(), "1.1k".to_string()));
        assert_eq!(entries[1], ("dotfiles".to_string(), "0".to_string()));
    }
}
