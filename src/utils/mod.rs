//! Utility functions and helpers.

pub mod html;
pub mod http;

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-fold and trim a headword or prefix for lookup.
pub fn normalize_text(s: &str) -> String {
    normalize_whitespace(s).to_lowercase()
}

/// Build the article URL for a headword on a wiki host.
pub fn page_url(host: &str, word: &str) -> String {
    let title = word.trim().replace(' ', "_");
    format!("https://{}/wiki/{}", host, urlencoding::encode(&title))
}

/// Build the OpenSearch suggestion URL for a prefix on a wiki host.
pub fn opensearch_url(host: &str, prefix: &str, limit: usize) -> String {
    format!(
        "https://{}/w/api.php?action=opensearch&search={}&limit={}&namespace=0&format=json",
        host,
        urlencoding::encode(prefix.trim()),
        limit
    )
}

/// Turn a fragment link (`#Fran%C3%A7ais`) into the anchor id it targets.
pub fn decode_anchor(href: &str) -> String {
    let fragment = href.rsplit_once('#').map_or(href, |(_, f)| f);
    urlencoding::decode(fragment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| fragment.to_string())
}

/// Extract the host from a URL string.
pub fn get_domain(url_str: &str) -> Option<String> {
    url::Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Hello   World "), "hello world");
        assert_eq!(normalize_text("ÉTÉ"), "été");
    }

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url("en.wiktionary.org", "test"),
            "https://en.wiktionary.org/wiki/test"
        );
        assert_eq!(
            page_url("fr.wiktionary.org", "pomme de terre"),
            "https://fr.wiktionary.org/wiki/pomme_de_terre"
        );
        assert_eq!(
            page_url("fr.wiktionary.org", "été"),
            "https://fr.wiktionary.org/wiki/%C3%A9t%C3%A9"
        );
    }

    #[test]
    fn test_opensearch_url() {
        assert_eq!(
            opensearch_url("en.wiktionary.org", "te st", 5),
            "https://en.wiktionary.org/w/api.php?action=opensearch&search=te%20st&limit=5&namespace=0&format=json"
        );
    }

    #[test]
    fn test_decode_anchor() {
        assert_eq!(decode_anchor("#Fran%C3%A7ais"), "Français");
        assert_eq!(decode_anchor("#Noun"), "Noun");
        assert_eq!(decode_anchor("Etymology_1"), "Etymology_1");
    }

    #[test]
    fn test_get_domain() {
        assert_eq!(
            get_domain("https://en.wiktionary.org/wiki/test"),
            Some("en.wiktionary.org".to_string())
        );
        assert_eq!(get_domain("not a url"), None);
    }
}
