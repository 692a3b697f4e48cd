use crate::dom::MarkupNode;

/// Domain of the external metadata service linked from artist pages.
pub const MUSICBRAINZ_DOMAIN: &str = "musicbrainz.org";

/// Find the first link pointing at `domain` and return it as an absolute URL.
pub fn resolve_external_link<N: MarkupNode>(root: N, domain: &str) -> Option<String> {
    let link = root.select_first(&format!("a[href*=\"{domain}\"]"))?;
    let href = link.attribute("href")?;
    log::debug!("Found external link {href}");
    Some(absolute_url(href))
}

/// Add an `https` scheme to scheme-less and protocol-relative links.
pub fn absolute_url(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with("//") {
        format!("https:{href}")
    } else {
        format!("https://{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            absolute_url("//musicbrainz.org/artist/abc"),
            "https://musicbrainz.org/artist/abc"
        );
        assert_eq!(
            absolute_url("musicbrainz.org/artist/abc"),
            "https://musicbrainz.org/artist/abc"
        );
        assert_eq!(
            absolute_url("https://musicbrainz.org/artist/abc"),
            "https://musicbrainz.org/artist/abc"
        );
    }

    #[test]
    fn test_resolve_first_matching_link() {
        let html = Html::parse_fragment(
            r#"<a href="https://www.discogs.com/artist/1">Discogs</a>
               <a class="external" href="//musicbrainz.org/artist/23a03e33">MusicBrainz</a>
               <a href="https://musicbrainz.org/release-group/xyz">Other</a>"#,
        );
        assert_eq!(
            resolve_external_link(html.root_element(), MUSICBRAINZ_DOMAIN).as_deref(),
            Some("https://musicbrainz.org/artist/23a03e33")
        );
    }

    #[test]
    fn test_missing_link_is_absent() {
        let html = Html::parse_fragment(r#"<a href="/wiki/Punk_rock">Punk rock</a>"#);
        assert_eq!(
            resolve_external_link(html.root_element(), MUSICBRAINZ_DOMAIN),
            None
        );
    }
}
