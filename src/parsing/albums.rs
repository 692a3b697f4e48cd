use crate::dom::{section_element, MarkupNode};
use crate::parsing::title::strip_quotes;
use crate::AlbumEntry;
use regex::Regex;
use std::sync::LazyLock;

/// Anchor id of the studio albums heading on discography pages.
pub const STUDIO_ALBUMS_ANCHOR: &str = "Studio_albums";

static RELEASED_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*released:\s*").expect("valid released label regex"));

/// Extract every row of the "Studio albums" table, in document order.
///
/// A page without that section (or without a table under it) yields an empty
/// list. Rows missing a hyperlink or a release list item are skipped.
pub fn extract_albums<N: MarkupNode>(root: N) -> Vec<AlbumEntry> {
    let Some(table) = section_element(root, STUDIO_ALBUMS_ANCHOR, "table") else {
        log::debug!("No studio albums table found");
        return Vec::new();
    };

    let row_headers = table.select_all("th[scope=\"row\"]");
    log::debug!("Found {} album row headers", row_headers.len());

    let albums: Vec<AlbumEntry> = row_headers
        .into_iter()
        .filter_map(extract_album_row)
        .collect();

    log::debug!("Parsed {} studio albums", albums.len());
    albums
}

/// Build one album from its row header cell.
fn extract_album_row<N: MarkupNode>(header: N) -> Option<AlbumEntry> {
    let Some(link) = header.select_first("a[href]") else {
        log::debug!(
            "Skipping album row without link: '{}'",
            header.text_content().trim()
        );
        return None;
    };

    let title = strip_quotes(&link.text_content());
    let reference = page_reference(link.attribute("href").unwrap_or_default());

    let Some(details) = header
        .sibling_elements()
        .into_iter()
        .filter(|cell| cell.tag_name() == "td")
        .find_map(|cell| cell.select_first("li"))
    else {
        log::debug!("Skipping album '{title}': no release details");
        return None;
    };

    let release_date = strip_released_label(&details.text_content());

    Some(AlbumEntry {
        reference,
        title,
        release_date,
    })
}

/// Turn an article href (`/wiki/Ixnay_on_the_Hombre`) into its page key.
pub fn page_reference(href: &str) -> String {
    let key = href.strip_prefix("/wiki/").unwrap_or(href);
    urlencoding::decode(key)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| key.to_string())
}

/// Remove a leading "Released:" label, in any case, with its whitespace.
pub fn strip_released_label(text: &str) -> String {
    RELEASED_LABEL.replace(text, "").trim().to_string()
}
