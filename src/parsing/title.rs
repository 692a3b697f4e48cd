use crate::dom::MarkupNode;

/// Extract the display title of a table cell.
///
/// The text of the first hyperlink is preferred because it holds the canonical
/// song title, while the visible cell text may carry annotations outside the
/// link. Footnote references (`<sup class="reference">`) are never taken as the
/// title. Cells without a song link fall back to their full text minus the
/// footnote markers. Double quotes are removed in both cases.
pub fn normalize_title<N: MarkupNode>(cell: N) -> String {
    let song_link = cell
        .select_all("a")
        .into_iter()
        .find(|link| !is_footnote_link(link));

    let text = match song_link {
        Some(link) => link.text_content(),
        None => cell
            .select_all("sup.reference")
            .iter()
            .fold(cell.text_content(), |text, footnote| {
                text.replacen(&footnote.text_content(), "", 1)
            }),
    };
    strip_quotes(&text)
}

fn is_footnote_link<N: MarkupNode>(link: &N) -> bool {
    let mut ancestor = link.parent_element();
    while let Some(node) = ancestor {
        let is_reference = node.tag_name() == "sup"
            && node
                .attribute("class")
                .is_some_and(|class| class.split_whitespace().any(|c| c == "reference"));
        if is_reference {
            return true;
        }
        if node.tag_name() == "td" || node.tag_name() == "th" {
            return false;
        }
        ancestor = node.parent_element();
    }
    false
}

/// Remove every `"` and surrounding whitespace.
pub(crate) fn strip_quotes(text: &str) -> String {
    text.replace('"', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_cell(html: &Html) -> scraper::ElementRef<'_> {
        html.root_element().select_first("td").unwrap()
    }

    #[test]
    fn test_prefers_link_text() {
        let html = Html::parse_fragment(
            r#"<table><tr><td>"<a href="/wiki/Come_Out_and_Play">Come Out and Play</a>" (radio edit)</td></tr></table>"#,
        );
        assert_eq!(normalize_title(first_cell(&html)), "Come Out and Play");
    }

    #[test]
    fn test_falls_back_to_cell_text_without_quotes() {
        let html = Html::parse_fragment(r#"<table><tr><td>"Bad Habit"</td></tr></table>"#);
        assert_eq!(normalize_title(first_cell(&html)), "Bad Habit");
    }

    #[test]
    fn test_ignores_footnote_links() {
        let html = Html::parse_fragment(
            r##"<table><tr><td>"Bad Habit"<sup class="reference"><a href="#cite_note-1">[1]</a></sup></td></tr></table>"##,
        );
        assert_eq!(normalize_title(first_cell(&html)), "Bad Habit");

        let html = Html::parse_fragment(
            r##"<table><tr><td>"<a href="/wiki/Self_Esteem">Self Esteem</a>"<sup class="reference"><a href="#cite_note-2">[2]</a></sup></td></tr></table>"##,
        );
        assert_eq!(normalize_title(first_cell(&html)), "Self Esteem");
    }
}
