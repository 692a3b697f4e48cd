use crate::dom::{section_element, MarkupNode};
use crate::Musician;

/// Anchor id of the personnel heading on album pages.
pub const PERSONNEL_ANCHOR: &str = "Personnel";

/// Separator between a musician's name and their role.
const ROLE_SEPARATOR: &str = " – ";

/// Extract the credits listed directly under the "Personnel" heading.
pub fn extract_musicians<N: MarkupNode>(root: N) -> Vec<Musician> {
    let Some(list) = section_element(root, PERSONNEL_ANCHOR, "ul") else {
        log::debug!("No personnel list found");
        return Vec::new();
    };

    let musicians: Vec<Musician> = list
        .child_elements()
        .into_iter()
        .filter(|item| item.tag_name() == "li")
        .filter_map(|item| parse_credit(&item.text_content()))
        .collect();

    log::debug!("Parsed {} musicians", musicians.len());
    musicians
}

/// Split a credit line such as `Bon Scott – lead vocals`.
///
/// Only the first line of the role is kept; nested sub-lists follow on later lines.
pub fn parse_credit(text: &str) -> Option<Musician> {
    let Some((name, role)) = text.split_once(ROLE_SEPARATOR) else {
        log::debug!("Skipping personnel item without separator: '{}'", text.trim());
        return None;
    };
    Some(Musician {
        name: name.trim().to_string(),
        role: role.lines().next().unwrap_or_default().trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_parse_credit() {
        assert_eq!(
            parse_credit("Bon Scott – lead vocals"),
            Some(Musician {
                name: "Bon Scott".to_string(),
                role: "lead vocals".to_string(),
            })
        );
        assert_eq!(parse_credit("Recorded at Albert Studios"), None);
    }

    #[test]
    fn test_role_keeps_later_dashes() {
        let musician = parse_credit("George Young – bass guitar – uncredited").unwrap();
        assert_eq!(musician.name, "George Young");
        assert_eq!(musician.role, "bass guitar – uncredited");
    }

    #[test]
    fn test_extract_musicians_reads_only_direct_items() {
        let html = Html::parse_fragment(
            r#"<h2><span id="Personnel">Personnel</span></h2>
               <ul>
                 <li>Bon Scott – lead vocals</li>
                 <li>Angus Young – lead guitar
                   <ul><li>Nested – ignored</li></ul>
                 </li>
                 <li>Production notes</li>
               </ul>"#,
        );
        let musicians = extract_musicians(html.root_element());
        assert_eq!(musicians.len(), 2);
        assert_eq!(musicians[0].name, "Bon Scott");
        assert_eq!(musicians[1].name, "Angus Young");
        assert_eq!(musicians[1].role, "lead guitar");
    }
}
