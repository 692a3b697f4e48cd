use crate::dom::MarkupNode;
use crate::parsing::duration::parse_duration;
use crate::parsing::title::normalize_title;
use crate::{Side, TrackEntry};
use std::collections::HashSet;

/// Every tracklist table of a page, in document order.
pub fn find_tracklist_tables<N: MarkupNode>(root: N) -> Vec<N> {
    let tables = root.select_all("table.tracklist");
    log::debug!("Found {} tracklist tables", tables.len());
    tables
}

/// Assigns strictly increasing positions to printed track numbers.
///
/// A printed number larger than anything seen so far is trusted. Anything else
/// (typically side B restarting at 1) is replaced by the next free position.
/// Returns `None` once positions are exhausted.
#[derive(Debug, Default)]
struct Renumberer {
    last: u32,
}

impl Renumberer {
    fn assign(&mut self, printed: u32) -> Option<u32> {
        self.last = if printed > self.last {
            printed
        } else {
            self.last.checked_add(1)?
        };
        Some(self.last)
    }
}

/// A track row after cell extraction, before numbering.
struct TrackRow {
    printed_number: u32,
    title: String,
    duration_seconds: u32,
}

/// Extract the tracks of an ordered list of tracklist tables.
///
/// With a single table no track carries a side. With several, the first table
/// is side A and every later table side B. Positions come from one counter
/// shared by all tables so that a side restarting its numbering never collides
/// with the previous side.
pub fn extract_tracks<N: MarkupNode>(tables: &[N]) -> Vec<TrackEntry> {
    let dual_side = tables.len() > 1;
    let mut renumberer = Renumberer::default();
    let mut printed_seen = HashSet::new();
    let mut tracks = Vec::new();

    for (table_index, table) in tables.iter().enumerate() {
        let side = match (dual_side, table_index) {
            (false, _) => None,
            (true, 0) => Some(Side::A),
            (true, _) => Some(Side::B),
        };

        for header in table.select_all("th[id^=\"track\"]") {
            let Some(row) = extract_track_row(header) else {
                continue;
            };

            // single-table pages repeat rows for footnotes
            if !dual_side && !printed_seen.insert(row.printed_number) {
                log::debug!(
                    "Skipping repeated track {} '{}'",
                    row.printed_number,
                    row.title
                );
                continue;
            }

            let Some(position) = renumberer.assign(row.printed_number) else {
                log::debug!("Skipping track '{}': no position left", row.title);
                continue;
            };
            if position != row.printed_number {
                log::debug!(
                    "Renumbered track '{}' from {} to {position}",
                    row.title,
                    row.printed_number
                );
            }

            tracks.push(TrackEntry {
                position,
                title: row.title,
                side,
                duration_seconds: row.duration_seconds,
            });
        }
    }

    log::debug!("Parsed {} tracks", tracks.len());
    tracks
}

/// Read number, title and length from a track-number header cell.
fn extract_track_row<N: MarkupNode>(header: N) -> Option<TrackRow> {
    let label = header.text_content();
    let Ok(printed_number) = label.trim().trim_end_matches('.').parse::<u32>() else {
        log::debug!("Skipping track header with label '{}'", label.trim());
        return None;
    };

    let Some(title_cell) = header.next_element() else {
        log::debug!("Skipping track {printed_number}: no title cell");
        return None;
    };
    let title = normalize_title(title_cell);

    let Some(duration_cell) = find_duration_cell(title_cell) else {
        log::debug!("Skipping track {printed_number} '{title}': no length cell");
        return None;
    };

    let duration_seconds = match parse_duration(&duration_cell.text_content()) {
        Ok(seconds) => seconds,
        Err(e) => {
            log::debug!("Skipping track {printed_number} '{title}': {e}");
            return None;
        }
    };

    Some(TrackRow {
        printed_number,
        title,
        duration_seconds,
    })
}

/// The length cell sits two cells after the header, or three when a writer
/// column is inserted between title and length.
fn find_duration_cell<N: MarkupNode>(title_cell: N) -> Option<N> {
    let candidate = title_cell.next_element()?;
    if candidate.text_content().contains(':') {
        return Some(candidate);
    }
    candidate.next_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_renumberer() {
        let mut renumberer = Renumberer::default();
        let assigned: Vec<u32> = [1, 2, 3, 1, 2, 7, 3]
            .into_iter()
            .map(|n| renumberer.assign(n).unwrap())
            .collect();
        assert_eq!(assigned, vec![1, 2, 3, 4, 5, 7, 8]);
    }

    #[test]
    fn test_renumberer_exhausted() {
        let mut renumberer = Renumberer::default();
        assert_eq!(renumberer.assign(u32::MAX), Some(u32::MAX));
        assert_eq!(renumberer.assign(1), None);
    }

    #[test]
    fn test_extract_tracks_skips_out_of_range_numbers() {
        let html = Html::parse_fragment(
            r#"<table class="tracklist">
                 <tr><th id="track1">1.</th><td>"Bad Habit"</td><td>99999999:00</td></tr>
                 <tr><th id="track2">4294967295.</th><td>"Gotta Get Away"</td><td>3:52</td></tr>
                 <tr><th id="track3">3.</th><td>"Genocide"</td><td>3:33</td></tr>
               </table>"#,
        );
        let tables = find_tracklist_tables(html.root_element());
        let tracks = extract_tracks(&tables);

        let summary: Vec<(u32, &str)> = tracks
            .iter()
            .map(|t| (t.position, t.title.as_str()))
            .collect();
        assert_eq!(summary, vec![(u32::MAX, "Gotta Get Away")]);
    }

    #[test]
    fn test_extract_tracks_with_writer_column() {
        let html = Html::parse_fragment(
            r#"<table class="tracklist">
                 <tr><th scope="col">No.</th><th>Title</th><th>Writer(s)</th><th>Length</th></tr>
                 <tr><th id="track1" scope="row">1.</th><td>"<a href="/wiki/Time_to_Relax">Time to Relax</a>"</td><td>Dexter Holland</td><td>0:25</td></tr>
                 <tr><th id="track2" scope="row">2.</th><td>"Nitro (Youth Energy)"</td><td>Holland</td><td>2:27</td></tr>
               </table>"#,
        );
        let root = html.root_element();
        let tables = find_tracklist_tables(root);
        let tracks = extract_tracks(&tables);

        assert_eq!(
            tracks,
            vec![
                TrackEntry {
                    position: 1,
                    title: "Time to Relax".to_string(),
                    side: None,
                    duration_seconds: 25,
                },
                TrackEntry {
                    position: 2,
                    title: "Nitro (Youth Energy)".to_string(),
                    side: None,
                    duration_seconds: 147,
                },
            ]
        );
    }

    #[test]
    fn test_extract_tracks_skips_total_length_and_malformed_rows() {
        let html = Html::parse_fragment(
            r#"<table class="tracklist">
                 <tr><th id="track1">1.</th><td>"Bad Habit"</td><td>3:43</td></tr>
                 <tr><th id="track2">2.</th><td>"Gotta Get Away"</td><td>unknown</td><td>n/a</td></tr>
                 <tr><th id="track3">3.</th><td>"Genocide"</td><td>3:33</td></tr>
                 <tr><th colspan="2">Total length:</th><td>10:59</td></tr>
               </table>"#,
        );
        let tables = find_tracklist_tables(html.root_element());
        let tracks = extract_tracks(&tables);

        let positions: Vec<u32> = tracks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 3]);
        assert_eq!(tracks[1].title, "Genocide");
    }

    #[test]
    fn test_extract_tracks_empty_table_list() {
        let tables: Vec<scraper::ElementRef<'_>> = Vec::new();
        assert!(extract_tracks(&tables).is_empty());
    }
}
