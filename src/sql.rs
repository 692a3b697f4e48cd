//! SQL seed scripts for an `albums`/`songs` schema.
//!
//! Albums receive sequential primary keys starting at a caller-chosen value so
//! their tracks can reference them in the same script.

use crate::{AlbumEntry, TrackEntry};

/// Builder for `INSERT` statements populating albums and their songs.
///
/// # Examples
///
/// ```rust
/// use wiki_discography::{AlbumEntry, SqlScriptBuilder, TrackEntry};
///
/// let mut script = SqlScriptBuilder::new(1, 10);
/// let album_pk = script.add_album(&AlbumEntry {
///     reference: "Highway_to_Hell".to_string(),
///     title: "Highway to Hell".to_string(),
///     release_date: "27 July 1979".to_string(),
/// });
/// script.add_tracks(album_pk, &[TrackEntry {
///     position: 1,
///     title: "Highway to Hell".to_string(),
///     side: None,
///     duration_seconds: 208,
/// }]);
///
/// let sql = script.build();
/// assert!(sql.contains("(10, 'Highway to Hell', 1, '1979-07-27')"));
/// assert!(sql.contains("('Highway to Hell', 1, NULL, 10)"));
/// ```
#[derive(Debug, Clone)]
pub struct SqlScriptBuilder {
    band_id: u64,
    next_album_pk: u64,
    album_rows: Vec<String>,
    song_rows: Vec<String>,
}

impl SqlScriptBuilder {
    pub fn new(band_id: u64, first_album_pk: u64) -> Self {
        Self {
            band_id,
            next_album_pk: first_album_pk,
            album_rows: Vec::new(),
            song_rows: Vec::new(),
        }
    }

    /// Add an album row and return the primary key assigned to it.
    pub fn add_album(&mut self, album: &AlbumEntry) -> u64 {
        let album_pk = self.next_album_pk;
        self.next_album_pk += 1;

        let released_on = match album.parsed_release_date() {
            Some(date) => quote(&date.format("%Y-%m-%d").to_string()),
            None => {
                log::debug!(
                    "Release date '{}' of '{}' is not a day-month-year date",
                    album.release_date,
                    album.title
                );
                "NULL".to_string()
            }
        };

        self.album_rows.push(format!(
            "({album_pk}, {}, {}, {released_on})",
            quote(&album.title),
            self.band_id
        ));
        album_pk
    }

    /// Add song rows belonging to the album with `album_pk`.
    pub fn add_tracks(&mut self, album_pk: u64, tracks: &[TrackEntry]) {
        for track in tracks {
            let side = track
                .side
                .map(|side| side.number().to_string())
                .unwrap_or_else(|| "NULL".to_string());
            self.song_rows.push(format!(
                "({}, {}, {side}, {album_pk})",
                quote(&track.title),
                track.position
            ));
        }
    }

    pub fn album_count(&self) -> usize {
        self.album_rows.len()
    }

    pub fn song_count(&self) -> usize {
        self.song_rows.len()
    }

    /// Render the script. Statements without rows are left out.
    pub fn build(&self) -> String {
        let mut statements = Vec::new();
        if !self.album_rows.is_empty() {
            statements.push(insert_statement(
                "albums (id, title, band_id, released_on)",
                &self.album_rows,
            ));
        }
        if !self.song_rows.is_empty() {
            statements.push(insert_statement(
                "songs (title, track_number, side, album_id)",
                &self.song_rows,
            ));
        }
        statements.join("\n\n")
    }
}

fn insert_statement(target: &str, rows: &[String]) -> String {
    format!("INSERT INTO {target}\nVALUES\n{};", rows.join(",\n"))
}

/// Single-quoted SQL string literal.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    fn album(title: &str, release_date: &str) -> AlbumEntry {
        AlbumEntry {
            reference: title.replace(' ', "_"),
            title: title.to_string(),
            release_date: release_date.to_string(),
        }
    }

    #[test]
    fn test_album_keys_are_sequential() {
        let mut script = SqlScriptBuilder::new(3, 7);
        assert_eq!(script.add_album(&album("High Voltage", "17 February 1975")), 7);
        assert_eq!(script.add_album(&album("T.N.T.", "1 December 1975")), 8);
        assert_eq!(script.album_count(), 2);
    }

    #[test]
    fn test_build_full_script() {
        let mut script = SqlScriptBuilder::new(1, 1);
        let pk = script.add_album(&album("Let There Be Rock", "21 March 1977"));
        script.add_tracks(
            pk,
            &[
                TrackEntry {
                    position: 1,
                    title: "Go Down".to_string(),
                    side: Some(Side::A),
                    duration_seconds: 318,
                },
                TrackEntry {
                    position: 5,
                    title: "Bad Boy Boogie".to_string(),
                    side: Some(Side::B),
                    duration_seconds: 267,
                },
            ],
        );

        assert_eq!(
            script.build(),
            "INSERT INTO albums (id, title, band_id, released_on)\n\
             VALUES\n\
             (1, 'Let There Be Rock', 1, '1977-03-21');\n\
             \n\
             INSERT INTO songs (title, track_number, side, album_id)\n\
             VALUES\n\
             ('Go Down', 1, 1, 1),\n\
             ('Bad Boy Boogie', 5, 2, 1);"
        );
    }

    #[test]
    fn test_unparseable_date_and_quotes() {
        let mut script = SqlScriptBuilder::new(1, 1);
        script.add_album(&album("Rock 'n' Roll Train", "Unreleased"));
        assert_eq!(script.song_count(), 0);
        assert_eq!(
            script.build(),
            "INSERT INTO albums (id, title, band_id, released_on)\n\
             VALUES\n\
             (1, 'Rock ''n'' Roll Train', 1, NULL);"
        );
    }

    #[test]
    fn test_empty_builder_renders_nothing() {
        assert_eq!(SqlScriptBuilder::new(1, 1).build(), "");
    }
}
