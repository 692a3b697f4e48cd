use crate::{DiscographyError, Result};

/// Convert an `m:ss` track length into total seconds.
///
/// Whitespace around the token and its parts is ignored, as are trailing
/// non-digit characters after the seconds (footnote markers such as `3:17[a]`).
///
/// ```rust
/// use wiki_discography::parse_duration;
///
/// assert_eq!(parse_duration("3:17").unwrap(), 197);
/// assert_eq!(parse_duration("0:45").unwrap(), 45);
/// assert!(parse_duration("n/a").is_err());
/// ```
pub fn parse_duration(token: &str) -> Result<u32> {
    let (minutes, seconds) = token
        .trim()
        .split_once(':')
        .ok_or_else(|| DiscographyError::Parse(format!("Duration '{token}' has no colon")))?;

    let minutes: u32 = minutes
        .trim()
        .parse()
        .map_err(|_| DiscographyError::Parse(format!("Invalid minutes in duration '{token}'")))?;

    let seconds = seconds.trim_start();
    let digits_end = seconds
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(seconds.len());
    let seconds: u32 = seconds[..digits_end]
        .parse()
        .map_err(|_| DiscographyError::Parse(format!("Invalid seconds in duration '{token}'")))?;

    if minutes == 0 {
        return Ok(seconds);
    }
    minutes
        .checked_mul(60)
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(|| DiscographyError::Parse(format!("Duration '{token}' is out of range")))
}
