//! Business-hours durations as minutes since midnight.
//!
//! The upstream feed encodes opening and closing times as a restricted
//! `PT<H>H<M>M` string (hours mandatory, minutes optional). This is not
//! a general ISO 8601 duration parser; only that subset is understood.

/// Parses a `PT<H>H[<M>M]` encoding into total minutes since midnight.
///
/// Malformed or empty input resolves to 0 instead of an error, so a
/// result of 0 is indistinguishable from a genuine midnight opening.
/// Callers rely on this total, never-failing behavior. Values beyond
/// one day (`PT25H`) pass through as computed.
pub fn parse_duration(encoded: &str) -> u32 {
    let Some(rest) = encoded.strip_prefix("PT") else {
        return 0;
    };
    let Some((hours, rest)) = take_number(rest) else {
        return 0;
    };
    let Some(rest) = rest.strip_prefix('H') else {
        return 0;
    };
    // minutes are optional; anything after the matched portion is ignored
    let minutes = take_number(rest)
        .and_then(|(minutes, rest)| rest.strip_prefix('M').map(|_| minutes))
        .unwrap_or(0);
    hours.saturating_mul(60).saturating_add(minutes)
}

fn take_number(input: &str) -> Option<(u32, &str)> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let value = input[..end].parse().ok()?;
    Some((value, &input[end..]))
}

/// Encodes minutes since midnight back into the `PT<H>H<M>M` form.
pub fn encode_duration(minutes: u32) -> String {
    format!("PT{}H{}M", minutes / 60, minutes % 60)
}

/// Renders minutes since midnight as a 12-hour clock face, e.g.
/// 750 => "12:30 PM". Hour 0 renders as 12 for both midnight and noon.
pub fn format_clock_time(minutes: u32) -> String {
    let hour = minutes / 60;
    let minute = minutes % 60;
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let clock_hour = match hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{}:{:02} {}", clock_hour, minute, suffix)
}

/// Formats an encoded duration string directly as a clock face.
pub fn format_duration(encoded: &str) -> String {
    format_clock_time(parse_duration(encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_only() {
        assert_eq!(parse_duration("PT6H"), 360);
        assert_eq!(parse_duration("PT0H"), 0);
        assert_eq!(parse_duration("PT23H"), 1380);
    }

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(parse_duration("PT6H30M"), 390);
        assert_eq!(parse_duration("PT12H5M"), 725);
        assert_eq!(parse_duration("PT0H0M"), 0);
    }

    #[test]
    fn malformed_input_falls_back_to_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("garbage"), 0);
        assert_eq!(parse_duration("PT"), 0);
        assert_eq!(parse_duration("PTH"), 0);
        assert_eq!(parse_duration("6H30M"), 0);
    }

    #[test]
    fn dangling_minute_digits_are_ignored() {
        // matches the original pattern extraction: the optional minute
        // group only counts when terminated by 'M'
        assert_eq!(parse_duration("PT6H30"), 360);
        assert_eq!(parse_duration("PT6H30X"), 360);
    }

    #[test]
    fn oversized_hours_pass_through() {
        assert_eq!(parse_duration("PT25H"), 1500);
    }

    #[test]
    fn encode_parse_round_trip() {
        for minutes in 0..1440 {
            assert_eq!(parse_duration(&encode_duration(minutes)), minutes);
        }
    }

    #[test]
    fn formats_clock_faces() {
        assert_eq!(format_clock_time(0), "12:00 AM");
        assert_eq!(format_clock_time(60), "1:00 AM");
        assert_eq!(format_clock_time(720), "12:00 PM");
        assert_eq!(format_clock_time(750), "12:30 PM");
        assert_eq!(format_clock_time(840), "2:00 PM");
        assert_eq!(format_clock_time(1439), "11:59 PM");
    }

    #[test]
    fn formats_encoded_durations() {
        assert_eq!(format_duration("PT14H"), "2:00 PM");
        assert_eq!(format_duration("PT6H30M"), "6:30 AM");
        assert_eq!(format_duration("nonsense"), "12:00 AM");
    }
}
