//! Timestamp literal to seconds conversion
//!
//! Both converters are total: a malformed literal converts to `0.0` so one
//! bad timestamp only degrades its own cue.

/// Convert a WebVTT `HH:MM:SS.mmm` literal to seconds.
///
/// The milliseconds part is optional. Segments past the third colon are
/// ignored.
pub fn vtt_time_to_seconds(time: &str) -> f64 {
    parse_vtt_time(time).unwrap_or(0.0)
}

/// Convert a SubRip `HH:MM:SS,mmm` literal to seconds.
pub fn srt_time_to_seconds(time: &str) -> f64 {
    parse_srt_time(time).unwrap_or(0.0)
}

fn parse_vtt_time(time: &str) -> Option<f64> {
    let mut parts = time.split(':');
    let hours = parse_field(parts.next()?)?;
    let minutes = parse_field(parts.next()?)?;

    let mut seconds_parts = parts.next()?.split('.');
    let seconds = parse_field(seconds_parts.next()?)?;
    let millis = match seconds_parts.next() {
        Some(ms) => parse_field(ms)?,
        None => 0.0,
    };

    Some(to_seconds(hours, minutes, seconds, millis))
}

fn parse_srt_time(time: &str) -> Option<f64> {
    let (clock, millis) = time.split_once(',')?;
    if millis.contains(',') {
        return None;
    }

    let fields: Vec<&str> = clock.split(':').collect();
    let [hours, minutes, seconds] = fields.as_slice() else {
        return None;
    };

    Some(to_seconds(
        parse_field(hours)?,
        parse_field(minutes)?,
        parse_field(seconds)?,
        parse_field(millis)?,
    ))
}

// helper. Accepts an optionally signed run of ASCII digits of any length.
fn parse_field(s: &str) -> Option<f64> {
    let s = s.trim();
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// Float arithmetic so oversized fields cannot overflow.
fn to_seconds(hours: f64, minutes: f64, seconds: f64, millis: f64) -> f64 {
    hours * 3600.0 + minutes * 60.0 + seconds + millis / 1000.0
}
