//! Heuristic plain-text parser
//!
//! Each non-blank line is one cue. A line may start with a `[MM:SS]`,
//! `(MM:SS)` or `MM:SS -` marker; lines without one continue on from the
//! previous cue.

use crate::types::Cue;

/// Duration given to every text cue, there being no end time in the format
pub const DEFAULT_CUE_DURATION_SECS: f64 = 3.0;

/// Parse plain-text captions into cues.
pub fn parse_txt(content: &str) -> Vec<Cue> {
    let mut cues: Vec<Cue> = Vec::new();

    for line in content.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cue = match match_timestamp(line) {
            Some((start, text)) => Cue::new(start, start + DEFAULT_CUE_DURATION_SECS, text),
            None => {
                let start = cues.last().map_or(0.0, |prev| prev.end);
                Cue::new(start, start + DEFAULT_CUE_DURATION_SECS, line)
            }
        };
        cues.push(cue);
    }

    cues
}

/// Try the timestamp markers in priority order: bracketed, parenthesized,
/// dashed. Returns the start in seconds and the remaining text.
fn match_timestamp(line: &str) -> Option<(f64, &str)> {
    let patterns = [
        regex!(r"^\[([0-9]{1,2}):([0-9]{2})\]\s*(.+)"),
        regex!(r"^\(([0-9]{1,2}):([0-9]{2})\)\s*(.+)"),
        regex!(r"^([0-9]{1,2}):([0-9]{2})\s*[-–—]\s*(.+)"),
    ];

    patterns.iter().find_map(|re| {
        let caps = re.captures(line)?;
        let minutes: u32 = caps[1].parse().ok()?;
        let seconds: u32 = caps[2].parse().ok()?;
        let text = caps.get(3)?.as_str().trim();
        Some(((minutes * 60 + seconds) as f64, text))
    })
}
