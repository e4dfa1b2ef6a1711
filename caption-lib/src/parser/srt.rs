//! SubRip parser

use crate::timestamp::srt_time_to_seconds;
use crate::types::Cue;

/// Separator between the start and end time on a SubRip timing line
const TIMING_SEPARATOR: &str = " --> ";

/// Parse SubRip content into cues.
///
/// Blocks are separated by a blank line. Each block needs an index line
/// (not checked), a timing line and at least one text line; blocks that do
/// not fit are skipped. A timing line with more than one separator makes the
/// whole file unreadable and yields no cues.
pub fn parse_srt(content: &str) -> Vec<Cue> {
    let content = content.replace("\r\n", "\n");
    let mut cues = Vec::new();

    for block in content.trim().split("\n\n") {
        let lines: Vec<&str> = block.trim().split('\n').collect();
        if lines.len() < 3 {
            if !block.trim().is_empty() {
                tracing::debug!("Skipping SRT block with {} line(s)", lines.len());
            }
            continue;
        }

        if lines[1].matches(TIMING_SEPARATOR).count() > 1 {
            tracing::debug!("Rejecting SRT content, ambiguous timing line: {}", lines[1]);
            return Vec::new();
        }
        let Some((start, end)) = lines[1].split_once(TIMING_SEPARATOR) else {
            tracing::debug!("Skipping SRT block with bad timing line: {}", lines[1]);
            continue;
        };

        let text = lines[2..].join(" ");
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        cues.push(Cue::new(
            srt_time_to_seconds(start.trim()),
            srt_time_to_seconds(end.trim()),
            text,
        ));
    }

    cues
}
