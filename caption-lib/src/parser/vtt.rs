//! WebVTT parser

use crate::timestamp::vtt_time_to_seconds;
use crate::types::Cue;

/// Parse WebVTT content into cues.
///
/// A cue starts at a `HH:MM:SS.mmm --> HH:MM:SS.mmm` timing line (trailing
/// cue settings are allowed) and takes every following non-empty line as
/// text, with inline tags removed. Everything else (the `WEBVTT` header,
/// cue identifiers, NOTE and STYLE blocks) is skipped.
pub fn parse_vtt(content: &str) -> Vec<Cue> {
    let lines: Vec<&str> = content.trim().lines().collect();
    let mut cues = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.contains("-->") {
            match regex!(r"^([0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}) --> ([0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3})")
                .captures(line)
            {
                Some(caps) => {
                    let mut text_lines = Vec::new();
                    i += 1;
                    while i < lines.len() && !lines[i].trim().is_empty() {
                        let text = strip_tags(lines[i].trim());
                        if !text.is_empty() {
                            text_lines.push(text);
                        }
                        i += 1;
                    }

                    if text_lines.is_empty() {
                        tracing::debug!("Dropping VTT cue without text: {}", line);
                    } else {
                        cues.push(Cue::new(
                            vtt_time_to_seconds(&caps[1]),
                            vtt_time_to_seconds(&caps[2]),
                            text_lines.join(" "),
                        ));
                    }
                }
                None => tracing::debug!("Ignoring malformed VTT timing line: {}", line),
            }
        }

        i += 1;
    }

    cues
}

/// Remove inline markup such as `<b>`, `<i>`, `<c.yellow>` or `<00:00:01.000>`.
fn strip_tags(line: &str) -> String {
    regex!(r"<[^>]+>").replace_all(line, "").into_owned()
}
