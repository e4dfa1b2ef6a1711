//! Core caption types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser::{CaptionParser, SrtParser, TxtParser, VttParser};

/// A single timed caption unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Start time in seconds from media start
    pub start: f64,
    /// End time in seconds from media start
    pub end: f64,
    /// Single-line caption text
    pub text: String,
}

impl Cue {
    /// Create a new cue
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Get the duration in seconds. Negative when the source had end < start.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Supported caption file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionFormat {
    /// WebVTT, `HH:MM:SS.mmm` timestamps
    Vtt,
    /// SubRip, `HH:MM:SS,mmm` timestamps
    Srt,
    /// Free-form text with optional `MM:SS` markers
    Txt,
}

impl CaptionFormat {
    /// All formats, in dispatch order
    pub const ALL: [CaptionFormat; 3] = [CaptionFormat::Vtt, CaptionFormat::Srt, CaptionFormat::Txt];

    /// Resolve a format from a bare extension (`"vtt"`, `".SRT"`, ...)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Resolve a format from a file name by its suffix, case-insensitively
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| lower.ends_with(&format!(".{}", f.extension())))
    }

    /// Canonical lower-case extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            CaptionFormat::Vtt => "vtt",
            CaptionFormat::Srt => "srt",
            CaptionFormat::Txt => "txt",
        }
    }

    /// The parser that handles this format
    pub fn parser(&self) -> &'static dyn CaptionParser {
        match self {
            CaptionFormat::Vtt => &VttParser,
            CaptionFormat::Srt => &SrtParser,
            CaptionFormat::Txt => &TxtParser,
        }
    }
}

impl fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Successful result of parsing an uploaded caption file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCaptions {
    pub success: bool,
    pub captions: Vec<Cue>,
    pub count: usize,
    pub message: String,
}

impl ParsedCaptions {
    /// Wrap a non-empty cue list with its count and summary message
    pub fn new(captions: Vec<Cue>, filename: &str) -> Self {
        let count = captions.len();
        Self {
            success: true,
            captions,
            count,
            message: format!("Successfully loaded {} captions from {}", count, filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue() {
        let cue = Cue::new(1.0, 4.5, "Hello");
        assert_eq!(cue.text, "Hello");
        assert_eq!(cue.duration(), 3.5);

        let backwards = Cue::new(5.0, 2.0, "x");
        assert_eq!(backwards.duration(), -3.0);
    }

    #[test]
    fn test_cue_json_shape() {
        let cue = Cue::new(0.0, 2.0, "Hi there");
        let json = serde_json::to_value(&cue).unwrap();
        assert_eq!(json["start"], 0.0);
        assert_eq!(json["end"], 2.0);
        assert_eq!(json["text"], "Hi there");
    }

    #[test]
    fn test_format_from_filename() {
        assert_eq!(CaptionFormat::from_filename("talk.vtt"), Some(CaptionFormat::Vtt));
        assert_eq!(CaptionFormat::from_filename("TALK.SRT"), Some(CaptionFormat::Srt));
        assert_eq!(CaptionFormat::from_filename("notes.Txt"), Some(CaptionFormat::Txt));
        assert_eq!(CaptionFormat::from_filename("archive.vtt.zip"), None);
        assert_eq!(CaptionFormat::from_filename("report.doc"), None);
        assert_eq!(CaptionFormat::from_filename("vtt"), None);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CaptionFormat::from_extension("vtt"), Some(CaptionFormat::Vtt));
        assert_eq!(CaptionFormat::from_extension(".SRT"), Some(CaptionFormat::Srt));
        assert_eq!(CaptionFormat::from_extension("doc"), None);
    }

    #[test]
    fn test_format_parser_lookup() {
        for format in CaptionFormat::ALL {
            assert_eq!(format.parser().format(), format);
        }
        assert_eq!(CaptionFormat::Txt.to_string(), "txt");
    }

    #[test]
    fn test_parsed_captions_message() {
        let parsed = ParsedCaptions::new(
            vec![Cue::new(0.0, 3.0, "a"), Cue::new(3.0, 6.0, "b")],
            "lecture.txt",
        );
        assert!(parsed.success);
        assert_eq!(parsed.count, 2);
        assert_eq!(parsed.message, "Successfully loaded 2 captions from lecture.txt");
    }
}
