//! Caption format parsers
//!
//! One parser per supported format, all producing the same cue list:
//! - WebVTT cue blocks (`vtt`)
//! - SubRip numbered blocks (`srt`)
//! - Plain text with optional `MM:SS` markers (`txt`)
//!
//! Parsers never fail. Units they cannot make sense of are skipped and an
//! empty list means nothing was recognized; the dispatcher in `api` turns
//! that into an error.

pub mod srt;
pub mod txt;
pub mod vtt;

use crate::types::{CaptionFormat, Cue};

pub use srt::parse_srt;
pub use txt::parse_txt;
pub use vtt::parse_vtt;

/// A caption format parser
pub trait CaptionParser: Send + Sync {
    /// The format this parser reads
    fn format(&self) -> CaptionFormat;

    /// Parse the full text of a caption file into cues, in source order
    fn parse(&self, content: &str) -> Vec<Cue>;
}

/// WebVTT parser
#[derive(Debug, Clone, Copy, Default)]
pub struct VttParser;

/// SubRip parser
#[derive(Debug, Clone, Copy, Default)]
pub struct SrtParser;

/// Heuristic plain-text parser
#[derive(Debug, Clone, Copy, Default)]
pub struct TxtParser;

impl CaptionParser for VttParser {
    fn format(&self) -> CaptionFormat {
        CaptionFormat::Vtt
    }

    fn parse(&self, content: &str) -> Vec<Cue> {
        parse_vtt(content)
    }
}

impl CaptionParser for SrtParser {
    fn format(&self) -> CaptionFormat {
        CaptionFormat::Srt
    }

    fn parse(&self, content: &str) -> Vec<Cue> {
        parse_srt(content)
    }
}

impl CaptionParser for TxtParser {
    fn format(&self) -> CaptionFormat {
        CaptionFormat::Txt
    }

    fn parse(&self, content: &str) -> Vec<Cue> {
        parse_txt(content)
    }
}
