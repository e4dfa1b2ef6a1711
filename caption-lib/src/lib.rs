//! Caption normalization engine
//!
//! Turns WebVTT, SubRip and loosely timestamped plain-text caption files
//! into one ordered list of `{start, end, text}` cues, plus the small
//! video-URL helpers the caption server needs.

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

pub(crate) mod api;
pub(crate) mod error;
pub(crate) mod parser;
pub(crate) mod timestamp;
pub(crate) mod types;
pub(crate) mod url;
pub(crate) mod video;

pub use api::*;
pub use error::{CaptionError, FailureCategory, Result};
pub use parser::txt::DEFAULT_CUE_DURATION_SECS;
pub use parser::{parse_srt, parse_txt, parse_vtt, CaptionParser, SrtParser, TxtParser, VttParser};
pub use timestamp::{srt_time_to_seconds, vtt_time_to_seconds};
pub use types::{CaptionFormat, Cue, ParsedCaptions};
pub use url::{extract_video_id, thumbnail_url};
pub use video::VideoInfo;
