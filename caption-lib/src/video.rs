//! Video metadata returned by the lookup endpoint

use serde::{Deserialize, Serialize};

use crate::types::Cue;
use crate::url::thumbnail_url;

/// Basic information about a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    /// Duration in seconds, 0 when unknown
    pub duration: f64,
    pub video_id: String,
    pub thumbnail: String,
    /// Always empty on lookup; captions come from uploads
    pub captions: Vec<Cue>,
}

impl VideoInfo {
    /// Minimal info for a video whose metadata could not be retrieved,
    /// enough for the player to still embed it.
    pub fn placeholder(video_id: &str) -> Self {
        Self {
            title: format!("YouTube Video {}", video_id),
            duration: 0.0,
            video_id: video_id.to_string(),
            thumbnail: thumbnail_url(video_id),
            captions: Vec::new(),
        }
    }
}
