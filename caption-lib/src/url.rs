//! Video URL helpers

/// Extract the video id from a YouTube watch, short-link or embed URL.
///
/// ```text
/// https://www.youtube.com/watch?v=<id>
/// https://youtu.be/<id>
/// https://www.youtube.com/embed/<id>
/// https://www.youtube.com/watch?feature=share&v=<id>
/// ```
pub fn extract_video_id(url: &str) -> Option<String> {
    let patterns = [
        regex!(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)"),
        regex!(r"youtube\.com/watch\?.*v=([^&\n?#]+)"),
    ];

    patterns
        .iter()
        .find_map(|re| re.captures(url))
        .map(|caps| caps[1].to_string())
}

/// Default thumbnail URL for a video id
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}
