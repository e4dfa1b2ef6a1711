use crate::error::{CaptionError, Result};
use crate::types::{CaptionFormat, Cue, ParsedCaptions};

/// Parse caption content in a known format.
///
/// Fails with [`CaptionError::Unparseable`] when the parser recovers no
/// cues; a successful result is never empty.
pub fn parse_captions(format: CaptionFormat, content: &str) -> Result<Vec<Cue>> {
    let captions = format.parser().parse(content);
    if captions.is_empty() {
        tracing::debug!("No {} captions recognized in {} bytes", format, content.len());
        return Err(CaptionError::Unparseable { format });
    }
    Ok(captions)
}

/// Parse an uploaded caption file, choosing the parser from its file name.
///
/// Unsupported extensions are rejected before any parsing happens.
pub fn parse_caption_file(filename: &str, content: &str) -> Result<ParsedCaptions> {
    let filename = filename.to_lowercase();
    let format = CaptionFormat::from_filename(&filename)
        .ok_or_else(|| CaptionError::UnsupportedFormat(filename.clone()))?;

    let captions = parse_captions(format, content)?;
    tracing::info!(
        "Successfully parsed {} {} captions from {}",
        captions.len(),
        format,
        filename
    );

    Ok(ParsedCaptions::new(captions, &filename))
}
