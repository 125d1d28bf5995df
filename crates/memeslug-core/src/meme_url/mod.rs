//! Share-link model: building and parsing the image service's URL shapes.
//!
//! A captioned meme is addressed as `/<template-id>/<top>/<bottom>[.ext]`,
//! where the caption segments are tokens from the caption codec. The service
//! itself is a black box; this module only produces and consumes its paths.

mod escape;

pub use escape::escape_url;

use serde::Serialize;
use thiserror::Error;

use crate::caption::{decode_caption, encode_caption};

/// Image extensions the service serves; stripped when parsing share links.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// A share link decomposed into template id and decoded captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemeLink {
    pub template_id: String,
    pub top: String,
    pub bottom: String,
}

#[derive(Debug, Error)]
pub enum ParseLinkError {
    /// Link had no path segments at all.
    #[error("link {0:?} has no template segment")]
    MissingTemplate(String),
    /// Fewer than two caption segments after the template id.
    #[error("link {0:?} is missing caption segments (expected /<template>/<top>/<bottom>)")]
    MissingCaptions(String),
}

/// Builds the share path `/<template-id>/<top>/<bottom>`.
///
/// Captions are encoded; the path carries no extension. This is the form
/// shown to the user for copying and the form `parse_link` accepts back.
pub fn meme_path(template_id: &str, top: &str, bottom: &str) -> String {
    format!(
        "/{}/{}/{}",
        template_id,
        encode_caption(top),
        encode_caption(bottom)
    )
}

/// Builds the full, escaped image URL for a captioned template.
///
/// The caption tokens keep `,` and `'` in the clear; escaping the assembled
/// link is what makes the final URL acceptable to the service.
pub fn image_url(
    base_url: &str,
    template_id: &str,
    top: &str,
    bottom: &str,
    extension: &str,
) -> String {
    let base = base_url.trim_end_matches('/');
    let link = format!(
        "{}{}.{}",
        base,
        meme_path(template_id, top, bottom),
        extension
    );
    escape_url(&link)
}

/// Parses a share link back into template id and decoded captions.
///
/// Accepts an absolute URL (only its path is considered) or a bare path. A
/// trailing image extension on the bottom segment is dropped; segments past
/// the third are ignored.
pub fn parse_link(link: &str) -> Result<MemeLink, ParseLinkError> {
    let path = match url::Url::parse(link) {
        Ok(parsed) => parsed.path().to_string(),
        // Not an absolute URL; treat the whole input as a path.
        Err(_) => link.to_string(),
    };

    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let template_id = segments
        .next()
        .ok_or_else(|| ParseLinkError::MissingTemplate(link.to_string()))?
        .to_string();
    let top = segments
        .next()
        .ok_or_else(|| ParseLinkError::MissingCaptions(link.to_string()))?;
    let bottom = segments
        .next()
        .ok_or_else(|| ParseLinkError::MissingCaptions(link.to_string()))?;

    Ok(MemeLink {
        template_id,
        top: decode_caption(top),
        bottom: decode_caption(strip_image_extension(bottom)),
    })
}

/// Whether a template id looks like one the catalog would issue: non-empty
/// ASCII alphanumerics, `-`, or `_`. The catalog stays authoritative; this
/// exists so callers can warn on obvious typos, not reject.
pub fn is_well_formed_template_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn strip_image_extension(segment: &str) -> &str {
    if let Some((stem, ext)) = segment.rsplit_once('.') {
        let ext = ext.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return stem;
        }
    }
    segment
}
