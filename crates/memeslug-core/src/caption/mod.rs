//! Caption codec: mapping between display text and URL path tokens.
//!
//! Captions travel inside image paths (`/<template>/<top>/<bottom>.jpg`), so
//! raw text is encoded into a token that survives path parsing and decoded
//! back when a share link is opened.

mod decode;
mod encode;

pub use decode::decode_caption;
pub use encode::encode_caption;

/// Token standing in for a blank caption line.
pub const BLANK_TOKEN: &str = "_";
