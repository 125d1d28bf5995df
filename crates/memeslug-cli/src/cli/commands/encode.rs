//! `memeslug encode <text>` – caption text to URL token.

use anyhow::Result;
use memeslug_core::caption::encode_caption;

pub fn run_encode(text: &str) -> Result<()> {
    println!("{}", encode_caption(text));
    Ok(())
}
