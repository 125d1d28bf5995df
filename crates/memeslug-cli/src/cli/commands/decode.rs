//! `memeslug decode <token>` – URL token back to caption text.

use anyhow::Result;
use memeslug_core::caption::decode_caption;

pub fn run_decode(token: &str) -> Result<()> {
    println!("{}", decode_caption(token));
    Ok(())
}
