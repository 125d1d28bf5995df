//! `memeslug parse <link>` – recover template and captions from a share link.

use anyhow::Result;
use memeslug_core::meme_url::parse_link;

pub fn run_parse(link: &str, json: bool) -> Result<()> {
    let meme = parse_link(link)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&meme)?);
    } else {
        println!("template: {}", meme.template_id);
        println!("top:      {}", meme.top);
        println!("bottom:   {}", meme.bottom);
    }
    Ok(())
}
