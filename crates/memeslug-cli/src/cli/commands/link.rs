//! `memeslug link` – build the share path and image URL.

use anyhow::{bail, Result};
use memeslug_core::config::MemeConfig;
use memeslug_core::meme_url::{image_url, is_well_formed_template_id, meme_path};

pub fn run_link(cfg: &MemeConfig, template: Option<&str>, top: &str, bottom: &str) -> Result<()> {
    let template = match template.or(cfg.default_template.as_deref()) {
        Some(t) => t,
        None => bail!("no template given and no default_template configured"),
    };

    if !is_well_formed_template_id(template) {
        tracing::warn!(
            "template id {:?} looks unusual; the service may not know it",
            template
        );
    }

    println!("{}", meme_path(template, top, bottom));
    println!(
        "{}",
        image_url(&cfg.base_url, template, top, bottom, &cfg.image_extension)
    );
    Ok(())
}
