//! CLI for the memeslug caption and share-link toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use memeslug_core::config;

use commands::{run_decode, run_encode, run_link, run_parse};

/// Top-level CLI for the memeslug toolkit.
#[derive(Debug, Parser)]
#[command(name = "memeslug")]
#[command(
    about = "memeslug: caption tokens and share links for the meme image service",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Encode caption text into a URL-path-safe token.
    Encode {
        /// Caption text (quote it if it contains spaces).
        text: String,
    },

    /// Decode a caption token back into display text.
    Decode {
        /// Caption token from a share link.
        token: String,
    },

    /// Build the share path and image URL for a captioned template.
    Link {
        /// Template id (e.g. "iw"); omit to use the configured default_template.
        #[arg(short, long)]
        template: Option<String>,

        /// Top caption text.
        #[arg(default_value = "")]
        top: String,

        /// Bottom caption text.
        #[arg(default_value = "")]
        bottom: String,
    },

    /// Recover the template id and captions from a share link or image URL.
    Parse {
        /// Share path (`/<template>/<top>/<bottom>`) or full URL.
        link: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Encode { text } => run_encode(&text)?,
            CliCommand::Decode { token } => run_decode(&token)?,
            CliCommand::Link {
                template,
                top,
                bottom,
            } => run_link(&cfg, template.as_deref(), &top, &bottom)?,
            CliCommand::Parse { link, json } => run_parse(&link, json)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
