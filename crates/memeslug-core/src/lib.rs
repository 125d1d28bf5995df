pub mod caption;
pub mod config;
pub mod logging;
pub mod meme_url;
