pub const EMBED_TOTAL_MAX: usize = 6000;
pub const EMBED_TITLE_MAX: usize = 256;
pub const EMBED_DESCRIPTION_MAX: usize = 4096;
pub const EMBED_FIELDS_MAX: usize = 25;
pub const EMBED_FIELD_NAME_MAX: usize = 256;
pub const EMBED_FIELD_VALUE_MAX: usize = 1024;
pub const EMBED_FOOTER_TEXT_MAX: usize = 2048;
pub const EMBED_AUTHOR_NAME_MAX: usize = 256;
pub const EMBED_KIND_RICH: &str = "rich";

pub const ALLOWED_MENTIONS_MAX: usize = 100;
pub const AUTOCOMPLETE_CHOICES_MAX: usize = 25;

const DISCORD_API_FALLBACK: &str = "https://discord.com/api/v10";

use std::env;

lazy_static! {
    pub static ref DISCORD_API: String =
        env::var("DISCORD_API").unwrap_or_else(|_| DISCORD_API_FALLBACK.to_string());
    pub static ref USER_AGENT: String = env::var("USER_AGENT").unwrap_or_else(|_| format!(
        "DiscordBot (interaction-rs, {})",
        env!("CARGO_PKG_VERSION")
    ));
}
