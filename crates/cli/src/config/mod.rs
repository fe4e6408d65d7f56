use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;

mod logger;
pub use logger::*;

use crate::AppResult;
use crate::core::OwnedRoomId;

pub const CONFIG_ENV: &str = "TRELLIS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "trellis.toml";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logger: LoggerConfig,

    /// Room the `state` command applies events to when none of them names a
    /// room.
    ///
    /// default: "!inspect:localhost"
    #[serde(default = "default_room_id")]
    pub default_room_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logger: LoggerConfig::default(),
            default_room_id: default_room_id(),
        }
    }
}

impl AppConfig {
    pub fn default_room_id(&self) -> AppResult<OwnedRoomId> {
        Ok(OwnedRoomId::parse(self.default_room_id.as_str())?)
    }
}

fn default_room_id() -> String {
    "!inspect:localhost".to_owned()
}

/// The raw configuration sources, later sources winning.
///
/// The file is `path` if given, else `$TRELLIS_CONFIG`, else `trellis.toml`.
/// A missing file contributes nothing.
pub fn figment(path: Option<&Path>) -> Figment {
    let toml = match path {
        Some(path) => Toml::file(path),
        None => Toml::file(Env::var(CONFIG_ENV).as_deref().unwrap_or(DEFAULT_CONFIG_FILE)),
    };
    Figment::new().merge(toml).merge(Env::prefixed("TRELLIS_").split("__"))
}

pub fn load(path: Option<&Path>) -> AppResult<AppConfig> {
    Ok(figment(path).extract()?)
}
