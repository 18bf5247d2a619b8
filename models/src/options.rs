use serde::{Deserialize, Serialize};

/// A User's Options object of the [Deezer API](https://developers.deezer.com/api/options).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub streaming: bool,
    /// Allowed streaming duration in seconds.
    #[serde(default)]
    pub streaming_duration: u32,
    pub offline: bool,
    pub hq: bool,
    pub ads_display: bool,
    pub ads_audio: bool,
    pub too_many_devices: bool,
    pub can_subscribe: bool,
    #[serde(default)]
    pub radio_skips: u32,
    pub lossless: bool,
    pub preview: bool,
    pub radio: bool,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
}

fn default_type() -> String {
    "options".to_string()
}
