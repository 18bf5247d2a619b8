use serde::{Deserialize, Serialize};

/// An Editorial object of the [Deezer API](https://developers.deezer.com/api/editorial).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Editorial {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_big: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_xl: Option<String>,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
}

fn default_type() -> String {
    "editorial".to_string()
}
