use serde::{Deserialize, Serialize};

/// A User object of the [Deezer API](https://developers.deezer.com/api/user).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inscription_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_kid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content_level: Option<ExplicitContentLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content_levels_available: Option<Vec<ExplicitContentLevel>>,
    /// API link to the flow of this user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracklist: Option<String>,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplicitContentLevel {
    ExplicitDisplay,
    ExplicitNoRecommendation,
    ExplicitHide,
}

fn default_type() -> String {
    "user".to_string()
}
