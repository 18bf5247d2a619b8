use wiremock::ResponseTemplate;

pub const TRACK_123: &str = r#"{
    "id": 123,
    "title": "Aerodynamic",
    "title_short": "Aerodynamic",
    "duration": 212,
    "rank": 801858,
    "explicit_lyrics": false,
    "preview": "https://cdns-preview-b.dzcdn.net/stream/123.mp3",
    "artist": {"id": 27, "name": "Daft Punk", "type": "artist"},
    "type": "track"
}"#;

pub fn json_body(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}
