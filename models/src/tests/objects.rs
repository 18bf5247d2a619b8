use crate::{Album, Chart, Explicit, Genre, Playlist, Track, User};

const TRACK_JSON: &str = r#"{
    "id": 3135556,
    "readable": true,
    "title": "Harder, Better, Faster, Stronger",
    "title_short": "Harder, Better, Faster, Stronger",
    "title_version": "",
    "isrc": "GBDUW0000059",
    "link": "https://www.deezer.com/track/3135556",
    "duration": 224,
    "track_position": 4,
    "disk_number": 1,
    "rank": 956167,
    "release_date": "2001-03-07",
    "explicit_lyrics": false,
    "explicit_content_lyrics": 0,
    "explicit_content_cover": 2,
    "preview": "https://cdns-preview-d.dzcdn.net/stream/c-deda7fa9316d9e9e880d2c6207e92260-8.mp3",
    "bpm": 123.4,
    "gain": -12.4,
    "md5_image": "2e018122cb56986277102d2041a592c8",
    "artist": {"id": 27, "name": "Daft Punk", "type": "artist"},
    "album": {"id": 302127, "title": "Discovery", "type": "album"},
    "type": "track"
}"#;

/// **VALUE**: Verifies a realistic full Track payload decodes with its wire renames
/// (`readable`, integer explicit levels) intact.
///
/// **WHY THIS MATTERS**: The object layer is pure declarative mapping; a broken rename
/// silently turns a populated field into `None` instead of failing loudly.
#[test]
fn given_full_track_payload_when_deserialized_then_all_mapped_fields_populate() {
    // GIVEN / WHEN: A get-by-id style payload
    let track: Track = serde_json::from_str(TRACK_JSON).expect("track payload");

    // THEN: Renamed and typed fields are populated
    assert_eq!(track.id, 3135556);
    assert_eq!(track.is_readable, Some(true));
    assert_eq!(track.duration, 224);
    assert_eq!(track.explicit_content_lyrics, Some(Explicit::NotExplicit));
    assert_eq!(track.explicit_content_cover, Some(Explicit::Unknown));
    assert_eq!(track.kind, "track");
    assert_eq!(track.artist.as_ref().map(|a| a.id), Some(27));
    assert_eq!(
        track.album.as_ref().map(|a| a.title.as_str()),
        Some("Discovery")
    );
}

/// **VALUE**: Verifies the `type` tag defaults per entity when the API omits it.
#[test]
fn given_payload_without_type_when_deserialized_then_tag_defaults() {
    let track: Track = serde_json::from_str(r#"{"id": 1, "title": "x"}"#).expect("track");
    assert_eq!(track.kind, "track");

    let album: Album = serde_json::from_str(r#"{"id": 1, "title": "x"}"#).expect("album");
    assert_eq!(album.kind, "album");

    let user: User = serde_json::from_str(r#"{"id": 1, "name": "x"}"#).expect("user");
    assert_eq!(user.kind, "user");
}

/// **VALUE**: Verifies `Genre` accepts `title` as an alias of `name`, which the
/// `radio/genres` listing uses.
#[test]
fn given_genre_with_title_key_when_deserialized_then_name_populates() {
    let genre: Genre = serde_json::from_str(r#"{"id": 132, "title": "Pop"}"#).expect("genre");
    assert_eq!(genre.name, "Pop");
}

/// **VALUE**: Verifies `Playlist.creator` accepts the `user` alias used by chart
/// responses.
#[test]
fn given_chart_playlist_with_user_key_when_deserialized_then_creator_populates() {
    let json = r#"{
        "id": 9,
        "title": "Motivation",
        "public": true,
        "user": {"id": 5, "name": "deezer-playlists"}
    }"#;

    let playlist: Playlist = serde_json::from_str(json).expect("playlist");

    assert!(playlist.is_public);
    assert_eq!(playlist.creator.map(|u| u.id), Some(5));
}

/// **VALUE**: Verifies the composite Chart tolerates missing windows and keeps the
/// windows' own totals, including the documented `total = 0` inconsistency next to a
/// non-empty sibling.
#[test]
fn given_partial_chart_when_deserialized_then_missing_windows_default_empty() {
    let json = r#"{
        "tracks": {"data": [{"id": 1, "title": "x"}], "total": 0},
        "albums": {"data": [], "total": 42}
    }"#;

    let chart: Chart = serde_json::from_str(json).expect("chart");

    assert_eq!(chart.tracks.data.len(), 1);
    assert_eq!(chart.tracks.total, Some(0));
    assert_eq!(chart.albums.total, Some(42));
    assert!(chart.artists.data.is_empty());
    assert!(chart.playlists.data.is_empty());
    assert!(chart.podcasts.data.is_empty());
}

/// **VALUE**: Verifies the integer codec of `Explicit` rejects levels the API never
/// documented instead of mapping them to something arbitrary.
#[test]
fn given_unknown_explicit_level_when_deserialized_then_fails() {
    let result: Result<Explicit, _> = serde_json::from_str("9");
    assert!(result.is_err());

    let level: Explicit = serde_json::from_str("7").expect("documented level");
    assert_eq!(level, Explicit::PartiallyNoAdviceAvailable);
}
