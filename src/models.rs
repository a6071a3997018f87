use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    FreeToGame,
    LocalDb,
    Internal,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    pub version: &'static str,
    pub source: DataSource,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub ok: bool,
    pub data: Option<T>,
    pub meta: Meta,
    pub error: Option<ErrorBody>,
}

/// One entry of the upstream listing, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub short_description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub game_url: String,
    pub genre: String,
    pub platform: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub publisher: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub developer: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub freetogame_profile_url: String,
}

/// Display fields sometimes arrive as `null`; treat that like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize)]
pub struct GameCard {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub short_description: String,
    pub favorite: bool,
}

impl GameCard {
    pub fn new(game: &Game, favorite: bool) -> Self {
        Self {
            id: game.id,
            title: game.title.clone(),
            genre: game.genre.clone(),
            platform: game.platform.clone(),
            short_description: game.short_description.clone(),
            favorite,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Facets {
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
}
