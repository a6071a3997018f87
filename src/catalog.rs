//! The loaded game catalog and the facets derived from it.
//!
//! A catalog is replaced wholesale by each successful non-empty fetch.
//! Empty responses and failures leave whatever was loaded before.

use std::collections::HashSet;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::freetogame;
use crate::models::{Facets, Game};

pub const CATALOG_LIMIT: usize = 200;
pub const FEATURED_LIMIT: usize = 5;

#[derive(Debug, Default)]
pub struct Catalog {
    games: Vec<Game>,
    genres: Vec<String>,
    platforms: Vec<String>,
    featured: Vec<Game>,
    loading: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    pub fn featured(&self) -> &[Game] {
        &self.featured
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty() && self.featured.is_empty()
    }

    pub fn facets(&self) -> Facets {
        Facets {
            genres: self.genres().to_vec(),
            platforms: self.platforms().to_vec(),
        }
    }

    pub fn find(&self, id: i64) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// A config error (no API key) fails the load like a transport error would.
    pub async fn load(&mut self, config: Result<ApiConfig, AppError>) {
        if !self.begin_load() {
            tracing::warn!("catalog load already in progress, ignoring");
            return;
        }
        let result = match config {
            Ok(config) => freetogame::fetch_games(&config).await,
            Err(err) => Err(err),
        };
        self.apply_fetch(result);
    }

    /// Marks a load as in flight. Returns `false` when one already is.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<Game>, AppError>) {
        self.loading = false;

        let data = match result {
            Ok(data) => data,
            Err(err) => {
                tracing::error!(code = err.code(), "error fetching games: {err}");
                return;
            }
        };

        if data.is_empty() {
            tracing::info!("listing came back empty, keeping current catalog");
            return;
        }

        self.featured = data.iter().take(FEATURED_LIMIT).cloned().collect();

        let mut games = data;
        games.truncate(CATALOG_LIMIT);

        // Facets cover the truncated catalog only, not the full listing.
        self.genres = distinct(games.iter().map(|g| g.genre.as_str()));
        self.platforms = distinct(games.iter().map(|g| g.platform.as_str()));
        self.games = games;

        tracing::info!(
            games = self.games.len(),
            genres = self.genres.len(),
            platforms = self.platforms.len(),
            "catalog loaded"
        );
    }
}

/// Distinct values in first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
