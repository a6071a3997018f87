//! Single source of truth for one run: the catalog, the active criteria
//! and the favorites set. Favorites are read once when the session opens
//! and written through to the store on every toggle.

use crate::catalog::Catalog;
use crate::config::ApiConfig;
use crate::error::AppError;
use crate::favorites::Favorites;
use crate::filter::{FilterCriteria, filter_games};
use crate::models::{Game, GameCard};
use crate::store::LocalStore;

pub struct Session {
    catalog: Catalog,
    criteria: FilterCriteria,
    favorites: Favorites,
    store: LocalStore,
}

impl Session {
    pub fn open(store: LocalStore) -> Result<Self, AppError> {
        let favorites = store.load_favorites()?;
        Ok(Self {
            catalog: Catalog::new(),
            criteria: FilterCriteria::default(),
            favorites,
            store,
        })
    }

    pub async fn load(&mut self, config: Result<ApiConfig, AppError>) {
        self.catalog.load(config).await;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    pub fn set_genre(&mut self, genre: Option<String>) {
        self.criteria.genre = genre;
    }

    pub fn set_platform(&mut self, platform: Option<String>) {
        self.criteria.platform = platform;
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.criteria.favorites_only = favorites_only;
    }

    pub fn reset_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn visible(&self) -> Vec<Game> {
        filter_games(self.catalog.games(), &self.criteria, &self.favorites)
    }

    pub fn cards(&self, games: &[Game]) -> Vec<GameCard> {
        games
            .iter()
            .map(|g| GameCard::new(g, self.favorites.contains(g.id)))
            .collect()
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorites.contains(id)
    }

    /// Flips membership of `id` and persists the whole set before returning.
    /// The in-memory set is rolled back if the write fails.
    pub fn toggle_favorite(&mut self, id: i64) -> Result<bool, AppError> {
        let now_favorite = self.favorites.toggle(id);
        if let Err(err) = self.store.save_favorites(&self.favorites) {
            self.favorites.toggle(id);
            return Err(err);
        }
        tracing::debug!(id, favorite = now_favorite, "favorites updated");
        Ok(now_favorite)
    }
}
