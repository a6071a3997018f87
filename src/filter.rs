use serde::Serialize;

use crate::favorites::Favorites;
use crate::models::Game;

pub const ALL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub query: String,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub favorites_only: bool,
}

impl FilterCriteria {
    pub fn genre_filter(&self) -> Option<&str> {
        facet_value(self.genre.as_deref())
    }

    pub fn platform_filter(&self) -> Option<&str> {
        facet_value(self.platform.as_deref())
    }
}

fn facet_value(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL)
}

/// Games matching every active criterion, in catalog order.
pub fn filter_games(games: &[Game], criteria: &FilterCriteria, favorites: &Favorites) -> Vec<Game> {
    let mut filtered = games.to_vec();

    if criteria.favorites_only {
        filtered.retain(|g| favorites.contains(g.id));
    }

    if let Some(genre) = criteria.genre_filter() {
        filtered.retain(|g| g.genre == genre);
    }

    if let Some(platform) = criteria.platform_filter() {
        filtered.retain(|g| g.platform == platform);
    }

    if !criteria.query.is_empty() {
        let needle = criteria.query.to_lowercase();
        filtered.retain(|g| g.title.to_lowercase().contains(&needle));
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::game;

    fn catalog() -> Vec<Game> {
        vec![
            game(1, "Dragon Quest", "RPG", "PC"),
            game(2, "Battle Royale", "Shooter", "PC"),
            game(3, "Warcod: Battle", "Shooter", "Web Browser"),
            game(4, "Warfare", "Strategy", "PC"),
            game(5, "Lost Ark", "RPG", "Web Browser"),
        ]
    }

    fn ids(games: &[Game]) -> Vec<i64> {
        games.iter().map(|g| g.id).collect()
    }

    fn favs(ids: &[i64]) -> Favorites {
        let mut favorites = Favorites::default();
        for id in ids {
            favorites.toggle(*id);
        }
        favorites
    }

    #[test]
    fn genre_scenario() {
        let games = vec![
            game(1, "Dragon Quest", "RPG", "PC"),
            game(2, "Battle Royale", "Shooter", "PC"),
        ];
        let criteria = FilterCriteria {
            genre: Some("RPG".to_string()),
            ..Default::default()
        };
        let result = filter_games(&games, &criteria, &Favorites::default());
        assert_eq!(result, vec![games[0].clone()]);
    }

    #[test]
    fn wildcard_criteria_is_identity() {
        let games = catalog();
        let criteria = FilterCriteria {
            query: String::new(),
            genre: Some(ALL.to_string()),
            platform: Some(ALL.to_string()),
            favorites_only: false,
        };
        assert_eq!(filter_games(&games, &criteria, &favs(&[2])), games);
        assert_eq!(
            filter_games(&games, &FilterCriteria::default(), &Favorites::default()),
            games
        );
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let criteria = FilterCriteria {
            query: "Cod".to_string(),
            ..Default::default()
        };
        let result = filter_games(&catalog(), &criteria, &Favorites::default());
        assert_eq!(ids(&result), vec![3]);

        let criteria = FilterCriteria {
            query: "BATTLE".to_string(),
            ..Default::default()
        };
        let result = filter_games(&catalog(), &criteria, &Favorites::default());
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn genre_and_platform_match_exactly() {
        let criteria = FilterCriteria {
            genre: Some("rpg".to_string()),
            ..Default::default()
        };
        assert!(filter_games(&catalog(), &criteria, &Favorites::default()).is_empty());

        let criteria = FilterCriteria {
            genre: Some("RPG".to_string()),
            platform: Some("Web Browser".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_games(&catalog(), &criteria, &Favorites::default())),
            vec![5]
        );
    }

    #[test]
    fn favorites_only_keeps_catalog_order() {
        let criteria = FilterCriteria {
            favorites_only: true,
            ..Default::default()
        };
        let result = filter_games(&catalog(), &criteria, &favs(&[5, 1, 42]));
        assert_eq!(ids(&result), vec![1, 5]);
    }

    #[test]
    fn favorites_only_with_no_favorites_is_empty() {
        let criteria = FilterCriteria {
            favorites_only: true,
            ..Default::default()
        };
        assert!(filter_games(&catalog(), &criteria, &Favorites::default()).is_empty());
    }

    #[test]
    fn all_criteria_combine() {
        let criteria = FilterCriteria {
            query: "war".to_string(),
            genre: Some("Shooter".to_string()),
            platform: Some("Web Browser".to_string()),
            favorites_only: true,
        };
        let result = filter_games(&catalog(), &criteria, &favs(&[3, 4]));
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn empty_catalog_gives_empty_result() {
        let criteria = FilterCriteria {
            query: "anything".to_string(),
            ..Default::default()
        };
        assert!(filter_games(&[], &criteria, &Favorites::default()).is_empty());
        assert!(filter_games(&[], &FilterCriteria::default(), &Favorites::default()).is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let games = catalog();
        let criteria = FilterCriteria {
            query: "a".to_string(),
            platform: Some("PC".to_string()),
            ..Default::default()
        };
        let favorites = favs(&[1]);
        let first = filter_games(&games, &criteria, &favorites);
        let second = filter_games(&games, &criteria, &favorites);
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![1, 2, 4]);
    }
}
