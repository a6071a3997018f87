use serde::Serialize;

/// Ordered set of favorite game ids, stored as a flat JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<i64>,
}

impl Favorites {
    /// Missing or unreadable data yields an empty set.
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match serde_json::from_str::<Vec<i64>>(raw) {
            Ok(ids) => {
                let mut favorites = Self::default();
                for id in ids {
                    if !favorites.contains(id) {
                        favorites.ids.push(id);
                    }
                }
                favorites
            }
            Err(err) => {
                tracing::warn!("ignoring malformed favorites data: {err}");
                Self::default()
            }
        }
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Removes `id` if present, appends it otherwise. Returns the new membership.
    pub fn toggle(&mut self, id: i64) -> bool {
        if let Some(pos) = self.ids.iter().position(|&f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_original() {
        let mut favorites = Favorites::decode(Some("[3,9]"));
        let original = favorites.clone();

        assert!(favorites.toggle(12));
        assert!(!favorites.toggle(12));
        assert_eq!(favorites, original);

        assert!(!favorites.toggle(3));
        assert!(favorites.toggle(3));
        assert_eq!(favorites.ids(), &[9, 3]);
    }

    #[test]
    fn repeated_toggles_never_duplicate() {
        let mut favorites = Favorites::default();
        for _ in 0..5 {
            favorites.toggle(42);
            assert!(favorites.ids().iter().filter(|&&id| id == 42).count() <= 1);
        }
        assert!(favorites.contains(42));
        assert_eq!(favorites.ids(), &[42]);
    }

    #[test]
    fn malformed_data_reads_as_empty() {
        assert!(Favorites::decode(Some("not-json")).ids().is_empty());
        assert!(Favorites::decode(Some(r#"{"ids":[1]}"#)).ids().is_empty());
        assert!(Favorites::decode(Some(r#"["1","2"]"#)).ids().is_empty());
        assert!(Favorites::decode(None).ids().is_empty());
    }

    #[test]
    fn decode_collapses_duplicates() {
        let favorites = Favorites::decode(Some("[5,1,5,2,1]"));
        assert_eq!(favorites.ids(), &[5, 1, 2]);
    }

    #[test]
    fn encodes_as_flat_array() {
        let mut favorites = Favorites::default();
        favorites.toggle(540);
        favorites.toggle(7);
        assert_eq!(favorites.encode(), "[540,7]");
        assert_eq!(Favorites::default().encode(), "[]");
        assert_eq!(Favorites::decode(Some(&favorites.encode())), favorites);
    }
}
