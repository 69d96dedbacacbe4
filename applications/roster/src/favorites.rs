/// Per-character favorite flags
use std::collections::HashSet;

/// Favorite flags keyed by catalog id.
///
/// Lives only as long as the screen that owns it. Never written back to
/// the records or to the list controller.
#[derive(Debug, Clone, Default)]
pub struct FavoriteToggles {
    ids: HashSet<u32>,
}

impl FavoriteToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `id` and return the new value
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_nothing_favorited() {
        let favorites = FavoriteToggles::new();
        assert!(favorites.is_empty());
        assert!(!favorites.is_favorite(1));
    }

    #[test]
    fn test_toggle_flips() {
        let mut favorites = FavoriteToggles::new();

        assert!(favorites.toggle(3));
        assert!(favorites.is_favorite(3));

        assert!(!favorites.toggle(3));
        assert!(!favorites.is_favorite(3));
    }

    #[test]
    fn test_ids_are_independent() {
        let mut favorites = FavoriteToggles::new();
        favorites.toggle(1);
        favorites.toggle(2);
        favorites.toggle(1);

        assert!(!favorites.is_favorite(1));
        assert!(favorites.is_favorite(2));
        assert_eq!(favorites.len(), 1);
    }
}
