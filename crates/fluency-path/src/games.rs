//! Category → game lookup
//!
//! The engine only emits an opaque game id; resolving it to a playable game
//! is the caller's business.

/// Game used for any category without a dedicated entry
pub const DEFAULT_GAME: &str = "racing-bears";

/// Categories with a dedicated game, paired with that game's id
pub const CATEGORY_GAMES: [(&str, &str); 5] = [
    ("add-plus-minus-1-2", "racing-bears"),
    ("add-doubles", "doubles-bingo"),
    ("add-combinations-10", "sum-war"),
    ("mult-2-5-10", "trios"),
    ("mult-squares", "three-dice-take"),
];

/// Select the game id for a fact category
///
/// Looks the category up in [`CATEGORY_GAMES`]; anything else gets
/// [`DEFAULT_GAME`].
#[must_use]
pub fn game_for_category(category_id: &str) -> &'static str {
    CATEGORY_GAMES
        .iter()
        .find(|(category, _)| *category == category_id)
        .map_or(DEFAULT_GAME, |&(_, game)| game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_categories() {
        for (category, game) in CATEGORY_GAMES {
            assert_eq!(game_for_category(category), game, "category {category}");
        }
    }

    #[test]
    fn table_has_one_entry_per_category() {
        let mut categories: Vec<_> = CATEGORY_GAMES.iter().map(|(c, _)| *c).collect();
        categories.sort_unstable();
        categories.dedup();
        assert_eq!(categories.len(), CATEGORY_GAMES.len());
        assert_eq!(game_for_category("add-plus-minus-1-2"), "racing-bears");
        assert_eq!(game_for_category("mult-2-5-10"), "trios");
    }

    #[test]
    fn unmapped_category_falls_back() {
        assert_eq!(game_for_category("add-10-plus"), DEFAULT_GAME);
        assert_eq!(game_for_category("mult-0-1"), DEFAULT_GAME);
        assert_eq!(game_for_category(""), DEFAULT_GAME);
    }
}
