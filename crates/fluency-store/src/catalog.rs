//! Seeded fact category and game catalogs
//!
//! Both catalogs are built once and never mutated.

use fluency_core::{
    Difficulty, FactCategory, Game, GameGrouping, GameOperation, Grouping, Operation, Phase,
};

/// Static list of fact categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<FactCategory>,
}

impl CategoryCatalog {
    /// Catalog from an explicit list, keeping its order
    #[inline]
    #[must_use]
    pub fn from_categories(categories: Vec<FactCategory>) -> Self {
        Self { categories }
    }

    /// The seven built-in categories
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_categories(vec![
            category(
                "add-plus-minus-1-2",
                Operation::Addition,
                "+/- 1 or 2",
                "Adding or subtracting 1 or 2",
                &["3+1", "7+2", "9-1", "5-2"],
                Phase::Counting,
            ),
            category(
                "add-doubles",
                Operation::Addition,
                "Doubles",
                "Adding the same number to itself",
                &["2+2", "6+6", "8+8", "9+9"],
                Phase::Counting,
            ),
            category(
                "add-combinations-10",
                Operation::Addition,
                "Combinations of 10",
                "Number pairs that sum to 10",
                &["3+7", "8+2", "5+5", "4+6"],
                Phase::Deriving,
            ),
            category(
                "add-10-plus",
                Operation::Addition,
                "10 + facts",
                "Adding 10 to single digits",
                &["10+3", "10+7", "10+9", "10+5"],
                Phase::Deriving,
            ),
            category(
                "mult-2-5-10",
                Operation::Multiplication,
                "2s, 5s, 10s",
                "Multiplication by 2, 5, and 10",
                &["7×2", "6×5", "8×10", "4×5"],
                Phase::Counting,
            ),
            category(
                "mult-0-1",
                Operation::Multiplication,
                "0s, 1s",
                "Multiplication by 0 and 1",
                &["6×0", "9×1", "1×8", "0×5"],
                Phase::Counting,
            ),
            category(
                "mult-squares",
                Operation::Multiplication,
                "Squares",
                "Multiplying a number by itself",
                &["3×3", "7×7", "9×9", "4×4"],
                Phase::Deriving,
            ),
        ])
    }

    /// All categories in catalog order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[FactCategory] {
        &self.categories
    }

    /// Category by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FactCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Categories practicing one operation
    #[must_use]
    pub fn by_operation(&self, operation: Operation) -> Vec<&FactCategory> {
        self.categories
            .iter()
            .filter(|c| c.operation == operation)
            .collect()
    }

    /// Number of categories
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

// All seeded categories are foundational.
fn category(
    id: &str,
    operation: Operation,
    name: &str,
    description: &str,
    examples: &[&str],
    phase: Phase,
) -> FactCategory {
    FactCategory {
        id: id.to_string(),
        operation,
        grouping: Grouping::Foundational,
        name: name.to_string(),
        description: description.to_string(),
        examples: examples.iter().map(|e| (*e).to_string()).collect(),
        phase,
    }
}

/// Static list of practice games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCatalog {
    games: Vec<Game>,
}

impl GameCatalog {
    /// The six built-in games
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            games: vec![
                game(
                    "racing-bears",
                    "Racing Bears",
                    "Practice +0, +1, +2 facts with racing theme",
                    GameOperation::Addition,
                    GameGrouping::Foundational,
                    &["+0", "+1", "+2"],
                    "🐻",
                    Difficulty::Beginner,
                ),
                game(
                    "doubles-bingo",
                    "Doubles Bingo",
                    "Master doubles facts with bingo gameplay",
                    GameOperation::Addition,
                    GameGrouping::Foundational,
                    &["doubles"],
                    "🎯",
                    Difficulty::Beginner,
                ),
                game(
                    "trios",
                    "Trios",
                    "Practice multiplication facts by making trios",
                    GameOperation::Multiplication,
                    GameGrouping::Foundational,
                    &["×2", "×5", "×10"],
                    "🎲",
                    Difficulty::Intermediate,
                ),
                game(
                    "sum-war",
                    "Sum War",
                    "Battle with addition using derived strategies",
                    GameOperation::Addition,
                    GameGrouping::Derived,
                    &["near doubles", "making ten"],
                    "⚔️",
                    Difficulty::Intermediate,
                ),
                game(
                    "salute",
                    "Salute!",
                    "Practice fact families with missing addends",
                    GameOperation::Mixed,
                    GameGrouping::Derived,
                    &["fact families", "missing addends"],
                    "👋",
                    Difficulty::Intermediate,
                ),
                game(
                    "three-dice-take",
                    "Three Dice Take",
                    "Multi-operation practice with strategic thinking",
                    GameOperation::Mixed,
                    GameGrouping::Advanced,
                    &["all operations"],
                    "🎲",
                    Difficulty::Advanced,
                ),
            ],
        }
    }

    /// All games in catalog order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Game] {
        &self.games
    }

    /// Game by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Games targeting one grouping
    #[must_use]
    pub fn by_grouping(&self, grouping: GameGrouping) -> Vec<&Game> {
        self.games.iter().filter(|g| g.grouping == grouping).collect()
    }
}

impl Default for GameCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[allow(clippy::too_many_arguments)]
fn game(
    id: &str,
    name: &str,
    description: &str,
    operation: GameOperation,
    grouping: GameGrouping,
    target_facts: &[&str],
    emoji: &str,
    difficulty: Difficulty,
) -> Game {
    Game {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        operation,
        grouping,
        target_facts: target_facts.iter().map(|f| (*f).to_string()).collect(),
        emoji: emoji.to_string(),
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_categories() {
        let catalog = CategoryCatalog::seeded();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.all()[0].id, "add-plus-minus-1-2");

        let doubles = catalog.get("add-doubles").unwrap();
        assert_eq!(doubles.name, "Doubles");
        assert_eq!(doubles.examples.len(), 4);
        assert!(catalog.get("div-halves").is_none());
    }

    #[test]
    fn categories_by_operation() {
        let catalog = CategoryCatalog::seeded();
        assert_eq!(catalog.by_operation(Operation::Addition).len(), 4);
        assert_eq!(catalog.by_operation(Operation::Multiplication).len(), 3);
        assert!(catalog.by_operation(Operation::Division).is_empty());
    }

    #[test]
    fn category_ids_are_unique() {
        let catalog = CategoryCatalog::seeded();
        let mut ids: Vec<_> = catalog.all().iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn seeded_games() {
        let games = GameCatalog::seeded();
        assert_eq!(games.all().len(), 6);
        assert_eq!(games.get("sum-war").unwrap().name, "Sum War");
        assert_eq!(games.by_grouping(GameGrouping::Derived).len(), 2);
        assert_eq!(games.by_grouping(GameGrouping::Advanced).len(), 1);
    }
}
