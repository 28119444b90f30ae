//! Activity templates attached to recommendations

use crate::games::game_for_category;
use crate::path::{Activity, ActivityKind};
use fluency_core::FactCategory;

/// Which template to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityFocus {
    /// Struggling category: lesson, guided practice, game
    Intensive,
    /// Advancing category: fluency game, timed practice
    Building,
}

/// Build the activity list for a category
#[must_use]
pub fn activities_for(category: &FactCategory, focus: ActivityFocus) -> Vec<Activity> {
    let game_id = Some(game_for_category(&category.id).to_string());

    match focus {
        ActivityFocus::Intensive => vec![
            Activity {
                kind: ActivityKind::StrategyInstruction,
                name: format!("{} Strategy Lesson", category.name),
                description: format!("Learn key strategies for {}", category.name),
                game_id: None,
                duration: 10,
            },
            Activity {
                kind: ActivityKind::Practice,
                name: "Guided Practice".to_string(),
                description: "Practice with visual supports and prompts".to_string(),
                game_id: None,
                duration: 15,
            },
            Activity {
                kind: ActivityKind::Game,
                name: "Foundation Game".to_string(),
                description: format!("Play games focused on {}", category.name),
                game_id,
                duration: 15,
            },
        ],
        ActivityFocus::Building => vec![
            Activity {
                kind: ActivityKind::Game,
                name: "Fluency Game".to_string(),
                description: format!("Build speed and accuracy with {}", category.name),
                game_id,
                duration: 15,
            },
            Activity {
                kind: ActivityKind::Practice,
                name: "Timed Practice".to_string(),
                description: "Work on efficiency with structured timing".to_string(),
                game_id: None,
                duration: 10,
            },
        ],
    }
}

/// The single activity of the comprehensive self-assessment
#[must_use]
pub fn self_assessment_activity() -> Activity {
    Activity {
        kind: ActivityKind::Assessment,
        name: "Strategy Sorting Assessment".to_string(),
        description: "Sort math facts by how you solve them".to_string(),
        game_id: None,
        duration: 15,
    }
}
