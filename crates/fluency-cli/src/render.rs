//! Text rendering for command output

use fluency_core::{FactCategory, Game};
use fluency_path::{Activity, LearningPath};
use std::fmt;

/// Human-readable learning path report
#[derive(Debug)]
pub struct PathReport<'a>(pub &'a LearningPath);

impl fmt::Display for PathReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.0;
        let scores = &path.overall_progress;

        writeln!(f, "Learning Path: {}", path.student_id)?;
        writeln!(f, "Generated: {}", path.generated_at.format("%Y-%m-%d %H:%M UTC"))?;
        writeln!(f, "Phase: {}", path.current_phase)?;
        writeln!(
            f,
            "Accuracy {}% | Efficiency {}% | Flexibility {}% | Strategy Use {}%",
            scores.accuracy, scores.efficiency, scores.flexibility, scores.strategy_use
        )?;

        write_list(f, "Strengths", &path.strengths)?;
        write_list(f, "Growth Areas", &path.growth_areas)?;

        writeln!(f)?;
        writeln!(f, "Recommendations:")?;
        if path.recommendations.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (i, rec) in path.recommendations.iter().enumerate() {
            writeln!(
                f,
                "  {}. [{}] {} ({} min)",
                i + 1,
                rec.priority,
                rec.title,
                rec.estimated_time
            )?;
            writeln!(f, "     {}", rec.description)?;
            for activity in &rec.suggested_activities {
                write_activity(f, activity)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Milestones:")?;
        if path.milestones.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for milestone in &path.milestones {
            writeln!(
                f,
                "  - {} by {} ({}% accuracy)",
                milestone.title,
                milestone.target_date.format("%Y-%m-%d"),
                milestone.required_accuracy
            )?;
        }
        Ok(())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{heading}:")?;
    if items.is_empty() {
        return writeln!(f, "  (none)");
    }
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

fn write_activity(f: &mut fmt::Formatter<'_>, activity: &Activity) -> fmt::Result {
    match &activity.game_id {
        Some(game) => writeln!(
            f,
            "     * {} ({} min, game: {game})",
            activity.name, activity.duration
        ),
        None => writeln!(f, "     * {} ({} min)", activity.name, activity.duration),
    }
}

/// One line per category
#[derive(Debug)]
pub struct CategoryList<'a>(pub &'a [&'a FactCategory]);

impl fmt::Display for CategoryList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in self.0 {
            writeln!(
                f,
                "{:<22} {:<16} {:<14} {}",
                category.id,
                category.operation,
                category.phase,
                category.name
            )?;
        }
        Ok(())
    }
}

/// One line per game
#[derive(Debug)]
pub struct GameList<'a>(pub &'a [&'a Game]);

impl fmt::Display for GameList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for game in self.0 {
            writeln!(f, "{} {:<16} {}", game.emoji, game.id, game.description)?;
        }
        Ok(())
    }
}
