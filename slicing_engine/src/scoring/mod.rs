//! Scoring - turns a submitted attempt into a score, a star rating and achievements.
//!
//! Scoring is a pure function of the level, the authored stories, the elapsed time and
//! the hint count. It never touches progress; the session merges the outcome afterwards.

mod validation;

pub use validation::*;

use serde::{Deserialize, Serialize};
use slicing_catalog::{Achievement, Level, LevelId};
use std::time::Duration;
use tracing::debug;

use crate::session::CreatedStory;

/// Tunable constants of the scoring formula. `Default` is the shipped game balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Points per story that passed validation.
    pub points_per_story: u32,

    /// Share of expected stories that must be matched to earn the level's bonus.
    pub pattern_bonus_ratio: f64,

    /// Awarded when no hint was requested for the level.
    pub no_hints_bonus: u32,

    /// Awarded when the attempt finished under `speed_limit_secs`.
    pub speed_bonus: u32,
    pub speed_limit_secs: u64,

    /// Minimum share of matched stories for 3, 2 and 1 stars.
    pub three_star_ratio: f64,
    pub two_star_ratio: f64,
    pub one_star_ratio: f64,

    /// Share of matched stories required by the no-hints and speed achievements.
    pub achievement_ratio: f64,

    /// The combined level whose completion grants spidr-supreme.
    pub combined_level: LevelId,
    pub combined_level_min_stars: u8,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_per_story: 50,
            pattern_bonus_ratio: 0.75,
            no_hints_bonus: 200,
            speed_bonus: 100,
            speed_limit_secs: 120,
            three_star_ratio: 0.90,
            two_star_ratio: 0.70,
            one_star_ratio: 0.50,
            achievement_ratio: 0.5,
            combined_level: LevelId(7),
            combined_level_min_stars: 2,
        }
    }
}

impl ScoringRules {
    pub fn speed_limit(&self) -> Duration {
        Duration::from_secs(self.speed_limit_secs)
    }

    /// `correct >= ratio * total`, compared as floating point like the ratios themselves.
    fn reaches(correct: usize, total: usize, ratio: f64) -> bool {
        correct as f64 >= total as f64 * ratio
    }
}

/// Points earned by one attempt, by source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base_points: u32,
    pub pattern_bonus: u32,
    pub no_hints_bonus: u32,
    pub speed_bonus: u32,
}

impl ScoreBreakdown {
    /// Sum of all sources, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.base_points
            .saturating_add(self.pattern_bonus)
            .saturating_add(self.no_hints_bonus)
            .saturating_add(self.speed_bonus)
    }
}

/// Everything scoring needs to know about one attempt.
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    pub level: &'a Level,
    pub stories: &'a [CreatedStory],
    pub elapsed: Duration,
    /// Hint requests recorded for the level at submission time.
    pub hints_used: u32,
}

/// The scored attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    /// The submitted stories, annotated with verdict and feedback.
    pub stories: Vec<CreatedStory>,
    pub correct_count: usize,
    pub total_expected: usize,
    pub breakdown: ScoreBreakdown,
    pub stars: u8,
    /// Achievements whose conditions this attempt met, whether or not already held.
    pub achievements: Vec<Achievement>,
    pub bonus_no_hints: bool,
    pub bonus_speed: bool,
}

impl SubmissionOutcome {
    pub fn score(&self) -> u32 {
        self.breakdown.total()
    }

    /// Matched share of expected stories, 0.0 when the level expects none.
    pub fn percentage(&self) -> f64 {
        ratio(self.correct_count, self.total_expected)
    }
}

fn ratio(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    }
}

/// Stars for a matched share of expected stories.
pub fn star_rating(correct: usize, total: usize, rules: &ScoringRules) -> u8 {
    let percentage = ratio(correct, total);
    if percentage >= rules.three_star_ratio {
        3
    } else if percentage >= rules.two_star_ratio {
        2
    } else if percentage >= rules.one_star_ratio {
        1
    } else {
        0
    }
}

/// Achievement conditions met by an attempt. Each condition is checked independently.
///
/// crud-master and workflow-wizard have no rule and are never returned.
pub fn evaluate_achievements(
    level: LevelId,
    correct: usize,
    total: usize,
    stars: u8,
    hints_used: u32,
    fast: bool,
    rules: &ScoringRules,
) -> Vec<Achievement> {
    let mut earned = Vec::new();
    let half_done = ScoringRules::reaches(correct, total, rules.achievement_ratio);

    if correct > 0 {
        earned.push(Achievement::FirstSlice);
    }
    if stars == 3 {
        earned.push(Achievement::PerfectScore);
    }
    if hints_used == 0 && half_done {
        earned.push(Achievement::NoHints);
    }
    if fast && half_done {
        earned.push(Achievement::SpeedDemon);
    }
    if level == rules.combined_level && stars >= rules.combined_level_min_stars {
        earned.push(Achievement::SpidrSupreme);
    }
    earned
}

/// Score one attempt.
pub fn score_submission(submission: Submission<'_>, rules: &ScoringRules) -> SubmissionOutcome {
    let level = submission.level;
    let total_expected = level.expected_count();
    let (stories, correct_count) = validate_stories(submission.stories, &level.expected_stories);

    let bonus_no_hints = submission.hints_used == 0;
    let bonus_speed = submission.elapsed < rules.speed_limit();
    let pattern_complete =
        ScoringRules::reaches(correct_count, total_expected, rules.pattern_bonus_ratio);

    let breakdown = ScoreBreakdown {
        base_points: u32::try_from(correct_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(rules.points_per_story),
        pattern_bonus: if pattern_complete {
            level.bonus_points
        } else {
            0
        },
        no_hints_bonus: if bonus_no_hints { rules.no_hints_bonus } else { 0 },
        speed_bonus: if bonus_speed { rules.speed_bonus } else { 0 },
    };

    let stars = star_rating(correct_count, total_expected, rules);
    let achievements = evaluate_achievements(
        level.id,
        correct_count,
        total_expected,
        stars,
        submission.hints_used,
        bonus_speed,
        rules,
    );

    debug!(
        target: "scoring",
        level = %level.id,
        correct = correct_count,
        expected = total_expected,
        score = breakdown.total(),
        stars,
        "Scored submission"
    );

    SubmissionOutcome {
        stories,
        correct_count,
        total_expected,
        breakdown,
        stars,
        achievements,
        bonus_no_hints,
        bonus_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StoryDraft;
    use slicing_catalog::Catalog;

    fn stories(drafts: &[(&str, &str, &str)]) -> Vec<CreatedStory> {
        drafts
            .iter()
            .map(|(r, a, b)| CreatedStory::from_draft(StoryDraft::new(*r, *a, *b)))
            .collect()
    }

    fn level_one_perfect() -> Vec<CreatedStory> {
        stories(&[
            ("administrador", "crear nuevos usuarios", "dar acceso"),
            ("administrador", "ver la lista de usuarios", "conocer accesos"),
            ("administrador", "editar datos de usuarios", "mantener datos"),
            ("administrador", "eliminar usuarios", "revocar accesos"),
        ])
    }

    #[test]
    fn test_star_thresholds() {
        let rules = ScoringRules::default();
        assert_eq!(star_rating(4, 4, &rules), 3);
        assert_eq!(star_rating(9, 10, &rules), 3);
        assert_eq!(star_rating(3, 4, &rules), 2);
        assert_eq!(star_rating(7, 10, &rules), 2);
        assert_eq!(star_rating(2, 4, &rules), 1);
        assert_eq!(star_rating(1, 4, &rules), 0);
        assert_eq!(star_rating(0, 4, &rules), 0);
        assert_eq!(star_rating(0, 0, &rules), 0);
    }

    #[test]
    fn test_perfect_submission() {
        let catalog = Catalog::builtin();
        let level = catalog.level(LevelId(1)).unwrap();
        let submitted = level_one_perfect();
        let outcome = score_submission(
            Submission {
                level,
                stories: &submitted,
                elapsed: Duration::from_secs(60),
                hints_used: 0,
            },
            &ScoringRules::default(),
        );

        assert_eq!(outcome.correct_count, 4);
        assert_eq!(outcome.percentage(), 1.0);
        assert_eq!(outcome.stars, 3);
        assert_eq!(outcome.breakdown.base_points, 200);
        assert_eq!(outcome.breakdown.pattern_bonus, 100);
        assert_eq!(outcome.breakdown.no_hints_bonus, 200);
        assert_eq!(outcome.breakdown.speed_bonus, 100);
        assert_eq!(outcome.score(), 600);
        assert_eq!(
            outcome.achievements,
            vec![
                Achievement::FirstSlice,
                Achievement::PerfectScore,
                Achievement::NoHints,
                Achievement::SpeedDemon,
            ]
        );
    }

    #[test]
    fn test_empty_submission() {
        let catalog = Catalog::builtin();
        let level = catalog.level(LevelId(1)).unwrap();
        let outcome = score_submission(
            Submission {
                level,
                stories: &[],
                elapsed: Duration::from_secs(200),
                hints_used: 0,
            },
            &ScoringRules::default(),
        );

        assert_eq!(outcome.correct_count, 0);
        assert_eq!(outcome.stars, 0);
        assert_eq!(outcome.breakdown.base_points, 0);
        assert_eq!(outcome.breakdown.pattern_bonus, 0);
        // The no-hints bonus does not depend on matched stories.
        assert_eq!(outcome.score(), 200);
        assert!(outcome.achievements.is_empty());
        assert!(outcome.stories.is_empty());
    }

    #[test]
    fn test_single_slow_story_with_hint() {
        let catalog = Catalog::builtin();
        let level = catalog.level(LevelId(1)).unwrap();
        let submitted = stories(&[("administrador", "crear nuevos usuarios", "dar acceso")]);
        let outcome = score_submission(
            Submission {
                level,
                stories: &submitted,
                elapsed: Duration::from_secs(200),
                hints_used: 1,
            },
            &ScoringRules::default(),
        );

        assert_eq!(outcome.correct_count, 1);
        assert_eq!(outcome.breakdown, ScoreBreakdown { base_points: 50, ..Default::default() });
        assert_eq!(outcome.score(), 50);
        assert_eq!(outcome.stars, 0);
        assert!(!outcome.bonus_no_hints);
        assert!(!outcome.bonus_speed);
        assert_eq!(outcome.achievements, vec![Achievement::FirstSlice]);
    }

    #[test]
    fn test_pattern_bonus_at_three_quarters() {
        let catalog = Catalog::builtin();
        let level = catalog.level(LevelId(2)).unwrap();
        let submitted = stories(&[
            ("comprador", "añadir productos al carrito", "elegir"),
            ("comprador", "ingresar datos de envío", "recibir"),
            ("comprador", "confirmar pedido", "finalizar"),
        ]);
        let outcome = score_submission(
            Submission {
                level,
                stories: &submitted,
                elapsed: Duration::from_secs(120),
                hints_used: 2,
            },
            &ScoringRules::default(),
        );

        assert_eq!(outcome.correct_count, 3);
        assert_eq!(outcome.breakdown.pattern_bonus, 150);
        // Exactly at the limit is not fast.
        assert!(!outcome.bonus_speed);
        assert_eq!(outcome.stars, 2);
        assert_eq!(outcome.score(), 300);
    }

    #[test]
    fn test_combined_level_achievements() {
        let catalog = Catalog::builtin();
        let level = catalog.level(LevelId(7)).unwrap();
        let submitted = stories(&[
            ("gerente", "ver un dashboard de ventas", "monitorear"),
            ("gerente", "exportar reportes", "compartir"),
            ("gerente", "filtrar por fecha", "analizar"),
        ]);
        let outcome = score_submission(
            Submission {
                level,
                stories: &submitted,
                elapsed: Duration::from_secs(90),
                hints_used: 0,
            },
            &ScoringRules::default(),
        );

        assert_eq!(outcome.stars, 2);
        assert_eq!(
            outcome.achievements,
            vec![
                Achievement::FirstSlice,
                Achievement::NoHints,
                Achievement::SpeedDemon,
                Achievement::SpidrSupreme,
            ]
        );
    }

    #[test]
    fn test_dormant_achievements_never_awarded() {
        let rules = ScoringRules::default();
        let earned = evaluate_achievements(LevelId(1), 4, 4, 3, 0, true, &rules);
        assert!(!earned.contains(&Achievement::CrudMaster));
        assert!(!earned.contains(&Achievement::WorkflowWizard));
    }

    #[test]
    fn test_rules_from_toml_override() {
        let rules: ScoringRules =
            toml::from_str("points_per_story = 10\nspeed_limit_secs = 30").unwrap();
        assert_eq!(rules.points_per_story, 10);
        assert_eq!(rules.speed_limit(), Duration::from_secs(30));
        assert_eq!(rules.no_hints_bonus, 200);
    }

    #[test]
    fn test_huge_configured_points_saturate() {
        let rules = ScoringRules {
            points_per_story: u32::MAX,
            ..ScoringRules::default()
        };
        let catalog = Catalog::builtin();
        let level = catalog.level(LevelId(1)).unwrap();
        let submitted = level_one_perfect();
        let outcome = score_submission(
            Submission {
                level,
                stories: &submitted,
                elapsed: Duration::from_secs(60),
                hints_used: 0,
            },
            &rules,
        );

        assert_eq!(outcome.correct_count, 4);
        assert_eq!(outcome.breakdown.base_points, u32::MAX);
        assert_eq!(outcome.breakdown.pattern_bonus, 100);
        assert_eq!(outcome.score(), u32::MAX);
    }
}
