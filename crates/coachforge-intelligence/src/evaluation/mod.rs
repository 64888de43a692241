// ABOUTME: Plan evaluator scoring a finished plan against a client scenario
// ABOUTME: Seven weighted criteria with safety gating, grade summary, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Evaluator
//!
//! `PlanEvaluator::evaluate` is a pure function of `(plan, scenario)`: every
//! collection it walks is ordered, so identical inputs produce identical
//! results. Absent plan fields count as empty or zero, which means every
//! pair yields a result.
//!
//! A safety failure fails the evaluation regardless of the weighted score.

mod config;

pub use config::{grade_for, CriterionPolicy, ScoringConfig, GRADE_BOUNDARIES};

use std::collections::BTreeMap;

use coachforge_core::constants::defaults::DAYS_PER_WEEK;
use coachforge_core::constants::screen::MAX_SUB_SCORE;
use coachforge_core::models::{
    Criterion, CriterionResult, EvaluationResult, ExperienceLevel, Plan, Scenario,
    ScreenMovement,
};
use tracing::debug;

/// Markers of exercises too demanding for beginners
const ADVANCED_MARKERS: [&str; 5] = ["weighted", "barbell", "power", "plyometric", "olympic"];

/// Markers that make an otherwise advanced-looking exercise beginner friendly
const BEGINNER_MARKERS: [&str; 5] = ["goblet", "bodyweight", "machine", "band", "dumbbell"];

/// Name fragments that identify overhead or pressing work
const OVERHEAD_MARKERS: [&str; 2] = ["overhead", "press"];

/// Pressing variants tolerated with limited shoulder mobility
const SHOULDER_FRIENDLY_MARKERS: [&str; 2] = ["landmine", "floor"];

/// RPE assumed for a week that prescribes none
const NEUTRAL_RPE: f64 = 7.0;

/// Goal keys and the keywords that show a plan addresses them
const GOAL_KEYWORDS: [(&str, &[&str]); 6] = [
    ("fat_loss", &["circuit", "superset", "conditioning", "cardio", "metabolic"]),
    ("strength", &["squat", "bench", "deadlift", "press", "row"]),
    ("muscle_gain", &["isolation", "hypertrophy", "curl", "extension"]),
    ("mobility", &["stretch", "mobility", "foam", "flexibility"]),
    ("endurance", &["cardio", "run", "bike", "row", "intervals"]),
    ("general_fitness", &["full body", "compound", "functional"]),
];

/// Acceptable weekly sets per muscle group by experience tier
const fn weekly_set_band(experience: ExperienceLevel) -> (u32, u32) {
    match experience {
        ExperienceLevel::Beginner => (8, 14),
        ExperienceLevel::Intermediate => (12, 20),
        ExperienceLevel::Advanced => (16, 28),
    }
}

/// Scores finished plans against scenarios
#[derive(Debug, Clone, Default)]
pub struct PlanEvaluator {
    config: ScoringConfig,
}

impl PlanEvaluator {
    /// Evaluator with the reference calibration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator with a custom calibration
    #[must_use]
    pub const fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Scoring configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a plan against a scenario
    #[must_use]
    pub fn evaluate(&self, plan: &Plan, scenario: &Scenario) -> EvaluationResult {
        let exercises = plan.exercise_names();

        let criterion_results: Vec<CriterionResult> = Criterion::ALL
            .iter()
            .map(|criterion| match criterion {
                Criterion::Safety => self.evaluate_safety(&exercises, scenario),
                Criterion::Appropriateness => self.evaluate_appropriateness(plan, &exercises, scenario),
                Criterion::Progression => self.evaluate_progression(plan),
                Criterion::Volume => self.evaluate_volume(plan, scenario),
                Criterion::ExerciseSelection => self.evaluate_exercise_selection(&exercises, scenario),
                Criterion::Structure => self.evaluate_structure(plan, scenario),
                Criterion::GoalAlignment => self.evaluate_goal_alignment(plan, &exercises, scenario),
            })
            .collect();

        let overall_score: f64 = criterion_results
            .iter()
            .map(|result| result.score * self.config.policy(result.criterion).weight)
            .sum();

        let safety_passed = criterion_results
            .iter()
            .filter(|result| result.criterion == Criterion::Safety)
            .all(|result| result.passed);
        let overall_passed = overall_score >= self.config.overall_pass_threshold && safety_passed;

        let mut recommendations: Vec<String> = Vec::new();
        for result in &criterion_results {
            if result.passed && result.score >= self.config.recommendation_threshold {
                continue;
            }
            for issue in &result.issues {
                if !recommendations.contains(issue) {
                    recommendations.push(issue.clone());
                }
            }
        }

        let passed_count = criterion_results.iter().filter(|result| result.passed).count();
        let summary = format!(
            "Grade: {} ({:.1}%) - Passed {passed_count}/{} criteria",
            grade_for(overall_score),
            overall_score * 100.0,
            criterion_results.len()
        );

        debug!(
            scenario = %scenario.name,
            overall_score,
            overall_passed,
            "Evaluated plan"
        );

        EvaluationResult {
            scenario_name: scenario.name.clone(),
            overall_passed,
            overall_score,
            criterion_results,
            summary,
            recommendations,
        }
    }

    fn penalized(&self, criterion: Criterion, details: String, issues: Vec<String>) -> CriterionResult {
        let policy = self.config.policy(criterion);
        let score = policy.penalized_score(issues.len());
        CriterionResult {
            criterion,
            passed: policy.passes(score),
            score,
            details,
            issues,
        }
    }

    fn evaluate_safety(&self, exercises: &[&str], scenario: &Scenario) -> CriterionResult {
        let mut issues = Vec::new();
        let avoid = &scenario.expected_characteristics.should_avoid;

        for exercise in exercises {
            let lowered = exercise.to_lowercase();
            for term in avoid {
                if lowered.contains(&term.to_lowercase()) {
                    issues.push(format!(
                        "Contraindicated exercise found: {exercise} (should avoid: {term})"
                    ));
                }
            }
        }

        let shoulder = scenario
            .assessment
            .fms_scores
            .score(ScreenMovement::ShoulderMobility);
        if shoulder < MAX_SUB_SCORE {
            for exercise in exercises {
                let lowered = exercise.to_lowercase();
                let overhead = OVERHEAD_MARKERS.iter().any(|marker| lowered.contains(marker));
                let tolerated = SHOULDER_FRIENDLY_MARKERS
                    .iter()
                    .any(|marker| lowered.contains(marker));
                if overhead && !tolerated {
                    issues.push(format!(
                        "Overhead movement with shoulder mobility limitation: {exercise}"
                    ));
                }
            }
        }

        let details = format!("Found {} safety concerns", issues.len());
        self.penalized(Criterion::Safety, details, issues)
    }

    fn evaluate_appropriateness(
        &self,
        plan: &Plan,
        exercises: &[&str],
        scenario: &Scenario,
    ) -> CriterionResult {
        let mut issues = Vec::new();

        if scenario.assessment.experience() == ExperienceLevel::Beginner {
            for exercise in exercises {
                let lowered = exercise.to_lowercase();
                let advanced = ADVANCED_MARKERS.iter().any(|marker| lowered.contains(marker));
                let beginner = BEGINNER_MARKERS.iter().any(|marker| lowered.contains(marker));
                if advanced && !beginner {
                    issues.push(format!("Advanced exercise for beginner: {exercise}"));
                }
            }
        }

        let [low, high] = scenario.expected_characteristics.rpe_range;
        for exercise in plan.workout_days.iter().flat_map(|day| &day.exercises) {
            let Some(rpe) = exercise.rpe else { continue };
            if rpe < low || rpe > high {
                let name = if exercise.exercise_name.is_empty() {
                    "exercise"
                } else {
                    exercise.exercise_name.as_str()
                };
                issues.push(format!(
                    "RPE {rpe} outside expected range [{low}, {high}] for {name}"
                ));
            }
        }

        let details = format!("Appropriateness check found {} issues", issues.len());
        self.penalized(Criterion::Appropriateness, details, issues)
    }

    fn evaluate_progression(&self, plan: &Plan) -> CriterionResult {
        let mut issues = Vec::new();

        if plan.distinct_weeks().len() >= self.config.expected_weeks {
            let week_one = mean_rpe(plan, 1);
            let week_three = mean_rpe(plan, 3);
            if week_three < week_one {
                issues.push("Week 3 intensity lower than Week 1 (should progress)".to_owned());
            }
        }

        let details = format!("Progression check found {} issues", issues.len());
        self.penalized(Criterion::Progression, details, issues)
    }

    fn evaluate_volume(&self, plan: &Plan, scenario: &Scenario) -> CriterionResult {
        let mut issues = Vec::new();
        let (min_sets, max_sets) = weekly_set_band(scenario.assessment.experience());

        let mut weekly_sets: BTreeMap<u32, u32> = BTreeMap::new();
        for day in &plan.workout_days {
            let day_sets: u32 = day
                .exercises
                .iter()
                .map(|exercise| exercise.sets.unwrap_or(0))
                .sum();
            *weekly_sets.entry(day.week_number).or_insert(0) += day_sets;
        }

        for (week, total) in weekly_sets {
            if total < min_sets * 2 {
                issues.push(format!("Week {week} volume may be too low ({total} total sets)"));
            } else if total > max_sets * 3 {
                issues.push(format!("Week {week} volume may be too high ({total} total sets)"));
            }
        }

        let details = format!("Volume check found {} issues", issues.len());
        self.penalized(Criterion::Volume, details, issues)
    }

    fn evaluate_exercise_selection(&self, exercises: &[&str], scenario: &Scenario) -> CriterionResult {
        let required = &scenario.expected_characteristics.should_include;
        let lowered: Vec<String> = exercises.iter().map(|name| name.to_lowercase()).collect();

        let issues: Vec<String> = required
            .iter()
            .filter(|term| {
                let term = term.to_lowercase();
                !lowered.iter().any(|name| name.contains(&term))
            })
            .map(|term| format!("Missing expected exercise/pattern: {term}"))
            .collect();

        let found = required.len() - issues.len();
        let score = if required.is_empty() {
            1.0
        } else {
            found as f64 / required.len() as f64
        };
        let policy = self.config.policy(Criterion::ExerciseSelection);

        CriterionResult {
            criterion: Criterion::ExerciseSelection,
            passed: policy.passes(score),
            score,
            details: format!("Found {found}/{} expected exercises", required.len()),
            issues,
        }
    }

    fn evaluate_structure(&self, plan: &Plan, scenario: &Scenario) -> CriterionResult {
        let mut issues = Vec::new();
        let expected_weeks = self.config.expected_weeks;
        let expected_days = usize::from(
            scenario
                .assessment
                .availability
                .days_per_week
                .unwrap_or(DAYS_PER_WEEK),
        );

        let weeks = plan.distinct_weeks();
        if weeks.len() < expected_weeks {
            issues.push(format!(
                "Only {} weeks found, expected {expected_weeks}",
                weeks.len()
            ));
        }

        for week in &weeks {
            let count = plan.days_in_week(*week).count();
            if count < expected_days {
                issues.push(format!(
                    "Week {week} has {count} days, expected {expected_days}"
                ));
            }
        }

        for day in &plan.workout_days {
            let name = if day.name.is_empty() { "workout" } else { day.name.as_str() };
            if day.focus.is_empty() {
                issues.push(format!("Missing focus for {name}"));
            }
            if day.exercises.is_empty() {
                issues.push(format!("No exercises in {name}"));
            }
        }

        let details = format!("Structure check found {} issues", issues.len());
        self.penalized(Criterion::Structure, details, issues)
    }

    fn evaluate_goal_alignment(
        &self,
        plan: &Plan,
        exercises: &[&str],
        scenario: &Scenario,
    ) -> CriterionResult {
        let lowered: Vec<String> = exercises.iter().map(|name| name.to_lowercase()).collect();
        let mut plan_text: Option<String> = None;
        let mut issues = Vec::new();

        for goal in &scenario.assessment.fitness_goals.priority_focus {
            let Some((_, keywords)) = GOAL_KEYWORDS.iter().find(|(key, _)| *key == goal.as_str()) else {
                continue;
            };

            let in_exercises = lowered
                .iter()
                .any(|name| keywords.iter().any(|keyword| name.contains(keyword)));
            let addressed = in_exercises || {
                let text = plan_text.get_or_insert_with(|| {
                    serde_json::to_string(plan)
                        .unwrap_or_default()
                        .to_lowercase()
                });
                keywords.iter().any(|keyword| text.contains(keyword))
            };

            if !addressed {
                issues.push(format!("Goal '{goal}' not clearly addressed in plan"));
            }
        }

        let details = format!("Goal alignment check found {} issues", issues.len());
        self.penalized(Criterion::GoalAlignment, details, issues)
    }
}

/// Mean RPE of a week; unprescribed exercises and empty weeks count as neutral
fn mean_rpe(plan: &Plan, week: u32) -> f64 {
    let rpes: Vec<f64> = plan
        .days_in_week(week)
        .flat_map(|day| &day.exercises)
        .map(|exercise| exercise.rpe.unwrap_or(NEUTRAL_RPE))
        .collect();
    if rpes.is_empty() {
        NEUTRAL_RPE
    } else {
        rpes.iter().sum::<f64>() / rpes.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use coachforge_core::models::{ExercisePrescription, MovementScreenScores, WorkoutDay};

    use super::*;

    fn day(week: u32, focus: &str, exercises: Vec<ExercisePrescription>) -> WorkoutDay {
        WorkoutDay {
            week_number: week,
            day_of_week: 1,
            name: format!("Week {week} - Monday"),
            focus: focus.to_owned(),
            exercises,
            notes: String::new(),
        }
    }

    fn plan_of(days: Vec<WorkoutDay>) -> Plan {
        Plan {
            workout_days: days,
            ..Plan::default()
        }
    }

    #[test]
    fn test_empty_plan_still_scores() {
        let result = PlanEvaluator::new().evaluate(&Plan::default(), &Scenario::default());
        assert_eq!(result.criterion_results.len(), 7);
        assert!((result.overall_score - 0.99).abs() < 1e-9);
        assert!(result.overall_passed);
        let structure = result.criterion(Criterion::Structure).unwrap();
        assert_eq!(structure.issues, vec!["Only 0 weeks found, expected 4"]);
        assert!(result.summary.starts_with("Grade: "));
    }

    #[test]
    fn test_week_three_regression_is_flagged() {
        let days = (1..=4)
            .map(|week| {
                let rpe = if week == 3 { 6.0 } else { 8.0 };
                day(week, "Full Body", vec![ExercisePrescription::strength("Push-Up", 3, "10", 60, rpe)])
            })
            .collect();
        let result = PlanEvaluator::new().evaluate(&plan_of(days), &Scenario::default());
        let progression = result.criterion(Criterion::Progression).unwrap();
        assert_eq!(
            progression.issues,
            vec!["Week 3 intensity lower than Week 1 (should progress)"]
        );
        assert!((progression.score - 0.75).abs() < 1e-9);
        assert!(progression.passed);
    }

    #[test]
    fn test_unprescribed_cardio_counts_as_neutral_rpe() {
        let days = (1..=4)
            .map(|week| {
                let mut exercises = vec![ExercisePrescription::strength(
                    "Goblet Squat",
                    3,
                    "10",
                    60,
                    if week == 1 { 8.0 } else { 7.8 },
                )];
                if week == 1 {
                    exercises.push(ExercisePrescription::timed("Zone 2 Cardio", 30, 130, "Easy pace"));
                }
                day(week, "Full Body", exercises)
            })
            .collect();
        let result = PlanEvaluator::new().evaluate(&plan_of(days), &Scenario::default());
        assert!(result.criterion(Criterion::Progression).unwrap().issues.is_empty());
    }

    #[test]
    fn test_progression_skipped_for_short_plans() {
        let days = vec![
            day(1, "Full Body", vec![ExercisePrescription::strength("Push-Up", 3, "10", 60, 8.0)]),
            day(3, "Full Body", vec![ExercisePrescription::strength("Push-Up", 3, "10", 60, 5.0)]),
        ];
        let result = PlanEvaluator::new().evaluate(&plan_of(days), &Scenario::default());
        assert!(result.criterion(Criterion::Progression).unwrap().issues.is_empty());
    }

    #[test]
    fn test_beginner_markers_offset_advanced_markers() {
        let mut scenario = Scenario::default();
        scenario.assessment.exercise_history.experience_level = ExperienceLevel::Beginner;
        let days = vec![day(
            1,
            "Upper Body",
            vec![
                ExercisePrescription::strength("Barbell Row", 3, "10", 60, 7.0),
                ExercisePrescription::strength("Dumbbell Power Clean", 3, "5", 60, 7.0),
            ],
        )];
        let result = PlanEvaluator::new().evaluate(&plan_of(days), &scenario);
        let appropriateness = result.criterion(Criterion::Appropriateness).unwrap();
        assert_eq!(appropriateness.issues, vec!["Advanced exercise for beginner: Barbell Row"]);
    }

    #[test]
    fn test_rpe_outside_band() {
        let mut scenario = Scenario::default();
        scenario.expected_characteristics.rpe_range = [5.0, 7.0];
        let days = vec![day(
            1,
            "Lower Body",
            vec![
                ExercisePrescription::strength("Goblet Squat", 3, "10", 60, 8.5),
                ExercisePrescription::timed("Zone 2 Cardio", 30, 130, "easy"),
            ],
        )];
        let result = PlanEvaluator::new().evaluate(&plan_of(days), &scenario);
        assert_eq!(
            result.criterion(Criterion::Appropriateness).unwrap().issues,
            vec!["RPE 8.5 outside expected range [5, 7] for Goblet Squat"]
        );
    }

    #[test]
    fn test_volume_band_uses_sets_only() {
        let days = vec![
            day(1, "Full Body", vec![ExercisePrescription::strength("Push-Up", 3, "10", 60, 7.0)]),
            day(2, "Full Body", vec![ExercisePrescription::strength("Push-Up", 70, "10", 60, 7.0)]),
        ];
        let result = PlanEvaluator::new().evaluate(&plan_of(days), &Scenario::default());
        assert_eq!(
            result.criterion(Criterion::Volume).unwrap().issues,
            vec![
                "Week 1 volume may be too low (3 total sets)",
                "Week 2 volume may be too high (70 total sets)",
            ]
        );
    }

    #[test]
    fn test_overhead_with_limited_shoulder() {
        let mut scenario = Scenario::default();
        scenario.assessment.fms_scores = MovementScreenScores::new([3, 3, 3, 2, 3, 3, 3]);
        let days = vec![day(
            1,
            "Upper Body",
            vec![
                ExercisePrescription::strength("Dumbbell Shoulder Press", 3, "10", 60, 7.0),
                ExercisePrescription::strength("Dumbbell Floor Press", 3, "10", 60, 7.0),
            ],
        )];
        let result = PlanEvaluator::new().evaluate(&plan_of(days), &scenario);
        let safety = result.criterion(Criterion::Safety).unwrap();
        assert_eq!(
            safety.issues,
            vec!["Overhead movement with shoulder mobility limitation: Dumbbell Shoulder Press"]
        );
        assert!(!safety.passed);
        assert!(!result.overall_passed);
    }

    #[test]
    fn test_recommendations_are_deduplicated() {
        let mut scenario = Scenario::default();
        scenario.expected_characteristics.should_avoid = vec!["squat".into()];
        let days = vec![
            day(1, "Lower Body", vec![ExercisePrescription::strength("Back Squat", 3, "5", 60, 7.0)]),
            day(2, "Lower Body", vec![ExercisePrescription::strength("Back Squat", 3, "5", 60, 7.0)]),
        ];
        let result = PlanEvaluator::new().evaluate(&plan_of(days), &scenario);
        let expected = "Contraindicated exercise found: Back Squat (should avoid: squat)".to_owned();
        assert_eq!(result.criterion(Criterion::Safety).unwrap().issues.len(), 2);
        assert_eq!(
            result
                .recommendations
                .iter()
                .filter(|item| **item == expected)
                .count(),
            1
        );
    }
}
