// ABOUTME: Command-line evaluation runner generating and scoring plans for reference scenarios
// ABOUTME: Prints per-scenario results, optionally writes a JSON summary, exits 1 on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coachforge Evaluation Binary
//!
//! ```text
//! coachforge-eval [--quick] [--test <name>] [--verbose] [--output <file>] [--offline]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use coachforge::agent::PlanOrchestrator;
use coachforge::config::PlannerConfig;
use coachforge::evals::{
    find_scenarios, load_scenarios, EvaluationHarness, EvaluationSummary, ScenarioSuite,
};
use coachforge::llm::provider_from_settings;
use coachforge::logging::LoggingConfig;
use coachforge_intelligence::evaluation::PlanEvaluator;
use tracing::info;

const RULE: &str = "============================================================";
const DEFAULT_PHILOSOPHY: &str = "Focus on movement quality and progressive overload.";
const MAX_PRINTED_RECOMMENDATIONS: usize = 5;

#[derive(Parser)]
#[command(name = "coachforge-eval")]
#[command(about = "Generate training plans for reference clients and score them")]
struct Args {
    /// Run the quick suite only
    #[arg(long)]
    quick: bool,

    /// Run scenarios whose name contains this text
    #[arg(short, long)]
    test: Option<String>,

    /// Print per-scenario details and info-level logs
    #[arg(short, long)]
    verbose: bool,

    /// Write the JSON summary to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Ignore any configured API key and use the offline model
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let logging = if args.verbose {
        LoggingConfig::from_env()
    } else {
        LoggingConfig::quiet()
    };
    logging.init()?;

    let mut config = PlannerConfig::from_env()?;
    if args.offline {
        config.provider.api_key = None;
    }
    if config.coach_philosophy.is_none() {
        config.coach_philosophy = Some(DEFAULT_PHILOSOPHY.to_owned());
    }

    println!("{RULE}");
    println!("TRAINING PLAN GENERATOR EVALUATION");
    println!("Started: {}", Utc::now().to_rfc3339());
    println!("{RULE}");

    let scenarios = if let Some(filter) = &args.test {
        find_scenarios(filter)?
    } else if args.quick {
        println!("Running quick suite...");
        load_scenarios(ScenarioSuite::Quick)?
    } else {
        let scenarios = load_scenarios(ScenarioSuite::Full)?;
        println!("Running full suite ({} scenarios)...", scenarios.len());
        scenarios
    };

    let model = provider_from_settings(&config.provider)?;
    info!(provider = model.name(), model = model.model(), "Model selected");

    let orchestrator = PlanOrchestrator::new(model, &config);
    let harness = EvaluationHarness::new(
        orchestrator,
        PlanEvaluator::with_config(config.scoring.clone()),
    );
    let summary = harness.run(&scenarios).await;

    if args.verbose {
        print_details(&summary);
    }
    print_summary(&summary);

    if let Some(path) = &args.output {
        summary.write_json(path)?;
        println!("\nResults saved to: {}", path.display());
    }

    if summary.all_passed() {
        println!("\nAll scenarios passed");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\n{} scenario(s) failed", summary.failed);
        Ok(ExitCode::FAILURE)
    }
}

fn print_details(summary: &EvaluationSummary) {
    for report in &summary.results {
        println!("\n{RULE}");
        println!("Scenario: {}", report.name);
        println!("{RULE}");
        println!("Plan: {} ({:?})", report.plan.name, report.plan_source);
        println!("Result: {}", report.summary);
        if !report.recommendations.is_empty() {
            println!("Recommendations:");
            for recommendation in report.recommendations.iter().take(MAX_PRINTED_RECOMMENDATIONS) {
                println!("  - {recommendation}");
            }
        }
    }
}

fn print_summary(summary: &EvaluationSummary) {
    println!("\n{RULE}");
    println!("FINAL RESULTS");
    println!("{RULE}");
    println!("Total Scenarios: {}", summary.total_tests);
    println!("Passed: {}", summary.passed);
    println!("Failed: {}", summary.failed);
    println!("Average Score: {:.1}%", summary.average_score * 100.0);
    println!("\nScenario Results:");
    for report in &summary.results {
        let status = if report.passed { "PASS" } else { "FAIL" };
        println!("  [{status}] {}: {:.1}%", report.name, report.score * 100.0);
    }
}
