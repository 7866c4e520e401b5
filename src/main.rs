use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod agegroup;
mod dataset;
mod models;
mod outlook;
mod pipeline;
mod report;
mod trend;

use agegroup::AgeBands;
use pipeline::{AnalysisPipeline, AnalysisResults, SurveyResponse};

#[derive(Parser)]
#[command(name = "consumption-study")]
#[command(
    about = "Alcohol consumption and final grade analysis for secondary school students",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the analysis summary
    Summary {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = 16)]
        beer_wine_age: i32,
        #[arg(long, default_value_t = 18)]
        full_age: i32,
    },
    /// Write the projected records and analysis artifacts as JSON for a host
    /// presentation layer
    Export {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = 16)]
        beer_wine_age: i32,
        #[arg(long, default_value_t = 18)]
        full_age: i32,
        #[arg(long, default_value = "analysis.json")]
        out: PathBuf,
    },
    /// Generate a markdown report, with a grade outlook section when survey
    /// answers are supplied
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = 16)]
        beer_wine_age: i32,
        #[arg(long, default_value_t = 18)]
        full_age: i32,
        #[arg(long)]
        legal_age: bool,
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        weekday: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        weekend: Option<i32>,
        #[arg(long, default_value_t = outlook::DEFAULT_CONSUMPTION_THRESHOLD)]
        threshold: i32,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Estimate a grade outlook from survey answers
    Estimate {
        /// Set if you are of legal drinking age in your country of residence
        #[arg(long)]
        legal_age: bool,
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        weekday: i32,
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        weekend: i32,
        #[arg(long, default_value_t = outlook::DEFAULT_CONSUMPTION_THRESHOLD)]
        threshold: i32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            csv,
            beer_wine_age,
            full_age,
        } => {
            let pipeline = load_pipeline(&csv, beer_wine_age, full_age)?;
            print_summary(&pipeline.compute(None));
        }
        Commands::Export {
            csv,
            beer_wine_age,
            full_age,
            out,
        } => {
            let pipeline = load_pipeline(&csv, beer_wine_age, full_age)?;
            let payload = serde_json::json!({
                "records": pipeline.records(),
                "analysis": pipeline.compute(None),
            });
            std::fs::write(&out, serde_json::to_string_pretty(&payload)?)?;
            println!("Analysis written to {}.", out.display());
        }
        Commands::Report {
            csv,
            beer_wine_age,
            full_age,
            legal_age,
            weekday,
            weekend,
            threshold,
            out,
        } => {
            let pipeline = load_pipeline(&csv, beer_wine_age, full_age)?;
            let survey = match (weekday, weekend) {
                (Some(weekday_consumption), Some(weekend_consumption)) => Some(SurveyResponse {
                    legal_drinking_age: legal_age,
                    weekday_consumption,
                    weekend_consumption,
                    threshold,
                }),
                (None, None) => None,
                _ => anyhow::bail!("--weekday and --weekend must be given together"),
            };
            let report = report::build_report(&pipeline.compute(survey));
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Estimate {
            legal_age,
            weekday,
            weekend,
            threshold,
        } => {
            let outlook = outlook::estimate_outlook(legal_age, weekday, weekend, threshold);
            println!("{}", outlook.age_note);
            println!("{}", outlook.message);
        }
    }

    Ok(())
}

fn load_pipeline(
    csv: &std::path::Path,
    beer_wine_age: i32,
    full_age: i32,
) -> anyhow::Result<AnalysisPipeline> {
    anyhow::ensure!(
        beer_wine_age < full_age,
        "beer-wine-age must be below full-age"
    );
    let bands = AgeBands {
        beer_wine_age,
        full_age,
    };
    AnalysisPipeline::from_csv(csv, bands)
        .with_context(|| format!("failed to load student records from {}", csv.display()))
}

fn print_summary(results: &AnalysisResults) {
    println!("Analyzed {} student records.", results.record_count);

    match &results.trend {
        Some(trend) => println!(
            "Fitted trend over combined consumption: slope {:.3}, intercept {:.3}.",
            trend.model.slope, trend.model.intercept
        ),
        None => println!("No trend available for this dataset."),
    }

    println!("Average final grade by age band:");
    for group in &results.age_groups {
        match group.mean_final_grade {
            Some(mean) => println!(
                "- {}: {:.2} across {} students",
                group.label, mean, group.member_count
            ),
            None => println!("- {}: no data", group.label),
        }
    }
}
