use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_match::config::Config;
use resume_match::extraction::extract_document;
use resume_match::models::MatchResult;
use resume_match::parsing::RawDocument;
use resume_match::MatchEngine;

#[derive(Debug, Parser)]
#[command(name = "resume-match", version, about = "Extract résumés and job postings, then score how well they match")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the structured record of one résumé.
    Resume { file: PathBuf },
    /// Print the structured record of one job posting.
    Job { file: PathBuf },
    /// Score résumés against one job posting, best match first.
    Match {
        #[arg(long)]
        job: PathBuf,
        #[arg(required = true)]
        resumes: Vec<PathBuf>,
    },
}

/// One ranked line of `match` output.
#[derive(Debug, Serialize)]
struct RankedMatch {
    file: String,
    name: String,
    recommendation: String,
    #[serde(flatten)]
    result: MatchResult,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // stderr keeps stdout clean for JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_match={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-match v{}", env!("CARGO_PKG_VERSION"));

    let engine = MatchEngine::from_config(&config)?;

    match cli.command {
        Command::Resume { file } => {
            let document = load(&file)?;
            print_json(&engine.analyze_resume(document.text()))
        }
        Command::Job { file } => {
            let document = load(&file)?;
            print_json(&engine.analyze_job(document.text()))
        }
        Command::Match { job, resumes } => {
            let job_document = load(&job)?;
            let job = engine.analyze_job(job_document.text());
            info!(resumes = resumes.len(), skills = job.skills.len(), "Matching résumés");

            let mut ranked: Vec<RankedMatch> = resumes
                .par_iter()
                .filter_map(|path| match load(path) {
                    Ok(document) => {
                        let resume = engine.analyze_resume(document.text());
                        let result = engine.match_records(&resume, &job);
                        Some(RankedMatch {
                            file: path.display().to_string(),
                            name: resume.name_or_sentinel().to_string(),
                            recommendation: result.recommendation(),
                            result,
                        })
                    }
                    Err(e) => {
                        error!("Skipping {}: {e:#}", path.display());
                        None
                    }
                })
                .collect();

            ranked.sort_by(|a, b| {
                b.result
                    .overall_score
                    .total_cmp(&a.result.overall_score)
                    .then_with(|| a.file.cmp(&b.file))
            });
            print_json(&ranked)
        }
    }
}

fn load(path: &Path) -> Result<RawDocument> {
    extract_document(path).with_context(|| format!("could not read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
