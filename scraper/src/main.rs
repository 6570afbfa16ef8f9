//! Job Sheet Scraper
//!
//! Scrapes careers pages into CSV job sheets, or writes clearly labelled
//! sample data when asked to.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use common::{clip, sheet, JobRecord, JobStats, COLUMNS};
use job_scraper::fetch::probe;
use job_scraper::sites::{github, microsoft, tech};
use job_scraper::{sample, HttpFetcher, ScrapeConfig};
use std::path::{Path, PathBuf};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "job-scraper")]
#[command(about = "Scrape job listings into a CSV job sheet")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Microsoft Careers search results
    Microsoft {
        /// Maximum result pages to visit
        #[arg(long, default_value_t = 3)]
        pages: usize,

        #[arg(short, long, default_value = microsoft::OUTPUT_FILE)]
        output: PathBuf,
    },

    /// GitHub careers page
    Github {
        #[arg(short, long, default_value = github::OUTPUT_FILE)]
        output: PathBuf,
    },

    /// Remote OK and Stack Overflow job boards
    Tech {
        #[arg(short, long, default_value = tech::OUTPUT_FILE)]
        output: PathBuf,
    },

    /// Write fabricated sample jobs (no network access)
    Sample {
        #[arg(short, long, default_value_t = sample::DEFAULT_COUNT)]
        count: usize,

        #[arg(short, long, default_value = tech::OUTPUT_FILE)]
        output: PathBuf,
    },
}

/// One scrape run: which site, where to probe and where to write.
struct Run<'a> {
    name: &'a str,
    probe_url: &'a str,
    output: &'a Path,
    config: ScrapeConfig,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Microsoft { pages, output } => {
            let run = Run {
                name: microsoft::NAME,
                probe_url: microsoft::PROBE_URL,
                output: &output,
                config: ScrapeConfig {
                    max_pages: pages,
                    debug_dump: Some(PathBuf::from("debug_page.html")),
                    ..ScrapeConfig::default()
                },
            };
            scrape_site(run, microsoft::scrape)
        }
        Commands::Github { output } => {
            let run = Run {
                name: github::NAME,
                probe_url: github::PROBE_URL,
                output: &output,
                config: ScrapeConfig {
                    debug_dump: Some(PathBuf::from("debug_github_page.html")),
                    ..ScrapeConfig::default()
                },
            };
            scrape_site(run, github::scrape)
        }
        Commands::Tech { output } => {
            let run = Run {
                name: tech::NAME,
                probe_url: tech::PROBE_URL,
                output: &output,
                config: ScrapeConfig::default(),
            };
            scrape_site(run, tech::scrape)
        }
        Commands::Sample { count, output } => {
            write_sample(count, &output);
            Ok(())
        }
    }
}

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn scrape_site(run: Run<'_>, scrape: fn(&HttpFetcher, &ScrapeConfig) -> Vec<JobRecord>) -> Result<()> {
    banner(&format!("{} Job Scraper", run.name));

    let fetcher = HttpFetcher::new().context("failed to build HTTP client")?;

    println!("🔍 Testing connection...");
    if let Err(e) = probe(&fetcher, run.probe_url, run.config.detail_timeout) {
        println!("❌ Network error: {}", e);
        println!("Please check your internet connection and try again.");
        return Ok(());
    }
    println!("✓ Internet connection OK");

    println!("\n🚀 Starting job scraping...");
    let jobs = scrape(&fetcher, &run.config);

    if jobs.is_empty() {
        println!("❌ No jobs were scraped. Please check the website structure.");
        println!("   To see the sheet format, run: job-scraper sample");
        return Ok(());
    }

    if save_and_report(&jobs, run.output) {
        preview(&jobs, 3);
    }
    Ok(())
}

fn write_sample(count: usize, output: &Path) {
    banner("Sample Job Sheet");
    println!("⚠️  Writing {} fabricated jobs. These are not real listings.", count);

    let jobs = sample::generate(&mut rand::thread_rng(), count);
    if save_and_report(&jobs, output) {
        preview(&jobs, 5);
        println!("Columns: {}", COLUMNS.join(", "));
    }
}

/// Writes the sheet and prints fill statistics. Returns whether anything
/// was written.
fn save_and_report(jobs: &[JobRecord], output: &Path) -> bool {
    match sheet::write_jobs(output, jobs) {
        Ok(0) => {
            println!("No jobs to save!");
            false
        }
        Ok(written) => {
            println!("\n💾 Successfully saved {} jobs to {}", written, output.display());

            let stats = JobStats::from_records(jobs);
            println!("\n📊 Summary:");
            println!("- Total jobs: {}", stats.total);
            println!("- Jobs with experience info: {}", stats.with_experience);
            println!("- Jobs with skills info: {}", stats.with_skills);
            println!("- Jobs with descriptions: {}", stats.with_summary);
            true
        }
        Err(e) => {
            error!("error saving job sheet: {}", e);
            false
        }
    }
}

fn preview(jobs: &[JobRecord], count: usize) {
    println!("\n📋 Sample of jobs:");
    println!("{}", "-".repeat(50));
    for (i, job) in jobs.iter().take(count).enumerate() {
        println!("{}. {}", i + 1, job.title);
        println!("   Location: {}", job.location);
        if job.skills.is_empty() {
            println!("   Skills: Not specified");
        } else {
            println!("   Skills: {}", clip(&job.skills, 50));
        }
        println!("   Experience: {}", job.experience);
        if job.url.is_empty() {
            println!("   URL: Not available");
        } else {
            println!("   URL: {}", clip(&job.url, 60));
        }
        println!();
    }
}
