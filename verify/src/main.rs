//! Job Sheet Verifier
//!
//! Re-reads a job sheet written by the scraper and checks that every
//! schema column is present, how full each column is, and what the first
//! records look like.

use anyhow::Result;
use clap::Parser;
use common::sheet::{self, Sheet};
use common::{COLUMNS, SheetError, clip};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_SHEET: &str = "TechCompany_Jobs.csv";
const SAMPLE_RECORDS: usize = 3;
const PREVIEW_CHARS: usize = 50;

#[derive(Parser)]
#[command(name = "verify")]
#[command(about = "Check a job sheet against the fixed column schema")]
#[command(version)]
struct Cli {
    /// Sheet to verify
    #[arg(default_value = DEFAULT_SHEET)]
    file: PathBuf,
}

/// Outcome of verifying one sheet.
#[derive(Debug)]
struct Verification {
    all_columns_present: bool,
    report: String,
}

fn verify(path: &Path) -> Result<Verification> {
    let sheet = sheet::read_sheet(path)?;
    let mut report = String::new();
    render(&mut report, &sheet, path)?;
    Ok(Verification {
        all_columns_present: sheet.missing_columns().is_empty(),
        report,
    })
}

fn render(out: &mut impl fmt::Write, sheet: &Sheet, path: &Path) -> fmt::Result {
    let rule = "=".repeat(60);

    writeln!(out, "{rule}")?;
    writeln!(out, "SHEET VERIFICATION: {}", path.display())?;
    writeln!(out, "{rule}")?;

    writeln!(out, "\n✅ FILE EXISTS: {}", path.display())?;
    writeln!(out, "✅ TOTAL RECORDS: {}", sheet.len())?;
    writeln!(out, "✅ TOTAL COLUMNS: {}", sheet.headers.len())?;

    writeln!(out, "\n📋 COLUMN VERIFICATION:")?;
    for column in COLUMNS {
        if sheet.column(column).is_some() {
            writeln!(out, "  ✅ {column}")?;
        } else {
            writeln!(out, "  ❌ {column} - MISSING")?;
        }
    }
    if sheet.missing_columns().is_empty() {
        writeln!(out, "\n✅ ALL REQUIRED COLUMNS PRESENT")?;
    } else {
        writeln!(out, "\n❌ SOME REQUIRED COLUMNS MISSING")?;
    }

    writeln!(out, "\n📊 DATA QUALITY STATISTICS:")?;
    for column in COLUMNS {
        if let Some(filled) = sheet.filled(column) {
            let percent = if sheet.is_empty() {
                0.0
            } else {
                filled as f64 / sheet.len() as f64 * 100.0
            };
            writeln!(out, "  {column}: {filled}/{} filled ({percent:.1}%)", sheet.len())?;
        }
    }

    writeln!(out, "\n📋 SAMPLE RECORDS (First {SAMPLE_RECORDS}):")?;
    writeln!(out, "{}", "-".repeat(60))?;
    for row in 0..sheet.len().min(SAMPLE_RECORDS) {
        let cell = |name: &str| sheet.value(row, name).unwrap_or_default();
        writeln!(out, "Record {}:", row + 1)?;
        writeln!(out, "  Title: {}", cell("JobTitle"))?;
        writeln!(out, "  Location: {}", cell("Location"))?;
        writeln!(out, "  Experience: {}", cell("ExperienceRequired"))?;
        writeln!(out, "  Skills: {}", clip(cell("SkillsRequired"), PREVIEW_CHARS))?;
        writeln!(out, "  URL: {}", clip(cell("JobURL"), PREVIEW_CHARS))?;
        writeln!(out)?;
    }

    if has_index_column(sheet) {
        writeln!(out, "⚠️  Index column may be present")?;
    } else {
        writeln!(out, "✅ NO INDEX COLUMN IN SHEET")?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "VERIFICATION COMPLETE")?;
    writeln!(out, "{rule}")
}

/// Blank or "Unnamed" headers are what spreadsheet tools emit for a
/// written-out row index.
fn has_index_column(sheet: &Sheet) -> bool {
    sheet
        .headers
        .iter()
        .any(|h| h.trim().is_empty() || h.contains("Unnamed"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match verify(&cli.file) {
        Ok(verification) => {
            print!("{}", verification.report);
            if !verification.all_columns_present {
                error!("{} does not match the job sheet schema", cli.file.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<SheetError>() {
                Some(SheetError::NotFound(path)) => {
                    println!("❌ File {} not found!", path.display());
                }
                _ => println!("❌ Error reading sheet: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::JobRecord;
    use std::fs;
    use tempfile::tempdir;

    fn jobs() -> Vec<JobRecord> {
        vec![
            JobRecord {
                title: "Cloud Architect".into(),
                location: "Denver, CO".into(),
                experience: "10+ years".into(),
                skills: "AWS, CloudFormation, Lambda, S3, EC2, Terraform, Ansible".into(),
                url: "https://careers.example.com/job/1000".into(),
                summary: "Design cloud architecture.".into(),
                ..Default::default()
            },
            JobRecord {
                title: "QA Engineer".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_written_sheet_verifies() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        sheet::write_jobs(&path, &jobs()).unwrap();

        let verification = verify(&path).unwrap();
        assert!(verification.all_columns_present);

        let report = verification.report;
        assert!(report.contains("✅ TOTAL RECORDS: 2"));
        assert!(report.contains("✅ TOTAL COLUMNS: 7"));
        assert!(report.contains("✅ ALL REQUIRED COLUMNS PRESENT"));
        assert!(report.contains("JobTitle: 2/2 filled (100.0%)"));
        assert!(report.contains("Location: 1/2 filled (50.0%)"));
        assert!(report.contains("Salary: 0/2 filled (0.0%)"));
        assert!(report.contains("  Skills: AWS, CloudFormation, Lambda, S3, EC2, Terraform, A..."));
        assert!(report.contains("Record 2:"));
        assert!(report.contains("✅ NO INDEX COLUMN IN SHEET"));
    }

    #[test]
    fn test_missing_columns_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.csv");
        fs::write(&path, ",JobTitle,Location\n0,Dev,Remote\n").unwrap();

        let verification = verify(&path).unwrap();
        assert!(!verification.all_columns_present);
        assert!(verification.report.contains("❌ Salary - MISSING"));
        assert!(verification.report.contains("❌ SOME REQUIRED COLUMNS MISSING"));
        assert!(verification.report.contains("Index column may be present"));
        assert!(!verification.report.contains("Salary: "));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = verify(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SheetError>(),
            Some(SheetError::NotFound(_))
        ));
    }

    #[test]
    fn test_header_only_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, format!("{}\n", COLUMNS.join(","))).unwrap();

        let verification = verify(&path).unwrap();
        assert!(verification.all_columns_present);
        assert!(verification.report.contains("✅ TOTAL RECORDS: 0"));
        assert!(verification.report.contains("JobTitle: 0/0 filled (0.0%)"));
    }

    #[test]
    fn test_render_propagates_writer_errors() {
        struct Refuse;
        impl fmt::Write for Refuse {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let sheet = Sheet {
            headers: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        };
        assert!(render(&mut Refuse, &sheet, Path::new("jobs.csv")).is_err());
    }
}
