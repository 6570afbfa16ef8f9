//! Job sheet persistence.
//!
//! Sheets are CSV files with a header row equal to [`COLUMNS`]. Every cell
//! is a string; absent values are written as empty cells.

use crate::{COLUMNS, JobRecord, SheetError};
use std::path::Path;
use tracing::{debug, warn};

/// Writes `jobs` to `path`, replacing any existing file.
///
/// An empty slice writes nothing and returns `Ok(0)`.
pub fn write_jobs(path: impl AsRef<Path>, jobs: &[JobRecord]) -> Result<usize, SheetError> {
    let path = path.as_ref();
    if jobs.is_empty() {
        warn!("no jobs to save, skipping {}", path.display());
        return Ok(0);
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| SheetError::csv(path, e))?;
    for job in jobs {
        writer.serialize(job).map_err(|e| SheetError::csv(path, e))?;
    }
    writer.flush().map_err(|e| SheetError::io(path, e))?;

    debug!("wrote {} rows to {}", jobs.len(), path.display());
    Ok(jobs.len())
}

/// Reads a sheet back as typed records. Columns absent from the file are
/// left empty.
pub fn read_jobs(path: impl AsRef<Path>) -> Result<Vec<JobRecord>, SheetError> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    reader
        .deserialize()
        .collect::<Result<Vec<JobRecord>, _>>()
        .map_err(|e| SheetError::csv(path, e))
}

/// Reads a sheet as raw headers and rows, whatever its columns are.
pub fn read_sheet(path: impl AsRef<Path>) -> Result<Sheet, SheetError> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;

    let headers = reader
        .headers()
        .map_err(|e| SheetError::csv(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SheetError::csv(path, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Sheet { headers, rows })
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, SheetError> {
    if !path.exists() {
        return Err(SheetError::NotFound(path.to_path_buf()));
    }
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| SheetError::csv(path, e))
}

/// A sheet read back from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Schema columns that the sheet lacks.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        COLUMNS
            .iter()
            .copied()
            .filter(|name| self.column(name).is_none())
            .collect()
    }

    /// Whether the headers are exactly the schema, in order.
    pub fn has_exact_schema(&self) -> bool {
        self.headers.iter().map(String::as_str).eq(COLUMNS.iter().copied())
    }

    /// Number of non-empty cells in a column, `None` when the column is
    /// absent.
    pub fn filled(&self, name: &str) -> Option<usize> {
        let idx = self.column(name)?;
        Some(
            self.rows
                .iter()
                .filter(|row| row.get(idx).is_some_and(|cell| !cell.is_empty()))
                .count(),
        )
    }

    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column(name)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn job(title: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            location: "Seattle, WA".to_string(),
            skills: "python, sql".to_string(),
            url: format!("https://example.com/{title}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_list_writes_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        assert_eq!(write_jobs(&path, &[]).unwrap(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_round_trip_keeps_rows_and_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        let jobs = vec![job("a"), job("b"), job("c")];

        assert_eq!(write_jobs(&path, &jobs).unwrap(), 3);

        let sheet = read_sheet(&path).unwrap();
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.headers, COLUMNS);
        assert!(sheet.has_exact_schema());
        assert!(sheet.missing_columns().is_empty());

        assert_eq!(read_jobs(&path).unwrap(), jobs);
    }

    #[test]
    fn test_sparse_records_still_have_all_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sparse.csv");
        let jobs = vec![JobRecord {
            title: "Only a title".into(),
            ..Default::default()
        }];
        write_jobs(&path, &jobs).unwrap();

        let sheet = read_sheet(&path).unwrap();
        assert!(sheet.has_exact_schema());
        assert_eq!(sheet.rows[0].len(), COLUMNS.len());
        assert_eq!(sheet.value(0, "Salary"), Some(""));
        assert_eq!(sheet.filled("JobTitle"), Some(1));
        assert_eq!(sheet.filled("Location"), Some(0));
    }

    #[test]
    fn test_cells_with_separators_survive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        let jobs = vec![JobRecord {
            title: "Engineer, \"Platform\"".into(),
            summary: "line one\nline two".into(),
            ..Default::default()
        }];
        write_jobs(&path, &jobs).unwrap();
        assert_eq!(read_jobs(&path).unwrap(), jobs);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_sheet(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, SheetError::NotFound(_)));
    }

    #[test]
    fn test_foreign_sheet_reports_missing_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foreign.csv");
        fs::write(&path, "JobTitle,Location,Extra\nA,B,C\n").unwrap();

        let sheet = read_sheet(&path).unwrap();
        assert!(!sheet.has_exact_schema());
        assert_eq!(
            sheet.missing_columns(),
            vec!["ExperienceRequired", "SkillsRequired", "Salary", "JobURL", "JobDescriptionSummary"]
        );
        assert_eq!(sheet.filled("Salary"), None);

        let jobs = read_jobs(&path).unwrap();
        assert_eq!(jobs[0].title, "A");
        assert_eq!(jobs[0].skills, "");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("jobs.csv");
        assert!(write_jobs(&path, &[job("a")]).is_err());
    }
}
