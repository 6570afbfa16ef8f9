use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or writing a job sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sheet {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("sheet not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl SheetError {
    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
