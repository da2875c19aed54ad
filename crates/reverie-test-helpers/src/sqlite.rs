use crate::TestDb;
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

pub struct SqliteDb {
    // Removed together with the database file on drop
    #[allow(dead_code)]
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("reverie-test-sqlite")?;
        let path = temp_dir.path().join("journal.sqlite");
        let path = path
            .to_str()
            .ok_or(std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?;
        let uri = format!("sqlite://{path}?mode=rwc");

        tracing::info!(uri = ?uri, "return sqlite db uri");
        Ok(Self { temp_dir, uri })
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_uri_points_into_temp_dir() {
        let db = SqliteDb::new().unwrap();
        let uri = db.db_uri().into_owned();
        assert!(uri.starts_with("sqlite://"));
        assert!(uri.ends_with("journal.sqlite?mode=rwc"));
        let dir = db.temp_dir.path().to_path_buf();
        drop(db);
        assert!(!dir.exists());
    }
}
