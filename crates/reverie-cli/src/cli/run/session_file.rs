use anyhow::{Context, Result};
use reverie_model::auth::Session;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a stored session. A missing file means there is none.
pub(crate) async fn load(path: &Path) -> Result<Option<Session>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(error).with_context(|| format!("failed to read {}", path.display())),
    };
    let session = serde_json::from_slice(&bytes).with_context(|| format!("invalid session in {}", path.display()))?;
    Ok(Some(session))
}

/// Writes the session, or removes the file when signed out.
pub(crate) async fn store(path: &Path, session: Option<&Session>) -> Result<()> {
    match session {
        Some(session) => {
            let json = serde_json::to_vec_pretty(session)?;
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => match tokio::fs::remove_file(path).await {
            Err(error) if error.kind() != ErrorKind::NotFound => {
                Err(error).with_context(|| format!("failed to remove {}", path.display()))
            }
            _ => Ok(()),
        },
    }
}
