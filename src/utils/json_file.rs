use std::io;
use std::path::{Path, PathBuf};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use crate::core::library::{CatalogError, CatalogResult};

// Reads a JSON document holding an object keyed by id, keeping document order.
pub async fn load<T: DeserializeOwned>(path: &Path) -> CatalogResult<IndexMap<String, T>> {
    let bytes = tokio::fs::read(path).await.map_err(|err| CatalogError::io(
        format!("failed to read {}: {}", path.display(), err).as_str(), Some(format!("{:?}", err.kind()))))?;
    serde_json::from_slice(&bytes).map_err(|err| CatalogError::serialization(
        format!("malformed document {}: {}", path.display(), err).as_str()))
}

// Replaces the document with `records`. The content is written and fsynced to a
// sibling temp file which is then renamed over the document. The temp file never
// outlives a failed save.
pub async fn save<T: Serialize>(path: &Path, records: &IndexMap<String, T>) -> CatalogResult<()> {
    let content = serde_json::to_vec_pretty(records)?;
    let temp_path = temp_path_for(path);

    if let Err(err) = write_synced(&temp_path, &content).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(CatalogError::io(
            format!("failed to write {}: {}", temp_path.display(), err).as_str(), Some(format!("{:?}", err.kind()))));
    }

    if let Err(err) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(CatalogError::io(
            format!("failed to replace {}: {}", path.display(), err).as_str(), Some(format!("{:?}", err.kind()))));
    }

    // fsync the directory so the rename itself is durable
    if let Ok(dir) = tokio::fs::File::open(parent_dir(path)).await {
        let _ = dir.sync_all().await;
    }
    Ok(())
}

async fn write_synced(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(content).await?;
    file.flush().await?;
    file.sync_all().await
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
