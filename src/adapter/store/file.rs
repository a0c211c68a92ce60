//! File-backed wishlist store.
//!
//! One plain-text file per identity under the wallet directory, one item
//! name per line. Saves go through a temp-file-then-rename so a reader
//! never observes a partially written list.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::domain::Wishlist;
use crate::error::{Error, Result};
use crate::port::WishlistStore;

const WISHLIST_FILE: &str = "wishlist.txt";

/// Wishlist persistence rooted at the local wallet directory.
pub struct FileWishlistStore {
    root: PathBuf,
}

impl FileWishlistStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn file_path(&self, identity: &str) -> PathBuf {
        self.root.join(identity).join(WISHLIST_FILE)
    }

    fn persistence_err(path: &Path, source: std::io::Error) -> Error {
        Error::Persistence {
            path: path.display().to_string(),
            source,
        }
    }

    fn read(path: &Path) -> Result<Wishlist> {
        let content =
            fs::read_to_string(path).map_err(|e| Self::persistence_err(path, e))?;

        Ok(content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }

    fn write_atomic(path: &Path, wishlist: &Wishlist) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Self::persistence_err(parent, e))?;
        }

        let mut content = String::new();
        for name in wishlist.names() {
            content.push_str(name);
            content.push('\n');
        }

        // Write to temp file first for atomicity
        let temp_path = path.with_extension("tmp");
        let mut file =
            fs::File::create(&temp_path).map_err(|e| Self::persistence_err(&temp_path, e))?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            Self::persistence_err(path, e)
        };

        file.write_all(content.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;

        fs::rename(&temp_path, path).map_err(cleanup_and_err)?;

        Ok(())
    }
}

#[async_trait]
impl WishlistStore for FileWishlistStore {
    async fn load(&self, identity: &str) -> Result<Wishlist> {
        let path = self.file_path(identity);

        if !path.exists() {
            Self::write_atomic(&path, &Wishlist::new())?;
            info!(path = %path.display(), "created empty wishlist file");
            return Ok(Wishlist::new());
        }

        let wishlist = Self::read(&path)?;
        info!(
            path = %path.display(),
            items = wishlist.len(),
            "loaded wishlist"
        );
        Ok(wishlist)
    }

    async fn save(&self, identity: &str, wishlist: &Wishlist) -> Result<()> {
        let path = self.file_path(identity);
        Self::write_atomic(&path, wishlist)?;
        info!(path = %path.display(), items = wishlist.len(), "wishlist saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wishlist(names: &[&str]) -> Wishlist {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn test_load_creates_empty_file_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWishlistStore::new(dir.path());

        let loaded = store.load("org1").await.unwrap();
        assert!(loaded.is_empty());
        assert!(dir.path().join("org1").join(WISHLIST_FILE).exists());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWishlistStore::new(dir.path());
        let original = wishlist(&["Widget", "Gadget", "Widget"]);

        store.load("org1").await.unwrap();
        store.save("org1", &original).await.unwrap();

        let loaded = store.load("org1").await.unwrap();
        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_save_is_one_name_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWishlistStore::new(dir.path());

        store.load("org2").await.unwrap();
        store.save("org2", &wishlist(&["Widget", "Gadget"])).await.unwrap();

        let content =
            fs::read_to_string(dir.path().join("org2").join(WISHLIST_FILE)).unwrap();
        assert_eq!(content, "Widget\nGadget\n");
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWishlistStore::new(dir.path());

        store.load("org1").await.unwrap();
        store.save("org1", &wishlist(&["Widget"])).await.unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path().join("org1"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec![WISHLIST_FILE.to_string()]);
    }

    #[tokio::test]
    async fn test_identities_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWishlistStore::new(dir.path());

        store.load("org1").await.unwrap();
        store.load("org2").await.unwrap();
        store.save("org1", &wishlist(&["Widget"])).await.unwrap();

        assert!(store.load("org2").await.unwrap().is_empty());
        assert_eq!(store.load("org1").await.unwrap(), wishlist(&["Widget"]));
    }
}
