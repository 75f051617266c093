use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::LibraryError;
use crate::models::Book;

/// Read the whole collection from `path`. A missing file is a brand new
/// library, not an error, and so is a file with nothing but whitespace in it.
pub fn load(path: &Path) -> Result<Vec<Book>, LibraryError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no library file yet, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(LibraryError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if raw.trim().is_empty() {
        debug!(path = %path.display(), "library file is empty");
        return Ok(Vec::new());
    }

    let books: Vec<Book> = serde_json::from_str(&raw).map_err(|source| LibraryError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = books.len(), "loaded library");
    Ok(books)
}

/// Overwrite `path` with the full collection, creating the parent directory
/// on first save.
pub fn save(path: &Path, books: &[Book]) -> Result<(), LibraryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LibraryError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(books).map_err(LibraryError::Serialize)?;
    fs::write(path, json).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = books.len(), "saved library");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewBook;
    use tempfile::TempDir;

    fn sample() -> Book {
        Book::with_added_date(
            NewBook::new("Dune", "Frank Herbert", 1965, "SF", false),
            "2024-05-01 10:00:00",
        )
    }

    #[test]
    fn missing_file_loads_as_empty_library() {
        let dir = TempDir::new().unwrap();
        let books = load(&dir.path().join("library.json")).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn blank_file_loads_as_empty_library() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "  \n").unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_reported_with_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "{not json").unwrap();

        let err = load(&path).unwrap_err();
        match &err {
            LibraryError::Corrupt { path: reported, .. } => assert_eq!(reported, &path),
            other => panic!("expected corrupt error, got {other:?}"),
        }
        assert!(err.to_string().contains("corrupt data"));
    }

    #[test]
    fn wrong_shape_is_corrupt_too() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, r#"[{"title": "Dune"}]"#).unwrap();
        assert!(matches!(load(&path), Err(LibraryError::Corrupt { .. })));
    }

    #[test]
    fn save_creates_parent_directories_and_writes_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("library.json");
        save(&path, &[sample()]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(load(&path).unwrap(), vec![sample()]);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        save(&path, &[sample(), sample()]).unwrap();
        save(&path, &[]).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }
}
