//! Album list as delivered by the photo-management service.

use crate::acekey::NamedEntity;
use crate::error::AlbumError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// One album entry. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    #[serde(alias = "name", alias = "displayName")]
    pub album_name: String,
    #[serde(default)]
    pub asset_count: Option<u64>,
}

impl Album {
    pub fn new(id: impl Into<String>, album_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            album_name: album_name.into(),
            asset_count: None,
        }
    }

    pub fn to_entity(&self) -> NamedEntity<String> {
        NamedEntity::new(self.id.clone(), self.album_name.clone())
    }
}

pub fn entities(albums: &[Album]) -> Vec<NamedEntity<String>> {
    albums.iter().map(Album::to_entity).collect()
}

/// Parses a JSON array of albums, keeping the service's order.
pub fn parse_albums(json: &str, origin: &Path) -> Result<Vec<Album>, AlbumError> {
    serde_json::from_str(json).map_err(|e| AlbumError::Parse(origin.to_path_buf(), e.to_string()))
}

/// Whether loading from `path` would wait on a stdin nobody is piping into.
pub fn waits_on_terminal(path: &Path, stdin_is_terminal: bool) -> bool {
    stdin_is_terminal && path == Path::new("-")
}

/// Reads albums from `path`, or from stdin when `path` is `-`.
pub fn load_albums<P: AsRef<Path>>(path: P) -> Result<Vec<Album>, AlbumError> {
    let path = path.as_ref();
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AlbumError::Read(PathBuf::from("<stdin>"), e.to_string()))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| AlbumError::Read(path.to_path_buf(), e.to_string()))?
    };
    let albums = parse_albums(&content, path)?;
    log::info!("loaded {} albums from {}", albums.len(), path.display());
    Ok(albums)
}

#[cfg(test)]
mod albums_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_service_field_names_in_order() {
        let json = r#"[
            {"id": "a1", "albumName": "Comics", "assetCount": 12, "shared": false},
            {"id": "a2", "albumName": "Media - LotR"}
        ]"#;
        let albums = parse_albums(json, Path::new("inline")).unwrap();
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].album_name, "Comics");
        assert_eq!(albums[0].asset_count, Some(12));
        assert_eq!(albums[1].id, "a2");
        assert_eq!(albums[1].asset_count, None);
    }

    #[test]
    fn accepts_plain_name_alias() {
        let albums = parse_albums(r#"[{"id": "x", "name": "Jazz"}]"#, Path::new("inline")).unwrap();
        assert_eq!(albums[0].to_entity(), NamedEntity::new("x".to_string(), "Jazz"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_albums("{not json", Path::new("albums.json")).unwrap_err();
        assert!(matches!(err, AlbumError::Parse(ref p, _) if p == Path::new("albums.json")));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "1", "albumName": "general"}}]"#).unwrap();
        let albums = load_albums(file.path()).unwrap();
        assert_eq!(albums, vec![Album::new("1", "general")]);
    }

    #[test]
    fn only_an_interactive_stdin_source_waits() {
        assert!(waits_on_terminal(Path::new("-"), true));
        assert!(!waits_on_terminal(Path::new("-"), false));
        assert!(!waits_on_terminal(Path::new("albums.json"), true));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_albums(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AlbumError::Read(..)));
    }
}
