//! Album catalog: the ordered, read-only list of albums and their tracks.
//!
//! Albums and tracks keep insertion order, which is what "next" and "previous"
//! mean everywhere else. An album with no tracks is a valid entry.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A playable entry of an album
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Track {
    pub name: String,
    pub audio: PathBuf,
}

impl Track {
    pub fn new(name: impl Into<String>, audio: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            audio: audio.into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Album {
    pub title: String,
    pub artist: String,
    /// Artwork is only carried as a reference; the terminal view never decodes it.
    #[serde(default)]
    pub artwork: Option<PathBuf>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        artwork: Option<PathBuf>,
        tracks: Vec<Track>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            artwork,
            tracks,
        }
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    /// Parse a JSON catalog. Relative audio and artwork paths are resolved
    /// against `base_dir`.
    pub fn from_json_str(
        source: &str,
        base_dir: &Path,
    ) -> Result<Self, serde_json::Error> {
        let mut catalog: Catalog = serde_json::from_str(source)?;
        catalog.resolve_paths(base_dir);
        Ok(catalog)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let catalog =
            Self::from_json_str(&source, base_dir).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            albums = catalog.len(),
            tracks = catalog.track_total(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Built-in catalog used when no catalog file is given.
    pub fn demo() -> Self {
        Self::new(vec![
            Album::new(
                "Greatest Hits",
                "Neil Diamond",
                Some("media/NeilDiamond.png".into()),
                vec![
                    Track::new("Crackling Rose", "media/CracklingRose.mp3"),
                    Track::new("Soolaimon", "media/Soolaimon.mp3"),
                    Track::new("Sweet Caroline", "media/SweetCaroline.mp3"),
                ],
            ),
            Album::new(
                "American Pie",
                "Don McLean",
                Some("media/DonMcLean.png".into()),
                vec![],
            ),
            Album::new(
                "Greatest Hits",
                "The Platters",
                Some("media/ThePlatters.png".into()),
                vec![
                    Track::new("Twilight Time", "media/TwilightTime.mp3"),
                    Track::new("The Great Pretender", "media/TheGreatPretender.mp3"),
                ],
            ),
            Album::new(
                "No Secrets",
                "Carly Simon",
                Some("media/CarlySimon.png".into()),
                vec![
                    Track::new("The Carter Family", "media/TheCarterFamily.mp3"),
                    Track::new("You're So Vain", "media/YoureSoVain.mp3"),
                    Track::new("Embrace Me, You Child", "media/EmbraceMeYouChild.mp3"),
                ],
            ),
            Album::new(
                "AM",
                "Arctic Monkeys",
                Some("albums/arctic.jpg".into()),
                vec![
                    Track::new("Do I Wanna Know?", "songs/arctic_1.mp3"),
                    Track::new("I Wanna Be Yours", "songs/arctic_2.mp3"),
                    Track::new("Why'd You Only Call Me When You're High?", "songs/arctic_3.mp3"),
                ],
            ),
            Album::new(
                "30 #1 Hits",
                "Elvis Presley",
                Some("albums/elvis.jpg".into()),
                vec![],
            ),
            Album::new(
                "No. 6 Collaborations Project",
                "Ed Sheeran",
                Some("albums/ed.png".into()),
                vec![
                    Track::new("Beautiful People", "songs/ed_1.mp3"),
                    Track::new("I Don't Care", "songs/ed_2.mp3"),
                ],
            ),
            Album::new(
                "Midnights",
                "Taylor Swift",
                Some("albums/taylor.jpg".into()),
                vec![
                    Track::new("Midnight Rain", "songs/taylor_1.mp3"),
                    Track::new("Snow On The Beach", "songs/taylor_2.mp3"),
                    Track::new("Lavender Haze", "songs/taylor_3.mp3"),
                ],
            ),
        ])
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn album(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn track_total(&self) -> usize {
        self.albums.iter().map(|a| a.tracks.len()).sum()
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        for album in &mut self.albums {
            if let Some(artwork) = album.artwork.as_mut() {
                if artwork.is_relative() {
                    *artwork = base_dir.join(&*artwork);
                }
            }
            for track in &mut album.tracks {
                if track.audio.is_relative() {
                    track.audio = base_dir.join(&track.audio);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "albums": [
            {
                "title": "Blue",
                "artist": "Joni Mitchell",
                "artwork": "art/blue.png",
                "tracks": [
                    { "name": "All I Want", "audio": "audio/all_i_want.mp3" },
                    { "name": "My Old Man", "audio": "/abs/my_old_man.mp3" }
                ]
            },
            { "title": "Silence", "artist": "Nobody" }
        ]
    }"#;

    #[test]
    fn parses_albums_in_order() {
        let catalog = Catalog::from_json_str(SAMPLE, Path::new("/music")).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.album(0).unwrap().title, "Blue");
        assert_eq!(catalog.album(1).unwrap().title, "Silence");
        assert_eq!(catalog.track_total(), 2);
    }

    #[test]
    fn album_without_tracks_is_valid() {
        let catalog = Catalog::from_json_str(SAMPLE, Path::new("/music")).unwrap();
        let silence = catalog.album(1).unwrap();

        assert!(silence.tracks.is_empty());
        assert!(silence.artwork.is_none());
        assert!(silence.track(0).is_none());
    }

    #[test]
    fn resolves_relative_paths_against_base_dir() {
        let catalog = Catalog::from_json_str(SAMPLE, Path::new("/music")).unwrap();
        let blue = catalog.album(0).unwrap();

        assert_eq!(blue.artwork.as_deref(), Some(Path::new("/music/art/blue.png")));
        assert_eq!(blue.tracks[0].audio, PathBuf::from("/music/audio/all_i_want.mp3"));
        assert_eq!(blue.tracks[1].audio, PathBuf::from("/abs/my_old_man.mp3"));
    }

    #[test]
    fn loads_from_file_relative_to_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::from_json_file(&path).unwrap();

        assert_eq!(
            catalog.album(0).unwrap().tracks[0].audio,
            dir.path().join("audio/all_i_want.mp3")
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Catalog::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"albums\": [ { \"title\": 3 } ] }").unwrap();

        let err = Catalog::from_json_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn demo_catalog_contains_an_empty_album() {
        let demo = Catalog::demo();
        assert!(demo.len() > 4);
        assert!(demo.albums().iter().any(|a| a.tracks.is_empty()));
    }
}
