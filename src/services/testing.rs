//! In-memory Spotify fake for exercising the pipeline without a network.

use crate::error::Result;
use crate::models::{ArtistRef, SavedItem, SavedTrack, TrackFeatures};
use crate::services::spotify::{ArtistDetails, SpotifyApi};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPlaylist {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub public: bool,
    pub description: String,
}

pub struct FakeSpotify {
    pub user_id: String,
    pub library: Vec<SavedItem>,
    /// Numeric feature sets by track id; absent ids return null.
    pub features: HashMap<String, TrackFeatures>,
    /// Genre tags by artist id; absent ids return null.
    pub artist_genres: HashMap<String, Vec<String>>,

    /// (limit, offset) of every saved-tracks page request.
    pub page_requests: Mutex<Vec<(usize, usize)>>,
    /// Batch sizes of every audio-features request.
    pub feature_requests: Mutex<Vec<usize>>,
    /// Batch sizes of every artists request.
    pub artist_requests: Mutex<Vec<usize>>,
    pub created_playlists: Mutex<Vec<CreatedPlaylist>>,
    /// (playlist id, track ids) of every add-items call.
    pub added_items: Mutex<Vec<(String, Vec<String>)>>,
}

impl Default for FakeSpotify {
    fn default() -> Self {
        Self {
            user_id: "user1".to_string(),
            library: Vec::new(),
            features: HashMap::new(),
            artist_genres: HashMap::new(),
            page_requests: Mutex::new(Vec::new()),
            feature_requests: Mutex::new(Vec::new()),
            artist_requests: Mutex::new(Vec::new()),
            created_playlists: Mutex::new(Vec::new()),
            added_items: Mutex::new(Vec::new()),
        }
    }
}

impl FakeSpotify {
    /// A fake with `count` saved tracks named `t0..tN`, each with one artist.
    pub fn with_tracks(count: usize) -> Self {
        let library = (0..count)
            .map(|i| SavedItem {
                track: Some(SavedTrack {
                    id: format!("t{}", i),
                    name: format!("track {}", i),
                    artists: vec![ArtistRef {
                        id: Some(format!("a{}", i)),
                        name: format!("artist {}", i),
                    }],
                }),
            })
            .collect();

        Self {
            library,
            ..Default::default()
        }
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn current_user(&self) -> Result<String> {
        Ok(self.user_id.clone())
    }

    async fn saved_tracks_page(&self, limit: usize, offset: usize) -> Result<Vec<SavedItem>> {
        self.page_requests.lock().unwrap().push((limit, offset));

        let start = offset.min(self.library.len());
        let end = (offset + limit).min(self.library.len());
        Ok(self.library[start..end].to_vec())
    }

    async fn audio_features(&self, ids: &[String]) -> Result<Vec<Option<TrackFeatures>>> {
        assert!(ids.len() <= 100, "audio-features batch exceeds service cap");
        self.feature_requests.lock().unwrap().push(ids.len());

        Ok(ids.iter().map(|id| self.features.get(id).cloned()).collect())
    }

    async fn artists(&self, ids: &[String]) -> Result<Vec<Option<ArtistDetails>>> {
        assert!(ids.len() <= 50, "artists batch exceeds service cap");
        self.artist_requests.lock().unwrap().push(ids.len());

        Ok(ids
            .iter()
            .map(|id| {
                self.artist_genres.get(id).map(|genres| ArtistDetails {
                    id: id.clone(),
                    genres: genres.clone(),
                })
            })
            .collect())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
        description: &str,
    ) -> Result<String> {
        let mut created = self.created_playlists.lock().unwrap();
        let id = format!("pl{}", created.len() + 1);
        created.push(CreatedPlaylist {
            id: id.clone(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            public,
            description: description.to_string(),
        });
        Ok(id)
    }

    async fn add_items(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        self.added_items
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), track_ids.to_vec()));
        Ok(())
    }
}
