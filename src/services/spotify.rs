use crate::error::{AppError, Result};
use crate::models::{ArtistRef, SavedItem, SavedTrack, TrackFeatures};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://api.spotify.com/v1";

/// Hard limits the Spotify Web API enforces per call.
pub const SAVED_TRACKS_PAGE_LIMIT: usize = 50;
pub const AUDIO_FEATURES_BATCH_LIMIT: usize = 100;
pub const ARTISTS_BATCH_LIMIT: usize = 50;
pub const ADD_ITEMS_BATCH_LIMIT: usize = 100;

/// Genre tags for one artist, as returned by the bulk artists endpoint.
#[derive(Debug, Clone)]
pub struct ArtistDetails {
    pub id: String,
    pub genres: Vec<String>,
}

/// The remote API surface the pipeline runs against.
///
/// Implemented by [`SpotifyClient`] for real runs and by an in-memory fake
/// in tests. Every call executes under one authenticated identity.
#[async_trait]
pub trait SpotifyApi {
    /// Id of the authenticated user.
    async fn current_user(&self) -> Result<String>;

    /// One page of the user's saved tracks. `limit` must be at most 50.
    async fn saved_tracks_page(&self, limit: usize, offset: usize) -> Result<Vec<SavedItem>>;

    /// Audio features for up to 100 track ids. The result is positional:
    /// `None` where the service has no data for an id.
    async fn audio_features(&self, ids: &[String]) -> Result<Vec<Option<TrackFeatures>>>;

    /// Artist details for up to 50 artist ids, positional, `None` for
    /// unknown ids.
    async fn artists(&self, ids: &[String]) -> Result<Vec<Option<ArtistDetails>>>;

    /// Creates a playlist for the user and returns its id.
    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
        description: &str,
    ) -> Result<String>;

    /// Appends tracks to a playlist in order.
    async fn add_items(&self, playlist_id: &str, track_ids: &[String]) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    access_token: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct UserProfile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SavedTracksPage {
    #[serde(default)]
    items: Vec<SavedItemWire>,
}

#[derive(Debug, Deserialize)]
struct SavedItemWire {
    track: Option<TrackWire>,
}

#[derive(Debug, Deserialize)]
struct TrackWire {
    id: String,
    name: String,
    #[serde(default)]
    artists: Vec<ArtistWire>,
}

#[derive(Debug, Deserialize)]
struct ArtistWire {
    id: Option<String>,
    name: String,
}

#[derive(Debug, Deserialize)]
struct AudioFeaturesResponse {
    audio_features: Vec<Option<AudioFeaturesWire>>,
}

#[derive(Debug, Deserialize)]
struct AudioFeaturesWire {
    valence: f32,
    energy: f32,
    danceability: f32,
    tempo: f32,
}

#[derive(Debug, Deserialize)]
struct ArtistsResponse {
    artists: Vec<Option<ArtistDetailsWire>>,
}

#[derive(Debug, Deserialize)]
struct ArtistDetailsWire {
    id: String,
    #[serde(default)]
    genres: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CreatePlaylistRequest<'a> {
    name: &'a str,
    public: bool,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct PlaylistWire {
    id: String,
}

#[derive(Debug, Serialize)]
struct AddItemsRequest {
    uris: Vec<String>,
}

impl SpotifyClient {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            client: Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Spotify(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }

    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Spotify(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Spotify API error: {} - {}", status, body);
            return Err(AppError::Spotify(format!(
                "API returned status: {} - {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Spotify(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn current_user(&self) -> Result<String> {
        let profile: UserProfile = self.get_json(&format!("{}/me", API_BASE), &[]).await?;
        Ok(profile.id)
    }

    async fn saved_tracks_page(&self, limit: usize, offset: usize) -> Result<Vec<SavedItem>> {
        let url = format!("{}/me/tracks", API_BASE);
        tracing::debug!("Fetching saved tracks: limit={} offset={}", limit, offset);

        let page: SavedTracksPage = self
            .get_json(
                &url,
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await?;

        Ok(page
            .items
            .into_iter()
            .map(|item| SavedItem {
                track: item.track.map(|t| SavedTrack {
                    id: t.id,
                    name: t.name,
                    artists: t
                        .artists
                        .into_iter()
                        .map(|a| ArtistRef {
                            id: a.id,
                            name: a.name,
                        })
                        .collect(),
                }),
            })
            .collect())
    }

    async fn audio_features(&self, ids: &[String]) -> Result<Vec<Option<TrackFeatures>>> {
        let url = format!("{}/audio-features", API_BASE);
        let response: AudioFeaturesResponse = self
            .get_json(&url, &[("ids", ids.join(","))])
            .await?;

        Ok(response
            .audio_features
            .into_iter()
            .map(|af| {
                af.map(|af| TrackFeatures {
                    valence: Some(af.valence),
                    energy: Some(af.energy),
                    danceability: Some(af.danceability),
                    tempo: Some(af.tempo),
                    genres: Vec::new(),
                })
            })
            .collect())
    }

    async fn artists(&self, ids: &[String]) -> Result<Vec<Option<ArtistDetails>>> {
        let url = format!("{}/artists", API_BASE);
        let response: ArtistsResponse = self.get_json(&url, &[("ids", ids.join(","))]).await?;

        Ok(response
            .artists
            .into_iter()
            .map(|a| {
                a.map(|a| ArtistDetails {
                    id: a.id,
                    genres: a.genres,
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
        let url = format!("{}/users/{}/playlists", API_BASE, user_id);
        let request = CreatePlaylistRequest {
            name,
            public,
            description,
        };

        let playlist: PlaylistWire = self.post_json(&url, &request).await?;
        tracing::debug!("Created playlist '{}' ({})", name, playlist.id);
        Ok(playlist.id)
    }

    async fn add_items(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        let url = format!("{}/playlists/{}/tracks", API_BASE, playlist_id);

        // The endpoint caps each call at 100 items.
        for chunk in track_ids.chunks(ADD_ITEMS_BATCH_LIMIT) {
            let request = AddItemsRequest {
                uris: chunk
                    .iter()
                    .map(|id| format!("spotify:track:{}", id))
                    .collect(),
            };
            let _: serde_json::Value = self.post_json(&url, &request).await?;
        }

        Ok(())
    }
}
