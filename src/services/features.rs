use crate::error::Result;
use crate::models::{SavedItem, TrackFeatures};
use crate::services::spotify::{SpotifyApi, ARTISTS_BATCH_LIMIT, AUDIO_FEATURES_BATCH_LIMIT};
use std::collections::HashMap;

/// Builds the per-track descriptor map for a fetched library.
///
/// Two independent passes over the remote API, both keyed by track id:
/// numeric audio features in sub-batches of 100, then primary-artist genre
/// tags in sub-batches of 50. A null feature result leaves the track
/// without numeric fields; a track whose first artist has no id is excluded
/// from the genre pass entirely. Neither pass blocks the other, so a track
/// can end up with only genres or only numeric features.
pub async fn aggregate_features<C: SpotifyApi>(
    client: &C,
    items: &[SavedItem],
) -> Result<HashMap<String, TrackFeatures>> {
    let mut features: HashMap<String, TrackFeatures> = HashMap::new();

    let track_ids: Vec<String> = items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .map(|track| track.id.clone())
        .collect();

    for chunk in track_ids.chunks(AUDIO_FEATURES_BATCH_LIMIT) {
        let batch = client.audio_features(chunk).await?;
        for (id, set) in chunk.iter().zip(batch) {
            if let Some(set) = set {
                features.insert(id.clone(), set);
            }
        }
    }

    // (track id, artist id) pairs keep the merge keyed by track even when
    // some tracks were skipped above.
    let artist_pairs: Vec<(String, String)> = items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .filter_map(|track| {
            track
                .primary_artist_id()
                .map(|artist_id| (track.id.clone(), artist_id.to_string()))
        })
        .collect();

    for chunk in artist_pairs.chunks(ARTISTS_BATCH_LIMIT) {
        let artist_ids: Vec<String> = chunk.iter().map(|(_, a)| a.clone()).collect();
        let artists = client.artists(&artist_ids).await?;
        for ((track_id, _), artist) in chunk.iter().zip(artists) {
            if let Some(artist) = artist {
                features.entry(track_id.clone()).or_default().genres = artist.genres;
            }
        }
    }

    tracing::info!("Aggregated descriptors for {} tracks", features.len());
    Ok(features)
}
