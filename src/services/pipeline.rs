use crate::error::Result;
use crate::models::{LogEntry, RunLog, Vibe};
use crate::services::classifier::Classifier;
use crate::services::features::aggregate_features;
use crate::services::library::fetch_saved_tracks;
use crate::services::playlists::materialize_playlists;
use crate::services::spotify::SpotifyApi;
use std::collections::HashMap;

/// Runs the whole flow: fetch, aggregate, classify, materialize.
///
/// Strictly sequential; each stage completes before the next begins, and
/// any transport failure aborts the run. Entries without a track object
/// are skipped after fetching; a track with no descriptor set classifies
/// with an empty one (default fallback).
pub async fn run_pipeline<C: SpotifyApi>(
    client: &C,
    classifier: &Classifier,
    max_tracks: usize,
) -> Result<RunLog> {
    let user_id = client.current_user().await?;
    tracing::info!("Running as user {}", user_id);

    let items = fetch_saved_tracks(client, max_tracks).await?;
    let features = aggregate_features(client, &items).await?;

    let mut groups: HashMap<Vibe, Vec<String>> = HashMap::new();
    let mut entries = Vec::new();

    for item in &items {
        let track = match &item.track {
            Some(track) => track,
            None => continue,
        };

        let descriptor = features.get(&track.id).cloned().unwrap_or_default();
        let vibe = classifier.assign(&descriptor).await?;

        groups.entry(vibe).or_default().push(track.id.clone());
        entries.push(LogEntry {
            id: track.id.clone(),
            name: track.name.clone(),
            vibe,
        });
    }

    let playlists = materialize_playlists(client, &user_id, &groups).await?;

    Ok(RunLog {
        tracks_processed: entries.len(),
        playlists,
        entries,
    })
}
