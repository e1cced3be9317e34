use crate::error::Result;
use crate::models::Vibe;
use crate::services::spotify::SpotifyApi;
use std::collections::{BTreeMap, HashMap};

const DESCRIPTION_PREFIX: &str = "VibePilot";

/// Creates one private playlist per non-empty vibe group and appends the
/// group's tracks in processing order. Empty groups are never materialized.
/// Returns vibe -> created playlist id.
///
/// This mutates remote account state; together with the run log it is the
/// run's only persistent effect.
pub async fn materialize_playlists<C: SpotifyApi>(
    client: &C,
    user_id: &str,
    groups: &HashMap<Vibe, Vec<String>>,
) -> Result<BTreeMap<Vibe, String>> {
    let mut playlist_ids = BTreeMap::new();

    for vibe in Vibe::ALL {
        let tracks = match groups.get(&vibe) {
            Some(tracks) if !tracks.is_empty() => tracks,
            _ => continue,
        };

        let description = format!("{} - {}", DESCRIPTION_PREFIX, vibe);
        let playlist_id = client
            .create_playlist(user_id, vibe.as_str(), false, &description)
            .await?;
        client.add_items(&playlist_id, tracks).await?;

        tracing::info!("Created playlist '{}' with {} tracks", vibe, tracks.len());
        playlist_ids.insert(vibe, playlist_id);
    }

    Ok(playlist_ids)
}
