use crate::error::Result;
use crate::models::SavedItem;
use crate::services::spotify::{SpotifyApi, SAVED_TRACKS_PAGE_LIMIT};

/// Upper bound on how many saved tracks a run will pull.
pub const DEFAULT_FETCH_LIMIT: usize = 1000;

/// Fetches the user's saved tracks page by page until `max_total` items
/// are collected or the library is exhausted (an empty page).
///
/// Service order is preserved (most-recently-saved first). The final page
/// requests only `min(50, remaining)` items so the cap is never overshot.
/// Transport errors are fatal for the run and propagate unwrapped.
pub async fn fetch_saved_tracks<C: SpotifyApi>(
    client: &C,
    max_total: usize,
) -> Result<Vec<SavedItem>> {
    let mut items: Vec<SavedItem> = Vec::new();
    let mut offset = 0;

    while items.len() < max_total {
        let limit = SAVED_TRACKS_PAGE_LIMIT.min(max_total - items.len());
        let page = client.saved_tracks_page(limit, offset).await?;
        if page.is_empty() {
            break;
        }
        offset += page.len();
        items.extend(page);
    }

    tracing::info!("Fetched {} saved tracks", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeSpotify;

    #[tokio::test]
    async fn pages_until_cap_without_overshoot() {
        let fake = FakeSpotify::with_tracks(200);

        let items = fetch_saved_tracks(&fake, 120).await.unwrap();
        assert_eq!(items.len(), 120);

        // Exactly three page requests: 50, 50, then min(50, remaining) = 20.
        let requests = fake.page_requests.lock().unwrap().clone();
        assert_eq!(requests, vec![(50, 0), (50, 50), (20, 100)]);
    }

    #[tokio::test]
    async fn stops_early_when_library_exhausted() {
        let fake = FakeSpotify::with_tracks(70);

        let items = fetch_saved_tracks(&fake, 1000).await.unwrap();
        assert_eq!(items.len(), 70);

        // 50 + 20, then one empty page terminates the loop.
        let requests = fake.page_requests.lock().unwrap().clone();
        assert_eq!(requests, vec![(50, 0), (50, 50), (50, 70)]);
    }

    #[tokio::test]
    async fn empty_library_yields_no_items() {
        let fake = FakeSpotify::with_tracks(0);
        let items = fetch_saved_tracks(&fake, 1000).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn preserves_service_order() {
        let fake = FakeSpotify::with_tracks(60);
        let items = fetch_saved_tracks(&fake, 60).await.unwrap();
        let ids: Vec<&str> = items
            .iter()
            .map(|i| i.track.as_ref().unwrap().id.as_str())
            .collect();
        assert_eq!(ids[0], "t0");
        assert_eq!(ids[59], "t59");
    }
}
