/// Per-track classifier input: Spotify audio features plus the primary
/// artist's genre tags.
///
/// Either half may be missing. Feature lookup can return null for a track,
/// and genre lookup is skipped for tracks with no listed artist, so the
/// classifier must tolerate absent fields (missing numerics read as 0.0).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackFeatures {
    pub valence: Option<f32>,
    pub energy: Option<f32>,
    pub danceability: Option<f32>,
    pub tempo: Option<f32>,
    pub genres: Vec<String>,
}
