/// One entry from the user's saved-tracks library.
///
/// The track object is absent for deleted or unavailable tracks; such
/// entries still count toward the pagination cap but are skipped by the
/// aggregator and classifier.
#[derive(Debug, Clone)]
pub struct SavedItem {
    pub track: Option<SavedTrack>,
}

#[derive(Debug, Clone)]
pub struct SavedTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
}

/// Lightweight artist reference as embedded in a track object.
/// Local tracks can list artists without ids.
#[derive(Debug, Clone)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
}

impl SavedTrack {
    /// Id of the first listed performing artist, if any. Genre lookup only
    /// considers the primary artist.
    pub fn primary_artist_id(&self) -> Option<&str> {
        self.artists.first().and_then(|a| a.id.as_deref())
    }
}
