//! Sample catalogue for fresh installs.

use tracklist_core::listing::TrackFilter;
use tracklist_core::validation::TrackFields;

use crate::store::{StoreResult, TrackStore};

/// `(title, artist, album)` rows inserted by [`seed_if_empty`].
pub const SAMPLE_TRACKS: &[(&str, &str, &str)] = &[
    ("The Emptiness Machine", "Linkin Park", "From Zero"),
    ("Firestarter", "The Prodigy", "Fat of the Land"),
    ("Australia", "The Manic Street Preachers", "Everything Must Go"),
    ("Quantum Leap", "Synthwave Masters", "Neon Nights"),
    ("Echoes in Time", "Ambient Explorers", "Soundscapes Vol. 1"),
    ("Midnight Drive", "Synthwave Masters", "Neon Nights"),
    ("Lost Signal", "Glitch Mob", "Drink the Sea"),
    ("Starlight", "Muse", "Black Holes and Revelations"),
    ("Solar Sailer", "Daft Punk", "TRON: Legacy OST"),
    ("Crimson Sun", "Epic Score", "Action & Adventure"),
    ("Forest Awakening", "Nature Sounds", "Relaxation Suite"),
    ("Urban Pulse", "Lo-Fi Beats", "Study Session"),
    ("Cybernetic Dream", "Tech Noir", "Future City"),
    ("Ocean's Breath", "Ambient Explorers", "Soundscapes Vol. 2"),
    ("Desert Mirage", "World Music Collective", "Global Rhythms"),
    ("Retro Rewind", "Synthwave Masters", "Arcade Days"),
    ("Uprising", "Muse", "The Resistance"),
    ("The Grid", "Daft Punk", "TRON: Legacy OST"),
    ("Rainy Day", "Lo-Fi Beats", "Chill Vibes"),
    ("Neon Alley", "Tech Noir", "Future City"),
    ("Galactic Voyage", "Synthwave Masters", "Space Odyssey"),
    ("Panic Station", "Muse", "The 2nd Law"),
    ("Adagio for TRON", "Daft Punk", "TRON: Legacy OST"),
    ("Data Stream", "Tech Noir", "System Shock"),
    ("Madness", "Muse", "The 2nd Law"),
];

/// Insert [`SAMPLE_TRACKS`] when the store holds no tracks.
///
/// Returns the number of tracks inserted (0 if the store already had data).
pub async fn seed_if_empty(store: &dyn TrackStore) -> StoreResult<usize> {
    let existing = store.count(&TrackFilter::default()).await?;
    if existing > 0 {
        tracing::info!(existing, "Track store already populated, skipping seed");
        return Ok(0);
    }

    for (title, artist, album) in SAMPLE_TRACKS {
        let fields = TrackFields {
            title: (*title).to_string(),
            artist: (*artist).to_string(),
            album: (*album).to_string(),
        };
        store.insert(&fields).await?;
    }

    tracing::info!(count = SAMPLE_TRACKS.len(), "Seeded sample tracks");
    Ok(SAMPLE_TRACKS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTrackStore;

    #[tokio::test]
    async fn seeds_an_empty_store_once() {
        let store = MemoryTrackStore::new();

        let inserted = seed_if_empty(&store).await.unwrap();
        assert_eq!(inserted, SAMPLE_TRACKS.len());

        let again = seed_if_empty(&store).await.unwrap();
        assert_eq!(again, 0);
        assert_eq!(
            store.count(&TrackFilter::default()).await.unwrap(),
            SAMPLE_TRACKS.len() as u64
        );
    }
}
