/// Tools for the ambient track catalog and favorite tracks

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;

use crate::domain::{find_track, tracks_by_genre, DomainError, LibraryTrack, TRACK_GENRES, TRACK_LIBRARY};
use crate::storage::{KeyValueStore, StorageError};
use crate::store::WellnessStore;
use super::NoParams;

/// Parameters for toggling a favorite
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ToggleFavoriteParams {
    /// Track identifier from track_list, e.g. "ambient-1"
    pub track_id: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleFavoriteResponse {
    pub track: LibraryTrack,
    pub is_favorite: bool,
    pub message: String,
}

/// Add a catalog track to favorites, or remove it if already there
pub fn toggle_favorite<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: ToggleFavoriteParams,
) -> Result<ToggleFavoriteResponse, StorageError> {
    let track = *find_track(&params.track_id).ok_or_else(|| DomainError::Validation {
        message: format!("Unknown track '{}'", params.track_id.trim()),
    })?;

    let is_favorite = store.toggle_favorite(track.id)?;
    let message = if is_favorite {
        format!("Added '{}' by {} to favorites.", track.title, track.artist)
    } else {
        format!("Removed '{}' by {} from favorites.", track.title, track.artist)
    };

    Ok(ToggleFavoriteResponse {
        track,
        is_favorite,
        message,
    })
}

/// A catalog track with its favorite flag
#[derive(Debug, Serialize)]
pub struct TrackListing {
    #[serde(flatten)]
    pub track: LibraryTrack,
    pub is_favorite: bool,
}

fn describe(listings: &[TrackListing]) -> String {
    listings
        .iter()
        .map(|l| {
            format!(
                "{}{} - {} ({}) [{}]",
                if l.is_favorite { "* " } else { "" },
                l.track.title,
                l.track.artist,
                l.track.genre,
                l.track.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Serialize)]
pub struct ListFavoritesResponse {
    pub favorites: Vec<TrackListing>,
    /// Stored favorite ids that are not in the catalog
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_ids: Vec<String>,
    pub message: String,
}

/// Favorite tracks in the order they were added
pub fn list_favorites<S: KeyValueStore>(
    store: &WellnessStore<S>,
    _params: NoParams,
) -> Result<ListFavoritesResponse, StorageError> {
    let mut favorites = Vec::new();
    let mut unknown_ids = Vec::new();
    for id in store.list_favorites() {
        match find_track(&id) {
            Some(track) => favorites.push(TrackListing { track: *track, is_favorite: true }),
            None => unknown_ids.push(id),
        }
    }

    let message = if favorites.is_empty() {
        "No favorite tracks yet.".to_string()
    } else {
        describe(&favorites)
    };

    Ok(ListFavoritesResponse {
        favorites,
        unknown_ids,
        message,
    })
}

/// Parameters for browsing the track catalog
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListTracksParams {
    /// "ambient", "chill", "sleep" or "study"; omit for all
    pub genre: Option<String>,
    /// Only return favorite tracks
    pub favorites_only: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ListTracksResponse {
    pub tracks: Vec<TrackListing>,
    pub message: String,
}

/// Browse the catalog, marking favorites
pub fn list_tracks<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: ListTracksParams,
) -> Result<ListTracksResponse, StorageError> {
    let catalog: Vec<&LibraryTrack> = match params.genre.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
        Some(genre) => {
            let tracks = tracks_by_genre(genre);
            if tracks.is_empty() {
                return Err(DomainError::Validation {
                    message: format!("Unknown genre '{}', expected one of {}", genre, TRACK_GENRES.join(", ")),
                }
                .into());
            }
            tracks
        }
        None => TRACK_LIBRARY.iter().collect(),
    };

    let favorites = store.list_favorites();
    let favorites_only = params.favorites_only.unwrap_or(false);
    let tracks: Vec<TrackListing> = catalog
        .into_iter()
        .map(|track| TrackListing {
            track: *track,
            is_favorite: favorites.iter().any(|f| f == track.id),
        })
        .filter(|l| !favorites_only || l.is_favorite)
        .collect();

    let message = if tracks.is_empty() {
        "No tracks match.".to_string()
    } else {
        describe(&tracks)
    };

    Ok(ListTracksResponse { tracks, message })
}
