/// The built-in ambient music catalog
///
/// Favorites are stored as track ids; this catalog is what those ids refer
/// to. Playback itself is left to the client.

use serde::Serialize;

/// A track in the built-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryTrack {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    /// One of "ambient", "chill", "sleep", "study"
    pub genre: &'static str,
}

pub const TRACK_GENRES: [&str; 4] = ["ambient", "chill", "sleep", "study"];

pub const TRACK_LIBRARY: &[LibraryTrack] = &[
    LibraryTrack { id: "ambient-1", title: "Asleep", artist: "Tomh", genre: "ambient" },
    LibraryTrack { id: "ambient-2", title: "Simulacra", artist: "Scott Buckley", genre: "ambient" },
    LibraryTrack { id: "ambient-3", title: "Solitude", artist: "Clavier", genre: "ambient" },
    LibraryTrack { id: "ambient-4", title: "Waiting for this Moment", artist: "Vlad Gluschenko", genre: "ambient" },
    LibraryTrack { id: "ambient-5", title: "Meanwhile", artist: "Scott Buckley", genre: "ambient" },
    LibraryTrack { id: "ambient-6", title: "With You", artist: "Onycs", genre: "ambient" },
    LibraryTrack { id: "ambient-7", title: "Voyager", artist: "Onycs", genre: "ambient" },
    LibraryTrack { id: "ambient-8", title: "Shine", artist: "Onycs", genre: "ambient" },
    LibraryTrack { id: "ambient-9", title: "Bloom", artist: "Onycs", genre: "ambient" },
    LibraryTrack { id: "ambient-10", title: "Ambient Background", artist: "Anonymous", genre: "ambient" },
    LibraryTrack { id: "ambient-11", title: "Cellar Door", artist: "Tunetank", genre: "ambient" },
    LibraryTrack { id: "ambient-12", title: "Two Places", artist: "A Himitsu", genre: "ambient" },
    LibraryTrack { id: "ambient-13", title: "The Flow of Time", artist: "Alex Productions", genre: "ambient" },
    LibraryTrack { id: "ambient-14", title: "2184", artist: "Miguel Jhonson", genre: "ambient" },
    LibraryTrack { id: "ambient-15", title: "A Horrid Discovery", artist: "Aila Scott", genre: "ambient" },
    LibraryTrack { id: "chill-1", title: "Invented Rooms", artist: "Savfk", genre: "chill" },
    LibraryTrack { id: "chill-2", title: "Serenity", artist: "Roa", genre: "chill" },
    LibraryTrack { id: "chill-3", title: "Waters Edge", artist: "Pyrosion", genre: "chill" },
    LibraryTrack { id: "chill-4", title: "Speechless", artist: "Pyrosion", genre: "chill" },
    LibraryTrack { id: "chill-5", title: "Let Me Take You On A Ride", artist: "Pyrosion", genre: "chill" },
    LibraryTrack { id: "chill-6", title: "Rebirth", artist: "Onycs", genre: "chill" },
    LibraryTrack { id: "chill-7", title: "Momentum", artist: "Nomyn", genre: "chill" },
    LibraryTrack { id: "chill-8", title: "You Always Carry the Sun in Your Hands For Me", artist: "Nikos Spiliotis", genre: "chill" },
    LibraryTrack { id: "chill-9", title: "Vibe", artist: "Mehul Choudhary", genre: "chill" },
    LibraryTrack { id: "chill-10", title: "Lofi Beat Chill", artist: "Anonymous", genre: "chill" },
    LibraryTrack { id: "chill-11", title: "Bubbles", artist: "Kaiji", genre: "chill" },
    LibraryTrack { id: "chill-12", title: "St. Francis", artist: "Josh Lippi", genre: "chill" },
    LibraryTrack { id: "chill-13", title: "Train Robbery", artist: "Hayden Folker", genre: "chill" },
    LibraryTrack { id: "chill-14", title: "Summer Breeze", artist: "Aftertune", genre: "chill" },
    LibraryTrack { id: "chill-15", title: "3 A.M.", artist: "Aftertune", genre: "chill" },
    LibraryTrack { id: "sleep-1", title: "Relaxing Birds", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-2", title: "Sleep Music", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-3", title: "Relaxing Music", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-4", title: "The Cradle Of Your Soul", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-5", title: "Soft Piano Music", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-6", title: "Perfect Beauty", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-7", title: "Samurai Relaxing Flute", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-8", title: "Morning In The Forest", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-9", title: "Nature Walk", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-10", title: "Melody Of Nature", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-11", title: "Forest Lullaby", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-12", title: "Breath Of Life", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-13", title: "432Hz Meditation", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-14", title: "Soft Piano", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "sleep-15", title: "Meditation Music", artist: "Anonymous", genre: "sleep" },
    LibraryTrack { id: "study-1", title: "Whip Afro Dancehall", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-2", title: "Study Time", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-3", title: "Study", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-4", title: "Simple Happy Life", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-5", title: "Sapphire", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-6", title: "Please Calm My Mind", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-7", title: "Majestic Sky", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-8", title: "Nothing But Time", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-9", title: "Just Relax", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-10", title: "Inner Peace", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-11", title: "Jungle Waves", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-12", title: "Gorila", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-13", title: "Gardens", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-14", title: "Calm Soft Music", artist: "Anonymous", genre: "study" },
    LibraryTrack { id: "study-15", title: "By The Riverside", artist: "Anonymous", genre: "study" },
];

/// Look up a catalog track by id
pub fn find_track(id: &str) -> Option<&'static LibraryTrack> {
    TRACK_LIBRARY.iter().find(|t| t.id == id.trim())
}

/// Catalog tracks in a genre (case-insensitive)
pub fn tracks_by_genre(genre: &str) -> Vec<&'static LibraryTrack> {
    TRACK_LIBRARY
        .iter()
        .filter(|t| t.genre.eq_ignore_ascii_case(genre.trim()))
        .collect()
}
