mod ids;
mod playlist;
mod track;

pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::{Playlist, DEFAULT_PLAYLIST_COVER};
pub use track::Track;
