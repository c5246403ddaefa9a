use super::model::NewTrack;

/// Tracks inserted into an empty store on first start.
///
/// Asset ids are relative to `library.assets_dir`.
pub fn seed_tracks() -> Vec<NewTrack> {
    vec![
        NewTrack::local("APT", "Bruno Mars & Rose", "apt.jpg", "apt.mp3"),
        NewTrack::local("Morning Drive", "The Slow Lanes", "morning-drive.jpg", "morning-drive.mp3"),
        NewTrack::local("Paper Boats", "Juniper Hall", "paper-boats.jpg", "paper-boats.mp3"),
        NewTrack::local("Night Market", "Lumen & Co", "night-market.jpg", "night-market.mp3"),
    ]
}
