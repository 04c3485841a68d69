//! Filename-derived display metadata
//!
//! Uploaded files carry no tags worth trusting; the display artist and
//! title come from the original filename alone. A name like
//! "Artist Name - Song Title.mp3" splits on the literal " - " separator,
//! anything else becomes a title with the default artist.

use std::path::Path;

/// Artist assigned when the filename carries no artist segment
pub const DEFAULT_ARTIST: &str = "Unknown Artist";

/// Literal separator between the artist and title segments
const ARTIST_TITLE_SEPARATOR: &str = " - ";

/// Split an extension-stripped filename into an (artist, title) pair.
///
/// The first separator occurrence wins: "A - B - C" is artist "A" with
/// title "B - C". Without a separator the whole stem is the title.
pub fn split_artist_title(stem: &str) -> (String, String) {
    match stem.split_once(ARTIST_TITLE_SEPARATOR) {
        Some((artist, title)) => (artist.to_string(), title.to_string()),
        None => (DEFAULT_ARTIST.to_string(), stem.to_string()),
    }
}

/// Extension-stripped form of an uploaded filename.
///
/// Also drops any directory components a client sneaks into the
/// original name.
pub fn display_stem(original_name: &str) -> String {
    Path::new(original_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(original_name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_artist_and_title() {
        let (artist, title) = split_artist_title("Artist Name - Song Title");
        assert_eq!(artist, "Artist Name");
        assert_eq!(title, "Song Title");
    }

    #[test]
    fn test_split_without_separator_uses_default_artist() {
        let (artist, title) = split_artist_title("JustATitle");
        assert_eq!(artist, DEFAULT_ARTIST);
        assert_eq!(title, "JustATitle");
    }

    #[test]
    fn test_split_keeps_later_separators_in_title() {
        let (artist, title) = split_artist_title("A - B - C");
        assert_eq!(artist, "A");
        assert_eq!(title, "B - C");
    }

    #[test]
    fn test_plain_hyphen_is_not_a_separator() {
        let (artist, title) = split_artist_title("Rock-n-Roll");
        assert_eq!(artist, DEFAULT_ARTIST);
        assert_eq!(title, "Rock-n-Roll");
    }

    #[test]
    fn test_display_stem_strips_extension() {
        assert_eq!(display_stem("Artist - Song.mp3"), "Artist - Song");
        assert_eq!(display_stem("track.ogg"), "track");
    }

    #[test]
    fn test_display_stem_without_extension() {
        assert_eq!(display_stem("track"), "track");
    }

    #[test]
    fn test_display_stem_drops_directory_components() {
        assert_eq!(display_stem("uploads/Artist - Song.mp3"), "Artist - Song");
    }
}
