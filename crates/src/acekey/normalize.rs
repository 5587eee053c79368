/// Returns true for characters that may appear in a keybinding.
#[inline]
pub fn is_key_rune(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Splits a display name into lowercase alphanumeric words.
///
/// Any run of other characters (spaces, hyphens, punctuation, non-ASCII
/// letters) is a word boundary. Empty words are dropped, so a name without
/// a single alphanumeric character yields an empty list.
pub fn normalize(name: &str) -> Vec<String> {
    name.split(|c: char| !is_key_rune(c))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_lowercase())
        .collect()
}
