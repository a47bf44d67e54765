//! Name validation for album subdomains.
//!
//! A subdomain is the leading label of an album page's public hostname, so it
//! is restricted to lowercase ASCII letters, digits, and hyphens.

/// Maximum subdomain length in characters
pub const MAX_LEN: usize = 30;

fn is_name_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn is_word_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9')
}

fn lowercase_filtered(raw: &str, keep: fn(char) -> bool) -> impl Iterator<Item = char> + '_ {
    raw.chars().flat_map(char::to_lowercase).filter(move |c| keep(*c))
}

/// Normalize a user-typed candidate name.
///
/// Lowercases, drops every character outside `[a-z0-9-]`, and truncates to
/// [`MAX_LEN`]. The result may be empty.
pub fn normalize(raw: &str) -> String {
    lowercase_filtered(raw, is_name_char).take(MAX_LEN).collect()
}

/// Suggest a default name from artist and album titles.
///
/// Each part is reduced to `[a-z0-9]`, the parts are joined with a single
/// hyphen, and the joined string is truncated to [`MAX_LEN`].
pub fn suggest(artist: &str, album: &str) -> String {
    let artist: String = lowercase_filtered(artist, is_word_char).collect();
    let album: String = lowercase_filtered(album, is_word_char).collect();

    let mut name = format!("{artist}-{album}");
    name.truncate(MAX_LEN);
    name
}

/// Whether `name` is a publishable subdomain: `[a-z0-9-]{1,30}`
pub fn is_valid(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_LEN && name.chars().all(is_name_char)
}
