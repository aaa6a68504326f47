use crate::tables::CharMap;

/// Map every character of `text` through `table`.
///
/// Lookup order is the literal character, then its case-flipped counterpart.
/// Characters with no entry in either case are copied through unchanged.
pub fn map_chars(text: &str, table: &CharMap) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        match lookup(table, c) {
            Some(glyph) => out.push_str(glyph),
            None => out.push(c),
        }
    }
    out
}

/// Single-character lookup with the same case fallback as [`map_chars`].
pub fn lookup(table: &CharMap, c: char) -> Option<&'static str> {
    table
        .get(c)
        .or_else(|| flip_case(c).and_then(|flipped| table.get(flipped)))
}

/// The opposite-case form of `c`, when it is a single character.
fn flip_case(c: char) -> Option<char> {
    if c.is_uppercase() {
        single(c.to_lowercase())
    } else if c.is_lowercase() {
        single(c.to_uppercase())
    } else {
        None
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

/// Map printable ASCII to the fullwidth block, leaving everything else as is.
pub fn to_fullwidth(c: char) -> char {
    match c {
        '!'..='~' => char::from_u32(c as u32 + 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

/// Fullwidth text with `spacing` spaces between characters.
pub fn widen(text: &str, spacing: usize) -> String {
    let gap = " ".repeat(spacing);
    text.chars()
        .map(|c| to_fullwidth(c).to_string())
        .collect::<Vec<_>>()
        .join(&gap)
}

/// Append `mark` after every character.
pub fn append_each(text: &str, mark: &str) -> String {
    let mut out = String::with_capacity(text.len() * (1 + mark.len()));
    for c in text.chars() {
        out.push(c);
        out.push_str(mark);
    }
    out
}
