/// Prefix announcing that the next cell is a digit.
pub const NUMERIC_INDICATOR: char = '⠼';

fn cell(c: char) -> Option<char> {
    let cell = match c {
        'a' => '⠁',
        'b' => '⠃',
        'c' => '⠉',
        'd' => '⠙',
        'e' => '⠑',
        'f' => '⠋',
        'g' => '⠛',
        'h' => '⠓',
        'i' => '⠊',
        'j' => '⠚',
        'k' => '⠅',
        'l' => '⠇',
        'm' => '⠍',
        'n' => '⠝',
        'o' => '⠕',
        'p' => '⠏',
        'q' => '⠟',
        'r' => '⠗',
        's' => '⠎',
        't' => '⠞',
        'u' => '⠥',
        'v' => '⠧',
        'w' => '⠺',
        'x' => '⠭',
        'y' => '⠽',
        'z' => '⠵',
        '0' => '⠴',
        '1' => '⠂',
        '2' => '⠆',
        '3' => '⠒',
        '4' => '⠲',
        '5' => '⠢',
        '6' => '⠖',
        '7' => '⠶',
        '8' => '⠦',
        '9' => '⠔',
        ' ' => '⠀',
        '.' => '⠲',
        ',' => '⠂',
        ';' => '⠆',
        ':' => '⠒',
        '!' => '⠖',
        '?' => '⠦',
        '(' | ')' => '⠶',
        '-' => '⠤',
        _ => return None,
    };
    Some(cell)
}

/// Lowercase `text` and spell it in Braille cells. Each digit gets the numeric
/// indicator in front when `numeric_indicator` is set. Unknown characters are
/// kept as they are.
pub fn to_braille(text: &str, numeric_indicator: bool) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.to_lowercase().chars() {
        if numeric_indicator && c.is_ascii_digit() {
            out.push(NUMERIC_INDICATOR);
        }
        out.push(cell(c).unwrap_or(c));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_braille_letters() {
        assert_eq!(to_braille("Hi there", true), "⠓⠊⠀⠞⠓⠑⠗⠑");
    }

    #[test]
    fn test_to_braille_digits_with_indicator() {
        assert_eq!(to_braille("a1", true), "⠁⠼⠂");
        assert_eq!(to_braille("42", true), "⠼⠲⠼⠆");
    }

    #[test]
    fn test_to_braille_digits_without_indicator() {
        assert_eq!(to_braille("42", false), "⠲⠆");
    }

    #[test]
    fn test_to_braille_unknown_passes_through() {
        assert_eq!(to_braille("a#", true), "⠁#");
    }

    #[test]
    fn test_to_braille_empty() {
        assert_eq!(to_braille("", true), "");
    }
}
