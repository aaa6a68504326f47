//! Block-letter rendering in three glyph sets.
//!
//! Every glyph is a fixed-width block: all of its lines have the same number
//! of characters, so the rendered rows line up.

use serde::{Deserialize, Serialize};

type Glyph = &'static [&'static str];

/// Available glyph sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtStyle {
    /// Six-line figlet-style letters.
    #[default]
    Std,
    /// Three-line half-block letters.
    #[serde(rename = "3d")]
    ThreeD,
    /// Three-line box-drawing letters inside a border.
    Cyber,
}

impl ArtStyle {
    /// Parse a style name, falling back to [`ArtStyle::Std`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "3d" => ArtStyle::ThreeD,
            "cyber" => ArtStyle::Cyber,
            _ => ArtStyle::Std,
        }
    }

    pub fn height(self) -> usize {
        match self {
            ArtStyle::Std => 6,
            ArtStyle::ThreeD | ArtStyle::Cyber => 3,
        }
    }

    fn glyph(self, c: char) -> Glyph {
        match self {
            ArtStyle::Std => std_glyph(c),
            ArtStyle::ThreeD => block_glyph(c),
            ArtStyle::Cyber => cyber_glyph(c),
        }
    }
}

/// Render `text` as block letters, one space after every glyph.
pub fn generate_ascii_art(text: &str, style: ArtStyle) -> String {
    let glyphs: Vec<Glyph> = text.to_uppercase().chars().map(|c| style.glyph(c)).collect();

    let mut rows = vec![String::new(); style.height()];
    for glyph in &glyphs {
        for (row, line) in rows.iter_mut().zip(glyph.iter()) {
            row.push_str(line);
            row.push(' ');
        }
    }

    if style == ArtStyle::Cyber {
        rows = frame(rows);
    }

    rows.join("\n")
}

fn frame(rows: Vec<String>) -> Vec<String> {
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    let bar = "═".repeat(width);

    let mut framed = Vec::with_capacity(rows.len() + 2);
    framed.push(format!("╔{bar}╗"));
    framed.extend(rows.into_iter().map(|row| format!("║{row}║")));
    framed.push(format!("╚{bar}╝"));
    framed
}

fn std_glyph(c: char) -> Glyph {
    match c {
        'A' => &["  ___  ", " / _ \\ ", "| |_| |", "|  _  |", "| | | |", "|_| |_|"],
        'B' => &[" ____  ", "| __ ) ", "|  _ \\ ", "| |_) |", "|____/ ", "       "],
        'C' => &["  ____ ", " / ___|", "| |    ", "| |___ ", " \\____|", "       "],
        'D' => &[" ____  ", "|  _ \\ ", "| | | |", "| |_| |", "|____/ ", "       "],
        'E' => &[" _____ ", "| ____|", "|  _|  ", "| |___ ", "|_____|", "       "],
        'F' => &[" _____ ", "|  ___|", "| |_   ", "|  _|  ", "|_|    ", "       "],
        'G' => &["  ____ ", " / ___|", "| |  _ ", "| |_| |", " \\____|", "       "],
        'H' => &[" _   _ ", "| | | |", "| |_| |", "|  _  |", "|_| |_|", "       "],
        'I' => &[" ___ ", "|_ _|", " | | ", " | | ", "|___|", "     "],
        'J' => &["     _ ", "    | |", " _  | |", "| |_| |", " \\___/ ", "       "],
        'K' => &[" _  __", "| |/ /", "| ' / ", "| . \\ ", "|_|\\_\\", "      "],
        'L' => &[" _     ", "| |    ", "| |    ", "| |___ ", "|_____|", "       "],
        'M' => &[" __  __ ", "|  \\/  |", "| |\\/| |", "| |  | |", "|_|  |_|", "        "],
        'N' => &[" _   _ ", "| \\ | |", "|  \\| |", "| |\\  |", "|_| \\_|", "       "],
        'O' => &["  ___  ", " / _ \\ ", "| | | |", "| |_| |", " \\___/ ", "       "],
        'P' => &[" ____  ", "|  _ \\ ", "| |_) |", "|  __/ ", "|_|    ", "       "],
        'Q' => &["  ___  ", " / _ \\ ", "| | | |", "| |_| |", " \\__\\_\\", "       "],
        'R' => &[" ____  ", "|  _ \\ ", "| |_) |", "|  _ < ", "|_| \\_\\", "       "],
        'S' => &[" ____  ", "/ ___| ", "\\___ \\ ", " ___) |", "|____/ ", "       "],
        'T' => &[" _____ ", "|_   _|", "  | |  ", "  | |  ", "  |_|  ", "       "],
        'U' => &[" _   _ ", "| | | |", "| | | |", "| |_| |", " \\___/ ", "       "],
        'V' => &[
            "__     __",
            "\\ \\   / /",
            " \\ \\ / / ",
            "  \\ V /  ",
            "   \\_/   ",
            "         ",
        ],
        'W' => &[
            "__        __",
            "\\ \\      / /",
            " \\ \\ /\\ / / ",
            "  \\ V  V /  ",
            "   \\_/\\_/   ",
            "            ",
        ],
        'X' => &["__  __", "\\ \\/ /", " \\  / ", " /  \\ ", "/_/\\_\\", "      "],
        'Y' => &["__   __", "\\ \\ / /", " \\ V / ", "  | |  ", "  |_|  ", "       "],
        'Z' => &[" _____", "|__  /", "  / / ", " / /_ ", "/____|", "      "],
        '0' => &["  ___  ", " / _ \\ ", "| | | |", "| |_| |", " \\___/ ", "       "],
        '1' => &[" _ ", "/ |", "| |", "| |", "|_|", "   "],
        '2' => &[" ____  ", "|___ \\ ", "  __) |", " / __/ ", "|_____|", "       "],
        '3' => &[" _____ ", "|___ / ", "  |_ \\ ", " ___) |", "|____/ ", "       "],
        '4' => &[" _  _   ", "| || |  ", "| || |_ ", "|__   _|", "   |_|  ", "        "],
        '5' => &[" ____  ", "| ___| ", "|___ \\ ", " ___) |", "|____/ ", "       "],
        '6' => &["  __   ", " / /_  ", "| '_ \\ ", "| (_) |", " \\___/ ", "       "],
        '7' => &[" _____ ", "|___  |", "   / / ", "  / /  ", " /_/   ", "       "],
        '8' => &["  ___  ", " ( _ ) ", " / _ \\ ", "| (_) |", " \\___/ ", "       "],
        '9' => &["  ___  ", " / _ \\ ", "| (_) |", " \\__, |", "   /_/ ", "       "],
        '!' => &[" _ ", "| |", "| |", "|_|", "(_)", "   "],
        '?' => &[" ___ ", "|__ \\", "  / /", " |_| ", " (_) ", "     "],
        '.' => &["   ", "   ", "   ", " _ ", "(_)", "   "],
        ',' => &["   ", "   ", "   ", " _ ", "( )", "|/ "],
        '-' => &["       ", "       ", " _____ ", "|_____|", "       ", "       "],
        '_' => &["       ", "       ", "       ", "       ", " _____ ", "|_____|"],
        ' ' => &["    ", "    ", "    ", "    ", "    ", "    "],
        _ => &["       ", "       ", "       ", "       ", "       ", "       "],
    }
}

fn block_glyph(c: char) -> Glyph {
    match c {
        'A' => &["▄▀▄", "█▀█", "▀ ▀"],
        'B' => &["█▀▄", "█▀▄", "▀▀ "],
        'C' => &["▄▀▀", "█  ", " ▀▀"],
        'D' => &["█▀▄", "█ █", "▀▀ "],
        'E' => &["█▀▀", "█▀▀", "▀▀▀"],
        'F' => &["█▀▀", "█▀ ", "▀  "],
        'G' => &["▄▀▀", "█ ▄", " ▀▀"],
        'H' => &["█ █", "█▀█", "▀ ▀"],
        'I' => &["█", "█", "▀"],
        'J' => &["  █", "▄ █", " ▀ "],
        'K' => &["█ ▄", "██ ", "▀ ▀"],
        'L' => &["█  ", "█  ", "▀▀▀"],
        'M' => &["█▄ ▄█", "█ ▀ █", "▀   ▀"],
        'N' => &["█▄ █", "█ ▀█", "▀  ▀"],
        'O' => &["▄▀▄", "█ █", " ▀ "],
        'P' => &["█▀▄", "█▀ ", "▀  "],
        'Q' => &["▄▀▄", "█ █", " ▀▄"],
        'R' => &["█▀▄", "█▀▄", "▀ ▀"],
        'S' => &["▄▀▀", " ▀▄", "▀▀ "],
        'T' => &["▀█▀", " █ ", " ▀ "],
        'U' => &["█ █", "█ █", " ▀ "],
        'V' => &["█ █", "▀▄▀", " ▀ "],
        'W' => &["█   █", "█ █ █", " ▀ ▀ "],
        'X' => &["▀▄▀", " █ ", "▀ ▀"],
        'Y' => &["█ █", " █ ", " ▀ "],
        'Z' => &["▀▀█", "▄▀ ", "▀▀▀"],
        '0' => &["█▀█", "█ █", "▀▀▀"],
        '1' => &["▄█", " █", " ▀"],
        '2' => &["▀▀█", "█▀▀", "▀▀▀"],
        '3' => &["▀▀█", " ▀█", "▀▀▀"],
        '4' => &["█ █", "▀▀█", "  ▀"],
        '5' => &["█▀▀", "▀▀█", "▀▀▀"],
        '6' => &["█▀▀", "█▀█", "▀▀▀"],
        '7' => &["▀▀█", "  █", "  ▀"],
        '8' => &["█▀█", "█▀█", "▀▀▀"],
        '9' => &["█▀█", "▀▀█", "▀▀▀"],
        '!' => &["█", "█", "▄"],
        '?' => &["▀▀█", " ▄▀", " ▄ "],
        '.' => &[" ", " ", "▄"],
        '-' => &["   ", "▀▀▀", "   "],
        ' ' => &["  ", "  ", "  "],
        _ => &["   ", "   ", "   "],
    }
}

fn cyber_glyph(c: char) -> Glyph {
    match c {
        'A' => &["╔═╗", "╠═╣", "╩ ╩"],
        'B' => &["╔╗ ", "╠╩╗", "╚═╝"],
        'C' => &["╔═╗", "║  ", "╚═╝"],
        'D' => &["╔╦╗", " ║║", "═╩╝"],
        'E' => &["╔═╗", "║╣ ", "╚═╝"],
        'F' => &["╔═╗", "╠╣ ", "╚  "],
        'G' => &["╔═╗", "║ ╦", "╚═╝"],
        'H' => &["╦ ╦", "╠═╣", "╩ ╩"],
        'I' => &["╦", "║", "╩"],
        'J' => &[" ╦", " ║", "╚╝"],
        'K' => &["╦╔═", "╠╩╗", "╩ ╩"],
        'L' => &["╦  ", "║  ", "╩═╝"],
        'M' => &["╔╦╗", "║║║", "╩ ╩"],
        'N' => &["╔╗╔", "║║║", "╝╚╝"],
        'O' => &["╔═╗", "║ ║", "╚═╝"],
        'P' => &["╔═╗", "╠═╝", "╩  "],
        'Q' => &["╔═╗", "║ ║", "╚╩╝"],
        'R' => &["╦═╗", "╠╦╝", "╩╚═"],
        'S' => &["╔═╗", "╚═╗", "╚═╝"],
        'T' => &["╔╦╗", " ║ ", " ╩ "],
        'U' => &["╦ ╦", "║ ║", "╚═╝"],
        'V' => &["╦  ╦", "╚╗╔╝", " ╚╝ "],
        'W' => &["╦ ╦", "║║║", "╚╩╝"],
        'X' => &["═╗ ╦", "╔╩╦╝", "╩ ╚═"],
        'Y' => &["╦ ╦", "╚╦╝", " ╩ "],
        'Z' => &["╔═╗", "╔═╝", "╚═╝"],
        '0' => &["╔═╗", "║ ║", "╚═╝"],
        '1' => &["╗", "║", "╩"],
        '2' => &["╔═╗", "╔═╝", "╚══"],
        '3' => &["╔═╗", " ═╣", "╚═╝"],
        '4' => &["╦ ╦", "╚═╣", "  ╩"],
        '5' => &["╔══", "╚═╗", "╚═╝"],
        '6' => &["╔═╗", "╠═╗", "╚═╝"],
        '7' => &["╔═╗", "  ║", "  ╩"],
        '8' => &["╔═╗", "╠═╣", "╚═╝"],
        '9' => &["╔═╗", "╚═╣", "╚═╝"],
        '!' => &["╦", "║", "o"],
        '?' => &["╔═╗", " ╔╝", " o "],
        '.' => &[" ", " ", "o"],
        '-' => &["   ", "═══", "   "],
        ' ' => &["  ", "  ", "  "],
        _ => &["   ", "   ", "   "],
    }
}
