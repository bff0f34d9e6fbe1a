//! Built-in bold block font.
//!
//! Glyphs are 5 cells wide and 7 cells tall. Lowercase input is drawn with
//! the uppercase glyph; characters without a glyph advance like a space.

/// Glyph width in font cells.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in font cells.
pub const GLYPH_HEIGHT: usize = 7;

/// Horizontal advance per character in font cells (glyph plus spacing).
pub const ADVANCE: usize = 6;

/// Font cells per em. A glyph's cap height is `GLYPH_HEIGHT / CELLS_PER_EM` of the font size.
pub const CELLS_PER_EM: f32 = 10.0;

/// Glyph bitmaps, one string per row, `█` for ink.
const GLYPHS: &[(char, [&str; GLYPH_HEIGHT])] = &[
    (
        'A',
        [
            " ███ ",
            "█   █",
            "█   █",
            "█████",
            "█   █",
            "█   █",
            "█   █",
        ],
    ),
    (
        'B',
        [
            "████ ",
            "█   █",
            "█   █",
            "████ ",
            "█   █",
            "█   █",
            "████ ",
        ],
    ),
    (
        'C',
        [
            " ███ ",
            "█   █",
            "█    ",
            "█    ",
            "█    ",
            "█   █",
            " ███ ",
        ],
    ),
    (
        'D',
        [
            "████ ",
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            "████ ",
        ],
    ),
    (
        'E',
        [
            "█████",
            "█    ",
            "█    ",
            "████ ",
            "█    ",
            "█    ",
            "█████",
        ],
    ),
    (
        'F',
        [
            "█████",
            "█    ",
            "█    ",
            "████ ",
            "█    ",
            "█    ",
            "█    ",
        ],
    ),
    (
        'G',
        [
            " ███ ",
            "█   █",
            "█    ",
            "█ ███",
            "█   █",
            "█   █",
            " ████",
        ],
    ),
    (
        'H',
        [
            "█   █",
            "█   █",
            "█   █",
            "█████",
            "█   █",
            "█   █",
            "█   █",
        ],
    ),
    (
        'I',
        [
            " ███ ",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
            " ███ ",
        ],
    ),
    (
        'J',
        [
            "  ███",
            "   █ ",
            "   █ ",
            "   █ ",
            "   █ ",
            "█  █ ",
            " ██  ",
        ],
    ),
    (
        'K',
        [
            "█   █",
            "█  █ ",
            "█ █  ",
            "██   ",
            "█ █  ",
            "█  █ ",
            "█   █",
        ],
    ),
    (
        'L',
        [
            "█    ",
            "█    ",
            "█    ",
            "█    ",
            "█    ",
            "█    ",
            "█████",
        ],
    ),
    (
        'M',
        [
            "█   █",
            "██ ██",
            "█ █ █",
            "█ █ █",
            "█   █",
            "█   █",
            "█   █",
        ],
    ),
    (
        'N',
        [
            "█   █",
            "█   █",
            "██  █",
            "█ █ █",
            "█  ██",
            "█   █",
            "█   █",
        ],
    ),
    (
        'O',
        [
            " ███ ",
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            " ███ ",
        ],
    ),
    (
        'P',
        [
            "████ ",
            "█   █",
            "█   █",
            "████ ",
            "█    ",
            "█    ",
            "█    ",
        ],
    ),
    (
        'Q',
        [
            " ███ ",
            "█   █",
            "█   █",
            "█   █",
            "█ █ █",
            "█  █ ",
            " ██ █",
        ],
    ),
    (
        'R',
        [
            "████ ",
            "█   █",
            "█   █",
            "████ ",
            "█ █  ",
            "█  █ ",
            "█   █",
        ],
    ),
    (
        'S',
        [
            " ████",
            "█    ",
            "█    ",
            " ███ ",
            "    █",
            "    █",
            "████ ",
        ],
    ),
    (
        'T',
        [
            "█████",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
        ],
    ),
    (
        'U',
        [
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            " ███ ",
        ],
    ),
    (
        'V',
        [
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            " █ █ ",
            "  █  ",
        ],
    ),
    (
        'W',
        [
            "█   █",
            "█   █",
            "█   █",
            "█ █ █",
            "█ █ █",
            "█ █ █",
            " █ █ ",
        ],
    ),
    (
        'X',
        [
            "█   █",
            "█   █",
            " █ █ ",
            "  █  ",
            " █ █ ",
            "█   █",
            "█   █",
        ],
    ),
    (
        'Y',
        [
            "█   █",
            "█   █",
            " █ █ ",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
        ],
    ),
    (
        'Z',
        [
            "█████",
            "    █",
            "   █ ",
            "  █  ",
            " █   ",
            "█    ",
            "█████",
        ],
    ),
    (
        '0',
        [
            " ███ ",
            "█   █",
            "█  ██",
            "█ █ █",
            "██  █",
            "█   █",
            " ███ ",
        ],
    ),
    (
        '1',
        [
            "  █  ",
            " ██  ",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
            " ███ ",
        ],
    ),
    (
        '2',
        [
            " ███ ",
            "█   █",
            "    █",
            "   █ ",
            "  █  ",
            " █   ",
            "█████",
        ],
    ),
    (
        '3',
        [
            "█████",
            "   █ ",
            "  █  ",
            "   █ ",
            "    █",
            "█   █",
            " ███ ",
        ],
    ),
    (
        '4',
        [
            "   █ ",
            "  ██ ",
            " █ █ ",
            "█  █ ",
            "█████",
            "   █ ",
            "   █ ",
        ],
    ),
    (
        '5',
        [
            "█████",
            "█    ",
            "████ ",
            "    █",
            "    █",
            "█   █",
            " ███ ",
        ],
    ),
    (
        '6',
        [
            "  ██ ",
            " █   ",
            "█    ",
            "████ ",
            "█   █",
            "█   █",
            " ███ ",
        ],
    ),
    (
        '7',
        [
            "█████",
            "    █",
            "   █ ",
            "  █  ",
            " █   ",
            " █   ",
            " █   ",
        ],
    ),
    (
        '8',
        [
            " ███ ",
            "█   █",
            "█   █",
            " ███ ",
            "█   █",
            "█   █",
            " ███ ",
        ],
    ),
    (
        '9',
        [
            " ███ ",
            "█   █",
            "█   █",
            " ████",
            "    █",
            "   █ ",
            " ██  ",
        ],
    ),
    (
        '.',
        [
            "     ",
            "     ",
            "     ",
            "     ",
            "     ",
            " ██  ",
            " ██  ",
        ],
    ),
    (
        ',',
        [
            "     ",
            "     ",
            "     ",
            "     ",
            " ██  ",
            "  █  ",
            " █   ",
        ],
    ),
    (
        '!',
        [
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
            "     ",
            "  █  ",
        ],
    ),
    (
        '?',
        [
            " ███ ",
            "█   █",
            "    █",
            "   █ ",
            "  █  ",
            "     ",
            "  █  ",
        ],
    ),
    (
        ':',
        [
            "     ",
            " ██  ",
            " ██  ",
            "     ",
            " ██  ",
            " ██  ",
            "     ",
        ],
    ),
    (
        '-',
        [
            "     ",
            "     ",
            "     ",
            " ███ ",
            "     ",
            "     ",
            "     ",
        ],
    ),
    (
        '\'',
        [
            "  █  ",
            "  █  ",
            " █   ",
            "     ",
            "     ",
            "     ",
            "     ",
        ],
    ),
    (
        '/',
        [
            "    █",
            "    █",
            "   █ ",
            "  █  ",
            " █   ",
            "█    ",
            "█    ",
        ],
    ),
    (
        '+',
        [
            "     ",
            "  █  ",
            "  █  ",
            "█████",
            "  █  ",
            "  █  ",
            "     ",
        ],
    ),
    (
        '&',
        [
            " ██  ",
            "█  █ ",
            "█ █  ",
            " █   ",
            "█ █ █",
            "█  █ ",
            " ██ █",
        ],
    ),
    (
        '@',
        [
            " ███ ",
            "█   █",
            "█ ███",
            "█ █ █",
            "█ ███",
            "█    ",
            " ███ ",
        ],
    ),
    (
        '#',
        [
            " █ █ ",
            " █ █ ",
            "█████",
            " █ █ ",
            "█████",
            " █ █ ",
            " █ █ ",
        ],
    ),
    (
        ' ',
        [
            "     ",
            "     ",
            "     ",
            "     ",
            "     ",
            "     ",
            "     ",
        ],
    ),
];

/// Look up the rows of the glyph for `ch`.
pub fn glyph(ch: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    let ch = ch.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, rows)| rows)
}

/// Whether the font has ink for `ch`.
pub fn is_supported(ch: char) -> bool {
    glyph(ch).is_some()
}

/// Iterate the inked cells of a glyph as `(column, row)` pairs.
pub fn ink_cells<'a>(
    rows: &'a [&'a str; GLYPH_HEIGHT],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    rows.iter().enumerate().flat_map(|(row, line)| {
        line.chars()
            .enumerate()
            .filter(|(_, c)| *c == '█')
            .map(move |(col, _)| (col, row))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rows_have_glyph_width() {
        for (ch, rows) in GLYPHS {
            for row in rows {
                assert_eq!(row.chars().count(), GLYPH_WIDTH, "glyph {ch:?}");
            }
        }
    }

    #[test]
    fn test_lowercase_uses_uppercase_glyph() {
        assert_eq!(glyph('a'), glyph('A'));
        assert!(is_supported('z'));
        assert!(!is_supported('é'));
    }

    #[test]
    fn test_space_has_no_ink() {
        let rows = glyph(' ').unwrap();
        assert_eq!(ink_cells(rows).count(), 0);
    }

    #[test]
    fn test_ink_cells_of_l() {
        let rows = glyph('L').unwrap();
        // Six cells down the stem plus a five cell foot.
        assert_eq!(ink_cells(rows).count(), 11);
        assert!(ink_cells(rows).any(|cell| cell == (4, 6)));
    }
}
