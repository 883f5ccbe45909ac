//! Display string segmentation.
//!
//! Contract:
//! - Input: the formatted display string.
//! - Output: one `Glyph` per extended grapheme cluster, with its display
//!   width in terminal cells.
//! - Guarantees: glyphs are in order, non-overlapping, and concatenate back to
//!   the input. Positions used by the key generator are indices into this list.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph<'a> {
    pub cluster: &'a str,
    pub width: u16,
}

pub fn segment(formatted: &str) -> Vec<Glyph<'_>> {
    formatted
        .graphemes(true)
        .map(|cluster| Glyph {
            cluster,
            width: cluster.width() as u16,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_amount_one_glyph_per_char() {
        let g = segment("1,234.5");
        assert_eq!(g.len(), 7);
        assert_eq!(g[1].cluster, ",");
        assert!(g.iter().all(|g| g.width == 1));
    }

    #[test]
    fn multibyte_group_symbol_is_one_glyph() {
        let s = "1\u{202F}234";
        let g = segment(s);
        assert_eq!(g.len(), 5);
        assert_eq!(g[1].cluster, "\u{202F}");
        assert_eq!(g[2].cluster, "2");
    }

    #[test]
    fn clusters_cover_input() {
        let s = "e\u{0301}1’0";
        let g = segment(s);
        assert_eq!(g[0].cluster, "e\u{0301}");
        let joined: String = g.iter().map(|g| g.cluster).collect();
        assert_eq!(joined, s);
    }
}
