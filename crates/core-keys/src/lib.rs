//! Character Key Generator.
//!
//! Assigns each glyph of a formatted amount a `CharacterKey` so an animation
//! layer can tell which glyphs are "the same" between two consecutive
//! renders of one field.
//!
//! Policy (fixed, not a heuristic to tune):
//! - Separators key on absolute position: `"{index}-{count}-{char}"`. A group
//!   symbol that moves is a new element and animates in/out.
//! - Everything else keys on value and repetition rank: `"{char}-{count}"`.
//!   Inserting a leading digit shifts positions but not identities.
//! - The lone placeholder `"0"` always keys as `"0-0"`.
//!
//! `count` is the number of identical glyphs before `index`. Keys depend only
//! on `(formatted, separators)`; there are no counters between calls.

pub mod glyph;

use core_locale::SeparatorSet;
use glyph::{Glyph, segment};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Display string shown for an empty or zero field.
pub const PLACEHOLDER: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("glyph index {index} out of range for a display of {len} glyphs")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterKey(String);

impl CharacterKey {
    fn separator(index: usize, count: usize, glyph: &str) -> Self {
        Self(format!("{index}-{count}-{glyph}"))
    }

    fn value(glyph: &str, count: usize) -> Self {
        Self(format!("{glyph}-{count}"))
    }

    fn placeholder() -> Self {
        Self::value(PLACEHOLDER, 0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphRole {
    Digit,
    Decimal,
    Group,
    /// The lone `"0"` shown for an empty field; renderers typically dim it.
    Placeholder,
    Other,
}

/// Which way a glyph leaves when it disappears: the leading glyph slides up,
/// the rest slide down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedGlyph {
    pub glyph: String,
    pub key: CharacterKey,
    pub role: GlyphRole,
    pub index: usize,
    pub width: u16,
}

impl KeyedGlyph {
    /// Element identity handed to the animation layer: glyph plus key.
    pub fn render_key(&self) -> String {
        format!("{}-{}", self.glyph, self.key)
    }

    pub fn exit_direction(&self) -> ExitDirection {
        if self.index == 0 {
            ExitDirection::Up
        } else {
            ExitDirection::Down
        }
    }
}

fn role_of(formatted: &str, glyph: &str, separators: &SeparatorSet) -> GlyphRole {
    if formatted == PLACEHOLDER {
        GlyphRole::Placeholder
    } else if separators.is_decimal(glyph) {
        GlyphRole::Decimal
    } else if separators.is_group(glyph) {
        GlyphRole::Group
    } else if glyph.len() == 1 && glyph.as_bytes()[0].is_ascii_digit() {
        GlyphRole::Digit
    } else {
        GlyphRole::Other
    }
}

fn is_separator(glyph: &str, separators: &SeparatorSet) -> bool {
    separators.is_decimal(glyph) || separators.is_group(glyph)
}

/// Key for the glyph at `index` of `formatted`.
///
/// Fails when `index` is not a glyph of `formatted`: that means the caller
/// and the formatter disagree about the display string.
pub fn character_key(
    formatted: &str,
    separators: &SeparatorSet,
    index: usize,
) -> Result<CharacterKey, KeyError> {
    let glyphs = segment(formatted);
    let Some(target) = glyphs.get(index) else {
        return Err(KeyError::OutOfRange {
            index,
            len: glyphs.len(),
        });
    };
    if formatted == PLACEHOLDER {
        return Ok(CharacterKey::placeholder());
    }
    let count = glyphs[..index]
        .iter()
        .filter(|g| g.cluster == target.cluster)
        .count();
    Ok(key_for(target, index, count, separators))
}

fn key_for(glyph: &Glyph<'_>, index: usize, count: usize, separators: &SeparatorSet) -> CharacterKey {
    if is_separator(glyph.cluster, separators) {
        CharacterKey::separator(index, count, glyph.cluster)
    } else {
        CharacterKey::value(glyph.cluster, count)
    }
}

/// Keys for every glyph of `formatted`, in display order.
pub fn keyed_glyphs(formatted: &str, separators: &SeparatorSet) -> Vec<KeyedGlyph> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let out: Vec<KeyedGlyph> = segment(formatted)
        .into_iter()
        .enumerate()
        .map(|(index, glyph)| {
            let count = seen.entry(glyph.cluster).or_insert(0);
            let key = if formatted == PLACEHOLDER {
                CharacterKey::placeholder()
            } else {
                key_for(&glyph, index, *count, separators)
            };
            *count += 1;
            KeyedGlyph {
                glyph: glyph.cluster.to_string(),
                role: role_of(formatted, glyph.cluster, separators),
                key,
                index,
                width: glyph.width,
            }
        })
        .collect();
    trace!(target: "keys", glyphs = out.len(), "keys_assigned");
    out
}
