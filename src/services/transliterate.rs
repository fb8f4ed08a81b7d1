//! Serbian Cyrillic to ASCII Latin transliteration.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Serbian Cyrillic alphabet in azbuka order, paired with its ASCII rendering.
/// Diacritics are dropped (ш → s, ч/ћ → c) so the output survives slug stripping.
const SERBIAN_CYRILLIC: [(char, &str); 60] = [
    ('А', "A"),
    ('Б', "B"),
    ('В', "V"),
    ('Г', "G"),
    ('Д', "D"),
    ('Ђ', "Dj"),
    ('Е', "E"),
    ('Ж', "Z"),
    ('З', "Z"),
    ('И', "I"),
    ('Ј', "J"),
    ('К', "K"),
    ('Л', "L"),
    ('Љ', "Lj"),
    ('М', "M"),
    ('Н', "N"),
    ('Њ', "Nj"),
    ('О', "O"),
    ('П', "P"),
    ('Р', "R"),
    ('С', "S"),
    ('Т', "T"),
    ('Ћ', "C"),
    ('У', "U"),
    ('Ф', "F"),
    ('Х', "H"),
    ('Ц', "C"),
    ('Ч', "C"),
    ('Џ', "Dz"),
    ('Ш', "S"),
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('ђ', "dj"),
    ('е', "e"),
    ('ж', "z"),
    ('з', "z"),
    ('и', "i"),
    ('ј', "j"),
    ('к', "k"),
    ('л', "l"),
    ('љ', "lj"),
    ('м', "m"),
    ('н', "n"),
    ('њ', "nj"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('ћ', "c"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "c"),
    ('ч', "c"),
    ('џ', "dz"),
    ('ш', "s"),
];

static GLYPH_MAP: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| SERBIAN_CYRILLIC.into_iter().collect());

/// Returns the Latin substitute for a single Cyrillic character, if it has one.
pub fn latin_for(c: char) -> Option<&'static str> {
    GLYPH_MAP.get(&c).copied()
}

/// Replaces every mapped Cyrillic character with its Latin equivalent.
///
/// Characters outside the map (Latin letters, digits, punctuation, whitespace,
/// and Cyrillic letters foreign to Serbian) are copied through unchanged.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match latin_for(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
