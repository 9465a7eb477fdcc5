//! Text cleanup shared by the ingredient parser and amount handling.

/// Unicode vulgar fractions and their ASCII renderings.
const VULGAR_FRACTIONS: &[(char, &str)] = &[
    ('¼', "1/4"),
    ('½', "1/2"),
    ('¾', "3/4"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
];

/// Replace Unicode fraction glyphs with their ASCII `n/d` form.
///
/// Every other character passes through untouched, including digits,
/// decimals and fractions that are already ASCII.
pub fn normalize_fractions(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match VULGAR_FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}
