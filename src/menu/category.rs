use std::cmp::Ordering;

/// Display identity of a menu category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    pub id: String,
    pub emoji: String,
    pub label: String,
}

const DEFAULT_EMOJI: &str = "🍽️";

/// Categories the shop is known to use: (sheet text, id, emoji, label).
const KNOWN_CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("Promos del dia", "promos", "🔥", "🔥 Promos del Día"),
    ("Combos", "combos", "🎁", "🎁 Combos"),
    ("Hamburguesas", "hamburguesas", "🍔", "🍔 Hamburguesas"),
    (
        "Hamburguesas mas papas",
        "hamburguesaspap",
        "🍔",
        "🍔 Hamburguesas + Papas",
    ),
    ("Lomos", "lomos", "🥩", "🥩 Lomos"),
    ("Guarniciones", "guarniciones", "🍟", "🍟 Guarniciones"),
    ("Bebidas", "bebidas", "🥤", "🥤 Bebidas"),
];

/// Resolve the raw `categoria` cell into an id, emoji and label.
///
/// A category that already starts with an emoji is used as written. A known
/// category gets its built-in label. Anything else gets a generic emoji.
pub fn resolve_category(raw: &str) -> CategoryLabel {
    if starts_with_emoji(raw) {
        let (emoji, name) = match raw.split_once(char::is_whitespace) {
            Some((emoji, rest)) if !rest.trim_start().is_empty() => (emoji, rest.trim_start()),
            _ => (raw, raw),
        };
        return CategoryLabel {
            id: slug(name),
            emoji: emoji.to_string(),
            label: raw.to_string(),
        };
    }

    if let Some((_, id, emoji, label)) = KNOWN_CATEGORIES.iter().find(|(key, ..)| *key == raw) {
        return CategoryLabel {
            id: id.to_string(),
            emoji: emoji.to_string(),
            label: label.to_string(),
        };
    }

    CategoryLabel {
        id: slug(raw),
        emoji: DEFAULT_EMOJI.to_string(),
        label: format!("{DEFAULT_EMOJI} {raw}"),
    }
}

/// Lower-case, whitespace runs replaced by `-`.
fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn starts_with_emoji(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    // text-style symbols count when forced to emoji presentation
    has_emoji_presentation(first) || chars.next() == Some('\u{FE0F}')
}

/// Code points that render as emoji by default (Unicode 15.1
/// `Emoji_Presentation`), as sorted inclusive ranges.
const EMOJI_PRESENTATION: &[(u32, u32)] = &[
    (0x231A, 0x231B), (0x23E9, 0x23EC), (0x23F0, 0x23F0), (0x23F3, 0x23F3),
    (0x25FD, 0x25FE), (0x2614, 0x2615), (0x2648, 0x2653), (0x267F, 0x267F),
    (0x2693, 0x2693), (0x26A1, 0x26A1), (0x26AA, 0x26AB), (0x26BD, 0x26BE),
    (0x26C4, 0x26C5), (0x26CE, 0x26CE), (0x26D4, 0x26D4), (0x26EA, 0x26EA),
    (0x26F2, 0x26F3), (0x26F5, 0x26F5), (0x26FA, 0x26FA), (0x26FD, 0x26FD),
    (0x2705, 0x2705), (0x270A, 0x270B), (0x2728, 0x2728), (0x274C, 0x274C),
    (0x274E, 0x274E), (0x2753, 0x2755), (0x2757, 0x2757), (0x2795, 0x2797),
    (0x27B0, 0x27B0), (0x27BF, 0x27BF), (0x2B1B, 0x2B1C), (0x2B50, 0x2B50),
    (0x2B55, 0x2B55), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF), (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A), (0x1F1E6, 0x1F1FF), (0x1F201, 0x1F201), (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F), (0x1F232, 0x1F236), (0x1F238, 0x1F23A), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C), (0x1F37E, 0x1F393),
    (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3), (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4),
    (0x1F3F8, 0x1F43E), (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A), (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F), (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC),
    (0x1F6D0, 0x1F6D2), (0x1F6D5, 0x1F6D7), (0x1F6DC, 0x1F6DF), (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC), (0x1F7E0, 0x1F7EB), (0x1F7F0, 0x1F7F0), (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945), (0x1F947, 0x1F9FF), (0x1FA70, 0x1FA7C), (0x1FA80, 0x1FA88),
    (0x1FA90, 0x1FABD), (0x1FABF, 0x1FAC5), (0x1FACE, 0x1FADB), (0x1FAE0, 0x1FAE8),
    (0x1FAF0, 0x1FAF8),
];

fn has_emoji_presentation(c: char) -> bool {
    let c = u32::from(c);
    EMOJI_PRESENTATION
        .binary_search_by(|&(start, end)| {
            if end < c {
                Ordering::Less
            } else if start > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}
