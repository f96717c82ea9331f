//! Heuristic fashion advice derived from the ranked, named colors of a garment.
//!
//! Every rule inspects the dominant color (rank 0) and, for the pairing rule, the runner-up
//! (rank 1). Rules add at most one [`Suggestion`] each; the result is a set, so the same
//! advice is never repeated.

use crate::text::{Locale, render_suggestion};
use crate::{ClassifiedColor, ColorCategory, ColorName};
use std::collections::BTreeSet;

/// Checked in this order, so brown (listed as both) counts as neutral.
pub const NEUTRAL_COLORS: &[ColorName] = &[
    ColorName::Black,
    ColorName::White,
    ColorName::Gray,
    ColorName::Beige,
    ColorName::Brown,
];
pub const WARM_COLORS: &[ColorName] = &[
    ColorName::Red,
    ColorName::Orange,
    ColorName::Yellow,
    ColorName::Brown,
    ColorName::Pink,
];
pub const COOL_COLORS: &[ColorName] = &[
    ColorName::Blue,
    ColorName::Green,
    ColorName::Purple,
    ColorName::Teal,
    ColorName::YellowGreen,
];

/// Colors that already are the neutrals a garment would be paired with.
pub const BASIC_NEUTRALS: &[ColorName] = &[ColorName::Black, ColorName::White, ColorName::Gray];

/// Main color → two neighbouring hues that make a harmonious outfit.
pub const ANALOGOUS_COLORS: &[(ColorName, [ColorName; 2])] = &[
    (ColorName::Red, [ColorName::Pink, ColorName::Orange]),
    (ColorName::Blue, [ColorName::Teal, ColorName::Purple]),
    (ColorName::Yellow, [ColorName::Orange, ColorName::YellowGreen]),
    (ColorName::Green, [ColorName::YellowGreen, ColorName::Teal]),
];

/// Main color → accent color for contrast. Brown and pink have no reverse entry.
pub const COMPLEMENTARY_COLORS: &[(ColorName, ColorName)] = &[
    (ColorName::Red, ColorName::Green),
    (ColorName::Green, ColorName::Red),
    (ColorName::Blue, ColorName::Orange),
    (ColorName::Orange, ColorName::Blue),
    (ColorName::Yellow, ColorName::Purple),
    (ColorName::Purple, ColorName::Yellow),
    (ColorName::Brown, ColorName::Teal),
    (ColorName::Pink, ColorName::Green),
];

/// Colors that get a canned styling remark of their own.
pub const REMARK_COLORS: &[(ColorName, Staple)] = &[
    (ColorName::Black, Staple::Black),
    (ColorName::White, Staple::White),
    (ColorName::Gray, Staple::Gray),
    (ColorName::Beige, Staple::Beige),
];

/// Overall impression of a colored main color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mood {
    Warm,
    Cool,
}

/// Wardrobe staples that come with a styling remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Staple {
    Black,
    White,
    Gray,
    Beige,
}

/// One piece of advice. Rendering to text happens in [`crate::text`].
///
/// The variant order is the order suggestions are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suggestion {
    NoColorsDetected,
    NeutralPairing {
        main: ColorName,
    },
    Analogous {
        main: ColorName,
        companions: [ColorName; 2],
    },
    Complementary {
        main: ColorName,
        accent: ColorName,
    },
    Mood {
        mood: Mood,
    },
    Remark {
        staple: Staple,
    },
    /// Neutral main color with a colored runner-up.
    NeutralWithAccent {
        main: ColorName,
        secondary: ColorName,
    },
    /// Colored main color with a neutral runner-up.
    AccentWithNeutral {
        main: ColorName,
        secondary: ColorName,
    },
    NoSpecificSuggestion,
}

#[must_use]
pub fn category_of(name: ColorName) -> ColorCategory {
    if NEUTRAL_COLORS.contains(&name) {
        ColorCategory::Neutral
    } else if WARM_COLORS.contains(&name) {
        ColorCategory::Warm
    } else if COOL_COLORS.contains(&name) {
        ColorCategory::Cool
    } else {
        ColorCategory::Other
    }
}

fn lookup<V: Copy>(table: &[(ColorName, V)], name: ColorName) -> Option<V> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// Build the set of suggestions for colors ranked by descending percentage.
#[must_use]
pub fn suggest(colors: &[ClassifiedColor]) -> BTreeSet<Suggestion> {
    let mut suggestions = BTreeSet::new();
    let Some(main) = colors.first() else {
        suggestions.insert(Suggestion::NoColorsDetected);
        return suggestions;
    };
    let main = main.name;
    let main_category = category_of(main);

    if !BASIC_NEUTRALS.contains(&main) {
        suggestions.insert(Suggestion::NeutralPairing { main });
    }

    if let Some(companions) = lookup(ANALOGOUS_COLORS, main) {
        suggestions.insert(Suggestion::Analogous { main, companions });
    }

    if let Some(accent) = lookup(COMPLEMENTARY_COLORS, main) {
        suggestions.insert(Suggestion::Complementary { main, accent });
    }

    match main_category {
        ColorCategory::Warm => {
            suggestions.insert(Suggestion::Mood { mood: Mood::Warm });
        }
        ColorCategory::Cool => {
            suggestions.insert(Suggestion::Mood { mood: Mood::Cool });
        }
        ColorCategory::Neutral | ColorCategory::Other => {}
    }

    if let Some(staple) = lookup(REMARK_COLORS, main) {
        suggestions.insert(Suggestion::Remark { staple });
    }

    if let Some(secondary) = colors.get(1) {
        let secondary = secondary.name;
        let main_is_neutral = main_category == ColorCategory::Neutral;
        let secondary_is_neutral = category_of(secondary) == ColorCategory::Neutral;
        if main_is_neutral && !secondary_is_neutral {
            suggestions.insert(Suggestion::NeutralWithAccent { main, secondary });
        } else if !main_is_neutral && secondary_is_neutral {
            suggestions.insert(Suggestion::AccentWithNeutral { main, secondary });
        }
    }

    if suggestions.is_empty() {
        suggestions.insert(Suggestion::NoSpecificSuggestion);
    }
    suggestions
}

/// Suggestions rendered as text in the given locale, without duplicates.
#[must_use]
pub fn suggest_color_combinations(colors: &[ClassifiedColor], locale: Locale) -> Vec<String> {
    let mut seen = BTreeSet::new();
    suggest(colors)
        .iter()
        .map(|suggestion| render_suggestion(suggestion, locale))
        .filter(|text| seen.insert(text.clone()))
        .collect()
}
