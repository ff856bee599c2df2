//! Category classifiers
//!
//! Each `is_*` predicate answers one question about a single tag: is it clothing, is it a
//! watermark, does it describe an animal trait, and so on. They take raw or normalized tags
//! alike, never panic, and hold no state besides the static vocabularies in [`vocab`].
//!
//! Matching is done on the normalized key (see [`normalize`](crate::normalize::normalize)).
//! Inputs that normalize to nothing fall back to a plain lowercase/de-underscore pass.
use ahash::AHashSet;
use once_cell::sync::Lazy;

use crate::normalize::{classification_key, normalize};

mod vocab;

use vocab::*;

fn normalized_set(entries: &[&str]) -> AHashSet<String> {
    entries
        .iter()
        .map(|e| normalize(e))
        .filter(|e| !e.is_empty())
        .collect()
}

fn normalized_list(entries: &[&str]) -> Vec<String> {
    entries
        .iter()
        .map(|e| normalize(e))
        .filter(|e| !e.is_empty())
        .collect()
}

static CLOTHING: Lazy<Vec<String>> = Lazy::new(|| normalized_list(CLOTHING_KEYWORDS));
static TEXTUAL: Lazy<AHashSet<String>> = Lazy::new(|| normalized_set(TEXT_EXACT));
static FURRY: Lazy<AHashSet<String>> = Lazy::new(|| normalized_set(FURRY_CORE));
static POKEMON_PREFIXES: Lazy<Vec<String>> = Lazy::new(|| normalized_list(FURRY_PREFIXES));
static HEADWEAR_SET: Lazy<AHashSet<String>> = Lazy::new(|| {
    let mut set = normalized_set(HEADWEAR);
    set.extend(normalized_set(HALOS));
    set
});
static HAIR: Lazy<AHashSet<String>> = Lazy::new(|| normalized_set(HAIR_COLORS));
static EYES: Lazy<AHashSet<String>> = Lazy::new(|| normalized_set(EYE_COLORS));
static SUBJECTS: Lazy<AHashSet<String>> = Lazy::new(|| normalized_set(SUBJECT_COUNTS));
static SERIES_NORMALIZED_SUFFIXES: Lazy<Vec<String>> = Lazy::new(|| {
    SERIES_SUFFIXES
        .iter()
        .map(|s| format!(" {}", normalize(s)))
        .collect()
});

fn contains_any(tag: &str, keywords: &[impl AsRef<str>]) -> bool {
    keywords.iter().any(|k| tag.contains(k.as_ref()))
}

fn starts_with_any(tag: &str, prefixes: &[impl AsRef<str>]) -> bool {
    prefixes.iter().any(|p| tag.starts_with(p.as_ref()))
}

fn ends_with_any(tag: &str, suffixes: &[impl AsRef<str>]) -> bool {
    suffixes.iter().any(|s| tag.ends_with(s.as_ref()))
}

/// Clothing or armor. Negated forms ("no bra", "without gloves", "nude apron") are never clothing.
pub fn is_clothing(tag: &str) -> bool {
    let key = classification_key(tag);
    if key.is_empty() {
        return false;
    }

    if starts_with_any(&key, CLOTHING_NEGATIONS) || key.contains(" without ") {
        return false;
    }

    contains_any(&key, CLOTHING.as_slice())
        || ends_with_any(&key, CLOTHING_SUFFIXES)
        || key.split(' ').any(|word| CLOTHING_WORDS.contains(&word))
}

/// Watermarks, signatures, speech bubbles and any other lettering.
pub fn is_textual(tag: &str) -> bool {
    let key = classification_key(tag);
    if key.is_empty() {
        return false;
    }

    TEXTUAL.contains(&key)
        || key.contains(" text")
        || starts_with_any(&key, TEXT_PREFIXES)
        || contains_any(&key, TEXT_KEYWORDS)
}

/// Furry/kemono content and animal traits (ears, horns, antlers).
pub fn is_furry(tag: &str) -> bool {
    let key = classification_key(tag);
    if key.is_empty() {
        return false;
    }

    FURRY.contains(&key)
        || starts_with_any(&key, POKEMON_PREFIXES.as_slice())
        || contains_any(&key, ANIMAL_EAR_KEYWORDS)
        || contains_any(&key, HORN_KEYWORDS)
}

/// Hats, helmets, crowns, hoods and halos.
pub fn is_headwear(tag: &str) -> bool {
    let key = classification_key(tag);
    if key.is_empty() {
        return false;
    }

    HEADWEAR_SET.contains(&key) || key.contains(" halo")
}

/// Exact hair-color tags only, so "hairstyle" or "hair ornament" never match.
pub fn is_hair_color(tag: &str) -> bool {
    HAIR.contains(&classification_key(tag))
}

/// Exact eye-color tags only.
pub fn is_eye_color(tag: &str) -> bool {
    EYES.contains(&classification_key(tag))
}

/// Copyright/franchise names, either by keyword or by a `_series`-style suffix.
pub fn is_series(tag: &str) -> bool {
    let key = classification_key(tag);
    if key.is_empty() {
        return false;
    }

    let raw = tag.trim().to_lowercase();

    contains_any(&key, SERIES_KEYWORDS)
        || ends_with_any(&raw, SERIES_SUFFIXES)
        || ends_with_any(&key, SERIES_NORMALIZED_SUFFIXES.as_slice())
}

/// Subject-count tags: "solo", "1girl", "2boys", "multiple others", ...
pub fn is_subject(tag: &str) -> bool {
    SUBJECTS.contains(&classification_key(tag))
}

/// How many subjects a subject-count tag implies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Headcount {
    /// "no humans"
    Nobody,
    /// "solo", "solo focus", "1girl", "1boy", "1other"
    One,
    /// An exact count between two and five.
    Exactly(u8),
    /// "6+girls" and friends
    SixOrMore,
    /// "multiple girls", "group": any count above one.
    Multiple,
}

impl Headcount {
    /// Two subject tags agree when they imply the same count. "multiple" agrees with any count
    /// above one, which is how boards tag a "2girls" post ("2girls multiple girls").
    pub fn agrees_with(self, other: Self) -> bool {
        match (self, other) {
            (a, b) if a == b => true,
            (Self::Multiple, Self::Exactly(_) | Self::SixOrMore)
            | (Self::Exactly(_) | Self::SixOrMore, Self::Multiple) => true,
            _ => false,
        }
    }
}

/// Head count implied by a subject-count tag, `None` for anything else.
pub fn headcount(tag: &str) -> Option<Headcount> {
    let key = classification_key(tag);
    if !SUBJECTS.contains(&key) {
        return None;
    }

    let count = match key.as_str() {
        "no humans" => Headcount::Nobody,
        "solo" | "solo focus" => Headcount::One,
        "duo" => Headcount::Exactly(2),
        "trio" => Headcount::Exactly(3),
        "group" => Headcount::Multiple,
        k if k.starts_with("multiple ") => Headcount::Multiple,
        k if k.starts_with("6+") => Headcount::SixOrMore,
        k => match k.chars().next().and_then(|c| c.to_digit(10)) {
            Some(1) => Headcount::One,
            Some(n @ 2..=5) => Headcount::Exactly(n as u8),
            _ => Headcount::Multiple,
        },
    };
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clothing_keywords_and_suffixes() {
        assert!(is_clothing("white_dress"));
        assert!(is_clothing("Black_Thighhighs"));
        assert!(is_clothing("school_uniform"));
        assert!(is_clothing("maid_outfit"));
        assert!(is_clothing("halloween_costume"));
        assert!(is_clothing("sports_bra"));
        assert!(!is_clothing("zebra"));
        assert!(!is_clothing("blue_hair"));
    }

    #[test]
    fn short_clothing_words_need_word_boundaries() {
        assert!(is_clothing("red_cape"));
        assert!(is_clothing("sweater_vest"));
        assert!(is_clothing("business_suit"));
        assert!(is_clothing("robe"));
        assert!(is_clothing("bathrobe"));
        assert!(is_clothing("capelet"));

        for scenery in [
            "landscape",
            "cityscape",
            "seascape",
            "escape",
            "harvest",
            "pursuit",
            "suitcase",
            "wardrobe",
            "bracelet",
        ] {
            assert!(!is_clothing(scenery), "{scenery} is not clothing");
        }
    }

    #[test]
    fn clothing_negations_are_exempt() {
        assert!(!is_clothing("no_bra"));
        assert!(!is_clothing("nude_apron"));
        assert!(!is_clothing("without_gloves"));
        assert!(!is_clothing("naked_shirt"));
        assert!(!is_clothing("girl_without_shoes"));
        assert!(!is_clothing("no_panties"));
    }

    #[test]
    fn textual_tags() {
        assert!(is_textual("watermark"));
        assert!(is_textual("Speech_Bubble"));
        assert!(is_textual("japanese_text"));
        assert!(is_textual("text_focus"));
        assert!(is_textual("english_commentary"));
        assert!(is_textual("translated_by_fans"));
        assert!(is_textual("dialogue_box"));
        assert!(!is_textual("context"));
        assert!(!is_textual("textured_background"));
        assert!(!is_textual("1girl"));
    }

    #[test]
    fn furry_traits() {
        assert!(is_furry("anthro"));
        assert!(is_furry("pokemon_(creature)"));
        assert!(is_furry("Pok\u{e9}mon_Sword_and_Shield"));
        assert!(is_furry("fox_ears"));
        assert!(is_furry("animal_ear_fluff"));
        assert!(is_furry("dragon_horns"));
        assert!(is_furry("antlers"));
        assert!(!is_furry("1girl"));
        assert!(!is_furry("horn_(instrument)"));
    }

    #[test]
    fn headwear_and_halos() {
        assert!(is_headwear("witch_hat"));
        assert!(is_headwear("hat"));
        assert!(is_headwear("halo"));
        assert!(is_headwear("pink_halo"));
        assert!(!is_headwear("hat_removed_from_head"));
        assert!(!is_headwear("haloween"));
    }

    #[test]
    fn colors_are_exact() {
        assert!(is_hair_color("Blue_Hair"));
        assert!(is_hair_color("two-tone_hair"));
        assert!(!is_hair_color("hairstyle"));
        assert!(!is_hair_color("blue_hair_ornament"));
        assert!(is_eye_color("red_eyes"));
        assert!(!is_eye_color("closed_eyes"));
        assert!(!is_eye_color("blue_hair"));
    }

    #[test]
    fn series_by_keyword_or_suffix() {
        assert!(is_series("touhou"));
        assert!(is_series("genshin_impact"));
        assert!(is_series("fate/grand_order"));
        assert!(is_series("gundam_series"));
        assert!(is_series("marvel_universe"));
        assert!(is_series("Star-Wars-Franchise"));
        assert!(!is_series("1girl"));
    }

    #[test]
    fn subject_counts() {
        assert!(is_subject("1girl"));
        assert!(is_subject("6+girls"));
        assert!(is_subject("multiple_boys"));
        assert!(is_subject("Solo"));
        assert!(!is_subject("girl"));
        assert_eq!(headcount("1girl"), Some(Headcount::One));
        assert_eq!(headcount("solo"), Some(Headcount::One));
        assert_eq!(headcount("2girls"), Some(Headcount::Exactly(2)));
        assert_eq!(headcount("duo"), Some(Headcount::Exactly(2)));
        assert_eq!(headcount("6+boys"), Some(Headcount::SixOrMore));
        assert_eq!(headcount("multiple_girls"), Some(Headcount::Multiple));
        assert_eq!(headcount("no_humans"), Some(Headcount::Nobody));
        assert_eq!(headcount("blue_hair"), None);
    }

    #[test]
    fn headcount_agreement() {
        assert!(Headcount::One.agrees_with(Headcount::One));
        assert!(Headcount::Multiple.agrees_with(Headcount::Exactly(2)));
        assert!(Headcount::SixOrMore.agrees_with(Headcount::Multiple));
        assert!(!Headcount::One.agrees_with(Headcount::Exactly(2)));
        assert!(!Headcount::One.agrees_with(Headcount::Multiple));
        assert!(!Headcount::Nobody.agrees_with(Headcount::One));
    }

    #[test]
    fn total_on_odd_input() {
        for s in ["", "   ", "___", "()", "\u{0}", "\u{1F600}", "\u{5B57}\u{5E55}"] {
            let _ = is_clothing(s)
                || is_textual(s)
                || is_furry(s)
                || is_headwear(s)
                || is_hair_color(s)
                || is_eye_color(s)
                || is_series(s)
                || is_subject(s);
        }
        assert!(!is_clothing(""));
        assert!(!is_subject("   "));
    }
}
