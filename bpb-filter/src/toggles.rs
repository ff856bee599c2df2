//! Switches for the category-based filter rules.
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Independent on/off switches for each classification rule of the post filter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FilterToggles: u16 {
        const REMOVE_ARTIST = 0b0000_0000_0001;
        const REMOVE_CHARACTER = 0b0000_0000_0010;
        const REMOVE_CLOTHING = 0b0000_0000_0100;
        const REMOVE_TEXT = 0b0000_0000_1000;
        const RESTRICT_SUBJECT_COUNT = 0b0000_0001_0000;
        const REMOVE_FURRY = 0b0000_0010_0000;
        const REMOVE_HEADWEAR = 0b0000_0100_0000;
        const PRESERVE_HAIR_EYE_COLOR = 0b0000_1000_0000;
        const REMOVE_SERIES = 0b0001_0000_0000;
    }
}

/// The toggles as they appear in the `[filter.toggles]` table of the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub remove_artist: bool,
    pub remove_character: bool,
    pub remove_clothing: bool,
    pub remove_text: bool,
    pub restrict_subject_count: bool,
    pub remove_furry: bool,
    pub remove_headwear: bool,
    pub preserve_hair_eye_color: bool,
    pub remove_series: bool,
}

impl From<ToggleConfig> for FilterToggles {
    fn from(cfg: ToggleConfig) -> Self {
        let mut toggles = Self::empty();
        toggles.set(Self::REMOVE_ARTIST, cfg.remove_artist);
        toggles.set(Self::REMOVE_CHARACTER, cfg.remove_character);
        toggles.set(Self::REMOVE_CLOTHING, cfg.remove_clothing);
        toggles.set(Self::REMOVE_TEXT, cfg.remove_text);
        toggles.set(Self::RESTRICT_SUBJECT_COUNT, cfg.restrict_subject_count);
        toggles.set(Self::REMOVE_FURRY, cfg.remove_furry);
        toggles.set(Self::REMOVE_HEADWEAR, cfg.remove_headwear);
        toggles.set(Self::PRESERVE_HAIR_EYE_COLOR, cfg.preserve_hair_eye_color);
        toggles.set(Self::REMOVE_SERIES, cfg.remove_series);
        toggles
    }
}

impl From<FilterToggles> for ToggleConfig {
    fn from(t: FilterToggles) -> Self {
        Self {
            remove_artist: t.contains(FilterToggles::REMOVE_ARTIST),
            remove_character: t.contains(FilterToggles::REMOVE_CHARACTER),
            remove_clothing: t.contains(FilterToggles::REMOVE_CLOTHING),
            remove_text: t.contains(FilterToggles::REMOVE_TEXT),
            restrict_subject_count: t.contains(FilterToggles::RESTRICT_SUBJECT_COUNT),
            remove_furry: t.contains(FilterToggles::REMOVE_FURRY),
            remove_headwear: t.contains(FilterToggles::REMOVE_HEADWEAR),
            preserve_hair_eye_color: t.contains(FilterToggles::PRESERVE_HAIR_EYE_COLOR),
            remove_series: t.contains(FilterToggles::REMOVE_SERIES),
        }
    }
}
