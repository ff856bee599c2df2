//! Static vocabularies behind the category classifiers.
//!
//! Entries are written the way boards spell them; they are normalized once when first used, so
//! `"speech_bubble"` here matches `Speech-Bubble` in a post.

/// Substrings that mark a clothing tag.
pub(super) const CLOTHING_KEYWORDS: &[&str] = &[
    "dress",
    "shirt",
    "skirt",
    "armor",
    "armour",
    "thighhighs",
    "kneehighs",
    "pantyhose",
    "leggings",
    "stockings",
    "socks",
    "jacket",
    "coat",
    "hoodie",
    "sweater",
    "cardigan",
    "blouse",
    "camisole",
    "tank top",
    "crop top",
    "tube top",
    "bikini",
    "swimsuit",
    "leotard",
    "bodysuit",
    "kimono",
    "yukata",
    "hakama",
    "serafuku",
    "sailor collar",
    "necktie",
    "bowtie",
    "gloves",
    "boots",
    "shoes",
    "sandals",
    "high heels",
    "panties",
    "lingerie",
    "corset",
    "garter",
    "apron",
    "cloak",
    "scarf",
    "shorts",
    "pants",
    "jeans",
    "overalls",
    "tuxedo",
    "sleeves",
    "detached collar",
    "choker",
    "belt",
    "capelet",
    "poncho",
    "bathrobe",
    "tracksuit",
];

/// Clothing words that also occur inside unrelated words ("landscape", "harvest", "wardrobe"),
/// matched only as whole words.
pub(super) const CLOTHING_WORDS: &[&str] = &["bra", "cape", "vest", "robe", "suit"];

/// Suffixes that make a tag clothing on their own ("school uniform", "nurse outfit").
pub(super) const CLOTHING_SUFFIXES: &[&str] = &[" uniform", " outfit", " costume"];

/// Prefixes that negate a clothing keyword ("no bra", "without gloves", "nude apron").
pub(super) const CLOTHING_NEGATIONS: &[&str] = &["no ", "without ", "nude", "naked "];

pub(super) const TEXT_EXACT: &[&str] = &[
    "watermark",
    "sample_watermark",
    "web_address",
    "signature",
    "artist_name",
    "character_name",
    "copyright_name",
    "company_name",
    "logo",
    "dated",
    "username",
    "twitter_username",
    "patreon_username",
    "pixiv_id",
    "speech_bubble",
    "thought_bubble",
    "subtitled",
    "subtitle",
    "text",
    "translated",
    "translation_request",
    "english",
    "onomatopoeia",
    "sound_effects",
    "title",
    "page_number",
    "qr_code",
    "barcode",
];

pub(super) const TEXT_KEYWORDS: &[&str] =
    &["commentary", "speech bubble", "dialog", "subtitle", "caption"];

pub(super) const TEXT_PREFIXES: &[&str] = &["translated ", "translation ", "text "];

pub(super) const FURRY_CORE: &[&str] = &[
    "furry",
    "furry_female",
    "furry_male",
    "furry_with_non-furry",
    "anthro",
    "kemono",
    "feral",
    "scalie",
    "mammal",
    "canine",
    "canid",
    "canis",
    "felid",
    "feline",
    "lupine",
    "vulpine",
    "equine",
    "bovine",
    "avian",
    "reptile",
    "wolf",
    "fox",
    "dog",
    "cat",
    "dragon",
    "protogen",
    "sergal",
    "body_fur",
    "fur",
    "fluffy_fur",
    "snout",
    "muzzle",
    "paws",
    "pawpads",
    "digitigrade",
    "animal_nose",
    "anthrofied",
    "pokemon_(creature)",
    "digimon_(creature)",
];

pub(super) const FURRY_PREFIXES: &[&str] =
    &["pokemon", "pok\u{e9}mon", "pocket monsters", "pkmn", "pokemon_(creature)"];

pub(super) const ANIMAL_EAR_KEYWORDS: &[&str] = &[
    "animal ears",
    "animal ear fluff",
    "cat ears",
    "dog ears",
    "fox ears",
    "wolf ears",
    "rabbit ears",
    "bunny ears",
    "horse ears",
    "cow ears",
    "bear ears",
    "mouse ears",
    "tiger ears",
    "lion ears",
    "raccoon ears",
    "squirrel ears",
    "sheep ears",
    "goat ears",
    "deer ears",
    "bat ears",
    "kemonomimi",
    "nekomimi",
];

pub(super) const HORN_KEYWORDS: &[&str] = &[
    "horns",
    "single horn",
    "horn ornament",
    "antlers",
    "antler",
    "broken horn",
    "curled horns",
];

pub(super) const HEADWEAR: &[&str] = &[
    "hat",
    "cap",
    "baseball_cap",
    "beret",
    "beanie",
    "bonnet",
    "top_hat",
    "mini_top_hat",
    "sun_hat",
    "straw_hat",
    "witch_hat",
    "wizard_hat",
    "santa_hat",
    "cowboy_hat",
    "fedora",
    "peaked_cap",
    "military_hat",
    "police_hat",
    "nurse_cap",
    "mob_cap",
    "school_hat",
    "hat_ribbon",
    "hat_bow",
    "hat_ornament",
    "hat_flower",
    "headdress",
    "maid_headdress",
    "headpiece",
    "head_wreath",
    "helmet",
    "hood",
    "hood_up",
    "hood_down",
    "crown",
    "mini_crown",
    "tiara",
    "circlet",
    "diadem",
    "headband",
    "hairband",
    "veil",
    "bridal_veil",
    "visor_cap",
    "bandana",
    "kerchief",
    "turban",
    "tokin_hat",
];

pub(super) const HALOS: &[&str] = &[
    "halo",
    "fake_halo",
    "broken_halo",
    "mechanical_halo",
    "energy_halo",
    "glowing_halo",
];

pub(super) const HAIR_COLORS: &[&str] = &[
    "black_hair",
    "blonde_hair",
    "blond_hair",
    "brown_hair",
    "light_brown_hair",
    "dark_brown_hair",
    "red_hair",
    "dark_red_hair",
    "blue_hair",
    "light_blue_hair",
    "dark_blue_hair",
    "green_hair",
    "light_green_hair",
    "dark_green_hair",
    "pink_hair",
    "purple_hair",
    "light_purple_hair",
    "white_hair",
    "silver_hair",
    "grey_hair",
    "gray_hair",
    "orange_hair",
    "aqua_hair",
    "multicolored_hair",
    "two-tone_hair",
    "gradient_hair",
    "streaked_hair",
    "colored_inner_hair",
];

pub(super) const EYE_COLORS: &[&str] = &[
    "blue_eyes",
    "light_blue_eyes",
    "red_eyes",
    "green_eyes",
    "brown_eyes",
    "purple_eyes",
    "violet_eyes",
    "yellow_eyes",
    "golden_eyes",
    "amber_eyes",
    "pink_eyes",
    "black_eyes",
    "grey_eyes",
    "gray_eyes",
    "orange_eyes",
    "aqua_eyes",
    "white_eyes",
    "silver_eyes",
    "heterochromia",
    "multicolored_eyes",
];

pub(super) const SERIES_KEYWORDS: &[&str] = &[
    "franchise",
    "touhou",
    "fate/",
    "fate (series)",
    "genshin impact",
    "honkai",
    "kantai collection",
    "azur lane",
    "arknights",
    "blue archive",
    "hololive",
    "nijisanji",
    "idolmaster",
    "love live",
    "vocaloid",
    "umamusume",
    "girls' frontline",
    "final fantasy",
    "the legend of zelda",
    "jojo no kimyou na bouken",
];

/// Suffixes checked against both the raw (lowercased) and normalized forms.
pub(super) const SERIES_SUFFIXES: &[&str] = &["_series", "_franchise", "_media", "_universe"];

pub(super) const SUBJECT_COUNTS: &[&str] = &[
    "solo",
    "solo_focus",
    "1girl",
    "2girls",
    "3girls",
    "4girls",
    "5girls",
    "6+girls",
    "multiple_girls",
    "1boy",
    "2boys",
    "3boys",
    "4boys",
    "5boys",
    "6+boys",
    "multiple_boys",
    "1other",
    "2others",
    "3others",
    "multiple_others",
    "no_humans",
    "duo",
    "trio",
    "group",
];
