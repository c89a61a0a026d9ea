// ABOUTME: Static unit conversion tables keyed by food category with food-specific overrides
// ABOUTME: Infers a food's category from its name and normalizes free-form unit strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Unit conversion table.
//!
//! Every unit is expressed as grams per unit. Volume units for liquids assume
//! water density unless a food profile says otherwise (milk is 1.03 g/ml).
//! Values are approximate household measures taken from USDA `FoodData
//! Central` portion data; they are meant for logging, not lab work.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use plateful_core::constants::{volume, weight};
use plateful_core::models::FoodUnit;
use serde::Serialize;

/// Coarse food grouping that decides which units make sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Fruit, measured by size or cup
    Produce,
    /// Vegetables
    Vegetable,
    /// Drinks, soups and anything poured
    Liquid,
    /// Cheese, yogurt, butter and cream
    Dairy,
    /// Meat, fish and eggs
    Meat,
    /// Rice, pasta, cereals
    Grain,
    /// Bread and baked goods
    Bakery,
    /// Chips, bars, cookies and candy
    PackagedSnack,
    /// Nut butters, jams and other spoonable spreads
    Spread,
    /// Anything unrecognized
    Generic,
}

impl FoodCategory {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Vegetable => "vegetable",
            Self::Liquid => "liquid",
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Grain => "grain",
            Self::Bakery => "bakery",
            Self::PackagedSnack => "packaged_snack",
            Self::Spread => "spread",
            Self::Generic => "generic",
        }
    }

    /// Units offered for the category, most natural first
    #[must_use]
    pub const fn units(&self) -> &'static [FoodUnit] {
        match self {
            Self::Produce => PRODUCE_UNITS,
            Self::Vegetable => VEGETABLE_UNITS,
            Self::Liquid => LIQUID_UNITS,
            Self::Dairy => DAIRY_UNITS,
            Self::Meat => MEAT_UNITS,
            Self::Grain => GRAIN_UNITS,
            Self::Bakery => BAKERY_UNITS,
            Self::PackagedSnack => SNACK_UNITS,
            Self::Spread => SPREAD_UNITS,
            Self::Generic => GENERIC_UNITS,
        }
    }

    const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Produce => &[
                "apple", "banana", "orange", "strawberry", "grape", "pear", "peach", "mango",
                "pineapple", "berry", "blueberry", "raspberry", "avocado", "melon", "watermelon",
                "kiwi", "cherry", "plum", "lemon", "lime", "fruit", "apricot", "nectarine",
            ],
            Self::Vegetable => &[
                "broccoli", "carrot", "spinach", "lettuce", "tomato", "potato", "onion", "pepper",
                "cucumber", "kale", "celery", "zucchini", "salad", "corn", "pea", "bean",
                "cauliflower", "mushroom", "vegetable", "veggie",
            ],
            Self::Liquid => &[
                "juice", "milk", "water", "coffee", "tea", "soda", "smoothie", "shake", "drink",
                "beverage", "lemonade", "broth", "soup", "kombucha", "latte", "cola", "wine",
                "beer", "oil", "buttermilk", "kefir",
            ],
            Self::Dairy => &["cheese", "yogurt", "yoghurt", "butter", "cream", "cottage"],
            Self::Meat => &[
                "chicken", "beef", "pork", "turkey", "fish", "salmon", "tuna", "steak", "ham",
                "bacon", "egg", "sausage", "shrimp", "lamb", "meat",
            ],
            Self::Grain => &[
                "rice", "pasta", "oat", "oatmeal", "cereal", "quinoa", "noodle", "spaghetti",
                "couscous", "barley", "granola",
            ],
            Self::Bakery => &[
                "bread", "bagel", "muffin", "toast", "croissant", "tortilla", "bun", "roll",
                "pancake", "waffle", "pie", "cake", "pizza",
            ],
            Self::PackagedSnack => &[
                "chips", "crisps", "cracker", "cookie", "candy", "chocolate", "pretzel", "popcorn",
                "bar", "snack", "biscuit",
            ],
            Self::Spread => &[
                "jam", "jelly", "marmalade", "honey", "hummus", "nutella", "spread", "tahini",
            ],
            Self::Generic => &[],
        }
    }

    /// Categories with keywords, in the order ties are broken
    const INFERABLE: [Self; 9] = [
        Self::Liquid,
        Self::Spread,
        Self::PackagedSnack,
        Self::Bakery,
        Self::Dairy,
        Self::Grain,
        Self::Meat,
        Self::Vegetable,
        Self::Produce,
    ];
}

impl Display for FoodCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight units every food can be converted through
pub const WEIGHT_UNITS: &[FoodUnit] = &[
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("kg", "kilogram", weight::GRAMS_PER_KG),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
    FoodUnit::new("lb", "pound", weight::GRAMS_PER_LB),
];

const GENERIC_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving", 100.0),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
];

const LIQUID_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 cup)", volume::ML_PER_CUP),
    FoodUnit::new("cup", "cup", volume::ML_PER_CUP),
    FoodUnit::new("ml", "milliliter", 1.0),
    FoodUnit::new("l", "liter", volume::ML_PER_L),
    FoodUnit::new("fl_oz", "fluid ounce", volume::ML_PER_FL_OZ),
    FoodUnit::new("tbsp", "tablespoon", volume::ML_PER_TBSP),
    FoodUnit::new("tsp", "teaspoon", volume::ML_PER_TSP),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
];

const PRODUCE_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving", 150.0),
    FoodUnit::new("small", "small", 100.0),
    FoodUnit::new("medium", "medium", 150.0),
    FoodUnit::new("large", "large", 200.0),
    FoodUnit::new("cup", "cup", 150.0),
    FoodUnit::new("slice", "slice", 25.0),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
];

const VEGETABLE_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving", 85.0),
    FoodUnit::new("cup", "cup", 90.0),
    FoodUnit::new("small", "small", 70.0),
    FoodUnit::new("medium", "medium", 120.0),
    FoodUnit::new("large", "large", 180.0),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
];

const DAIRY_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving", 100.0),
    FoodUnit::new("cup", "cup", 245.0),
    FoodUnit::new("tbsp", "tablespoon", 15.0),
    FoodUnit::new("slice", "slice", 21.0),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
];

const MEAT_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving", 85.0),
    FoodUnit::new("piece", "piece", 100.0),
    FoodUnit::new("slice", "slice", 28.0),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
    FoodUnit::new("lb", "pound", weight::GRAMS_PER_LB),
];

const GRAIN_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving", 45.0),
    FoodUnit::new("cup", "cup", 160.0),
    FoodUnit::new("tbsp", "tablespoon", 10.0),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
];

const BAKERY_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving", 50.0),
    FoodUnit::new("slice", "slice", 30.0),
    FoodUnit::new("piece", "piece", 60.0),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
];

const SNACK_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving", 28.0),
    FoodUnit::new("piece", "piece", 10.0),
    FoodUnit::new("package", "package", 45.0),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
];

const SPREAD_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (2 tbsp)", 32.0),
    FoodUnit::new("tbsp", "tablespoon", 16.0),
    FoodUnit::new("tsp", "teaspoon", 5.3),
    FoodUnit::new("g", "gram", 1.0),
    FoodUnit::new("oz", "ounce", weight::GRAMS_PER_OZ),
];

/// Two-word names whose head noun alone points at the wrong category
///
/// Each entry is `(modifier, head noun, category)`; the head noun also matches
/// its plural.
const COMPOUND_NAMES: &[(&str, &str, FoodCategory)] = &[
    ("peanut", "butter", FoodCategory::Spread),
    ("almond", "butter", FoodCategory::Spread),
    ("cashew", "butter", FoodCategory::Spread),
    ("nut", "butter", FoodCategory::Spread),
    ("apple", "butter", FoodCategory::Spread),
    ("cocoa", "butter", FoodCategory::Spread),
    ("fruit", "salad", FoodCategory::Produce),
    ("egg", "salad", FoodCategory::Meat),
    ("chicken", "salad", FoodCategory::Meat),
    ("tuna", "salad", FoodCategory::Meat),
    ("hot", "dog", FoodCategory::Meat),
    ("rice", "cake", FoodCategory::PackagedSnack),
];

/// Portion overrides for a specific food
///
/// A profile only applies when the food's inferred category equals
/// `category`, so "apple" portions never leak into "apple pie".
#[derive(Debug)]
pub struct FoodProfile {
    /// Category the profile belongs to
    pub category: FoodCategory,
    /// Units replacing (same key) or extending the category table
    pub units: &'static [FoodUnit],
    /// Extra spellings matched against name tokens
    pub aliases: &'static [&'static str],
}

impl FoodProfile {
    const fn new(category: FoodCategory, units: &'static [FoodUnit]) -> Self {
        Self {
            category,
            units,
            aliases: &[],
        }
    }

    const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

const APPLE_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 medium)", 182.0),
    FoodUnit::new("small", "small", 149.0),
    FoodUnit::new("medium", "medium", 182.0),
    FoodUnit::new("large", "large", 223.0),
    FoodUnit::new("cup", "cup, sliced", 125.0),
    FoodUnit::new("slice", "slice", 20.0),
];

const BANANA_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 medium)", 118.0),
    FoodUnit::new("small", "small", 101.0),
    FoodUnit::new("medium", "medium", 118.0),
    FoodUnit::new("large", "large", 136.0),
    FoodUnit::new("cup", "cup, sliced", 150.0),
    FoodUnit::new("slice", "slice", 7.0),
];

const ORANGE_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 medium)", 131.0),
    FoodUnit::new("small", "small", 96.0),
    FoodUnit::new("medium", "medium", 131.0),
    FoodUnit::new("large", "large", 184.0),
    FoodUnit::new("cup", "cup, sections", 180.0),
    FoodUnit::new("slice", "slice", 15.0),
];

const STRAWBERRY_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 cup)", 152.0),
    FoodUnit::new("small", "small", 7.0),
    FoodUnit::new("medium", "medium", 12.0),
    FoodUnit::new("large", "large", 18.0),
    FoodUnit::new("cup", "cup, whole", 152.0),
];

const AVOCADO_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1/3 medium)", 50.0),
    FoodUnit::new("medium", "medium", 150.0),
    FoodUnit::new("cup", "cup, sliced", 146.0),
    FoodUnit::new("slice", "slice", 15.0),
];

const EGG_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 large)", 50.0),
    FoodUnit::new("small", "small", 38.0),
    FoodUnit::new("medium", "medium", 44.0),
    FoodUnit::new("large", "large", 50.0),
    FoodUnit::new("piece", "egg", 50.0),
];

const CHICKEN_UNITS: &[FoodUnit] = &[
    FoodUnit::new("piece", "breast", 120.0),
    FoodUnit::new("cup", "cup, diced", 140.0),
];

const BREAD_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 slice)", 28.0),
    FoodUnit::new("slice", "slice", 28.0),
];

const RICE_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 cup cooked)", 158.0),
    FoodUnit::new("cup", "cup, cooked", 158.0),
];

const OAT_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1/2 cup dry)", 40.0),
    FoodUnit::new("cup", "cup, dry", 80.0),
];

// Whole milk, 1.03 g/ml
const MILK_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 cup)", 244.0),
    FoodUnit::new("cup", "cup", 244.0),
    FoodUnit::new("ml", "milliliter", 1.03),
    FoodUnit::new("l", "liter", 1030.0),
    FoodUnit::new("fl_oz", "fluid ounce", 30.5),
    FoodUnit::new("tbsp", "tablespoon", 15.3),
    FoodUnit::new("tsp", "teaspoon", 5.1),
];

const CHEESE_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 oz)", weight::GRAMS_PER_OZ),
    FoodUnit::new("slice", "slice", 21.0),
    FoodUnit::new("cup", "cup, shredded", 113.0),
];

const YOGURT_UNITS: &[FoodUnit] = &[
    FoodUnit::new("serving", "serving (1 container)", 170.0),
    FoodUnit::new("cup", "cup", 245.0),
];

static FOOD_PROFILES: LazyLock<HashMap<&'static str, FoodProfile>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // === Produce ===
    m.insert("apple", FoodProfile::new(FoodCategory::Produce, APPLE_UNITS));
    m.insert("banana", FoodProfile::new(FoodCategory::Produce, BANANA_UNITS));
    m.insert("orange", FoodProfile::new(FoodCategory::Produce, ORANGE_UNITS));
    m.insert(
        "strawberry",
        FoodProfile::new(FoodCategory::Produce, STRAWBERRY_UNITS),
    );
    m.insert("avocado", FoodProfile::new(FoodCategory::Produce, AVOCADO_UNITS));

    // === Protein ===
    m.insert("egg", FoodProfile::new(FoodCategory::Meat, EGG_UNITS));
    m.insert("chicken", FoodProfile::new(FoodCategory::Meat, CHICKEN_UNITS));

    // === Grains and bakery ===
    m.insert("bread", FoodProfile::new(FoodCategory::Bakery, BREAD_UNITS));
    m.insert("rice", FoodProfile::new(FoodCategory::Grain, RICE_UNITS));
    m.insert(
        "oat",
        FoodProfile::new(FoodCategory::Grain, OAT_UNITS).with_aliases(&["oatmeal", "porridge"]),
    );

    // === Dairy ===
    m.insert("milk", FoodProfile::new(FoodCategory::Liquid, MILK_UNITS));
    m.insert("cheese", FoodProfile::new(FoodCategory::Dairy, CHEESE_UNITS));
    m.insert(
        "yogurt",
        FoodProfile::new(FoodCategory::Dairy, YOGURT_UNITS).with_aliases(&["yoghurt"]),
    );

    m
});

static UNIT_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for (alias, key) in [
        ("gram", "g"),
        ("gr", "g"),
        ("gm", "g"),
        ("kilogram", "kg"),
        ("kilo", "kg"),
        ("ounce", "oz"),
        ("pound", "lb"),
        ("lbs", "lb"),
        ("milliliter", "ml"),
        ("millilitre", "ml"),
        ("liter", "l"),
        ("litre", "l"),
        ("tablespoon", "tbsp"),
        ("tbs", "tbsp"),
        ("tbl", "tbsp"),
        ("teaspoon", "tsp"),
        ("fluid_ounce", "fl_oz"),
        ("floz", "fl_oz"),
        ("pc", "piece"),
        ("pcs", "piece"),
        ("pkg", "package"),
        ("pack", "package"),
        ("packet", "package"),
        ("sm", "small"),
        ("med", "medium"),
        ("md", "medium"),
        ("lg", "large"),
        ("portion", "serving"),
    ] {
        m.insert(alias, key);
    }
    m
});

/// Every canonical unit key the catalog defines
static KNOWN_UNIT_KEYS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut keys: Vec<&'static str> = FoodCategory::INFERABLE
        .iter()
        .chain([FoodCategory::Generic].iter())
        .flat_map(|category| category.units().iter())
        .chain(WEIGHT_UNITS.iter())
        .chain(FOOD_PROFILES.values().flat_map(|profile| profile.units.iter()))
        .map(|unit| unit.key)
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
});

/// Normalize a free-form unit string to a canonical key
///
/// Folds case, whitespace, dots and hyphens, resolves aliases and strips
/// plurals, so "Tablespoons" becomes `tbsp` and "fl. oz" becomes `fl_oz`.
/// Unknown units are folded to their singular ("handfuls" becomes `handful`).
#[must_use]
pub fn normalize_unit(raw: &str) -> String {
    let folded = raw
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || matches!(c, '.' | '-' | '_'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    canonical_key(&folded)
        .or_else(|| singular_forms(&folded).find_map(|singular| canonical_key(&singular)))
        .map_or_else(|| fold_plural(&folded), str::to_owned)
}

/// Singular spelling of a unit with no canonical key
fn fold_plural(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies").filter(|stem| !stem.is_empty()) {
        return format!("{stem}y");
    }
    for suffix in ["sses", "xes", "ches", "shes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() && !stem.ends_with('s') => stem.to_owned(),
        _ => word.to_owned(),
    }
}

fn canonical_key(candidate: &str) -> Option<&'static str> {
    if let Some(key) = UNIT_ALIASES.get(candidate) {
        return Some(*key);
    }
    KNOWN_UNIT_KEYS
        .binary_search_by(|probe| (*probe).cmp(candidate))
        .ok()
        .and_then(|index| KNOWN_UNIT_KEYS.get(index).copied())
}

/// Candidate singular spellings of a token ("berries" -> "berry", "boxes" -> "box")
fn singular_forms(word: &str) -> impl Iterator<Item = String> {
    let ies = word.strip_suffix("ies").map(|stem| format!("{stem}y"));
    let es = word.strip_suffix("es").map(str::to_owned);
    let s = word.strip_suffix('s').map(str::to_owned);
    ies.into_iter().chain(es).chain(s)
}

/// Lowercase alphanumeric tokens of a food name, head phrase first
///
/// For "Apples, raw" the head phrase is "apples"; within a phrase tokens run
/// right to left because English names put the head noun last
/// ("Orange Juice" is a juice, "Apple Pie" is a pie).
fn name_tokens(food_name: &str) -> Vec<String> {
    let lowered = food_name.to_lowercase();
    let (head, rest) = lowered.split_once(',').unwrap_or((lowered.as_str(), ""));
    let words = |phrase: &str| -> Vec<String> {
        phrase
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .rev()
            .map(str::to_owned)
            .collect()
    };
    let mut tokens = words(head);
    tokens.extend(words(rest));
    tokens
}

fn token_matches(token: &str, word: &str) -> bool {
    token == word || singular_forms(token).any(|singular| singular == word)
}

/// Infer a food's category from keywords in its name
///
/// The first token (head phrase first, right to left) that names a known
/// keyword decides. A two-word name such as "peanut butter" is checked before
/// its head noun alone. Names with no keyword, including the empty name, are
/// [`FoodCategory::Generic`].
#[must_use]
pub fn infer_food_category(food_name: &str) -> FoodCategory {
    let tokens = name_tokens(food_name);
    tokens
        .iter()
        .enumerate()
        .find_map(|(index, token)| {
            compound_category(tokens.get(index + 1).map(String::as_str), token).or_else(|| keyword_category(token))
        })
        .unwrap_or(FoodCategory::Generic)
}

fn compound_category(modifier: Option<&str>, head: &str) -> Option<FoodCategory> {
    let modifier = modifier?;
    COMPOUND_NAMES
        .iter()
        .find(|(first, second, _)| modifier == *first && token_matches(head, second))
        .map(|(_, _, category)| *category)
}

fn keyword_category(token: &str) -> Option<FoodCategory> {
    FoodCategory::INFERABLE.into_iter().find(|category| {
        category
            .keywords()
            .iter()
            .any(|keyword| token_matches(token, keyword))
    })
}

fn lookup_profile(
    food_name: &str,
    category: FoodCategory,
) -> Option<(&'static str, &'static FoodProfile)> {
    name_tokens(food_name).iter().find_map(|token| {
        FOOD_PROFILES.iter().find_map(|(key, profile)| {
            let named = token_matches(token, key)
                || profile.aliases.iter().any(|alias| token_matches(token, alias));
            (named && profile.category == category).then_some((*key, profile))
        })
    })
}

/// Resolved unit table for one food
#[derive(Debug, Clone, Serialize)]
pub struct FoodUnits {
    /// Inferred category
    pub category: FoodCategory,
    /// Food-specific profile applied on top of the category table
    pub profile: Option<&'static str>,
    /// Units offered for the food, most natural first
    pub units: Vec<FoodUnit>,
}

impl FoodUnits {
    /// Resolve the unit table for a food name
    #[must_use]
    pub fn for_food(food_name: &str) -> Self {
        let category = infer_food_category(food_name);
        let profile = lookup_profile(food_name, category);

        let mut units = category.units().to_vec();
        if let Some((_, profile)) = profile {
            for unit in profile.units {
                match units.iter_mut().find(|existing| existing.key == unit.key) {
                    Some(existing) => *existing = *unit,
                    None => units.push(*unit),
                }
            }
        }

        Self {
            category,
            profile: profile.map(|(key, _)| key),
            units,
        }
    }

    /// Whether a canonical unit key is offered for this food
    #[must_use]
    pub fn offers(&self, unit_key: &str) -> bool {
        self.units.iter().any(|unit| unit.key == unit_key)
    }

    /// Grams in one unit: the food's own table first, then universal weight units
    #[must_use]
    pub fn grams_per_unit(&self, unit_key: &str) -> Option<f64> {
        self.units
            .iter()
            .chain(WEIGHT_UNITS.iter())
            .find(|unit| unit.key == unit_key)
            .and_then(|unit| unit.grams_per_unit)
    }
}

/// Names of foods with a dedicated portion profile
#[must_use]
pub fn profiled_foods() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = FOOD_PROFILES.keys().copied().collect();
    names.sort_unstable();
    names
}
