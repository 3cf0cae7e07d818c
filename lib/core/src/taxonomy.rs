// Category taxonomy: literal catalog tags -> canonical domain groups
use serde::{Deserialize, Serialize};

/// Literal category strings belonging to the real estate domain,
/// covering the Cyrillic and English forms observed in the catalog.
pub static REAL_ESTATE_CATEGORIES: &[&str] = &[
    "Недвижимость",
    "Квартиры",
    "Квартира",
    "Дома",
    "Дом",
    "Участки",
    "Участок",
    "Дачи",
    "Real Estate",
    "Apartments",
    "Apartment",
    "Houses",
    "House",
    "Land",
];

/// Literal category strings belonging to the auto/transport domain.
pub static AUTO_CATEGORIES: &[&str] = &[
    "Автомобили",
    "Автомобиль",
    "Транспорт",
    "Авто",
    "Мотоциклы",
    "Cars",
    "Car",
    "Auto",
    "Transport",
    "Motorcycles",
];

/// Literal category strings belonging to the electronics domain.
pub static ELECTRONICS_CATEGORIES: &[&str] = &[
    "Электроника",
    "Телефоны",
    "Телефон",
    "Ноутбуки",
    "Ноутбук",
    "Компьютеры",
    "Техника",
    "Electronics",
    "Phones",
    "Phone",
    "Laptops",
    "Laptop",
    "Computers",
];

/// Canonical domain bucket for a literal category string.
///
/// `Other` is the synthetic singleton group for unrecognized literals:
/// it carries the literal itself, so two listings with the same unknown
/// category still compare equal, while two different unknown literals
/// never do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    RealEstate,
    Auto,
    Electronics,
    Other(String),
}

impl CategoryGroup {
    /// Resolve a literal category tag to its domain group.
    ///
    /// Lookup is case-sensitive exact match against the synonym tables;
    /// case normalization is the caller's responsibility. A known
    /// fragility inherited from the catalog data, where tags are stored
    /// in their display casing.
    #[must_use]
    pub fn of(literal: &str) -> CategoryGroup {
        if REAL_ESTATE_CATEGORIES.contains(&literal) {
            CategoryGroup::RealEstate
        } else if AUTO_CATEGORIES.contains(&literal) {
            CategoryGroup::Auto
        } else if ELECTRONICS_CATEGORIES.contains(&literal) {
            CategoryGroup::Electronics
        } else {
            CategoryGroup::Other(literal.to_string())
        }
    }

    /// True when the literal resolved to a known domain group
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, CategoryGroup::Other(_))
    }

    /// All literal tags belonging to this group. Empty for `Other`,
    /// whose only member is the literal it carries.
    #[must_use]
    pub fn literals(&self) -> &'static [&'static str] {
        match self {
            CategoryGroup::RealEstate => REAL_ESTATE_CATEGORIES,
            CategoryGroup::Auto => AUTO_CATEGORIES,
            CategoryGroup::Electronics => ELECTRONICS_CATEGORIES,
            CategoryGroup::Other(_) => &[],
        }
    }
}

impl std::fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryGroup::RealEstate => write!(f, "real_estate"),
            CategoryGroup::Auto => write!(f, "auto"),
            CategoryGroup::Electronics => write!(f, "electronics"),
            CategoryGroup::Other(literal) => write!(f, "other:{}", literal),
        }
    }
}
