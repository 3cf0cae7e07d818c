// Free-text query interpretation: phrase -> partial constraint set
use once_cell::sync::Lazy;
use regex::Regex;

use crate::evaluate::ConstraintSet;

/// Default floor for the budget heuristic: the largest number above it
/// is taken as the price ceiling. Calibrated for real-estate/vehicle
/// prices; domains with naturally small prices can lower it via
/// [`QueryInterpreter::budget_floor`].
pub const DEFAULT_BUDGET_FLOOR: f64 = 1000.0;

/// Fallback floor for the thousands-marker path ("до 50k")
const MARKER_BUDGET_FLOOR: f64 = 10.0;

/// Ordered keyword groups for category detection. The first group with
/// any trigger substring present wins; only one guess per query.
static CATEGORY_TRIGGERS: &[(&[&str], &[&str])] = &[
    (
        &["квартир", "apartment", "flat"],
        &["Квартиры", "Квартира", "Apartments", "Apartment"],
    ),
    (
        &["дом", "коттедж", "участок", "дач", "house", "cottage", "land"],
        &["Дома", "Дом", "Участки", "Участок", "Дачи", "Houses", "House", "Land"],
    ),
    (
        &["машин", "авто", "car"],
        &["Автомобили", "Автомобиль", "Авто", "Cars", "Car", "Auto"],
    ),
    (
        &["телефон", "ноутбук", "компьютер", "электрон", "phone", "laptop"],
        &["Телефоны", "Телефон", "Ноутбуки", "Ноутбук", "Компьютеры", "Электроника", "Phones", "Phone", "Laptops", "Laptop", "Electronics"],
    ),
];

/// District gazetteer: Latin slugs matched against the lower-cased text
static DISTRICTS: &[&str] = &[
    "mirabad",
    "yunusabad",
    "chilanzar",
    "yakkasaray",
    "shaykhantahur",
    "sergeli",
    "bektemir",
    "uchtepa",
    "almazar",
    "mirzo-ulugbek",
    "yashnabad",
];

/// Cyrillic special cases: (needle, Latin keyword, display form).
/// Deliberately covers only these two districts; the rest of the
/// gazetteer is Latin-only. See DESIGN.md.
static CYRILLIC_DISTRICTS: &[(&str, &str, &str)] = &[
    ("мирабад", "mirabad", "Мирабадский"),
    ("юнусабад", "yunusabad", "Юнусабадский"),
];

// digits, optional spaces, then a room indicator (Latin or Cyrillic x)
static ROOMS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:комн|room|[xх])").unwrap());

// integer or decimal, comma or dot as the separator
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:[.,]\d+)?").unwrap());

// explicit thousands: "50k" / "50к"
static EXPLICIT_K_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*[kк]\b").unwrap());

// a thousands marker anywhere in the text
static K_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d\s*[kк]\b|тыс|thousand").unwrap());

/// Turns a free-text search phrase into a partial [`ConstraintSet`].
///
/// Each field is detected by an independent pass over the same
/// lower-cased text; no pass consumes text from another, so the
/// extractors can be unit-tested in isolation.
#[derive(Debug, Clone)]
pub struct QueryInterpreter {
    /// Numbers above this are treated as budget ceilings
    pub budget_floor: f64,
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self {
            budget_floor: DEFAULT_BUDGET_FLOOR,
        }
    }
}

impl QueryInterpreter {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a phrase. Only the fields actually detected are set;
    /// an unintelligible phrase yields the empty constraint set.
    #[must_use]
    pub fn interpret(&self, text: &str) -> ConstraintSet {
        let lowered = text.to_lowercase();
        let mut constraints = ConstraintSet::new();

        constraints.category = detect_category(&lowered);
        constraints.rooms = detect_rooms(&lowered);
        constraints.max_price = self.detect_budget(&lowered);
        if let Some((keyword, district)) = detect_location(&lowered) {
            constraints.location_keyword = Some(keyword);
            constraints.district = district;
        }

        constraints
    }

    /// Budget heuristic, in priority order:
    /// 1. largest extracted number above the floor;
    /// 2. else, with a thousands marker present, the largest number
    ///    above 10, times 1000;
    /// 3. an explicit `<digits>k` always overrides.
    fn detect_budget(&self, lowered: &str) -> Option<f64> {
        let numbers: Vec<f64> = NUMBER_RE
            .find_iter(lowered)
            .filter_map(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
            .collect();

        let mut budget = numbers
            .iter()
            .copied()
            .filter(|n| *n > self.budget_floor)
            .fold(None, |best: Option<f64>, n| {
                Some(best.map_or(n, |b| b.max(n)))
            });

        if budget.is_none() && K_MARKER_RE.is_match(lowered) {
            budget = numbers
                .iter()
                .copied()
                .filter(|n| *n > MARKER_BUDGET_FLOOR)
                .fold(None, |best: Option<f64>, n| {
                    Some(best.map_or(n, |b| b.max(n)))
                })
                .map(|n| n * 1000.0);
        }

        // "50k" wins over whatever the generic scan produced
        if let Some(caps) = EXPLICIT_K_RE.captures(lowered) {
            if let Ok(n) = caps[1].parse::<f64>() {
                budget = Some(n * 1000.0);
            }
        }

        budget
    }
}

fn detect_category(lowered: &str) -> Option<Vec<String>> {
    for (triggers, tags) in CATEGORY_TRIGGERS {
        if triggers.iter().any(|t| lowered.contains(t)) {
            return Some(tags.iter().map(|t| t.to_string()).collect());
        }
    }
    None
}

fn detect_rooms(lowered: &str) -> Option<i64> {
    ROOMS_RE
        .captures(lowered)
        .and_then(|caps| caps[1].parse::<i64>().ok())
}

fn detect_location(lowered: &str) -> Option<(String, Option<String>)> {
    for slug in DISTRICTS {
        if lowered.contains(slug) {
            return Some((slug.to_string(), None));
        }
    }
    for (needle, slug, display) in CYRILLIC_DISTRICTS {
        if lowered.contains(needle) {
            return Some((slug.to_string(), Some(display.to_string())));
        }
    }
    None
}

/// Interpret with the default budget floor
#[inline]
#[must_use]
pub fn interpret(text: &str) -> ConstraintSet {
    QueryInterpreter::new().interpret(text)
}
