// Side-by-side comparison: bounded, domain-homogeneous listing groups
use serde::{Deserialize, Serialize};

use crate::listing::{Listing, ListingId};
use crate::taxonomy::CategoryGroup;

/// Maximum number of listings in one comparison group
pub const COMPARE_LIMIT: usize = 3;

/// Machine-readable reason a candidate was refused. Policy violations
/// are values, never errors; user-facing messaging is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareRejection {
    Duplicate,
    Full,
    CategoryMismatch,
}

impl std::fmt::Display for CompareRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareRejection::Duplicate => write!(f, "duplicate"),
            CompareRejection::Full => write!(f, "full"),
            CompareRejection::CategoryMismatch => write!(f, "category_mismatch"),
        }
    }
}

/// The listings a user is actively comparing. Session-scoped and owned
/// by a single caller; once non-empty, every member belongs to the same
/// [`CategoryGroup`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonSet {
    listings: Vec<Listing>,
}

impl ComparisonSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `candidate` may join, without mutating the set.
    /// Checks in order: duplicate id, size cap, category group
    /// homogeneity against the first member.
    pub fn can_add(&self, candidate: &Listing) -> Result<(), CompareRejection> {
        if self.listings.iter().any(|l| l.id == candidate.id) {
            return Err(CompareRejection::Duplicate);
        }
        if self.listings.len() >= COMPARE_LIMIT {
            return Err(CompareRejection::Full);
        }
        if let Some(first) = self.listings.first() {
            if CategoryGroup::of(&first.category) != CategoryGroup::of(&candidate.category) {
                return Err(CompareRejection::CategoryMismatch);
            }
        }
        Ok(())
    }

    /// Validate and append in one step
    pub fn add(&mut self, candidate: Listing) -> Result<(), CompareRejection> {
        self.can_add(&candidate)?;
        self.listings.push(candidate);
        Ok(())
    }

    /// Remove by id. Unconditional: removing an absent id is a no-op,
    /// never a rejection.
    pub fn remove(&mut self, id: &ListingId) -> bool {
        let before = self.listings.len();
        self.listings.retain(|l| &l.id != id);
        before != self.listings.len()
    }

    pub fn clear(&mut self) {
        self.listings.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[inline]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Domain group of the set, once non-empty
    #[must_use]
    pub fn group(&self) -> Option<CategoryGroup> {
        self.listings.first().map(|l| CategoryGroup::of(&l.category))
    }
}

impl From<Vec<Listing>> for ComparisonSet {
    fn from(listings: Vec<Listing>) -> Self {
        Self { listings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingId;

    fn listing(id: u64, category: &str) -> Listing {
        Listing::new(ListingId::Integer(id), category, 10000.0)
    }

    #[test]
    fn test_add_and_duplicate() {
        let mut set = ComparisonSet::new();
        set.add(listing(1, "Квартиры")).unwrap();
        assert_eq!(
            set.add(listing(1, "Квартиры")),
            Err(CompareRejection::Duplicate)
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_fourth_same_category_add_is_full() {
        let mut set = ComparisonSet::new();
        for i in 1..=3 {
            set.add(listing(i, "Квартиры")).unwrap();
        }
        assert_eq!(set.add(listing(4, "Квартиры")), Err(CompareRejection::Full));
        assert_eq!(set.len(), COMPARE_LIMIT);
    }

    #[test]
    fn test_duplicate_checked_before_full() {
        let mut set = ComparisonSet::new();
        for i in 1..=3 {
            set.add(listing(i, "Квартиры")).unwrap();
        }
        assert_eq!(
            set.can_add(&listing(2, "Квартиры")),
            Err(CompareRejection::Duplicate)
        );
    }

    #[test]
    fn test_full_checked_before_mismatch() {
        let mut set = ComparisonSet::new();
        for i in 1..=3 {
            set.add(listing(i, "Квартиры")).unwrap();
        }
        // a full set reports full even for a cross-domain candidate
        assert_eq!(set.can_add(&listing(4, "Cars")), Err(CompareRejection::Full));
    }

    #[test]
    fn test_cross_domain_rejected() {
        let mut set = ComparisonSet::new();
        set.add(listing(1, "Квартиры")).unwrap();
        assert_eq!(
            set.add(listing(2, "Cars")),
            Err(CompareRejection::CategoryMismatch)
        );
    }

    #[test]
    fn test_synonym_categories_are_comparable_both_ways() {
        // same group via different bilingual literals, both directions
        let mut set_a = ComparisonSet::new();
        set_a.add(listing(1, "Квартиры")).unwrap();
        assert!(set_a.can_add(&listing(2, "Houses")).is_ok());

        let mut set_b = ComparisonSet::new();
        set_b.add(listing(2, "Houses")).unwrap();
        assert!(set_b.can_add(&listing(1, "Квартиры")).is_ok());
    }

    #[test]
    fn test_unknown_literals_compare_only_on_exact_equality() {
        let mut set = ComparisonSet::new();
        set.add(listing(1, "Антиквариат")).unwrap();
        assert!(set.can_add(&listing(2, "Антиквариат")).is_ok());
        assert_eq!(
            set.can_add(&listing(3, "Коллекции")),
            Err(CompareRejection::CategoryMismatch)
        );
    }

    #[test]
    fn test_remove_is_unconditional() {
        let mut set = ComparisonSet::new();
        set.add(listing(1, "Квартиры")).unwrap();
        assert!(set.remove(&ListingId::Integer(1)));
        assert!(!set.remove(&ListingId::Integer(1)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_rejection_reason_wire_form() {
        let json = serde_json::to_string(&CompareRejection::CategoryMismatch).unwrap();
        assert_eq!(json, "\"category_mismatch\"");
    }
}
