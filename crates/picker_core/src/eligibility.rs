use std::collections::BTreeSet;

use crate::{Catalog, CatalogItem, Category};

/// Which roles take part in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }

    /// Accepts `all` or any role name.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::parse(raw).map(CategoryFilter::Only)
    }
}

/// Ids excluded from the draw pool.
///
/// Ids are kept even when the catalog no longer lists them, so a catalog
/// refresh does not silently re-enable anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EligibilitySet {
    disabled: BTreeSet<String>,
}

impl EligibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership; returns `true` when `id` is now disabled.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.disabled.remove(id) {
            false
        } else {
            self.disabled.insert(id.to_string());
            true
        }
    }

    pub fn force_disable(&mut self, id: &str) {
        self.disabled.insert(id.to_string());
    }

    pub fn enable_all(&mut self) {
        self.disabled.clear();
    }

    pub fn disable_all(&mut self, catalog: &Catalog) {
        self.disabled = catalog.ids().map(ToOwned::to_owned).collect();
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled.contains(id)
    }

    /// Number of catalog items not disabled.
    pub fn enabled_count(&self, catalog: &Catalog) -> usize {
        catalog
            .ids()
            .filter(|id| !self.disabled.contains(*id))
            .count()
    }

    pub fn eligible_pool<'c>(
        &self,
        catalog: &'c Catalog,
        filter: CategoryFilter,
    ) -> Vec<&'c CatalogItem> {
        catalog
            .items()
            .iter()
            .filter(|item| !self.disabled.contains(&item.id) && filter.matches(item.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parse_accepts_all_and_roles() {
        assert_eq!(CategoryFilter::parse("ALL"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("controller"),
            Some(CategoryFilter::Only(Category::Controller))
        );
        assert_eq!(CategoryFilter::parse("healer"), None);
    }

    #[test]
    fn toggle_reports_new_membership() {
        let mut set = EligibilitySet::new();
        assert!(set.toggle("a"));
        assert!(set.is_disabled("a"));
        assert!(!set.toggle("a"));
        assert!(!set.is_disabled("a"));
    }

    #[test]
    fn force_disable_is_idempotent() {
        let mut set = EligibilitySet::new();
        set.force_disable("a");
        set.force_disable("a");
        assert!(set.is_disabled("a"));
        assert!(!set.toggle("a"));
    }
}
