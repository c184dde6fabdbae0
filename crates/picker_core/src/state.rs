use crate::view_model::{AgentRowView, AppViewModel};
use crate::{Catalog, CatalogItem, CategoryFilter, EligibilitySet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Drawing,
    Revealed,
}

/// A settled pick. Never edited; a repick replaces it with a higher `sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    pub item: CatalogItem,
    pub filter: CategoryFilter,
    pub sequence: u64,
}

/// Payload handed to the presentation layer after every phase change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub phase: Phase,
    pub current: Option<DrawResult>,
}

/// Outcome chosen when a draw starts, waiting for the reveal to settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingDraw {
    pub(crate) item: CatalogItem,
    pub(crate) filter: CategoryFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Session {
    #[default]
    Idle,
    Drawing(PendingDraw),
    Revealed(DrawResult),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: Catalog,
    eligibility: EligibilitySet,
    filter: CategoryFilter,
    session: Session,
    sequence: u64,
    fetch_in_flight: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let current = self.current().cloned();
        let rows = self
            .catalog
            .items()
            .iter()
            .filter(|item| self.filter.matches(item.category))
            .map(|item| AgentRowView {
                id: item.id.clone(),
                name: item.display_name.clone(),
                category: item.category,
                disabled: self.eligibility.is_disabled(&item.id),
                selected: current.as_ref().is_some_and(|c| c.item.id == item.id),
            })
            .collect();

        AppViewModel {
            phase: self.phase(),
            filter: self.filter,
            rows,
            enabled: self.eligibility.enabled_count(&self.catalog),
            total: self.catalog.len(),
            can_draw: self.phase() == Phase::Idle && !self.pool().is_empty(),
            current_disabled: current
                .as_ref()
                .is_some_and(|c| self.eligibility.is_disabled(&c.item.id)),
            current,
            fetch_in_flight: self.fetch_in_flight,
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.session {
            Session::Idle => Phase::Idle,
            Session::Drawing(_) => Phase::Drawing,
            Session::Revealed(_) => Phase::Revealed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn eligibility(&self) -> &EligibilitySet {
        &self.eligibility
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn current(&self) -> Option<&DrawResult> {
        match &self.session {
            Session::Revealed(result) => Some(result),
            Session::Idle | Session::Drawing(_) => None,
        }
    }

    /// Sequence number of the latest settled draw; 0 before the first one.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.fetch_in_flight
    }

    /// Eligible items under the active filter, in catalog order.
    pub fn pool(&self) -> Vec<&CatalogItem> {
        self.eligibility.eligible_pool(&self.catalog, self.filter)
    }

    pub fn event(&self) -> SessionEvent {
        SessionEvent {
            phase: self.phase(),
            current: self.current().cloned(),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn set_session(&mut self, session: Session) {
        self.session = session;
        self.mark_dirty();
    }

    pub(crate) fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    pub(crate) fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.mark_dirty();
    }

    pub(crate) fn eligibility_mut(&mut self) -> &mut EligibilitySet {
        self.mark_dirty();
        &mut self.eligibility
    }

    pub(crate) fn set_filter(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_fetch_in_flight(&mut self, in_flight: bool) {
        if self.fetch_in_flight != in_flight {
            self.fetch_in_flight = in_flight;
            self.mark_dirty();
        }
    }
}
