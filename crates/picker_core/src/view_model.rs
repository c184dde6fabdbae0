use crate::{Category, CategoryFilter, DrawResult, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub filter: CategoryFilter,
    /// Agents visible under the active filter, disabled ones included.
    pub rows: Vec<AgentRowView>,
    /// Enabled agents across all roles.
    pub enabled: usize,
    pub total: usize,
    pub can_draw: bool,
    pub current: Option<DrawResult>,
    pub current_disabled: bool,
    pub fetch_in_flight: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRowView {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub disabled: bool,
    pub selected: bool,
}
