#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Catalog read from the local cache at startup (`None` when absent or unreadable).
    CatalogRestored(Option<Vec<crate::CatalogItem>>),
    /// User or startup asked for a fresh catalog from the remote source.
    RefreshRequested,
    /// Remote fetch finished; `None` when the source was unavailable or unparseable.
    CatalogFetched(Option<Vec<crate::AgentRecord>>),
    /// User clicked an agent tile.
    ToggleClicked { id: String },
    /// User clicked Enable all.
    EnableAllClicked,
    /// User clicked Disable all.
    DisableAllClicked,
    /// User switched the role tab.
    FilterChanged(crate::CategoryFilter),
    /// User clicked Pick Random.
    DrawClicked,
    /// Presentation finished the reveal animation.
    RevealSettled,
    /// User clicked Repick on the reveal overlay.
    RepickClicked,
    /// User clicked Disable Agent on the reveal overlay.
    DisableCurrentClicked,
    /// User closed the reveal overlay.
    CloseClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
