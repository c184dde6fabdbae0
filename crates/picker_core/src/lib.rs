//! Agent picker core: catalog, eligibility, uniform draw and the session state machine.
mod catalog;
mod draw;
mod effect;
mod eligibility;
mod msg;
mod state;
mod update;
mod view_model;

pub use catalog::{
    load, merge, validate_payload, AbilityRecord, Ability, AgentRecord, Catalog, CatalogItem,
    Category, Details, Media,
};
pub use draw::{draw, EmptyPoolError};
pub use effect::Effect;
pub use eligibility::{CategoryFilter, EligibilitySet};
pub use msg::Msg;
pub use state::{AppState, DrawResult, Phase, SessionEvent};
pub use update::update;
pub use view_model::{AgentRowView, AppViewModel};
