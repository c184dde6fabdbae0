use rand::Rng;

use crate::catalog;
use crate::draw::draw;
use crate::state::{PendingDraw, Session};
use crate::{AppState, CatalogItem, DrawResult, Effect, Msg, Phase};

/// Applies a message to state and returns any effects.
///
/// `rng` is only consulted when a draw starts or a repick happens, so the
/// outcome is fixed before the presentation layer sees anything.
pub fn update<R>(mut state: AppState, msg: Msg, rng: &mut R) -> (AppState, Vec<Effect>)
where
    R: Rng + ?Sized,
{
    let effects = match msg {
        Msg::CatalogRestored(cached) => {
            // A fetch that already landed is fresher than the cache.
            if state.catalog().is_empty() {
                let restored = catalog::load(cached);
                if !restored.is_empty() {
                    state.replace_catalog(restored);
                }
            }
            Vec::new()
        }
        Msg::RefreshRequested => {
            if state.fetch_in_flight() {
                return (state, Vec::new());
            }
            state.set_fetch_in_flight(true);
            vec![Effect::FetchCatalog]
        }
        Msg::CatalogFetched(records) => {
            state.set_fetch_in_flight(false);
            match catalog::validate_payload(records) {
                Some(next) => {
                    state.replace_catalog(next.clone());
                    vec![Effect::PersistCatalog(next)]
                }
                None => Vec::new(),
            }
        }
        Msg::ToggleClicked { id } => {
            if state.phase() == Phase::Idle {
                state.eligibility_mut().toggle(&id);
            }
            Vec::new()
        }
        Msg::EnableAllClicked => {
            if state.phase() == Phase::Idle {
                state.eligibility_mut().enable_all();
            }
            Vec::new()
        }
        Msg::DisableAllClicked => {
            if state.phase() == Phase::Idle {
                let catalog = state.catalog().clone();
                state.eligibility_mut().disable_all(&catalog);
            }
            Vec::new()
        }
        Msg::FilterChanged(filter) => {
            state.set_filter(filter);
            Vec::new()
        }
        Msg::DrawClicked => {
            if state.phase() != Phase::Idle {
                return (state, Vec::new());
            }
            let Some(item) = pick(&state, rng) else {
                return (state, Vec::new());
            };
            let filter = state.filter();
            state.set_session(Session::Drawing(PendingDraw { item, filter }));
            vec![Effect::Notify(state.event())]
        }
        Msg::RevealSettled => {
            let Session::Drawing(pending) = state.session().clone() else {
                return (state, Vec::new());
            };
            let sequence = state.next_sequence();
            state.set_session(Session::Revealed(DrawResult {
                item: pending.item,
                filter: pending.filter,
                sequence,
            }));
            vec![Effect::Notify(state.event())]
        }
        Msg::RepickClicked => {
            if state.phase() != Phase::Revealed {
                return (state, Vec::new());
            }
            let Some(item) = pick(&state, rng) else {
                return (state, Vec::new());
            };
            let filter = state.filter();
            let sequence = state.next_sequence();
            state.set_session(Session::Revealed(DrawResult {
                item,
                filter,
                sequence,
            }));
            vec![Effect::Notify(state.event())]
        }
        Msg::DisableCurrentClicked => {
            let Some(id) = state.current().map(|result| result.item.id.clone()) else {
                return (state, Vec::new());
            };
            state.eligibility_mut().force_disable(&id);
            state.set_session(Session::Idle);
            vec![Effect::Notify(state.event())]
        }
        Msg::CloseClicked => {
            if state.phase() == Phase::Idle {
                return (state, Vec::new());
            }
            state.set_session(Session::Idle);
            vec![Effect::Notify(state.event())]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn pick<R>(state: &AppState, rng: &mut R) -> Option<CatalogItem>
where
    R: Rng + ?Sized,
{
    let pool = state.pool();
    if pool.is_empty() {
        return None;
    }
    match draw(&pool, rng) {
        Ok(item) => Some((*item).clone()),
        Err(err) => {
            debug_assert!(false, "{err}");
            None
        }
    }
}
