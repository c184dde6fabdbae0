use picker_core::{update, AppState, Msg};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn update_is_noop() {
    let mut rng = StdRng::seed_from_u64(0);
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp, &mut rng);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
