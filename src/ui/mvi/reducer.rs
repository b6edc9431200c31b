use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
///
/// Reducers never perform I/O; the app inspects the resulting state and
/// starts any background work itself.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
