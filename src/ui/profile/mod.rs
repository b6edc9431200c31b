//! Profile card feature module.
//!
//! - `state.rs` - view state and the pure slot derivation
//! - `intent.rs` - activation, fetch results, avatar results, ticks
//! - `reducer.rs` - state transitions
//! - `card.rs` - rendering

mod card;
mod intent;
mod reducer;
mod state;

pub use card::{render_profile_card, AvatarWidget, SPINNER_FRAMES};
pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use state::{
    Activation, AvatarPhase, AvatarSlot, ProfileSlots, ProfileViewState, BIO_PLACEHOLDER,
    LOGIN_PLACEHOLDER,
};
