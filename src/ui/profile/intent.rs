use crate::github::{AvatarImage, FetchErrorKind, Profile};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// The view became visible. Only the first one starts a fetch.
    Activate,

    /// The fetch returned a profile.
    ProfileLoaded { profile: Profile },

    /// The fetch failed; the cause is logged, only the kind is kept.
    ProfileFailed { kind: FetchErrorKind },

    AvatarLoaded { image: AvatarImage },

    AvatarFailed,

    /// Spinner animation tick.
    AnimationTick,
}

impl Intent for ProfileIntent {}
