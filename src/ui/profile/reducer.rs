use crate::ui::mvi::Reducer;

use super::intent::ProfileIntent;
use super::state::{Activation, AvatarPhase, ProfileViewState};

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileViewState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Activate => match state.activation {
                Activation::Idle => ProfileViewState {
                    activation: Activation::Fetching,
                    ..state
                },
                // One fetch per activation, even if the view is shown again.
                _ => state,
            },

            ProfileIntent::ProfileLoaded { profile } => {
                if state.activation != Activation::Fetching {
                    return state;
                }
                let avatar = if profile.parsed_avatar_url().is_some() {
                    AvatarPhase::Loading
                } else {
                    AvatarPhase::Unavailable
                };
                ProfileViewState {
                    profile: Some(profile),
                    avatar,
                    activation: Activation::Loaded,
                    animation_tick: 0,
                }
            }

            ProfileIntent::ProfileFailed { kind } => {
                if state.activation != Activation::Fetching {
                    return state;
                }
                ProfileViewState {
                    activation: Activation::Failed(kind),
                    ..state
                }
            }

            ProfileIntent::AvatarLoaded { image } => match state.avatar {
                AvatarPhase::Loading => ProfileViewState {
                    avatar: AvatarPhase::Ready(image),
                    ..state
                },
                _ => state,
            },

            ProfileIntent::AvatarFailed => match state.avatar {
                AvatarPhase::Loading => ProfileViewState {
                    avatar: AvatarPhase::Failed,
                    ..state
                },
                _ => state,
            },

            ProfileIntent::AnimationTick => {
                if state.is_animating() {
                    ProfileViewState {
                        animation_tick: state.animation_tick.wrapping_add(1),
                        ..state
                    }
                } else {
                    state
                }
            }
        }
    }
}
