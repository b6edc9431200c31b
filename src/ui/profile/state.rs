use crate::github::{AvatarImage, FetchErrorKind, Profile};
use crate::ui::mvi::UiState;

/// Name label shown until a profile arrives.
pub const LOGIN_PLACEHOLDER: &str = "Login Placeholder";

/// Bio label shown when there is no profile or the profile has no bio.
pub const BIO_PLACEHOLDER: &str = "No bio available";

/// Where the one-shot fetch stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Idle,
    Fetching,
    Loaded,
    Failed(FetchErrorKind),
}

/// Avatar download progress for the loaded profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvatarPhase {
    /// No download: no profile yet, or its avatar URL does not parse.
    #[default]
    Unavailable,
    Loading,
    Failed,
    Ready(AvatarImage),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileViewState {
    pub profile: Option<Profile>,
    pub avatar: AvatarPhase,
    pub activation: Activation,
    pub animation_tick: u8,
}

impl UiState for ProfileViewState {}

/// What the avatar slot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSlot<'a> {
    /// Neutral filled circle.
    Placeholder,
    /// Spinner while the image downloads.
    Progress { tick: u8 },
    /// Warning icon after a failed download.
    Warning,
    Image(&'a AvatarImage),
}

/// Everything the card draws, derived from state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSlots<'a> {
    pub avatar: AvatarSlot<'a>,
    pub name: &'a str,
    pub bio: &'a str,
}

impl ProfileViewState {
    pub fn slots(&self) -> ProfileSlots<'_> {
        let avatar = match &self.profile {
            Some(profile) if profile.parsed_avatar_url().is_some() => match &self.avatar {
                AvatarPhase::Loading => AvatarSlot::Progress {
                    tick: self.animation_tick,
                },
                AvatarPhase::Failed => AvatarSlot::Warning,
                AvatarPhase::Ready(image) => AvatarSlot::Image(image),
                AvatarPhase::Unavailable => AvatarSlot::Placeholder,
            },
            _ => AvatarSlot::Placeholder,
        };

        let name = self
            .profile
            .as_ref()
            .map(|p| p.login.as_str())
            .unwrap_or(LOGIN_PLACEHOLDER);

        let bio = self
            .profile
            .as_ref()
            .and_then(|p| p.bio.as_deref())
            .unwrap_or(BIO_PLACEHOLDER);

        ProfileSlots { avatar, name, bio }
    }

    pub fn is_animating(&self) -> bool {
        self.activation == Activation::Fetching || self.avatar == AvatarPhase::Loading
    }
}
