use crate::github::{AvatarError, AvatarImage, FetchError, Profile};
use crate::ui::mvi::Reducer;
use crate::ui::profile::{Activation, AvatarPhase, ProfileIntent, ProfileReducer, ProfileViewState};
use reqwest::Url;
use tokio::sync::mpsc;

/// Background work requested by the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchProfile,
    LoadAvatar { url: Url },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    endpoint: String,
    avatar_size: u16,
    /// Profile card state (MVI pattern).
    pub profile_view: ProfileViewState,
    commands: Option<UiCommandSender>,
}

impl App {
    pub fn new(endpoint: String, avatar_size: u16) -> Self {
        Self {
            should_quit: false,
            endpoint,
            avatar_size,
            profile_view: ProfileViewState::default(),
            commands: None,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn avatar_size(&self) -> u16 {
        self.avatar_size
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn activation(&self) -> Activation {
        self.profile_view.activation
    }

    pub fn dispatch_profile(&mut self, intent: ProfileIntent) {
        dispatch_mvi!(self, profile_view, ProfileReducer, intent);
    }

    /// The view became visible. Requests the fetch the first time only.
    pub fn activate(&mut self) {
        let before = self.profile_view.activation;
        self.dispatch_profile(ProfileIntent::Activate);
        if before == Activation::Idle && self.profile_view.activation == Activation::Fetching {
            self.send_command(UiCommand::FetchProfile);
        }
    }

    pub fn on_profile_fetched(&mut self, result: Result<Profile, FetchError>) {
        match result {
            Ok(profile) => {
                let url = profile.parsed_avatar_url();
                if url.is_none() {
                    tracing::debug!(
                        avatar_url = %profile.avatar_url,
                        "Avatar URL does not parse, keeping placeholder"
                    );
                }
                self.dispatch_profile(ProfileIntent::ProfileLoaded { profile });
                if let (AvatarPhase::Loading, Some(url)) = (&self.profile_view.avatar, url) {
                    self.send_command(UiCommand::LoadAvatar { url });
                }
            }
            Err(err) => {
                let kind = err.kind();
                tracing::warn!(kind = kind.as_str(), error = %err, "Profile fetch failed");
                self.dispatch_profile(ProfileIntent::ProfileFailed { kind });
            }
        }
    }

    pub fn on_avatar_fetched(&mut self, result: Result<AvatarImage, AvatarError>) {
        match result {
            Ok(image) => self.dispatch_profile(ProfileIntent::AvatarLoaded { image }),
            Err(err) => {
                tracing::warn!(error = %err, "Avatar load failed");
                self.dispatch_profile(ProfileIntent::AvatarFailed);
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.dispatch_profile(ProfileIntent::AnimationTick);
    }

    fn send_command(&self, command: UiCommand) {
        let Some(sender) = &self.commands else {
            tracing::debug!(?command, "No worker attached, command dropped");
            return;
        };
        if let Err(err) = sender.try_send(command) {
            tracing::error!(error = %err, "Failed to queue background command");
        }
    }
}
