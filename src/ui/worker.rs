//! Runs UI commands on the tokio runtime and posts results back as events.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::github::{AvatarError, AvatarSource, FetchError, ProfileSource};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Capacity of the UI → worker command queue.
pub const COMMAND_CHANNEL_SIZE: usize = 8;

pub fn spawn_worker(
    handle: &Handle,
    profiles: Arc<dyn ProfileSource>,
    avatars: Arc<dyn AvatarSource>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) -> JoinHandle<()> {
    handle.spawn(async move {
        while let Some(command) = commands.recv().await {
            let events = events.clone();
            match command {
                UiCommand::FetchProfile => {
                    let profiles = Arc::clone(&profiles);
                    tokio::spawn(async move {
                        // Inner task so a panicking fetch still reports back.
                        let task = tokio::spawn(async move { profiles.fetch().await });
                        let result = task.await.unwrap_or_else(|err| {
                            Err(FetchError::Task {
                                reason: err.to_string(),
                            })
                        });
                        if events.send(AppEvent::ProfileFetched(result)).is_err() {
                            tracing::trace!("Profile result dropped (receiver gone)");
                        }
                    });
                }
                UiCommand::LoadAvatar { url } => {
                    let avatars = Arc::clone(&avatars);
                    tokio::spawn(async move {
                        let task = tokio::spawn(async move { avatars.load(url).await });
                        let result = task
                            .await
                            .unwrap_or_else(|err| Err(AvatarError::Task(err.to_string())));
                        if events.send(AppEvent::AvatarFetched(result)).is_err() {
                            tracing::trace!("Avatar result dropped (receiver gone)");
                        }
                    });
                }
            }
        }
        tracing::debug!("Command channel closed, worker exiting");
    })
}
