use crate::config::Config;
use crate::github::{AvatarLoader, ProfileClient};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{spawn_worker, COMMAND_CHANNEL_SIZE};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Runs the UI until the user quits. Blocks the calling thread; network work
/// runs on `handle`.
pub fn run(config: Config, handle: Handle) -> anyhow::Result<()> {
    let profiles = Arc::new(ProfileClient::new(&config.fetch)?);
    let avatars = Arc::new(AvatarLoader::new(
        &config.fetch,
        u32::from(config.ui.avatar_size),
    )?);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate)?;

    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
    let worker = spawn_worker(&handle, profiles, avatars, command_rx, events.sender());

    let mut app = App::new(config.fetch.endpoint.clone(), config.ui.avatar_size);
    app.attach_commands(command_tx);
    app.activate();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => {
                if handle_key(&mut app, key) == InputAction::Redraw {
                    terminal.clear()?;
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::ProfileFetched(result)) => app.on_profile_fetched(result),
            Ok(AppEvent::AvatarFetched(result)) => app.on_avatar_fetched(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Results still in flight are dropped with the event receiver.
    worker.abort();
    drop(guard);
    Ok(())
}
