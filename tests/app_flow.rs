//! Activation → fetch → render flow with the real worker and a mock API.

mod common;

use async_trait::async_trait;
use common::mock_backend::{MockBackend, MockResponse};
use common::{fetch_config, png_bytes, profile_json};
use profile_view::github::{
    AvatarError, AvatarImage, AvatarLoader, AvatarSource, FetchError, FetchErrorKind, Profile,
    ProfileClient, ProfileSource,
};
use profile_view::ui::app::App;
use profile_view::ui::events::AppEvent;
use profile_view::ui::profile::{Activation, AvatarPhase, AvatarSlot, LOGIN_PLACEHOLDER};
use profile_view::ui::worker::{spawn_worker, COMMAND_CHANNEL_SIZE};
use reqwest::Url;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Applies async results to the app until `done` holds or the timeout hits.
async fn pump(app: &mut App, events: &Receiver<AppEvent>, done: impl Fn(&App) -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !done(app) {
        assert!(
            tokio::time::Instant::now() < deadline,
            "Timed out waiting for app state"
        );
        match events.try_recv() {
            Ok(AppEvent::ProfileFetched(result)) => app.on_profile_fetched(result),
            Ok(AppEvent::AvatarFetched(result)) => app.on_avatar_fetched(result),
            Ok(_) => {}
            Err(_) => tokio::time::sleep(Duration::from_millis(10)).await,
        }
    }
}

fn start_app(
    profiles: Arc<dyn ProfileSource>,
    avatars: Arc<dyn AvatarSource>,
) -> (App, Receiver<AppEvent>) {
    let (event_tx, event_rx) = mpsc::channel();
    let (command_tx, command_rx) = tokio::sync::mpsc::channel(COMMAND_CHANNEL_SIZE);
    spawn_worker(&Handle::current(), profiles, avatars, command_rx, event_tx);

    let mut app = App::new("test".to_string(), 16);
    app.attach_commands(command_tx);
    (app, event_rx)
}

fn http_sources(endpoint: &str) -> (Arc<dyn ProfileSource>, Arc<dyn AvatarSource>) {
    let config = fetch_config(endpoint);
    (
        Arc::new(ProfileClient::new(&config).unwrap()),
        Arc::new(AvatarLoader::new(&config, 16).unwrap()),
    )
}

struct CountingSource {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ProfileSource for CountingSource {
    async fn fetch(&self) -> Result<Profile, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(FetchError::InvalidResponse { status: 500 })
    }
}

struct FixedProfile;

#[async_trait]
impl ProfileSource for FixedProfile {
    async fn fetch(&self) -> Result<Profile, FetchError> {
        Ok(Profile {
            login: "octocat".to_string(),
            avatar_url: "https://example/a.png".to_string(),
            bio: Some("hi".to_string()),
        })
    }
}

/// Panics as a source would on a bug in a decoder or client.
fn blow_up<T>(what: &str) -> T {
    panic!("{what} blew up")
}

struct PanickingProfile;

#[async_trait]
impl ProfileSource for PanickingProfile {
    async fn fetch(&self) -> Result<Profile, FetchError> {
        blow_up("profile source")
    }
}

struct PanickingAvatars;

#[async_trait]
impl AvatarSource for PanickingAvatars {
    async fn load(&self, _url: Url) -> Result<AvatarImage, AvatarError> {
        blow_up("avatar decoder")
    }
}

struct NoAvatars;

#[async_trait]
impl AvatarSource for NoAvatars {
    async fn load(&self, _url: Url) -> Result<AvatarImage, AvatarError> {
        Err(AvatarError::InvalidResponse { status: 404 })
    }
}

#[tokio::test]
async fn test_successful_fetch_loads_profile_and_avatar() {
    let mock = MockBackend::start().await;
    let avatar_url = mock.url("/avatars/octocat.png");
    mock.enqueue_response(MockResponse::json(&profile_json(
        "octocat",
        &avatar_url,
        Some("hi"),
    )))
    .await;
    mock.enqueue_response(MockResponse::png(png_bytes(32, [1, 2, 3, 255])))
        .await;

    let (profiles, avatars) = http_sources(&mock.url("/users/octocat"));
    let (mut app, events) = start_app(profiles, avatars);
    app.activate();

    pump(&mut app, &events, |app| {
        matches!(app.profile_view.avatar, AvatarPhase::Ready(_))
    })
    .await;

    let slots = app.profile_view.slots();
    assert_eq!(slots.name, "octocat");
    assert_eq!(slots.bio, "hi");
    assert!(matches!(slots.avatar, AvatarSlot::Image(_)));
}

#[tokio::test]
async fn test_not_found_leaves_view_empty() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(404, "Not Found")).await;

    let (profiles, avatars) = http_sources(&mock.url("/users/ghost"));
    let (mut app, events) = start_app(profiles, avatars);
    app.activate();

    pump(&mut app, &events, |app| {
        matches!(app.activation(), Activation::Failed(_))
    })
    .await;

    assert_eq!(
        app.activation(),
        Activation::Failed(FetchErrorKind::InvalidResponse)
    );
    assert!(app.profile_view.profile.is_none());
    let slots = app.profile_view.slots();
    assert_eq!(slots.name, LOGIN_PLACEHOLDER);
    assert_eq!(slots.avatar, AvatarSlot::Placeholder);
}

#[tokio::test]
async fn test_missing_login_leaves_view_empty() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"avatar_url": "https://example/a.png", "bio": "hi"}"#,
    ))
    .await;

    let (profiles, avatars) = http_sources(&mock.url("/users/octocat"));
    let (mut app, events) = start_app(profiles, avatars);
    app.activate();

    pump(&mut app, &events, |app| {
        matches!(app.activation(), Activation::Failed(_))
    })
    .await;

    assert_eq!(
        app.activation(),
        Activation::Failed(FetchErrorKind::InvalidData)
    );
    assert!(app.profile_view.profile.is_none());
}

#[tokio::test]
async fn test_failed_avatar_shows_warning() {
    let mock = MockBackend::start().await;
    let avatar_url = mock.url("/avatars/missing.png");
    mock.enqueue_response(MockResponse::json(&profile_json("octocat", &avatar_url, None)))
        .await;
    mock.enqueue_response(MockResponse::error(404, "Not Found"))
        .await;

    let (profiles, avatars) = http_sources(&mock.url("/users/octocat"));
    let (mut app, events) = start_app(profiles, avatars);
    app.activate();

    pump(&mut app, &events, |app| {
        app.profile_view.avatar == AvatarPhase::Failed
    })
    .await;

    assert_eq!(app.profile_view.slots().avatar, AvatarSlot::Warning);
}

#[tokio::test]
async fn test_repeated_activation_fetches_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let profiles = Arc::new(CountingSource {
        calls: Arc::clone(&calls),
    });
    let (mut app, events) = start_app(profiles, Arc::new(NoAvatars));

    app.activate();
    app.activate();
    app.activate();

    pump(&mut app, &events, |app| {
        matches!(app.activation(), Activation::Failed(_))
    })
    .await;
    app.activate();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_panicking_avatar_load_shows_warning() {
    let (mut app, events) = start_app(Arc::new(FixedProfile), Arc::new(PanickingAvatars));
    app.activate();

    pump(&mut app, &events, |app| {
        app.profile_view.avatar == AvatarPhase::Failed
    })
    .await;

    assert_eq!(app.profile_view.slots().avatar, AvatarSlot::Warning);
    assert_eq!(app.profile_view.slots().name, "octocat");
}

#[tokio::test]
async fn test_panicking_fetch_fails_activation() {
    let (mut app, events) = start_app(Arc::new(PanickingProfile), Arc::new(NoAvatars));
    app.activate();

    pump(&mut app, &events, |app| {
        matches!(app.activation(), Activation::Failed(_))
    })
    .await;

    assert_eq!(app.activation(), Activation::Failed(FetchErrorKind::Task));
    assert!(app.profile_view.profile.is_none());
    assert_eq!(app.profile_view.slots().avatar, AvatarSlot::Placeholder);
}
