//! GitHub REST access: the profile fetch and the avatar download.

pub mod avatar;
pub mod client;
pub mod error;
pub mod profile;

pub use avatar::{inside_circle, AvatarImage, AvatarLoader, AvatarSource};
pub use client::{build_http_client, ProfileClient, ProfileSource, USER_AGENT};
pub use error::{AvatarError, FetchError, FetchErrorKind};
pub use profile::Profile;
