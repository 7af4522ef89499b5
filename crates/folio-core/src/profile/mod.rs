//! The profile header state.

mod header;
mod identity;
mod push;

pub use header::{Follow, ProfileHeader};
pub use identity::Identity;
pub use push::{IdentityPush, IdentityUpdate};
