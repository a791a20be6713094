//! HTTP handlers, one module per resource.

pub mod auth;
pub mod bookings;
pub mod contact;
pub mod dashboard;
pub mod events;
pub mod media;
pub mod mixes;
pub mod press_kit;
pub mod settings;
pub mod upload;

use crate::middleware::auth::MaybeAuthUser;

/// Whether listings for `viewer` must exclude unpublished rows.
///
/// Only admins asking for `all=true` see drafts.
pub(crate) fn published_only(viewer: &MaybeAuthUser, all: bool) -> bool {
    !(all && viewer.is_admin())
}

/// Whether a single record may be shown to `viewer`.
pub(crate) fn is_visible(viewer: &MaybeAuthUser, is_published: bool) -> bool {
    is_published || viewer.is_admin()
}
