//! Viewer identity state filled from `GET /auth/me`.

use crate::net::types::UserProfile;

/// The signed-in viewer's profile and its loading status.
///
/// Provided as an `RwSignal` by `DashboardLayout`; the top bar fills it and
/// the profile page reads it for initial form values.
#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
}
