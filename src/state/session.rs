#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Email address that receives the administrator role on sign-in.
pub const ADMIN_EMAIL: &str = "admin@consultaja.com.br";

/// Display name of the administrator identity.
const ADMIN_NAME: &str = "Administrador";

/// Access role attached to a signed-in identity.
///
/// Sign-in only ever assigns `Patient` or `Admin`; `Doctor` is reserved
/// for registered doctors once a backend exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Patient,
    Doctor,
    Admin,
}

/// The currently signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Build the identity for a sign-in attempt.
    ///
    /// The fixed admin address (matched case-insensitively, otherwise
    /// exactly) yields the administrator identity. Any other email yields
    /// a patient whose display name is the local part of the address and
    /// whose id is freshly generated, so patient ids are not stable
    /// across sessions.
    #[must_use]
    pub fn from_email(email: &str) -> Self {
        if email.to_lowercase() == ADMIN_EMAIL {
            Self {
                id: "1".to_owned(),
                name: ADMIN_NAME.to_owned(),
                email: ADMIN_EMAIL.to_owned(),
                role: Role::Admin,
            }
        } else {
            Self {
                id: uuid::Uuid::new_v4().to_string(),
                name: email.split('@').next().unwrap_or_default().to_owned(),
                email: email.to_owned(),
                role: Role::Patient,
            }
        }
    }
}

/// Sign-in failure. Nothing produces this yet, but callers are written
/// against the failure path so a real authentication backend can slot in
/// without touching them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("sign-in rejected: {0}")]
    Rejected(String),
}

/// Session state: the active identity and sign-in status.
///
/// Held in an `RwSignal` provided via context by the app root. Screens
/// obtain it with `expect_context`, which panics immediately when no
/// provider is installed, so a screen mounted outside the composition
/// root fails during development instead of reading defaults.
///
/// Single writer (sign-in / sign-out), many readers. Overlapping sign-in
/// attempts are sequenced by a generation counter: only the newest
/// attempt may install an identity.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    generation: u64,
}

impl SessionState {
    /// True iff an identity is active and holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Start a sign-in attempt: raises `loading` and returns the
    /// attempt's generation. A later attempt supersedes every earlier
    /// one.
    pub fn begin_sign_in(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Install the identity produced by attempt `generation`, replacing
    /// any prior identity.
    ///
    /// Returns `false` and changes nothing when a newer attempt or a
    /// sign-out superseded the caller.
    pub fn complete_sign_in(&mut self, generation: u64, user: User) -> bool {
        if generation != self.generation {
            return false;
        }
        self.user = Some(user);
        self.loading = false;
        true
    }

    /// Record a failed attempt: clears `loading` and leaves whatever
    /// identity was active before the attempt unchanged.
    pub fn fail_sign_in(&mut self, generation: u64) {
        if generation == self.generation {
            self.loading = false;
        }
    }

    /// Clear the active identity. Also supersedes in-flight sign-in
    /// attempts so a late completion cannot resurrect a session.
    pub fn sign_out(&mut self) {
        self.generation += 1;
        self.user = None;
        self.loading = false;
    }
}

/// Sign in with the given credentials, updating the shared session.
///
/// The password is accepted but not verified anywhere; verification
/// belongs to the backend that `authenticate` will eventually call.
/// `loading` is cleared whether the attempt succeeds or fails.
///
/// # Errors
///
/// Reserved for the backend integration; today every attempt resolves
/// successfully.
pub async fn sign_in(
    session: RwSignal<SessionState>,
    email: &str,
    _password: &str,
) -> Result<(), SignInError> {
    let generation = session
        .try_update(SessionState::begin_sign_in)
        .unwrap_or_default();

    match authenticate(email).await {
        Ok(user) => {
            session.update(|s| {
                s.complete_sign_in(generation, user);
            });
            Ok(())
        }
        Err(e) => {
            session.update(|s| s.fail_sign_in(generation));
            Err(e)
        }
    }
}

/// Resolve an identity for the supplied credentials.
///
/// The seam where a real authentication call will be injected; for now
/// classification is purely local.
async fn authenticate(email: &str) -> Result<User, SignInError> {
    Ok(User::from_email(email))
}
