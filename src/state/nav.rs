#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A navigable tab destination inside the main area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Home,
    DoctorOnboarding,
}

impl Destination {
    /// Tab bar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::DoctorOnboarding => "Cadastrar Médico",
        }
    }

    /// Tab bar icon glyph.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "\u{2302}",
            Self::DoctorOnboarding => "\u{2695}",
        }
    }
}

/// Tab destinations reachable with the given authorization.
///
/// `Home` is always present; the doctor-onboarding tab exists only while
/// an admin is signed in. Pure so the gate is testable apart from
/// rendering; the tab bar re-evaluates it on every role change, not just
/// on mount.
#[must_use]
pub fn available_destinations(is_admin: bool) -> Vec<Destination> {
    let mut tabs = vec![Destination::Home];
    if is_admin {
        tabs.push(Destination::DoctorOnboarding);
    }
    tabs
}

/// Resolve the active tab against the current authorization.
///
/// A destination that is no longer reachable falls back to `Home`. This
/// covers the admin whose role is revoked (sign-out) while the doctor
/// tab is focused.
#[must_use]
pub fn resolve_active(active: Destination, is_admin: bool) -> Destination {
    if available_destinations(is_admin).contains(&active) {
        active
    } else {
        Destination::Home
    }
}

/// Shared tab selection for the main area, provided via context by the
/// app root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Destination,
}
