//! Top-level screens wired into the router and the tab shell.

pub mod doctor_sign_up;
pub mod home;
pub mod sign_up;
