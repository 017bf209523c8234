//! Reusable UI components shared by the screens.

pub mod header;
pub mod login_modal;
pub mod notice;
pub mod tab_bar;
