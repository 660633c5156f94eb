//! Shared UI components exported for the panels.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::Shell;
pub(crate) use ui::{Button, Field, Spinner, ToastStack};
