//! Headless admin controllers for entryadmin.
//!
//! The controllers own all view state and talk to the entry store through a
//! background worker; callers drive them with `update()` from their own loop.

pub mod app;
pub mod backend;

pub use app::{
    AdminEditController, AdminListController, ControllerSettings, SubmissionController,
};
pub use backend::{spawn_backend, BackendHandle, CoreCmd, CoreErrorSource, CoreEvent};
