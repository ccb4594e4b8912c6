//! Digitink Session - the interactive drawing and recognition driver
//!
//! Glues the core canvas and the inference pipeline into one
//! single-threaded session:
//!
//! - [`PointerEvent`] / [`ViewTransform`] - pointer input and UI-space
//!   to canvas-space mapping
//! - [`StrokeState`] - the explicit optional last-point holder
//! - [`Session`] - drawing, recognize/clear/switch-model triggers, and
//!   the human-readable result line
//!
//! No UI toolkit is wired here; a front end forwards its pointer events
//! and button clicks and renders `Session::canvas` and
//! `Session::result_text` however it likes.

pub mod config;
pub mod error;
pub mod event;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use event::{PointerEvent, ViewTransform};
pub use session::{Session, StrokeState};
