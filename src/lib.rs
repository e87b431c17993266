//! screen-stack - Foreground-window stack tracking
//!
//! This library maintains an ordered index of the live top-level screens
//! ("windows") of an application, mirrors lifecycle transitions reported by
//! the platform's [`host::ScreenHost`], and provides bulk lookup and
//! termination operations keyed by window identity or by a registered
//! [`handle::WindowKind`].
//!
//! The tracker is an explicit context object: the embedding application
//! constructs one [`tracker::WindowStackTracker`] at startup with its host
//! wired in, and passes it by reference to all call sites.

pub mod config;
pub mod error;
pub mod handle;
pub mod host;
pub mod logging;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::{Result, ResultExt, TrackerError};
pub use handle::{LifecycleStage, WindowHandle, WindowId, WindowKind};
pub use host::ScreenHost;
pub use tracker::WindowStackTracker;
