//! Window identity, kinds, and lifecycle stages.
//!
//! A [`WindowHandle`] is the tracker's record of one live top-level screen.
//! The platform owns the screen itself; the handle is a side index entry.
//! Identity is the [`WindowId`] alone - two handles with the same id compare
//! equal regardless of kind or label.

use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identity for one live screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> u64 {
        self.0
    }

    /// Allocate a process-unique id. Convenience for hosts that have no
    /// native identifier to reuse.
    pub fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Open discriminator for window kinds, supplied by the registering code.
///
/// Replaces runtime type identity: matching a kind is plain equality or
/// slice membership, so `finish_by_kind` and friends stay simple predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowKind(&'static str);

impl WindowKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    pub fn matches_any(self, kinds: &[WindowKind]) -> bool {
        kinds.contains(&self)
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One tracked screen record.
#[derive(Debug, Clone)]
pub struct WindowHandle {
    /// Identity of the screen instance
    pub id: WindowId,
    /// Kind discriminator supplied at registration
    pub kind: WindowKind,
    /// Human-readable name for logging
    pub label: String,
    /// Timestamp when the screen entered service
    pub created_at: DateTime<Utc>,
}

impl WindowHandle {
    pub fn new(id: WindowId, kind: WindowKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            created_at: Utc::now(),
        }
    }
}

impl PartialEq for WindowHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WindowHandle {}

impl Hash for WindowHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Lifecycle stages a screen moves through, as reported by the Screen Host.
///
/// The tracker only acts on `Created` (insert) and `Destroyed` (remove plus
/// secondary cleanup); the rest are logged and otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    SaveState,
    Destroyed,
}

impl LifecycleStage {
    pub fn name(self) -> &'static str {
        match self {
            LifecycleStage::Created => "created",
            LifecycleStage::Started => "started",
            LifecycleStage::Resumed => "resumed",
            LifecycleStage::Paused => "paused",
            LifecycleStage::Stopped => "stopped",
            LifecycleStage::SaveState => "save_state",
            LifecycleStage::Destroyed => "destroyed",
        }
    }
}
