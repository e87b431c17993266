//! Foreground-Window Stack Tracker
//!
//! Maintains an ordered collection of the currently-live top-level screens,
//! insertion order = creation order, "current" = most recently created. The
//! platform owns the screens; this is a side index mirroring host-reported
//! lifecycle state.
//!
//! # Locking
//!
//! Every operation that touches the stack takes the same mutex for the
//! duration of its snapshot/mutation, and releases it before any Screen Host
//! call. `request_finish` may synchronously reenter
//! [`WindowStackTracker::on_destroyed`] from inside the host, so holding the
//! lock across it would deadlock. Index entries are always dropped before
//! the termination request is issued; the reentrant destroy callback then
//! finds removal a no-op.
//!
//! # Bulk termination
//!
//! The `finish_by_*` family snapshots the live stack under the lock, keeps
//! the survivors in original relative order, and terminates the matched
//! handles only after the lock is released. A live stack cannot be safely
//! iterated and mutated at once when the mutation can reenter.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::TrackerConfig;
use crate::error::{Result, TrackerError};
use crate::handle::{LifecycleStage, WindowHandle, WindowId, WindowKind};
use crate::host::ScreenHost;

/// Thread-safe index of live windows, wired to one Screen Host.
///
/// Construct one per process at startup and pass it by reference to all
/// call sites. Lifecycle callbacks typically arrive on the host's main
/// thread while `finish_*` calls may come from background threads; every
/// operation is synchronous and linearizes through the internal mutex.
pub struct WindowStackTracker {
    host: Arc<dyn ScreenHost>,
    stack: Mutex<Vec<WindowHandle>>,
    config: TrackerConfig,
}

impl WindowStackTracker {
    pub fn new(host: Arc<dyn ScreenHost>) -> Self {
        Self::with_config(host, TrackerConfig::default())
    }

    pub fn with_config(host: Arc<dyn ScreenHost>, config: TrackerConfig) -> Self {
        Self {
            host,
            stack: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Instance name carried on every log event.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    // =========================================================================
    // Lifecycle entry points (Screen Host -> tracker)
    // =========================================================================

    /// A screen entered service: insert it into the stack.
    pub fn on_created(&self, handle: WindowHandle) {
        info!(
            tracker = %self.config.name,
            window = %handle.id,
            kind = %handle.kind,
            label = %handle.label,
            stage = LifecycleStage::Created.name(),
            "Window created"
        );
        self.add(handle);
    }

    pub fn on_started(&self, id: WindowId) {
        self.log_stage(id, LifecycleStage::Started);
    }

    pub fn on_resumed(&self, id: WindowId) {
        self.log_stage(id, LifecycleStage::Resumed);
    }

    pub fn on_paused(&self, id: WindowId) {
        self.log_stage(id, LifecycleStage::Paused);
    }

    pub fn on_stopped(&self, id: WindowId) {
        self.log_stage(id, LifecycleStage::Stopped);
    }

    pub fn on_save_state(&self, id: WindowId) {
        self.log_stage(id, LifecycleStage::SaveState);
    }

    /// A screen reached its terminal state: drop the index entry and run
    /// secondary cleanup. Safe to call redundantly; removal is idempotent.
    pub fn on_destroyed(&self, id: WindowId) {
        info!(
            tracker = %self.config.name,
            window = %id,
            stage = LifecycleStage::Destroyed.name(),
            "Window destroyed"
        );
        self.remove(id);
        self.host.release_focus(id);
    }

    fn log_stage(&self, id: WindowId, stage: LifecycleStage) {
        if self.config.log_transitions {
            debug!(
                tracker = %self.config.name,
                window = %id,
                stage = stage.name(),
                "Lifecycle transition"
            );
        }
    }

    // =========================================================================
    // Stack operations
    // =========================================================================

    /// Add a window to the top of the stack. No-op if the identity is
    /// already tracked.
    pub fn add(&self, handle: WindowHandle) {
        let mut stack = self.stack.lock();
        if stack.iter().any(|h| h.id == handle.id) {
            debug!(
                tracker = %self.config.name,
                window = %handle.id,
                "Window already tracked, ignoring add"
            );
            return;
        }
        debug!(
            tracker = %self.config.name,
            window = %handle.id,
            kind = %handle.kind,
            depth = stack.len() + 1,
            "Tracking window"
        );
        stack.push(handle);
    }

    /// Remove a window by identity. No-op if absent; safe to call from both
    /// the destroy callback and the explicit termination path.
    pub fn remove(&self, id: WindowId) {
        let mut stack = self.stack.lock();
        if let Some(pos) = stack.iter().position(|h| h.id == id) {
            let handle = stack.remove(pos);
            debug!(
                tracker = %self.config.name,
                window = %handle.id,
                kind = %handle.kind,
                depth = stack.len(),
                "Untracked window"
            );
        }
    }

    /// Remove several windows; each removal is independent.
    pub fn remove_many(&self, ids: &[WindowId]) {
        for id in ids {
            self.remove(*id);
        }
    }

    /// The most recently created live window.
    pub fn current(&self) -> Result<WindowHandle> {
        self.stack
            .lock()
            .last()
            .cloned()
            .ok_or(TrackerError::NoCurrentWindow)
    }

    /// Copy of the live stack, bottom first.
    pub fn snapshot(&self) -> Vec<WindowHandle> {
        self.stack.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.stack.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.lock().is_empty()
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.stack.lock().iter().any(|h| h.id == id)
    }

    /// Whether any non-finishing window of one of the given kinds is
    /// tracked. Read-only: scans a copied snapshot, never the live stack.
    pub fn exists_of_kinds(&self, kinds: &[WindowKind]) -> bool {
        if kinds.is_empty() {
            return false;
        }
        let snapshot = self.snapshot();
        snapshot
            .iter()
            .any(|h| !self.host.is_finishing(h.id) && h.kind.matches_any(kinds))
    }

    // =========================================================================
    // Termination
    // =========================================================================

    /// Drop the index entry for a window, then request platform termination
    /// unless the screen is already finishing. The entry is dropped first so
    /// a reentrant destroy callback cannot double-remove.
    pub fn finish(&self, id: WindowId) {
        self.remove(id);
        self.terminate(id);
    }

    /// Apply [`finish`](Self::finish) to each id in argument order.
    pub fn finish_many(&self, ids: &[WindowId]) {
        for id in ids {
            self.finish(*id);
        }
    }

    /// Finish the most recently created window.
    ///
    /// Returns [`TrackerError::NoCurrentWindow`] when the stack is empty
    /// instead of faulting.
    pub fn finish_current(&self) -> Result<()> {
        let current = self.current()?;
        self.finish(current.id);
        Ok(())
    }

    /// Finish every window of the given kind; all others keep their
    /// original relative order.
    pub fn finish_by_kind(&self, kind: WindowKind) {
        self.finish_where(|h| h.kind == kind);
    }

    /// Finish every window whose kind matches any of the given kinds.
    /// No-op on an empty kind list.
    pub fn finish_by_kinds(&self, kinds: &[WindowKind]) {
        if kinds.is_empty() {
            return;
        }
        self.finish_where(|h| h.kind.matches_any(kinds));
    }

    /// Finish every window except those of the given kind.
    pub fn finish_all_except_kind(&self, kind: WindowKind) {
        self.finish_where(|h| h.kind != kind);
    }

    /// Finish every window whose kind matches none of the given kinds.
    /// No-op on an empty kind list.
    pub fn finish_all_except_kinds(&self, kinds: &[WindowKind]) {
        if kinds.is_empty() {
            return;
        }
        self.finish_where(|h| !h.kind.matches_any(kinds));
    }

    /// Finish every tracked window and clear the stack.
    pub fn finish_all(&self) {
        self.finish_where(|_| true);
    }

    /// Snapshot-then-rebuild core of the `finish_by_*` family.
    ///
    /// Under the lock: take the live stack, write back the survivors in
    /// original relative order, and collect the matched handles. After
    /// releasing the lock: terminate the matched handles one by one.
    fn finish_where<F>(&self, doomed: F)
    where
        F: Fn(&WindowHandle) -> bool,
    {
        let matched: Vec<WindowHandle> = {
            let mut stack = self.stack.lock();
            let snapshot = std::mem::take(&mut *stack);
            let mut matched = Vec::new();
            for handle in snapshot {
                if doomed(&handle) {
                    matched.push(handle);
                } else {
                    stack.push(handle);
                }
            }
            matched
        };

        if matched.is_empty() {
            debug!(tracker = %self.config.name, "No windows matched, nothing to finish");
            return;
        }

        info!(
            tracker = %self.config.name,
            count = matched.len(),
            "Finishing windows"
        );
        for handle in &matched {
            self.terminate(handle.id);
        }
    }

    /// Recheck `is_finishing` and issue the termination request. Host
    /// failures are swallowed: logged, never propagated.
    fn terminate(&self, id: WindowId) {
        if self.host.is_finishing(id) {
            debug!(
                tracker = %self.config.name,
                window = %id,
                "Window already finishing, skipping request"
            );
            return;
        }
        if let Err(e) = self.host.request_finish(id) {
            warn!(
                tracker = %self.config.name,
                window = %id,
                error = %e,
                "Termination request failed"
            );
        }
    }
}

impl std::fmt::Debug for WindowStackTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowStackTracker")
            .field("name", &self.config.name)
            .field("depth", &self.len())
            .finish()
    }
}
