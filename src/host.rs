//! Screen Host boundary.
//!
//! The Screen Host is the platform component that owns actual screen
//! lifecycle. The tracker never owns screen memory; it calls back into the
//! host to query teardown state and to request termination. The host is
//! wired in at construction - no global discovery.

use crate::handle::WindowId;

/// Contract the tracker relies on from the platform window system.
///
/// # Reentrancy
///
/// `request_finish` is fire-and-forget and may synchronously reenter the
/// tracker's `on_destroyed` before returning. The tracker therefore never
/// holds its stack lock across any method of this trait.
pub trait ScreenHost: Send + Sync {
    /// Whether the screen has already begun its teardown sequence.
    fn is_finishing(&self, id: WindowId) -> bool;

    /// Ask the platform to terminate the screen. Errors are swallowed at the
    /// tracker call site: logged, never propagated.
    fn request_finish(&self, id: WindowId) -> anyhow::Result<()>;

    /// Secondary cleanup hook invoked when a screen is destroyed, e.g.
    /// releasing an input-focus resource tied to it. Default is a no-op.
    fn release_focus(&self, _id: WindowId) {}
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording test double for the Screen Host.

    use super::*;
    use anyhow::bail;
    use parking_lot::Mutex;
    use std::collections::HashSet;

    /// Records every termination request and focus release. Successful
    /// requests mark the window as finishing, matching platform behavior.
    #[derive(Default)]
    pub struct MockHost {
        finishing: Mutex<HashSet<WindowId>>,
        refuse: Mutex<HashSet<WindowId>>,
        requests: Mutex<Vec<WindowId>>,
        released: Mutex<Vec<WindowId>>,
    }

    impl MockHost {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-mark a window as already finishing.
        pub fn mark_finishing(&self, id: WindowId) {
            self.finishing.lock().insert(id);
        }

        /// Make `request_finish` fail for the given window.
        pub fn refuse(&self, id: WindowId) {
            self.refuse.lock().insert(id);
        }

        pub fn requests(&self) -> Vec<WindowId> {
            self.requests.lock().clone()
        }

        pub fn request_count(&self, id: WindowId) -> usize {
            self.requests.lock().iter().filter(|r| **r == id).count()
        }

        pub fn released(&self) -> Vec<WindowId> {
            self.released.lock().clone()
        }
    }

    impl ScreenHost for MockHost {
        fn is_finishing(&self, id: WindowId) -> bool {
            self.finishing.lock().contains(&id)
        }

        fn request_finish(&self, id: WindowId) -> anyhow::Result<()> {
            self.requests.lock().push(id);
            if self.refuse.lock().contains(&id) {
                bail!("host refused to finish window {id}");
            }
            self.finishing.lock().insert(id);
            Ok(())
        }

        fn release_focus(&self, id: WindowId) {
            self.released.lock().push(id);
        }
    }
}
