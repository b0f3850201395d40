//! Signal/slot system for Horizon Chrome.
//!
//! Chrome buttons notify the frameless window through signals. A signal holds
//! any number of connected slots (closures); emitting the signal invokes them
//! according to each connection's [`ConnectionType`].
//!
//! # Connection Types
//!
//! - **Direct**: Slot is called immediately, inside [`Signal::emit`]
//! - **Queued**: Slot execution is parked in the invocation queue and runs when
//!   the UI thread calls [`process_queued_invocations`]
//! - **Auto**: Direct if emitted on the connecting thread, Queued otherwise (default)
//!
//! The maximize/restore toggle is connected `Direct` so the window state
//! transition completes before the click emission returns.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use horizon_chrome_core::Signal;
//!
//! let minimize_clicked = Signal::<bool>::new();
//! let minimized = Arc::new(AtomicUsize::new(0));
//!
//! let counter = minimized.clone();
//! let id = minimize_clicked.connect(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! minimize_clicked.emit(false);
//! assert!(minimize_clicked.disconnect(id));
//! minimize_clicked.emit(false);
//! assert_eq!(minimized.load(Ordering::SeqCst), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, OnceLock};
use std::thread::ThreadId;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, SignalError};
use crate::logging::targets;

new_key_type! {
    /// Handle to one slot on one signal, returned by [`Signal::connect`].
    pub struct ConnectionId;
}

/// When a slot runs relative to [`Signal::emit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionType {
    /// Invoke the slot immediately in the emitting thread.
    Direct,

    /// Park the invocation until the UI thread drains the queue.
    Queued,

    /// Direct when emitted on the thread that connected, Queued otherwise.
    #[default]
    Auto,
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct Connection<Args> {
    slot: Slot<Args>,
    kind: ConnectionType,
    /// Thread that called `connect`; `Auto` slots run directly only there.
    home: ThreadId,
}

/// A notification with any number of connected slots.
///
/// `Args` is cloned once per queued slot; direct slots borrow it.
///
/// Slots are snapshotted before invocation, so a slot may connect or
/// disconnect on the signal it is being called from without deadlocking.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
}

impl<Args: Clone + Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: Clone + Send + 'static> Signal<Args> {
    /// A signal with nothing connected.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot with [`ConnectionType::Auto`].
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connect_with_type(slot, ConnectionType::Auto)
    }

    /// Connect a slot that runs according to `kind`.
    ///
    /// ```
    /// use horizon_chrome_core::{ConnectionType, Signal};
    ///
    /// let toggled = Signal::<bool>::new();
    /// toggled.connect_with_type(|&checked| assert!(checked), ConnectionType::Direct);
    /// toggled.emit(true);
    /// ```
    pub fn connect_with_type<F>(&self, slot: F, kind: ConnectionType) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.slots.lock().insert(Connection {
            slot: Arc::new(slot),
            kind,
            home: std::thread::current().id(),
        });
        tracing::trace!(target: targets::SIGNAL, ?kind, "slot connected");
        id
    }

    /// Remove one slot. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Disconnect a slot, reporting an unknown ID as an error.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<()> {
        if self.disconnect(id) {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection)
        }
    }

    /// Check whether a connection is still live.
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.slots.lock().contains_key(id)
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Run or queue every connected slot.
    #[tracing::instrument(skip_all, target = "horizon_chrome_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let here = std::thread::current().id();
        let snapshot: Vec<(Slot<Args>, bool)> = self
            .slots
            .lock()
            .values()
            .map(|conn| {
                let direct = match conn.kind {
                    ConnectionType::Direct => true,
                    ConnectionType::Auto => conn.home == here,
                    ConnectionType::Queued => false,
                };
                (conn.slot.clone(), direct)
            })
            .collect();
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");

        for (slot, direct) in snapshot {
            if direct {
                slot(&args);
            } else {
                let args = args.clone();
                invocation_queue()
                    .lock()
                    .push_back(Box::new(move || slot(&args)));
            }
        }
    }
}

/// A parked slot invocation.
type QueuedInvocation = Box<dyn FnOnce() + Send>;

static INVOCATION_QUEUE: OnceLock<Mutex<VecDeque<QueuedInvocation>>> = OnceLock::new();

fn invocation_queue() -> &'static Mutex<VecDeque<QueuedInvocation>> {
    INVOCATION_QUEUE.get_or_init(|| Mutex::new(VecDeque::new()))
}

/// Run every parked invocation in FIFO order.
///
/// Call this from the UI thread's event loop (for example on
/// `about_to_wait`). Invocations queued while draining run in the same call.
///
/// Returns the number of invocations executed.
pub fn process_queued_invocations() -> usize {
    crate::debug_assert_ui_thread!("queued invocations must be drained on the UI thread");

    let mut count = 0;
    loop {
        let next = invocation_queue().lock().pop_front();
        match next {
            Some(invocation) => {
                invocation();
                count += 1;
            }
            None => break,
        }
    }
    if count > 0 {
        tracing::trace!(target: targets::SIGNAL, count, "drained queued invocations");
    }
    count
}

/// Number of invocations waiting for [`process_queued_invocations`].
pub fn pending_invocations() -> usize {
    invocation_queue().lock().len()
}
