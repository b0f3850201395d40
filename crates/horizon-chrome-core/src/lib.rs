//! Core systems for Horizon Chrome.
//!
//! This crate provides the small runtime the frameless window chrome is built on:
//!
//! - **Signal/Slot System**: Type-safe notifications from chrome buttons
//! - **Queued Invocations**: Deferred slot execution drained on the UI thread
//! - **Thread Affinity**: Checks that chrome state is only touched from the UI thread
//! - **Logging**: `tracing` targets and helper macros shared by all chrome crates
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_chrome_core::{ConnectionType, Signal};
//!
//! // A button's "clicked" notification carrying the checked state
//! let clicked = Signal::<bool>::new();
//!
//! // Direct connections run inside `emit`, before it returns
//! let conn_id = clicked.connect_with_type(
//!     |checked| println!("toggle is now {}", checked),
//!     ConnectionType::Direct,
//! );
//!
//! clicked.emit(true);
//! clicked.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use error::{Result, SignalError};
pub use logging::PerfSpan;
pub use signal::{
    pending_invocations, process_queued_invocations, ConnectionId, ConnectionType, Signal,
};
pub use thread_check::{is_ui_thread, set_ui_thread, ThreadAffinity};

#[doc(hidden)]
pub use tracing;
