//! # Help Tooltip State
//!
//! - **`store`**: `ContextHelpStore`, tooltip visibility keyed by help id plus
//!   the global "show help icons" switch
//! - **`sync`**: `TooltipSync`, the three-state machine that keeps one tooltip
//!   widget in agreement with its store entry
//!
//! Both are plain values without any UI framework dependency.

pub mod store;
pub mod sync;

pub use store::{ContextHelp, ContextHelpStore, HelpError};
pub use sync::{SyncCommand, SyncEvent, TooltipState, TooltipSync};
