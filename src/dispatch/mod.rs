//! Dispatch. Context words, targets, thunks and the delegates built on them.

pub mod context;
pub mod delegate;
pub mod forwarding;
pub mod target;

pub use context::{fits_inline, Context, CONTEXT_ALIGN, CONTEXT_SIZE};
pub use delegate::{Delegate, Unbound};
pub use forwarding::{CommandDelegate, EventDelegate, ForwardingDelegate};
pub use target::{Compatible, Functor, Method};
