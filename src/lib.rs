#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[macro_use]
mod arity;

pub mod contract;
pub mod dispatch;

pub use arity::MAX_ARITY;

/// Prelude for declaring and binding delegates.
pub mod prelude {
    pub use crate::contract::{
        BadDelegateCall, Expected, ImmutableArgument, Mandatory, Optional, ReadOnly,
    };
    pub use crate::dispatch::{CommandDelegate, Delegate, EventDelegate, ForwardingDelegate, Unbound};
}

// Re-export primary types at crate root for convenience.
pub use contract::{
    BadDelegateCall, Behavior, Contract, Expected, ForwardingSignature, ImmutableArgument,
    Mandatory, Optional, Policy, ReadOnly, Returns, Signature,
};
pub use dispatch::{
    CommandDelegate, Compatible, Context, Delegate, EventDelegate, ForwardingDelegate, Functor,
    Method, Unbound,
};
