//! Static contracts. Signatures, behaviors, forwarding restrictions, diagnostics.

pub mod behavior;
pub mod diagnostics;
pub mod mutability;
pub mod signature;

pub use behavior::{BadDelegateCall, Behavior, Expected, Mandatory, Optional, Policy, Returns};
pub use diagnostics::Contract;
pub use mutability::{ForwardingSignature, ImmutableArgument, ReadOnly};
pub use signature::Signature;
