//! Diagnostic catalog. Every static rejection maps to exactly one entry.
//!
//! The texts are attached verbatim to the contract traits through
//! `#[diagnostic::on_unimplemented]`, or raised by const assertions in the
//! factories, so the compiler prints them at the offending declaration.

use core::fmt;

pub const INVALID_SIGNATURE: &str = "Invalid parameter 'Signature'. The template parameter 'Signature' must be a valid function signature.";

pub const INVALID_BEHAVIOR: &str = "Invalid parameter 'Behavior'. The template parameter 'Behavior' must either be empty or contain one of the types 'target_is_optional', 'target_is_expected' or 'target_is_mandatory'.";

pub const BEHAVIOR_CONFLICTS_WITH_RETURN: &str = "Return type coflicts with parameter 'Behavior'. The parameter 'Behavior' is only allowed to be 'target_is_optional' if the return type is 'void'.";

pub const FORWARDING_RETURNS_VALUE: &str = "Invalid parameter 'Signature'. The template parameter 'Signature' must be a valid function signature with return type 'void'. Consider using the general delegate if a non-void return type is needed.";

pub const MUTABLE_FORWARDING_ARGUMENT: &str = "Invalid mutable function argument in 'fn(Args...)'. All function arguments of a forwarding delegate must be immutable. The argument types shall prevent that the callee is able to modify passed data still owned by the caller. E.g. '&mut i32' is not allowed. '&i32' is allowed (readonly). 'i32' is also allowed (data owned by callee). Consider using the general delegate if mutable arguments are needed.";

pub const NOT_A_FUNCTOR: &str = "Invalid object passed. Object needs to be a functor (a class type with a function call operator, e.g. a lambda).";

pub const INCOMPATIBLE_TARGET: &str = "Passed functor has incompatible function call signature. The function call signature must be compatible with the signature of the delegate so that the delegate is able to invoke the functor.";

pub const INLINE_TARGET_TOO_LARGE: &str = "Invalid object passed. An inline target must be `Copy` and fit into a single machine word; borrow it with `create` instead.";

pub const METHOD_NOT_ZERO_SIZED: &str = "Invalid method passed. The method selector must be zero-sized (a method path or a non-capturing closure).";

/// A static contract a delegate declaration or factory call can break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Contract {
    /// `Signature` is not a fn pointer type.
    InvalidSignature = 1,
    /// `Behavior` is not one of the three tags.
    InvalidBehavior = 2,
    /// `Optional` paired with a non-`()` return.
    BehaviorConflictsWithReturn = 3,
    /// Forwarding signature returns a value.
    ForwardingReturnsValue = 4,
    /// Forwarding parameter grants write access.
    MutableForwardingArgument = 5,
    /// Target is not callable.
    NotAFunctor = 6,
    /// Target is callable, but not with the declared signature.
    IncompatibleTarget = 7,
    /// `create_inline` target is not word-sized.
    InlineTargetTooLarge = 8,
    /// `create_method` selector carries state.
    MethodNotZeroSized = 9,
}

impl Contract {
    pub const ALL: [Contract; 9] = [
        Contract::InvalidSignature,
        Contract::InvalidBehavior,
        Contract::BehaviorConflictsWithReturn,
        Contract::ForwardingReturnsValue,
        Contract::MutableForwardingArgument,
        Contract::NotAFunctor,
        Contract::IncompatibleTarget,
        Contract::InlineTargetTooLarge,
        Contract::MethodNotZeroSized,
    ];

    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn message(self) -> &'static str {
        match self {
            Contract::InvalidSignature => INVALID_SIGNATURE,
            Contract::InvalidBehavior => INVALID_BEHAVIOR,
            Contract::BehaviorConflictsWithReturn => BEHAVIOR_CONFLICTS_WITH_RETURN,
            Contract::ForwardingReturnsValue => FORWARDING_RETURNS_VALUE,
            Contract::MutableForwardingArgument => MUTABLE_FORWARDING_ARGUMENT,
            Contract::NotAFunctor => NOT_A_FUNCTOR,
            Contract::IncompatibleTarget => INCOMPATIBLE_TARGET,
            Contract::InlineTargetTooLarge => INLINE_TARGET_TOO_LARGE,
            Contract::MethodNotZeroSized => METHOD_NOT_ZERO_SIZED,
        }
    }

    /// The trait or factory that enforces this contract.
    pub const fn enforced_by(self) -> &'static str {
        match self {
            Contract::InvalidSignature => "Signature",
            Contract::InvalidBehavior => "Behavior",
            Contract::BehaviorConflictsWithReturn => "Returns",
            Contract::ForwardingReturnsValue => "ForwardingSignature",
            Contract::MutableForwardingArgument => "ImmutableArgument",
            Contract::NotAFunctor => "Functor",
            Contract::IncompatibleTarget => "Compatible",
            Contract::InlineTargetTooLarge => "create_inline",
            Contract::MethodNotZeroSized => "create_method",
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=9 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }
}

impl fmt::Display for Contract {
    /// `D00N: message`, or the bare message with `{:#}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.message())
        } else {
            write!(f, "D{:03}: {}", self.code(), self.message())
        }
    }
}
