//! Target behavior. Decides what calling an unbound delegate means.
//!
//! - [`Mandatory`]: a contract violation. Panics.
//! - [`Expected`]: recoverable. The call returns `Err(BadDelegateCall)`.
//! - [`Optional`]: silent no-op. Only for signatures returning `()`.

use core::fmt::Debug;

/// Panic message of an unbound [`Mandatory`] delegate.
pub const UNBOUND_MANDATORY: &str = "called an unbound delegate whose target is mandatory";

/// An [`Expected`] delegate was called without a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("delegate called without a bound target")]
pub struct BadDelegateCall;

/// Calling without a target is a bug. The default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mandatory;

/// Calling without a target is a recoverable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Expected;

/// Calling without a target does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Optional;

mod sealed {
    pub trait Sealed {}
    pub trait SealedReturns<K> {}

    impl Sealed for super::Mandatory {}
    impl Sealed for super::Expected {}
    impl Sealed for super::Optional {}

    impl<R> SealedReturns<super::Mandatory> for R {}
    impl<R> SealedReturns<super::Expected> for R {}
    impl SealedReturns<super::Optional> for () {}
}

/// One of the three recognized behavior tags.
#[diagnostic::on_unimplemented(
    message = "Invalid parameter 'Behavior'. The template parameter 'Behavior' must either be empty or contain one of the types 'target_is_optional', 'target_is_expected' or 'target_is_mandatory'.",
    label = "`{Self}` is not a target behavior",
    note = "use `Mandatory`, `Expected` or `Optional`, or leave the parameter out"
)]
pub trait Behavior: sealed::Sealed + Copy + Default + Debug + 'static {
    /// Tag name as it appears in diagnostics.
    const NAME: &'static str;

    /// Key for the return type check. Always `Self`.
    type Kind;

    /// What `call` hands back for a declared return type `R`.
    type Outcome<R>;

    fn bound<R>(value: R) -> Self::Outcome<R>;

    fn unbound<R>() -> Self::Outcome<R>;
}

/// A behavior that is valid for return type `R`.
///
/// The return check is keyed on [`Behavior::Kind`], so an unrecognized tag
/// reports only the behavior error.
#[diagnostic::on_unimplemented(
    message = "Invalid parameter 'Behavior'. The template parameter 'Behavior' must either be empty or contain one of the types 'target_is_optional', 'target_is_expected' or 'target_is_mandatory'.",
    label = "`{Self}` is not a target behavior",
    note = "use `Mandatory`, `Expected` or `Optional`, or leave the parameter out"
)]
pub trait Policy<R>: Behavior {}

impl<B, R> Policy<R> for B
where
    B: Behavior,
    R: Returns<B::Kind>,
{
}

/// Return type `Self` is compatible with behavior `K`.
#[diagnostic::on_unimplemented(
    message = "Return type coflicts with parameter 'Behavior'. The parameter 'Behavior' is only allowed to be 'target_is_optional' if the return type is 'void'.",
    label = "`{Self}` is returned, but `{K}` needs `()`",
    note = "use `Expected` to make a missing target observable for non-`()` returns"
)]
pub trait Returns<K>: sealed::SealedReturns<K> {}

impl<R> Returns<Mandatory> for R {}
impl<R> Returns<Expected> for R {}
impl Returns<Optional> for () {}

impl Behavior for Mandatory {
    const NAME: &'static str = "target_is_mandatory";

    type Kind = Self;
    type Outcome<R> = R;

    #[inline(always)]
    fn bound<R>(value: R) -> R {
        value
    }

    #[cold]
    #[inline(never)]
    #[track_caller]
    fn unbound<R>() -> R {
        #[cfg(feature = "tracing")]
        tracing::error!(behavior = Self::NAME, "unbound delegate called");
        panic!("{}", UNBOUND_MANDATORY)
    }
}

impl Behavior for Expected {
    const NAME: &'static str = "target_is_expected";

    type Kind = Self;
    type Outcome<R> = Result<R, BadDelegateCall>;

    #[inline(always)]
    fn bound<R>(value: R) -> Result<R, BadDelegateCall> {
        Ok(value)
    }

    #[cold]
    fn unbound<R>() -> Result<R, BadDelegateCall> {
        #[cfg(feature = "tracing")]
        tracing::debug!(behavior = Self::NAME, "unbound delegate called");
        Err(BadDelegateCall)
    }
}

impl Behavior for Optional {
    const NAME: &'static str = "target_is_optional";

    type Kind = Self;
    type Outcome<R> = ();

    #[inline(always)]
    fn bound<R>(_value: R) {}

    #[inline(always)]
    fn unbound<R>() {}
}
