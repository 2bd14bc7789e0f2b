//! Mutability guard for forwarding delegates.
//!
//! A forwarding delegate only passes notifications downstream. The callee may
//! read what it is given and may keep what it owns, but it must never be able
//! to write into storage the caller still owns.
//!
//! - Accepted: owned values (moved or copied into the callee), `&T` and
//!   `*const T` where `T` is [`ReadOnly`].
//! - Rejected: `&mut T`, `*mut T`, and shared references that reach a `Cell`,
//!   `RefCell`, atomic or `&mut` at any depth.
//!
//! [`zerocopy::Immutable`] only looks at the bytes of `T` itself and stops at
//! every pointer, so `&&Cell<u32>` would pass it. [`ReadOnly`] is the same
//! question asked through every reference.

use core::marker::PhantomData;
use core::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize, Wrapping,
};
use core::time::Duration;

use zerocopy::Immutable;

use super::signature::Signature;

/// A parameter type through which the callee cannot mutate caller-owned data.
///
/// Owned user types opt in with an empty impl:
///
/// ```
/// use delegates::ImmutableArgument;
///
/// #[derive(Clone, Copy)]
/// struct SpeedSample {
///     kmh: f32,
/// }
///
/// impl ImmutableArgument for SpeedSample {}
/// ```
///
/// Borrowed user types are passed as `&T` and implement [`ReadOnly`], usually
/// through [`read_only!`](crate::read_only).
#[diagnostic::on_unimplemented(
    message = "Invalid mutable function argument in 'fn(Args...)'. All function arguments of a forwarding delegate must be immutable. The argument types shall prevent that the callee is able to modify passed data still owned by the caller. E.g. '&mut i32' is not allowed. '&i32' is allowed (readonly). 'i32' is also allowed (data owned by callee). Consider using the general delegate if mutable arguments are needed.",
    label = "`{Self}` lets the callee mutate caller-owned data",
    note = "shared references are accepted only to `ReadOnly` data, which has no interior mutability at any depth"
)]
pub trait ImmutableArgument {}

/// Data that cannot be mutated through a shared reference, however deep.
///
/// Unlike [`Immutable`] this follows pointers: `&T` and `*const T` are
/// `ReadOnly` only when `T` is. `&mut T`, `*mut T` and every interior-mutable
/// cell are not. User structs opt in with [`read_only!`](crate::read_only),
/// which requires every field to be `ReadOnly`, or with a manual impl when
/// the struct is `Immutable` and holds no pointers:
///
/// ```
/// use delegates::ReadOnly;
/// use zerocopy::Immutable;
///
/// #[derive(Immutable)]
/// struct Frame {
///     id: u32,
///     payload: [u8; 8],
/// }
///
/// impl ReadOnly for Frame {}
/// ```
#[diagnostic::on_unimplemented(
    message = "Invalid mutable function argument in 'fn(Args...)'. All function arguments of a forwarding delegate must be immutable. The argument types shall prevent that the callee is able to modify passed data still owned by the caller. E.g. '&mut i32' is not allowed. '&i32' is allowed (readonly). 'i32' is also allowed (data owned by callee). Consider using the general delegate if mutable arguments are needed.",
    label = "`{Self}` can be mutated through a shared reference",
    note = "declare the struct with `delegates::read_only!` so that every field is checked"
)]
pub trait ReadOnly: Immutable {}

/// A `()`-returning signature whose every parameter is an [`ImmutableArgument`].
#[diagnostic::on_unimplemented(
    message = "Invalid parameter 'Signature'. The template parameter 'Signature' must be a valid function signature with return type 'void'. Consider using the general delegate if a non-void return type is needed.",
    label = "`{Self}` is not a `()`-returning function signature",
    note = "reference parameters need a named lifetime, e.g. `ForwardingDelegate<'a, fn(&'a Frame)>`; `fn(&Frame)` is higher-ranked and is not a signature"
)]
pub trait ForwardingSignature: Signature<Output = ()> {}

impl<T: ?Sized + ReadOnly> ImmutableArgument for &T {}
impl<T: ?Sized + ReadOnly> ImmutableArgument for *const T {}

impl<T: ?Sized + ReadOnly> ReadOnly for &T {}
impl<T: ?Sized + ReadOnly> ReadOnly for *const T {}
impl<T: ReadOnly> ReadOnly for [T] {}
impl<T: ReadOnly, const N: usize> ReadOnly for [T; N] {}
impl<T: ReadOnly> ReadOnly for Option<T> {}
impl<T: ReadOnly> ReadOnly for Wrapping<T> {}
impl<T: ?Sized> ReadOnly for PhantomData<T> {}
impl ReadOnly for str {}

macro_rules! owned {
    ($($ty:ty),* $(,)?) => {
        $(impl ImmutableArgument for $ty {})*
    };
}

macro_rules! scalar {
    ($($ty:ty),* $(,)?) => {
        owned!($($ty),*);
        $(impl ReadOnly for $ty {})*
    };
}

scalar!(
    (), bool, char, f32, f64,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
);

owned!(Duration, core::cmp::Ordering);

#[cfg(feature = "std")]
owned!(std::string::String);

#[cfg(feature = "std")]
impl<T: ImmutableArgument> ImmutableArgument for std::vec::Vec<T> {}

#[cfg(feature = "std")]
impl<T: ImmutableArgument> ImmutableArgument for std::boxed::Box<T> {}

impl<T: ImmutableArgument, const N: usize> ImmutableArgument for [T; N] {}
impl<T: ImmutableArgument> ImmutableArgument for Option<T> {}
impl<T: ImmutableArgument, E: ImmutableArgument> ImmutableArgument for Result<T, E> {}
impl<T: ImmutableArgument> ImmutableArgument for Wrapping<T> {}
impl<T: ?Sized> ImmutableArgument for PhantomData<T> {}

macro_rules! tuple {
    ($($t:ident),+) => {
        impl<$($t: ImmutableArgument),+> ImmutableArgument for ($($t,)+) {}
        impl<$($t: ReadOnly),+> ReadOnly for ($($t,)+) {}
    };
}

tuple!(T1);
tuple!(T1, T2);
tuple!(T1, T2, T3);
tuple!(T1, T2, T3, T4);

macro_rules! forwarding {
    ($n:expr; $($arg:ident $val:ident),*) => {
        // Code pointers are copied; the callee gets nothing to write through.
        impl<R, $($arg),*> ImmutableArgument for fn($($arg),*) -> R {}

        impl<$($arg),*> ForwardingSignature for fn($($arg),*)
        where
            $($arg: ImmutableArgument,)*
        {
        }
    };
}

for_each_arity!(forwarding);

/// Declares a struct together with [`ReadOnly`] and [`ImmutableArgument`]
/// impls that hold only while every field type is [`ReadOnly`].
///
/// The struct still needs `#[derive(zerocopy::Immutable)]`. Lifetime
/// parameters are supported, type parameters are not.
///
/// ```
/// use delegates::{read_only, ForwardingDelegate};
/// use zerocopy::Immutable;
///
/// read_only! {
///     #[derive(Immutable)]
///     pub struct Reading<'s> {
///         pub sensor: &'s str,
///         pub value: i32,
///     }
/// }
///
/// fn publish<'a>(sink: ForwardingDelegate<'_, fn(&'a Reading<'a>)>, reading: &'a Reading<'a>) {
///     sink.call(reading);
/// }
/// # let _ = publish;
/// ```
///
/// A field that reaches a cell through a reference is rejected where the
/// struct is used:
///
/// ```compile_fail
/// use delegates::{read_only, ForwardingDelegate};
/// use std::cell::Cell;
/// use zerocopy::Immutable;
///
/// read_only! {
///     #[derive(Immutable)]
///     struct Handle<'s> {
///         slot: &'s Cell<u32>,
///     }
/// }
///
/// fn bind<'a>() -> ForwardingDelegate<'a, fn(&'a Handle<'a>)> {
///     ForwardingDelegate::new()
/// }
/// ```
#[macro_export]
macro_rules! read_only {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident $(<$($lt:lifetime),+ $(,)?>)? {
            $($(#[$field_attr:meta])* $field_vis:vis $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$attr])*
        $vis struct $name $(<$($lt),+>)? {
            $($(#[$field_attr])* $field_vis $field: $ty),*
        }

        impl $(<$($lt),+>)? $crate::ReadOnly for $name $(<$($lt),+>)?
        where
            $($ty: $crate::ReadOnly,)*
        {
        }

        impl $(<$($lt),+>)? $crate::ImmutableArgument for $name $(<$($lt),+>)?
        where
            $($ty: $crate::ReadOnly,)*
        {
        }
    };
}
