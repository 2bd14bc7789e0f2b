//! Forwarding delegate. A `Delegate` that can only pass notifications downstream.
//!
//! The signature returns `()` and every parameter is an
//! [`ImmutableArgument`](crate::contract::mutability::ImmutableArgument), so
//! the callee can read what it is handed but never write back into caller
//! storage.

use core::any::type_name;
use core::fmt;

use crate::contract::behavior::{Behavior, Mandatory, Optional, Policy};
use crate::contract::mutability::ForwardingSignature;

use super::delegate::{Delegate, Unbound};
use super::target::{Compatible, Functor, Method};

/// A `()`-returning delegate whose parameters are all read-only to the callee.
///
/// ```
/// use delegates::ForwardingDelegate;
/// use std::cell::Cell;
///
/// struct Display {
///     frames: Cell<u32>,
/// }
///
/// impl Display {
///     fn refresh(&self, speed_kmh: u16) {
///         let _ = speed_kmh;
///         self.frames.set(self.frames.get() + 1);
///     }
/// }
///
/// let display = Display { frames: Cell::new(0) };
/// let on_speed = ForwardingDelegate::<fn(u16)>::create_method(&display, Display::refresh);
/// on_speed.call(88);
/// assert_eq!(display.frames.get(), 1);
/// ```
///
/// # Static contracts
///
/// The signature must return `()`:
///
/// ```compile_fail
/// let _ = delegates::ForwardingDelegate::<fn(u32) -> bool>::new();
/// ```
///
/// No parameter may grant write access to caller-owned data:
///
/// ```compile_fail
/// let _ = delegates::ForwardingDelegate::<fn(&'static mut i32)>::new();
/// ```
///
/// ```compile_fail
/// use std::cell::Cell;
/// let _ = delegates::ForwardingDelegate::<fn(&'static Cell<i32>)>::new();
/// ```
///
/// however many references sit in between:
///
/// ```compile_fail
/// use std::cell::Cell;
/// let _ = delegates::ForwardingDelegate::<fn(&'static &'static Cell<i32>)>::new();
/// ```
///
/// `zerocopy::Immutable` alone does not admit a struct behind `&`, since it
/// does not look through the struct's own references:
///
/// ```compile_fail
/// use std::cell::Cell;
/// use zerocopy::Immutable;
///
/// #[derive(Immutable)]
/// struct Handle<'b> {
///     slot: &'b Cell<u32>,
/// }
///
/// fn bind<'a>() -> delegates::ForwardingDelegate<'a, fn(&'a Handle<'a>)> {
///     delegates::ForwardingDelegate::new()
/// }
/// ```
///
/// The general delegate accepts the same mutable signature:
///
/// ```
/// let _ = delegates::Delegate::<fn(&'static mut i32)>::new();
/// ```
pub struct ForwardingDelegate<'t, S, B = Mandatory> {
    inner: Delegate<'t, S, B>,
}

/// A forwarding delegate that must be bound before it is called.
pub type CommandDelegate<'t, S> = ForwardingDelegate<'t, S, Mandatory>;

/// A forwarding delegate that silently drops calls while unbound.
pub type EventDelegate<'t, S> = ForwardingDelegate<'t, S, Optional>;

impl<'t, S, B> ForwardingDelegate<'t, S, B> {
    #[inline(always)]
    pub const fn new() -> Self
    where
        S: ForwardingSignature,
        B: Policy<()>,
    {
        Self {
            inner: Delegate::new(),
        }
    }

    /// See [`Delegate::create`].
    #[inline(always)]
    pub fn create<F, M>(target: &'t F) -> Self
    where
        S: ForwardingSignature,
        B: Policy<()>,
        F: Functor<M>,
        M: Compatible<S>,
    {
        Self {
            inner: Delegate::create::<F, M>(target),
        }
    }

    /// See [`Delegate::create_fn`].
    #[inline(always)]
    pub fn create_fn(function: S) -> Self
    where
        S: ForwardingSignature,
        B: Policy<()>,
    {
        Self {
            inner: Delegate::create_fn(function),
        }
    }

    /// See [`Delegate::create_method`].
    #[inline(always)]
    pub fn create_method<C, F, M>(receiver: &'t C, method: F) -> Self
    where
        S: ForwardingSignature,
        B: Policy<()>,
        F: Method<C, M>,
        M: Compatible<S>,
    {
        Self {
            inner: Delegate::create_method::<C, F, M>(receiver, method),
        }
    }

    /// See [`Delegate::create_inline`].
    #[inline(always)]
    pub fn create_inline<F, M>(target: F) -> Self
    where
        S: ForwardingSignature,
        B: Policy<()>,
        F: Functor<M> + Copy + 't,
        M: Compatible<S>,
    {
        Self {
            inner: Delegate::create_inline::<F, M>(target),
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            inner: self.inner.take(),
        }
    }

    #[inline(always)]
    pub fn is_bound(&self) -> bool {
        self.inner.is_bound()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The same binding as a general delegate.
    #[inline(always)]
    pub fn as_delegate(&self) -> Delegate<'t, S, B> {
        self.inner
    }
}

macro_rules! call {
    ($n:expr; $($arg:ident $val:ident),*) => {
        impl<'t, B, $($arg),*> ForwardingDelegate<'t, fn($($arg),*), B>
        where
            fn($($arg),*): ForwardingSignature,
            B: Policy<()>,
        {
            /// Forwards to the target, or applies the behavior when there is none.
            #[inline(always)]
            #[track_caller]
            pub fn call(&self, $($val: $arg),*) -> B::Outcome<()> {
                self.inner.call($($val),*)
            }
        }
    };
}

for_each_arity!(call);

impl<'t, S, B> Default for ForwardingDelegate<'t, S, B>
where
    S: ForwardingSignature,
    B: Policy<()>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, S, B> Clone for ForwardingDelegate<'t, S, B> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, S, B> Copy for ForwardingDelegate<'t, S, B> {}

impl<'t, S, B: Behavior> fmt::Debug for ForwardingDelegate<'t, S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardingDelegate")
            .field("signature", &type_name::<S>())
            .field("behavior", &B::NAME)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<'t, S, B> PartialEq<Unbound> for ForwardingDelegate<'t, S, B> {
    #[inline(always)]
    fn eq(&self, _: &Unbound) -> bool {
        self.is_empty()
    }
}

impl<'t, S, B> PartialEq<ForwardingDelegate<'t, S, B>> for Unbound {
    #[inline(always)]
    fn eq(&self, other: &ForwardingDelegate<'t, S, B>) -> bool {
        other.is_empty()
    }
}

impl<'t, S, B> From<Unbound> for ForwardingDelegate<'t, S, B>
where
    S: ForwardingSignature,
    B: Policy<()>,
{
    #[inline(always)]
    fn from(_: Unbound) -> Self {
        Self::new()
    }
}

impl<'t, S, B> From<ForwardingDelegate<'t, S, B>> for Delegate<'t, S, B> {
    #[inline(always)]
    fn from(forwarding: ForwardingDelegate<'t, S, B>) -> Self {
        forwarding.inner
    }
}
