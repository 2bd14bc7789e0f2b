//! General delegate. Two words, no allocation, any return type.

use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, size_of};

use crate::contract::behavior::{Behavior, Mandatory, Policy};
use crate::contract::diagnostics;
use crate::contract::signature::{ErasedThunk, Signature};

use super::context::{fits_inline, Context};
use super::target::{Compatible, Functor, Method};

/// The empty state. Compares equal to every delegate without a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unbound;

/// A non-owning handle to a callable with signature `S`.
///
/// `B` decides what [`call`](Delegate::call) does without a target:
///
/// | `B`           | bound      | unbound                |
/// |---------------|------------|------------------------|
/// | [`Mandatory`] | `R`        | panic                  |
/// | `Expected`    | `Ok(R)`    | `Err(BadDelegateCall)` |
/// | `Optional`    | `()`       | `()`                   |
///
/// The delegate borrows its target for `'t` and never owns it. Copying a
/// delegate copies the binding; both copies call the same target.
///
/// ```
/// use delegates::Delegate;
///
/// let step = 1;
/// let incrementer = |x: i32| x + step;
/// let delegate = Delegate::<fn(i32) -> i32>::create(&incrementer);
/// assert_eq!(delegate.call(5), 6);
/// ```
///
/// # Static contracts
///
/// Only fn pointer types are signatures:
///
/// ```compile_fail
/// let _ = delegates::Delegate::<u32>::new();
/// ```
///
/// Only the three behavior tags are behaviors:
///
/// ```compile_fail
/// #[derive(Clone, Copy, Default, Debug)]
/// struct Sometimes;
/// let _ = delegates::Delegate::<fn(), Sometimes>::new();
/// ```
///
/// `Optional` cannot invent a return value:
///
/// ```compile_fail
/// use delegates::{Delegate, Optional};
/// let _ = Delegate::<fn() -> i32, Optional>::new();
/// ```
///
/// Targets must be callable:
///
/// ```compile_fail
/// let threshold = 5u32;
/// let _ = delegates::Delegate::<fn(u32)>::create(&threshold);
/// ```
///
/// through a shared reference. State that changes lives in a `Cell`:
///
/// ```compile_fail
/// let mut total = 0u32;
/// let mut add = |x: u32| total += x;
/// let _ = delegates::Delegate::<fn(u32)>::create(&add);
/// ```
///
/// ```
/// use std::cell::Cell;
/// let total = Cell::new(0u32);
/// let add = |x: u32| total.set(total.get() + x);
/// delegates::Delegate::<fn(u32)>::create(&add).call(4);
/// assert_eq!(total.get(), 4);
/// ```
///
/// and callable with exactly the declared types. Conversions are explicit:
///
/// ```compile_fail
/// let widen = |x: u64| x * 2;
/// let _ = delegates::Delegate::<fn(u32) -> u64>::create(&widen);
/// ```
///
/// Inline targets must fit the context word:
///
/// ```compile_fail
/// let table = [1u64, 2, 3];
/// let lookup = move |i: usize| table[i];
/// let _ = delegates::Delegate::<fn(usize) -> u64>::create_inline(lookup);
/// ```
///
/// Method selectors must be zero-sized:
///
/// ```compile_fail
/// struct Gain(u32);
/// let gain = Gain(2);
/// let offset = 7u32;
/// let _ = delegates::Delegate::<fn(u32) -> u32>::create_method(
///     &gain,
///     move |g: &Gain, x: u32| g.0 * x + offset,
/// );
/// ```
///
/// and take the receiver by shared reference:
///
/// ```compile_fail
/// struct Counter(u32);
/// impl Counter {
///     fn bump(&mut self, by: u32) {
///         self.0 += by;
///     }
/// }
/// let counter = Counter(0);
/// let _ = delegates::Delegate::<fn(u32)>::create_method(&counter, Counter::bump);
/// ```
pub struct Delegate<'t, S, B = Mandatory> {
    context: Context,
    thunk: Option<ErasedThunk>,
    _target: PhantomData<&'t ()>,
    _signature: PhantomData<S>,
    _behavior: PhantomData<B>,
}

const _: () = {
    assert!(size_of::<Delegate<'static, fn()>>() == 2 * size_of::<usize>());
    assert!(size_of::<Delegate<'static, fn(u64, u64) -> u64>>() == 2 * size_of::<usize>());
};

// Every operation states its own contract, so that a misuse is reported once,
// at the call, with the catalog message of the contract it breaks.
impl<'t, S, B> Delegate<'t, S, B> {
    #[inline(always)]
    const fn unbound() -> Self {
        Self {
            context: Context::empty(),
            thunk: None,
            _target: PhantomData,
            _signature: PhantomData,
            _behavior: PhantomData,
        }
    }

    /// An unbound delegate.
    #[inline(always)]
    pub const fn new() -> Self
    where
        S: Signature,
        B: Policy<S::Output>,
    {
        Self::unbound()
    }

    #[inline(always)]
    fn bind(context: Context, thunk: S::Thunk, target: &'static str) -> Self
    where
        S: Signature,
        B: Policy<S::Output>,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            signature = type_name::<S>(),
            behavior = B::NAME,
            bound_to = target,
            "delegate bound"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = target;
        Self {
            context,
            thunk: Some(S::erase(thunk)),
            _target: PhantomData,
            _signature: PhantomData,
            _behavior: PhantomData,
        }
    }

    /// Binds a borrowed functor: a closure, fn item or anything `Fn`.
    ///
    /// `M` is the functor's own signature and is inferred.
    #[inline(always)]
    pub fn create<F, M>(target: &'t F) -> Self
    where
        S: Signature,
        B: Policy<S::Output>,
        F: Functor<M>,
        M: Compatible<S>,
    {
        Self::bind(Context::borrowed(target), M::cast(F::borrowed_thunk()), type_name::<F>())
    }

    /// Binds a free function. The pointer is stored in the context word.
    #[inline(always)]
    pub fn create_fn(function: S) -> Self
    where
        S: Signature,
        B: Policy<S::Output>,
    {
        Self::bind(Context::inline(function), S::function_thunk(), type_name::<S>())
    }

    /// Binds `method` on `receiver`.
    ///
    /// `method` is a method path (`Counter::bump`) or a non-capturing closure
    /// taking `&C` first. It is baked into the thunk, so it must be zero-sized.
    #[inline(always)]
    pub fn create_method<C, F, M>(receiver: &'t C, method: F) -> Self
    where
        S: Signature,
        B: Policy<S::Output>,
        F: Method<C, M>,
        M: Compatible<S>,
    {
        const { assert!(size_of::<F>() == 0, "{}", diagnostics::METHOD_NOT_ZERO_SIZED) };
        let _ = method;
        Self::bind(Context::borrowed(receiver), M::cast(F::method_thunk()), type_name::<F>())
    }

    /// Binds a `Copy` functor stored by value in the context word.
    ///
    /// Suited to closures capturing a single reference or small scalar. The
    /// captures still bound `'t`.
    #[inline(always)]
    pub fn create_inline<F, M>(target: F) -> Self
    where
        S: Signature,
        B: Policy<S::Output>,
        F: Functor<M> + Copy + 't,
        M: Compatible<S>,
    {
        const { assert!(fits_inline::<F>(), "{}", diagnostics::INLINE_TARGET_TOO_LARGE) };
        Self::bind(Context::inline(target), M::cast(F::inline_thunk()), type_name::<F>())
    }

    /// Drops the binding. A no-op when already unbound.
    #[inline]
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        if self.is_bound() {
            tracing::trace!(signature = type_name::<S>(), "delegate reset");
        }
        *self = Self::unbound();
    }

    /// Moves the binding out, leaving `self` unbound.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::unbound())
    }

    #[inline(always)]
    pub fn is_bound(&self) -> bool {
        self.thunk.is_some()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.thunk.is_none()
    }
}

macro_rules! call {
    ($n:expr; $($arg:ident $val:ident),*) => {
        impl<'t, R, B, $($arg),*> Delegate<'t, fn($($arg),*) -> R, B>
        where
            B: Policy<R>,
        {
            /// Invokes the target, or applies the behavior when there is none.
            ///
            /// # Panics
            ///
            /// An unbound [`Mandatory`] delegate panics. Panics raised by the
            /// target propagate unchanged.
            #[inline(always)]
            #[track_caller]
            pub fn call(&self, $($val: $arg),*) -> B::Outcome<R> {
                match self.thunk {
                    Some(erased) => {
                        // SAFETY: every factory erases a thunk of this signature, and
                        // stores it with the context it was generated for. `'t` keeps
                        // a borrowed target alive.
                        let thunk = unsafe { <fn($($arg),*) -> R as Signature>::restore(erased) };
                        B::bound(unsafe { thunk(self.context, $($val),*) })
                    }
                    None => B::unbound(),
                }
            }
        }
    };
}

for_each_arity!(call);

impl<'t, S, B> Default for Delegate<'t, S, B>
where
    S: Signature,
    B: Policy<S::Output>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, S, B> Clone for Delegate<'t, S, B> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, S, B> Copy for Delegate<'t, S, B> {}

impl<'t, S, B: Behavior> fmt::Debug for Delegate<'t, S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate")
            .field("signature", &type_name::<S>())
            .field("behavior", &B::NAME)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<'t, S, B> PartialEq<Unbound> for Delegate<'t, S, B> {
    #[inline(always)]
    fn eq(&self, _: &Unbound) -> bool {
        self.is_empty()
    }
}

impl<'t, S, B> PartialEq<Delegate<'t, S, B>> for Unbound {
    #[inline(always)]
    fn eq(&self, other: &Delegate<'t, S, B>) -> bool {
        other.is_empty()
    }
}

impl<'t, S, B> From<Unbound> for Delegate<'t, S, B>
where
    S: Signature,
    B: Policy<S::Output>,
{
    #[inline(always)]
    fn from(_: Unbound) -> Self {
        Self::new()
    }
}
