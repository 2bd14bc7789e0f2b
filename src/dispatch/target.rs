//! Targets and their thunks. Callability, compatibility and trampoline generation.
//!
//! Binding a target is two questions asked separately. [`Functor`] asks
//! whether the value is callable at all and infers its own signature `M`.
//! [`Compatible`] then asks whether `M` is exactly the declared signature.
//! Rust applies no implicit value conversions, so anything that needs
//! `.into()` or `as` is an explicit conversion and is rejected. Lifetime
//! subtyping still applies: a closure taking `&Frame` for any lifetime binds
//! to `fn(&'a Frame)`.

use crate::contract::signature::Signature;

use super::context::{conjure, Context};

/// A value callable through a shared reference, with its own signature `M`.
///
/// Implemented for everything that implements `Fn`: closures, fn items, fn
/// pointers. `M` is inferred from the target, never written by hand.
#[diagnostic::on_unimplemented(
    message = "Invalid object passed. Object needs to be a functor (a class type with a function call operator, e.g. a lambda).",
    label = "`{Self}` is not callable through a shared reference",
    note = "closures that mutate their captures are `FnMut`; keep mutable state in a `Cell` or `RefCell`"
)]
pub trait Functor<M: Signature> {
    /// Thunk for a target reached through `&Self`.
    #[doc(hidden)]
    fn borrowed_thunk() -> M::Thunk;

    /// Thunk for a target stored by value in the context word.
    #[doc(hidden)]
    fn inline_thunk() -> M::Thunk;
}

/// A target signature that is exactly the declared signature `S`.
#[diagnostic::on_unimplemented(
    message = "Passed functor has incompatible function call signature. The function call signature must be compatible with the signature of the delegate so that the delegate is able to invoke the functor.",
    label = "the target is callable as `{Self}`, not as `{S}`",
    note = "parameter and return types must match exactly; convert with `.into()` or `as` inside the target"
)]
pub trait Compatible<S: Signature>: Signature {
    #[doc(hidden)]
    fn cast(thunk: Self::Thunk) -> S::Thunk;
}

impl<S: Signature> Compatible<S> for S {
    #[inline(always)]
    fn cast(thunk: S::Thunk) -> S::Thunk {
        thunk
    }
}

/// A zero-sized method selector callable on `&C`, with its own signature `M`.
///
/// Method paths (`Counter::bump`) and non-capturing closures
/// (`|c: &Counter, by| c.bump(by)`) qualify.
#[diagnostic::on_unimplemented(
    message = "Passed functor has incompatible function call signature. The function call signature must be compatible with the signature of the delegate so that the delegate is able to invoke the functor.",
    label = "`{Self}` cannot be called on `&{C}`",
    note = "a method selector takes `&{C}` first, followed by the declared parameters"
)]
pub trait Method<C, M: Signature>: Copy {
    #[doc(hidden)]
    fn method_thunk() -> M::Thunk;
}

macro_rules! target {
    ($n:expr; $($arg:ident $val:ident),*) => {
        impl<F, R, $($arg),*> Functor<fn($($arg),*) -> R> for F
        where
            F: Fn($($arg),*) -> R,
        {
            #[inline(always)]
            fn borrowed_thunk() -> unsafe fn(Context, $($arg),*) -> R {
                unsafe fn trampoline<F, R, $($arg),*>(cx: Context, $($val: $arg),*) -> R
                where
                    F: Fn($($arg),*) -> R,
                {
                    // SAFETY: built by `Context::borrowed::<F>`; the delegate's
                    // lifetime keeps the borrow live.
                    let target = unsafe { cx.as_borrowed::<F>() };
                    target($($val),*)
                }
                trampoline::<F, R, $($arg),*>
            }

            #[inline(always)]
            fn inline_thunk() -> unsafe fn(Context, $($arg),*) -> R {
                unsafe fn trampoline<F, R, $($arg),*>(cx: Context, $($val: $arg),*) -> R
                where
                    F: Fn($($arg),*) -> R,
                {
                    // SAFETY: built by `Context::inline::<F>`.
                    let target = unsafe { cx.inline_ref::<F>() };
                    target($($val),*)
                }
                trampoline::<F, R, $($arg),*>
            }
        }

        impl<M, C, R, $($arg),*> Method<C, fn($($arg),*) -> R> for M
        where
            M: Fn(&C, $($arg),*) -> R + Copy,
        {
            #[inline(always)]
            fn method_thunk() -> unsafe fn(Context, $($arg),*) -> R {
                unsafe fn trampoline<M, C, R, $($arg),*>(cx: Context, $($val: $arg),*) -> R
                where
                    M: Fn(&C, $($arg),*) -> R + Copy,
                {
                    // SAFETY: the receiver was borrowed for the delegate's lifetime,
                    // and the factory checked that `M` is zero-sized.
                    let receiver = unsafe { cx.as_borrowed::<C>() };
                    let method = unsafe { conjure::<M>() };
                    method(receiver, $($val),*)
                }
                trampoline::<M, C, R, $($arg),*>
            }
        }
    };
}

for_each_arity!(target);

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;
    use core::cell::Cell;

    struct Meter {
        reading: Cell<u32>,
    }

    impl Meter {
        fn add(&self, amount: u32) -> u32 {
            self.reading.set(self.reading.get() + amount);
            self.reading.get()
        }
    }

    fn borrowed_thunk_of<M: Signature, F: Functor<M>>(_: &F) -> M::Thunk {
        F::borrowed_thunk()
    }

    fn inline_thunk_of<M: Signature, F: Functor<M>>(_: &F) -> M::Thunk {
        F::inline_thunk()
    }

    fn method_thunk_of<C, M: Signature, S: Method<C, M>>(_: S) -> M::Thunk {
        S::method_thunk()
    }

    fn own_signature<M, F>(_: &F) -> TypeId
    where
        M: Signature + 'static,
        F: Functor<M>,
    {
        TypeId::of::<M>()
    }

    fn compatible<M: Compatible<S>, S: Signature>() -> bool {
        true
    }

    #[test]
    fn test_functor_infers_own_signature() {
        let scale = |x: u16, y: u16| u32::from(x) * u32::from(y);
        assert_eq!(own_signature(&scale), TypeId::of::<fn(u16, u16) -> u32>());

        fn clamp(x: i8) -> i8 {
            x.max(0)
        }
        assert_eq!(own_signature(&clamp), TypeId::of::<fn(i8) -> i8>());
        assert_eq!(own_signature(&|| ()), TypeId::of::<fn()>());
    }

    #[test]
    fn test_compatible_is_exact() {
        assert!(compatible::<fn(u32) -> u64, fn(u32) -> u64>());
        assert!(compatible::<fn(&'static str), fn(&'static str)>());
    }

    #[test]
    fn test_borrowed_thunk_calls_closure() {
        let offset = 10;
        let add = |x: i32| x + offset;
        let thunk = borrowed_thunk_of::<fn(i32) -> i32, _>(&add);
        let cx = Context::borrowed(&add);
        assert_eq!(unsafe { thunk(cx, 5) }, 15);
    }

    #[test]
    fn test_inline_thunk_calls_copy() {
        let bias = 3u16;
        let scale = move |x: u8, y: u8| u16::from(x) * u16::from(y) + bias;
        let thunk = inline_thunk_of::<fn(u8, u8) -> u16, _>(&scale);
        let cx = Context::inline(scale);
        assert_eq!(unsafe { thunk(cx, 16, 16) }, 259);
    }

    #[test]
    fn test_method_thunk_uses_receiver() {
        let meter = Meter { reading: Cell::new(1) };
        let thunk = method_thunk_of::<Meter, fn(u32) -> u32, _>(Meter::add);
        let cx = Context::borrowed(&meter);
        assert_eq!(unsafe { thunk(cx, 4) }, 5);
        assert_eq!(unsafe { thunk(cx, 5) }, 10);
        assert_eq!(meter.reading.get(), 10);
    }

    #[test]
    fn test_non_capturing_closure_as_method() {
        let meter = Meter { reading: Cell::new(0) };
        let twice = |m: &Meter, by: u32| m.add(by) + m.add(by);
        let thunk = method_thunk_of::<Meter, fn(u32) -> u32, _>(twice);
        let cx = Context::borrowed(&meter);
        assert_eq!(unsafe { thunk(cx, 2) }, 6);
    }
}
