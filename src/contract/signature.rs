//! Call signatures. `fn(A1..An) -> R` is the only shape a delegate accepts.

use core::mem;

use crate::dispatch::context::Context;

/// A thunk with its parameter list forgotten, as a delegate stores it.
///
/// Only [`Signature::restore`] for the signature that produced it may turn it
/// back into something callable.
#[doc(hidden)]
pub type ErasedThunk = unsafe fn();

mod sealed {
    pub trait Sealed {}
}

/// A declared call signature, decomposed into its return type and parameters.
///
/// Implemented for plain fn pointer types with up to [`MAX_ARITY`](crate::MAX_ARITY)
/// parameters. Reference parameters name their lifetime, e.g.
/// `fn(&'a Frame) -> bool`; higher-ranked pointer types (`fn(&Frame)`) are a
/// different type and are not signatures.
#[diagnostic::on_unimplemented(
    message = "Invalid parameter 'Signature'. The template parameter 'Signature' must be a valid function signature.",
    label = "`{Self}` is not a function signature",
    note = "declare the signature as a fn pointer type, e.g. `Delegate<fn(u32) -> bool>`; reference parameters need a named lifetime, e.g. `Delegate<'a, fn(&'a Frame)>`, because `fn(&Frame)` is higher-ranked"
)]
pub trait Signature: Copy + sealed::Sealed {
    /// Declared return type.
    type Output;
    /// Declared parameters as a tuple.
    type Args;
    /// Trampoline shape: the context word followed by the declared parameters.
    type Thunk: Copy;

    const ARITY: usize;

    /// Thunk for a free function stored inline as `Self`.
    #[doc(hidden)]
    fn function_thunk() -> Self::Thunk;

    #[doc(hidden)]
    fn erase(thunk: Self::Thunk) -> ErasedThunk;

    /// # Safety
    ///
    /// `thunk` came from [`Signature::erase`] on this same signature.
    #[doc(hidden)]
    unsafe fn restore(thunk: ErasedThunk) -> Self::Thunk;
}

macro_rules! signature {
    ($n:expr; $($arg:ident $val:ident),*) => {
        impl<R, $($arg),*> sealed::Sealed for fn($($arg),*) -> R {}

        impl<R, $($arg),*> Signature for fn($($arg),*) -> R {
            type Output = R;
            type Args = ($($arg,)*);
            type Thunk = unsafe fn(Context, $($arg),*) -> R;

            const ARITY: usize = $n;

            #[inline(always)]
            fn function_thunk() -> unsafe fn(Context, $($arg),*) -> R {
                unsafe fn trampoline<R, $($arg),*>(cx: Context, $($val: $arg),*) -> R {
                    // SAFETY: paired with `Context::inline::<fn(..) -> R>` by the factory.
                    let function = unsafe { cx.read_inline::<fn($($arg),*) -> R>() };
                    function($($val),*)
                }
                trampoline::<R, $($arg),*>
            }

            #[inline(always)]
            fn erase(thunk: unsafe fn(Context, $($arg),*) -> R) -> ErasedThunk {
                // SAFETY: all fn pointers share one representation, and the result
                // is only called after `restore` gives back the original type.
                unsafe { mem::transmute::<unsafe fn(Context, $($arg),*) -> R, ErasedThunk>(thunk) }
            }

            #[inline(always)]
            unsafe fn restore(thunk: ErasedThunk) -> unsafe fn(Context, $($arg),*) -> R {
                // SAFETY: upheld by the caller.
                unsafe { mem::transmute::<ErasedThunk, unsafe fn(Context, $($arg),*) -> R>(thunk) }
            }
        }
    };
}

for_each_arity!(signature);
