//! Context word. A pointer to a borrowed target, or the bytes of a word-sized one.

use core::mem::{align_of, size_of, MaybeUninit};
use core::ptr::NonNull;

/// Bytes available for a target stored by value.
pub const CONTEXT_SIZE: usize = size_of::<*const ()>();

/// Strictest alignment a target stored by value may ask for.
pub const CONTEXT_ALIGN: usize = align_of::<*const ()>();

/// Opaque, pointer-sized handle passed to every thunk.
///
/// Only the thunk generated alongside a context knows how to read it back.
/// Unbound delegates carry an uninitialized context that is never read.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Context(MaybeUninit<*const ()>);

const _: () = {
    assert!(size_of::<Context>() == CONTEXT_SIZE);
    assert!(align_of::<Context>() == CONTEXT_ALIGN);
};

/// Whether `T` can live inside the context word itself.
#[inline(always)]
pub const fn fits_inline<T>() -> bool {
    size_of::<T>() <= CONTEXT_SIZE && align_of::<T>() <= CONTEXT_ALIGN
}

impl Context {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self(MaybeUninit::uninit())
    }

    #[inline(always)]
    pub(crate) fn borrowed<T>(target: &T) -> Self {
        Self(MaybeUninit::new((target as *const T).cast()))
    }

    /// Stores `value` in the word. `T` must satisfy [`fits_inline`].
    #[inline(always)]
    pub(crate) fn inline<T: Copy>(value: T) -> Self {
        debug_assert!(fits_inline::<T>());
        let mut word = MaybeUninit::<*const ()>::uninit();
        // SAFETY: `T` fits in size and alignment, and `word` is a local slot.
        unsafe { word.as_mut_ptr().cast::<T>().write(value) };
        Self(word)
    }

    /// # Safety
    ///
    /// `self` came from [`Context::borrowed`] with a `&'a T` that is still live.
    #[inline(always)]
    pub(crate) unsafe fn as_borrowed<'a, T>(self) -> &'a T {
        // SAFETY: upheld by the caller.
        unsafe { &*self.0.assume_init().cast::<T>() }
    }

    /// # Safety
    ///
    /// `self` came from [`Context::inline`] with a value of type `T`.
    #[inline(always)]
    pub(crate) unsafe fn inline_ref<T>(&self) -> &T {
        // SAFETY: upheld by the caller; the word is aligned for `T`.
        unsafe { &*self.0.as_ptr().cast::<T>() }
    }

    /// # Safety
    ///
    /// `self` came from [`Context::inline`] with a value of type `T`.
    #[inline(always)]
    pub(crate) unsafe fn read_inline<T: Copy>(self) -> T {
        // SAFETY: upheld by the caller.
        unsafe { self.0.as_ptr().cast::<T>().read() }
    }
}

/// Produces a value of a zero-sized `Copy` type.
///
/// # Safety
///
/// `M` is zero-sized and a value of `M` has existed. The caller only re-creates
/// what a `Copy` would have produced.
#[inline(always)]
pub(crate) unsafe fn conjure<M: Copy>() -> M {
    debug_assert_eq!(size_of::<M>(), 0);
    // SAFETY: reads of zero-sized types through a dangling, aligned pointer are valid.
    unsafe { NonNull::<M>::dangling().as_ptr().read() }
}
