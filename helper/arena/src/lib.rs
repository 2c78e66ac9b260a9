//! Region allocation for one compilation unit.
//!
//! Everything placed in a [`Bump`] shares its lifetime and is reclaimed in one
//! go when the bump is dropped. Destructors of allocated values never run, so
//! only types without drop glue may live here.

pub use bumpalo;
pub use bumpalo::Bump;

/// Allocates `value` in `bump`, rejecting (at compile time of the caller's
/// monomorphization) any type that would need its destructor to run.
#[inline(always)]
pub fn alloc_no_drop<T>(bump: &Bump, value: T) -> &T {
    const { assert!(!std::mem::needs_drop::<T>()) };
    bump.alloc(value)
}

#[inline(always)]
pub fn alloc_slice_copy<'b, T: Copy>(bump: &'b Bump, slice: &[T]) -> &'b [T] {
    bump.alloc_slice_copy(slice)
}
