//! Type-safe packed handles
//!
//! Handles are 64-bit identifiers split into two 32-bit halves. Each domain
//! assigns its own meaning to the halves: a path handle stores the user-path
//! slot in the lower half and the component-path slot in the upper half, an
//! action handle stores its owning set in the lower half and its own slot in
//! the upper half. Slots are 1-based so that an all-zero handle is always
//! the null handle.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A type-safe handle packing two 32-bit halves into 64 bits
#[repr(transparent)]
pub struct Handle<T> {
    bits: u64,
    // fn() -> T keeps the tag without inheriting T's auto traits.
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    /// Create a handle from its two halves
    #[inline]
    pub const fn from_halves(lower: u32, upper: u32) -> Self {
        Self {
            bits: (upper as u64) << 32 | lower as u64,
            _marker: PhantomData,
        }
    }

    /// Create the null handle (both halves zero)
    #[inline]
    pub const fn null() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    /// Check if this handle is null
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.bits == 0
    }

    /// Get the lower half
    #[inline]
    pub const fn lower(&self) -> u32 {
        self.bits as u32
    }

    /// Get the upper half
    #[inline]
    pub const fn upper(&self) -> u32 {
        (self.bits >> 32) as u32
    }

    /// Keep only the lower half
    #[inline]
    pub const fn lower_only(&self) -> Self {
        Self::from_halves(self.lower(), 0)
    }

    /// Keep only the upper half
    #[inline]
    pub const fn upper_only(&self) -> Self {
        Self::from_halves(0, self.upper())
    }

    /// Convert to raw bits
    #[inline]
    pub const fn to_bits(&self) -> u64 {
        self.bits
    }

    /// Create from raw bits
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }
}

// Manual trait implementations to avoid T bounds
impl<T> Clone for Handle<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T> Eq for Handle<T> {}

impl<T> PartialOrd for Handle<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Handle<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.bits.cmp(&other.bits)
    }
}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Handle<{}>(null)", core::any::type_name::<T>())
        } else {
            write!(
                f,
                "Handle<{}>({}:{})",
                core::any::type_name::<T>(),
                self.lower(),
                self.upper()
            )
        }
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    #[test]
    fn test_halves_round_trip() {
        let h: Handle<Widget> = Handle::from_halves(3, 7);
        assert_eq!(h.lower(), 3);
        assert_eq!(h.upper(), 7);
        assert_eq!(h.to_bits(), 3 | (7u64 << 32));
        assert_eq!(Handle::<Widget>::from_bits(h.to_bits()), h);
    }

    #[test]
    fn test_null_is_all_zero() {
        let h: Handle<Widget> = Handle::null();
        assert!(h.is_null());
        assert_eq!(h.to_bits(), 0);
        assert!(!Handle::<Widget>::from_halves(1, 0).is_null());
        assert!(!Handle::<Widget>::from_halves(0, 1).is_null());
    }

    #[test]
    fn test_half_masks() {
        let h: Handle<Widget> = Handle::from_halves(5, 9);
        assert_eq!(h.lower_only(), Handle::from_halves(5, 0));
        assert_eq!(h.upper_only(), Handle::from_halves(0, 9));
    }
}
