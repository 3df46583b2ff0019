use std::alloc::{self, Layout, alloc, dealloc, realloc};
use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};
use std::{mem, slice};

use crate::error::{Error, Result};

/// A growable array backed by a single contiguous allocation.
///
/// Capacity doubles when an element is added to a full array. After a removal
/// the array shrinks to half its capacity (never below [`MIN_CAPACITY`]) once
/// the length falls to a third of the capacity or less. The one-third
/// threshold keeps alternating add/remove at the boundary from reallocating
/// on every call.
///
/// [`MIN_CAPACITY`]: DynamicArray::MIN_CAPACITY
pub struct DynamicArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    marker: PhantomData<T>,
}

#[macro_export]
macro_rules! dynamic_array {
    ( $( $x:expr ),* $(,)? ) => {
        {
            let mut temp_array = $crate::DynamicArray::new();
            $(
                temp_array.add($x);
            )*
            temp_array
        }
    };
}

impl<T> DynamicArray<T> {
    /// Smallest capacity a shrink will ever produce.
    pub const MIN_CAPACITY: usize = 10;

    /// Capacity used by [`DynamicArray::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Constructs a new, empty `DynamicArray<T>` with room for
    /// [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) elements.
    pub fn new() -> Self {
        Self::allocate(Self::DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty `DynamicArray<T>` with room for `capacity`
    /// elements.
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero or too large
    /// to allocate.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 || Layout::array::<T>(capacity).is_err() {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(cap: usize) -> Self {
        assert!(
            mem::size_of::<T>() != 0,
            "This data structure does not support ZST's"
        );
        let layout = Layout::array::<T>(cap).expect("Allocation too large");
        let handle = unsafe { alloc(layout) };
        let ptr =
            NonNull::new(handle as *mut T).unwrap_or_else(|| alloc::handle_alloc_error(layout));
        Self {
            ptr,
            cap,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Adds `val` to the end of the array, doubling the capacity first if the
    /// array is full.
    pub fn add(&mut self, val: T) {
        if self.len == self.cap {
            self.grow();
        }
        unsafe { self.ptr.add(self.len).write(val) };
        self.len += 1;
    }

    /// Inserts `val` at `index`, shifting every element after it one slot to
    /// the right. `index == len` appends.
    pub fn insert(&mut self, index: usize, val: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.cap {
            self.grow();
        }
        unsafe {
            let p = self.ptr.as_ptr().add(index);
            ptr::copy(p, p.add(1), self.len - index);
            ptr::write(p, val);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the last value and returns it, or `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let val = unsafe { self.ptr.add(self.len).read() };
        self.shrink_if_sparse();
        Some(val)
    }

    /// Removes and returns the value at `index`, shifting every element after
    /// it one slot to the left.
    pub fn delete_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let val = unsafe {
            let p = self.ptr.as_ptr().add(index);
            let val = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - index - 1);
            val
        };
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(val)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns the number of elements in the array
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots in the backing allocation
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn shrink_if_sparse(&mut self) {
        if self.len <= self.cap / 3 {
            self.shrink();
        }
    }

    /// Doubles the capacity.
    fn grow(&mut self) {
        let new_cap = self.cap.checked_mul(2).expect("Capacity overflow");
        self.reallocate(new_cap);
    }

    /// Halves the capacity, floored at `MIN_CAPACITY`. The floor can leave the
    /// capacity unchanged, or raise it when the array started out smaller.
    fn shrink(&mut self) {
        let new_cap = Self::MIN_CAPACITY.max(self.cap / 2);
        if new_cap != self.cap {
            self.reallocate(new_cap);
        }
    }

    /// Moves the live elements into an allocation of `new_cap` slots.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        log::debug!(
            "reallocating dynamic array: capacity {} -> {} (len {})",
            self.cap,
            new_cap,
            self.len
        );
        let new_layout = Layout::array::<T>(new_cap).expect("Allocation too large");
        // this layout cannot error because its size is based on an allocation that already exists
        let old_layout = unsafe { Layout::array::<T>(self.cap).unwrap_unchecked() };
        let handle =
            unsafe { realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) };
        self.ptr = NonNull::new(handle as *mut T)
            .unwrap_or_else(|| alloc::handle_alloc_error(new_layout));
        self.cap = new_cap;
    }

    fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            dealloc(
                self.ptr.as_ptr() as *mut u8,
                Layout::array::<T>(self.cap).unwrap_unchecked(),
            );
        }
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, ix: usize) -> &Self::Output {
        assert!(ix < self.len, "Index out of bounds.");
        &self.as_slice()[ix]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, ix: usize) -> &mut Self::Output {
        assert!(ix < self.len, "Index out of bounds.");
        &mut self.as_mut_slice()[ix]
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[ ]");
        }
        f.write_str("[ ")?;
        for (i, val) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{val}")?;
        }
        f.write_str(" ]")
    }
}

unsafe impl<T: Send> Send for DynamicArray<T> {}
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<DynamicArray<T>> for Vec<T> {
    fn eq(&self, other: &DynamicArray<T>) -> bool {
        other == self
    }
}
