//! # DigitVec
//! Growable, exclusively owned storage for the limbs of a magnitude.
//! Growth is geometric (`new capacity >= 2 * (old capacity + 1)`), so a run of
//! `n` appends costs `O(n)` in total. Allocation failure is reported as
//! [`BigIntError::OutOfMemory`] instead of aborting.

use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};
use std::iter::Rev;

use crate::error::{BigIntError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitVec<T> {
    data: Vec<T>,
}

// 构造
impl<T: Copy> DigitVec<T> {
    /// Empty buffer without any allocation.
    pub const fn new() -> Self {
        DigitVec { data: Vec::new() }
    }

    /// Room for `n` elements, length 0.
    pub fn with_capacity(n: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(n)?;
        Ok(DigitVec { data })
    }

    /// `n` copies of `value`.
    pub fn from_elem(n: usize, value: T) -> Result<Self> {
        let mut v = DigitVec::with_capacity(n)?;
        v.data.resize(n, value);
        Ok(v)
    }
}

impl<T> From<Vec<T>> for DigitVec<T> {
    fn from(data: Vec<T>) -> Self {
        DigitVec { data }
    }
}

impl<T> From<DigitVec<T>> for Vec<T> {
    fn from(v: DigitVec<T>) -> Self {
        v.data
    }
}

// 容量管理
impl<T: Copy> DigitVec<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Appends `x`, growing to at least `2 * (capacity + 1)` slots when full.
    pub fn push(&mut self, x: T) -> Result<()> {
        if self.data.len() == self.data.capacity() {
            let new_cap = self
                .data
                .capacity()
                .checked_add(1)
                .and_then(|cap| cap.checked_mul(2))
                .ok_or(BigIntError::OutOfMemory)?;
            self.data.try_reserve_exact(new_cap - self.data.len())?;
        }
        self.data.push(x);
        Ok(())
    }

    /// Removes the last element. The storage is kept.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Grows the capacity to at least `n`; no-op when it is already large enough.
    pub fn reserve(&mut self, n: usize) -> Result<()> {
        if n > self.data.capacity() {
            self.data.try_reserve_exact(n - self.data.len())?;
        }
        Ok(())
    }

    /// Grows (filling with `fill`) or shrinks the length. Shrinking keeps the storage.
    pub fn resize(&mut self, n: usize, fill: T) -> Result<()> {
        if n > self.data.len() {
            self.reserve(n)?;
            self.data.resize(n, fill);
        } else {
            self.data.truncate(n);
        }
        Ok(())
    }

    /// Releases the storage; afterwards `len() == 0` and `capacity() == 0`.
    pub fn clear(&mut self) {
        self.data = Vec::new();
    }
}

// 访问
impl<T: Copy> DigitVec<T> {
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.data.len();
        self.data.get(index).ok_or(BigIntError::IndexError { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(BigIntError::IndexError { index, len })
    }

    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Traverses from the last element to the first.
    pub fn iter_rev(&self) -> Rev<Iter<'_, T>> {
        self.data.iter().rev()
    }
}

impl<T: Copy + PartialEq> DigitVec<T> {
    /// Position of the first element equal to `x`, `None` when there is none.
    pub fn find(&self, x: &T) -> Option<usize> {
        self.data.iter().position(|e| e == x)
    }
}

impl<T: Copy> DigitVec<T> {
    /// Removes the element at `index`, shifting the tail down by one.
    pub fn erase_at(&mut self, index: usize) -> Result<T> {
        let len = self.data.len();
        if index >= len {
            return Err(BigIntError::IndexError { index, len });
        }
        Ok(self.data.remove(index))
    }
}

impl<T: Copy> Index<usize> for DigitVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(x) => x,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Copy> IndexMut<usize> for DigitVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(x) => x,
            None => panic!("{}", BigIntError::IndexError { index, len }),
        }
    }
}

impl<'a, T: Copy> IntoIterator for &'a DigitVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
