//! # Storage
//! Digit storage with a small-buffer optimization.
//!
//! Short magnitudes live in an inline array of [`INLINE_CAPACITY`] words and
//! never touch the allocator. Once a sequence grows past that, its words move
//! into a heap buffer behind an [`Arc`]; cloning such a storage shares the
//! buffer instead of copying it, and the first write through any holder
//! detaches a private copy for that holder.
//!
//! ```
//! use big_integer::Storage;
//!
//! let mut a = Storage::with_len(8, 7);
//! let b = a.clone();
//! assert!(a.shares_buffer_with(&b));
//!
//! a.push(1);
//! assert!(!a.shares_buffer_with(&b));
//! assert_eq!(b.len(), 8);
//! ```

use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::sync::Arc;

use log::trace;

use crate::constants::INLINE_CAPACITY;

#[derive(Debug)]
enum Repr {
    /// Slots at and above `len` are always zero.
    Inline {
        len: usize,
        words: [u32; INLINE_CAPACITY],
    },
    Heap(Arc<Vec<u32>>),
}

/// A growable sequence of `u32` words, stored inline when short and in a
/// shared heap buffer otherwise.
///
/// A storage that has moved to the heap stays there for the rest of its life,
/// even when it shrinks back under the inline capacity. Only a *clone* of such
/// a storage is materialized inline again.
#[derive(Debug)]
pub struct Storage {
    repr: Repr,
}

impl Storage {
    /// Creates an empty inline storage.
    pub const fn new() -> Self {
        Storage {
            repr: Repr::Inline { len: 0, words: [0; INLINE_CAPACITY] },
        }
    }

    pub(crate) const fn single(word: u32) -> Self {
        let mut words = [0; INLINE_CAPACITY];
        words[0] = word;
        Storage {
            repr: Repr::Inline { len: 1, words },
        }
    }

    /// Creates a storage of `len` words, each set to `fill`.
    pub fn with_len(len: usize, fill: u32) -> Self {
        if len > INLINE_CAPACITY {
            return Storage { repr: Repr::Heap(Arc::new(vec![fill; len])) };
        }
        let mut words = [0; INLINE_CAPACITY];
        words[..len].fill(fill);
        Storage { repr: Repr::Inline { len, words } }
    }

    /// Creates a storage holding a copy of `digits`.
    pub fn from_slice(digits: &[u32]) -> Self {
        let len = digits.len();
        if len > INLINE_CAPACITY {
            return Storage { repr: Repr::Heap(Arc::new(digits.to_vec())) };
        }
        let mut words = [0; INLINE_CAPACITY];
        words[..len].copy_from_slice(digits);
        Storage { repr: Repr::Inline { len, words } }
    }

    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } => *len,
            Repr::Heap(buf) => buf.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` while the words are held in the inline array.
    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline { .. })
    }

    /// Returns `true` if both storages point at the same heap buffer.
    pub fn shares_buffer_with(&self, other: &Storage) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Heap(a), Repr::Heap(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        match &self.repr {
            Repr::Inline { len, words } => &words[..*len],
            Repr::Heap(buf) => buf.as_slice(),
        }
    }

    /// Mutable view of the words. A shared heap buffer is detached first, so
    /// writes through the view are never seen by other holders.
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        match &mut self.repr {
            Repr::Inline { len, words } => &mut words[..*len],
            Repr::Heap(buf) => Storage::exclusive(buf).as_mut_slice(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.as_slice().iter()
    }

    pub fn last(&self) -> Option<u32> {
        self.as_slice().last().copied()
    }

    /// Appends a word, moving the inline words to a fresh heap buffer when the
    /// inline array is full.
    pub fn push(&mut self, word: u32) {
        let spilled = match &mut self.repr {
            Repr::Inline { len, words } if *len < INLINE_CAPACITY => {
                words[*len] = word;
                *len += 1;
                return;
            }
            Repr::Inline { len, words } => {
                trace!("spilling {} inline digits to the heap", len);
                let mut buf = Vec::with_capacity(INLINE_CAPACITY * 2);
                buf.extend_from_slice(&words[..*len]);
                buf.push(word);
                buf
            }
            Repr::Heap(buf) => {
                Storage::exclusive(buf).push(word);
                return;
            }
        };
        self.repr = Repr::Heap(Arc::new(spilled));
    }

    /// Removes the most significant word.
    pub fn pop(&mut self) -> Option<u32> {
        match &mut self.repr {
            Repr::Inline { len, words } => {
                if *len == 0 {
                    return None;
                }
                *len -= 1;
                Some(std::mem::replace(&mut words[*len], 0))
            }
            Repr::Heap(buf) => Storage::exclusive(buf).pop(),
        }
    }

    /// Grows or shrinks to `new_len` words, appending `value` when growing.
    pub fn resize(&mut self, new_len: usize, value: u32) {
        let spilled = match &mut self.repr {
            Repr::Inline { len, words } if new_len <= INLINE_CAPACITY => {
                if new_len > *len {
                    words[*len..new_len].fill(value);
                } else {
                    words[new_len..*len].fill(0);
                }
                *len = new_len;
                return;
            }
            Repr::Inline { len, words } => {
                trace!("spilling {} inline digits to the heap", len);
                let mut buf = Vec::with_capacity(new_len);
                buf.extend_from_slice(&words[..*len]);
                buf.resize(new_len, value);
                buf
            }
            Repr::Heap(buf) => {
                Storage::exclusive(buf).resize(new_len, value);
                return;
            }
        };
        self.repr = Repr::Heap(Arc::new(spilled));
    }

    fn exclusive(buf: &mut Arc<Vec<u32>>) -> &mut Vec<u32> {
        if Arc::strong_count(buf) > 1 {
            trace!("detaching shared buffer of {} digits", buf.len());
        }
        Arc::make_mut(buf)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Storage::new()
    }
}

impl Clone for Storage {
    fn clone(&self) -> Self {
        match &self.repr {
            Repr::Inline { len, words } => Storage {
                repr: Repr::Inline { len: *len, words: *words },
            },
            Repr::Heap(buf) if buf.len() <= INLINE_CAPACITY => Storage::from_slice(buf),
            Repr::Heap(buf) => Storage { repr: Repr::Heap(Arc::clone(buf)) },
        }
    }
}

impl Index<usize> for Storage {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for Storage {
    fn index_mut(&mut self, index: usize) -> &mut u32 {
        &mut self.as_mut_slice()[index]
    }
}

impl PartialEq for Storage {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Storage {}

impl Hash for Storage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
