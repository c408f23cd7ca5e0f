//! A [`BitSet`] for values reported by `evdev`.
//!
//! `evdev` reports the supported event types and codes of a device as bit arrays made of
//! `unsigned long` words. [`BitSet`] stores them in exactly that layout, so an ioctl can fill it
//! directly.

use std::{ffi::c_ulong, fmt, marker::PhantomData};

/// The underlying word type used by [`BitSet`]s.
///
/// This is an `unsigned long` in C, which may vary between platforms.
pub type Word = c_ulong;

/// Types that can be stored in a [`BitSet`].
pub trait BitValue: Copy {
    /// The largest value that can be stored in a [`BitSet`].
    const MAX: Self;

    // `index` must fit in the native integer type
    #[doc(hidden)]
    fn from_index(index: usize) -> Self;
    #[doc(hidden)]
    fn into_index(self) -> usize;
}

fn word_count<V: BitValue>() -> usize {
    (V::MAX.into_index() + 1).div_ceil(Word::BITS as usize)
}

/// A set of `V`, stored as a bit set.
pub struct BitSet<V: BitValue> {
    words: Box<[Word]>,
    _p: PhantomData<V>,
}

impl<V: BitValue> Clone for BitSet<V> {
    fn clone(&self) -> Self {
        Self {
            words: self.words.clone(),
            _p: PhantomData,
        }
    }
}

impl<V: BitValue> Default for BitSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: BitValue> BitSet<V> {
    /// Creates an empty bit set large enough to hold every value up to
    /// [`<V as BitValue>::MAX`][BitValue::MAX].
    pub fn new() -> Self {
        Self {
            words: vec![0; word_count::<V>()].into_boxed_slice(),
            _p: PhantomData,
        }
    }

    /// Returns the underlying [`Word`]s making up this [`BitSet`].
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns a mutable reference to the underlying [`Word`]s, for the kernel to fill in.
    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    /// Returns the number of values in this [`BitSet`].
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns whether this [`BitSet`] is empty.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns whether `self` contains `value`.
    pub fn contains(&self, value: V) -> bool {
        let index = value.into_index();
        if index > V::MAX.into_index() {
            return false;
        }
        let word = self.words[index / Word::BITS as usize];
        word & (1 << (index % Word::BITS as usize)) != 0
    }

    /// Inserts `value` into `self`.
    ///
    /// Returns `true` if `value` was newly inserted.
    ///
    /// # Panics
    ///
    /// Panics if `value` is larger than [`<V as BitValue>::MAX`][BitValue::MAX].
    pub fn insert(&mut self, value: V) -> bool {
        let index = value.into_index();
        assert!(
            index <= V::MAX.into_index(),
            "value out of range for `BitSet` storage (value's index is {index}, max is {})",
            V::MAX.into_index(),
        );

        let present = self.contains(value);
        self.words[index / Word::BITS as usize] |= 1 << (index % Word::BITS as usize);
        !present
    }

    /// Returns an iterator over all values in `self`, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = V> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            (0..Word::BITS as usize)
                .filter(move |&bit| word & (1 << bit) != 0)
                .map(move |bit| V::from_index(i * Word::BITS as usize + bit))
        })
    }
}

impl<V: BitValue + fmt::Debug> fmt::Debug for BitSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<V: BitValue> PartialEq for BitSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}
impl<V: BitValue> Eq for BitSet<V> {}

impl<V: BitValue> FromIterator<V> for BitSet<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<V: BitValue> Extend<V> for BitSet<V> {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for item in iter {
            self.insert(item);
        }
    }
}
