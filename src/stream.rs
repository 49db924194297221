use std::cmp::Ordering;

use crate::{
    error::{RangeBound, Result, StreamError},
    transform::{self, Transform},
};

/// An immutable, ordered collection with chainable same-type operations.
///
/// No method modifies the receiver. Every operation that produces a stream
/// builds a new backing store, so the original stays usable afterwards.
/// Callbacks receive each element by reference together with its index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stream<T> {
    items: Vec<T>,
}

impl<T> Stream<T> {
    pub fn new() -> Self {
        Stream { items: Vec::new() }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Calls `callback` with every element and its index, in order.
    pub fn foreach<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.items.iter().enumerate() {
            callback(item, index);
        }
    }

    /// Returns true if `predicate` accepts at least one element.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .any(|(index, item)| predicate(item, index))
    }

    /// Returns true if `predicate` accepts no element.
    pub fn none<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        !self.some(predicate)
    }

    /// Returns true if `predicate` accepts every element. Vacuously true when
    /// empty.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .all(|(index, item)| predicate(item, index))
    }

    /// Builds a stream of the same length from `mapper(element, index)`.
    ///
    /// To produce a different element type, go through
    /// [`Stream::as_transform`] and [`Transform::map`].
    pub fn map<F>(&self, mut mapper: F) -> Stream<T>
    where
        F: FnMut(&T, usize) -> T,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| mapper(item, index))
            .collect()
    }

    /// Views the elements as a [`Transform`] targeting `U`.
    pub fn as_transform<U>(&self) -> Transform<'_, T, U> {
        transform::as_transform(&self.items)
    }

    /// Passes the backing slice to `wrapper` without breaking a call chain.
    ///
    /// ```
    /// use streams::{as_transform, stream};
    ///
    /// let lengths = stream!["a", "bb", "ccc"]
    ///     .wrap(as_transform::<&str, usize>)
    ///     .map(|s, _| s.len());
    /// assert_eq!(lengths, stream![1, 2, 3]);
    /// ```
    pub fn wrap<'a, R, F>(&'a self, wrapper: F) -> R
    where
        F: FnOnce(&'a [T]) -> R,
    {
        wrapper(&self.items)
    }
}

impl<T> Stream<T>
where
    T: Clone,
{
    /// Left-folds the stream, seeded with its first element.
    ///
    /// Indices passed to `reducer` are positions in the stream, so the first
    /// call sees index 1. Fails with [`StreamError::EmptyReduce`] when there is
    /// no element to seed with; use [`Transform::reduce`] to supply a seed.
    pub fn reduce<F>(&self, mut reducer: F) -> Result<T>
    where
        F: FnMut(T, &T, usize) -> T,
    {
        let (seed, rest) = self
            .items
            .split_first()
            .ok_or_else(StreamError::empty_reduce)?;
        Ok(rest
            .iter()
            .enumerate()
            .fold(seed.clone(), |acc, (offset, item)| {
                reducer(acc, item, offset + 1)
            }))
    }

    /// Adds `values` to the end of the stream.
    pub fn concat<I>(&self, values: I) -> Stream<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = self.items.clone();
        items.extend(values);
        Stream { items }
    }

    /// Adds `values` to the beginning of the stream, keeping their order.
    pub fn prepend<I>(&self, values: I) -> Stream<T>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .chain(self.items.iter().cloned())
            .collect()
    }

    /// Inserts `values` starting at `index`, shifting later elements right.
    ///
    /// `index` may equal the length, which appends.
    pub fn insert_at<I>(&self, index: usize, values: I) -> Result<Stream<T>>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.items.len() {
            return Err(StreamError::index_out_of_range(
                "insert_at",
                index,
                self.items.len(),
                RangeBound::Inclusive,
            ));
        }
        let (front, back) = self.items.split_at(index);
        let mut items = front.to_vec();
        items.extend(values);
        items.extend_from_slice(back);
        Ok(Stream { items })
    }

    /// Returns a copy with the element at `index` replaced by `value`.
    pub fn replace_at(&self, index: usize, value: T) -> Result<Stream<T>> {
        let len = self.items.len();
        let mut items = self.items.clone();
        let slot = items.get_mut(index).ok_or_else(|| {
            StreamError::index_out_of_range("replace_at", index, len, RangeBound::Exclusive)
        })?;
        *slot = value;
        Ok(Stream { items })
    }

    /// Keeps the elements accepted by `predicate`, in their original order.
    pub fn filter<F>(&self, mut predicate: F) -> Stream<T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(index, item)| predicate(item, *index))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Sorts a copy of the stream. `less_than(a, b)` means `a` goes first.
    ///
    /// The sort is stable.
    pub fn sort_by<F>(&self, mut less_than: F) -> Stream<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut items = self.items.clone();
        items.sort_by(|a, b| ordering_from_less_than(&mut less_than, a, b));
        Stream { items }
    }
}

fn ordering_from_less_than<T, F>(less_than: &mut F, a: &T, b: &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if less_than(a, b) {
        Ordering::Less
    } else if less_than(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Deref for Stream<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for Stream<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(items: Vec<T>) -> Self {
        Stream { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Stream<T> {
    fn from(items: [T; N]) -> Self {
        Stream {
            items: items.into(),
        }
    }
}

impl<T> From<&[T]> for Stream<T>
where
    T: Clone,
{
    fn from(items: &[T]) -> Self {
        Stream {
            items: items.to_vec(),
        }
    }
}

impl<T> From<Stream<T>> for Vec<T> {
    fn from(stream: Stream<T>) -> Self {
        stream.items
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Stream {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Builds a [`Stream`] from a list of elements, like `vec!`.
#[macro_export]
macro_rules! stream {
    () => {
        $crate::Stream::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Stream::from(vec![$($item),+])
    };
}
