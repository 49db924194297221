use std::marker::PhantomData;

use crate::stream::Stream;

/// A view over a slice of `T` whose operations produce values of type `U`.
///
/// `Transform` only carries the type-changing operations; same-type work
/// stays on [`Stream`]. It borrows its elements and never copies them.
pub struct Transform<'a, T, U> {
    items: &'a [T],
    _target: PhantomData<fn() -> U>,
}

/// Reinterprets `items` as a [`Transform`] targeting `U`.
///
/// This is the one point in a chain where the output type has to be named,
/// since nothing before it constrains `U`.
pub fn as_transform<T, U>(items: &[T]) -> Transform<'_, T, U> {
    log::trace!(
        "as_transform: {} items, {} -> {}",
        items.len(),
        std::any::type_name::<T>(),
        std::any::type_name::<U>()
    );
    Transform::new(items)
}

impl<'a, T, U> Transform<'a, T, U> {
    pub fn new(items: &'a [T]) -> Self {
        Transform {
            items,
            _target: PhantomData,
        }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<F>(&self, mut mapper: F) -> Stream<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| mapper(item, index))
            .collect()
    }

    /// Maps every element to a sequence of `U` and concatenates the results.
    pub fn flat_map<I, F>(&self, mut mapper: F) -> Stream<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T, usize) -> I,
    {
        self.items
            .iter()
            .enumerate()
            .flat_map(|(index, item)| mapper(item, index))
            .collect()
    }

    /// Left-folds every element into `initial_value`.
    ///
    /// Returns `initial_value` unchanged when the view is empty.
    pub fn reduce<F>(&self, mut reducer: F, initial_value: U) -> U
    where
        F: FnMut(U, &T, usize) -> U,
    {
        self.items
            .iter()
            .enumerate()
            .fold(initial_value, |acc, (index, item)| {
                reducer(acc, item, index)
            })
    }

    pub fn foreach<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.items.iter().enumerate() {
            callback(item, index);
        }
    }

    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .any(|(index, item)| predicate(item, index))
    }

    pub fn none<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        !self.some(predicate)
    }

    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .all(|(index, item)| predicate(item, index))
    }
}

impl<T, U> Clone for Transform<'_, T, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, U> Copy for Transform<'_, T, U> {}

impl<T, U> std::fmt::Debug for Transform<'_, T, U>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("items", &self.items)
            .field("target", &std::any::type_name::<U>())
            .finish()
    }
}

impl<'a, T, U> From<&'a [T]> for Transform<'a, T, U> {
    fn from(items: &'a [T]) -> Self {
        Transform::new(items)
    }
}

impl<'a, T, U> From<&'a Stream<T>> for Transform<'a, T, U> {
    fn from(stream: &'a Stream<T>) -> Self {
        Transform::new(stream.as_slice())
    }
}
