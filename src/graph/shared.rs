use std::{iter::FusedIterator, slice};

use indexmap::map::{Iter as IndexMapIter, Keys};

use crate::core::Edge;

#[derive(Debug, Clone)]
pub struct Vertices<'a, V> {
    inner: Keys<'a, V, Vec<V>>,
}

impl<'a, V> Vertices<'a, V> {
    pub(crate) fn new(inner: Keys<'a, V, Vec<V>>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {}
impl<V> FusedIterator for Vertices<'_, V> {}

/// Neighbors of a vertex in the order the edges were added.
#[derive(Debug, Clone)]
pub struct Adjacent<'a, V> {
    inner: slice::Iter<'a, V>,
}

impl<'a, V> Adjacent<'a, V> {
    pub(crate) fn new(neighbors: &'a [V]) -> Self {
        Self {
            inner: neighbors.iter(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(<&[V]>::default())
    }
}

impl<'a, V> Iterator for Adjacent<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Adjacent<'_, V> {}
impl<V> FusedIterator for Adjacent<'_, V> {}

#[derive(Debug, Clone)]
pub struct Edges<'a, V, W> {
    inner: IndexMapIter<'a, (V, V), W>,
}

impl<'a, V, W> Edges<'a, V, W> {
    pub(crate) fn new(inner: IndexMapIter<'a, (V, V), W>) -> Self {
        Self { inner }
    }
}

impl<'a, V, W> Iterator for Edges<'a, V, W> {
    type Item = Edge<&'a V, &'a W>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|((origin, destination), weight)| Edge::new(origin, destination, weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, W> ExactSizeIterator for Edges<'_, V, W> {}
impl<V, W> FusedIterator for Edges<'_, V, W> {}
