use crate::vector::U8Vec;

/// Iterator over the elements of a `U8Vec`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct U8VecIter<'a> {
    data: &'a [u8],
    element_size: usize,
    front: usize,
    back: usize,
}

impl<'a> U8VecIter<'a> {
    fn new(vector: &'a U8Vec) -> Self {
        let element_size = vector.element_size();
        // Zero-width elements have nothing to yield
        let back = if element_size == 0 { 0 } else { vector.len() };
        Self {
            data: vector.as_bytes(),
            element_size,
            front: 0,
            back,
        }
    }

    fn slot(&self, index: usize) -> Option<&'a [u8]> {
        let start = index * self.element_size;
        self.data.get(start..start + self.element_size)
    }
}

impl<'a> Iterator for U8VecIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let result = self.slot(self.front);
        self.front += 1;
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for U8VecIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.slot(self.back)
    }
}

impl ExactSizeIterator for U8VecIter<'_> {}

impl<'a> IntoIterator for &'a U8Vec {
    type Item = &'a [u8];
    type IntoIter = U8VecIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        U8VecIter::new(self)
    }
}

/// Reverse iterator over the elements of a `U8Vec`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct U8VecRevIter<'a> {
    inner: U8VecIter<'a>,
}

impl<'a> U8VecRevIter<'a> {
    pub(crate) fn new(vector: &'a U8Vec) -> Self {
        Self {
            inner: U8VecIter::new(vector),
        }
    }
}

impl<'a> Iterator for U8VecRevIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for U8VecRevIter<'_> {}
