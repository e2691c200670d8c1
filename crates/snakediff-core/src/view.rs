//! Read-only view over the two sequences being compared

/// Pairs the old and new sequences with the equality test used to compare
/// their elements. Indices passed in must be in bounds.
pub struct SequenceView<'a, T, U, F> {
    old: &'a [T],
    new: &'a [U],
    eq: F,
}

impl<'a, T: PartialEq> SequenceView<'a, T, T, fn(&T, &T) -> bool> {
    /// View that compares elements with `==`
    pub fn new(old: &'a [T], new: &'a [T]) -> Self {
        Self {
            old,
            new,
            eq: <T as PartialEq>::eq,
        }
    }
}

impl<'a, T, U, F> SequenceView<'a, T, U, F>
where
    F: Fn(&T, &U) -> bool,
{
    pub fn with_eq(old: &'a [T], new: &'a [U], eq: F) -> Self {
        Self { old, new, eq }
    }

    pub fn old_len(&self) -> usize {
        self.old.len()
    }

    pub fn new_len(&self) -> usize {
        self.new.len()
    }

    pub fn old(&self, index: usize) -> &'a T {
        &self.old[index]
    }

    pub fn new_at(&self, index: usize) -> &'a U {
        &self.new[index]
    }

    /// Whether `old[i]` and `new[j]` compare equal
    #[inline]
    pub fn equal(&self, i: usize, j: usize) -> bool {
        (self.eq)(&self.old[i], &self.new[j])
    }
}
