/// A pair of elements sorted in increasing order.
///
/// `SortedPair::new(a, b) == SortedPair::new(b, a)`, which makes it suitable as the key
/// of an unordered pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SortedPair<T: PartialOrd>([T; 2]);

impl<T: PartialOrd> SortedPair<T> {
    /// Sorts two elements in increasing order into a new pair.
    pub fn new(element1: T, element2: T) -> Self {
        if element1 > element2 {
            SortedPair([element2, element1])
        } else {
            SortedPair([element1, element2])
        }
    }

    /// The smallest element of this pair.
    #[inline]
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// The largest element of this pair.
    #[inline]
    pub fn second(&self) -> &T {
        &self.0[1]
    }

    /// Does this pair contain `elt`?
    #[inline]
    pub fn contains(&self, elt: &T) -> bool {
        self.0[0] == *elt || self.0[1] == *elt
    }
}

impl<T: PartialOrd + Copy> SortedPair<T> {
    /// The two elements of this pair, smallest first.
    #[inline]
    pub fn pair(&self) -> (T, T) {
        (self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod test {
    use super::SortedPair;

    #[test]
    fn sorted_pair_is_order_independent() {
        assert_eq!(SortedPair::new(3, 1), SortedPair::new(1, 3));
        assert_eq!(SortedPair::new(3, 1).pair(), (1, 3));
        assert!(SortedPair::new(3, 1).contains(&3));
    }
}
