//! A generational arena of slots addressed by stable handles.

use core::cmp;
use core::iter;
use core::mem;
use core::slice;

/// An index into an [`Arena`].
///
/// An index is only valid for the arena that created it: the generation stored
/// alongside the slot index ensures that an index pointing to a removed element
/// never aliases an element inserted later in the same slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Index {
    index: u32,
    generation: u32,
}

impl Index {
    /// Creates an index from its raw parts.
    pub fn from_raw_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The raw parts `(slot index, generation)` of this index.
    pub fn into_raw_parts(self) -> (u32, u32) {
        (self.index, self.generation)
    }

    /// An index that is never returned by any arena.
    pub fn invalid() -> Self {
        Self {
            index: u32::MAX,
            generation: u32::MAX,
        }
    }
}

#[derive(Clone, Debug)]
enum Entry<T> {
    Free {
        next_free: Option<u32>,
        generation: u32,
    },
    Occupied {
        generation: u32,
        value: T,
    },
}

/// A container of values addressed by generation-checked [`Index`]es.
///
/// Insertion and removal are O(1). Removed slots are recycled through a free list,
/// and their generation is bumped so that indices to the removed value become stale.
/// Iteration follows the slot order, which only depends on the sequence of insertions
/// and removals.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    items: Vec<Entry<T>>,
    free_list_head: Option<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            free_list_head: None,
            len: 0,
        }
    }

    /// Creates an empty arena able to store `n` values before reallocating.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            items: Vec::with_capacity(n),
            free_list_head: None,
            len: 0,
        }
    }

    /// The number of values stored in this arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is this arena empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from this arena.
    ///
    /// All indices previously returned by this arena become stale.
    pub fn clear(&mut self) {
        let mut next_free = None;

        for (i, entry) in self.items.iter_mut().enumerate().rev() {
            let generation = match entry {
                Entry::Free { generation, .. } => *generation,
                Entry::Occupied { generation, .. } => generation.wrapping_add(1),
            };
            *entry = Entry::Free {
                next_free,
                generation,
            };
            next_free = Some(i as u32);
        }

        self.free_list_head = next_free;
        self.len = 0;
    }

    /// Inserts a value and returns the index addressing it.
    pub fn insert(&mut self, value: T) -> Index {
        self.len += 1;

        if let Some(i) = self.free_list_head {
            let entry = &mut self.items[i as usize];
            let (next_free, generation) = match entry {
                Entry::Free {
                    next_free,
                    generation,
                } => (*next_free, *generation),
                Entry::Occupied { .. } => unreachable!("corrupt arena free list"),
            };

            self.free_list_head = next_free;
            *entry = Entry::Occupied { generation, value };
            Index::from_raw_parts(i, generation)
        } else {
            let i = self.items.len() as u32;
            self.items.push(Entry::Occupied {
                generation: 0,
                value,
            });
            Index::from_raw_parts(i, 0)
        }
    }

    /// Removes the value at index `i`, if it exists.
    pub fn remove(&mut self, i: Index) -> Option<T> {
        let entry = self.items.get_mut(i.index as usize)?;

        match entry {
            Entry::Occupied { generation, .. } if *generation == i.generation => {
                let freed = Entry::Free {
                    next_free: self.free_list_head,
                    generation: generation.wrapping_add(1),
                };
                self.free_list_head = Some(i.index);
                self.len -= 1;

                match mem::replace(entry, freed) {
                    Entry::Occupied { value, .. } => Some(value),
                    Entry::Free { .. } => None,
                }
            }
            _ => None,
        }
    }

    /// Does this arena contain a value at index `i`?
    pub fn contains(&self, i: Index) -> bool {
        self.get(i).is_some()
    }

    /// A reference to the value at index `i`.
    pub fn get(&self, i: Index) -> Option<&T> {
        match self.items.get(i.index as usize) {
            Some(Entry::Occupied { generation, value }) if *generation == i.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// A mutable reference to the value at index `i`.
    pub fn get_mut(&mut self, i: Index) -> Option<&mut T> {
        match self.items.get_mut(i.index as usize) {
            Some(Entry::Occupied { generation, value }) if *generation == i.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Mutable references to the values at two distinct indices.
    ///
    /// If `i1 == i2`, the second element of the returned pair is `None`.
    pub fn get2_mut(&mut self, i1: Index, i2: Index) -> (Option<&mut T>, Option<&mut T>) {
        if i1 == i2 {
            return (self.get_mut(i1), None);
        }

        let (lo, hi, swapped) = if i1.index < i2.index {
            (i1, i2, false)
        } else {
            (i2, i1, true)
        };

        if lo.index == hi.index {
            // Same slot but different generations: at most one of them is valid.
            let a = self.get_mut(i1);
            return (a, None);
        }

        let split = cmp::min(hi.index as usize, self.items.len());
        let (head, tail) = self.items.split_at_mut(split);
        let lo_ref = match head.get_mut(lo.index as usize) {
            Some(Entry::Occupied { generation, value }) if *generation == lo.generation => {
                Some(value)
            }
            _ => None,
        };
        let hi_ref = match tail.first_mut() {
            Some(Entry::Occupied { generation, value }) if *generation == hi.generation => {
                Some(value)
            }
            _ => None,
        };

        if swapped {
            (hi_ref, lo_ref)
        } else {
            (lo_ref, hi_ref)
        }
    }

    /// Iterates through all the `(index, value)` pairs of this arena, in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter().enumerate(),
        }
    }

    /// Iterates mutably through all the `(index, value)` pairs of this arena, in slot order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.items.iter_mut().enumerate(),
        }
    }

    /// Retains only the values for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(Index, &mut T) -> bool) {
        for i in 0..self.items.len() {
            let index = match &mut self.items[i] {
                Entry::Occupied { generation, value } => {
                    let index = Index::from_raw_parts(i as u32, *generation);
                    if f(index, value) {
                        continue;
                    }
                    index
                }
                Entry::Free { .. } => continue,
            };

            let _ = self.remove(index);
        }
    }
}

impl<T> core::ops::Index<Index> for Arena<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, i: Index) -> &T {
        self.get(i).expect("no element at this arena index")
    }
}

impl<T> core::ops::IndexMut<Index> for Arena<T> {
    #[track_caller]
    fn index_mut(&mut self, i: Index) -> &mut T {
        self.get_mut(i).expect("no element at this arena index")
    }
}

/// Iterator through the elements of an [`Arena`].
pub struct Iter<'a, T> {
    inner: iter::Enumerate<slice::Iter<'a, Entry<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Index, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        for (i, entry) in self.inner.by_ref() {
            if let Entry::Occupied { generation, value } = entry {
                return Some((Index::from_raw_parts(i as u32, *generation), value));
            }
        }

        None
    }
}

/// Mutable iterator through the elements of an [`Arena`].
pub struct IterMut<'a, T> {
    inner: iter::Enumerate<slice::IterMut<'a, Entry<T>>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (Index, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        for (i, entry) in self.inner.by_ref() {
            if let Entry::Occupied { generation, value } = entry {
                return Some((Index::from_raw_parts(i as u32, *generation), value));
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::Arena;

    #[test]
    fn removed_index_is_stale_after_slot_reuse() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        assert_eq!(arena.remove(a), Some(1));
        let c = arena.insert(3);

        // The slot of `a` is recycled for `c` with a new generation.
        assert_eq!(a.into_raw_parts().0, c.into_raw_parts().0);
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(c), Some(&3));
        assert_eq!(arena.get(b), Some(&2));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn get2_mut_returns_both_values_in_argument_order() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);

        let (vb, va) = arena.get2_mut(b, a);
        *vb.unwrap() += 10;
        *va.unwrap() += 20;
        assert_eq!(arena[a], 21);
        assert_eq!(arena[b], 12);

        let (va, none) = arena.get2_mut(a, a);
        assert!(va.is_some());
        assert!(none.is_none());
    }

    #[test]
    fn retain_and_clear() {
        let mut arena = Arena::new();
        let handles: Vec<_> = (0..10).map(|i| arena.insert(i)).collect();
        arena.retain(|_, v| *v % 2 == 0);
        assert_eq!(arena.len(), 5);
        assert!(arena.contains(handles[4]));
        assert!(!arena.contains(handles[5]));

        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(handles[4]));
        let h = arena.insert(42);
        assert_eq!(arena[h], 42);
    }
}
