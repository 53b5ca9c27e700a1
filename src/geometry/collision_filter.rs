bitflags::bitflags! {
    /// A bit mask identifying collision categories.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    pub struct CollisionMask: u32 {
        /// The 1st category.
        const CATEGORY_1 = 1 << 0;
        /// The 2nd category.
        const CATEGORY_2 = 1 << 1;
        /// The 3rd category.
        const CATEGORY_3 = 1 << 2;
        /// The 4th category.
        const CATEGORY_4 = 1 << 3;
        /// The 5th category.
        const CATEGORY_5 = 1 << 4;
        /// The 6th category.
        const CATEGORY_6 = 1 << 5;
        /// The 7th category.
        const CATEGORY_7 = 1 << 6;
        /// The 8th category.
        const CATEGORY_8 = 1 << 7;
        /// All the categories.
        const ALL = u32::MAX;
        /// None of the categories.
        const NONE = 0;
    }
}

impl Default for CollisionMask {
    fn default() -> Self {
        CollisionMask::ALL
    }
}

/// The rules deciding which colliders may collide with each other.
///
/// Two colliders may collide if both belong to the [`CollisionFilter::COLLIDE_ALL`] group,
/// or if they belong to different groups and the categories of one of them intersect the
/// mask of the other. Colliders sharing a group other than `COLLIDE_ALL` never collide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionFilter {
    /// The group of the collider.
    pub group: u32,
    /// The categories the collider belongs to.
    pub categories: CollisionMask,
    /// The categories the collider can collide with.
    pub mask: CollisionMask,
}

impl CollisionFilter {
    /// The group of colliders that collide with each other unconditionally.
    pub const COLLIDE_ALL: u32 = 0;

    /// A filter in group `group`, with all the categories and mask bits set.
    pub fn new(group: u32) -> Self {
        Self {
            group,
            categories: CollisionMask::ALL,
            mask: CollisionMask::ALL,
        }
    }

    /// Sets the categories of this filter.
    #[must_use]
    pub fn with_categories(mut self, categories: CollisionMask) -> Self {
        self.categories = categories;
        self
    }

    /// Sets the mask of this filter.
    #[must_use]
    pub fn with_mask(mut self, mask: CollisionMask) -> Self {
        self.mask = mask;
        self
    }

    /// Can colliders with the filters `self` and `other` collide?
    #[inline]
    pub fn test(&self, other: &Self) -> bool {
        (self.group == Self::COLLIDE_ALL && other.group == Self::COLLIDE_ALL)
            || (self.group != other.group
                && (self.categories.intersects(other.mask)
                    || other.categories.intersects(self.mask)))
    }
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self::new(Self::COLLIDE_ALL)
    }
}
