use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::data::Arena;
use crate::dynamics::RigidBody;
use crate::geometry::broad_phase::is_candidate_pair;
use crate::geometry::{BroadPhase, Collider, ColliderHandle};
use crate::math::Real;
use ordered_float::OrderedFloat;

#[derive(Copy, Clone, Debug)]
struct Proxy {
    handle: ColliderHandle,
    aabb: Aabb,
}

/// A sweep-and-prune broad-phase.
///
/// The bounding boxes are sorted along the axis on which their centers are the most spread
/// out. Each box is then only tested against the following boxes until one starts after its
/// end on that axis.
#[derive(Clone, Debug)]
pub struct SweepAndPrune {
    proxies: Vec<Proxy>,
    padding: Real,
}

impl Default for SweepAndPrune {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepAndPrune {
    /// Creates a sweep-and-prune with bounding boxes enlarged three times around their
    /// centers.
    pub fn new() -> Self {
        Self::with_padding(3.0)
    }

    /// Creates a sweep-and-prune with bounding boxes enlarged `padding` times around their
    /// centers.
    pub fn with_padding(padding: Real) -> Self {
        Self {
            proxies: Vec::new(),
            padding: padding.max(1.0),
        }
    }

    fn sort_axis(&self) -> usize {
        let n = self.proxies.len() as Real;
        if n == 0.0 {
            return 0;
        }

        let mut sum = [0.0; 2];
        let mut sum_sq = [0.0; 2];

        for proxy in &self.proxies {
            let center = proxy.aabb.center();
            for k in 0..2 {
                sum[k] += center[k];
                sum_sq[k] += center[k] * center[k];
            }
        }

        let variance = |k: usize| sum_sq[k] / n - (sum[k] / n) * (sum[k] / n);
        if variance(1) > variance(0) {
            1
        } else {
            0
        }
    }
}

impl BroadPhase for SweepAndPrune {
    fn find_pairs(
        &mut self,
        colliders: &Arena<Collider>,
        bodies: &Arena<RigidBody>,
        pairs: &mut Vec<(ColliderHandle, ColliderHandle)>,
    ) {
        self.proxies.clear();
        self.proxies
            .extend(colliders.iter().map(|(i, collider)| Proxy {
                handle: ColliderHandle(i),
                aabb: collider.padded_aabb(self.padding),
            }));

        let axis = self.sort_axis();
        self.proxies
            .sort_by_key(|proxy| OrderedFloat(proxy.aabb.mins[axis]));

        for (i, proxy1) in self.proxies.iter().enumerate() {
            for proxy2 in &self.proxies[i + 1..] {
                if proxy2.aabb.mins[axis] > proxy1.aabb.maxs[axis] {
                    break;
                }

                if !proxy1.aabb.intersects(&proxy2.aabb) {
                    continue;
                }

                let (h1, h2) = (proxy1.handle, proxy2.handle);
                if let (Some(c1), Some(c2)) = (colliders.get(h1.0), colliders.get(h2.0)) {
                    if is_candidate_pair(c1, c2, bodies) {
                        pairs.push((h1, h2));
                    }
                }
            }
        }
    }
}
