use crate::data::Arena;
use crate::dynamics::{RigidBody, SolverConfig};
use crate::geometry::{Collider, ColliderHandle, Contact, ContactHandle};
use crate::math::Real;
use crate::query;
use crate::utils::hashmap::{self, HashMap};
use crate::utils::SortedPair;

/// The set of persistent contacts between pairs of colliders.
///
/// At most one contact exists for a given unordered pair of colliders. A contact is created
/// when the broad-phase first reports its pair, and destroyed at the first step where the
/// narrow-phase finds its colliders separated.
#[derive(Clone, Debug, Default)]
pub struct ContactManager {
    contacts: Arena<Contact>,
    pair_index: HashMap<SortedPair<ColliderHandle>, ContactHandle>,
}

impl ContactManager {
    /// Creates an empty contact manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of live contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Is there no live contact?
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The contact identified by `handle`.
    pub fn get(&self, handle: ContactHandle) -> Option<&Contact> {
        self.contacts.get(handle.0)
    }

    /// The contact between the colliders `c1` and `c2`, in any order.
    pub fn contact_pair(&self, c1: ColliderHandle, c2: ColliderHandle) -> Option<&Contact> {
        let handle = self.pair_index.get(&SortedPair::new(c1, c2))?;
        self.contacts.get(handle.0)
    }

    /// Iterates through all the live contacts.
    pub fn iter(&self) -> impl Iterator<Item = (ContactHandle, &Contact)> {
        self.contacts.iter().map(|(i, c)| (ContactHandle(i), c))
    }

    /// Iterates through the live contacts involving the collider `collider`.
    pub fn contacts_with(&self, collider: ColliderHandle) -> impl Iterator<Item = &Contact> {
        self.contacts
            .iter()
            .map(|(_, c)| c)
            .filter(move |c| c.collider1 == collider || c.collider2 == collider)
    }

    /// Creates a contact for the pair `(c1, c2)` if none exists yet.
    ///
    /// Returns `true` if a contact was created.
    pub(crate) fn add_pair(
        &mut self,
        c1: ColliderHandle,
        c2: ColliderHandle,
        colliders: &Arena<Collider>,
    ) -> bool {
        let key = SortedPair::new(c1, c2);
        if self.pair_index.contains_key(&key) {
            return false;
        }

        let (c1, c2) = key.pair();
        let parents = colliders
            .get(c1.0)
            .and_then(|c| c.parent)
            .zip(colliders.get(c2.0).and_then(|c| c.parent));
        let Some((body1, body2)) = parents else {
            return false;
        };

        let handle = ContactHandle(self.contacts.insert(Contact::new(c1, body1, c2, body2)));
        let _ = self.pair_index.insert(key, handle);
        true
    }

    /// Runs the narrow-phase on every live contact.
    ///
    /// Contacts whose colliders are no longer colliding, no longer pass their collision
    /// filters, or no longer exist are destroyed.
    pub(crate) fn update_contacts(
        &mut self,
        colliders: &Arena<Collider>,
        bodies: &Arena<RigidBody>,
    ) {
        let pair_index = &mut self.pair_index;

        self.contacts.retain(|_, contact| {
            let keep = refresh_contact(contact, colliders, bodies);

            if !keep {
                if contact.colliding {
                    log::debug!(
                        "contact ended between {:?} and {:?}",
                        contact.collider1,
                        contact.collider2
                    );
                }

                let key = SortedPair::new(contact.collider1, contact.collider2);
                let _ = hashmap::remove(pair_index, &key);
            }

            keep
        });
    }

    /// Destroys all the contacts involving `collider`.
    pub(crate) fn remove_collider(&mut self, collider: ColliderHandle) {
        let pair_index = &mut self.pair_index;

        self.contacts.retain(|_, contact| {
            if contact.collider1 == collider || contact.collider2 == collider {
                let key = SortedPair::new(contact.collider1, contact.collider2);
                let _ = hashmap::remove(pair_index, &key);
                false
            } else {
                true
            }
        });
    }

    /// Removes all the contacts.
    pub(crate) fn clear(&mut self) {
        self.contacts.clear();
        self.pair_index.clear();
    }

    pub(crate) fn pre_solve(&mut self, dt: Real, config: &SolverConfig, bodies: &Arena<RigidBody>) {
        for (_, contact) in self.contacts.iter_mut() {
            if let (Some(b1), Some(b2)) = (bodies.get(contact.body1.0), bodies.get(contact.body2.0))
            {
                contact.pre_solve(dt, config, b1, b2);
            }
        }
    }

    pub(crate) fn warm_start(&self, bodies: &mut Arena<RigidBody>) {
        for (_, contact) in self.contacts.iter() {
            if let (Some(b1), Some(b2)) = bodies.get2_mut(contact.body1.0, contact.body2.0) {
                contact.warm_start(b1, b2);
            }
        }
    }

    pub(crate) fn solve(&mut self, bodies: &mut Arena<RigidBody>) {
        for (_, contact) in self.contacts.iter_mut() {
            if let (Some(b1), Some(b2)) = bodies.get2_mut(contact.body1.0, contact.body2.0) {
                contact.solve(b1, b2);
            }
        }
    }
}

/// Re-runs the narrow-phase for `contact`. Returns `false` if it must be destroyed.
fn refresh_contact(
    contact: &mut Contact,
    colliders: &Arena<Collider>,
    bodies: &Arena<RigidBody>,
) -> bool {
    let (Some(c1), Some(c2)) = (
        colliders.get(contact.collider1.0),
        colliders.get(contact.collider2.0),
    ) else {
        return false;
    };
    let (Some(b1), Some(b2)) = (bodies.get(contact.body1.0), bodies.get(contact.body2.0)) else {
        return false;
    };

    if !c1.filter.test(&c2.filter) {
        return false;
    }

    let result = query::collide(&c1.position, &c1.shape, &c2.position, &c2.shape);
    if !result.colliding {
        return false;
    }

    if !contact.colliding {
        log::debug!(
            "contact started between {:?} and {:?}",
            contact.collider1,
            contact.collider2
        );
    }

    let (friction, restitution) = c1.material.combine(&c2.material);
    contact.update(&result, &b1.com, &b2.com, friction, restitution);
    true
}
