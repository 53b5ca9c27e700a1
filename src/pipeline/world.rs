use crate::data::Arena;
use crate::dynamics::{
    Joint, JointHandle, JointKind, RigidBody, RigidBodyHandle, SolverConfig,
};
use crate::geometry::{
    BroadPhase, BruteForceBroadPhase, Collider, ColliderHandle, Contact, ContactHandle,
    ContactManager,
};
use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, Vector};
use num::Zero;

/// Errors raised when modifying a world with invalid handles.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// The rigid-body handle does not identify a body of this world.
    #[error("invalid rigid-body handle {0:?}")]
    InvalidBodyHandle(RigidBodyHandle),
    /// The collider handle does not identify a collider of this world.
    #[error("invalid collider handle {0:?}")]
    InvalidColliderHandle(ColliderHandle),
    /// The joint handle does not identify a joint of this world.
    #[error("invalid joint handle {0:?}")]
    InvalidJointHandle(JointHandle),
    /// A two-body joint was attached twice to the same body.
    #[error("cannot attach a two-body joint twice to the body {0:?}")]
    SameBody(RigidBodyHandle),
}

/// A set of rigid bodies, colliders and joints simulated together.
///
/// Each call to [`World::step`] runs, in order:
///
/// 1. the update of the bounding boxes of all the colliders,
/// 2. the broad-phase, creating a contact for every new candidate pair,
/// 3. the narrow-phase, refreshing every contact and destroying the separated ones,
/// 4. the preparation of the joints, then of the contacts,
/// 5. the integration of forces and gravity into the velocities,
/// 6. the warm-start of the joints, then of the contacts,
/// 7. the velocity iterations, solving all the joints then all the contacts,
/// 8. the integration of the velocities into the positions.
pub struct World {
    gravity: Vector<Real>,
    config: SolverConfig,
    bodies: Arena<RigidBody>,
    colliders: Arena<Collider>,
    joints: Arena<Joint>,
    contacts: ContactManager,
    broad_phase: Box<dyn BroadPhase>,
    pairs: Vec<(ColliderHandle, ColliderHandle)>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(Vector::zeros())
    }
}

impl World {
    /// Creates an empty world with the given gravity and a brute-force broad-phase.
    pub fn new(gravity: Vector<Real>) -> Self {
        Self::with_broad_phase(gravity, BruteForceBroadPhase::new())
    }

    /// Creates an empty world with the given gravity and broad-phase.
    pub fn with_broad_phase(gravity: Vector<Real>, broad_phase: impl BroadPhase + 'static) -> Self {
        Self {
            gravity,
            config: SolverConfig::default(),
            bodies: Arena::new(),
            colliders: Arena::new(),
            joints: Arena::new(),
            contacts: ContactManager::new(),
            broad_phase: Box::new(broad_phase),
            pairs: Vec::new(),
        }
    }

    /// The gravity applied to all the dynamic bodies.
    #[inline]
    pub fn gravity(&self) -> &Vector<Real> {
        &self.gravity
    }

    /// Sets the gravity applied to all the dynamic bodies.
    #[inline]
    pub fn set_gravity(&mut self, gravity: Vector<Real>) {
        self.gravity = gravity;
    }

    /// The configuration used by [`World::step`].
    #[inline]
    pub fn solver_config(&self) -> &SolverConfig {
        &self.config
    }

    /// The configuration used by [`World::step`], for modification.
    #[inline]
    pub fn solver_config_mut(&mut self) -> &mut SolverConfig {
        &mut self.config
    }

    /*
     * Bodies.
     */
    /// Inserts a rigid body and returns its handle.
    pub fn insert_body(&mut self, body: impl Into<RigidBody>) -> RigidBodyHandle {
        let mut body = body.into();
        body.colliders.clear();
        body.set_mass_properties(MassProperties::zero());

        let handle = RigidBodyHandle(self.bodies.insert(body));
        log::debug!("inserted rigid-body {:?}", handle);
        handle
    }

    /// Removes a rigid body, with all its colliders, the joints attached to it and the
    /// contacts involving its colliders.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> Result<RigidBody, WorldError> {
        let mut body = self
            .bodies
            .remove(handle.0)
            .ok_or(WorldError::InvalidBodyHandle(handle))?;

        for collider in body.colliders.drain(..) {
            self.contacts.remove_collider(collider);
            let _ = self.colliders.remove(collider.0);
        }

        self.joints.retain(|i, joint| {
            let attached = joint.is_attached_to(handle);
            if attached {
                log::debug!("removed joint {:?} with its body", JointHandle(i));
            }
            !attached
        });

        log::debug!("removed rigid-body {:?}", handle);
        Ok(body)
    }

    /// The rigid body identified by `handle`.
    #[inline]
    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.0)
    }

    /// The rigid body identified by `handle`, for modification.
    ///
    /// Moving a body this way takes effect at the next step.
    #[inline]
    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle.0)
    }

    /// Iterates through all the rigid bodies.
    pub fn bodies(&self) -> impl Iterator<Item = (RigidBodyHandle, &RigidBody)> {
        self.bodies.iter().map(|(i, b)| (RigidBodyHandle(i), b))
    }

    /// The number of rigid bodies.
    #[inline]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /*
     * Colliders.
     */
    /// Attaches a collider to the body `parent` and returns its handle.
    ///
    /// The mass properties of the body are recomputed.
    pub fn insert_collider(
        &mut self,
        mut collider: Collider,
        parent: RigidBodyHandle,
    ) -> Result<ColliderHandle, WorldError> {
        let body = self
            .bodies
            .get_mut(parent.0)
            .ok_or(WorldError::InvalidBodyHandle(parent))?;

        collider.parent = Some(parent);
        collider.update_position(&body.position);
        let mprops = *body.mass_properties() + collider.mass_properties();
        body.set_mass_properties(mprops);

        let handle = ColliderHandle(self.colliders.insert(collider));
        body.colliders.push(handle);
        log::debug!("inserted collider {:?} on rigid-body {:?}", handle, parent);
        Ok(handle)
    }

    /// Removes a collider and the contacts involving it.
    ///
    /// The mass properties of its body are recomputed.
    pub fn remove_collider(&mut self, handle: ColliderHandle) -> Result<Collider, WorldError> {
        let mut collider = self
            .colliders
            .remove(handle.0)
            .ok_or(WorldError::InvalidColliderHandle(handle))?;
        self.contacts.remove_collider(handle);

        if let Some(body) = collider.parent.and_then(|h| self.bodies.get_mut(h.0)) {
            body.colliders.retain(|h| *h != handle);
            let colliders = &self.colliders;
            let mprops = body
                .colliders
                .iter()
                .filter_map(|h| colliders.get(h.0))
                .map(|c| c.mass_properties())
                .sum();
            body.set_mass_properties(mprops);
        }

        log::debug!("removed collider {:?}", handle);
        collider.parent = None;
        Ok(collider)
    }

    /// The collider identified by `handle`.
    #[inline]
    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle.0)
    }

    /// The collider identified by `handle`, for modification of its material or filter.
    #[inline]
    pub fn collider_mut(&mut self, handle: ColliderHandle) -> Option<&mut Collider> {
        self.colliders.get_mut(handle.0)
    }

    /// Iterates through all the colliders.
    pub fn colliders(&self) -> impl Iterator<Item = (ColliderHandle, &Collider)> {
        self.colliders.iter().map(|(i, c)| (ColliderHandle(i), c))
    }

    /// The number of colliders.
    #[inline]
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /*
     * Joints.
     */
    /// Inserts a joint between `body1` and `body2`.
    ///
    /// A [`MouseJoint`](crate::dynamics::MouseJoint) is attached to `body1` only, and
    /// `body2` is ignored.
    pub fn insert_joint(
        &mut self,
        body1: RigidBodyHandle,
        body2: RigidBodyHandle,
        kind: impl Into<JointKind>,
    ) -> Result<JointHandle, WorldError> {
        let kind = kind.into();

        if !self.bodies.contains(body1.0) {
            return Err(WorldError::InvalidBodyHandle(body1));
        }

        let body2 = if kind.is_single_body() {
            None
        } else if !self.bodies.contains(body2.0) {
            return Err(WorldError::InvalidBodyHandle(body2));
        } else if body1 == body2 {
            return Err(WorldError::SameBody(body1));
        } else {
            Some(body2)
        };

        let joint_type = kind.joint_type();
        let handle = JointHandle(self.joints.insert(Joint::new(body1, body2, kind)));
        log::debug!(
            "inserted {:?} joint {:?} between {:?} and {:?}",
            joint_type,
            handle,
            body1,
            body2
        );
        Ok(handle)
    }

    /// Inserts a joint attached to the single body `body`, like a
    /// [`MouseJoint`](crate::dynamics::MouseJoint).
    pub fn insert_single_body_joint(
        &mut self,
        body: RigidBodyHandle,
        kind: impl Into<JointKind>,
    ) -> Result<JointHandle, WorldError> {
        let kind = kind.into();
        if !kind.is_single_body() {
            return Err(WorldError::SameBody(body));
        }

        self.insert_joint(body, body, kind)
    }

    /// Removes a joint.
    pub fn remove_joint(&mut self, handle: JointHandle) -> Result<Joint, WorldError> {
        let joint = self
            .joints
            .remove(handle.0)
            .ok_or(WorldError::InvalidJointHandle(handle))?;
        log::debug!("removed joint {:?}", handle);
        Ok(joint)
    }

    /// The joint identified by `handle`.
    #[inline]
    pub fn joint(&self, handle: JointHandle) -> Option<&Joint> {
        self.joints.get(handle.0)
    }

    /// The joint identified by `handle`, for modification of its parameters.
    #[inline]
    pub fn joint_mut(&mut self, handle: JointHandle) -> Option<&mut Joint> {
        self.joints.get_mut(handle.0)
    }

    /// Iterates through all the joints.
    pub fn joints(&self) -> impl Iterator<Item = (JointHandle, &Joint)> {
        self.joints.iter().map(|(i, j)| (JointHandle(i), j))
    }

    /// The number of joints.
    #[inline]
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /*
     * Contacts.
     */
    /// The contact manager of this world.
    #[inline]
    pub fn contact_manager(&self) -> &ContactManager {
        &self.contacts
    }

    /// Iterates through all the live contacts.
    pub fn contacts(&self) -> impl Iterator<Item = (ContactHandle, &Contact)> {
        self.contacts.iter()
    }

    /// The number of live contacts.
    #[inline]
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// The contact between the colliders `c1` and `c2`, if they are in contact.
    pub fn contact_pair(&self, c1: ColliderHandle, c2: ColliderHandle) -> Option<&Contact> {
        self.contacts.contact_pair(c1, c2)
    }

    /*
     * Queries.
     */
    /// The first collider containing the world-space point `point`.
    ///
    /// Colliders are tested in insertion order, at the current pose of their body.
    pub fn test_point(&self, point: &Point<Real>) -> Option<ColliderHandle> {
        self.colliders
            .iter()
            .find(|(_, c)| {
                c.parent
                    .and_then(|parent| self.bodies.get(parent.0))
                    .is_some_and(|body| c.contains_point_with_parent_pose(&body.position, point))
            })
            .map(|(i, _)| ColliderHandle(i))
    }

    /// Removes every body, collider, joint and contact from this world.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.colliders.clear();
        self.joints.clear();
        self.contacts.clear();
    }

    /*
     * Simulation.
     */
    /// Advances the simulation by `dt` with the configuration of this world.
    pub fn step(&mut self, dt: Real) {
        let config = self.config;
        self.step_with_config(dt, &config);
    }

    /// Advances the simulation by `dt` with an explicit solver configuration.
    pub fn step_with_config(&mut self, dt: Real, config: &SolverConfig) {
        self.update_collider_positions();

        self.pairs.clear();
        self.broad_phase
            .find_pairs(&self.colliders, &self.bodies, &mut self.pairs);
        for (c1, c2) in self.pairs.drain(..) {
            if !self.contacts.add_pair(c1, c2, &self.colliders) {
                log::trace!("no new contact for {:?} and {:?}", c1, c2);
            }
        }

        self.contacts.update_contacts(&self.colliders, &self.bodies);

        for (_, joint) in self.joints.iter_mut() {
            joint.pre_solve(dt, config, &self.bodies);
        }
        self.contacts.pre_solve(dt, config, &self.bodies);

        for (_, body) in self.bodies.iter_mut() {
            body.integrate_velocity(&self.gravity, dt);
        }

        for (_, joint) in self.joints.iter() {
            joint.warm_start(&mut self.bodies);
        }
        self.contacts.warm_start(&mut self.bodies);

        for _ in 0..config.velocity_iterations {
            for (_, joint) in self.joints.iter_mut() {
                joint.solve(&mut self.bodies);
            }
            self.contacts.solve(&mut self.bodies);
        }

        for (_, body) in self.bodies.iter_mut() {
            body.integrate_position(dt);
        }
    }

    fn update_collider_positions(&mut self) {
        for (_, body) in self.bodies.iter() {
            for handle in &body.colliders {
                if let Some(collider) = self.colliders.get_mut(handle.0) {
                    collider.update_position(&body.position);
                }
            }
        }
    }
}
