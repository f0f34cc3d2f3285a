use crate::core::{
    CaptureZone, EventQueue, ObjectHandle, ObjectPool, RemovalReason, Score, SwallowConfig,
    SwallowEvent, SwallowEventKind,
};
use crate::math::Vector3;
use crate::Result;

/// What the resolver did during one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwallowReport {
    /// Objects that received a pull force
    pub pulled: usize,

    /// Objects newly flagged as captured
    pub captured: usize,

    /// Objects removed and scored
    pub removed: usize,
}

/// Applies the hole's pull to pooled objects and swallows the ones that reach it.
///
/// Each live object is in one of three states relative to the zone: free
/// (outside the radius), pulled (inside the radius), or captured (inside
/// `capture_threshold * radius`, no longer touching the ground). Objects
/// within `remove_threshold * radius`, or below the world floor, are removed.
#[derive(Debug, Clone)]
pub struct SwallowResolver {
    config: SwallowConfig,
}

impl SwallowResolver {
    pub fn new(config: SwallowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SwallowConfig {
        &self.config
    }

    /// Force pulling an object at `position` towards `zone_center`.
    ///
    /// `None` outside the radius (the boundary itself included) and at the exact centre.
    pub fn pull_force(&self, zone_center: Vector3, radius: f32, position: Vector3) -> Option<Vector3> {
        let to_center = zone_center - position;
        let distance = to_center.length();
        if distance >= radius || distance <= 0.0 {
            return None;
        }
        let magnitude = (radius - distance) * self.config.force_scale;
        Some(to_center / distance * magnitude)
    }

    /// Runs one pass over every live object.
    ///
    /// Must run before the objects are integrated for this tick, so forces are
    /// computed from the positions the objects had at the start of the tick.
    pub fn resolve(
        &self,
        zone: &mut CaptureZone,
        pool: &mut ObjectPool,
        score: &mut Score,
        events: &mut EventQueue,
    ) -> SwallowReport {
        let mut report = SwallowReport::default();

        // Removal empties slots, so walk a snapshot instead of the pool itself
        for handle in pool.live_handles() {
            let Some(object) = pool.get_mut(handle) else {
                continue;
            };

            let zone_center = zone.get_position();
            let radius = zone.get_radius();
            let position = object.position();
            let distance = position.distance(&zone_center);

            let removal = if position.y < self.config.floor_removal_y {
                Some(RemovalReason::FellOffWorld)
            } else if distance < self.config.remove_threshold * radius {
                Some(RemovalReason::Swallowed)
            } else {
                None
            };

            if let Some(reason) = removal {
                self.remove(handle, position, distance, reason, zone, pool, score, events);
                report.removed += 1;
                continue;
            }

            let Some(force) = self.pull_force(zone_center, radius, position) else {
                continue;
            };
            object.body_mut().add_force(force);
            report.pulled += 1;

            if distance < self.config.capture_threshold * radius && !object.is_being_captured() {
                if self.config.capture_spin > 0.0 {
                    object.body_mut().add_torque(Vector3::UP * self.config.capture_spin);
                }
                pool.set_captured(handle, true);
                events.push(SwallowEvent {
                    kind: SwallowEventKind::Captured,
                    object: handle,
                    position,
                });
                tracing::debug!(object = %handle, distance, radius, "object captured");
                report.captured += 1;
            }
        }

        report
    }

    #[allow(clippy::too_many_arguments)]
    fn remove(
        &self,
        handle: ObjectHandle,
        position: Vector3,
        distance: f32,
        reason: RemovalReason,
        zone: &mut CaptureZone,
        pool: &mut ObjectPool,
        score: &mut Score,
        events: &mut EventQueue,
    ) {
        if !pool.invalidate(handle) {
            return;
        }
        score.add(self.config.score_per_removal);
        zone.grow(self.config.radius_growth);
        events.push(SwallowEvent {
            kind: SwallowEventKind::Removed(reason),
            object: handle,
            position,
        });
        tracing::debug!(
            object = %handle,
            distance,
            ?reason,
            radius = zone.get_radius(),
            score = score.get(),
            "object removed"
        );
    }
}
