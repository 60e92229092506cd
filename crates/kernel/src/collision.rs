use explorer_common::Aabb;
use glam::Vec3;

/// Errors from building a [`CollisionWorld`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollisionError {
    #[error("camera radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}

/// Expanded-box edge a point was pushed onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushEdge {
    /// Smallest penetration toward +X; x snaps to the expanded max X.
    MaxX,
    /// Toward -X; x snaps to the expanded min X.
    MinX,
    /// Toward +Z; z snaps to the expanded max Z.
    MaxZ,
    /// Toward -Z; z snaps to the expanded min Z.
    MinZ,
}

/// Static colliders plus the camera's lateral padding.
///
/// Resolution is a fold over the colliders in insertion order. Each collider
/// sees the position left by the previous one, so two boxes that cannot both
/// be satisfied leave the point outside the later one only.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionWorld {
    colliders: Vec<Aabb>,
    radius: f32,
}

impl CollisionWorld {
    pub fn new(colliders: Vec<Aabb>, radius: f32) -> Result<Self, CollisionError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CollisionError::InvalidRadius(radius));
        }
        Ok(Self { colliders, radius })
    }

    pub fn colliders(&self) -> &[Aabb] {
        &self.colliders
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Push `position` out of every collider on the X/Z plane, in order.
    /// Y is never read or written.
    pub fn resolve(&self, position: &mut Vec3) {
        for (index, collider) in self.colliders.iter().enumerate() {
            if let Some(edge) = resolve_one(position, collider, self.radius) {
                tracing::trace!(index, ?edge, x = position.x, z = position.z, "collider push");
            }
        }
    }

    /// Indices of colliders whose expanded footprint contains `position`.
    pub fn overlapping(&self, position: Vec3) -> impl Iterator<Item = usize> + '_ {
        self.colliders
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.expanded_xz(self.radius).contains_xz(position))
            .map(|(i, _)| i)
    }
}

/// Resolve a point against a single collider expanded by `radius` on X/Z.
///
/// The point moves along the axis of least penetration, snapping onto the
/// expanded edge. Equal depths are broken in the order +X, -X, +Z, -Z.
pub fn resolve_one(position: &mut Vec3, collider: &Aabb, radius: f32) -> Option<PushEdge> {
    let expanded = collider.expanded_xz(radius);
    if !expanded.contains_xz(*position) {
        return None;
    }
    let (min, max) = (expanded.min(), expanded.max());

    let candidates = [
        (PushEdge::MaxX, max.x - position.x),
        (PushEdge::MinX, position.x - min.x),
        (PushEdge::MaxZ, max.z - position.z),
        (PushEdge::MinZ, position.z - min.z),
    ];
    let (edge, _) = candidates[1..]
        .iter()
        .fold(candidates[0], |best, &next| if next.1 < best.1 { next } else { best });

    match edge {
        PushEdge::MaxX => position.x = max.x,
        PushEdge::MinX => position.x = min.x,
        PushEdge::MaxZ => position.z = max.z,
        PushEdge::MinZ => position.z = min.z,
    }
    Some(edge)
}
