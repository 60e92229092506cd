use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Errors from constructing an [`Aabb`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AabbError {
    #[error("inverted bounds on {axis} axis: min {min} > max {max}")]
    Inverted { axis: char, min: f32, max: f32 },
    #[error("non-finite corner: min={min}, max={max}")]
    NonFinite { min: Vec3, max: Vec3 },
    #[error("negative half extent on {axis} axis: {value}")]
    NegativeExtent { axis: char, value: f32 },
}

/// Raw corner pair as it appears in config files, validated into an [`Aabb`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawAabb {
    min: Vec3,
    max: Vec3,
}

/// Static axis-aligned bounding box in world space.
///
/// Immutable after construction. Every constructor guarantees finite corners
/// with `min <= max` on all three axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAabb", into = "RawAabb")]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Build a box from its corners, rejecting inverted or non-finite bounds.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, AabbError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(AabbError::NonFinite { min, max });
        }
        for (axis, lo, hi) in [('x', min.x, max.x), ('y', min.y, max.y), ('z', min.z, max.z)] {
            if lo > hi {
                return Err(AabbError::Inverted {
                    axis,
                    min: lo,
                    max: hi,
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Build a box around `center`. Half extents must be non-negative.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Result<Self, AabbError> {
        let h = half_extents;
        for (axis, value) in [('x', h.x), ('y', h.y), ('z', h.z)] {
            if value < 0.0 {
                return Err(AabbError::NegativeExtent { axis, value });
            }
        }
        Self::new(center - h, center + h)
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Copy of this box padded outward by `pad` on X and Z only.
    pub fn expanded_xz(&self, pad: f32) -> Self {
        let pad = Vec3::new(pad.abs(), 0.0, pad.abs());
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Inclusive point test on the horizontal plane. Y is ignored.
    pub fn contains_xz(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

impl TryFrom<RawAabb> for Aabb {
    type Error = AabbError;

    fn try_from(raw: RawAabb) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl From<Aabb> for RawAabb {
    fn from(aabb: Aabb) -> Self {
        Self {
            min: aabb.min,
            max: aabb.max,
        }
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// The static meshes the scene knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshKind {
    Floor,
    Cube,
    Pyramid,
}

impl MeshKind {
    pub const ALL: [MeshKind; 3] = [MeshKind::Floor, MeshKind::Cube, MeshKind::Pyramid];

    pub fn name(self) -> &'static str {
        match self {
            MeshKind::Floor => "floor",
            MeshKind::Cube => "cube",
            MeshKind::Pyramid => "pyramid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_rejects_inverted_axis() {
        let err = Aabb::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            AabbError::Inverted {
                axis: 'y',
                min: 2.0,
                max: 1.0
            }
        );
    }

    #[test]
    fn aabb_rejects_nan_corner() {
        let err = Aabb::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE).unwrap_err();
        assert!(matches!(err, AabbError::NonFinite { .. }));
    }

    #[test]
    fn aabb_accepts_degenerate_flat_box() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0)).unwrap();
        assert_eq!(b.max().y, 0.0);
    }

    #[test]
    fn from_center_half_extents_spans_center() {
        let b = Aabb::from_center_half_extents(Vec3::new(2.0, 0.5, -1.0), Vec3::splat(0.5)).unwrap();
        assert_eq!(b.min(), Vec3::new(1.5, 0.0, -1.5));
        assert_eq!(b.max(), Vec3::new(2.5, 1.0, -0.5));
        assert_eq!(b.center(), Vec3::new(2.0, 0.5, -1.0));
    }

    #[test]
    fn from_center_half_extents_rejects_negative_extent() {
        let err = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(-1.0)).unwrap_err();
        assert_eq!(err, AabbError::NegativeExtent { axis: 'x', value: -1.0 });

        let err = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::new(1.0, 1.0, -0.25)).unwrap_err();
        assert_eq!(err, AabbError::NegativeExtent { axis: 'z', value: -0.25 });
    }

    #[test]
    fn from_center_half_extents_rejects_non_finite() {
        let err = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::new(f32::NAN, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, AabbError::NonFinite { .. }));
        let err = Aabb::from_center_half_extents(Vec3::new(f32::INFINITY, 0.0, 0.0), Vec3::ONE).unwrap_err();
        assert!(matches!(err, AabbError::NonFinite { .. }));
    }

    #[test]
    fn transform_matrix_applies_scale_rotation_translation() {
        let t = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            scale: Vec3::splat(2.0),
        };
        // +X scaled to 2, turned onto -Z, then moved.
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 2.0, 1.0), 1e-5));
    }

    #[test]
    fn expanded_xz_leaves_y_alone() {
        let b = Aabb::new(Vec3::new(-2.0, 0.0, -0.5), Vec3::new(-1.0, 1.0, 0.5)).unwrap();
        let e = b.expanded_xz(0.3);
        assert!(e.min().abs_diff_eq(Vec3::new(-2.3, 0.0, -0.8), 1e-6));
        assert!(e.max().abs_diff_eq(Vec3::new(-0.7, 1.0, 0.8), 1e-6));
    }

    #[test]
    fn contains_xz_is_inclusive_and_ignores_height() {
        let b = Aabb::new(Vec3::ZERO, Vec3::ONE).unwrap();
        assert!(b.contains_xz(Vec3::new(1.0, 50.0, 0.0)));
        assert!(!b.contains_xz(Vec3::new(1.01, 0.5, 0.5)));
    }

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn mesh_kind_names() {
        let names: Vec<_> = MeshKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["floor", "cube", "pyramid"]);
    }
}
