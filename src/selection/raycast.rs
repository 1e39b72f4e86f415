//! Pick ray construction from pointer NDC.

use bevy::camera::CameraProjection;
use bevy::prelude::*;

/// Ray from the near plane through `ndc` for a camera with the given
/// transform and projection.
///
/// Reads the clip matrix from the `Projection` component rather than the
/// camera's computed values, so the ray is available before the first
/// render. Bevy projections use reversed depth: NDC z = 1 is the near plane.
pub fn pointer_ray(
    camera_transform: &GlobalTransform,
    projection: &Projection,
    ndc: Vec2,
) -> Option<Ray3d> {
    let world_from_clip =
        Mat4::from(camera_transform.affine()) * projection.get_clip_from_view().inverse();
    if !world_from_clip.is_finite() {
        return None;
    }
    let near = world_from_clip.project_point3(ndc.extend(1.0));
    let far = world_from_clip.project_point3(ndc.extend(f32::EPSILON));
    if !near.is_finite() || !far.is_finite() {
        return None;
    }
    let direction = Dir3::new(far - near).ok()?;
    Some(Ray3d::new(near, direction))
}

/// Inverse of [`pointer_ray`]: where `point` lands in NDC.
#[cfg(test)]
pub fn world_to_ndc(
    camera_transform: &GlobalTransform,
    projection: &Projection,
    point: Vec3,
) -> Vec2 {
    let view_from_world = Mat4::from(camera_transform.affine()).inverse();
    projection
        .get_clip_from_view()
        .project_point3(view_from_world.transform_point3(point))
        .truncate()
}
