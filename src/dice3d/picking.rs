//! Pointer picking helpers
//!
//! Turns a cursor position in window pixels into a world-space ray through the
//! camera, the same way a click is aimed at the dice.

use bevy::prelude::*;

/// Normalize a cursor position to [-1, 1] on both axes (+Y up).
///
/// Returns `None` for a zero-sized viewport (minimized window).
pub fn normalize_pointer(cursor: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }

    Some(Vec2::new(
        cursor.x / viewport.x * 2.0 - 1.0,
        -(cursor.y / viewport.y) * 2.0 + 1.0,
    ))
}

/// Build the ray under a cursor position (logical window pixels).
///
/// The cursor is normalized against the camera's own viewport rectangle and
/// unprojected through the camera's projection, from the near plane outwards.
/// Returns `None` until the camera knows its render target size.
pub fn pointer_ray(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    cursor: Vec2,
) -> Option<Ray3d> {
    let viewport = camera.logical_viewport_rect()?;
    let pointer = normalize_pointer(cursor - viewport.min, viewport.size())?;

    // Reverse-Z: 1 is the near plane, 0 would be infinitely far.
    let near = camera.ndc_to_world(camera_transform, pointer.extend(1.0))?;
    let far = camera.ndc_to_world(camera_transform, pointer.extend(f32::EPSILON))?;
    let direction = Dir3::new(far - near).ok()?;

    Some(Ray3d::new(near, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::camera::{CameraProjection, ComputedCameraValues, RenderTargetInfo, Viewport};
    use bevy::math::bounding::{Aabb3d, RayCast3d};

    fn camera_with(projection: &impl CameraProjection, size: UVec2) -> Camera {
        Camera {
            computed: ComputedCameraValues {
                clip_from_view: projection.get_clip_from_view(),
                target_info: Some(RenderTargetInfo {
                    physical_size: size,
                    scale_factor: 1.0,
                }),
                ..default()
            },
            ..default()
        }
    }

    fn scene_camera() -> Camera {
        let projection = PerspectiveProjection {
            fov: 75f32.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
            ..default()
        };
        camera_with(&projection, UVec2::new(1280, 720))
    }

    fn scene_transform() -> GlobalTransform {
        GlobalTransform::from(Transform::from_xyz(-9.0, 3.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y))
    }

    fn hits_unit_box(ray: Ray3d) -> bool {
        let dice = Aabb3d::new(Vec3::ZERO, Vec3::splat(1.0));
        RayCast3d::from_ray(ray, 100.0)
            .aabb_intersection_at(&dice)
            .is_some()
    }

    #[test]
    fn test_normalize_pointer_corners() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(normalize_pointer(Vec2::ZERO, viewport), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(
            normalize_pointer(Vec2::new(800.0, 600.0), viewport),
            Some(Vec2::new(1.0, -1.0))
        );
        assert_eq!(
            normalize_pointer(Vec2::new(400.0, 300.0), viewport),
            Some(Vec2::ZERO)
        );
    }

    #[test]
    fn test_normalize_pointer_empty_viewport() {
        assert_eq!(normalize_pointer(Vec2::new(1.0, 1.0), Vec2::ZERO), None);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let transform = scene_transform();
        let ray = pointer_ray(&scene_camera(), &transform, Vec2::new(640.0, 360.0)).unwrap();

        let expected = (Vec3::ZERO - transform.translation()).normalize();
        assert!((*ray.direction - expected).length() < 1e-4);
        // Starts on the near plane, just in front of the camera.
        assert!((ray.origin - transform.translation()).length() < 0.2);
    }

    #[test]
    fn test_center_click_hits_dice() {
        let ray = pointer_ray(&scene_camera(), &scene_transform(), Vec2::new(640.0, 360.0)).unwrap();
        assert!(hits_unit_box(ray));
    }

    #[test]
    fn test_corner_click_misses_dice() {
        // Normalized (0.99, 0.99): near the top-right corner.
        let cursor = Vec2::new(640.0 * 1.99, 360.0 * 0.01);
        let ray = pointer_ray(&scene_camera(), &scene_transform(), cursor).unwrap();
        assert!(!hits_unit_box(ray));
    }

    #[test]
    fn test_viewport_offset_is_respected() {
        // Camera drawing only into the right half of a 1280x720 window.
        let mut camera = camera_with(
            &PerspectiveProjection {
                aspect_ratio: 640.0 / 720.0,
                ..default()
            },
            UVec2::new(1280, 720),
        );
        camera.viewport = Some(Viewport {
            physical_position: UVec2::new(640, 0),
            physical_size: UVec2::new(640, 720),
            ..default()
        });
        let transform = scene_transform();

        let ray = pointer_ray(&camera, &transform, Vec2::new(960.0, 360.0)).unwrap();
        let expected = (Vec3::ZERO - transform.translation()).normalize();
        assert!((*ray.direction - expected).length() < 1e-4);
    }

    #[test]
    fn test_orthographic_rays_are_parallel() {
        let mut projection = OrthographicProjection::default_3d();
        projection.update(800.0, 600.0);
        let camera = camera_with(&projection, UVec2::new(800, 600));
        let transform =
            GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y));

        let left = pointer_ray(&camera, &transform, Vec2::new(100.0, 300.0)).unwrap();
        let right = pointer_ray(&camera, &transform, Vec2::new(700.0, 300.0)).unwrap();

        assert!((*left.direction - Vec3::NEG_Z).length() < 1e-4);
        assert!((*right.direction - Vec3::NEG_Z).length() < 1e-4);
        assert!(right.origin.x > left.origin.x);
    }

    #[test]
    fn test_unsized_camera_has_no_ray() {
        let camera = Camera::default();
        assert!(pointer_ray(&camera, &scene_transform(), Vec2::new(10.0, 10.0)).is_none());
    }
}
