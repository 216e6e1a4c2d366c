use glam::{Mat4, Vec3};

use super::navigation::{NavigationState, WORLD_UP};

/// Uniform scale of the bundled asset (authored in centimeters).
const FOLLOWER_SCALE: Vec3 = Vec3::splat(0.03);

/// Everything the rendering side needs for one frame. Column-major,
/// right-handed, GL-style clip range.
#[derive(Debug, Clone, Copy)]
pub struct FrameMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    pub follower_model: Mat4,
    /// Camera world position, consumed by the ground shader.
    pub camera_position: Vec3,
}

/// Derive the frame's matrices from current navigation state. Pure and
/// recomputed every frame; the state changes continuously, so caching
/// would never hit.
pub fn derive(nav: &NavigationState, aspect: f32) -> FrameMatrices {
    let eye = nav.camera.position;
    let view = Mat4::look_at_rh(eye, eye + nav.camera.front(), WORLD_UP);

    let projection = Mat4::perspective_rh_gl(
        nav.camera.fov.to_radians(),
        aspect,
        nav.config().near_plane,
        nav.config().far_plane,
    );

    // The two fixed rotations align the asset's native axes (Z-up,
    // rear-facing export) with the scene's forward/up convention.
    // TODO: feed follower.heading into this matrix once the asset is
    // re-exported with a neutral facing.
    let follower_model = Mat4::from_translation(nav.follower.position)
        * Mat4::from_scale(FOLLOWER_SCALE)
        * Mat4::from_axis_angle(Vec3::Y, 180f32.to_radians())
        * Mat4::from_axis_angle(-Vec3::X, 90f32.to_radians());

    FrameMatrices {
        view,
        projection,
        follower_model,
        camera_position: eye,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-4;

    #[test]
    fn view_matrix_centers_the_camera() {
        let nav = NavigationState::default();
        let m = derive(&nav, 800.0 / 600.0);

        // The camera's own position maps to the view-space origin
        let eye = m.view * nav.camera.position.extend(1.0);
        assert!(eye.truncate().length() < EPS);
    }

    #[test]
    fn view_looks_along_negative_z() {
        let nav = NavigationState::default();
        let m = derive(&nav, 1.0);

        // A point one unit along the look direction lands on -Z in view space
        let target = (nav.camera.position + nav.camera.front()).extend(1.0);
        let v = m.view * target;
        assert!((v.z + 1.0).abs() < EPS);
        assert!(v.x.abs() < EPS && v.y.abs() < EPS);
    }

    #[test]
    fn projection_maps_near_and_far_to_gl_clip_range() {
        let nav = NavigationState::default();
        let m = derive(&nav, 1.0);
        let near = nav.config().near_plane;
        let far = nav.config().far_plane;

        let ndc = |p: Vec4| p / p.w;
        let at_near = ndc(m.projection * Vec4::new(0.0, 0.0, -near, 1.0));
        let at_far = ndc(m.projection * Vec4::new(0.0, 0.0, -far, 1.0));
        assert!((at_near.z + 1.0).abs() < EPS);
        assert!((at_far.z - 1.0).abs() < 1e-3);
    }

    #[test]
    fn follower_model_places_the_follower() {
        let nav = NavigationState::default();
        let m = derive(&nav, 1.0);

        // The asset origin lands at the follower's world position
        let origin = m.follower_model * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.truncate() - nav.follower.position).length() < EPS);
    }

    #[test]
    fn follower_model_ignores_heading() {
        let mut nav = NavigationState::default();
        let before = derive(&nav, 1.0).follower_model;

        nav.follower.heading += 270.0;
        let after = derive(&nav, 1.0).follower_model;

        assert_eq!(before.to_cols_array(), after.to_cols_array());
    }

    #[test]
    fn follower_scale_is_uniform() {
        let nav = NavigationState::default();
        let m = derive(&nav, 1.0).follower_model;

        let unit_x = (m * Vec4::new(1.0, 0.0, 0.0, 0.0)).truncate();
        let unit_z = (m * Vec4::new(0.0, 0.0, 1.0, 0.0)).truncate();
        assert!((unit_x.length() - 0.03).abs() < EPS);
        assert!((unit_z.length() - 0.03).abs() < EPS);
    }
}
