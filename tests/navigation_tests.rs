use glam::Vec3;
use scene_walker::config::NavConfig;
use scene_walker::core::navigation::NavigationState;
use scene_walker::core::{Button, Controller};

const EPS: f32 = 1e-5;

struct HeldKeys {
    pressed: Vec<Button>,
}

impl HeldKeys {
    fn new(pressed: &[Button]) -> Self {
        Self {
            pressed: pressed.to_vec(),
        }
    }

    fn none() -> Self {
        Self { pressed: vec![] }
    }
}

impl Controller for HeldKeys {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed
    }
}

#[cfg(test)]
mod pitch_invariant_tests {
    use super::*;

    #[test]
    fn pitch_never_escapes_bounds_under_extreme_input() {
        let mut nav = NavigationState::default();
        nav.apply_mouse_look(0.0, 0.0);

        // Drag the cursor down a million pixels in steps
        for i in 1..=1000 {
            nav.apply_mouse_look(0.0, i as f32 * 1000.0);
            assert!(nav.camera.pitch >= -89.0 && nav.camera.pitch <= 89.0);
        }
        assert_eq!(nav.camera.pitch, -89.0);

        // And a million back up
        for i in (0..1000).rev() {
            nav.apply_mouse_look(0.0, i as f32 * 1000.0 - 1_000_000.0);
            assert!(nav.camera.pitch >= -89.0 && nav.camera.pitch <= 89.0);
        }
        assert_eq!(nav.camera.pitch, 89.0);
    }

    #[test]
    fn mouse_delta_scaling_matches_sensitivity() {
        let mut nav = NavigationState::default();
        nav.apply_mouse_look(0.0, 0.0);

        // 100 pixels up at sensitivity 0.05 pitches exactly 5 degrees
        nav.apply_mouse_look(0.0, -100.0);
        assert!((nav.camera.pitch - 5.0).abs() < EPS);
    }
}

#[cfg(test)]
mod fov_invariant_tests {
    use super::*;

    #[test]
    fn fov_stays_in_bounds_for_any_scroll_sequence() {
        let mut nav = NavigationState::default();
        let scrolls = [3.0, -7.5, 100.0, -100.0, 0.25, -0.25, 44.0, -44.0];

        for (i, &s) in scrolls.iter().cycle().take(200).enumerate() {
            nav.apply_scroll(s * (1.0 + (i % 3) as f32));
            assert!(nav.camera.fov >= 1.0 && nav.camera.fov <= 45.0);
        }
    }

    #[test]
    fn negative_scroll_cannot_push_fov_past_maximum() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.camera.fov, 45.0);

        // fov -= scroll, so negative scroll tries to widen past the bound
        for _ in 0..10 {
            nav.apply_scroll(-10.0);
            assert_eq!(nav.camera.fov, 45.0);
        }
    }

    #[test]
    fn zoom_in_then_out_round_trips() {
        let mut nav = NavigationState::default();
        nav.apply_scroll(20.0);
        assert_eq!(nav.camera.fov, 25.0);
        nav.apply_scroll(-20.0);
        assert_eq!(nav.camera.fov, 45.0);
    }
}

#[cfg(test)]
mod mouse_seeding_tests {
    use super::*;

    #[test]
    fn first_sample_produces_zero_look_delta() {
        for raw in [(0.0, 0.0), (400.0, 300.0), (-5000.0, 9999.0)] {
            let mut nav = NavigationState::default();
            let (yaw, pitch) = (nav.camera.yaw, nav.camera.pitch);

            nav.apply_mouse_look(raw.0, raw.1);

            assert_eq!(nav.camera.yaw, yaw);
            assert_eq!(nav.camera.pitch, pitch);
        }
    }

    #[test]
    fn deltas_are_relative_to_the_seed() {
        let mut nav = NavigationState::default();
        nav.apply_mouse_look(5000.0, 5000.0);
        nav.apply_mouse_look(5010.0, 5000.0);

        // 10 pixels right at sensitivity 0.05
        assert!((nav.camera.yaw - (-90.0 + 0.5)).abs() < EPS);
        assert_eq!(nav.camera.pitch, 0.0);
    }
}

#[cfg(test)]
mod movement_coupling_tests {
    use super::*;

    #[test]
    fn camera_and_follower_displace_identically() {
        for keys in [
            vec![Button::Forward],
            vec![Button::Backward],
            vec![Button::Left],
            vec![Button::Right],
            vec![Button::Forward, Button::Left],
            vec![Button::Backward, Button::Right],
        ] {
            let mut nav = NavigationState::default();
            let camera_before = nav.camera.position;
            let follower_before = nav.follower.position;

            nav.apply_keyboard(&HeldKeys::new(&keys), 0.25);

            let camera_moved = nav.camera.position - camera_before;
            let follower_moved = nav.follower.position - follower_before;
            assert!(
                (camera_moved - follower_moved).length() < EPS,
                "displacement diverged for {:?}",
                keys
            );
        }
    }

    #[test]
    fn empty_key_set_mutates_nothing() {
        let mut nav = NavigationState::default();
        let camera_before = nav.camera.position;
        let follower_before = nav.follower.position;
        let heading_before = nav.follower.heading;

        let quit = nav.apply_keyboard(&HeldKeys::none(), 1.0);

        assert!(!quit);
        assert_eq!(nav.camera.position, camera_before);
        assert_eq!(nav.follower.position, follower_before);
        assert_eq!(nav.follower.heading, heading_before);
    }

    #[test]
    fn strafe_turns_the_follower_not_the_camera() {
        let mut nav = NavigationState::default();
        let yaw_before = nav.camera.yaw;
        let heading_before = nav.follower.heading;

        nav.apply_keyboard(&HeldKeys::new(&[Button::Left]), 0.5);
        assert_eq!(nav.camera.yaw, yaw_before);
        assert!((nav.follower.heading - (heading_before + 45.0)).abs() < EPS);

        nav.apply_keyboard(&HeldKeys::new(&[Button::Right]), 0.5);
        assert!((nav.follower.heading - heading_before).abs() < EPS);
    }

    #[test]
    fn quit_is_reported_without_touching_state() {
        let mut nav = NavigationState::default();
        let camera_before = nav.camera.position;

        let quit = nav.apply_keyboard(&HeldKeys::new(&[Button::Quit]), 1.0);

        assert!(quit);
        assert_eq!(nav.camera.position, camera_before);
    }
}

#[cfg(test)]
mod frame_rate_independence_tests {
    use super::*;

    #[test]
    fn one_big_step_equals_two_half_steps() {
        let keys = HeldKeys::new(&[Button::Forward, Button::Left]);

        let mut coarse = NavigationState::default();
        coarse.apply_keyboard(&keys, 0.2);

        let mut fine = NavigationState::default();
        fine.apply_keyboard(&keys, 0.1);
        fine.apply_keyboard(&keys, 0.1);

        // The movement basis depends only on yaw/pitch, which keyboard
        // input never touches, so the split integrates identically
        assert!((coarse.camera.position - fine.camera.position).length() < 1e-4);
        assert!((coarse.follower.position - fine.follower.position).length() < 1e-4);
        assert!((coarse.follower.heading - fine.follower.heading).abs() < 1e-4);
    }

    #[test]
    fn displacement_scales_linearly_with_delta() {
        let keys = HeldKeys::new(&[Button::Forward]);

        let mut slow = NavigationState::default();
        slow.apply_keyboard(&keys, 0.01);
        let slow_step = (slow.camera.position - NavigationState::default().camera.position).length();

        let mut fast = NavigationState::default();
        fast.apply_keyboard(&keys, 0.04);
        let fast_step = (fast.camera.position - NavigationState::default().camera.position).length();

        assert!((fast_step - 4.0 * slow_step).abs() < EPS);
    }
}

#[cfg(test)]
mod movement_geometry_tests {
    use super::*;

    #[test]
    fn initial_front_looks_down_negative_z() {
        let nav = NavigationState::default();
        let front = nav.camera.front();
        assert!((front - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn forward_for_one_second_moves_one_unit_on_the_ground() {
        let mut nav = NavigationState::default();

        // Pitch the camera up steeply first; movement must stay horizontal
        nav.apply_mouse_look(0.0, 0.0);
        nav.apply_mouse_look(0.0, -1200.0); // pitch +60 degrees
        assert!((nav.camera.pitch - 60.0).abs() < EPS);

        let before = nav.camera.position;
        nav.apply_keyboard(&HeldKeys::new(&[Button::Forward]), 1.0);
        let moved = nav.camera.position - before;

        assert_eq!(moved.y, 0.0);
        assert!((moved.length() - 1.0).abs() < EPS);
        assert!((moved.normalize() - nav.horizontal_front()).length() < EPS);
    }

    #[test]
    fn strafe_is_perpendicular_to_horizontal_front() {
        let mut nav = NavigationState::default();
        let before = nav.camera.position;

        nav.apply_keyboard(&HeldKeys::new(&[Button::Right]), 1.0);
        let moved = nav.camera.position - before;

        assert_eq!(moved.y, 0.0);
        assert!(moved.dot(nav.horizontal_front()).abs() < EPS);
        // yaw -90 faces -Z, so right is +X
        assert!((moved - Vec3::new(1.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut nav = NavigationState::default();
        let before = nav.camera.position;

        nav.apply_keyboard(&HeldKeys::new(&[Button::Forward, Button::Backward]), 1.0);

        assert!((nav.camera.position - before).length() < EPS);
    }
}

#[cfg(test)]
mod config_override_tests {
    use super::*;

    #[test]
    fn move_speed_scales_displacement() {
        let config = NavConfig {
            move_speed: 4.0,
            ..NavConfig::default()
        };
        let mut nav = NavigationState::new(config);
        let before = nav.camera.position;

        nav.apply_keyboard(&HeldKeys::new(&[Button::Forward]), 0.5);

        assert!(((nav.camera.position - before).length() - 2.0).abs() < EPS);
    }

    #[test]
    fn custom_bounds_are_honored() {
        let config = NavConfig {
            fov_min: 10.0,
            fov_max: 60.0,
            pitch_limit: 45.0,
            ..NavConfig::default()
        };
        let mut nav = NavigationState::new(config);

        nav.apply_scroll(-100.0);
        assert_eq!(nav.camera.fov, 60.0);
        nav.apply_scroll(100.0);
        assert_eq!(nav.camera.fov, 10.0);

        nav.apply_mouse_look(0.0, 0.0);
        nav.apply_mouse_look(0.0, -10_000.0);
        assert_eq!(nav.camera.pitch, 45.0);
    }
}
