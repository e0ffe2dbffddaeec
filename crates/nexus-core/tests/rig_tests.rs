// Host-side tests for scene rig sizing and per-frame animation.

use nexus_core::input::PointerTargets;
use nexus_core::{FrameInputs, RigKind, RigState};

#[test]
fn resize_keeps_camera_and_surface_in_step_with_the_container() {
    let sizes = [(1280, 720), (375, 812), (1, 1), (2560, 1080), (800, 800)];
    for kind in RigKind::ALL {
        let mut rig = RigState::new(kind.config(), 640, 480, 1.0);
        for (w, h) in sizes {
            assert!(rig.resize(w, h, 1.0));
            assert!((rig.camera.aspect - w as f32 / h as f32).abs() < 1e-6);
            assert_eq!((rig.viewport.css_width, rig.viewport.css_height), (w, h));
            assert_eq!(rig.viewport.backing_size(), (w, h));
        }
    }
}

#[test]
fn backing_store_scales_with_capped_pixel_ratio() {
    let mut rig = RigState::new(RigKind::Hero.config(), 640, 480, 1.0);
    rig.resize(400, 300, 3.0);
    assert_eq!((rig.viewport.css_width, rig.viewport.css_height), (400, 300));
    assert_eq!(rig.viewport.backing_size(), (800, 600));
    rig.resize(400, 300, 1.5);
    assert_eq!(rig.viewport.backing_size(), (600, 450));
}

#[test]
fn collapsed_container_keeps_previous_size() {
    let mut rig = RigState::new(RigKind::Display.config(), 640, 480, 1.0);
    assert!(!rig.resize(0, 300, 1.0));
    assert!(!rig.resize(300, 0, 1.0));
    assert_eq!((rig.viewport.css_width, rig.viewport.css_height), (640, 480));
    assert!((rig.camera.aspect - 640.0 / 480.0).abs() < 1e-6);
}

#[test]
fn rigs_without_a_phone_still_advance() {
    let mut rig = RigState::new(RigKind::Hero.config(), 640, 480, 1.0);
    let eye = rig.camera.eye;
    for i in 0..120 {
        rig.advance(&FrameInputs {
            elapsed: i as f32 / 60.0,
            ..Default::default()
        });
    }
    assert!(rig.phone.is_none());
    // the hero camera orbits on its own
    assert!(!rig.camera.eye.abs_diff_eq(eye, 1e-6));
}

#[test]
fn long_gap_between_frames_does_not_swing_the_hero_camera() {
    let frame = |rig: &mut RigState, elapsed: f32| {
        rig.advance(&FrameInputs {
            elapsed,
            ..Default::default()
        });
        rig.camera.eye
    };
    let mut steady = RigState::new(RigKind::Hero.config(), 640, 480, 1.0);
    let mut resumed = steady.clone();
    frame(&mut steady, 0.0);
    frame(&mut resumed, 0.0);
    let before = frame(&mut steady, 1.0 / 60.0);
    frame(&mut resumed, 1.0 / 60.0);

    let after_frame = frame(&mut steady, 2.0 / 60.0);
    // a minute hidden
    let after_gap = frame(&mut resumed, 61.0);

    let normal_step = before.distance(after_frame);
    let gap_step = before.distance(after_gap);
    assert!(gap_step > normal_step);
    assert!(gap_step < normal_step * 10.0);
    assert!(gap_step < 0.05);
}

#[test]
fn hero_phone_follows_the_pointer_and_floats() {
    let mut rig = RigState::new(RigKind::Hero.config(), 640, 480, 1.0);
    rig.attach_phone(1.0);
    let pointer = PointerTargets::from_client(640.0, 240.0, 640.0, 480.0);
    for i in 0..600 {
        rig.advance(&FrameInputs {
            elapsed: i as f32 / 60.0,
            pointer,
            tilt: None,
        });
    }
    let phone = rig.phone.expect("phone attached");
    let expected_yaw = std::f32::consts::FRAC_PI_6 + pointer.rotation_x * 0.3;
    assert!((phone.current.rotation.y - expected_yaw).abs() < 1e-3);
    assert!(phone.current.position.y.abs() <= 0.1 + 1e-6);
}

#[test]
fn display_phone_takes_the_scroll_tilt() {
    let mut rig = RigState::new(RigKind::Display.config(), 640, 480, 1.0);
    rig.attach_phone(1.0);
    rig.advance(&FrameInputs {
        elapsed: 2.0,
        tilt: Some(-0.1),
        ..Default::default()
    });
    let phone = rig.phone.expect("phone attached");
    assert!((phone.current.rotation.x + 0.1).abs() < 1e-6);
    assert!((phone.current.rotation.y - (0.6f32).sin() * 0.2).abs() < 1e-6);
}
