use approx::{assert_relative_eq, assert_ulps_eq};
use pickray_engine::core::types::*;
use pickray_engine::mesh::MeshProperties;
use pickray_engine::pick::indicators::{Indicators, LINE_ORIGIN_OFFSET};
use pickray_engine::pick::settings::{PickSettings, RaycastMode};
use pickray_engine::pick::{MouseButton, PickDispatcher, PickOutcome};
use pickray_engine::scene::entity::EntityTransform;
use pickray_engine::scene::PickScene;
use rand::Rng as _;
use strum::IntoEnumIterator;

mod common;
use common::*;

const SAMPLES: usize = 50;

fn settings_for(raycast: RaycastMode) -> PickSettings {
    PickSettings {
        raycast,
        ..Default::default()
    }
}

/// Clicks on the given world-space point, returning the outcome
fn click_on(dispatcher: &mut PickDispatcher, scene: &PickScene, point: Point3, settings: &PickSettings) -> PickOutcome {
    let vp = viewport();
    let pos = screen_pos_of(&scene.camera, vp, point);
    dispatcher.on_mouse_down(&primary_click(pos), &scene.camera, vp, &scene.target, settings)
}

/// Checks the indicators are both shown, the marker is on `hit`, and the line runs from the camera to `hit`
fn assert_indicators_show(indicators: &Indicators, camera_pos: Point3, hit: Point3) {
    let (line, marker) = (indicators.line(), indicators.marker());
    assert!(line.visible && marker.visible, "indicators should be visible");
    assert_relative_eq!(marker.transform.position, hit, epsilon = EPSILON);

    let origin = camera_pos + LINE_ORIGIN_OFFSET;
    let len = origin.distance(hit);
    let facing = line.transform.facing();
    assert_relative_eq!(facing, (hit - origin).normalize(), epsilon = EPSILON);
    assert_relative_eq!(line.transform.scale, Vector3::new(1., 1., len), epsilon = EPSILON);
    // Line is centred halfway along, so both its ends are half the length away
    assert_relative_eq!(line.transform.position - (facing * len / 2.), origin, epsilon = EPSILON);
    assert_relative_eq!(line.transform.position + (facing * len / 2.), hit, epsilon = EPSILON);
}

#[test]
fn every_mode_hits_target_surface() {
    let scene = scene();
    let mut rng = rng();

    for point in target_surface_points(&scene.target, &mut rng, SAMPLES) {
        for mode in RaycastMode::iter() {
            let mut dispatcher = PickDispatcher::new();
            let outcome = click_on(&mut dispatcher, &scene, point, &settings_for(mode));

            let PickOutcome::Target { intersection, mode: hit_mode } = outcome else {
                panic!("expected target hit for {mode} at {point}, got {outcome:?}");
            };
            assert_eq!(hit_mode, mode);
            assert_indicators_show(dispatcher.indicators(), scene.camera.pos, intersection.pos_w);

            // Surface point is on the ray, so anything that is hit has to be no further away than it
            let to_point = scene.camera.pos.distance(point);
            assert!(intersection.dist <= to_point + EPSILON, "{mode} hit further than the surface");
        }
    }
}

#[test]
fn box_and_sphere_hits_lie_on_bounding_volumes() {
    let scene = scene();
    let mut rng = rng();
    let bounds = scene.target.bounds();
    let to_local = scene.target.transform().inv_transform();

    let obb = *MeshProperties::aabb(&bounds.obb()).expect("obb should have an aabb");
    let sphere = bounds.sphere();

    for point in target_surface_points(&scene.target, &mut rng, SAMPLES) {
        let mut dispatcher = PickDispatcher::new();

        let PickOutcome::Target { intersection, .. } = click_on(&mut dispatcher, &scene, point, &settings_for(RaycastMode::Box)) else {
            panic!("box test should hit");
        };
        let local = to_local.transform_point3(intersection.pos_w);
        assert!(
            local.cmpge(obb.min() - EPSILON).all() && local.cmple(obb.max() + EPSILON).all(),
            "box hit {local} is not on the box {obb:?}"
        );
        let on_face = (local - obb.min()).abs().min_element() < EPSILON || (local - obb.max()).abs().min_element() < EPSILON;
        assert!(on_face, "box hit {local} is inside the box, not on a face");

        let PickOutcome::Target { intersection, .. } = click_on(&mut dispatcher, &scene, point, &settings_for(RaycastMode::Sphere)) else {
            panic!("sphere test should hit");
        };
        let local = to_local.transform_point3(intersection.pos_w);
        assert_relative_eq!(local.distance(sphere.pos()), sphere.radius(), epsilon = EPSILON);
    }
}

#[test]
fn bounding_volume_hits_are_not_mesh_hits() {
    let scene = scene();
    let mut rng = rng();
    let mut differs = [false; 2];

    for point in target_surface_points(&scene.target, &mut rng, SAMPLES) {
        let mut dispatcher = PickDispatcher::new();
        let mut hit_for = |mode| {
            click_on(&mut dispatcher, &scene, point, &settings_for(mode))
                .point()
                .expect("target should be hit")
        };
        let mesh_hit = hit_for(RaycastMode::Mesh);

        for (i, mode) in [RaycastMode::Box, RaycastMode::Sphere].into_iter().enumerate() {
            let hit = hit_for(mode);
            // The volume encloses the mesh, so the ray has to enter the volume first
            assert!(scene.camera.pos.distance(hit) <= scene.camera.pos.distance(mesh_hit) + EPSILON);
            differs[i] |= hit.distance(mesh_hit) > EPSILON;
        }
    }

    assert_eq!(differs, [true; 2], "bounding volume hits should not just be the mesh hits");
}

#[test]
fn ground_fallback_on_target_miss() {
    let scene = scene();
    let vp = viewport();
    let mut rng = rng();

    for _ in 0..SAMPLES {
        // Bottom edge of the screen is always looking down at the ground, and well away from the target
        let pos = Point2::new(
            rng.gen_range(0.0..VIEWPORT_WIDTH),
            rng.gen_range(VIEWPORT_HEIGHT * 0.9..VIEWPORT_HEIGHT),
        );

        for mode in RaycastMode::iter() {
            let mut dispatcher = PickDispatcher::new();
            let outcome = dispatcher.on_mouse_down(&primary_click(pos), &scene.camera, vp, &scene.target, &settings_for(mode));
            let PickOutcome::Ground { point } = outcome else {
                panic!("expected ground hit at {pos}, got {outcome:?}");
            };

            let ray = scene.camera.ray_through_ndc(vp.to_ndc(pos), vp.aspect());
            let expected = ray.at(-ray.pos().y / ray.dir().y);
            assert_relative_eq!(point, expected, epsilon = EPSILON);
            assert_ulps_eq!(point.y, 0., epsilon = EPSILON);
            assert_indicators_show(dispatcher.indicators(), scene.camera.pos, point);
        }
    }
}

/// Scans the screen area covered by the target's bounding box, for clicks that hit the box but pass by every triangle
fn clicks_inside_bounds_missing_mesh(scene: &PickScene) -> Vec<Point2> {
    const STEPS: usize = 48;
    let vp = viewport();
    let obb = *MeshProperties::aabb(&scene.target.bounds().obb()).expect("obb should have an aabb");
    let corners = obb
        .corners()
        .map(|c| screen_pos_of(&scene.camera, vp, scene.target.transform().point_to_world(c)));
    let (min, max) = corners
        .iter()
        .fold((corners[0], corners[0]), |(min, max), &c| (min.min(c), max.max(c)));

    let hits = |pos: Point2, mode| {
        let ray = scene.camera.ray_through_ndc(vp.to_ndc(pos), vp.aspect());
        scene.target.raycast(&ray, mode).is_some()
    };

    (0..=STEPS)
        .flat_map(|i| (0..=STEPS).map(move |j| (i, j)))
        .map(|(i, j)| {
            let t = Point2::new(i as Number, j as Number) / STEPS as Number;
            min + ((max - min) * t)
        })
        .filter(|&pos| hits(pos, RaycastMode::Box) && !hits(pos, RaycastMode::Mesh))
        .collect()
}

#[test]
fn mesh_mode_falls_back_where_bounds_would_hit() {
    let scene = scene();
    let vp = viewport();

    let clicks = clicks_inside_bounds_missing_mesh(&scene);
    assert!(!clicks.is_empty(), "some of the bounding box should be empty space around the mesh");

    for pos in clicks {
        let mut dispatcher = PickDispatcher::new();
        let click = primary_click(pos);

        let outcome = dispatcher.on_mouse_down(&click, &scene.camera, vp, &scene.target, &settings_for(RaycastMode::Box));
        let PickOutcome::Target { intersection, mode } = outcome else {
            panic!("box test should hit at {pos}, got {outcome:?}");
        };
        assert_eq!(mode, RaycastMode::Box);
        assert_indicators_show(dispatcher.indicators(), scene.camera.pos, intersection.pos_w);

        let outcome = dispatcher.on_mouse_down(&click, &scene.camera, vp, &scene.target, &settings_for(RaycastMode::Mesh));
        let ray = scene.camera.ray_through_ndc(vp.to_ndc(pos), vp.aspect());
        match outcome {
            PickOutcome::Ground { point } => {
                assert!(ray.dir().y < 0., "ground can only be hit looking down");
                let expected = ray.at(-ray.pos().y / ray.dir().y);
                assert_relative_eq!(point, expected, epsilon = EPSILON);
                assert_indicators_show(dispatcher.indicators(), scene.camera.pos, point);
            }
            PickOutcome::Miss => {
                assert!(ray.dir().y >= 0., "ray looking down should have hit the ground");
                assert!(!dispatcher.indicators().is_visible());
            }
            other => panic!("mesh test should fall back at {pos}, got {other:?}"),
        }
    }
}

#[test]
fn full_miss_hides_indicators() {
    let scene = scene();
    let vp = viewport();
    let mut dispatcher = PickDispatcher::new();

    // Show them first, so the miss has something to hide
    click_on(&mut dispatcher, &scene, scene.target.centre(), &PickSettings::default());
    assert!(dispatcher.indicators().is_visible());

    let sky = primary_click(Point2::new(VIEWPORT_WIDTH / 2., 1.));
    let outcome = dispatcher.on_mouse_down(&sky, &scene.camera, vp, &scene.target, &PickSettings::default());

    assert_eq!(outcome, PickOutcome::Miss);
    let indicators = dispatcher.indicators();
    assert!(!indicators.line().visible);
    assert!(!indicators.marker().visible);
}

#[test]
fn initially_hidden() {
    let dispatcher = PickDispatcher::default();
    assert!(!dispatcher.indicators().line().visible);
    assert!(!dispatcher.indicators().marker().visible);
}

#[test]
fn non_primary_clicks_are_ignored() {
    let scene = scene();
    let vp = viewport();
    let settings = settings_for(RaycastMode::Sphere);

    let mut dispatcher = PickDispatcher::new();
    click_on(&mut dispatcher, &scene, scene.target.centre(), &settings);
    let before = *dispatcher.indicators();

    for button in [MouseButton::MIDDLE, MouseButton::SECONDARY, MouseButton(7)] {
        // Somewhere that would otherwise be a ground hit
        let click = press(Point2::new(10., VIEWPORT_HEIGHT - 10.), button);
        let outcome = dispatcher.on_mouse_down(&click, &scene.camera, vp, &scene.target, &settings);
        assert_eq!(outcome, PickOutcome::Ignored);
        assert_eq!(*dispatcher.indicators(), before);
    }

    // Also doesn't show anything when hidden
    let mut dispatcher = PickDispatcher::new();
    let click = press(Point2::new(VIEWPORT_WIDTH / 2., VIEWPORT_HEIGHT / 2.), MouseButton::SECONDARY);
    dispatcher.on_mouse_down(&click, &scene.camera, vp, &scene.target, &settings);
    assert!(!dispatcher.indicators().is_visible());
}

#[test]
fn repeated_clicks_are_idempotent() {
    let scene = scene();
    let mut rng = rng();

    for point in target_surface_points(&scene.target, &mut rng, 10) {
        for mode in RaycastMode::iter() {
            let mut dispatcher = PickDispatcher::new();
            let first = click_on(&mut dispatcher, &scene, point, &settings_for(mode));
            let first_indicators = *dispatcher.indicators();
            let second = click_on(&mut dispatcher, &scene, point, &settings_for(mode));

            assert_eq!(first, second);
            assert_eq!(first_indicators, *dispatcher.indicators());
        }
    }
}

#[test]
fn show_hit_at_camera_keeps_rotation() {
    let mut indicators = Indicators::default();
    let camera_pos = Point3::new(0., 1., 0.);
    let hit = camera_pos + LINE_ORIGIN_OFFSET;

    indicators.show_hit(camera_pos, hit);

    let line = indicators.line();
    assert!(line.visible);
    assert_eq!(line.transform.rotation, EntityTransform::IDENTITY.rotation);
    assert_relative_eq!(line.transform.position, hit);
    assert_eq!(line.transform.scale.z, 0.);
    assert!(!line.transform.is_invertible());
}
