use approx::assert_relative_eq;
use pickray_engine::core::types::*;
use pickray_engine::mesh::axis_box::AxisBoxMesh;
use pickray_engine::mesh::generator;
use pickray_engine::mesh::infinite_plane::InfinitePlaneMesh;
use pickray_engine::mesh::sphere::SphereMesh;
use pickray_engine::mesh::triangle::Triangle;
use pickray_engine::mesh::trimesh::{TriMesh, TriMeshError};
use pickray_engine::mesh::{Mesh, MeshInstance, MeshProperties};
use pickray_engine::scene::camera::{CamInvalidError, Camera, Viewport};
use pickray_engine::scene::entity::EntityTransform;
use pickray_engine::shared::aabb::Aabb;
use pickray_engine::shared::interval::Interval;
use pickray_engine::shared::ray::Ray;
use pickray_engine::shared::transform::ObjectTransform;
use rand::Rng as _;

mod common;
use common::*;

#[test]
fn sphere_hits_near_side() {
    let sphere = SphereMesh::new(Point3::new(0., 0., -5.), 1.);
    let ray = Ray::new(Point3::ZERO, Vector3::NEG_Z);

    let hit = sphere.intersect(&ray, &Interval::FORWARD).expect("sphere should be hit");
    assert_relative_eq!(hit.dist, 4.);
    assert_relative_eq!(hit.pos_w, Point3::new(0., 0., -4.));
    assert_relative_eq!(hit.normal, Vector3::Z);
    assert!(hit.front_face);

    // Starting inside only finds the far side
    let inside = Ray::new(Point3::new(0., 0., -5.), Vector3::NEG_Z);
    let hit = sphere.intersect(&inside, &Interval::FORWARD).expect("sphere should be hit from inside");
    assert_relative_eq!(hit.dist, 1.);
    assert!(!hit.front_face);

    // Behind the ray
    let away = Ray::new(Point3::ZERO, Vector3::Z);
    assert!(sphere.intersect(&away, &Interval::FORWARD).is_none());
}

#[test]
fn box_faces() {
    let mesh = AxisBoxMesh::new_centred(Point3::ZERO, Vector3::splat(2.));
    let cases = [
        (Vector3::X, 1_usize),
        (Vector3::NEG_X, 0),
        (Vector3::Y, 3),
        (Vector3::NEG_Y, 2),
        (Vector3::Z, 5),
        (Vector3::NEG_Z, 4),
    ];

    for (side, face) in cases {
        // Slightly off-centre, but still perpendicular to the face
        let offset = Vector3::splat(0.01) * (Vector3::ONE - side.abs());
        let ray = Ray::new((side * 5.) + offset, -side);
        let hit = mesh.intersect(&ray, &Interval::FORWARD).expect("box should be hit");
        assert_eq!(hit.face, face, "wrong face for side {side}");
        assert_relative_eq!(hit.normal, side);
        assert_relative_eq!(hit.dist, 4., epsilon = 1e-9);
        assert!(hit.front_face);
    }

    let miss = Ray::new(Point3::new(5., 5., 0.), Vector3::X);
    assert!(mesh.intersect(&miss, &Interval::FORWARD).is_none());
}

#[test]
fn triangle_hit_and_miss() {
    let tri = Triangle::new([Point3::new(-1., -1., 0.), Point3::new(1., -1., 0.), Point3::new(0., 1., 0.)])
        .expect("triangle has area");
    assert_relative_eq!(tri.normal(), Vector3::Z);

    let hit = tri
        .intersect(&Ray::new(Point3::new(0., 0., 3.), Vector3::NEG_Z), &Interval::FORWARD)
        .expect("should hit the middle");
    assert_relative_eq!(hit.pos_w, Point3::ZERO);
    assert_relative_eq!(hit.dist, 3.);
    assert!(hit.front_face);

    let outside = Ray::new(Point3::new(2., 2., 3.), Vector3::NEG_Z);
    assert!(tri.intersect(&outside, &Interval::FORWARD).is_none());

    let parallel = Ray::new(Point3::new(0., 0., 3.), Vector3::X);
    assert!(tri.intersect(&parallel, &Interval::FORWARD).is_none());
}

#[test]
fn degenerate_triangles() {
    let line = [Point3::ZERO, Point3::X, Point3::X * 2.];
    assert!(Triangle::new(line).is_none());

    let vertices = vec![Point3::ZERO, Point3::X, Point3::X * 2., Point3::Y];
    // First triangle is degenerate and skipped, second is fine
    let mesh = TriMesh::new(vertices.clone(), [[0, 1, 2], [0, 1, 3]]).expect("one triangle is valid");
    assert_eq!(mesh.triangles().len(), 1);

    assert_eq!(TriMesh::new(vertices.clone(), [[0, 1, 2]]).unwrap_err(), TriMeshError::Empty);
    assert_eq!(TriMesh::new(vertices.clone(), std::iter::empty()).unwrap_err(), TriMeshError::Empty);
    assert_eq!(
        TriMesh::new(vertices, [[0, 1, 3], [0, 9, 3]]).unwrap_err(),
        TriMeshError::IndexOutOfRange {
            triangle: 1,
            index: 9,
            count: 4
        }
    );
}

#[test]
fn trimesh_picks_nearest_triangle() {
    // Two parallel quads, one behind the other
    let quad = |z: Number| [Point3::new(-1., -1., z), Point3::new(1., -1., z), Point3::new(1., 1., z), Point3::new(-1., 1., z)];
    let vertices = quad(-2.).into_iter().chain(quad(-1.)).collect::<Vec<_>>();
    let mesh = TriMesh::new(vertices, [[0, 1, 2], [0, 2, 3], [4, 5, 6], [4, 6, 7]]).expect("mesh is valid");

    let hit = mesh
        .intersect(&Ray::new(Point3::new(0.2, 0.1, 0.), Vector3::NEG_Z), &Interval::FORWARD)
        .expect("should hit");
    assert_relative_eq!(hit.dist, 1.);
    assert!(hit.face >= 2, "should have hit the front quad, got face {}", hit.face);

    // Only the far quad is in the interval
    let hit = mesh
        .intersect(
            &Ray::new(Point3::new(0.2, 0.1, 0.), Vector3::NEG_Z),
            &Interval::from(1.5..=10.),
        )
        .expect("should hit");
    assert_relative_eq!(hit.dist, 2.);
}

#[test]
fn torus_is_closed_around_its_tube() {
    let torus = generator::torus(1., 0.25, 16, 8).expect("torus is valid");
    assert_eq!(torus.triangles().len(), 16 * 8 * 2);

    let aabb = *MeshProperties::aabb(&torus).expect("trimesh has bounds");
    assert_relative_eq!(aabb.max().x, 1.25, epsilon = 1e-3);
    assert_relative_eq!(aabb.max().y, 0.25, epsilon = 1e-3);

    // Straight down onto the top of the tube, away from any edges
    let ray = Ray::new(Point3::new(1.05, 2., 0.05), Vector3::NEG_Y);
    let hit = torus.intersect(&ray, &Interval::FORWARD).expect("tube should be hit");
    assert!(hit.front_face, "normals should point out of the tube");
    assert!(hit.normal.y > 0.);

    // The hole in the middle
    let ray = Ray::new(Point3::new(0., 2., 0.), Vector3::NEG_Y);
    assert!(torus.intersect(&ray, &Interval::FORWARD).is_none());
}

#[test]
fn plane_hits_and_misses() {
    let ground = InfinitePlaneMesh::ground();

    let down = Ray::new(Point3::new(1., 2., 3.), Vector3::new(0., -1., -1.));
    let hit = ground.intersect(&down, &Interval::FORWARD).expect("should hit the ground");
    assert_relative_eq!(hit.pos_w, Point3::new(1., 0., 1.), epsilon = 1e-9);
    assert!(hit.front_face);

    let parallel = Ray::new(Point3::new(0., 2., 0.), Vector3::X);
    assert!(ground.intersect(&parallel, &Interval::FORWARD).is_none());

    let up = Ray::new(Point3::new(0., 2., 0.), Vector3::Y);
    assert!(ground.intersect(&up, &Interval::FORWARD).is_none());

    assert!(ground.aabb().is_none());
}

#[test]
fn aabb_slab_test() {
    let aabb = Aabb::new(Point3::splat(-1.), Point3::splat(1.));
    assert!(aabb.hit(&Ray::new(Point3::new(0., 0., 5.), Vector3::NEG_Z), &Interval::FORWARD));
    assert!(!aabb.hit(&Ray::new(Point3::new(0., 0., 5.), Vector3::Z), &Interval::FORWARD));
    assert!(!aabb.hit(&Ray::new(Point3::new(0., 0., 5.), Vector3::NEG_Z), &Interval::from(0.0..=2.)));
    // Axis-aligned rays divide by zero, which still has to work
    assert!(!aabb.hit(&Ray::new(Point3::new(2., 0., 5.), Vector3::NEG_Z), &Interval::FORWARD));

    let corners = aabb.corners();
    for (a, b) in Aabb::EDGES {
        // Every edge runs along exactly one axis
        let diff = (corners[a] - corners[b]).abs();
        assert_eq!(diff.cmpgt(Vector3::ZERO).bitmask().count_ones(), 1);
    }
}

#[test]
fn transformed_mesh_matches_world_mesh() {
    // A unit sphere scaled and moved, against the equivalent sphere built directly in the world
    let transform = ObjectTransform::new(Transform3::from_scale_rotation_translation(
        Vector3::splat(2.),
        Quaternion::from_rotation_y(0.7),
        Point3::new(1., 2., -6.),
    ));
    let local: MeshInstance = SphereMesh::new(Point3::ZERO, 1.).into();
    let world = SphereMesh::new(Point3::new(1., 2., -6.), 2.);
    let mut rng = rng();

    for _ in 0..100 {
        let dir = Vector3::new(rng.gen_range(-0.3..0.3), rng.gen_range(-0.3..0.3), -1.);
        let ray = Ray::new(Point3::new(0., 2., 0.), dir);

        let expected = world.intersect(&ray, &Interval::FORWARD);
        let actual = local
            .intersect(&transform.incoming_ray(&ray), &Interval::FORWARD)
            .map(|i| transform.outgoing_intersection(&ray, i));

        match (expected, actual) {
            (None, None) => {}
            (Some(e), Some(a)) => {
                assert_relative_eq!(e.pos_w, a.pos_w, epsilon = 1e-9);
                assert_relative_eq!(e.normal, a.normal, epsilon = 1e-9);
                assert_relative_eq!(e.dist, a.dist, epsilon = 1e-9);
            }
            (e, a) => panic!("mismatch for {ray:?}: expected {e:?}, got {a:?}"),
        }
    }
}

#[test]
fn camera_projection_round_trip() {
    let camera = Camera::default();
    let vp = viewport();
    let mut rng = rng();

    for _ in 0..100 {
        let screen = Point2::new(rng.gen_range(0.0..VIEWPORT_WIDTH), rng.gen_range(0.0..VIEWPORT_HEIGHT));
        let ray = camera.ray_through_ndc(vp.to_ndc(screen), vp.aspect());
        assert_relative_eq!(ray.pos(), camera.pos);

        let along = ray.at(rng.gen_range(1.0..50.0));
        let back = vp.to_screen(camera.project(along, vp.aspect()).expect("point is in front"));
        assert_relative_eq!(back, screen, epsilon = 1e-6);
    }

    // Centre of the screen looks straight ahead
    let centre = camera.ray_through_ndc(Point2::ZERO, vp.aspect());
    assert_relative_eq!(centre.dir(), Vector3::NEG_Z);

    // Top-left of the screen is up and to the left
    assert_relative_eq!(vp.to_ndc(Point2::ZERO), Point2::new(-1., 1.));

    assert!(camera.project(camera.pos + Vector3::Z, vp.aspect()).is_none());
}

#[test]
fn camera_rotation_clamps_pitch() {
    let mut camera = Camera::default();
    camera
        .apply_rot_delta(Angle::from_degrees(0.), Angle::from_degrees(200.))
        .expect("rotation is valid");
    assert!(camera.fwd.y < 1.);
    assert_relative_eq!(camera.fwd.y.asin().to_degrees(), 89., epsilon = 1e-6);

    camera
        .apply_rot_delta(Angle::from_degrees(90.), Angle::from_degrees(-400.))
        .expect("rotation is valid");
    assert_relative_eq!(camera.fwd.y.asin().to_degrees(), -89., epsilon = 1e-6);
    assert!(camera.validate().is_ok());
}

#[test]
fn invalid_camera_and_viewport() {
    let camera = Camera {
        v_fov: Angle::from_degrees(0.),
        ..Default::default()
    };
    assert_eq!(camera.validate(), Err(CamInvalidError::FovInvalid));

    let camera = Camera {
        fwd: Vector3::ZERO,
        ..Default::default()
    };
    assert_eq!(camera.validate(), Err(CamInvalidError::ForwardVectorInvalid));

    assert_eq!(Viewport::new(0., 10.), Err(CamInvalidError::ViewportInvalid));
    assert_eq!(Viewport::new(10., Number::NAN), Err(CamInvalidError::ViewportInvalid));
}

#[test]
fn entity_look_at_faces_target() {
    let mut transform = EntityTransform {
        position: Point3::new(1., 2., 3.),
        ..EntityTransform::IDENTITY
    };
    let target = Point3::new(-4., 0., 1.);
    transform.look_at(target);
    assert_relative_eq!(transform.facing(), (target - transform.position).normalize(), epsilon = 1e-9);

    let dist = transform.position.distance(target);
    transform.translate_local(EntityTransform::FORWARD, dist);
    assert_relative_eq!(transform.position, target, epsilon = 1e-9);
}
