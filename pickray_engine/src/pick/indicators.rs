use crate::core::types::{Colour, Number, Point3, Vector3};
use crate::mesh::axis_box::AxisBoxMesh;
use crate::mesh::sphere::SphereMesh;
use crate::scene::entity::{Entity, EntityTransform};
use getset::CopyGetters;

/// How far below the camera the line starts, so it doesn't clip through the near plane
pub const LINE_ORIGIN_OFFSET: Vector3 = Vector3::new(0., -0.05, 0.);
/// Width and height of the line's cross-section
pub const LINE_THICKNESS: Number = 0.01;
pub const MARKER_RADIUS: Number = 0.02;
pub const LINE_COLOUR: Colour = Colour::new([1., 0.85, 0.2]);
pub const MARKER_COLOUR: Colour = Colour::new([0.1, 0.3, 1.]);

/// The two visual indicators of the last pick: a line from the camera to the hit point, and a marker on the hit point.
///
/// # Invariants
/// Both indicators are always either shown together or hidden together.
/// Nothing outside this type can mutate them.
#[derive(Copy, Clone, Debug, Default, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Indicators {
    /// Unit-length along its local [facing axis](EntityTransform::FORWARD), see [line_mesh]
    line: Entity,
    /// See [marker_mesh]
    marker: Entity,
}

impl Indicators {
    pub fn is_visible(&self) -> bool { self.line.visible }

    /// Shows both indicators, with the line spanning from just below the camera to `hit`, and the marker on `hit`
    pub fn show_hit(&mut self, camera_pos: Point3, hit: Point3) {
        let line = &mut self.line.transform;
        *line = EntityTransform {
            position: camera_pos + LINE_ORIGIN_OFFSET,
            ..EntityTransform::IDENTITY
        };
        line.look_at(hit);

        // The base line is centred on its own origin, so move it halfway along before stretching it
        let dist = line.position.distance(hit);
        line.translate_local(EntityTransform::FORWARD, dist / 2.);
        line.scale = Vector3::new(1., 1., dist);

        self.marker.transform.position = hit;

        self.line.visible = true;
        self.marker.visible = true;
    }

    pub fn hide(&mut self) {
        self.line.visible = false;
        self.marker.visible = false;
    }
}

/// Base geometry for the line indicator: unit length along `z`, centred on the origin
pub fn line_mesh() -> AxisBoxMesh {
    AxisBoxMesh::new_centred(Point3::ZERO, Vector3::new(LINE_THICKNESS, LINE_THICKNESS, 1.))
}

/// Base geometry for the marker indicator
pub fn marker_mesh() -> SphereMesh { SphereMesh::new(Point3::ZERO, MARKER_RADIUS) }
