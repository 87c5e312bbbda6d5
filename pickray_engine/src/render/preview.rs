use crate::core::targets::RENDER;
use crate::core::types::{Colour, Image, Number, Point2};
use crate::mesh::{Mesh, MeshInstance};
use crate::pick::indicators::{self, Indicators, LINE_COLOUR, MARKER_COLOUR};
use crate::pick::settings::RaycastMode;
use crate::render::render::{Render, RenderStats};
use crate::render::render_opts::PreviewOpts;
use crate::scene::camera::Viewport;
use crate::scene::entity::Entity;
use crate::scene::PickScene;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::transform::ObjectTransform;
use puffin::{profile_function, profile_scope};
use std::time::Instant;
use tracing::{debug, trace};

/// An unlit object in the preview, drawn with a flat colour
#[derive(Clone, Debug)]
struct FlatObject {
    mesh: MeshInstance,
    transform: ObjectTransform,
    colour: Colour,
}

impl FlatObject {
    /// Creates an object for the entity, if it is visible and can actually be drawn
    fn for_entity(entity: Entity, mesh: impl Into<MeshInstance>, colour: Colour) -> Option<Self> {
        if !entity.visible {
            return None;
        }
        if !entity.transform.is_invertible() {
            trace!(target: RENDER, ?entity, "skipping entity with degenerate transform");
            return None;
        }
        Some(Self {
            mesh: mesh.into(),
            transform: entity.transform.object_transform(),
            colour,
        })
    }

    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        // Distances along the local ray are scaled, so the interval can only be checked once back in the world
        let local_hit = self.mesh.intersect(&self.transform.incoming_ray(ray), &Interval::FORWARD)?;
        let hit = self.transform.outgoing_intersection(ray, local_hit);
        interval.contains(&hit.dist).then_some(hit)
    }
}

/// Ray-casts a small preview image of the scene, as seen through the scene's camera.
///
/// The sky, ground and indicators are unlit; the pick target is lit by the scene's light
pub fn render_preview(scene: &PickScene, indicators: &Indicators, opts: &PreviewOpts) -> Render<Image> {
    profile_function!();

    let start = Instant::now();
    let (width, height) = (opts.width.get(), opts.height.get());

    let viewport = match (scene.camera.validate(), Viewport::new(width as Number, height as Number)) {
        (Ok(()), Ok(v)) => v,
        (Err(err), _) | (_, Err(err)) => {
            debug!(target: RENDER, ?err, "couldn't render preview");
            return Render {
                img: Image::new_filled(width, height, Colour::BLACK),
                stats: RenderStats {
                    duration: start.elapsed(),
                    num_px: 0,
                },
            };
        }
    };

    let objects = {
        profile_scope!("collect_objects");
        let ground = FlatObject {
            mesh: scene.ground.mesh.into(),
            transform: ObjectTransform::IDENTITY,
            colour: scene.ground.colour,
        };
        [
            Some(ground),
            FlatObject::for_entity(indicators.line(), indicators::line_mesh(), LINE_COLOUR),
            FlatObject::for_entity(indicators.marker(), indicators::marker_mesh(), MARKER_COLOUR),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
    };

    let interval = Interval::from(scene.camera.near..=scene.camera.far);
    let aspect = viewport.aspect();

    let img = {
        profile_scope!("render_pixels");
        Image::from_fn(width, height, |x, y| {
            let px = Point2::new(x as Number + 0.5, y as Number + 0.5);
            let ray = scene.camera.ray_through_ndc(viewport.to_ndc(px), aspect);
            render_px(scene, &objects, &ray, &interval)
        })
    };

    let stats = RenderStats {
        duration: start.elapsed(),
        num_px: img.len(),
    };
    debug!(target: RENDER, width, height, objects = objects.len(), duration = ?stats.duration, "rendered preview");
    Render { img, stats }
}

/// Finds the closest surface along the ray and shades it
fn render_px(scene: &PickScene, objects: &[FlatObject], ray: &Ray, interval: &Interval<Number>) -> Colour {
    let target_hit = scene
        .target
        .raycast(ray, RaycastMode::Mesh)
        .filter(|hit| interval.contains(&hit.dist))
        .map(|hit| {
            let colour = scene.shade_lambert(scene.target.colour(), hit.pos_w, hit.normal);
            (hit, colour)
        });

    let flat_hits = objects
        .iter()
        .filter_map(|obj| obj.intersect(ray, interval).map(|hit| (hit, obj.colour)));

    target_hit
        .into_iter()
        .chain(flat_hits)
        .min_by(|(a, _), (b, _)| Intersection::cmp_dist(a, b))
        .map_or(scene.sky, |(_, colour)| colour)
}
