use crate::backend::{App, UiApp};
use crate::ext::img_ext::ImageExt as _;
use crate::ext::ui_ext::UiExt as _;
use crate::targets::*;
use crate::ui_val::*;
use egui::load::SizedTexture;
use egui::{
    Checkbox, ColorImage, Context, CursorIcon, Grid, Key, PointerButton, Rect, Sense, Stroke, TextureFilter,
    TextureHandle, TextureOptions, Ui, Widget,
};
use pickray_engine::core::types::*;
use pickray_engine::pick::settings::{BoundingVolumeMode, PickSettings, RaycastMode};
use pickray_engine::pick::{MouseButton, MouseDown, PickDispatcher, PickOutcome};
use pickray_engine::render::preview;
use pickray_engine::render::render::RenderStats;
use pickray_engine::render::render_opts::PreviewOpts;
use pickray_engine::scene::camera::{Camera, Viewport};
use pickray_engine::scene::PickScene;
use puffin::{profile_function, profile_scope};
use strum::IntoEnumIterator;
use tracing::{debug, info, trace, warn};

/// Mouse buttons that are forwarded to the pick dispatcher, and the button index each one is reported as
const FORWARDED_BUTTONS: [(PointerButton, MouseButton); 5] = [
    (PointerButton::Primary, MouseButton::PRIMARY),
    (PointerButton::Middle, MouseButton::MIDDLE),
    (PointerButton::Secondary, MouseButton::SECONDARY),
    (PointerButton::Extra1, MouseButton(3)),
    (PointerButton::Extra2, MouseButton(4)),
];

pub struct PickRayApp {
    // Engine things
    scene: PickScene,
    settings: PickSettings,
    dispatcher: PickDispatcher,
    /// Result of the most recent click that wasn't ignored
    last_outcome: Option<PickOutcome>,

    // Display things
    /// A handle to the texture that holds the current preview render
    preview_tex: TextureHandle,
    preview_tex_options: TextureOptions,
    preview_opts: PreviewOpts,
    preview_stats: RenderStats,
    /// Set when anything visible in the preview changed, so it needs to be rendered again
    dirty_preview: bool,
}

impl UiApp for PickRayApp {
    /// Creates a new app instance, with an [`Context`] for configuring the app
    fn new(ctx: &Context) -> anyhow::Result<Self> {
        info!(target: MAIN, "ui app init");

        trace!(target: MAIN, "assembling scene");
        let scene = PickScene::assemble()?;

        trace!(target: MAIN, "creating preview texture");
        let preview_tex_options = TextureOptions {
            magnification: TextureFilter::Nearest,
            ..TextureOptions::LINEAR
        };
        let preview_tex = ctx.load_texture(
            // Tiny and invisible until the first preview is rendered
            "PickRayApp::preview_texture",
            ColorImage::new([1, 1], egui::Color32::TRANSPARENT),
            preview_tex_options,
        );

        Ok(Self {
            scene,
            settings: PickSettings::default(),
            dispatcher: PickDispatcher::new(),
            last_outcome: None,

            preview_tex,
            preview_tex_options,
            preview_opts: PreviewOpts::default(),
            preview_stats: RenderStats::default(),
            dirty_preview: true,
        })
    }
}

impl App for PickRayApp {
    fn on_update(&mut self, ctx: &Context) {
        profile_function!();

        let mut dirty_camera = false;

        {
            profile_scope!("panel/left");
            egui::SidePanel::left("left_panel").show(ctx, |ui| {
                Self::show_app_options(ui);
                Self::show_pick_settings(ui, &mut self.settings, &mut self.scene);
                Self::show_camera_options(ui, &mut self.scene.camera, &mut dirty_camera);
                Self::show_pick_result(ui, self.last_outcome.as_ref());
                Self::show_render_stats(ui, self.preview_opts, self.preview_stats);
            });
        }

        // Central panel contains the viewport, must come after all other panels
        {
            profile_scope!("panel/central");
            egui::CentralPanel::default().show(ctx, |ui| {
                self.show_viewport(ctx, ui, &mut dirty_camera);
            });
        }

        self.dirty_preview |= dirty_camera;
        if self.dirty_preview {
            self.update_preview();
        }

        // Continuously update UI, so held keys keep moving the camera
        ctx.request_repaint();
    }

    fn on_shutdown(&mut self) { info!(target: MAIN, "ui app shutdown") }
}

/// Implementation for the UI code
impl PickRayApp {
    fn show_app_options(ui: &mut Ui) {
        profile_function!();

        ui.group(|ui| {
            ui.heading("Options");

            Grid::new("grid_app_options").show(ui, |ui| {
                ui.label("Profiling");
                let mut profiling = puffin::are_scopes_on();
                if Checkbox::without_text(&mut profiling).ui(ui).changed() {
                    puffin::set_scopes_on(profiling);
                }
                ui.end_row();
            });

            ui.fill_available_width();
        });
    }

    /// Shows the two pick settings.
    ///
    /// Changing the bounds updates the overlay straight away; the raycast mode is only used on the next click.
    fn show_pick_settings(ui: &mut Ui, settings: &mut PickSettings, scene: &mut PickScene) {
        profile_function!();

        ui.group(|ui| {
            ui.heading("Settings");

            Grid::new("grid_pick_settings").show(ui, |ui| {
                ui.label("Bounds");
                let mut bounds_changed = false;
                egui::ComboBox::from_id_source("dropdown_bounds")
                    .selected_text(<&'static str>::from(settings.bounds))
                    .show_ui(ui, |ui| {
                        for variant in BoundingVolumeMode::iter() {
                            bounds_changed |= ui
                                .selectable_value(&mut settings.bounds, variant, <&'static str>::from(variant))
                                .changed();
                        }
                    });
                if bounds_changed {
                    debug!(target: UI, bounds = ?settings.bounds, "bounds changed");
                    scene.overlay.apply_mode(settings.bounds);
                }
                ui.end_row();

                ui.label("Raycast");
                egui::ComboBox::from_id_source("dropdown_raycast")
                    .selected_text(<&'static str>::from(settings.raycast))
                    .show_ui(ui, |ui| {
                        for variant in RaycastMode::iter() {
                            if ui
                                .selectable_value(&mut settings.raycast, variant, <&'static str>::from(variant))
                                .changed()
                            {
                                debug!(target: UI, raycast = ?variant, "raycast mode changed");
                            }
                        }
                    });
                ui.end_row();
            });

            ui.fill_available_width();
        });
    }

    fn show_camera_options(ui: &mut Ui, camera: &mut Camera, dirty_camera: &mut bool) {
        profile_function!();

        ui.group(|ui| {
            ui.heading("Camera");

            Grid::new("grid_camera").show(ui, |ui| {
                ui.label("Position");
                *dirty_camera |= ui.edit_vec3(&mut camera.pos, UNIT_LEN, DRAG_SPEED_LEN).changed();
                ui.end_row();
                ui.label("Forward");
                *dirty_camera |= ui.edit_vec3(&mut camera.fwd, "", DRAG_SPEED_LEN).changed();
                ui.end_row();
                ui.label("FOV");
                *dirty_camera |= ui.edit_angle(&mut camera.v_fov, FOV_RANGE).changed();
                ui.end_row();
                ui.label("Near");
                *dirty_camera |= ui.edit_number(&mut camera.near, UNIT_LEN, DRAG_SPEED_LEN).changed();
                ui.end_row();
                ui.label("Far");
                *dirty_camera |= ui.edit_number(&mut camera.far, UNIT_LEN, DRAG_SPEED_LEN).changed();
                ui.end_row();
            });

            ui.fill_available_width();
        });
    }

    fn show_pick_result(ui: &mut Ui, outcome: Option<&PickOutcome>) {
        profile_function!();

        let fmt_point = |p: Point3| format!("{:.3}, {:.3}, {:.3}", p.x, p.y, p.z);

        ui.group(|ui| {
            ui.heading("Pick");

            Grid::new("grid_pick").show(ui, |ui| {
                ui.label("Hit");
                let (hit, point) = match outcome {
                    None => ("<Click the scene>".to_owned(), None),
                    Some(PickOutcome::Target { intersection, mode }) => (format!("Target ({mode})"), Some(intersection.pos_w)),
                    Some(PickOutcome::Ground { point }) => ("Ground".to_owned(), Some(*point)),
                    Some(PickOutcome::Miss) | Some(PickOutcome::Ignored) => ("Nothing".to_owned(), None),
                };
                ui.label(hit);
                ui.end_row();
                ui.label("Point");
                ui.label(point.map_or_else(|| "-".to_owned(), fmt_point));
                ui.end_row();
            });

            ui.fill_available_width();
        });
    }

    /// Displays the render stats
    fn show_render_stats(ui: &mut Ui, opts: PreviewOpts, stats: RenderStats) {
        profile_function!();

        ui.group(|ui| {
            ui.heading("Stats");

            Grid::new("grid_stats").show(ui, |ui| {
                ui.label("Width");
                ui.label(opts.width.get().to_string());
                ui.end_row();
                ui.label("Height");
                ui.label(opts.height.get().to_string());
                ui.end_row();
                ui.label("Pixels");
                ui.label(stats.num_px.to_string());
                ui.end_row();
                ui.label("Duration");
                ui.label(humantime::format_duration(stats.duration).to_string());
                ui.end_row();
            });

            ui.fill_available_width();
        });
    }

    /// Displays the preview in the UI, processing any user input for picking and the camera.
    ///
    /// # Controls
    /// - Primary button: pick
    /// - Secondary button: drag to rotate, and hold to move with `W/A/S/D/Space/C`
    fn show_viewport(&mut self, ctx: &Context, ui: &mut Ui, dirty_camera: &mut bool) {
        profile_function!();

        // Fill entire available space
        let avail_space = ui.available_size();
        let img_resp = egui::Image::new(SizedTexture::new(self.preview_tex.id(), avail_space))
            .sense(Sense::click_and_drag())
            .ui(ui);
        let rect = img_resp.rect;

        let Ok(viewport) = Viewport::new(rect.width() as Number, rect.height() as Number) else {
            trace!(target: UI, ?rect, "viewport has no area");
            return;
        };

        // Keep the preview at a fixed fraction of the on-screen size
        let opts = PreviewOpts::clamped(
            (rect.width() * PREVIEW_SCALE) as usize,
            (rect.height() * PREVIEW_SCALE) as usize,
        );
        if opts != self.preview_opts {
            self.preview_opts = opts;
            self.dirty_preview = true;
        }

        let secondary_down = img_resp.is_pointer_button_down_on() && ui.input(|i| i.pointer.secondary_down());
        ctx.set_cursor_icon(if secondary_down {
            CursorIcon::Grabbing
        } else if img_resp.hovered() {
            CursorIcon::Crosshair
        } else {
            CursorIcon::Default
        });

        if img_resp.hovered() {
            self.process_clicks(ui, rect, viewport);
        }

        // Speed multiplier to change how fast we move/rotate
        let mut speed_mult = 1.;
        if ui.input(|i| i.modifiers.shift) {
            speed_mult *= SPEED_MODIFIER;
        };
        if ui.input(|i| i.modifiers.alt) {
            speed_mult /= SPEED_MODIFIER;
        };
        let dt = ui.input(|i| i.stable_dt as Number);
        let camera = &mut self.scene.camera;

        // Rotate when dragged
        if img_resp.dragged_by(PointerButton::Secondary) {
            let delta = img_resp.drag_delta();
            let scale = speed_mult * dt * ROTATE_SPEED;
            let yaw = -delta.x as Number * scale;
            let pitch = -delta.y as Number * scale;

            if yaw != 0. || pitch != 0. {
                match camera.apply_rot_delta(Angle::from_degrees(yaw), Angle::from_degrees(pitch)) {
                    Ok(()) => *dirty_camera = true,
                    Err(err) => warn!(target: UI, ?err, "couldn't rotate camera"),
                }
            }
        }

        // Also detect key presses (movement) if the secondary button is held
        if secondary_down {
            let key = |k: Key| ui.input(|i| i.key_down(k)) as u8 as Number;
            let mut pos = Vector3::new(key(Key::D) - key(Key::A), key(Key::Space) - key(Key::C), key(Key::W) - key(Key::S));
            pos *= speed_mult * dt * MOVE_SPEED;

            if pos != Vector3::ZERO {
                let [right_left, up_down, fwd_back] = pos.to_array();
                camera.apply_pos_delta(fwd_back, right_left, up_down);
                *dirty_camera = true;
            }
        }

        Self::paint_overlay(ui, rect, viewport, &self.scene);
    }

    /// Forwards any mouse buttons pressed over the viewport on to the dispatcher
    fn process_clicks(&mut self, ui: &Ui, rect: Rect, viewport: Viewport) {
        profile_function!();

        let Some(origin) = ui.input(|i| i.pointer.press_origin()) else {
            return;
        };
        if !rect.contains(origin) {
            return;
        }

        for (pointer, button) in FORWARDED_BUTTONS {
            if !ui.input(|i| i.pointer.button_pressed(pointer)) {
                continue;
            }

            let local = origin - rect.min;
            let event = MouseDown {
                pos: Point2::new(local.x as Number, local.y as Number),
                button,
            };
            let outcome = self.dispatcher.on_mouse_down(
                &event,
                &self.scene.camera,
                viewport,
                &self.scene.target,
                &self.settings,
            );

            if outcome != PickOutcome::Ignored {
                info!(target: UI, pos = ?event.pos, hit = ?outcome.point(), "picked");
                self.last_outcome = Some(outcome);
                self.dirty_preview = true;
            }
        }
    }

    /// Draws the bounding volume overlay on top of the preview
    fn paint_overlay(ui: &Ui, rect: Rect, viewport: Viewport, scene: &PickScene) {
        profile_function!();

        let segments = scene.overlay.wireframe(&scene.target);
        if segments.is_empty() {
            return;
        }

        let painter = ui.painter_at(rect);
        let stroke = Stroke::new(OVERLAY_STROKE.0, OVERLAY_STROKE.1);
        let to_screen = |world: Point3| {
            let ndc = scene.camera.project(world, viewport.aspect())?;
            let px = viewport.to_screen(ndc);
            Some(rect.min + egui::vec2(px.x as f32, px.y as f32))
        };

        for (a, b) in segments {
            // Anything behind the near plane can't be projected, so just skip that edge
            if let (Some(a), Some(b)) = (to_screen(a), to_screen(b)) {
                painter.line_segment([a, b], stroke);
            }
        }
    }
}

/// Preview-related functions
impl PickRayApp {
    /// Renders the scene again, and uploads it to the preview texture
    fn update_preview(&mut self) {
        profile_function!();

        let render = preview::render_preview(&self.scene, self.dispatcher.indicators(), &self.preview_opts);
        trace!(target: UI, stats = ?render.stats, "rendered new preview");

        {
            profile_scope!("update_tex");
            self.preview_tex.set(render.img.to_egui(), self.preview_tex_options);
        }

        self.preview_stats = render.stats;
        self.dirty_preview = false;
    }
}
