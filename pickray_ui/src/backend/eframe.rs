use crate::backend::{App, AppCtor, UiBackend};
use crate::targets::MAIN;
use anyhow::anyhow;
use eframe::Theme;
use egui::ViewportBuilder;
use std::error::Error;
use tracing::debug;
use valuable::Valuable;

#[derive(Debug, Copy, Clone, Valuable)]
pub struct EframeBackend;

impl UiBackend for EframeBackend {
    fn run(self: Box<Self>, app_name: &str, app_ctor: AppCtor) -> anyhow::Result<()> {
        debug!(target: MAIN, backend = ?self, app_name, "running ui backend");

        eframe::run_native(
            app_name,
            eframe::NativeOptions {
                run_and_return: true,
                default_theme: Theme::Dark,
                viewport: ViewportBuilder::default()
                    .with_min_inner_size([300.0, 220.0])
                    .with_inner_size([1280.0, 720.0])
                    .with_app_id(app_name),
                centered: true,

                ..Default::default()
            },
            // Called by `eframe` once the window is ready, to initialise the app
            Box::new(move |ctx: &eframe::CreationContext| -> Result<Box<dyn eframe::App>, Box<dyn Error + Send + Sync>> {
                let box_app = app_ctor(&ctx.egui_ctx)?;
                // Box<dyn App> implements eframe::App
                Ok(Box::new(box_app) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| anyhow!("failed running eframe: {e:#?}"))?;

        Ok(())
    }
}

impl eframe::App for Box<dyn App> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) { self.on_update(ctx); }

    fn on_exit(&mut self, _glow: Option<&eframe::glow::Context>) { self.on_shutdown(); }
}
