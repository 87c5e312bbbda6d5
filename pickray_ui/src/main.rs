use crate::app::PickRayApp;
use crate::backend::eframe::EframeBackend;
use crate::backend::{UiApp as _, UiBackend};
use crate::targets::MAIN;
use crate::ui_val::APP_NAME;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod backend;
mod ext;
mod targets;
mod ui_val;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(target: MAIN, "starting {APP_NAME}");

    let backend: Box<dyn UiBackend> = Box::new(EframeBackend);
    backend.run(APP_NAME, PickRayApp::ctor())?;

    info!(target: MAIN, "exiting");
    Ok(())
}
