//! Separates the app from the windowing library that actually runs it

use egui::Context;

pub mod eframe;

/// Type for a (boxed) closure that returns a (boxed) app instance
pub type AppCtor = Box<dyn FnOnce(&Context) -> anyhow::Result<Box<dyn App>> + 'static>;

/// A trait representing an initialised application that is running
pub trait App: 'static {
    /// Called once each frame, this is where the UI is drawn
    fn on_update(&mut self, ctx: &Context);
    /// Called when the app is being shut down
    fn on_shutdown(&mut self);
}

/// An app that can be created given the UI context
pub trait UiApp: App + Sized {
    fn new(ctx: &Context) -> anyhow::Result<Self>;

    /// Returns an [AppCtor] that creates the app
    fn ctor() -> AppCtor { Box::new(|ctx| Ok(Box::new(Self::new(ctx)?) as Box<dyn App>)) }
}

/// A trait that represents a type that can be used as a backend for the UI
pub trait UiBackend {
    /// Runs the UI until the app is closed, consuming the backend in the process
    fn run(self: Box<Self>, app_name: &str, app_ctor: AppCtor) -> anyhow::Result<()>;
}
