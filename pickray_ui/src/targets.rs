//! Internal module containing targets for the [tracing] crate

pickray_engine::tracing_targets! {
    MAIN = "main",
    UI = "ui",
}
