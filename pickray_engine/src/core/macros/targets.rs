//! Log target definitions for the [`tracing`] crate, used in macros like [`tracing::info`]
//!
//! Each target is prefixed with the name of the crate that invokes the macro, e.g. `pickray_engine::pick`

#[macro_export]
macro_rules! tracing_targets {
    {$( $name:ident $(=$val:expr)? ),* $(,)?} => {
        $( $crate::tracing_targets!(@value $name $(=$val)? ); )*
    };

    (@value $name:ident = $val:expr) => {pub const $name: &str = concat!(env!("CARGO_PKG_NAME"), "::", $val);};
    (@value $name:ident)             => {$crate::tracing_targets!($name = stringify!($name));};
}
