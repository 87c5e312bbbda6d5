pub mod img_ext;
pub mod ui_ext;
