//! Module containing UI extension traits

use crate::ui_val::*;
use egui::{Response, Widget};
use pickray_engine::core::types::{Angle, Number, Vector3};

pub trait UiExt {
    fn edit_vec3(&mut self, vec: &mut Vector3, suffix: &str, speed: f64) -> Response;
    fn edit_number(&mut self, val: &mut Number, suffix: &str, speed: f64) -> Response;
    fn edit_angle(&mut self, val: &mut Angle, range: (Number, Number)) -> Response;

    fn fill_available_width(&mut self);
}

impl UiExt for egui::Ui {
    fn edit_vec3(&mut self, vec: &mut Vector3, suffix: &str, speed: f64) -> Response {
        self.columns(3, |cols| {
            let x = egui::DragValue::new(&mut vec.x)
                .suffix(suffix)
                .speed(speed)
                .ui(&mut cols[0]);
            let y = egui::DragValue::new(&mut vec.y)
                .suffix(suffix)
                .speed(speed)
                .ui(&mut cols[1]);
            let z = egui::DragValue::new(&mut vec.z)
                .suffix(suffix)
                .speed(speed)
                .ui(&mut cols[2]);

            x | y | z
        })
    }

    fn edit_number(&mut self, val: &mut Number, suffix: &str, speed: f64) -> Response {
        egui::DragValue::new(val).suffix(suffix).speed(speed).ui(self)
    }

    fn edit_angle(&mut self, val: &mut Angle, range: (Number, Number)) -> Response {
        egui::Slider::from_get_set(range.0..=range.1, |o| {
            if let Some(angle) = o {
                *val = Angle::from_degrees(angle);
            }
            val.to_degrees()
        })
        .suffix(UNIT_DEG)
        .min_decimals(1)
        .ui(self)
    }

    fn fill_available_width(&mut self) { self.allocate_space(egui::Vec2::new(self.available_width(), 0.0)); }
}
