use egui::{Color32, ColorImage};
use pickray_engine::core::types::*;
use puffin::{profile_function, profile_scope};
use std::ops::DerefMut as _;

pub trait ImageExt {
    /// Converts the image outputted by the renderer into an egui-appropriate one.
    /// Also converts from linear space to SRGB space
    fn to_egui(self) -> ColorImage;
}

impl ImageExt for Image {
    fn to_egui(mut self) -> ColorImage {
        profile_function!();

        {
            profile_scope!("correct_gamma");
            const GAMMA: Channel = 2.2;
            const INV_GAMMA: Channel = 1.0 / GAMMA;

            // Gamma correction is per-channel, not per-pixel
            self.deref_mut()
                .iter_mut()
                .for_each(|px| *px = px.map(|c| c.clamp(0., 1.).powf(INV_GAMMA)));
        }

        let mut output = ColorImage {
            size: [self.width(), self.height()],
            pixels: vec![Color32::default(); self.len()],
        };

        {
            profile_scope!("convert_channels_u8");
            self.indexed_iter().for_each(|((x, y), col)| {
                let [r, g, b] = col.0.map(|c| (c * 255.0) as u8);
                output[(x, y)] = Color32::from_rgb(r, g, b)
            });
        };

        output
    }
}
