use crate::core::types::Channel;
use std::ops::{Add, Mul};

#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
#[repr(transparent)]
pub struct Colour<const N: usize>(pub [Channel; N]);

pub type ColourRgb = Colour<3>;

impl<const N: usize> Colour<N> {
    /// How many channels there are, for this colour.
    /// RGB is 3 channels.
    pub const CHANNEL_COUNT: usize = N;

    pub const BLACK: Self = Self::new([0.; N]);
    pub const WHITE: Self = Self::new([1.; N]);

    pub const fn new(val: [Channel; N]) -> Self { Self(val) }

    /// Applies the function to each channel, returning the new colour
    pub fn map(self, func: impl FnMut(Channel) -> Channel) -> Self { Self(self.0.map(func)) }
}

impl<const N: usize> Default for Colour<N> {
    fn default() -> Self { Self::BLACK }
}

impl From<(Channel, Channel, Channel)> for ColourRgb {
    fn from((r, g, b): (Channel, Channel, Channel)) -> Self { Self::new([r, g, b]) }
}

impl<const N: usize> From<[Channel; N]> for Colour<N> {
    fn from(val: [Channel; N]) -> Self { Self::new(val) }
}

// region Ops

impl<const N: usize> Add for Colour<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self;
        out.0.iter_mut().zip(rhs.0).for_each(|(a, b)| *a += b);
        out
    }
}

impl<const N: usize> Mul for Colour<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = self;
        out.0.iter_mut().zip(rhs.0).for_each(|(a, b)| *a *= b);
        out
    }
}

impl<const N: usize> Mul<Channel> for Colour<N> {
    type Output = Self;
    fn mul(self, rhs: Channel) -> Self::Output { self.map(|c| c * rhs) }
}

// endregion Ops
