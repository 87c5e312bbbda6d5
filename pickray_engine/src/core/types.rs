use crate::core::colour::ColourRgb;

/// Numeric type used for colour calculations in the engine
pub type Channel = f32;
pub type Colour = ColourRgb;
pub type Image = crate::core::image::Image<Colour>;

/// Numeric type used for most calculations in the engine
pub type Number = f64;
pub type Vector3 = glam::DVec3;
pub type Point2 = glam::DVec2;
pub type Point3 = glam::DVec3;
pub type Quaternion = glam::DQuat;
pub type Matrix3 = glam::DMat3;
pub type Transform3 = glam::DAffine3;

/// An angle, stored in radians
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Angle {
    pub radians: Number,
}

impl Angle {
    pub const fn from_radians(radians: Number) -> Self { Self { radians } }
    pub fn from_degrees(degrees: Number) -> Self { Self::from_radians(degrees.to_radians()) }
    pub fn to_degrees(self) -> Number { self.radians.to_degrees() }
    pub fn tan(self) -> Number { self.radians.tan() }
}

impl std::ops::Div<Number> for Angle {
    type Output = Angle;
    fn div(self, rhs: Number) -> Self::Output { Self::from_radians(self.radians / rhs) }
}

impl std::ops::AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) { self.radians += rhs.radians; }
}
