use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};
use valuable::Valuable;

/// Which intersection test is used when clicking on the pick target
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Valuable, EnumIter, IntoStaticStr, Display,
)]
pub enum RaycastMode {
    /// Test against the target's oriented bounding box
    #[default]
    Box,
    /// Test against the target's bounding sphere
    Sphere,
    /// Test against every triangle of the target
    Mesh,
}

/// Which bounding volume of the pick target is displayed
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Valuable, EnumIter, IntoStaticStr, Display,
)]
pub enum BoundingVolumeMode {
    #[default]
    None,
    Box,
    Sphere,
}

/// The user-selectable options for picking.
///
/// This is read at the moment of each click, so changing it never has any immediate effect on the indicators.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Valuable)]
pub struct PickSettings {
    pub bounds: BoundingVolumeMode,
    pub raycast: RaycastMode,
}
