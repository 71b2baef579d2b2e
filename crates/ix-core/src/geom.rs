//! Cartesian position type and the ground-plane containment check.
//!
//! `Point3` uses `f32` world coordinates in metres (the resolution a driving
//! simulator reports).  Distances are full 3-D Euclidean; the conflict-zone
//! containment check deliberately ignores the vertical axis because the zone
//! models a patch of road surface, not a volume.

/// A position in world space, metres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in metres, all three axes.
    #[inline]
    pub fn distance_to(self, other: Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// `true` iff this point lies within the axis-aligned square of
    /// half-extent `half_extent` centred on `center`, on the x/y plane.
    ///
    /// The z axis is ignored: the box is a patch of ground, and a vehicle on
    /// an overpass crossing "above" the zone is out of scope for this model.
    /// Boundary-inclusive on both axes.
    #[inline]
    pub fn within_box_xy(self, center: Point3, half_extent: f32) -> bool {
        (self.x - center.x).abs() <= half_extent
            && (self.y - center.y).abs() <= half_extent
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
