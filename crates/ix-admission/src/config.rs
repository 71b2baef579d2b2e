//! Construction-time configuration for one conflict zone.

use ix_core::Point3;

/// Fraction of the approach radius a vehicle must put between itself and the
/// zone center before an exit counts as clearance.
///
/// Entry detection uses the full approach radius; exit detection uses
/// `approach_radius * EXIT_HYSTERESIS`.  The gap between the two thresholds
/// is a dead zone that stops a vehicle jittering near the box boundary from
/// flapping between "occupying" and "cleared".
pub const EXIT_HYSTERESIS: f32 = 0.75;

/// Geometry and capacity of one intersection conflict zone.
///
/// Fixed at scheduler construction.  Defaults match a mid-size urban
/// junction: vehicles are tracked from 25 m out, the contended box is
/// 16 m × 16 m, and exactly one vehicle may hold permission at a time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoneConfig {
    /// World position of the zone center.
    pub center: Point3,

    /// Vehicles closer than this to `center` are tracked as candidates.
    pub approach_radius: f32,

    /// Half-extent of the axis-aligned conflict box on the x/y axes.
    pub box_half_extent: f32,

    /// How many vehicles may hold permission concurrently.  Values below 1
    /// are treated as 1 (see [`ZoneConfig::slots`]).  Anything above 1 is
    /// only safe if the zone is understood to be partitioned by direction
    /// of travel.
    pub max_active: usize,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            center:          Point3::default(),
            approach_radius: 25.0,
            box_half_extent: 8.0,
            max_active:      1,
        }
    }
}

impl ZoneConfig {
    /// A default-sized zone centred at `center`.
    pub fn new(center: Point3) -> Self {
        Self { center, ..Self::default() }
    }

    pub fn with_approach_radius(mut self, radius: f32) -> Self {
        self.approach_radius = radius;
        self
    }

    pub fn with_box_half_extent(mut self, half_extent: f32) -> Self {
        self.box_half_extent = half_extent;
        self
    }

    pub fn with_max_active(mut self, max_active: usize) -> Self {
        self.max_active = max_active;
        self
    }

    /// Effective concurrency limit: `max_active` silently clamped to ≥ 1.
    ///
    /// A zone that can admit nobody would deadlock every approach, so the
    /// permissive reading wins over strict validation here.
    #[inline]
    pub fn slots(&self) -> usize {
        self.max_active.max(1)
    }

    /// The reduced radius used for exit detection.
    #[inline]
    pub fn exit_radius(&self) -> f32 {
        self.approach_radius * EXIT_HYSTERESIS
    }
}
