//! Vertical slice inclusion for the rotating scan display.
//!
//! The line-of-sight system divides the world into horizontal slices
//! ("floors"), indexed bottom-to-top. The scan normally draws only the slice
//! the player stands in; script-configured ranges widen that to a span of
//! slices shown together (stairwells, atriums).

use heapless::Vec;
use log::debug;

use crate::host::GameWorld;

/// Configured floor ranges cap.
pub const MAX_FLOOR_RANGES: usize = 8;
/// Widest slice span a range may resolve to.
pub const MAX_INCLUDED_SLICES: usize = 10;

/// One contiguous vertical band of the world. Bottom inclusive, top exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub bottom: f32,
    pub top: f32,
}

/// A configured span of slice indices displayed together.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FloorRange {
    pub lower: u8,
    pub upper: u8,
}

/// Resolves which slices the scan must include for the current player height.
#[derive(Debug, Default)]
pub struct FloorResolver {
    configured: Vec<FloorRange, MAX_FLOOR_RANGES>,
    included: Vec<u8, MAX_INCLUDED_SLICES>,
    floor_y: f32,
    ceiling_y: f32,
}

impl FloorResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a configured range. `upper` is clamped to `last_slice`; a
    /// range that ends up with `upper <= lower` is silently dropped.
    pub fn add_range(&mut self, lower: u8, upper: u8, last_slice: u8) {
        let upper = upper.min(last_slice);
        if upper <= lower {
            return;
        }

        let span = (upper - lower) as usize + 1;
        assert!(
            span <= MAX_INCLUDED_SLICES,
            "floor range {lower}..={upper} spans {span} slices, limit {MAX_INCLUDED_SLICES}"
        );

        if self.configured.push(FloorRange { lower, upper }).is_err() {
            panic!("floor range table full ({MAX_FLOOR_RANGES} entries)");
        }
    }

    pub fn reset(&mut self) {
        self.configured.clear();
        self.included.clear();
    }

    pub fn range_count(&self) -> usize {
        self.configured.len()
    }

    /// Slice indices the scan must draw, in ascending order. Empty until the
    /// first [`resolve`](Self::resolve).
    pub fn included(&self) -> &[u8] {
        &self.included
    }

    /// Absolute bottom of the first included slice.
    pub fn floor_y(&self) -> f32 {
        self.floor_y
    }

    /// Absolute top of the last included slice.
    pub fn ceiling_y(&self) -> f32 {
        self.ceiling_y
    }

    /// Recomputes the included set for the player's current height. Run once
    /// per activation.
    ///
    /// The containing slice is the highest-indexed slice whose `[bottom, top)`
    /// interval holds `player_y`; the first configured range holding that
    /// slice wins and expands to its full span.
    pub fn resolve(&mut self, player_y: f32, world: &impl GameWorld) {
        self.included.clear();
        self.floor_y = 0.0;
        self.ceiling_y = 0.0;

        let count = world.slice_count();
        if count == 0 {
            debug!("floor resolve skipped: world has no slices");
            return;
        }

        let mut containing = 0usize;
        let mut found = false;
        for index in 0..count {
            let slice = world.slice(index);
            if slice.bottom <= player_y && player_y < slice.top {
                // Last match wins on overlapping slices.
                containing = index;
                found = true;
            }
        }
        if !found {
            debug!("no slice contains height {player_y}; defaulting to slice 0");
        }

        let containing = containing.min(u8::MAX as usize) as u8;
        let winner = self
            .configured
            .iter()
            .copied()
            .find(|range| range.lower <= containing && containing <= range.upper);

        match winner {
            Some(range) => {
                for index in range.lower..=range.upper {
                    if self.included.push(index).is_err() {
                        break;
                    }
                }
            }
            None => {
                let _ = self.included.push(containing);
            }
        }

        if let (Some(&first), Some(&last)) = (self.included.first(), self.included.last()) {
            self.floor_y = world.slice(first as usize).bottom;
            self.ceiling_y = world.slice(last as usize).top;
        }

        debug!(
            "floor resolve: height {player_y} -> slice {containing}, {} included",
            self.included.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PlayerPos;

    struct TowerWorld {
        slices: &'static [Slice],
    }

    impl GameWorld for TowerWorld {
        fn player_position(&self) -> PlayerPos {
            PlayerPos {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                pan: 0,
            }
        }

        fn slice_count(&self) -> usize {
            self.slices.len()
        }

        fn slice(&self, index: usize) -> Slice {
            self.slices[index]
        }
    }

    const FOUR_FLOORS: [Slice; 4] = [
        Slice { bottom: 0.0, top: 300.0 },
        Slice { bottom: 300.0, top: 600.0 },
        Slice { bottom: 600.0, top: 900.0 },
        Slice { bottom: 900.0, top: 1200.0 },
    ];

    fn tower() -> TowerWorld {
        TowerWorld {
            slices: &FOUR_FLOORS,
        }
    }

    #[test]
    fn unconfigured_height_resolves_to_exactly_its_slice() {
        let mut floors = FloorResolver::new();
        floors.resolve(650.0, &tower());
        assert_eq!(floors.included(), &[2]);
        assert_eq!(floors.floor_y(), 600.0);
        assert_eq!(floors.ceiling_y(), 900.0);
    }

    #[test]
    fn inverted_range_is_silently_dropped() {
        let mut floors = FloorResolver::new();
        floors.add_range(5, 3, 9);
        assert_eq!(floors.range_count(), 0);
    }

    #[test]
    fn upper_is_clamped_to_the_last_slice() {
        let mut floors = FloorResolver::new();
        floors.add_range(1, 200, 3);
        floors.resolve(350.0, &tower());
        assert_eq!(floors.included(), &[1, 2, 3]);
        assert_eq!(floors.floor_y(), 300.0);
        assert_eq!(floors.ceiling_y(), 1200.0);
    }

    #[test]
    fn first_configured_range_wins() {
        let mut floors = FloorResolver::new();
        floors.add_range(0, 1, 3);
        floors.add_range(0, 3, 3);
        floors.resolve(100.0, &tower());
        assert_eq!(floors.included(), &[0, 1]);
    }

    #[test]
    fn overlapping_slices_favour_the_later_one() {
        const OVERLAP: [Slice; 2] = [
            Slice { bottom: 0.0, top: 600.0 },
            Slice { bottom: 0.0, top: 300.0 },
        ];
        let world = TowerWorld { slices: &OVERLAP };
        let mut floors = FloorResolver::new();
        floors.resolve(100.0, &world);
        assert_eq!(floors.included(), &[1]);
    }

    #[test]
    fn height_outside_every_slice_falls_back_to_slice_zero() {
        let mut floors = FloorResolver::new();
        floors.resolve(-50.0, &tower());
        assert_eq!(floors.included(), &[0]);
    }

    #[test]
    fn reset_clears_configuration_and_resolution() {
        let mut floors = FloorResolver::new();
        floors.add_range(0, 2, 3);
        floors.resolve(100.0, &tower());
        floors.reset();
        assert_eq!(floors.range_count(), 0);
        assert!(floors.included().is_empty());
    }

    #[test]
    #[should_panic(expected = "spans")]
    fn over_wide_range_is_fatal() {
        let mut floors = FloorResolver::new();
        floors.add_range(0, 20, 200);
    }
}
