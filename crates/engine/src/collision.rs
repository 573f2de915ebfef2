//! collision detection - walls, floor, other blocks

use hate_core::{Orientation, Well, WellConfig};

/// does this orientation fit with its grid corner at (x, y)?
/// Checks the horizontal bounds, the floor and ceiling, then each
/// shifted orientation row against the well row it would cover.
#[inline]
pub fn fits(config: &WellConfig, well: &Well, orientation: &Orientation, x: i32, y: i32) -> bool {
    let x_actual = x + orientation.x_min;
    let y_actual = y + orientation.y_min;

    if x_actual < 0 || x_actual > config.width as i32 - orientation.x_dim {
        return false;
    }
    if y_actual < 0 || y_actual + orientation.y_dim > config.depth as i32 {
        return false;
    }

    orientation
        .rows()
        .iter()
        .enumerate()
        .all(|(r, &bits)| well.row(y_actual as usize + r) & (bits << x_actual) == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hate_core::{PieceId, Rotation, RotationSystem};

    fn t(rotation: Rotation) -> Orientation {
        *RotationSystem::hatetris()
            .orientation(PieceId::T, rotation)
            .expect("T exists")
    }

    #[test]
    fn test_fits_empty_well() {
        let cfg = WellConfig::hatetris();
        let well = Well::new(cfg.depth);
        assert!(fits(&cfg, &well, &t(Rotation::North), 3, 0));
    }

    #[test]
    fn test_walls() {
        let cfg = WellConfig::hatetris();
        let well = Well::new(cfg.depth);
        // T North is 3 wide with x_min 0
        assert!(fits(&cfg, &well, &t(Rotation::North), 0, 0));
        assert!(!fits(&cfg, &well, &t(Rotation::North), -1, 0));
        assert!(fits(&cfg, &well, &t(Rotation::North), 7, 0));
        assert!(!fits(&cfg, &well, &t(Rotation::North), 8, 0));
        // T East has x_min 1, so the grid may hang one column past the left wall
        assert!(fits(&cfg, &well, &t(Rotation::East), -1, 0));
        assert!(!fits(&cfg, &well, &t(Rotation::East), -2, 0));
    }

    #[test]
    fn test_floor() {
        let cfg = WellConfig::hatetris();
        let well = Well::new(cfg.depth);
        // y_min 1, y_dim 2: bottom cell row is y + 2
        assert!(fits(&cfg, &well, &t(Rotation::North), 3, 17));
        assert!(!fits(&cfg, &well, &t(Rotation::North), 3, 18));
    }

    #[test]
    fn test_overlap() {
        let cfg = WellConfig::hatetris();
        let mut well = Well::new(cfg.depth);
        well.set(4, 2, true);
        // the T stem covers column 4 of row y + 2
        assert!(!fits(&cfg, &well, &t(Rotation::North), 3, 0));
        assert!(fits(&cfg, &well, &t(Rotation::North), 5, 0));
    }
}
