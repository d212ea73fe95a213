//! Ring-size conversions in integer fixed-point.
//!
//! Units used throughout:
//!
//! ```text
//! radius_px  - circle radius on the panel, in pixels
//! dia_x100   - inner diameter in hundredths of a millimeter (17.30 mm => 1730)
//! eu_mm      - EU size: inner circumference in whole millimeters
//! us_x2      - US size * 2, so half sizes are odd (7.5 => 15)
//! ```
//!
//! Every division that stands for a physical rounding adds half the
//! divisor first (round-half-up). No floating point anywhere, so results
//! are identical on every target.

use core::num::NonZeroU32;

use crate::config::{MIN_RADIUS_PX, PI_X1000000, UM_PER_PX_DEFAULT};

/// Display scale: micrometers per pixel. Always non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scale(NonZeroU32);

impl Scale {
    /// Fixed scale of the 128×64 panel (248 µm/px).
    pub const DEFAULT: Scale = match NonZeroU32::new(UM_PER_PX_DEFAULT) {
        Some(um) => Scale(um),
        None => panic!("UM_PER_PX_DEFAULT must be non-zero"),
    };

    /// Returns `None` for a zero scale.
    pub const fn new(um_per_px: u32) -> Option<Self> {
        match NonZeroU32::new(um_per_px) {
            Some(um) => Some(Scale(um)),
            None => None,
        }
    }

    pub const fn um_per_px(self) -> u32 {
        self.0.get()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One row of the US size reference table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeEntry {
    /// US size * 2.
    pub us_x2: u8,
    /// Inner diameter in 0.01 mm.
    pub dia_x100: u32,
}

const fn entry(us_x2: u8, dia_x100: u32) -> SizeEntry {
    SizeEntry { us_x2, dia_x100 }
}

/// Common US sizes (3 ..= 15 in half steps) and their approximate inner
/// diameters. Sorted ascending on both columns.
#[rustfmt::skip]
pub const US_SIZE_TABLE: [SizeEntry; 25] = [
    entry(6, 1410), entry(7, 1450), entry(8, 1490), entry(9, 1530),
    entry(10, 1570), entry(11, 1610), entry(12, 1650), entry(13, 1690),
    entry(14, 1730), entry(15, 1770), entry(16, 1810), entry(17, 1850),
    entry(18, 1890), entry(19, 1940), entry(20, 1980), entry(21, 2020),
    entry(22, 2060), entry(23, 2100), entry(24, 2140), entry(25, 2180),
    entry(26, 2220), entry(27, 2260), entry(28, 2300), entry(29, 2340),
    entry(30, 2380),
];

fn saturate_u32(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

/// Diameter (0.01 mm) of a circle drawn with `radius_px`.
///
/// `diameter_um = 2 * r * scale`; one hundredth of a mm is 10 µm.
pub fn diameter_from_radius_px(scale: Scale, radius_px: u32) -> u32 {
    let dia_um = 2u64
        .saturating_mul(u64::from(radius_px))
        .saturating_mul(u64::from(scale.um_per_px()));
    saturate_u32(dia_um.saturating_add(5) / 10)
}

/// EU size (circumference, whole mm) for a diameter in 0.01 mm.
///
/// `circ_mm = PI_X1000000 * dia_x100 / (100 * 10^6)`.
pub fn circumference_from_diameter(dia_x100: u32) -> u32 {
    const DIVISOR: u64 = 100 * 1_000_000;
    let num = PI_X1000000 * u64::from(dia_x100);
    saturate_u32((num + DIVISOR / 2) / DIVISOR)
}

/// Diameter (0.01 mm) for an EU circumference in whole mm.
pub fn diameter_from_circumference(eu_mm: u32) -> u32 {
    let num = u64::from(eu_mm) * 100 * 1_000_000;
    saturate_u32((num + PI_X1000000 / 2) / PI_X1000000)
}

/// US half-size unit whose table diameter is closest to `dia_x100`.
///
/// Linear scan; only a strictly smaller error replaces the current best,
/// so ties go to the smaller size.
pub fn nearest_us_size_from_diameter(dia_x100: u32) -> u8 {
    let mut best = US_SIZE_TABLE[0];
    let mut best_err = dia_x100.abs_diff(best.dia_x100);
    for e in &US_SIZE_TABLE[1..] {
        let err = dia_x100.abs_diff(e.dia_x100);
        if err < best_err {
            best_err = err;
            best = *e;
        }
    }
    best.us_x2
}

/// Table diameter (0.01 mm) for the US size closest to `us_x2`.
///
/// Same first-minimum tie-break as [`nearest_us_size_from_diameter`].
pub fn diameter_from_us_size(us_x2: u8) -> u32 {
    let mut best = US_SIZE_TABLE[0];
    let mut best_err = us_x2.abs_diff(best.us_x2);
    for e in &US_SIZE_TABLE[1..] {
        let err = us_x2.abs_diff(e.us_x2);
        if err < best_err {
            best_err = err;
            best = *e;
        }
    }
    best.dia_x100
}

/// Radius in pixels needed to draw `dia_x100` at `scale`. Never below 1.
pub fn radius_px_from_diameter(scale: Scale, dia_x100: u32) -> u32 {
    let um = u64::from(scale.um_per_px());
    let dia_um = u64::from(dia_x100) * 10;
    saturate_u32((dia_um + um) / (2 * um)).max(MIN_RADIUS_PX)
}

/// Diameter, nearest US size and EU size shown together on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SizeReadout {
    pub dia_x100: u32,
    pub us_x2: u8,
    pub eu_mm: u32,
}

impl SizeReadout {
    pub fn from_diameter(dia_x100: u32) -> Self {
        Self {
            dia_x100,
            us_x2: nearest_us_size_from_diameter(dia_x100),
            eu_mm: circumference_from_diameter(dia_x100),
        }
    }

    pub fn from_radius(scale: Scale, radius_px: u32) -> Self {
        Self::from_diameter(diameter_from_radius_px(scale, radius_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_rejects_zero() {
        assert!(Scale::new(0).is_none());
        assert_eq!(Scale::new(248), Some(Scale::DEFAULT));
        assert_eq!(Scale::default().um_per_px(), 248);
    }

    #[test]
    fn table_is_sorted_on_both_columns() {
        for pair in US_SIZE_TABLE.windows(2) {
            assert!(pair[0].us_x2 < pair[1].us_x2);
            assert!(pair[0].dia_x100 < pair[1].dia_x100);
        }
        assert_eq!(US_SIZE_TABLE[0], SizeEntry { us_x2: 6, dia_x100: 1410 });
        assert_eq!(US_SIZE_TABLE[24], SizeEntry { us_x2: 30, dia_x100: 2380 });
    }

    #[test]
    fn diameter_from_default_radius() {
        // 2 * 22 * 248 = 10912 µm => 1091.2 => 1091
        assert_eq!(diameter_from_radius_px(Scale::DEFAULT, 22), 1091);
        // 2 * 27 * 248 = 13392 µm => 1339
        assert_eq!(diameter_from_radius_px(Scale::DEFAULT, 27), 1339);
        // 496 µm => 49.6 => 50 (half-up)
        assert_eq!(diameter_from_radius_px(Scale::DEFAULT, 1), 50);
    }

    #[test]
    fn diameter_from_radius_rounds_half_up() {
        // 2 * 1 * 5 = 10 µm => 1; 2 * 1 * 3 = 6 µm => 0.6 => 1; 4 µm => 0
        assert_eq!(diameter_from_radius_px(Scale::new(5).unwrap(), 1), 1);
        assert_eq!(diameter_from_radius_px(Scale::new(3).unwrap(), 1), 1);
        assert_eq!(diameter_from_radius_px(Scale::new(2).unwrap(), 1), 0);
    }

    #[test]
    fn diameter_is_monotonic_in_radius() {
        let mut prev = 0;
        for r in 1..=1000 {
            let d = diameter_from_radius_px(Scale::DEFAULT, r);
            assert!(d >= prev, "radius {r}: {d} < {prev}");
            prev = d;
        }
    }

    #[test]
    fn huge_radius_saturates() {
        assert_eq!(diameter_from_radius_px(Scale::DEFAULT, u32::MAX), u32::MAX);
    }

    #[test]
    fn largest_scale_saturates_instead_of_overflowing() {
        let widest = Scale::new(u32::MAX).unwrap();
        assert_eq!(diameter_from_radius_px(widest, u32::MAX), u32::MAX);
        assert_eq!(diameter_from_radius_px(widest, 1_000), u32::MAX);
        // 2 * u32::MAX µm = 858993459.0 hundredths, still fits
        assert_eq!(diameter_from_radius_px(widest, 1), 858_993_459);
        assert_eq!(SizeReadout::from_radius(widest, u32::MAX).dia_x100, u32::MAX);
    }

    #[test]
    fn circumference_of_known_diameters() {
        // pi * 17.30 = 54.35
        assert_eq!(circumference_from_diameter(1730), 54);
        // pi * 17.19 = 54.00
        assert_eq!(circumference_from_diameter(1719), 54);
        // pi * 13.39 = 42.07
        assert_eq!(circumference_from_diameter(1339), 42);
        assert_eq!(circumference_from_diameter(0), 0);
    }

    #[test]
    fn diameter_from_known_circumferences() {
        // 54 / pi = 17.188
        assert_eq!(diameter_from_circumference(54), 1719);
        // 40 / pi = 12.732
        assert_eq!(diameter_from_circumference(40), 1273);
        // 80 / pi = 25.465
        assert_eq!(diameter_from_circumference(80), 2546);
    }

    #[test]
    fn eu_survives_diameter_round_trip() {
        for eu in 40..=80 {
            let d = diameter_from_circumference(eu);
            assert_eq!(circumference_from_diameter(d), eu);
        }
    }

    #[test]
    fn diameter_round_trip_through_eu_is_within_half_step() {
        // One EU mm is ~31.8 hundredths of diameter, so the best we can
        // get back is the nearest whole-mm circumference.
        for d in 1410..=2380 {
            let back = diameter_from_circumference(circumference_from_diameter(d));
            assert!(back.abs_diff(d) <= 16, "d={d} back={back}");
        }
    }

    #[test]
    fn nearest_us_for_exact_table_diameters() {
        for e in &US_SIZE_TABLE {
            assert_eq!(nearest_us_size_from_diameter(e.dia_x100), e.us_x2);
            assert_eq!(nearest_us_size_from_diameter(diameter_from_us_size(e.us_x2)), e.us_x2);
        }
    }

    #[test]
    fn nearest_us_tie_goes_to_smaller_size() {
        // 1430 sits exactly between 1410 (6) and 1450 (7).
        assert_eq!(nearest_us_size_from_diameter(1430), 6);
        // 1915 sits exactly between 1890 (18) and 1940 (19).
        assert_eq!(nearest_us_size_from_diameter(1915), 18);
        assert_eq!(nearest_us_size_from_diameter(1916), 19);
    }

    #[test]
    fn nearest_us_clamps_outside_table() {
        assert_eq!(nearest_us_size_from_diameter(0), 6);
        assert_eq!(nearest_us_size_from_diameter(1091), 6);
        assert_eq!(nearest_us_size_from_diameter(9999), 30);
    }

    #[test]
    fn diameter_from_us_outside_table_uses_nearest_entry() {
        assert_eq!(diameter_from_us_size(0), 1410);
        assert_eq!(diameter_from_us_size(5), 1410);
        assert_eq!(diameter_from_us_size(31), 2380);
        assert_eq!(diameter_from_us_size(u8::MAX), 2380);
        assert_eq!(diameter_from_us_size(17), 1850);
    }

    #[test]
    fn radius_from_diameter_rounds_and_floors_at_one() {
        // 17300 µm / 496 = 34.88 => 35
        assert_eq!(radius_px_from_diameter(Scale::DEFAULT, 1730), 35);
        assert_eq!(radius_px_from_diameter(Scale::DEFAULT, 1719), 35);
        assert_eq!(radius_px_from_diameter(Scale::DEFAULT, 0), 1);
        assert_eq!(radius_px_from_diameter(Scale::DEFAULT, 10), 1);
    }

    #[test]
    fn radius_round_trip_within_one_pixel() {
        for r in 1..=200u32 {
            let d = diameter_from_radius_px(Scale::DEFAULT, r);
            let back = radius_px_from_diameter(Scale::DEFAULT, d);
            assert!(back.abs_diff(r) <= 1, "r={r} back={back}");
        }
    }

    #[test]
    fn readout_from_radius() {
        let r = SizeReadout::from_radius(Scale::DEFAULT, 27);
        assert_eq!(r, SizeReadout { dia_x100: 1339, us_x2: 6, eu_mm: 42 });

        let r = SizeReadout::from_diameter(1730);
        assert_eq!(r, SizeReadout { dia_x100: 1730, us_x2: 14, eu_mm: 54 });
    }
}
