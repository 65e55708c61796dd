use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Sex;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed series colours
// ---------------------------------------------------------------------------

/// Scatter / bar colour per gender.
pub fn sex_color(sex: Sex) -> Color32 {
    match sex {
        Sex::Female => Color32::from_rgb(0xe3, 0x6b, 0xae),
        Sex::Male => Color32::from_rgb(0x46, 0x82, 0xb4),
    }
}

/// Bar colour for survivors.
pub fn survived_color() -> Color32 {
    Color32::from_rgb(0x20, 0xb2, 0xaa)
}

/// Bar colour for passengers who perished.
pub fn perished_color() -> Color32 {
    Color32::from_rgb(0xff, 0xa0, 0x7a)
}

/// Map each ticket class to a distinct colour.
pub fn class_colors(classes: &BTreeSet<u8>) -> BTreeMap<u8, Color32> {
    let palette = generate_palette(classes.len());
    classes.iter().copied().zip(palette).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_sized_and_distinct() {
        let colors = generate_palette(3);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn each_class_gets_its_own_colour() {
        let classes: BTreeSet<u8> = [1, 2, 3].into_iter().collect();
        let map = class_colors(&classes);
        assert_eq!(map.len(), 3);
        assert_ne!(map[&1], map[&3]);
    }
}
