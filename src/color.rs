use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from blue.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    const HUE_OFFSET: f32 = 210.0;

    (0..n)
        .map(|i| {
            let hue = (HUE_OFFSET + (i as f32 / n as f32) * 360.0) % 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.70, 0.55).into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category → colour mapping
// ---------------------------------------------------------------------------

/// Assigns a stable colour to each category label, in the order given.
///
/// Used for booster categories in the scatter plot and for pie slices.
#[derive(Debug, Clone, Default)]
pub struct CategoryColors {
    order: Vec<String>,
    mapping: HashMap<String, Color32>,
}

impl CategoryColors {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order: Vec<String> = Vec::new();
        for cat in categories {
            let cat = cat.into();
            if !order.contains(&cat) {
                order.push(cat);
            }
        }
        let mapping = order
            .iter()
            .cloned()
            .zip(generate_palette(order.len()))
            .collect();
        Self { order, mapping }
    }

    /// Colour for `category`; grey for labels not seen at construction.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping.get(category).copied().unwrap_or(Color32::GRAY)
    }

    /// Legend entries (label → colour) in category order.
    pub fn legend_entries(&self) -> Vec<(&str, Color32)> {
        self.order
            .iter()
            .map(|cat| (cat.as_str(), self.color_for(cat)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn categories_keep_order_and_dedupe() {
        let colors = CategoryColors::new(["v1.0", "FT", "v1.0", "B4"]);
        assert_eq!(colors.len(), 3);
        let labels: Vec<&str> = colors.legend_entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["v1.0", "FT", "B4"]);
        assert_ne!(colors.color_for("FT"), colors.color_for("B4"));
        assert_eq!(colors.color_for("B5"), Color32::GRAY);
    }
}
