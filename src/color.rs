use eframe::egui::Color32;
use palette::Srgba;

// ---------------------------------------------------------------------------
// Named colours with opacity
// ---------------------------------------------------------------------------

/// Resolve a CSS/SVG colour name (e.g. `"deepskyblue"`) and attach an
/// opacity in `[0, 1]`.
pub fn named_rgba(name: &str, opacity: f32) -> Option<Srgba<u8>> {
    let rgb = palette::named::from_str(&name.trim().to_ascii_lowercase())?;
    Some(Srgba::new(rgb.red, rgb.green, rgb.blue, alpha_byte(opacity)))
}

fn alpha_byte(opacity: f32) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert for the egui viewer.
pub fn to_color32(c: Srgba<u8>) -> Color32 {
    Color32::from_rgba_unmultiplied(c.red, c.green, c.blue, c.alpha)
}

/// `#rrggbb` plus a separate opacity, the way SVG attributes want them.
pub fn to_svg_paint(c: Srgba<u8>) -> (String, f32) {
    (
        format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue),
        c.alpha as f32 / 255.0,
    )
}
