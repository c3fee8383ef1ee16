use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// HSL → Color32
// ---------------------------------------------------------------------------

fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

const RED: f32 = 0.0;
const ORANGE: f32 = 28.0;
const AMBER: f32 = 45.0;
const YELLOW: f32 = 54.0;
const GREEN: f32 = 130.0;

// ---------------------------------------------------------------------------
// Label colours
// ---------------------------------------------------------------------------

/// Colour for a severity label; unknown labels are gray.
pub fn severity_color(severity: &str) -> Color32 {
    match severity {
        "Critical" => hsl(RED, 0.75, 0.55),
        "High" => hsl(ORANGE, 0.85, 0.55),
        "Medium" => hsl(YELLOW, 0.85, 0.50),
        "Low" => hsl(GREEN, 0.55, 0.45),
        _ => Color32::GRAY,
    }
}

/// Colour for a status label; unknown labels are gray.
pub fn status_color(status: &str) -> Color32 {
    match status {
        "Open" => hsl(RED, 0.65, 0.60),
        "In Progress" => hsl(AMBER, 0.80, 0.55),
        "Resolved" => hsl(GREEN, 0.50, 0.50),
        _ => Color32::GRAY,
    }
}

/// Line colour of the trend chart.
pub fn chart_line_color() -> Color32 {
    hsl(RED, 1.0, 0.71)
}
