use egui::Color32;

/// Logical points per `rem`.
pub const REM_POINTS: f32 = 16.0;

#[derive(Debug, Clone, Copy)]
pub struct CardPalette {
    pub background: Color32,
    pub card: Color32,
    pub card_stroke: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub heading: Color32,
    pub body: Color32,
    pub button_text: Color32,
    pub sparkle: Color32,
    pub envelope: Color32,
}

impl Default for CardPalette {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(255, 240, 243),
            card: Color32::from_rgb(255, 255, 255),
            card_stroke: Color32::from_rgb(255, 204, 213),
            accent: color_from_hex("#ff4d6d"),
            accent_soft: color_from_hex("#ffb3c1"),
            heading: Color32::from_rgb(89, 13, 34),
            body: Color32::from_rgb(128, 15, 47),
            button_text: Color32::WHITE,
            sparkle: Color32::from_rgb(255, 215, 0),
            envelope: Color32::from_rgb(255, 229, 236),
        }
    }
}

pub fn rem(size: f32) -> f32 {
    size * REM_POINTS
}

/// Unparseable colors fall back to white.
pub fn color_from_hex(hex: &str) -> Color32 {
    Color32::from_hex(hex.trim()).unwrap_or(Color32::WHITE)
}

pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

pub fn card_visuals(palette: &CardPalette) -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(palette.heading);
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.card;
    visuals.selection.bg_fill = palette.accent;
    visuals.hyperlink_color = palette.accent;
    visuals
}
