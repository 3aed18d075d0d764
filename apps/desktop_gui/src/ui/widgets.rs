//! Painted primitives: hearts, the envelope, and pill-shaped buttons.

use egui::{emath::Rot2, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::ui::theme::with_opacity;

pub fn paint_heart(painter: &Painter, center: Pos2, size: f32, rotation_rad: f32, color: Color32) {
    if size <= 0.0 || color.a() == 0 {
        return;
    }
    let rot = Rot2::from_angle(rotation_rad);
    let at = |x: f32, y: f32| center + rot * Vec2::new(x * size, y * size);

    let lobe_radius = size * 0.28;
    painter.circle_filled(at(-0.24, -0.12), lobe_radius, color);
    painter.circle_filled(at(0.24, -0.12), lobe_radius, color);
    painter.add(egui::Shape::convex_polygon(
        vec![at(-0.51, -0.04), at(0.51, -0.04), at(0.0, 0.5)],
        color,
        Stroke::NONE,
    ));
}

pub fn paint_envelope(painter: &Painter, rect: Rect, paper: Color32, ink: Color32) {
    let stroke = Stroke::new(2.0, ink);
    painter.rect_filled(rect, egui::CornerRadius::same(6), paper);
    painter.rect_stroke(rect, egui::CornerRadius::same(6), stroke, egui::StrokeKind::Inside);
    let fold = Pos2::new(rect.center().x, rect.top() + rect.height() * 0.55);
    painter.line_segment([rect.left_top(), fold], stroke);
    painter.line_segment([rect.right_top(), fold], stroke);
    paint_heart(painter, fold, rect.height() * 0.28, 0.0, ink);
}

#[derive(Debug, Clone, Copy)]
pub struct PillStyle {
    pub fill: Color32,
    pub outline: Option<Color32>,
    pub text: Color32,
    pub font_size: f32,
}

/// Lays out and paints a rounded button centred on `center`.
///
/// `scale` and `opacity` come from the caller's animation; `press_feedback`
/// adds the small hover/press bounce.
#[allow(clippy::too_many_arguments)]
pub fn pill_button(
    ui: &egui::Ui,
    id: egui::Id,
    center: Pos2,
    label: &str,
    style: PillStyle,
    scale: f32,
    opacity: f32,
    interactive: bool,
    press_feedback: bool,
) -> Option<egui::Response> {
    let font = FontId::proportional(style.font_size * scale.max(0.01));
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font.clone(), style.text);
    let padding = Vec2::new(28.0, 14.0) * scale;
    let rect = Rect::from_center_size(center, galley.size() + padding * 2.0);

    // A non-interactive pill never registers, so it cannot intercept the pointer.
    let response = interactive.then(|| ui.interact(rect, id, Sense::click()));

    let bounce = match &response {
        Some(response) if press_feedback && response.is_pointer_button_down_on() => 0.95,
        Some(response) if press_feedback && response.hovered() => 1.05,
        _ => 1.0,
    };
    let visual = Rect::from_center_size(center, rect.size() * bounce);
    let radius = egui::CornerRadius::same((visual.height() / 2.0).min(255.0) as u8);

    let painter = ui.painter();
    painter.rect_filled(visual, radius, with_opacity(style.fill, opacity));
    if let Some(outline) = style.outline {
        painter.rect_stroke(
            visual,
            radius,
            Stroke::new(2.0, with_opacity(outline, opacity)),
            egui::StrokeKind::Inside,
        );
    }
    painter.text(
        center,
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(font.size * bounce),
        with_opacity(style.text, opacity),
    );

    response
}
