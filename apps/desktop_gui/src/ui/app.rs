use std::time::Duration;

use card_core::{
    ambient::{bob_offset, pulse_scale, Easing},
    CardCopy, CardPanel, CardView, EvasionPosition, InteractionController, SpringTransition,
    Stage, ViewportClass,
};
use eframe::egui;
use egui::{Align2, FontId, Painter, Pos2, Rect, Sense, Vec2};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::Settings,
    controller::{
        events::{ContactTracker, UiEvent},
        orchestration::{dispatch_ui_event, EffectSinks},
    },
    ui::{
        confetti::ConfettiField,
        haptics::WindowNudge,
        motion::AnimatedPosition,
        theme::{card_visuals, rem, with_opacity, CardPalette},
        widgets::{paint_envelope, paint_heart, pill_button, PillStyle},
    },
};

const CARD_MAX_WIDTH: f32 = 440.0;
const CARD_MARGIN: f32 = 16.0;
const ENTRANCE_SECS: f32 = 0.4;
const BUTTON_GAP: f32 = 70.0;
const NARROW_STACK_GAP: f32 = 90.0;

pub struct ValentineApp {
    controller: InteractionController,
    rng: StdRng,
    copy: CardCopy,
    palette: CardPalette,
    confetti: ConfettiField,
    haptics: WindowNudge,
    negative_motion: AnimatedPosition,
    contact: ContactTracker,
    started_at: f64,
    shown_stage: Stage,
    stage_since: f32,
    visuals_applied: bool,
}

impl ValentineApp {
    pub fn new(settings: &Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let confetti = ConfettiField::new(StdRng::seed_from_u64(rng.gen()));
        Self {
            controller: InteractionController::new(),
            rng,
            copy: settings.copy(),
            palette: CardPalette::default(),
            confetti,
            haptics: WindowNudge::new(settings.haptics),
            negative_motion: AnimatedPosition::new(
                EvasionPosition::RESTING,
                SpringTransition::EVASION,
            ),
            contact: ContactTracker::default(),
            started_at: 0.0,
            shown_stage: Stage::Asking,
            stage_since: 0.0,
            visuals_applied: false,
        }
    }

    fn dispatch(&mut self, event: UiEvent) {
        dispatch_ui_event(
            &mut self.controller,
            &mut self.rng,
            event,
            EffectSinks {
                celebration: &mut self.confetti,
                haptics: &mut self.haptics,
            },
        );
    }

    fn track_stage(&mut self, elapsed: f32) {
        let stage = self.controller.stage();
        if stage != self.shown_stage {
            self.shown_stage = stage;
            self.stage_since = elapsed;
            self.contact.reset();
        }
    }

    fn entrance(&self, elapsed: f32) -> f32 {
        Easing::EaseInOut.apply((elapsed - self.stage_since) / ENTRANCE_SECS)
    }

    fn card_rect(&self, screen: Rect, height: f32, rise: f32, elapsed: f32) -> Rect {
        let width = (screen.width() - CARD_MARGIN * 2.0).clamp(0.0, CARD_MAX_WIDTH);
        let height = height.min(screen.height() - CARD_MARGIN * 2.0).max(0.0);
        let slide = Vec2::new(0.0, rise * (1.0 - self.entrance(elapsed)));
        Rect::from_center_size(screen.center(), Vec2::new(width, height))
            .translate(slide + self.haptics.offset())
    }

    fn paint_heart_rain(&self, painter: &Painter, screen: Rect, elapsed: f32) {
        let Some(hearts) = self.controller.hearts() else {
            return;
        };
        for frame in hearts.frames(elapsed) {
            let center = Pos2::new(
                screen.left() + frame.x_vw / 100.0 * screen.width(),
                screen.top() + frame.y_vh / 100.0 * screen.height(),
            );
            paint_heart(
                painter,
                center,
                frame.size_px,
                frame.rotation_deg.to_radians(),
                with_opacity(self.palette.accent, frame.opacity),
            );
        }
    }

    fn paint_card_background(&self, ui: &egui::Ui, card: Rect) {
        let radius = egui::CornerRadius::same(24);
        ui.painter().rect_filled(card, radius, self.palette.card);
        ui.painter().rect_stroke(
            card,
            radius,
            egui::Stroke::new(1.5, self.palette.card_stroke),
            egui::StrokeKind::Inside,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn show_question(
        &mut self,
        ui: &egui::Ui,
        card: Rect,
        elapsed: f32,
        viewport_width: f32,
        headline: &str,
        affirmative_label: &str,
        affirmative_font_rem: f32,
        negative_label: &str,
        negative_interactive: bool,
        events: &mut Vec<UiEvent>,
    ) {
        let painter = ui.painter();
        let cx = card.center().x;

        paint_heart(
            painter,
            Pos2::new(cx, card.top() + 80.0 + bob_offset(elapsed)),
            100.0,
            0.0,
            self.palette.accent,
        );
        paint_heart(
            painter,
            Pos2::new(cx, card.top() + 160.0),
            36.0 * pulse_scale(elapsed),
            0.0,
            self.palette.accent_soft,
        );

        let headline = painter.layout(
            headline.to_string(),
            FontId::proportional(24.0),
            self.palette.heading,
            card.width() - 48.0,
        );
        let headline_top = card.top() + 196.0;
        let headline_size = headline.size();
        painter.galley(
            Pos2::new(cx - headline_size.x / 2.0, headline_top),
            headline,
            self.palette.heading,
        );

        let row_y = headline_top + headline_size.y + 60.0;
        // Narrow windows stack the choices; the retreat offsets tuck the
        // negative control under the affirmative one in either layout.
        let (affirmative_anchor, negative_anchor) = match ViewportClass::from_width(viewport_width)
        {
            ViewportClass::Narrow => (
                Pos2::new(cx, row_y),
                Pos2::new(cx, row_y + NARROW_STACK_GAP),
            ),
            ViewportClass::Wide => (
                Pos2::new(cx - BUTTON_GAP, row_y),
                Pos2::new(cx + BUTTON_GAP, row_y),
            ),
        };
        let negative = self.negative_motion.current();
        let negative_response = pill_button(
            ui,
            egui::Id::new("negative_choice"),
            negative_anchor + Vec2::new(negative.x, negative.y),
            negative_label,
            PillStyle {
                fill: self.palette.card,
                outline: Some(self.palette.accent),
                text: self.palette.accent,
                font_size: rem(1.0),
            },
            negative.scale,
            negative.opacity,
            negative_interactive,
            false,
        );

        let contact = match &negative_response {
            Some(response) => {
                let touching = response.is_pointer_button_down_on()
                    && ui.ctx().input(|i| i.any_touches());
                self.contact.update(response.hovered(), touching)
            }
            None => self.contact.update(false, false),
        };
        if let Some(kind) = contact {
            events.push(UiEvent::NegativeContact {
                kind,
                viewport_width,
            });
        }

        // Registered last so it sits above the retreating negative control.
        let affirmative = pill_button(
            ui,
            egui::Id::new("affirmative_choice"),
            affirmative_anchor,
            affirmative_label,
            PillStyle {
                fill: self.palette.accent,
                outline: None,
                text: self.palette.button_text,
                font_size: rem(affirmative_font_rem),
            },
            1.0,
            1.0,
            true,
            true,
        );
        if affirmative.is_some_and(|response| response.clicked()) {
            events.push(UiEvent::AffirmativeClicked);
        }
    }

    fn show_celebration(
        &self,
        ui: &egui::Ui,
        card: Rect,
        heading: &str,
        message: &str,
        envelope_hint: &str,
        events: &mut Vec<UiEvent>,
    ) {
        let painter = ui.painter();
        let cx = card.center().x;

        paint_heart(
            painter,
            Pos2::new(cx - 42.0, card.top() + 90.0),
            72.0,
            -0.2,
            self.palette.accent,
        );
        paint_heart(
            painter,
            Pos2::new(cx + 42.0, card.top() + 96.0),
            64.0,
            0.2,
            self.palette.accent_soft,
        );
        painter.text(
            Pos2::new(cx, card.top() + 175.0),
            Align2::CENTER_CENTER,
            heading,
            FontId::proportional(32.0),
            self.palette.accent,
        );
        painter.text(
            Pos2::new(cx, card.top() + 218.0),
            Align2::CENTER_CENTER,
            message,
            FontId::proportional(18.0),
            self.palette.body,
        );

        let envelope_rect =
            Rect::from_center_size(Pos2::new(cx, card.top() + 310.0), Vec2::new(140.0, 90.0));
        let response = ui.interact(
            envelope_rect,
            egui::Id::new("envelope_trigger"),
            Sense::click(),
        );
        let grow = if response.hovered() { 1.05 } else { 1.0 };
        paint_envelope(
            painter,
            Rect::from_center_size(envelope_rect.center(), envelope_rect.size() * grow),
            self.palette.envelope,
            self.palette.accent,
        );
        painter.text(
            Pos2::new(cx, envelope_rect.bottom() + 26.0),
            Align2::CENTER_CENTER,
            envelope_hint,
            FontId::proportional(14.0),
            self.palette.body,
        );
        if response.clicked() {
            events.push(UiEvent::EnvelopeClicked);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn show_letter(
        &self,
        ui: &egui::Ui,
        card: Rect,
        salutation: &str,
        paragraphs: &[String],
        signature: &str,
        close_label: &str,
        events: &mut Vec<UiEvent>,
    ) {
        let painter = ui.painter();
        let inset = 28.0;
        let text_width = card.width() - inset * 2.0;

        painter.text(
            Pos2::new(card.left() + inset, card.top() + 36.0),
            Align2::LEFT_CENTER,
            "✉",
            FontId::proportional(28.0),
            self.palette.accent,
        );
        let close = pill_button(
            ui,
            egui::Id::new("letter_close"),
            Pos2::new(card.right() - 64.0, card.top() + 36.0),
            close_label,
            PillStyle {
                fill: self.palette.envelope,
                outline: None,
                text: self.palette.accent,
                font_size: 14.0,
            },
            0.8,
            1.0,
            true,
            true,
        );
        if close.is_some_and(|response| response.clicked()) {
            events.push(UiEvent::LetterClosed);
        }

        let salutation = painter.layout(
            salutation.to_string(),
            FontId::proportional(24.0),
            self.palette.accent,
            text_width,
        );
        let mut y = card.top() + 76.0;
        let salutation_height = salutation.size().y;
        painter.galley(
            Pos2::new(card.left() + inset, y),
            salutation,
            self.palette.accent,
        );
        y += salutation_height + 16.0;

        for paragraph in paragraphs {
            let galley = painter.layout(
                paragraph.clone(),
                FontId::proportional(16.0),
                self.palette.body,
                text_width,
            );
            let height = galley.size().y;
            painter.galley(Pos2::new(card.left() + inset, y), galley, self.palette.body);
            y += height + 16.0;
        }

        painter.text(
            Pos2::new(card.right() - inset, y + 12.0),
            Align2::RIGHT_CENTER,
            signature,
            FontId::proportional(20.0),
            self.palette.accent,
        );
    }

    fn paint_overlay(&self, ctx: &egui::Context, screen: Rect, elapsed: f32) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("celebration_overlay"),
        ));

        if let Some(sparkles) = self.controller.sparkles() {
            for frame in sparkles.frames(elapsed) {
                if frame.opacity <= 0.0 {
                    continue;
                }
                let center = Pos2::new(
                    screen.left() + frame.x_vw / 100.0 * screen.width(),
                    screen.top() + frame.y_vh / 100.0 * screen.height(),
                );
                painter.circle_filled(
                    center,
                    frame.size_px * frame.scale,
                    with_opacity(self.palette.sparkle, frame.opacity),
                );
            }
        }

        for piece in self.confetti.pieces() {
            let center = Pos2::new(
                screen.left() + piece.x * screen.width(),
                screen.top() + piece.y * screen.height(),
            );
            let rot = egui::emath::Rot2::from_angle(piece.rotation);
            let half = Vec2::new(piece.size / 2.0, piece.size * 0.3);
            let corners = [
                Vec2::new(-half.x, -half.y),
                Vec2::new(half.x, -half.y),
                Vec2::new(half.x, half.y),
                Vec2::new(-half.x, half.y),
            ]
            .map(|corner| center + rot * corner)
            .to_vec();
            painter.add(egui::Shape::convex_polygon(
                corners,
                with_opacity(piece.color, piece.opacity()),
                egui::Stroke::NONE,
            ));
        }
    }

    fn show_card(&mut self, ui: &mut egui::Ui, view: &CardView, elapsed: f32) -> Vec<UiEvent> {
        let mut events = Vec::new();
        let screen = ui.max_rect();
        self.paint_heart_rain(ui.painter(), screen, elapsed);

        let (height, rise) = match view.panel {
            CardPanel::Asking { .. } => (460.0, 20.0),
            CardPanel::Celebrating { .. } => (440.0, 0.0),
            CardPanel::Letter { .. } => (480.0, 30.0),
        };
        let card = self.card_rect(screen, height, rise, elapsed);
        let mut card_ui = ui.new_child(egui::UiBuilder::new().max_rect(card));
        card_ui.set_opacity(self.entrance(elapsed));
        self.paint_card_background(&card_ui, card);

        match &view.panel {
            CardPanel::Asking {
                headline,
                affirmative_label,
                affirmative_font_rem,
                negative_label,
                negative_interactive,
                ..
            } => self.show_question(
                &card_ui,
                card,
                elapsed,
                screen.width(),
                headline,
                affirmative_label,
                *affirmative_font_rem,
                negative_label,
                *negative_interactive,
                &mut events,
            ),
            CardPanel::Celebrating {
                heading,
                message,
                envelope_hint,
            } => self.show_celebration(
                &card_ui,
                card,
                heading,
                message,
                envelope_hint,
                &mut events,
            ),
            CardPanel::Letter {
                salutation,
                paragraphs,
                signature,
                close_label,
            } => self.show_letter(
                &card_ui,
                card,
                salutation,
                paragraphs,
                signature,
                close_label,
                &mut events,
            ),
        }
        events
    }
}

impl eframe::App for ValentineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            ctx.set_visuals(card_visuals(&self.palette));
            self.visuals_applied = true;
        }

        let now = ctx.input(|i| i.time);
        if !self.controller.is_ready() {
            // First frame: draw layouts, render nothing interactive yet.
            self.controller.initialize(&mut self.rng);
            self.started_at = now;
            ctx.request_repaint();
            return;
        }

        let dt = ctx.input(|i| i.stable_dt).clamp(0.0, 0.1);
        let elapsed = (now - self.started_at) as f32;
        if self.confetti.is_active() {
            self.confetti.step(dt);
        }
        self.haptics.tick(dt);
        self.track_stage(elapsed);

        let Some(view) = self.controller.view(&self.copy) else {
            return;
        };
        self.negative_motion.follow(&view.panel);
        if !self.negative_motion.is_settled() {
            self.negative_motion.step(dt);
        }

        let panel = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.palette.background))
            .show(ctx, |ui| {
                let events = self.show_card(ui, &view, elapsed);
                (ui.max_rect(), events)
            });
        let (screen, events) = panel.inner;

        self.paint_overlay(ctx, screen, elapsed);

        for event in events {
            self.dispatch(event);
        }

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
