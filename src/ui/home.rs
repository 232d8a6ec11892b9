use bevy_egui::egui;
use std::time::Duration;

use crate::state::{AppState, Tab};
use crate::ui::projects::render_card_grid;
use crate::ui::widgets::{self, ACCENT, INK, PANEL_WHITE, SECONDARY};

/// Scroll speed of the marquee strip, points per second
const MARQUEE_SPEED: f32 = 60.0;

pub fn render_home(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    render_intro(ui, state, now);
    ui.add_space(28.0);
    render_marquee(ui, state, now);
    ui.add_space(28.0);
    render_featured_strip(ui, state, now);
}

fn render_intro(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    state
        .reveal
        .mark_visible("intro", Duration::ZERO, now);
    let reveal = state.reveal.progress("intro", now).unwrap_or(1.0);

    ui.scope(|ui| {
        ui.set_opacity(widgets::ease_out_cubic(reveal));
        widgets::comic_frame(PANEL_WHITE).show(ui, |ui| {
            ui.set_width(ui.available_width() - widgets::SHADOW_OFFSET.x);
            ui.label(
                egui::RichText::new("CRAFTING DIGITAL")
                    .size(44.0)
                    .strong()
                    .color(INK),
            );
            ui.label(
                egui::RichText::new("NARRATIVES")
                    .size(44.0)
                    .strong()
                    .color(ACCENT),
            );
            ui.add_space(10.0);
            ui.label(
                "I'm a Product Designer with a strong visual and systems background. \
                 I combine UX thinking with 3D, animation and narrative craft to create \
                 clear, expressive and logic-driven experiences.",
            );
            ui.add_space(12.0);

            contact_row(ui, "✉", &state.content.site.email.clone());
            contact_row(ui, "✆", &state.content.site.phone.clone());
            ui.add_space(14.0);

            let see_work = egui::Button::new(
                egui::RichText::new("SEE MY WORK")
                    .size(20.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(INK)
            .stroke(egui::Stroke::new(3.0, INK));
            if ui.add(see_work).clicked() {
                state.flip.request(Tab::Projects, now);
            }
        });
    });
}

fn contact_row(ui: &mut egui::Ui, icon: &str, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, SECONDARY);
        ui.painter()
            .rect_stroke(rect, 0.0, egui::Stroke::new(2.0, INK));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(13.0),
            INK,
        );
        ui.label(egui::RichText::new(text).strong());
    });
}

/// Endless skill ticker; purely time-driven, no state
fn render_marquee(ui: &mut egui::Ui, state: &AppState, now: Duration) {
    let text = format!("{}   •   ", state.content.site.marquee);
    let height = 36.0;
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, SECONDARY);
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(3.0, INK));

    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::proportional(16.0),
        INK,
    );
    let span = galley.size().x.max(1.0);
    let scroll = (now.as_secs_f32() * MARQUEE_SPEED) % span;
    let y = rect.center().y - galley.size().y / 2.0;

    // Two copies cover the wrap-around seam
    let mut x = rect.min.x - scroll;
    while x < rect.max.x {
        painter.galley(egui::pos2(x, y), galley.clone(), INK);
        x += span;
    }
}

fn render_featured_strip(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    ui.horizontal(|ui| {
        let (bar, _) = ui.allocate_exact_size(egui::vec2(34.0, 16.0), egui::Sense::hover());
        ui.painter().rect_filled(bar, 0.0, INK);
        ui.label(
            egui::RichText::new("TOP ISSUES (PROJECTS)")
                .size(24.0)
                .strong()
                .color(INK),
        );
    });
    ui.add_space(14.0);

    let featured: Vec<_> = state.content.featured_projects().cloned().collect();
    render_card_grid(ui, state, &featured, now);
}
