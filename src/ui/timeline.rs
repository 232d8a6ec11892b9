use bevy_egui::egui;
use std::time::Duration;

use crate::content::{CareerEntry, CareerKind};
use crate::state::AppState;
use crate::ui::widgets::{self, ACCENT, INK, PANEL_WHITE, SECONDARY};

const CELL_WIDTH: f32 = 260.0;
const CELL_HEIGHT: f32 = 170.0;
const NODE_ROW: f32 = 44.0;

/// Career strip: entries march horizontally, newest first, and the
/// vertical wheel is remapped onto the horizontal axis while the strip
/// is under the pointer.
pub fn render_career_timeline(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    state
        .reveal
        .mark_visible("career-strip", Duration::from_millis(400), now);
    let reveal = state.reveal.progress("career-strip", now).unwrap_or(1.0);

    ui.scope(|ui| {
        ui.set_opacity(widgets::ease_out_cubic(reveal));
        widgets::comic_frame(PANEL_WHITE).show(ui, |ui| {
            ui.set_width(ui.available_width() - widgets::SHADOW_OFFSET.x);
            ui.horizontal(|ui| {
                let (pin, _) =
                    ui.allocate_exact_size(egui::vec2(26.0, 26.0), egui::Sense::hover());
                ui.painter().circle_filled(pin.center(), 13.0, INK);
                ui.painter().text(
                    pin.center(),
                    egui::Align2::CENTER_CENTER,
                    "◉",
                    egui::FontId::proportional(13.0),
                    egui::Color32::WHITE,
                );
                ui.label(
                    egui::RichText::new("CAREER QUEST MODE")
                        .size(22.0)
                        .strong()
                        .color(INK),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("scroll to travel back in time")
                        .small()
                        .color(egui::Color32::from_gray(140)),
                );
            });
            ui.add_space(10.0);

            let entries = state.content.career.clone();
            let output = egui::ScrollArea::horizontal()
                .id_salt("career_strip")
                .scroll_offset(egui::vec2(state.timeline_offset, 0.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for (i, entry) in entries.iter().enumerate() {
                            career_cell(ui, entry, i == 0, i == entries.len() - 1);
                        }
                    });
                });

            // Axis remap: vertical wheel input drives the strip
            if ui.rect_contains_pointer(output.inner_rect) {
                let delta = ui.input(|i| i.raw_scroll_delta.y + i.raw_scroll_delta.x);
                if delta != 0.0 {
                    let max = (output.content_size.x - output.inner_rect.width()).max(0.0);
                    state.timeline_offset =
                        (state.timeline_offset - delta).clamp(0.0, max);
                }
            } else {
                state.timeline_offset = output.state.offset.x;
            }
        });
    });
}

fn career_cell(ui: &mut egui::Ui, entry: &CareerEntry, current: bool, last: bool) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(CELL_WIDTH, CELL_HEIGHT),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();

    // Quest path behind the node row
    let path_y = rect.min.y + NODE_ROW / 2.0;
    painter.extend(egui::Shape::dashed_line(
        &[
            egui::pos2(rect.min.x, path_y),
            egui::pos2(rect.max.x, path_y),
        ],
        egui::Stroke::new(3.0, INK),
        8.0,
        6.0,
    ));

    // Level marker
    let is_work = entry.kind == CareerKind::Work;
    let node_fill = if is_work { ACCENT } else { SECONDARY };
    let node_center = egui::pos2(rect.min.x + NODE_ROW / 2.0, path_y);
    let node_radius = if response.hovered() { 15.0 } else { 13.0 };
    painter.circle_filled(node_center, node_radius, node_fill);
    painter.circle_stroke(node_center, node_radius, egui::Stroke::new(3.0, INK));
    painter.text(
        node_center,
        egui::Align2::CENTER_CENTER,
        if is_work { "W" } else { "E" },
        egui::FontId::proportional(12.0),
        if is_work { egui::Color32::WHITE } else { INK },
    );

    // Entry card
    let lift = if response.hovered() { 3.0 } else { 0.0 };
    let card = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + 4.0, rect.min.y + NODE_ROW - lift),
        egui::pos2(rect.max.x - 20.0, rect.max.y - 8.0 - lift),
    );
    let fill = if current {
        egui::Color32::from_rgb(255, 250, 224)
    } else {
        PANEL_WHITE
    };
    painter.rect_filled(card.translate(egui::vec2(3.0, 3.0)), 0.0, INK);
    painter.rect_filled(card, 0.0, fill);
    painter.rect_stroke(card, 0.0, egui::Stroke::new(2.0, INK));

    let role = painter.layout(
        entry.role.clone(),
        egui::FontId::proportional(15.0),
        INK,
        card.width() - 20.0,
    );
    painter.galley(card.min + egui::vec2(10.0, 10.0), role.clone(), INK);
    let org = painter.layout(
        entry.organization.clone(),
        egui::FontId::proportional(12.0),
        egui::Color32::from_gray(100),
        card.width() - 20.0,
    );
    painter.galley(
        card.min + egui::vec2(10.0, 14.0 + role.size().y),
        org,
        egui::Color32::from_gray(100),
    );

    // Period chip
    let chip_galley = painter.layout_no_wrap(
        entry.period.to_uppercase(),
        egui::FontId::monospace(11.0),
        INK,
    );
    let chip = egui::Rect::from_min_size(
        egui::pos2(card.min.x + 10.0, card.max.y - chip_galley.size().y - 16.0),
        chip_galley.size() + egui::vec2(10.0, 6.0),
    );
    painter.rect_filled(chip, 0.0, egui::Color32::from_gray(238));
    painter.rect_stroke(chip, 0.0, egui::Stroke::new(1.0, egui::Color32::from_gray(200)));
    painter.galley(chip.min + egui::vec2(5.0, 3.0), chip_galley, INK);

    if current {
        let badge = painter.layout_no_wrap(
            "CURRENT LEVEL".to_string(),
            egui::FontId::proportional(10.0),
            egui::Color32::WHITE,
        );
        let badge_rect = egui::Rect::from_min_size(
            egui::pos2(card.max.x - badge.size().x - 16.0, card.min.y - 8.0),
            badge.size() + egui::vec2(10.0, 5.0),
        );
        painter.rect_filled(badge_rect, 6.0, INK);
        painter.galley(badge_rect.min + egui::vec2(5.0, 2.5), badge, egui::Color32::WHITE);
    }

    // End-of-path marker past the oldest entry
    if last {
        painter.circle_filled(egui::pos2(rect.max.x - 8.0, path_y), 6.0, INK);
        painter.text(
            egui::pos2(rect.max.x - 8.0, path_y + 18.0),
            egui::Align2::CENTER_CENTER,
            "GAME START",
            egui::FontId::proportional(11.0),
            egui::Color32::from_gray(160),
        );
    }
}
