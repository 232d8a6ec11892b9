use bevy_egui::egui;
use std::time::Duration;

use crate::content::Project;
use crate::state::{AppState, ModalContent};
use crate::ui::projects::project_thumbnail;
use crate::ui::widgets::{self, ACCENT, INK, PANEL_WHITE, SECONDARY};

/// Scale of the panel at the origin pose
const START_SCALE: f32 = 0.2;

/// Extra downward displacement at the origin pose, points
const START_DROP: f32 = 48.0;

fn scale_about(rect: egui::Rect, origin: egui::Pos2, scale: f32) -> egui::Rect {
    egui::Rect::from_min_max(
        origin + (rect.min - origin) * scale,
        origin + (rect.max - origin) * scale,
    )
}

/// Whether a backdrop click should close the overlay. Only clicks
/// landing outside the panel dismiss; the panel body is inert.
fn click_dismisses(panel: egui::Rect, pointer: Option<egui::Pos2>) -> bool {
    pointer.map_or(false, |p| !panel.contains(p))
}

/// Paint the project overlay: dimmed click-to-close backdrop plus the
/// panel growing out of the captured click origin. Painted last so it
/// sits above everything.
pub fn render_modal(ctx: &egui::Context, state: &mut AppState, now: Duration) {
    let Some(project) = state.modal.project().cloned() else {
        return;
    };
    if !state.modal.should_render() {
        return;
    }

    let screen = ctx.screen_rect();
    let raw = state.modal.animation_progress(now);
    let eased = widgets::ease_out_back(raw).max(0.0);

    let max_size = egui::vec2(
        (screen.width() - 48.0).min(960.0),
        screen.height() * 0.86,
    );
    let final_rect = egui::Rect::from_center_size(screen.center(), max_size);

    // The panel scales out of the click origin and settles centered
    let (ox, oy) = state
        .modal
        .transform_origin((screen.width(), screen.height()));
    let origin = egui::pos2(screen.width() * ox / 100.0, screen.height() * oy / 100.0);
    let scale = START_SCALE + (1.0 - START_SCALE) * eased;
    let reveal_rect = scale_about(final_rect, origin, scale)
        .translate(egui::vec2(0.0, (1.0 - raw) * START_DROP));

    // Backdrop. Clicks on the panel body fall through to this widget,
    // so dismissal is gated on where the pointer actually landed.
    let backdrop = egui::Area::new(egui::Id::new("modal_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen, 0.0, INK.gamma_multiply(0.85 * raw));
            ui.allocate_rect(screen, egui::Sense::click())
        })
        .inner;
    let mut close_requested =
        backdrop.clicked() && click_dismisses(reveal_rect, backdrop.interact_pointer_pos());
    egui::Area::new(egui::Id::new("modal_panel"))
        .order(egui::Order::Foreground)
        .fixed_pos(final_rect.min)
        .show(ctx, |ui| {
            ui.set_clip_rect(reveal_rect.intersect(screen));
            ui.set_opacity(raw);
            ui.set_width(final_rect.width());

            // Header: title chip and close button
            ui.horizontal(|ui| {
                widgets::comic_frame(SECONDARY).show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(project.title.to_uppercase())
                            .size(22.0)
                            .strong()
                            .color(INK),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = egui::Button::new(
                        egui::RichText::new("✕").size(20.0).color(egui::Color32::WHITE),
                    )
                    .fill(ACCENT)
                    .stroke(egui::Stroke::new(3.0, INK))
                    .min_size(egui::vec2(40.0, 40.0));
                    if ui.add(close).clicked() {
                        close_requested = true;
                    }
                });
            });
            ui.add_space(10.0);

            widgets::comic_frame(PANEL_WHITE).show(ui, |ui| {
                ui.set_width(final_rect.width() - widgets::SHADOW_OFFSET.x - 28.0);
                let body_height = final_rect.height() - 160.0;
                match ModalContent::for_project(&project) {
                    ModalContent::Embed { url } => {
                        render_player(ui, state, &project, &url, body_height);
                        render_footer(ui, &project, true);
                    }
                    ModalContent::External { url, platform } => {
                        render_fallback(ui, state, &project, &url, platform, body_height);
                        render_footer(ui, &project, false);
                    }
                }
            });
        });

    // Escape closes too
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        close_requested = true;
    }
    if close_requested {
        state.modal.close(now);
    }
}

/// Inline player panel for the one embeddable platform
fn render_player(
    ui: &mut egui::Ui,
    state: &mut AppState,
    project: &Project,
    url: &str,
    height: f32,
) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    let texture = project_thumbnail(ui, state, project);
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::BLACK);
    painter.image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::from_gray(150),
    );

    // Play control centered over the frame
    let play_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(84.0, 58.0));
    let play = ui.put(
        play_rect,
        egui::Button::new(
            egui::RichText::new("▶").size(26.0).color(egui::Color32::WHITE),
        )
        .fill(ACCENT)
        .stroke(egui::Stroke::new(3.0, INK)),
    );
    if play.clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
    ui.painter().text(
        egui::pos2(rect.center().x, rect.max.y - 18.0),
        egui::Align2::CENTER_CENTER,
        "EMBEDDED PLAYER",
        egui::FontId::monospace(11.0),
        egui::Color32::from_gray(180),
    );
}

/// Non-embeddable fallback: art backdrop, description, outbound link
fn render_fallback(
    ui: &mut egui::Ui,
    state: &mut AppState,
    project: &Project,
    url: &str,
    platform: &str,
    height: f32,
) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    let texture = project_thumbnail(ui, state, project);
    let painter = ui.painter_at(rect);
    painter.image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(110));

    painter.text(
        egui::pos2(rect.center().x, rect.center().y - 52.0),
        egui::Align2::CENTER_CENTER,
        format!("Content hosted on {}", platform),
        egui::FontId::proportional(24.0),
        SECONDARY,
    );
    let desc = painter.layout(
        project.short_description.clone(),
        egui::FontId::proportional(15.0),
        egui::Color32::WHITE,
        rect.width().min(460.0),
    );
    painter.galley(
        egui::pos2(rect.center().x - desc.size().x / 2.0, rect.center().y - 20.0),
        desc,
        egui::Color32::WHITE,
    );

    let link_rect = egui::Rect::from_center_size(
        egui::pos2(rect.center().x, rect.center().y + 64.0),
        egui::vec2(190.0, 46.0),
    );
    let link = ui.put(
        link_rect,
        egui::Button::new(
            egui::RichText::new("VIEW PROJECT ↗")
                .size(16.0)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(ACCENT)
        .stroke(egui::Stroke::new(3.0, egui::Color32::WHITE)),
    );
    if link.clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
}

fn render_footer(ui: &mut egui::Ui, project: &Project, embedded: bool) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(project.kind.label())
                .strong()
                .color(egui::Color32::WHITE)
                .background_color(INK),
        );
        ui.label(
            egui::RichText::new(&project.short_description)
                .color(egui::Color32::from_gray(90)),
        );
        if !embedded {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new("External Link Mode")
                        .monospace()
                        .small()
                        .color(egui::Color32::from_gray(150)),
                );
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> egui::Rect {
        egui::Rect::from_min_max(egui::pos2(100.0, 100.0), egui::pos2(500.0, 400.0))
    }

    #[test]
    fn test_backdrop_click_outside_panel_dismisses() {
        assert!(click_dismisses(panel(), Some(egui::pos2(50.0, 50.0))));
        assert!(click_dismisses(panel(), Some(egui::pos2(600.0, 250.0))));
        assert!(click_dismisses(panel(), Some(egui::pos2(300.0, 450.0))));
    }

    #[test]
    fn test_click_on_panel_body_does_not_dismiss() {
        // Title chip, description text, artwork: all inside the panel
        assert!(!click_dismisses(panel(), Some(egui::pos2(300.0, 250.0))));
        assert!(!click_dismisses(panel(), Some(egui::pos2(100.0, 100.0))));
        // No pointer position, no dismissal
        assert!(!click_dismisses(panel(), None));
    }
}
