use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::state::{AppConfig, AppState, Tab};
use crate::ui::about::render_about;
use crate::ui::home::render_home;
use crate::ui::modal::render_modal;
use crate::ui::projects::render_projects;
use crate::ui::widgets::{self, ACCENT, INK, PAPER};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ui_system(mut contexts: EguiContexts, mut state: ResMut<AppState>, time: Res<Time>) {
    let ctx = contexts.ctx_mut();
    let now = time.elapsed();

    widgets::apply_theme(ctx, &state.config);

    handle_scale_shortcuts(ctx, &mut state.config);

    // Advance both animation machines once per frame
    state.flip.tick(now);
    state.modal.tick(now);
    if state.flip.take_scroll_reset() {
        // Fresh page: scroll to the top and let the pop-ins replay
        state.scroll_to_top = true;
        state.reveal.reset();
    }

    render_header(ctx, &mut state);
    render_footer(ctx, &state);

    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).fill(PAPER))
        .show(ctx, |ui| {
            render_navigation(ui, &mut state, now);
            ui.add_space(14.0);
            render_page(ui, &mut state, now);
        });

    // Overlay last so it sits above everything
    render_modal(ctx, &mut state, now);
}

/// Ctrl+Plus/Minus/0 adjust the UI scale. Plus requires Shift on most
/// keyboards (Shift+=); key events are consumed even at the bounds.
fn handle_scale_shortcuts(ctx: &egui::Context, config: &mut AppConfig) {
    let increase = ctx.input_mut(|i| {
        i.modifiers.command
            && (i.consume_key(egui::Modifiers::COMMAND, egui::Key::Plus)
                || i.consume_key(
                    egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
                    egui::Key::Equals,
                ))
    });
    let decrease = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Minus));
    let reset = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Num0));

    let target = if increase {
        step_scale(config.ui_scale, 0.25)
    } else if decrease {
        step_scale(config.ui_scale, -0.25)
    } else if reset {
        1.0
    } else {
        return;
    };
    if target != config.ui_scale {
        config.ui_scale = target;
        config.save();
    }
}

fn step_scale(current: f32, delta: f32) -> f32 {
    (current + delta).clamp(0.75, 2.0)
}

fn render_header(ctx: &egui::Context, state: &mut AppState) {
    let site = state.content.site.clone();
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::none()
                .fill(PAPER)
                .inner_margin(egui::Margin::symmetric(18.0, 10.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (logo, _) =
                    ui.allocate_exact_size(egui::vec2(30.0, 30.0), egui::Sense::hover());
                ui.painter().rect_filled(logo, 0.0, ACCENT);
                ui.painter()
                    .rect_stroke(logo, 0.0, egui::Stroke::new(3.0, INK));
                ui.painter().text(
                    logo.center(),
                    egui::Align2::CENTER_CENTER,
                    "R",
                    egui::FontId::proportional(18.0),
                    egui::Color32::WHITE,
                );
                ui.label(
                    egui::RichText::new(site.name.to_uppercase())
                        .size(20.0)
                        .strong()
                        .color(INK),
                );
                ui.label(
                    egui::RichText::new(&site.subtitle)
                        .monospace()
                        .small()
                        .color(egui::Color32::from_gray(120)),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let linkedin = egui::Button::new(
                        egui::RichText::new("LINKEDIN ↗").strong().color(INK),
                    )
                    .fill(PAPER)
                    .stroke(egui::Stroke::new(2.0, INK));
                    if ui.add(linkedin).clicked() {
                        ui.ctx()
                            .open_url(egui::OpenUrl::new_tab(&site.linkedin));
                    }
                });
            });
        });
}

fn render_footer(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("footer")
        .frame(
            egui::Frame::none()
                .fill(INK)
                .inner_margin(egui::Margin::symmetric(18.0, 6.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "© {}. All rights reserved. No capes.",
                        state.content.site.name
                    ))
                    .small()
                    .color(egui::Color32::from_gray(180)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("v{}", VERSION))
                            .small()
                            .color(egui::Color32::from_gray(120)),
                    );
                });
            });
        });
}

fn render_navigation(ui: &mut egui::Ui, state: &mut AppState, now: std::time::Duration) {
    let active = state.flip.active();
    let ui_scale = state.config.ui_scale;
    ui.horizontal(|ui| {
        for tab in Tab::ALL {
            if widgets::tab_button(ui, tab == active, tab.label(), ui_scale).clicked() {
                state.flip.request(tab, now);
            }
        }
    });
}

/// The flipping page: one tab's content, painted with the transform of
/// the current flip pose. Background scrolling is locked while the
/// overlay is open.
fn render_page(ui: &mut egui::Ui, state: &mut AppState, now: std::time::Duration) {
    let transform = widgets::pose_transform(state.flip.pose(), state.flip.phase_progress(now));
    let scroll_to_top = std::mem::take(&mut state.scroll_to_top);

    let mut scroll = egui::ScrollArea::vertical()
        .id_salt("page_scroll")
        .enable_scrolling(!state.modal.is_open());
    if scroll_to_top {
        scroll = scroll.vertical_scroll_offset(0.0);
    }
    scroll.show(ui, |ui| {
        ui.scope(|ui| {
            ui.set_opacity(transform.opacity);
            ui.add_space(transform.lift);
            match state.flip.active() {
                Tab::Home => render_home(ui, state, now),
                Tab::Projects => render_projects(ui, state, now),
                Tab::About => render_about(ui, state, now),
            }
            ui.add_space(24.0);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_steps_clamp_at_bounds() {
        assert_eq!(step_scale(1.0, 0.25), 1.25);
        assert_eq!(step_scale(2.0, 0.25), 2.0);
        assert_eq!(step_scale(0.75, -0.25), 0.75);
        assert_eq!(step_scale(1.0, -0.25), 0.75);
    }
}
