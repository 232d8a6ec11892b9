use bevy_egui::egui;
use std::time::Duration;

use crate::content::Skill;
use crate::state::AppState;
use crate::ui::timeline::render_career_timeline;
use crate::ui::widgets::{self, ACCENT, INK, PANEL_WHITE, SECONDARY};

pub fn render_about(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    let wide = ui.available_width() > 900.0;
    if wide {
        let column = (ui.available_width() - 24.0) / 2.0;
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(column);
                render_bio(ui, state, now);
                ui.add_space(22.0);
                render_philosophy(ui, state, now);
            });
            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.set_width(column);
                render_tools(ui, state, now);
                ui.add_space(22.0);
                render_skills(ui, state, now);
            });
        });
    } else {
        render_bio(ui, state, now);
        ui.add_space(22.0);
        render_philosophy(ui, state, now);
        ui.add_space(22.0);
        render_tools(ui, state, now);
        ui.add_space(22.0);
        render_skills(ui, state, now);
    }

    ui.add_space(26.0);
    render_career_timeline(ui, state, now);
}

fn revealed_frame(
    ui: &mut egui::Ui,
    state: &mut AppState,
    id: &str,
    delay_ms: u64,
    now: Duration,
    fill: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui, &mut AppState),
) {
    state
        .reveal
        .mark_visible(id, Duration::from_millis(delay_ms), now);
    let reveal = state.reveal.progress(id, now).unwrap_or(1.0);
    ui.scope(|ui| {
        ui.set_opacity(widgets::ease_out_cubic(reveal));
        widgets::comic_frame(fill).show(ui, |ui| {
            ui.set_width(ui.available_width() - widgets::SHADOW_OFFSET.x);
            add_contents(ui, state);
        });
    });
}

fn render_bio(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    revealed_frame(ui, state, "about-bio", 0, now, PANEL_WHITE, |ui, state| {
        ui.horizontal(|ui| {
            let (badge, _) =
                ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::hover());
            ui.painter().rect_filled(badge, 0.0, ACCENT);
            ui.painter()
                .rect_stroke(badge, 0.0, egui::Stroke::new(2.0, INK));
            ui.painter().text(
                badge.center(),
                egui::Align2::CENTER_CENTER,
                "★",
                egui::FontId::proportional(16.0),
                egui::Color32::WHITE,
            );
            ui.label(
                egui::RichText::new("ORIGIN STORY")
                    .size(28.0)
                    .strong()
                    .color(INK),
            );
        });
        ui.add_space(8.0);
        ui.label(state.content.about.bio.clone());
    });
}

fn render_philosophy(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    revealed_frame(ui, state, "about-philosophy", 200, now, SECONDARY, |ui, state| {
        ui.label(
            egui::RichText::new("PHILOSOPHY")
                .size(20.0)
                .strong()
                .color(INK),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(format!("\"{}\"", state.content.about.philosophy))
                .italics(),
        );
    });
}

fn render_tools(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    revealed_frame(ui, state, "about-tools", 300, now, PANEL_WHITE, |ui, state| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("TECH STACK")
                    .size(20.0)
                    .strong()
                    .color(egui::Color32::WHITE)
                    .background_color(INK),
            );
        });
        ui.add_space(8.0);

        let tools = state.content.about.tools.clone();
        let columns = 2;
        for row in tools.chunks(columns) {
            ui.columns(columns, |cols| {
                for (i, tool) in row.iter().enumerate() {
                    cols[i].group(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new(&tool.name).strong());
                        });
                    });
                }
            });
        }

        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("ARSENAL LOADED")
                    .small()
                    .color(egui::Color32::from_gray(150)),
            );
        });
    });
}

fn render_skills(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    revealed_frame(ui, state, "about-skills", 350, now, PANEL_WHITE, |ui, state| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("SKILL STATS")
                    .size(18.0)
                    .strong()
                    .color(INK),
            );
        });
        ui.add_space(6.0);
        let skills = state.content.about.skills.clone();
        draw_radar(ui, &skills);
    });
}

/// Minimal painter-drawn radar chart for the skill scores
fn draw_radar(ui: &mut egui::Ui, skills: &[Skill]) {
    if skills.is_empty() {
        return;
    }
    let side = ui.available_width().min(320.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect.expand(20.0));
    let center = rect.center();
    let radius = side / 2.0 - 48.0;
    let n = skills.len();

    let spoke = |i: usize, frac: f32| {
        let angle = std::f32::consts::TAU * i as f32 / n as f32 - std::f32::consts::FRAC_PI_2;
        center + egui::vec2(angle.cos(), angle.sin()) * radius * frac
    };

    // Grid rings and axes
    for ring in 1..=4 {
        let frac = ring as f32 / 4.0;
        let points: Vec<egui::Pos2> = (0..n).map(|i| spoke(i, frac)).collect();
        painter.add(egui::Shape::closed_line(
            points,
            egui::Stroke::new(1.0, egui::Color32::from_gray(200)),
        ));
    }
    for i in 0..n {
        painter.line_segment(
            [center, spoke(i, 1.0)],
            egui::Stroke::new(1.0, egui::Color32::from_gray(220)),
        );
    }

    // Score polygon
    let points: Vec<egui::Pos2> = skills
        .iter()
        .enumerate()
        .map(|(i, s)| spoke(i, s.score as f32 / s.full_mark.max(1) as f32))
        .collect();
    painter.add(egui::Shape::convex_polygon(
        points.clone(),
        ACCENT.gamma_multiply(0.25),
        egui::Stroke::new(2.0, ACCENT),
    ));
    for p in &points {
        painter.circle_filled(*p, 3.0, ACCENT);
    }

    // Axis labels
    for (i, skill) in skills.iter().enumerate() {
        let pos = spoke(i, 1.0) + (spoke(i, 1.0) - center) * 0.18;
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            &skill.subject,
            egui::FontId::proportional(11.0),
            INK,
        );
    }
}
