use bevy_egui::egui;
use std::path::Path;
use std::time::Duration;

use crate::content::Project;
use crate::imaging;
use crate::state::{AppState, RevealLedger};
use crate::ui::widgets::{self, INK, PANEL_WHITE, SECONDARY};

const CARD_MIN_WIDTH: f32 = 300.0;
const CARD_HEIGHT: f32 = 280.0;
const CARD_GAP: f32 = 20.0;

/// Resolve a project's thumbnail texture, loading it on first use.
/// Missing art falls back to a generated halftone cover.
pub fn project_thumbnail(
    ui: &egui::Ui,
    state: &mut AppState,
    project: &Project,
) -> egui::TextureHandle {
    if let Some(texture) = state.texture_cache.get(&project.thumbnail) {
        return texture.clone();
    }
    let path = Path::new("assets/thumbs").join(&project.thumbnail);
    let texture = match imaging::load_image_texture(ui.ctx(), &project.thumbnail, &path) {
        Ok(texture) => texture,
        Err(e) => {
            bevy::log::debug!("thumbnail {} unavailable ({}), using placeholder", project.thumbnail, e);
            imaging::placeholder_texture(
                ui.ctx(),
                &project.thumbnail,
                widgets::hash_str(&project.id),
            )
        }
    };
    state
        .texture_cache
        .insert(project.thumbnail.clone(), texture.clone());
    texture
}

/// Paint one project card. Returns the card-center origin when the
/// card was activated this frame.
pub fn project_card(
    ui: &mut egui::Ui,
    state: &mut AppState,
    project: &Project,
    size: egui::Vec2,
    reveal_delay: Duration,
    now: Duration,
) -> Option<(f32, f32)> {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return None;
    }

    // One-shot reveal latch: first visible frame starts the pop-in
    let reveal_id = format!("card-{}", project.id);
    state.reveal.mark_visible(&reveal_id, reveal_delay, now);
    let reveal = state.reveal.progress(&reveal_id, now).unwrap_or(1.0);
    let alpha = widgets::ease_out_cubic(reveal);
    let pop = (1.0 - widgets::ease_out_back(reveal)) * 16.0;

    let hovered = response.hovered();
    let lift = if hovered { 3.0 } else { 0.0 };
    let card = egui::Rect::from_min_size(
        rect.min + egui::vec2(0.0, pop - lift),
        size - widgets::SHADOW_OFFSET,
    );

    // Per-card deterministic tilt nudges the shadow direction
    let tilt = RevealLedger::tilt_degrees(&reveal_id);
    let shadow = widgets::SHADOW_OFFSET + egui::vec2(tilt, lift);

    let painter = ui.painter();
    painter.rect_filled(card.translate(shadow), 0.0, INK.gamma_multiply(alpha));
    painter.rect_filled(card, 0.0, PANEL_WHITE.gamma_multiply(alpha));

    // Thumbnail fills the upper panel; pointer-following offset gives
    // the magnetic hover drift
    let thumb_rect = egui::Rect::from_min_max(
        card.min,
        egui::pos2(card.max.x, card.max.y - 76.0),
    );
    let mut uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if hovered {
        if let Some(pointer) = response.hover_pos() {
            let offset = (pointer - thumb_rect.center()) / thumb_rect.size() * 0.04;
            uv = uv.translate(egui::vec2(
                offset.x.clamp(-0.04, 0.04),
                offset.y.clamp(-0.04, 0.04),
            ));
        }
    }
    let texture = project_thumbnail(ui, state, project);
    ui.painter().image(
        texture.id(),
        thumb_rect,
        uv,
        egui::Color32::WHITE.gamma_multiply(alpha),
    );

    let painter = ui.painter();

    // Kind tag over the art
    let tag_galley = painter.layout_no_wrap(
        project.kind.label().to_uppercase(),
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE.gamma_multiply(alpha),
    );
    let tag_rect = egui::Rect::from_min_size(
        thumb_rect.min + egui::vec2(10.0, 10.0),
        tag_galley.size() + egui::vec2(12.0, 6.0),
    );
    painter.rect_filled(tag_rect, 0.0, INK.gamma_multiply(alpha));
    painter.galley(
        tag_rect.min + egui::vec2(6.0, 3.0),
        tag_galley,
        egui::Color32::WHITE,
    );

    if project.featured {
        let star = painter.layout_no_wrap(
            "★".to_string(),
            egui::FontId::proportional(16.0),
            SECONDARY.gamma_multiply(alpha),
        );
        painter.galley(
            egui::pos2(thumb_rect.max.x - 26.0, thumb_rect.min.y + 8.0),
            star,
            SECONDARY,
        );
    }

    // Title block under the art
    let title_galley = painter.layout(
        project.title.clone(),
        egui::FontId::proportional(17.0),
        INK.gamma_multiply(alpha),
        card.width() - 24.0,
    );
    painter.galley(
        egui::pos2(card.min.x + 12.0, thumb_rect.max.y + 10.0),
        title_galley,
        INK,
    );
    let platform_galley = painter.layout_no_wrap(
        format!("on {}", project.platform.label()),
        egui::FontId::monospace(12.0),
        egui::Color32::from_gray(120).gamma_multiply(alpha),
    );
    painter.galley(
        egui::pos2(card.min.x + 12.0, card.max.y - 22.0),
        platform_galley,
        egui::Color32::from_gray(120),
    );

    painter.rect_stroke(card, 0.0, egui::Stroke::new(3.0, INK.gamma_multiply(alpha)));

    if response.clicked() {
        let center = card.center();
        Some((center.x, center.y))
    } else {
        None
    }
}

/// The full archive tab: every project in a responsive grid
pub fn render_projects(ui: &mut egui::Ui, state: &mut AppState, now: Duration) {
    ui.horizontal(|ui| {
        widgets::comic_frame(SECONDARY).show(ui, |ui| {
            ui.label(
                egui::RichText::new("FULL ARCHIVE")
                    .size(26.0)
                    .strong()
                    .color(INK),
            );
        });
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("// SELECT A PANEL TO VIEW")
                .monospace()
                .color(egui::Color32::from_gray(130)),
        );
    });
    ui.add_space(18.0);

    let projects = state.content.projects.clone();
    render_card_grid(ui, state, &projects, now);
}

/// Lay cards out in as many columns as fit
pub fn render_card_grid(
    ui: &mut egui::Ui,
    state: &mut AppState,
    projects: &[Project],
    now: Duration,
) {
    let avail = ui.available_width();
    let columns = ((avail + CARD_GAP) / (CARD_MIN_WIDTH + CARD_GAP))
        .floor()
        .max(1.0) as usize;
    let card_width = (avail - CARD_GAP * (columns - 1) as f32) / columns as f32;
    let size = egui::vec2(card_width, CARD_HEIGHT);

    let mut opened: Option<(Project, (f32, f32))> = None;
    for row in projects.chunks(columns) {
        ui.horizontal(|ui| {
            for (i, project) in row.iter().enumerate() {
                let delay = Duration::from_millis(50 * i as u64);
                if let Some(origin) = project_card(ui, state, project, size, delay, now) {
                    opened = Some((project.clone(), origin));
                }
                ui.add_space(CARD_GAP - ui.spacing().item_spacing.x);
            }
        });
        ui.add_space(CARD_GAP - ui.spacing().item_spacing.y);
    }

    if let Some((project, origin)) = opened {
        state.modal.open(project, Some(origin), now);
    }
}
