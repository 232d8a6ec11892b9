use bevy_egui::egui;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::state::{AppConfig, PagePose, ThemeMode};

// Comic palette
pub const INK: egui::Color32 = egui::Color32::from_rgb(10, 10, 10);
pub const PAPER: egui::Color32 = egui::Color32::from_rgb(250, 247, 240);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(235, 60, 50);
pub const SECONDARY: egui::Color32 = egui::Color32::from_rgb(255, 214, 10);
pub const PANEL_WHITE: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);

/// Offset of the hard comic drop shadow
pub const SHADOW_OFFSET: egui::Vec2 = egui::vec2(6.0, 6.0);

/// Get a scaled font size with minimum of 12
pub fn scaled_font(base_size: f32, scale: f32) -> f32 {
    (base_size.max(12.0) * scale).max(12.0)
}

/// Get a scaled margin/spacing value
pub fn scaled_margin(base_size: f32, scale: f32) -> f32 {
    base_size * scale
}

pub fn hash_str(s: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

/// Apply UI scale and the comic color scheme to the global style
pub fn apply_theme(ctx: &egui::Context, config: &AppConfig) {
    let ui_scale = config.ui_scale;
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(scaled_font(24.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::proportional(scaled_font(15.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(scaled_font(15.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(scaled_font(13.0, ui_scale)),
    );
    style.wrap_mode = Some(egui::TextWrapMode::Wrap);

    let dark = match config.theme_mode {
        ThemeMode::Dark => true,
        ThemeMode::Light | ThemeMode::Auto => false,
    };
    style.visuals = if dark {
        egui::Visuals::dark()
    } else {
        let mut v = egui::Visuals::light();
        v.override_text_color = Some(INK);
        v.panel_fill = PAPER;
        v
    };
    ctx.set_style(style);
}

/// Hard-edged comic panel frame: flat fill, thick ink border, offset
/// ink shadow, no rounding
pub fn comic_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(3.0, INK))
        .inner_margin(egui::Margin::same(14.0))
        .shadow(egui::epaint::Shadow {
            offset: SHADOW_OFFSET,
            blur: 0.0,
            spread: 0.0,
            color: INK,
        })
}

/// Navigation tab styled as a comic burst: the active tab is lifted,
/// tinted and carries a corner tick
pub fn tab_button(
    ui: &mut egui::Ui,
    selected: bool,
    text: impl Into<String>,
    ui_scale: f32,
) -> egui::Response {
    let text = text.into();
    let padding = egui::vec2(scaled_margin(18.0, ui_scale), scaled_margin(10.0, ui_scale));

    let text_color = if selected { egui::Color32::WHITE } else { INK };
    let bg_color = if selected { ACCENT } else { PAPER };

    let galley = ui.painter().layout_no_wrap(
        text.to_uppercase(),
        egui::FontId::proportional(scaled_font(18.0, ui_scale)),
        text_color,
    );

    let tab_size = galley.size() + padding * 2.0;
    // Active tab is lifted; leave room so it never clips
    let lift = 6.0;
    let desired_size = egui::vec2(tab_size.x + SHADOW_OFFSET.x, tab_size.y + lift + SHADOW_OFFSET.y);
    let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let y_offset = if selected { 0.0 } else { lift };
        let draw_rect = egui::Rect::from_min_size(rect.min + egui::vec2(0.0, y_offset), tab_size);

        let bg = if response.hovered() && !selected {
            egui::Color32::from_rgb(240, 235, 222)
        } else {
            bg_color
        };

        // Shadow first, then panel, then border
        ui.painter()
            .rect_filled(draw_rect.translate(SHADOW_OFFSET), 0.0, INK);
        ui.painter().rect_filled(draw_rect, 0.0, bg);
        ui.painter()
            .rect_stroke(draw_rect, 0.0, egui::Stroke::new(3.0, INK));

        if selected {
            // Corner tick on the active tab
            let tick = egui::Rect::from_min_size(
                egui::pos2(draw_rect.max.x - 10.0, draw_rect.min.y + 4.0),
                egui::vec2(6.0, 6.0),
            );
            ui.painter().rect_filled(tick, 0.0, INK);
        }

        ui.painter().galley(draw_rect.min + padding, galley, text_color);
    }

    response
}

/// Overshooting ease for the drop-in and modal pop (the elastic
/// "comic bounce")
pub fn ease_out_back(t: f32) -> f32 {
    let c1 = 1.70158;
    let c3 = c1 + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u * u * u + c1 * u * u
}

pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Visual transform of the content panel for a page-flip pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    /// Extra vertical displacement of the content, points
    pub lift: f32,
    pub opacity: f32,
}

/// Entry displacement of the snapped pose
const ENTRY_LIFT: f32 = 48.0;

/// Map a pose and its eased progress to the transform the panel is
/// painted with. Exactly one transform applies per frame.
pub fn pose_transform(pose: PagePose, progress: f32) -> PageTransform {
    match pose {
        PagePose::Rest => PageTransform { lift: 0.0, opacity: 1.0 },
        PagePose::LiftAway => {
            let t = ease_in_cubic(progress);
            PageTransform {
                lift: ENTRY_LIFT * 0.5 * t,
                opacity: 1.0 - t,
            }
        }
        // Un-animated entry pose, held for one painted frame
        PagePose::PreEntry => PageTransform {
            lift: ENTRY_LIFT,
            opacity: 0.0,
        },
        PagePose::DropIn => {
            let t = ease_out_back(progress);
            PageTransform {
                lift: ENTRY_LIFT * (1.0 - t).max(0.0),
                opacity: ease_out_cubic(progress),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_transform_endpoints() {
        assert_eq!(
            pose_transform(PagePose::Rest, 1.0),
            PageTransform { lift: 0.0, opacity: 1.0 }
        );

        // Drop-in starts exactly where the snap pose sits, so the two
        // frames cannot visually tear
        let snap = pose_transform(PagePose::PreEntry, 1.0);
        let drop_start = pose_transform(PagePose::DropIn, 0.0);
        assert_eq!(snap.lift, drop_start.lift);
        assert_eq!(snap.opacity, 0.0);

        let settled = pose_transform(PagePose::DropIn, 1.0);
        assert!((settled.lift - 0.0).abs() < 1e-3);
        assert!((settled.opacity - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_lift_away_fades_out() {
        let start = pose_transform(PagePose::LiftAway, 0.0);
        let end = pose_transform(PagePose::LiftAway, 1.0);
        assert_eq!(start.opacity, 1.0);
        assert!(end.opacity < 1e-3);
    }

    #[test]
    fn test_ease_out_back_overshoots() {
        assert!(ease_out_back(0.0).abs() < 1e-4);
        assert!((ease_out_back(1.0) - 1.0).abs() < 1e-4);
        // Overshoot past 1 somewhere in the middle
        assert!(ease_out_back(0.7) > 1.0);
    }
}
