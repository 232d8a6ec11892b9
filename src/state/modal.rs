use std::time::Duration;

use super::types::{ModalPhase, MODAL_ENTER, MODAL_EXIT, MODAL_MOUNT};
use crate::content::Project;

/// What the modal body shows for a project. Pure function of the
/// platform tag; YouTube is the only inline case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    /// Inline player panel pointing at the external URL
    Embed { url: String },
    /// Thumbnail backdrop, description and an outbound link
    External { url: String, platform: &'static str },
}

impl ModalContent {
    pub fn for_project(project: &Project) -> Self {
        if project.platform.is_embeddable() {
            ModalContent::Embed {
                url: project.external_url.clone(),
            }
        } else {
            ModalContent::External {
                url: project.external_url.clone(),
                platform: project.platform.label(),
            }
        }
    }
}

/// Coordinates the project overlay: which project is open, the window
/// point its entry animation grows from, and a mount/unmount lifecycle
/// that keeps the overlay painted until the exit animation finishes.
///
/// Holds the only scroll-lock authority: background scrolling is
/// suppressed exactly while `is_open()`.
pub struct ModalViewer {
    project: Option<Project>,
    /// Center of the activated card, window coordinates
    origin: Option<(f32, f32)>,
    phase: ModalPhase,
    phase_started: Duration,
    deadline: Option<Duration>,
}

impl Default for ModalViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalViewer {
    pub fn new() -> Self {
        Self {
            project: None,
            origin: None,
            phase: ModalPhase::Closed,
            phase_started: Duration::ZERO,
            deadline: None,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// True while the overlay occupies the screen in any way; drives
    /// the background scroll lock.
    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Whether the overlay should be painted this frame
    pub fn should_render(&self) -> bool {
        self.is_open() && self.project.is_some()
    }

    /// Open the overlay for a project. A pending unmount from an
    /// earlier close is cancelled, so a quick close-then-reopen never
    /// tears down the fresh state (and the scroll lock never flickers).
    pub fn open(&mut self, project: Project, origin: Option<(f32, f32)>, now: Duration) {
        self.project = Some(project);
        self.origin = origin;
        self.deadline = None;
        self.enter(ModalPhase::Mounting, now);
    }

    /// Begin the exit animation; the overlay unmounts MODAL_EXIT later.
    pub fn close(&mut self, now: Duration) {
        if matches!(self.phase, ModalPhase::Mounting | ModalPhase::Visible) {
            self.enter(ModalPhase::Unmounting, now);
            self.deadline = Some(now + MODAL_EXIT);
        }
    }

    /// Advance the lifecycle. Call once per painted frame.
    pub fn tick(&mut self, now: Duration) {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Visible => {}
            ModalPhase::Mounting => match self.deadline {
                // First tick after the at-rest pose was painted
                None => self.deadline = Some(now + MODAL_MOUNT),
                Some(d) => {
                    if now >= d {
                        self.enter(ModalPhase::Visible, now);
                        self.deadline = None;
                    }
                }
            },
            ModalPhase::Unmounting => {
                if self.deadline.is_some_and(|d| now >= d) {
                    self.enter(ModalPhase::Closed, now);
                    self.deadline = None;
                    self.project = None;
                    self.origin = None;
                }
            }
        }
    }

    fn enter(&mut self, phase: ModalPhase, now: Duration) {
        self.phase = phase;
        self.phase_started = now;
    }

    /// Percent point the panel transform grows from, relative to the
    /// window. Center when no origin was captured.
    pub fn transform_origin(&self, viewport: (f32, f32)) -> (f32, f32) {
        match self.origin {
            Some((x, y)) if viewport.0 > 0.0 && viewport.1 > 0.0 => {
                (x / viewport.0 * 100.0, y / viewport.1 * 100.0)
            }
            _ => (50.0, 50.0),
        }
    }

    /// How far the entry/exit animation has played, 0 = fully at the
    /// origin pose, 1 = fully at rest. Mounting stays at 0 so the
    /// first painted frame is the un-animated pose.
    pub fn animation_progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.phase_started);
        match self.phase {
            ModalPhase::Closed | ModalPhase::Mounting => 0.0,
            ModalPhase::Visible => {
                (elapsed.as_secs_f32() / MODAL_ENTER.as_secs_f32()).clamp(0.0, 1.0)
            }
            ModalPhase::Unmounting => {
                1.0 - (elapsed.as_secs_f32() / MODAL_EXIT.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Platform, Project, ProjectKind, SiteContent};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn sample(platform: Platform) -> Project {
        Project {
            id: "p".to_string(),
            title: "Sample".to_string(),
            kind: ProjectKind::Ux,
            platform,
            external_url: "https://example.com/work".to_string(),
            thumbnail: "p.png".to_string(),
            short_description: "desc".to_string(),
            featured: false,
        }
    }

    #[test]
    fn test_open_renders_before_visible() {
        let mut modal = ModalViewer::new();
        modal.open(sample(Platform::Web), Some((100.0, 100.0)), ms(0));
        assert_eq!(modal.phase(), ModalPhase::Mounting);
        assert!(modal.should_render());
        assert_eq!(modal.animation_progress(ms(5)), 0.0);

        // First tick only arms the mount delay
        modal.tick(ms(16));
        assert_eq!(modal.phase(), ModalPhase::Mounting);
        modal.tick(ms(32));
        assert_eq!(modal.phase(), ModalPhase::Visible);
    }

    #[test]
    fn test_transform_origin_math() {
        let mut modal = ModalViewer::new();
        modal.open(sample(Platform::Web), Some((480.0, 270.0)), ms(0));
        let (x, y) = modal.transform_origin((1920.0, 1080.0));
        assert!((x - 25.0).abs() < 1e-4);
        assert!((y - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_transform_origin_defaults_to_center() {
        let mut modal = ModalViewer::new();
        modal.open(sample(Platform::Web), None, ms(0));
        assert_eq!(modal.transform_origin((1920.0, 1080.0)), (50.0, 50.0));
    }

    #[test]
    fn test_close_tears_down_after_exit_duration() {
        let mut modal = ModalViewer::new();
        modal.open(sample(Platform::Web), Some((10.0, 10.0)), ms(0));
        modal.tick(ms(16));
        modal.tick(ms(32));
        assert_eq!(modal.phase(), ModalPhase::Visible);

        modal.close(ms(100));
        assert_eq!(modal.phase(), ModalPhase::Unmounting);
        assert!(modal.is_open());
        assert!(modal.should_render());

        modal.tick(ms(399));
        assert_eq!(modal.phase(), ModalPhase::Unmounting);
        modal.tick(ms(400));
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(modal.project().is_none());
        assert!(!modal.is_open());
        assert_eq!(modal.transform_origin((1920.0, 1080.0)), (50.0, 50.0));
    }

    #[test]
    fn test_reopen_cancels_pending_unmount() {
        let mut modal = ModalViewer::new();
        modal.open(sample(Platform::Web), Some((10.0, 10.0)), ms(0));
        modal.tick(ms(16));
        modal.tick(ms(32));
        modal.close(ms(50));

        // Reopen with a different project before the 300ms unmount
        let mut second = sample(Platform::YouTube);
        second.id = "second".to_string();
        modal.open(second, Some((20.0, 20.0)), ms(150));
        assert!(modal.is_open());

        // The stale unmount deadline must not fire
        modal.tick(ms(360));
        modal.tick(ms(376));
        assert!(modal.is_open());
        assert_eq!(modal.phase(), ModalPhase::Visible);
        assert_eq!(modal.project().unwrap().id, "second");
    }

    #[test]
    fn test_close_while_closed_is_noop() {
        let mut modal = ModalViewer::new();
        modal.close(ms(10));
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(!modal.should_render());
    }

    #[test]
    fn test_content_branch_exhaustive_over_platforms() {
        for platform in Platform::ALL {
            let content = ModalContent::for_project(&sample(platform));
            match platform {
                Platform::YouTube => assert!(matches!(content, ModalContent::Embed { .. })),
                _ => assert!(matches!(content, ModalContent::External { .. })),
            }
        }
    }

    #[test]
    fn test_embed_branch_for_real_content() {
        let content = SiteContent::embedded().unwrap();
        let showreel = content.get_project("proj-02").unwrap();
        assert!(matches!(
            ModalContent::for_project(showreel),
            ModalContent::Embed { .. }
        ));
        let medium = content.get_project("proj-01").unwrap();
        match ModalContent::for_project(medium) {
            ModalContent::External { platform, .. } => assert_eq!(platform, "Medium"),
            other => panic!("expected external branch, got {:?}", other),
        }
    }
}
