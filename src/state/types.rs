use std::time::Duration;

/// Content tabs. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Projects,
    About,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Projects, Tab::About];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Projects => "Projects",
            Tab::About => "About Me",
        }
    }
}

/// Where a page-flip cycle currently is. Cycles always run
/// Idle -> FlippingOut -> SnappedIn -> FlippingIn -> Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    FlippingOut,
    SnappedIn,
    FlippingIn,
}

/// Visual pose the content panel is painted with. Each phase maps to
/// exactly one pose; the UI applies exactly one per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePose {
    /// Steady state, no transform
    Rest,
    /// Current page lifting and rotating away
    LiftAway,
    /// New page pre-rotated into its entry position, no animation
    PreEntry,
    /// New page dropping from the entry position to rest
    DropIn,
}

impl TransitionPhase {
    pub fn pose(&self) -> PagePose {
        match self {
            TransitionPhase::Idle => PagePose::Rest,
            TransitionPhase::FlippingOut => PagePose::LiftAway,
            TransitionPhase::SnappedIn => PagePose::PreEntry,
            TransitionPhase::FlippingIn => PagePose::DropIn,
        }
    }
}

/// Lifecycle of the project modal overlay. The overlay is painted for
/// every state except Closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Mounting,
    Visible,
    Unmounting,
}

/// Time the outgoing page takes to lift away
pub const FLIP_OUT: Duration = Duration::from_millis(400);

/// Hold on the snapped entry position after its first painted frame,
/// so the no-transform pose and the drop-in animation land on two
/// distinct frames
pub const SNAP_HOLD: Duration = Duration::from_millis(50);

/// Time the incoming page takes to drop in, elastic settle included
pub const FLIP_IN: Duration = Duration::from_millis(650);

/// Delay between the modal's first painted frame and the start of its
/// entry animation
pub const MODAL_MOUNT: Duration = Duration::from_millis(10);

/// Length of the modal entry animation once Visible
pub const MODAL_ENTER: Duration = Duration::from_millis(500);

/// Length of the modal exit animation; the overlay stays mounted until
/// this has elapsed after close()
pub const MODAL_EXIT: Duration = Duration::from_millis(300);
