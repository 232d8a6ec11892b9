use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod content;
mod imaging;
mod state;
mod ui;

use state::AppState;
use ui::ui_system;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ragesh Changam - Portfolio".into(),
                resolution: (1440., 900.).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .init_resource::<AppState>()
        .add_systems(Startup, setup)
        .add_systems(Update, ui_system)
        .run();
}

fn setup(mut commands: Commands, mut state: ResMut<AppState>) {
    commands.spawn(Camera2d);
    *state = AppState::new();
    info!(
        "loaded {} projects, {} career entries",
        state.content.projects.len(),
        state.content.career.len()
    );
}
