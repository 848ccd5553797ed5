pub mod content;
mod systems;

use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};
use systems::*;

/// Windows narrower than this get the rotate prompt instead of the scene UI
pub const NARROW_WIDTH: f32 = 512.0;

pub fn is_narrow(width: f32) -> bool {
    width < NARROW_WIDTH
}

/// Whether a primary press closes the open section panel.
///
/// Only presses on overlay widgets outside the panel count. Presses on the
/// scene itself start camera drags or pick markers and leave the panel open.
pub fn closes_panel_on_press(panel_open: bool, over_ui: bool, over_panel: bool) -> bool {
    panel_open && over_ui && !over_panel
}

/// True while the pointer is over, or dragging, an egui widget
#[derive(Resource, Default)]
pub struct UiPointerCapture(pub bool);

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .init_resource::<UiPointerCapture>()
            .insert_resource(load_portfolio_content())
            .add_systems(
                EguiPrimaryContextPass,
                (draw_world_labels, draw_scene_ui).chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(320.0, true)]
    #[case(511.9, true)]
    #[case(512.0, false)]
    #[case(1500.0, false)]
    fn narrow_below_512_logical_pixels(#[case] width: f32, #[case] expected: bool) {
        assert_eq!(is_narrow(width), expected);
    }

    #[rstest]
    #[case::scene_press_starts_a_drag(true, false, false, false)]
    #[case::inside_the_panel(true, true, true, false)]
    #[case::overlay_button_outside_the_panel(true, true, false, true)]
    #[case::nothing_open(false, true, false, false)]
    fn only_overlay_presses_outside_the_panel_close_it(
        #[case] panel_open: bool,
        #[case] over_ui: bool,
        #[case] over_panel: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(closes_panel_on_press(panel_open, over_ui, over_panel), expected);
    }
}
