use crate::core::camera::components::MainCamera;
use crate::core::state::ScenePhase;
use crate::markers::components::{Hovered, Marker, MarkerPulse};
use crate::markers::logic::display_label;
use crate::scene::logic::SceneControls;
use crate::ui::content::{PortfolioContent, SkillCategory};
use crate::ui::{UiPointerCapture, closes_panel_on_press, is_narrow};
use bevy::log::error;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, egui};

const NAME_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1a, 0x20, 0x2c);
const PANEL_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(230, 230, 230, 230);
const LINK_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1e, 0x40, 0xaf);

pub fn load_portfolio_content() -> PortfolioContent {
    match PortfolioContent::embedded() {
        Ok(content) => content,
        Err(err) => {
            error!("{err}");
            PortfolioContent::default()
        }
    }
}

fn window_is_narrow(window_q: &Query<&Window, With<PrimaryWindow>>) -> bool {
    window_q
        .single()
        .map(|window| is_narrow(window.width()))
        .unwrap_or(false)
}

/// Name at the world origin and a label over every marker
pub fn draw_world_labels(
    mut contexts: EguiContexts,
    controls: Res<SceneControls>,
    content: Res<PortfolioContent>,
    window_q: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    markers: Query<(Entity, &Marker, &Hovered, &MarkerPulse, &GlobalTransform)>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_q.single() else {
        return;
    };
    let narrow = window_is_narrow(&window_q);

    if let Ok(origin) = camera.world_to_viewport(camera_transform, Vec3::ZERO) {
        egui::Area::new(egui::Id::new("centered_name"))
            .order(egui::Order::Background)
            .fixed_pos(egui::pos2(origin.x, origin.y))
            .pivot(egui::Align2::CENTER_CENTER)
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(&content.name)
                        .size(36.0)
                        .strong()
                        .color(NAME_COLOR),
                );
            });
    }

    for (entity, marker, hovered, pulse, transform) in markers.iter() {
        let Ok(position) = camera.world_to_viewport(camera_transform, transform.translation())
        else {
            continue;
        };

        let text = display_label(
            &marker.label,
            hovered.0,
            pulse.0.is_emphasized(),
            controls.orbiting(),
            narrow,
        );
        let size = if hovered.0 { 14.0 } else { 18.0 };

        egui::Area::new(egui::Id::new(("marker_label", entity)))
            .order(egui::Order::Background)
            .fixed_pos(egui::pos2(position.x, position.y))
            .pivot(egui::Align2::CENTER_CENTER)
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .size(size)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
            });
    }
}

pub fn draw_scene_ui(
    mut contexts: EguiContexts,
    mut controls: ResMut<SceneControls>,
    mut next_state: ResMut<NextState<ScenePhase>>,
    mut pointer_capture: ResMut<UiPointerCapture>,
    content: Res<PortfolioContent>,
    window_q: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if window_is_narrow(&window_q) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.heading("📱 Please rotate your device to landscape for the best experience");
            });
        });
        pointer_capture.0 = true;
        return;
    }

    egui::Area::new(egui::Id::new("orbit_toggle"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            let (icon, hint) = if controls.orbiting() {
                ("⏸", "Stop animation")
            } else {
                ("▶", "Start animation")
            };
            let button = ui
                .add(egui::Button::new(egui::RichText::new(icon).size(22.0)))
                .on_hover_text(hint);
            if button.clicked() {
                controls.toggle_orbit();
            }
        });

    if controls.intro_finished() {
        egui::Area::new(egui::Id::new("replay_intro"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                let button = ui
                    .add(egui::Button::new(egui::RichText::new("🔁").size(22.0)))
                    .on_hover_text("Replay intro");
                if button.clicked() {
                    controls.replay();
                    next_state.set(ScenePhase::Intro);
                }
            });
    }

    let mut panel_rect = None;
    if let Some(section) = controls.active_section().map(str::to_owned) {
        let mut close = false;
        let panel = egui::TopBottomPanel::bottom("section_panel")
            .frame(egui::Frame::default().fill(PANEL_FILL).inner_margin(24.0))
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    if ui.button("✖").on_hover_text("Close details").clicked() {
                        close = true;
                    }
                });
                match section.as_str() {
                    "about" => about_panel(ui, &content),
                    "experience" => experience_panel(ui, &content),
                    "skills" => skills_panel(ui, &content),
                    other => {
                        ui.heading(other);
                    }
                }
            });

        if close {
            controls.close_section();
        } else {
            panel_rect = Some(panel.response.rect);
        }
    }

    let over_ui = ctx.is_pointer_over_area() || ctx.is_using_pointer();
    pointer_capture.0 = over_ui;

    // overlay buttons outside the panel close it, presses on the scene never do
    let (pressed, press_pos) =
        ctx.input(|input| (input.pointer.primary_pressed(), input.pointer.interact_pos()));
    let over_panel = panel_rect
        .zip(press_pos)
        .is_some_and(|(rect, pos)| rect.contains(pos));
    if pressed && closes_panel_on_press(panel_rect.is_some(), over_ui, over_panel) {
        controls.close_section();
    }
}

fn about_panel(ui: &mut egui::Ui, content: &PortfolioContent) {
    ui.heading(&content.about.title);
    ui.add_space(8.0);
    ui.label(&content.about.description);
}

fn experience_panel(ui: &mut egui::Ui, content: &PortfolioContent) {
    ui.heading(&content.experience.title);
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Click for resume:").size(18.0));
        ui.hyperlink_to("📄 Resume", &content.experience.resume_url);
    });
}

fn skills_panel(ui: &mut egui::Ui, content: &PortfolioContent) {
    ui.heading(format!("{} 💡", content.skills.title));
    ui.add_space(8.0);
    for row in content.skills.categories.chunks(3) {
        ui.columns(3, |columns| {
            for (column, category) in columns.iter_mut().zip(row) {
                skill_card(column, category);
            }
        });
        ui.add_space(8.0);
    }
}

fn skill_card(ui: &mut egui::Ui, category: &SkillCategory) {
    ui.group(|ui| {
        ui.label(egui::RichText::new(&category.category).strong());
        ui.horizontal_wrapped(|ui| {
            let last = category.items.len().saturating_sub(1);
            for (index, item) in category.items.iter().enumerate() {
                let text = if index < last {
                    format!("{},", item.text)
                } else {
                    item.text.clone()
                };
                match &item.url {
                    Some(url) => {
                        ui.hyperlink_to(egui::RichText::new(text).color(LINK_COLOR), url);
                    }
                    None => {
                        ui.label(text);
                    }
                }
            }
        });
    });
}
