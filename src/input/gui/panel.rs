use crate::controllers::view::ViewEvent;
use crate::input::gui::ui_state::UiState;

/// Draws the control panel and returns the events the user triggered this
/// frame. Button and seed clicks come first, in widget order, followed by
/// checkbox changes (continuous before post-render).
pub fn show_panel(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    canvas_size: (u32, u32),
) -> Vec<ViewEvent> {
    let mut events = Vec::new();
    let before = ui_state.clone();

    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .default_size([220.0, 180.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(ui_state.primary_label()).clicked() {
                    events.push(ViewEvent::PrimaryAction);
                }

                if ui
                    .add_enabled(ui_state.download_enabled(), egui::Button::new("Download"))
                    .clicked()
                {
                    events.push(ViewEvent::DownloadRequested);
                }
            });

            ui.checkbox(&mut ui_state.continuous, "Continuous");
            ui.checkbox(&mut ui_state.post_render, "Post-render");

            ui.separator();
            ui.label("Seeds:");
            if ui_state.seeds().is_empty() {
                ui.weak("none yet");
            }
            for seed in ui_state.seeds() {
                if ui.link(seed).clicked() {
                    events.push(ViewEvent::SeedSelected(seed.clone()));
                }
            }

            ui.separator();
            ui.label(format!("Canvas: {}x{}", canvas_size.0, canvas_size.1));
        });

    events.extend(ui_state.toggle_events(&before));
    events
}
