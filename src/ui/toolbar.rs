use crate::app::TimelineApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut TimelineApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  Open Feed...").clicked() {
                app.open_feed();
                ui.close_menu();
            }
            let has_feed = app.watcher.is_some();
            if ui.add_enabled(has_feed, egui::Button::new("  Reload Feed      F5")).clicked() {
                app.reload_feed();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            if ui.button("  Zoom In        Ctrl+Scroll ↑").clicked() {
                app.viewport.zoom_in();
                app.remember_zoom();
                ui.close_menu();
            }
            if ui.button("  Zoom Out      Ctrl+Scroll ↓").clicked() {
                app.viewport.zoom_out();
                app.remember_zoom();
                ui.close_menu();
            }
            if ui.button("  Scroll to Today").clicked() {
                app.scroll_to_today = true;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Open Settings Folder").clicked() {
                app.open_settings_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned feed name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let source = app
                .watcher
                .as_ref()
                .and_then(|w| w.path().file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Sample data".to_string());
            ui.label(RichText::new(source).size(11.0).weak());
        });
    });
}
