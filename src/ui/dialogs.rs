use crate::app::TimelineApp;
use crate::ui::theme;
use chrono::NaiveDate;
use egui::{Context, RichText, Window};

const ABOUT_DIALOG_WIDTH: f32 = 300.0;
const ABOUT_DIALOG_HEIGHT: f32 = 180.0;
const DETAIL_DIALOG_WIDTH: f32 = 340.0;

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut TimelineApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([ABOUT_DIALOG_WIDTH, ABOUT_DIALOG_HEIGHT])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Project Timeline").strong());
                ui.add_space(2.0);
                ui.label(RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION"))).color(theme::TEXT_SECONDARY));
                ui.add_space(10.0);
                ui.label("Deadlines, maintenance and reports");
                ui.label("on one calendar, built with Rust and egui.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Render the detail window of the project opened from the chart or the list.
pub fn show_project_detail(app: &mut TimelineApp, ctx: &Context) {
    let Some(id) = app.detail_project.clone() else {
        return;
    };
    let Some(project) = app.model.find(&id) else {
        // Gone from the feed since it was opened
        app.detail_project = None;
        return;
    };
    let row = app.layout.rows.iter().find(|r| r.id == id);

    let mut open = true;
    Window::new(RichText::new(&project.project.name).strong().size(14.0))
        .id(egui::Id::new(("project-detail", &id)))
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .default_width(DETAIL_DIALOG_WIDTH)
        .show(ctx, |ui| {
            egui::Grid::new("project_detail_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    let field = |ui: &mut egui::Ui, name: &str, value: String| {
                        ui.label(RichText::new(name).color(theme::TEXT_SECONDARY));
                        ui.label(value);
                        ui.end_row();
                    };

                    field(ui, "Client", project.project.client_name.clone());
                    field(ui, "Categories", project.project.category_names().join(", "));
                    field(ui, "Status", project.project.status.label().to_string());
                    if let Some(row) = row {
                        ui.label(RichText::new("On timeline").color(theme::TEXT_SECONDARY));
                        let color = if row.overdue { theme::OVERDUE } else { theme::TEXT_PRIMARY };
                        ui.colored_label(color, &row.status_label);
                        ui.end_row();
                    }
                    field(ui, "Created", date_text(project.dates.created));
                    field(ui, "Deadline", date_text(project.dates.deadline));
                    field(ui, "Maintenance", date_text(project.dates.maintenance));
                    field(ui, "Report", date_text(project.dates.report));
                    if project.recurring {
                        field(ui, "Recurring", "yes".to_string());
                    }
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.label(RichText::new("Progress").color(theme::TEXT_SECONDARY));
            ui.add(
                egui::ProgressBar::new(project.project.progress.clamp(0.0, 100.0) / 100.0)
                    .show_percentage()
                    .fill(theme::bucket_color(project.color)),
            );
            if let Some(row) = row {
                ui.label(RichText::new("Elapsed").color(theme::TEXT_SECONDARY));
                ui.add(egui::ProgressBar::new(row.progress / 100.0).show_percentage());
            }
        });

    if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.detail_project = None;
    }
}
