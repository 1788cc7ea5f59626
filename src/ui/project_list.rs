use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use project_timeline::timeline::TimelineRow;

/// Actions that the project list can request.
pub enum ProjectListAction {
    None,
    Open(String),
}

/// Render the left-side project list, in timeline order.
pub fn show_project_list(rows: &[TimelineRow], selected: Option<&str>, ui: &mut Ui) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Projects").strong().size(15.0).color(theme::TEXT_PRIMARY));
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", rows.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(2.0);

    if rows.is_empty() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No projects to show").color(theme::TEXT_DIM));
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, row) in rows.iter().enumerate() {
                let is_selected = selected == Some(row.id.as_str());

                let row_bg = if is_selected {
                    theme::BG_SELECTED
                } else if i % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };

                let frame = egui::Frame {
                    fill: row_bg,
                    rounding: egui::Rounding::same(4.0),
                    inner_margin: egui::Margin::symmetric(6.0, 4.0),
                    outer_margin: egui::Margin::ZERO,
                    stroke: egui::Stroke::NONE,
                    shadow: egui::epaint::Shadow::NONE,
                };

                let frame_resp = frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 6.0;

                        let (dot_rect, _) = ui.allocate_exact_size(egui::vec2(6.0, 6.0), egui::Sense::hover());
                        ui.painter()
                            .circle_filled(dot_rect.center(), 3.0, theme::bucket_color(row.color));

                        ui.vertical(|ui| {
                            let name_color = if is_selected { Color32::WHITE } else { theme::TEXT_PRIMARY };
                            ui.add(egui::Label::new(RichText::new(&row.name).size(12.0).color(name_color)).truncate());
                            if !row.client.is_empty() {
                                ui.add(
                                    egui::Label::new(
                                        RichText::new(&row.client).size(10.0).color(theme::TEXT_SECONDARY),
                                    )
                                    .truncate(),
                                );
                            }
                        });

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.spacing_mut().item_spacing.x = 4.0;

                            let pbar = egui::ProgressBar::new(row.stored_progress / 100.0)
                                .desired_width(48.0)
                                .fill(theme::bucket_color(row.color))
                                .rounding(egui::Rounding::same(3.0));
                            ui.add(pbar);

                            let status_color = if row.overdue { theme::OVERDUE } else { theme::TEXT_SECONDARY };
                            ui.label(RichText::new(&row.status_label).size(10.0).color(status_color));
                        });
                    });
                });

                let row_click = ui.interact(
                    frame_resp.response.rect,
                    egui::Id::new(("project-row", &row.id)),
                    egui::Sense::click(),
                );
                if row_click.clicked() {
                    action = ProjectListAction::Open(row.id.clone());
                }

                ui.add_space(1.0);
            }
        });

    action
}
