use egui::{RichText, Rounding, Sense, Stroke, Ui, Vec2};
use project_timeline::timeline::{CategoryFilter, LegendChip};

use crate::ui::theme;

/// Draw the category chip row. Clicking a chip toggles it in the filter;
/// returns `true` when the filter changed.
pub fn show_legend(chips: &[LegendChip], filter: &mut CategoryFilter, ui: &mut Ui) -> bool {
    let mut changed = false;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::new(6.0, 4.0);

        for chip in chips {
            let swatch = if chip.dimmed {
                theme::bucket_color_dimmed(chip.color)
            } else {
                theme::bucket_color(chip.color)
            };
            let text_color = if chip.dimmed { theme::TEXT_DIM } else { theme::TEXT_PRIMARY };

            let frame = egui::Frame::none()
                .fill(if chip.selected { theme::BG_SELECTED } else { theme::BG_HEADER })
                .stroke(Stroke::new(
                    1.0,
                    if chip.selected { theme::BORDER_ACCENT } else { theme::BORDER_SUBTLE },
                ))
                .rounding(Rounding::same(10.0))
                .inner_margin(egui::Margin::symmetric(8.0, 3.0));

            let response = frame
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let (dot, _) = ui.allocate_exact_size(Vec2::splat(8.0), Sense::hover());
                        ui.painter().circle_filled(dot.center(), 4.0, swatch);
                        ui.label(RichText::new(&chip.name).size(11.5).color(text_color));
                    });
                })
                .response
                .interact(Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            if response.clicked() {
                filter.toggle(&chip.name);
                tracing::debug!(category = %chip.name, "category filter toggled");
                changed = true;
            }
        }

        if !filter.is_empty() && ui.small_button("Limpar filtro").clicked() {
            filter.clear();
            changed = true;
        }
    });

    changed
}
