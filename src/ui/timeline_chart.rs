use chrono::Timelike;
use egui::{Align2, Color32, Id, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use project_timeline::model::TimelineViewport;
use project_timeline::timeline::{
    DayGrid, Marker, MarkerKind, PanController, PointerTarget, TimelineLayout, TimelineRow,
};

use crate::ui::theme;

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const ROW_PADDING: f32 = theme::ROW_GAP;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const ROW_STRIDE: f32 = ROW_HEIGHT + ROW_PADDING;

/// Result details from interactions in the timeline chart.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    /// Project whose bar was clicked; open its detail view.
    pub opened: Option<String>,
    /// Zoom changed this frame.
    pub zoomed: bool,
}

/// Screen mapping for one frame.
struct Frame<'a> {
    rect: Rect,
    viewport: &'a TimelineViewport,
    scroll_y: f32,
}

impl Frame<'_> {
    fn column_x(&self, column: i64) -> f32 {
        self.rect.left() + column as f32 * self.viewport.column_width - self.viewport.scroll_x
    }

    fn row_top(&self, index: usize) -> f32 {
        self.rect.top() + HEADER_HEIGHT + index as f32 * ROW_STRIDE - self.scroll_y
    }

    fn body(&self) -> Rect {
        Rect::from_min_max(
            Pos2::new(self.rect.left(), self.rect.top() + HEADER_HEIGHT),
            self.rect.max,
        )
    }

    /// Columns at least partly on screen.
    fn visible_columns(&self, len: usize) -> std::ops::Range<usize> {
        let first = self.viewport.x_to_column(self.viewport.scroll_x).max(0) as usize;
        let last = self
            .viewport
            .x_to_column(self.viewport.scroll_x + self.rect.width())
            .max(0) as usize
            + 1;
        first.min(len)..last.min(len)
    }
}

/// Render the timeline (central panel): header, rows, bars, markers and the
/// now line. Handles pan, wheel scroll and zoom.
pub fn show_timeline_chart(
    layout: &TimelineLayout,
    grid: &DayGrid,
    viewport: &mut TimelineViewport,
    pan: &mut PanController,
    selected: Option<&str>,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, theme::BG_DARK);

    if layout.is_empty() {
        draw_empty_state(&painter, rect);
        return interaction;
    }

    let columns = grid.len();
    let visible_width = rect.width();
    let scroll_y_id = Id::new("timeline-scroll-y");
    let content_height = layout.rows.len() as f32 * ROW_STRIDE;
    let max_scroll_y = (content_height - (rect.height() - HEADER_HEIGHT)).max(0.0);
    let mut scroll_y = ui
        .ctx()
        .data_mut(|data| data.get_temp::<f32>(scroll_y_id))
        .unwrap_or(0.0);

    // Wheel: plain scrolls rows, Shift scrolls days, Ctrl zooms
    if response.hovered() {
        let (delta, zoom, shift) = ui.input(|i| (i.smooth_scroll_delta, i.zoom_delta(), i.modifiers.shift));
        if zoom > 1.0 {
            viewport.zoom_in();
            interaction.zoomed = true;
        } else if zoom < 1.0 {
            viewport.zoom_out();
            interaction.zoomed = true;
        } else if shift {
            let dx = delta.x + delta.y;
            viewport.set_scroll(viewport.scroll_x - dx, columns, visible_width);
        } else {
            viewport.set_scroll(viewport.scroll_x - delta.x, columns, visible_width);
            scroll_y -= delta.y;
        }
    }

    handle_pan(ui, &response, rect, viewport, pan, columns);

    // Keep the offset valid after zoom or a window resize
    viewport.set_scroll(viewport.scroll_x, columns, visible_width);
    scroll_y = scroll_y.clamp(0.0, max_scroll_y);
    ui.ctx().data_mut(|data| data.insert_temp(scroll_y_id, scroll_y));

    if pan.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    }

    let frame = Frame {
        rect,
        viewport,
        scroll_y,
    };

    draw_columns(&painter, &frame, grid, layout);

    let body_painter = painter.with_clip_rect(frame.body());
    let mut hovered_row: Option<&TimelineRow> = None;
    let pointer = ui.input(|i| i.pointer.hover_pos());

    for (i, row) in layout.rows.iter().enumerate() {
        let top = frame.row_top(i);
        if top + ROW_STRIDE < frame.body().top() || top > rect.bottom() {
            continue;
        }
        if i % 2 == 0 {
            body_painter.rect_filled(
                Rect::from_min_size(Pos2::new(rect.left(), top), Vec2::new(rect.width(), ROW_STRIDE)),
                0.0,
                theme::BG_ROW_EVEN,
            );
        }
        body_painter.line_segment(
            [
                Pos2::new(rect.left(), top + ROW_STRIDE),
                Pos2::new(rect.right(), top + ROW_STRIDE),
            ],
            Stroke::new(0.5, theme::BORDER_SUBTLE),
        );

        let bar_rect = draw_bar(&body_painter, &frame, row, top, selected == Some(row.id.as_str()));
        for marker in &row.markers {
            draw_marker(&body_painter, &frame, marker, top);
        }

        if pointer.is_some_and(|p| bar_rect.contains(p) && frame.body().contains(p)) {
            hovered_row = Some(row);
        }
    }

    draw_now_line(&painter, &frame, layout, columns);
    draw_header(&painter, &frame, grid, layout);

    if let Some(row) = hovered_row {
        if !pan.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            egui::show_tooltip_at_pointer(ui.ctx(), ui.layer_id(), Id::new(("bar-tip", &row.id)), |ui| {
                bar_tooltip(ui, row);
            });
        }
    }

    if response.clicked() && !pan.should_suppress_click() {
        interaction.opened = hovered_row.map(|row| row.id.clone());
    }

    interaction
}

fn handle_pan(
    ui: &Ui,
    response: &egui::Response,
    rect: Rect,
    viewport: &mut TimelineViewport,
    pan: &mut PanController,
    columns: usize,
) {
    let (now, pressed, released, latest) = ui.input(|i| {
        (
            i.time,
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.latest_pos(),
        )
    });

    if pressed && response.hovered() {
        if let Some(pos) = latest {
            pan.pointer_down(PointerTarget::Surface, pos, viewport.scroll_x);
        }
    }

    if pan.is_dragging() {
        if let Some(pos) = latest {
            if let Some(x) = pan.pointer_move(pos) {
                viewport.set_scroll(x, columns, rect.width());
            }
        }
    }

    if released {
        pan.pointer_up(now);
    } else if pan.is_dragging() && !latest.is_some_and(|p| rect.contains(p)) {
        pan.pointer_leave(now);
    }
}

fn draw_empty_state(painter: &egui::Painter, rect: Rect) {
    painter.text(
        rect.center() - Vec2::new(0.0, 10.0),
        Align2::CENTER_CENTER,
        egui_phosphor::regular::CALENDAR_BLANK,
        egui::FontId::proportional(32.0),
        theme::TEXT_DIM,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 20.0),
        Align2::CENTER_CENTER,
        "Nenhum projeto no cronograma",
        theme::font_header(),
        theme::TEXT_SECONDARY,
    );
}

/// Weekend shading, today's column and the vertical grid lines.
fn draw_columns(painter: &egui::Painter, frame: &Frame<'_>, grid: &DayGrid, layout: &TimelineLayout) {
    let body = frame.body();
    let today = layout.today_in_grid(grid.len());
    for column in &grid.days[frame.visible_columns(grid.len())] {
        let x = frame.column_x(column.index as i64);
        let cell = Rect::from_min_size(
            Pos2::new(x, body.top()),
            Vec2::new(frame.viewport.column_width, body.height()),
        );
        if today == Some(column.index) {
            painter.rect_filled(cell, 0.0, theme::BG_TODAY_COLUMN);
        } else if column.is_weekend() {
            painter.rect_filled(cell, 0.0, theme::BG_WEEKEND);
        }
        painter.line_segment(
            [Pos2::new(x, body.top()), Pos2::new(x, body.bottom())],
            Stroke::new(0.5, theme::GRID_LINE),
        );
    }
}

fn draw_header(painter: &egui::Painter, frame: &Frame<'_>, grid: &DayGrid, layout: &TimelineLayout) {
    let rect = frame.rect;
    painter.rect_filled(
        Rect::from_min_size(rect.min, Vec2::new(rect.width(), HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(rect.left(), rect.top() + HEADER_HEIGHT),
            Pos2::new(rect.right(), rect.top() + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    let today = layout.today_in_grid(grid.len());
    let width = frame.viewport.column_width;
    let compact = width < 40.0;

    for column in &grid.days[frame.visible_columns(grid.len())] {
        let x = frame.column_x(column.index as i64);
        let center = x + width / 2.0;
        let is_today = today == Some(column.index);

        if is_today {
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x + 2.0, rect.top() + 3.0), Vec2::new(width - 4.0, HEADER_HEIGHT - 6.0)),
                Rounding::same(4.0),
                theme::TODAY_LINE.gamma_multiply(0.35),
            );
        }

        let day_color = if is_today {
            theme::TEXT_PRIMARY
        } else if column.is_weekend() {
            theme::TEXT_DIM
        } else {
            theme::TEXT_SECONDARY
        };

        if compact {
            painter.text(
                Pos2::new(center, rect.top() + HEADER_HEIGHT / 2.0),
                Align2::CENTER_CENTER,
                &column.label.day,
                theme::font_sub(),
                day_color,
            );
            continue;
        }

        painter.text(
            Pos2::new(center, rect.top() + 9.0),
            Align2::CENTER_CENTER,
            column.label.month,
            theme::font_small(),
            theme::TEXT_DIM,
        );
        painter.text(
            Pos2::new(center, rect.top() + 22.0),
            Align2::CENTER_CENTER,
            &column.label.day,
            theme::font_header(),
            day_color,
        );
        painter.text(
            Pos2::new(center, rect.top() + 35.0),
            Align2::CENTER_CENTER,
            column.label.weekday,
            theme::font_small(),
            day_color,
        );
    }
}

/// Position of "now" inside today's column, by time of day.
fn draw_now_line(painter: &egui::Painter, frame: &Frame<'_>, layout: &TimelineLayout, columns: usize) {
    let Some(column) = layout.today_in_grid(columns) else {
        return;
    };
    let seconds = layout.clock.now.num_seconds_from_midnight() as f32;
    let x = frame.column_x(column as i64) + frame.viewport.column_width * (seconds / 86_400.0);
    let body = frame.body();
    if x < body.left() || x > body.right() {
        return;
    }

    painter.line_segment(
        [Pos2::new(x, body.top()), Pos2::new(x, body.bottom())],
        Stroke::new(1.5, theme::TODAY_LINE),
    );
    painter.circle_filled(Pos2::new(x, body.top() + 3.0), 3.5, theme::TODAY_LINE);
}

fn draw_bar(painter: &egui::Painter, frame: &Frame<'_>, row: &TimelineRow, top: f32, is_selected: bool) -> Rect {
    let inset = theme::BAR_INSET;
    let x_start = frame.column_x(row.bar.start_column as i64);
    let bar_width = (row.bar.duration as f32 * frame.viewport.column_width).max(6.0);
    let bar_rect = Rect::from_min_size(
        Pos2::new(x_start, top + ROW_PADDING + inset),
        Vec2::new(bar_width, ROW_HEIGHT - inset * 2.0),
    );
    let rounding = Rounding::same(theme::BAR_ROUNDING);
    let fill = theme::bucket_color(row.color);

    painter.rect_filled(bar_rect.translate(Vec2::new(1.0, 2.0)), rounding, Color32::from_black_alpha(35));
    painter.rect_filled(bar_rect, rounding, fill);

    // Part of the bar already behind the now line
    if row.past_fraction > 0.0 {
        let past = Rect::from_min_size(bar_rect.min, Vec2::new(bar_width * row.past_fraction, bar_rect.height()));
        painter.rect_filled(past, rounding, theme::PAST_TINT);
    }

    // Elapsed share of the deadline interval
    if row.progress > 0.0 {
        let progress_width = bar_width * (row.progress / 100.0).clamp(0.0, 1.0);
        let progress_rect = Rect::from_min_size(bar_rect.min, Vec2::new(progress_width, bar_rect.height()));
        painter.rect_filled(progress_rect, rounding, theme::PROGRESS_OVERLAY);

        if row.progress < 98.0 {
            let tick_x = bar_rect.left() + progress_width;
            painter.line_segment(
                [
                    Pos2::new(tick_x, bar_rect.top() + 2.0),
                    Pos2::new(tick_x, bar_rect.bottom() - 2.0),
                ],
                Stroke::new(1.0, Color32::from_white_alpha(60)),
            );
        }
    }

    if row.overdue {
        painter.rect_stroke(bar_rect, rounding, Stroke::new(1.5, theme::OVERDUE));
    }
    if is_selected {
        painter.rect_stroke(
            bar_rect.expand(1.5),
            Rounding::same(theme::BAR_ROUNDING + 1.5),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }

    if bar_width > 30.0 {
        let text = if row.overdue {
            format!("{}  ·  {}", row.name, row.status_label)
        } else {
            row.name.clone()
        };
        let galley = painter.layout_no_wrap(text, theme::font_bar(), theme::TEXT_ON_BAR);
        let text_y = bar_rect.top() + (bar_rect.height() - galley.size().y) / 2.0;
        painter
            .with_clip_rect(bar_rect.intersect(painter.clip_rect()))
            .galley(Pos2::new(bar_rect.left() + 6.0, text_y), galley, Color32::TRANSPARENT);
    }

    bar_rect
}

fn draw_marker(painter: &egui::Painter, frame: &Frame<'_>, marker: &Marker, top: f32) {
    let x = frame.column_x(marker.column as i64) + frame.viewport.column_width / 2.0 + marker.offset_px;
    let center = Pos2::new(x, top + ROW_PADDING + ROW_HEIGHT / 2.0);
    let icon = match marker.kind {
        MarkerKind::Maintenance => egui_phosphor::regular::WRENCH,
        MarkerKind::Report => egui_phosphor::regular::FILE_TEXT,
    };
    let color = if marker.overdue { theme::OVERDUE } else { theme::TEXT_ON_BAR };

    painter.circle_filled(center, theme::MARKER_SIZE * 0.7, Color32::from_black_alpha(140));
    painter.text(center, Align2::CENTER_CENTER, icon, theme::font_marker(), color);
}

fn bar_tooltip(ui: &mut Ui, row: &TimelineRow) {
    ui.strong(&row.name);
    if !row.client.is_empty() {
        ui.label(&row.client);
    }
    let status_color = if row.overdue { theme::OVERDUE } else { theme::TEXT_SECONDARY };
    ui.colored_label(status_color, &row.status_label);
    if let Some(deadline) = row.deadline {
        ui.label(format!("Prazo: {}", deadline.format("%d/%m/%Y")));
    }
    for marker in &row.markers {
        ui.label(format!("{}: {}", marker.kind.label(), marker.date.format("%d/%m/%Y")));
    }
    ui.label(format!("Decorrido: {:.0}%", row.progress));
    ui.label(format!("Progresso: {:.0}%", row.stored_progress));
}
