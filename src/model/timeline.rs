/// Screen-space view over the day grid.
#[derive(Debug, Clone)]
pub struct TimelineViewport {
    /// Width of one day column in pixels (controls zoom level).
    pub column_width: f32,
    /// Horizontal scroll offset in pixels from the first column.
    pub scroll_x: f32,
}

impl TimelineViewport {
    pub const MIN_COLUMN_WIDTH: f32 = 24.0;
    pub const MAX_COLUMN_WIDTH: f32 = 160.0;

    pub fn new(column_width: f32) -> Self {
        Self {
            column_width: column_width.clamp(Self::MIN_COLUMN_WIDTH, Self::MAX_COLUMN_WIDTH),
            scroll_x: 0.0,
        }
    }

    /// Convert a column index to an x-pixel offset from the grid start.
    pub fn column_to_x(&self, column: usize) -> f32 {
        column as f32 * self.column_width
    }

    /// Column under an x-pixel offset, not clamped to the grid.
    pub fn x_to_column(&self, x: f32) -> i64 {
        (x / self.column_width).floor() as i64
    }

    /// Total width in pixels for a grid of `columns` days.
    pub fn total_width(&self, columns: usize) -> f32 {
        self.column_to_x(columns)
    }

    /// Largest scroll offset that still fills `visible_width`.
    pub fn max_scroll(&self, columns: usize, visible_width: f32) -> f32 {
        (self.total_width(columns) - visible_width).max(0.0)
    }

    /// Set the scroll offset, clamped to the grid.
    pub fn set_scroll(&mut self, x: f32, columns: usize, visible_width: f32) {
        self.scroll_x = x.clamp(0.0, self.max_scroll(columns, visible_width));
    }

    /// Scroll so that `column` sits near the left edge with a little context.
    pub fn scroll_to_column(&mut self, column: usize, columns: usize, visible_width: f32) {
        let x = self.column_to_x(column.saturating_sub(2));
        self.set_scroll(x, columns, visible_width);
    }

    /// Zoom in (wider day columns).
    pub fn zoom_in(&mut self) {
        self.column_width = (self.column_width * 1.2).min(Self::MAX_COLUMN_WIDTH);
    }

    /// Zoom out (narrower day columns).
    pub fn zoom_out(&mut self) {
        self.column_width = (self.column_width / 1.2).max(Self::MIN_COLUMN_WIDTH);
    }
}

impl Default for TimelineViewport {
    fn default() -> Self {
        Self::new(56.0)
    }
}
