use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use project_timeline::io::settings::{config_dir, settings_path};
use project_timeline::io::{export_timeline_csv, load_snapshot, FeedWatcher, TimelineSettings};
use project_timeline::model::category::find_category;
use project_timeline::model::{
    Category, DateValue, Project, ProjectStatus, Stage, TimelineViewport, WorkspaceSnapshot,
};
use project_timeline::timeline::{
    CategoryFilter, PanController, RenderClock, TimelineLayout, TimelineModel,
};

use crate::ui;

/// Main application state.
pub struct TimelineApp {
    pub snapshot: WorkspaceSnapshot,
    pub model: TimelineModel,
    /// Row order for the current filter; refreshed with the model.
    order: Vec<usize>,
    pub filter: CategoryFilter,
    /// Rebuilt at the start of every frame.
    pub layout: TimelineLayout,
    pub viewport: TimelineViewport,
    pub pan: PanController,

    pub settings: TimelineSettings,
    settings_path: PathBuf,
    pub watcher: Option<FeedWatcher>,

    // Dialog state
    pub detail_project: Option<String>,
    pub show_about: bool,
    pub scroll_to_today: bool,

    // Status message
    pub status_message: String,
}

impl TimelineApp {
    pub fn new(cc: &eframe::CreationContext<'_>, feed: Option<PathBuf>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings_path = settings_path();
        let settings = TimelineSettings::load(&settings_path);
        let clock = RenderClock::sample();
        let snapshot = WorkspaceSnapshot::default();
        let model = TimelineModel::build(&snapshot, clock.today);
        let filter = CategoryFilter::new();
        let layout = TimelineLayout::build(&model, &[], &filter, clock);

        let mut app = Self {
            snapshot,
            model,
            order: Vec::new(),
            filter,
            layout,
            viewport: TimelineViewport::new(settings.column_width),
            pan: PanController::new(settings.pan_settings()),
            settings,
            settings_path,
            watcher: None,
            detail_project: None,
            show_about: false,
            scroll_to_today: true,
            status_message: "Ready".to_string(),
        };

        match feed.or_else(|| app.settings.last_feed.clone()) {
            Some(path) => {
                if !app.load_feed(path) {
                    // Keep the load error in the status bar
                    app.replace_snapshot(sample_snapshot(clock.today));
                }
            }
            None => {
                app.replace_snapshot(sample_snapshot(clock.today));
                app.status_message = "Showing sample data. Open a feed from the File menu.".to_string();
            }
        }
        app
    }

    // --- Feed ---

    /// Load a snapshot file and start watching it. Returns whether it loaded.
    fn load_feed(&mut self, path: PathBuf) -> bool {
        match load_snapshot(&path) {
            Ok(snapshot) => {
                let count = snapshot.projects.len();
                self.watcher = Some(FeedWatcher::new(&path, self.settings.feed_poll_interval()));
                self.replace_snapshot(snapshot);
                self.status_message = format!("Loaded {} projects from {}", count, path.display());
                if self.settings.last_feed.as_ref() != Some(&path) {
                    self.settings.last_feed = Some(path);
                    self.save_settings();
                }
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "could not load feed");
                self.status_message = format!("Error loading feed: {}", e);
                false
            }
        }
    }

    pub fn open_feed(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Workspace snapshot", &["json"])
            .pick_file()
        {
            self.load_feed(path);
        }
    }

    pub fn reload_feed(&mut self) {
        if let Some(path) = self.watcher.as_ref().map(|w| w.path().to_path_buf()) {
            self.load_feed(path);
        }
    }

    /// Swap in a new snapshot wholesale and rebuild everything derived from it.
    fn replace_snapshot(&mut self, snapshot: WorkspaceSnapshot) {
        self.snapshot = snapshot;
        self.rebuild(RenderClock::sample().today);
    }

    fn rebuild(&mut self, today: NaiveDate) {
        self.model = TimelineModel::build(&self.snapshot, today);

        // Drop filter entries for categories that no longer exist
        let kept: Vec<String> = self
            .filter
            .names()
            .filter(|name| find_category(&self.model.categories, name).is_some())
            .map(str::to_string)
            .collect();
        self.filter = CategoryFilter::from_names(kept);

        self.refresh_order(today);
    }

    fn refresh_order(&mut self, today: NaiveDate) {
        self.order = self.model.select(&self.filter, today);
    }

    fn poll_feed(&mut self) {
        let Some(result) = self.watcher.as_mut().and_then(|w| w.poll()) else {
            return;
        };
        match result {
            Ok(snapshot) => {
                self.replace_snapshot(snapshot);
                self.status_message = "Feed updated".to_string();
            }
            Err(e) => {
                // Keep showing the last good snapshot
                tracing::warn!(error = %e, "feed reload failed");
                self.status_message = format!("Feed error: {}", e);
            }
        }
    }

    // --- Export ---

    pub fn export_csv(&mut self) {
        if self.layout.is_empty() {
            self.status_message = "Nothing to export: the timeline is empty".to_string();
            return;
        }

        let default_name = format!("timeline-{}.csv", self.layout.clock.today.format("%Y-%m-%d"));
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&default_name)
            .save_file()
        {
            match export_timeline_csv(&self.layout.rows, &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} projects to CSV", count);
                }
                Err(e) => {
                    tracing::error!(error = %e, "CSV export failed");
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    // --- Settings ---

    pub fn remember_zoom(&mut self) {
        self.settings.column_width = self.viewport.column_width;
        self.save_settings();
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::warn!(error = %e, "could not save settings");
            self.status_message = format!("Could not save settings: {}", e);
        }
    }

    pub fn open_settings_folder(&mut self) {
        let dir = config_dir();
        if let Err(e) = std::fs::create_dir_all(&dir).and_then(|_| open::that(&dir)) {
            tracing::warn!(error = %e, dir = %dir.display(), "could not open settings folder");
            self.status_message = format!("Could not open {}: {}", dir.display(), e);
        }
    }
}

/// Demonstration workspace shown when no feed is configured.
fn sample_snapshot(today: NaiveDate) -> WorkspaceSnapshot {
    let day = |n: i64| Some(DateValue::from(today + chrono::Duration::days(n)));

    let categories = vec![
        Category::new("Sites"),
        Category::recurring("Social Media"),
        Category::new("Branding"),
        Category::recurring("Tráfego Pago"),
        Category::new("E-commerce"),
    ];

    let stage = |id: &str, title: &str, status, order| Stage {
        id: id.to_string(),
        title: title.to_string(),
        status,
        order,
        progress: 0.0,
    };
    let stages = vec![
        stage("onboarding", "Onboarding", ProjectStatus::Lead, 0),
        stage("development", "Desenvolvimento", ProjectStatus::Active, 1),
        stage("review", "Revisão", ProjectStatus::Review, 2),
        stage("adjustments", "Ajustes", ProjectStatus::Review, 3),
        stage("maintenance", "Manutenção", ProjectStatus::Completed, 4),
    ];

    let project = |id: &str, name: &str, client: &str, category: &str, status| {
        let mut p = Project::new(id, name, status);
        p.client_name = client.to_string();
        p.types = vec![category.to_string()];
        p
    };

    let mut site = project("site-padaria", "Site institucional", "Padaria Central", "Sites", ProjectStatus::Active);
    site.stage_id = Some("development".to_string());
    site.created_at = day(-12);
    site.deadline = day(9);
    site.progress = 45.0;

    let mut late = project("loja-moda", "Loja virtual", "Moda Verão", "E-commerce", ProjectStatus::Review);
    late.stage_id = Some("adjustments".to_string());
    late.created_at = day(-20);
    late.deadline = day(-2);
    late.progress = 80.0;

    let mut social = project("social-clinica", "Gestão de redes", "Clínica Sorriso", "Social Media", ProjectStatus::Completed);
    social.created_at = day(-30);
    social.maintenance_date = day(4);
    social.report_date = day(4);
    social.progress = 100.0;

    let mut ads = project("ads-academia", "Campanha de matrículas", "Academia Forte", "Tráfego Pago", ProjectStatus::Finished);
    ads.created_at = day(-3);
    ads.report_date = day(6);
    ads.maintenance_date = day(11);

    let mut brand = project("brand-cafe", "Identidade visual", "Café do Porto", "Branding", ProjectStatus::Lead);
    brand.created_at = day(-1);
    brand.deadline = day(14);
    brand.progress = 10.0;

    let mut archived = project("site-antigo", "Site antigo", "Padaria Central", "Sites", ProjectStatus::Completed);
    archived.created_at = day(-90);
    archived.deadline = day(-60);

    WorkspaceSnapshot::new(vec![site, late, social, ads, brand, archived], categories, stages)
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // One clock for the whole frame
        let clock = RenderClock::sample();
        if self.model.is_stale(clock.today) {
            tracing::info!(today = %clock.today, "day changed, rebuilding timeline");
            self.rebuild(clock.today);
        }
        self.pan.tick(ctx.input(|i| i.time));
        self.poll_feed();

        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.reload_feed();
        }

        self.layout = TimelineLayout::build(&self.model, &self.order, &self.filter, clock);

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .size(11.0)
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Projects: {}/{}",
                                self.layout.rows.len(),
                                self.model.projects.len()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                        ui.label(egui::RichText::new(" · ").size(10.5).color(ui::theme::TEXT_DIM));
                        ui.label(
                            egui::RichText::new(format!(
                                "Zoom: {:.0}%",
                                self.viewport.column_width / TimelineViewport::default().column_width * 100.0
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: project list
        let mut list_action = ui::project_list::ProjectListAction::None;
        egui::SidePanel::left("project_panel")
            .default_width(ui::theme::SIDE_PANEL_WIDTH)
            .min_width(200.0)
            .max_width(ui::theme::SIDE_PANEL_WIDTH * 2.0)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(8.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                list_action =
                    ui::project_list::show_project_list(&self.layout.rows, self.detail_project.as_deref(), ui);
            });

        if let ui::project_list::ProjectListAction::Open(id) = list_action {
            self.detail_project = Some(id);
        }

        // Central panel: legend and timeline
        let mut filter_changed = false;
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            if !self.layout.legend.is_empty() {
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(8.0, 5.0))
                    .show(ui, |ui| {
                        ui.set_min_height(ui::theme::LEGEND_HEIGHT - 10.0);
                        ui.set_width(ui.available_width());
                        filter_changed = ui::legend::show_legend(&self.layout.legend, &mut self.filter, ui);
                    });
            }

            if self.scroll_to_today {
                let columns = self.model.grid.len();
                if let Some(column) = self.layout.today_in_grid(columns) {
                    self.viewport.scroll_to_column(column, columns, ui.available_width());
                }
                self.scroll_to_today = false;
            }

            let interaction = ui::timeline_chart::show_timeline_chart(
                &self.layout,
                &self.model.grid,
                &mut self.viewport,
                &mut self.pan,
                self.detail_project.as_deref(),
                ui,
            );
            if let Some(id) = interaction.opened {
                tracing::debug!(project = %id, "opening project detail");
                self.detail_project = Some(id);
            }
            if interaction.zoomed {
                self.remember_zoom();
            }
        });

        if filter_changed {
            self.refresh_order(clock.today);
            ctx.request_repaint();
        }

        // Dialogs
        if self.detail_project.is_some() {
            ui::dialogs::show_project_detail(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }

        // Keep overlays and the now line moving
        ctx.request_repaint_after(Duration::from_secs(1));
        if self.pan.has_pending_reset() {
            ctx.request_repaint_after(self.pan.settings().click_suppress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_exercises_every_row_kind() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let snapshot = sample_snapshot(today);
        let model = TimelineModel::build(&snapshot, today);
        let filter = CategoryFilter::new();
        let order = model.select(&filter, today);
        let layout = TimelineLayout::build(&model, &order, &filter, RenderClock::on_day(today));

        // The archived project has neither a future deadline nor service dates
        assert_eq!(layout.rows.len(), 5);
        assert!(layout.rows.iter().any(|r| r.overdue));
        assert!(layout
            .rows
            .iter()
            .any(|r| r.markers.len() == 2 && r.markers[0].offset_px != 0.0));
        assert_eq!(layout.legend.len(), 5);
    }
}
