use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use project_timeline::model::{Category, DateValue, Project, ProjectStatus, WorkspaceSnapshot};
use project_timeline::timeline::grid::MAX_GRID_DAYS;
use project_timeline::timeline::markers::COLLISION_OFFSET_PX;
use project_timeline::timeline::range::MAX_SPAN_DAYS;
use project_timeline::timeline::{
    calculate_end_date, calculate_start_date, color_for, position_bar, select_projects, CategoryFilter,
    ColorBucket, MarkerKind, PreparedProject, RenderClock, TimelineLayout, TimelineModel,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

fn day(n: i64) -> NaiveDate {
    today() + Duration::days(n)
}

fn date(n: i64) -> Option<DateValue> {
    Some(DateValue::from(day(n)))
}

fn project(id: &str, category: &str, status: ProjectStatus) -> Project {
    let mut p = Project::new(id, format!("Project {id}"), status);
    p.types = vec![category.to_string()];
    p
}

fn layout_for(snapshot: &WorkspaceSnapshot, filter: &CategoryFilter) -> (TimelineModel, TimelineLayout) {
    let model = TimelineModel::build(snapshot, today());
    let order = model.select(filter, today());
    let layout = TimelineLayout::build(&model, &order, filter, RenderClock::on_day(today()));
    (model, layout)
}

#[test]
fn overdue_project_fills_its_overlay_and_says_so() {
    let mut late = project("late", "Web", ProjectStatus::Active);
    late.created_at = date(-20);
    late.deadline = date(-5);
    let snapshot = WorkspaceSnapshot::new(vec![late], vec![Category::new("Web")], vec![]);

    let (_, layout) = layout_for(&snapshot, &CategoryFilter::new());
    let row = &layout.rows[0];
    assert!(row.overdue);
    assert_eq!(row.progress, 100.0);
    assert_eq!(row.status_label, "Atrasado");
}

#[test]
fn recurring_service_date_keeps_completed_project_on_timeline() {
    let mut retainer = project("retainer", "Social", ProjectStatus::Completed);
    retainer.maintenance_date = date(3);
    let snapshot = WorkspaceSnapshot::new(vec![retainer], vec![Category::recurring("Social")], vec![]);

    let (model, layout) = layout_for(&snapshot, &CategoryFilter::new());
    assert_eq!(layout.rows.len(), 1);
    let marker = &layout.rows[0].markers[0];
    assert_eq!(marker.kind, MarkerKind::Maintenance);
    assert_eq!(model.grid.days[marker.column].date, day(3));
    assert_eq!(marker.offset_px, 0.0);
}

#[test]
fn bar_created_before_window_starts_at_first_column() {
    let mut p = project("p", "Web", ProjectStatus::Active);
    p.created_at = date(-10);
    p.deadline = date(2);
    let prepared = PreparedProject::prepare(p, &[Category::new("Web")]);

    let bar = position_bar(&prepared, today(), 8);
    assert_eq!(bar.start_column, 0);
    assert_eq!(bar.duration, 3);
}

#[test]
fn same_day_markers_are_pushed_apart() {
    let mut both = project("both", "Social", ProjectStatus::Completed);
    both.maintenance_date = date(4);
    both.report_date = date(4);
    let mut other = project("other", "Social", ProjectStatus::Active);
    other.deadline = date(4);
    let snapshot = WorkspaceSnapshot::new(vec![both, other], vec![Category::recurring("Social")], vec![]);

    let (_, layout) = layout_for(&snapshot, &CategoryFilter::new());
    let both = layout.rows.iter().find(|r| r.id == "both").unwrap();
    let offsets: Vec<f32> = both.markers.iter().map(|m| m.offset_px).collect();
    assert_eq!(offsets, vec![-COLLISION_OFFSET_PX, COLLISION_OFFSET_PX]);

    let other = layout.rows.iter().find(|r| r.id == "other").unwrap();
    assert!(other.markers.is_empty());
}

#[test]
fn category_filter_hides_other_categories_and_dims_their_chips() {
    let mut brand = project("brand", "Branding", ProjectStatus::Active);
    brand.deadline = date(5);
    let mut web = project("web", "Web", ProjectStatus::Active);
    web.deadline = date(3);
    let snapshot = WorkspaceSnapshot::new(
        vec![brand, web],
        vec![Category::new("Branding"), Category::new("Web")],
        vec![],
    );

    let filter = CategoryFilter::from_names(["Branding"]);
    let (_, layout) = layout_for(&snapshot, &filter);
    let ids: Vec<&str> = layout.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["brand"]);

    let web_chip = layout.legend.iter().find(|c| c.name == "Web").unwrap();
    assert!(web_chip.dimmed);
    assert!(!web_chip.selected);
}

#[test]
fn filtering_everything_out_gives_an_empty_layout() {
    let mut web = project("web", "Web", ProjectStatus::Active);
    web.deadline = date(3);
    let snapshot = WorkspaceSnapshot::new(vec![web], vec![Category::new("Web"), Category::new("Branding")], vec![]);

    let (_, layout) = layout_for(&snapshot, &CategoryFilter::from_names(["Branding"]));
    assert!(layout.is_empty());
}

#[test]
fn feed_json_with_mixed_and_broken_dates() {
    let json = r#"{
        "projects": [
            {"id": "a", "name": "Loja", "client": "ACME", "types": ["Web"], "status": "active",
             "createdAt": "2025-03-01", "deadline": "20/03/2025"},
            {"id": "b", "name": "Blog", "type": "Web", "status": "review",
             "createdAt": "não sei", "deadline": {"weird": true}},
            {"id": "c", "name": "Posts", "types": ["Social"], "status": "completed",
             "reportDate": "2025-03-14T10:00:00"}
        ],
        "categories": [{"name": "Web"}, {"name": "Social", "isRecurring": true}],
        "stages": [{"id": "dev", "title": "Desenvolvimento", "status": "active", "order": 1}]
    }"#;
    let snapshot: WorkspaceSnapshot = serde_json::from_str(json).unwrap();

    let (model, layout) = layout_for(&snapshot, &CategoryFilter::new());
    // "b" has no usable deadline and no recurring service date
    let ids: Vec<&str> = layout.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a"]);
    assert_eq!(model.grid.first_day(), day(-7));
    assert_eq!(model.grid.last_day(), NaiveDate::from_ymd_opt(2025, 3, 23).unwrap());
    assert_eq!(layout.rows[1].client, "ACME");
    assert_eq!(layout.rows[1].color, ColorBucket::Amber);
    assert_eq!(layout.rows[0].color, ColorBucket::Blue);
}

#[test]
fn extreme_feed_dates_are_laid_out_without_panicking() {
    let json = r#"{
        "projects": [
            {"id": "far", "name": "Far", "status": "active", "deadline": "+262142-12-30"},
            {"id": "ms", "name": "Millis", "status": "active", "createdAt": 8210266876799999},
            {"id": "soon", "name": "Soon", "status": "active", "deadline": "2025-03-14"}
        ]
    }"#;
    let snapshot: WorkspaceSnapshot = serde_json::from_str(json).unwrap();

    let (model, layout) = layout_for(&snapshot, &CategoryFilter::new());
    assert_eq!(model.grid.len(), MAX_GRID_DAYS);
    assert_eq!(model.grid.first_day(), today());
    let ids: Vec<&str> = layout.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["soon", "far"]);
    for row in &layout.rows {
        assert!(row.bar.end_column() <= model.grid.len(), "{}", row.id);
    }
}

#[test]
fn sentinel_deadline_keeps_the_grid_bounded() {
    let mut forever = project("forever", "Web", ProjectStatus::Active);
    forever.deadline = Some(DateValue::from(NaiveDate::from_ymd_opt(9999, 12, 31).unwrap()));
    let snapshot = WorkspaceSnapshot::new(vec![forever], vec![Category::new("Web")], vec![]);

    let (model, layout) = layout_for(&snapshot, &CategoryFilter::new());
    assert_eq!(model.grid.len(), MAX_GRID_DAYS);
    assert_eq!(model.grid.last_day(), day(MAX_SPAN_DAYS));
    assert_eq!(layout.rows[0].bar.duration, MAX_GRID_DAYS);
}

// ── Properties ───────────────────────────────────────────────────────────────

fn assorted_projects() -> Vec<PreparedProject> {
    let categories = vec![Category::new("Web"), Category::recurring("Social")];
    let statuses = [
        ProjectStatus::Lead,
        ProjectStatus::Active,
        ProjectStatus::Review,
        ProjectStatus::Completed,
        ProjectStatus::Finished,
    ];
    let offsets = [None, Some(-40), Some(-8), Some(-1), Some(0), Some(2), Some(9), Some(60)];

    let mut projects = Vec::new();
    for (i, status) in statuses.iter().enumerate() {
        for created in offsets {
            for deadline in offsets {
                let category = if i % 2 == 0 { "Web" } else { "Social" };
                let mut p = project(&format!("{i}-{created:?}-{deadline:?}"), category, *status);
                p.created_at = created.and_then(date);
                p.deadline = deadline.and_then(date);
                p.maintenance_date = deadline.map(|d| d + 1).and_then(date);
                projects.push(PreparedProject::prepare(p, &categories));
            }
        }
    }
    projects
}

#[test]
fn bars_and_overlays_stay_in_bounds() {
    let projects = assorted_projects();
    let start = calculate_start_date(&projects, today());
    for grid_len in [1, 7, 8, 30] {
        for p in &projects {
            let bar = position_bar(p, start, grid_len);
            assert!(bar.start_column < grid_len, "{}", p.project.id);
            assert!(bar.duration >= 1, "{}", p.project.id);
            assert!(bar.start_column + bar.duration <= grid_len, "{}", p.project.id);
        }
    }

    let snapshot = WorkspaceSnapshot::new(
        projects.iter().map(|p| p.project.clone()).collect(),
        vec![Category::new("Web"), Category::recurring("Social")],
        vec![],
    );
    let (_, layout) = layout_for(&snapshot, &CategoryFilter::new());
    assert!(!layout.is_empty());
    for row in &layout.rows {
        assert!((0.0..=100.0).contains(&row.progress), "{}", row.id);
        assert!((0.0..=1.0).contains(&row.past_fraction), "{}", row.id);
    }
}

#[test]
fn window_defaults_and_clamps() {
    assert_eq!(calculate_end_date(today(), &[]), day(7));

    let projects = assorted_projects();
    let start = calculate_start_date(&projects, today());
    assert!(start >= day(-7));
    assert!(start <= today());
    assert_eq!(calculate_start_date(&[], today()), today());
}

#[test]
fn color_follows_category_position() {
    let categories: Vec<Category> = (0..14).map(|i| Category::new(format!("Cat {i}"))).collect();
    for (i, category) in categories.iter().enumerate() {
        assert_eq!(color_for(&category.name, &categories), ColorBucket::from_index(i));
        assert_eq!(color_for(&category.name, &categories), ColorBucket::ALL[i % 6]);
    }
}

#[test]
fn equal_sort_keys_keep_feed_order() {
    let categories = vec![Category::new("Web")];
    let projects: Vec<PreparedProject> = ["first", "second", "third"]
        .into_iter()
        .map(|id| {
            let mut p = project(id, "Web", ProjectStatus::Active);
            p.deadline = date(4);
            PreparedProject::prepare(p, &categories)
        })
        .collect();

    let order = select_projects(&projects, &CategoryFilter::new(), today());
    assert_eq!(order, vec![0, 1, 2]);
}
