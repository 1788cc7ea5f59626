//! Which projects appear on the timeline, and in what order.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::dates::days_between;
use super::prepared::PreparedProject;

/// A project is placed when it has an open deadline, or when its recurring
/// category gives it a maintenance or report date after delivery.
pub fn is_timeline_eligible(project: &PreparedProject) -> bool {
    let open_deadline = project.dates.deadline.is_some() && !project.is_closed();
    let service_window = project.recurring && project.dates.has_service_date();
    open_deadline || service_window
}

/// Active category selection. Empty means everything is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: BTreeSet<String>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Add or remove one category.
    pub fn toggle(&mut self, name: &str) {
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Whether a project passes the filter, by its primary category.
    pub fn matches(&self, project: &PreparedProject) -> bool {
        self.is_empty()
            || project
                .primary_category
                .as_deref()
                .is_some_and(|name| self.is_selected(name))
    }
}

/// The date a project is ordered by, `None` sorting last.
///
/// The deadline when there is one; otherwise whichever service date is
/// nearer to today, or the only one present.
pub fn sort_key(project: &PreparedProject, today: NaiveDate) -> Option<NaiveDate> {
    let d = &project.dates;
    if let Some(deadline) = d.deadline {
        return Some(deadline);
    }
    match (d.maintenance, d.report) {
        (Some(m), Some(r)) => {
            let dm = days_between(today, m).abs();
            let dr = days_between(today, r).abs();
            Some(if dr < dm || (dr == dm && r < m) { r } else { m })
        }
        (m, r) => m.or(r),
    }
}

/// Indices into `projects` of the rows to show, in display order.
///
/// The sort is stable: projects with the same key keep feed order.
pub fn select_projects(projects: &[PreparedProject], filter: &CategoryFilter, today: NaiveDate) -> Vec<usize> {
    let mut selected: Vec<(usize, Option<NaiveDate>)> = projects
        .iter()
        .enumerate()
        .filter(|(_, p)| is_timeline_eligible(p) && filter.matches(p))
        .map(|(i, p)| (i, sort_key(p, today)))
        .collect();

    selected.sort_by_key(|&(_, key)| (key.is_none(), key));

    tracing::debug!(
        total = projects.len(),
        visible = selected.len(),
        filtered = !filter.is_empty(),
        "timeline rows selected"
    );

    selected.into_iter().map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Project, ProjectStatus};
    use crate::timeline::prepared::{fixtures::*, prepare_all};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    fn day(n: i64) -> NaiveDate {
        today() + Duration::days(n)
    }

    fn categories() -> Vec<Category> {
        vec![Category::new("Web"), Category::recurring("SEO"), Category::new("Branding")]
    }

    fn prepare(projects: Vec<Project>) -> Vec<PreparedProject> {
        prepare_all(&projects, &categories())
    }

    #[test]
    fn eligibility_rules() {
        let projects = prepare(vec![
            dated(with_category(project("open", ProjectStatus::Active), "Web"), None, Some(day(3)), None, None),
            dated(with_category(project("done", ProjectStatus::Completed), "Web"), None, Some(day(3)), None, None),
            dated(with_category(project("seo-done", ProjectStatus::Finished), "SEO"), None, None, None, Some(day(9))),
            dated(with_category(project("web-maint", ProjectStatus::Active), "Web"), None, None, Some(day(4)), None),
            with_category(project("undated", ProjectStatus::Active), "SEO"),
        ]);
        let eligible: Vec<&str> = projects
            .iter()
            .filter(|p| is_timeline_eligible(p))
            .map(|p| p.project.id.as_str())
            .collect();
        assert_eq!(eligible, vec!["open", "seo-done"]);
    }

    #[test]
    fn sort_key_prefers_deadline() {
        let p = prepare(vec![dated(project("a", ProjectStatus::Active), None, Some(day(8)), Some(day(1)), None)]);
        assert_eq!(sort_key(&p[0], today()), Some(day(8)));
    }

    #[test]
    fn sort_key_nearest_service_date_to_today() {
        // The report is later on the calendar but closer to today.
        let p = prepare(vec![dated(project("a", ProjectStatus::Active), None, None, Some(day(-6)), Some(day(2)))]);
        assert_eq!(sort_key(&p[0], today()), Some(day(2)));
        let p = prepare(vec![dated(project("a", ProjectStatus::Active), None, None, Some(day(-3)), Some(day(3)))]);
        assert_eq!(sort_key(&p[0], today()), Some(day(-3)));
        let p = prepare(vec![dated(project("a", ProjectStatus::Active), None, None, None, Some(day(5)))]);
        assert_eq!(sort_key(&p[0], today()), Some(day(5)));
        let p = prepare(vec![project("a", ProjectStatus::Active)]);
        assert_eq!(sort_key(&p[0], today()), None);
    }

    #[test]
    fn rows_are_sorted_and_stable() {
        let projects = prepare(vec![
            dated(project("late", ProjectStatus::Active), None, Some(day(9)), None, None),
            dated(project("tie-1", ProjectStatus::Active), None, Some(day(2)), None, None),
            dated(with_category(project("seo", ProjectStatus::Completed), "SEO"), None, None, Some(day(1)), None),
            dated(project("tie-2", ProjectStatus::Lead), None, Some(day(2)), None, None),
        ]);
        let order: Vec<&str> = select_projects(&projects, &CategoryFilter::new(), today())
            .into_iter()
            .map(|i| projects[i].project.id.as_str())
            .collect();
        assert_eq!(order, vec!["seo", "tie-1", "tie-2", "late"]);
    }

    #[test]
    fn category_filter_uses_primary_category() {
        let mut branding_first = project("b", ProjectStatus::Active);
        branding_first.types = vec!["Branding".into(), "Web".into()];
        let projects = prepare(vec![
            dated(branding_first, None, Some(day(2)), None, None),
            dated(with_category(project("w", ProjectStatus::Active), "Web"), None, Some(day(1)), None, None),
            dated(project("none", ProjectStatus::Active), None, Some(day(1)), None, None),
        ]);
        let filter = CategoryFilter::from_names(["Web"]);
        let ids: Vec<&str> = select_projects(&projects, &filter, today())
            .into_iter()
            .map(|i| projects[i].project.id.as_str())
            .collect();
        assert_eq!(ids, vec!["w"]);

        let both = CategoryFilter::from_names(["Web", "Branding"]);
        assert_eq!(select_projects(&projects, &both, today()).len(), 2);
        assert_eq!(select_projects(&projects, &CategoryFilter::new(), today()).len(), 3);
    }

    #[test]
    fn toggle_filter() {
        let mut filter = CategoryFilter::new();
        filter.toggle("Web");
        assert!(filter.is_selected("Web"));
        filter.toggle("Web");
        assert!(filter.is_empty());
    }
}
