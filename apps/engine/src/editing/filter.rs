use chrono::NaiveDate;
use tracing::debug;

use crate::models::{ExperienceInfo, Project, Role};

/// An item's effective span, with `None` meaning "open" on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl Span {
    /// A role with a start but no end is ongoing.
    fn of_role(role: &Role) -> Self {
        Span {
            start: role.start_date(),
            end: role.end_date(),
        }
    }

    /// A project with a start but no end is treated as a single-month project.
    fn of_project(project: &Project) -> Self {
        let start = project.start_date();
        Span {
            start,
            end: project.end_date().or(start),
        }
    }

    /// Items without a start date cannot be placed and are always kept.
    fn overlaps(&self, window_start: Option<NaiveDate>, window_end: Option<NaiveDate>) -> bool {
        let Some(start) = self.start else {
            return true;
        };
        let ends_before = matches!((self.end, window_start), (Some(end), Some(ws)) if end < ws);
        let starts_after = matches!(window_end, Some(we) if start > we);
        !ends_before && !starts_after
    }
}

/// Keeps the roles and projects whose date span overlaps `[start, end]`.
///
/// Either bound may be absent, meaning unbounded on that side. Relative order is kept
/// and nothing is rewritten; this is a view, not an edit.
pub fn filter_experience(
    experience: &ExperienceInfo,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ExperienceInfo {
    let roles: Vec<Role> = experience
        .roles
        .iter()
        .filter(|r| Span::of_role(r).overlaps(start, end))
        .cloned()
        .collect();
    let projects: Vec<Project> = experience
        .projects
        .iter()
        .filter(|p| Span::of_project(p).overlaps(start, end))
        .cloned()
        .collect();

    debug!(
        "Date filter {:?}..{:?} kept {}/{} roles and {}/{} projects",
        start,
        end,
        roles.len(),
        experience.roles.len(),
        projects.len(),
        experience.projects.len()
    );

    ExperienceInfo { roles, projects }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectOverview, RoleBasics};

    fn ym(y: i32, m: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, 1)
    }

    fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn role(company: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Role {
        Role {
            basics: Some(RoleBasics {
                company: Some(company.to_string()),
                start_date: start,
                end_date: end,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn project(title: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Project {
        Project {
            overview: Some(ProjectOverview {
                title: Some(title.to_string()),
                start_date: start,
                end_date: end,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn companies(exp: &ExperienceInfo) -> Vec<String> {
        exp.roles
            .iter()
            .filter_map(|r| r.basics.as_ref().and_then(|b| b.company.clone()))
            .collect()
    }

    fn sample() -> ExperienceInfo {
        ExperienceInfo {
            roles: vec![
                role("Overlapping", ym(2019, 6), ym(2020, 6)),
                role("Later", ym(2021, 5), ym(2021, 12)),
                role("Ongoing", ym(2019, 10), None),
                Role {
                    summary: Some("Undated work".to_string()),
                    ..Default::default()
                },
                role("Earlier", ym(2015, 1), ym(2018, 2)),
            ],
            projects: vec![
                project("Single month", ym(2020, 3), None),
                project("Old", ym(2010, 1), ym(2011, 1)),
                project("Undated", None, None),
            ],
        }
    }

    #[test]
    fn test_filter_window_2020() {
        let out = filter_experience(&sample(), day(2020, 1, 1), day(2020, 12, 31));
        assert_eq!(companies(&out), vec!["Overlapping", "Ongoing"]);
        // The undated role has no basics and is kept too.
        assert_eq!(out.roles.len(), 3);
        assert!(out.roles[2].basics.is_none());

        let titles: Vec<_> = out
            .projects
            .iter()
            .filter_map(|p| p.overview.as_ref().and_then(|o| o.title.clone()))
            .collect();
        assert_eq!(titles, vec!["Single month", "Undated"]);
    }

    #[test]
    fn test_filter_without_bounds_keeps_everything() {
        let exp = sample();
        assert_eq!(filter_experience(&exp, None, None), exp);
    }

    #[test]
    fn test_filter_open_start() {
        let out = filter_experience(&sample(), None, day(2018, 12, 31));
        assert_eq!(companies(&out), vec!["Earlier"]);
        assert_eq!(out.roles.len(), 2);
        assert_eq!(out.projects.len(), 2);
    }

    #[test]
    fn test_filter_open_end() {
        let out = filter_experience(&sample(), day(2021, 1, 1), None);
        assert_eq!(companies(&out), vec!["Later", "Ongoing"]);
    }

    #[test]
    fn test_filter_boundaries_are_inclusive() {
        let exp = ExperienceInfo {
            roles: vec![role("Ends on start", ym(2019, 1), ym(2020, 1))],
            projects: vec![project("Starts on end", ym(2020, 12), ym(2021, 3))],
        };
        let out = filter_experience(&exp, ym(2020, 1), ym(2020, 12));
        assert_eq!(out.roles.len(), 1);
        assert_eq!(out.projects.len(), 1);
    }

    #[test]
    fn test_single_month_project_outside_window() {
        let exp = ExperienceInfo {
            roles: vec![],
            projects: vec![project("Hackathon", ym(2019, 11), None)],
        };
        let out = filter_experience(&exp, day(2020, 1, 1), day(2020, 12, 31));
        assert!(out.projects.is_empty());
    }
}
