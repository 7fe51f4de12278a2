//! Derived gallery views over the project collection
//!
//! Pure read-side functions: they borrow the collection, never mutate
//! it, and return a fresh ordering each call.

use serde::Deserialize;

use crate::models::Project;

/// Sort order for the gallery listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Descending creation date.
    Newest,
    /// Ascending creation date.
    Oldest,
    /// Descending like count.
    Popular,
    /// Descending view count.
    Views,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Newest
    }
}

/// User-chosen gallery criteria. `None` selectors mean "all".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryQuery {
    #[serde(default)]
    pub search: String,
    pub category_id: Option<i64>,
    pub tag: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
}

/// Compute the ordered sequence of projects the gallery displays.
///
/// The pipeline is fixed: active filter, category filter, free-text
/// search, tag filter, then sort. Ties keep their incoming relative
/// order (the sort is stable, no secondary key).
pub fn visible_projects<'a>(projects: &'a [Project], query: &GalleryQuery) -> Vec<&'a Project> {
    let mut filtered: Vec<&Project> = projects.iter().filter(|p| p.is_active).collect();

    if let Some(category_id) = query.category_id {
        filtered.retain(|p| p.category_id == category_id);
    }

    // The query text is taken literally, whitespace included.
    let needle = query.search.to_lowercase();
    if !needle.is_empty() {
        filtered.retain(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        });
    }

    if let Some(tag) = &query.tag {
        filtered.retain(|p| p.tags.iter().any(|t| t == tag));
    }

    match query.sort {
        SortKey::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Popular => filtered.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortKey::Views => filtered.sort_by(|a, b| b.views.cmp(&a.views)),
    }

    filtered
}

/// Unique tags across all projects, in first-seen order. Feeds the tag
/// selector options.
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for project in projects {
        for tag in &project.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Totals shown on the admin overview tab.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_views: u64,
    pub total_likes: u64,
}

pub fn overview(projects: &[Project]) -> Overview {
    Overview {
        total_projects: projects.len(),
        active_projects: projects.iter().filter(|p| p.is_active).count(),
        total_views: projects.iter().map(|p| u64::from(p.views)).sum(),
        total_likes: projects.iter().map(|p| u64::from(p.likes)).sum(),
    }
}

/// Newest-first head of the collection, for the "recent projects" list.
pub fn recent<'a>(projects: &'a [Project], n: usize) -> Vec<&'a Project> {
    let mut sorted: Vec<&Project> = projects.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn seed_projects() -> Vec<Project> {
        seed::catalog().projects().to_vec()
    }

    #[test]
    fn inactive_projects_never_appear() {
        let mut projects = seed_projects();
        projects[0].is_active = false;
        let hidden = projects[0].id;

        let visible = visible_projects(&projects, &GalleryQuery::default());
        assert!(visible.iter().all(|p| p.is_active));
        assert!(visible.iter().all(|p| p.id != hidden));
    }

    #[test]
    fn category_filter_keeps_only_matching_projects() {
        let projects = seed_projects();
        let query = GalleryQuery {
            category_id: Some(2),
            ..Default::default()
        };
        let visible = visible_projects(&projects, &query);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.category_id == 2));
    }

    #[test]
    fn search_is_case_insensitive() {
        let projects = seed_projects();
        let upper = visible_projects(
            &projects,
            &GalleryQuery {
                search: "REACT".to_string(),
                ..Default::default()
            },
        );
        let lower = visible_projects(
            &projects,
            &GalleryQuery {
                search: "react".to_string(),
                ..Default::default()
            },
        );
        let upper_ids: Vec<i64> = upper.iter().map(|p| p.id).collect();
        let lower_ids: Vec<i64> = lower.iter().map(|p| p.id).collect();
        assert_eq!(upper_ids, lower_ids);
        assert!(!upper_ids.is_empty());
    }

    #[test]
    fn search_matches_title_description_and_tags() {
        let projects = seed_projects();

        // "dashboard" appears only in one title.
        let by_title = visible_projects(
            &projects,
            &GalleryQuery {
                search: "dashboard".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_title.len(), 1);

        // "stripe" appears only as a tag.
        let by_tag = visible_projects(
            &projects,
            &GalleryQuery {
                search: "stripe".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_tag.len(), 1);
        assert!(by_tag[0].tags.iter().any(|t| t == "Stripe"));
    }

    #[test]
    fn search_whitespace_is_a_significant_substring() {
        let projects = seed_projects();

        // No title, description, or tag contains "dashboard " with a
        // trailing space, so the query must match nothing.
        let trailing = visible_projects(
            &projects,
            &GalleryQuery {
                search: "dashboard ".to_string(),
                ..Default::default()
            },
        );
        assert!(trailing.is_empty());

        // A lone space is a real needle, not "all": it matches the
        // projects whose text contains one.
        let space = visible_projects(
            &projects,
            &GalleryQuery {
                search: " ".to_string(),
                ..Default::default()
            },
        );
        assert!(!space.is_empty());
        assert!(space
            .iter()
            .all(|p| p.title.contains(' ') || p.description.contains(' ')
                || p.tags.iter().any(|t| t.contains(' '))));
    }

    #[test]
    fn tag_filter_requires_exact_membership() {
        let projects = seed_projects();
        let query = GalleryQuery {
            tag: Some("React".to_string()),
            ..Default::default()
        };
        let visible = visible_projects(&projects, &query);
        assert!(!visible.is_empty());
        // "React Native" is a different tag and must not satisfy "React".
        assert!(visible.iter().all(|p| p.tags.iter().any(|t| t == "React")));
    }

    #[test]
    fn popular_sort_is_monotonically_non_increasing() {
        let projects = seed_projects();
        let visible = visible_projects(
            &projects,
            &GalleryQuery {
                sort: SortKey::Popular,
                ..Default::default()
            },
        );
        for pair in visible.windows(2) {
            assert!(pair[0].likes >= pair[1].likes);
        }
    }

    #[test]
    fn views_sort_is_monotonically_non_increasing() {
        let projects = seed_projects();
        let visible = visible_projects(
            &projects,
            &GalleryQuery {
                sort: SortKey::Views,
                ..Default::default()
            },
        );
        assert!(!visible.is_empty());
        for pair in visible.windows(2) {
            assert!(pair[0].views >= pair[1].views);
        }
    }

    #[test]
    fn oldest_and_newest_are_reverses_of_each_other() {
        let projects = seed_projects();
        let newest: Vec<i64> = visible_projects(
            &projects,
            &GalleryQuery {
                sort: SortKey::Newest,
                ..Default::default()
            },
        )
        .iter()
        .map(|p| p.id)
        .collect();
        let mut oldest: Vec<i64> = visible_projects(
            &projects,
            &GalleryQuery {
                sort: SortKey::Oldest,
                ..Default::default()
            },
        )
        .iter()
        .map(|p| p.id)
        .collect();
        oldest.reverse();
        assert_eq!(newest, oldest);
    }

    #[test]
    fn filtering_never_mutates_the_input() {
        let projects = seed_projects();
        let snapshot: Vec<i64> = projects.iter().map(|p| p.id).collect();
        let _ = visible_projects(
            &projects,
            &GalleryQuery {
                sort: SortKey::Views,
                ..Default::default()
            },
        );
        let after: Vec<i64> = projects.iter().map(|p| p.id).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn no_match_yields_an_empty_sequence() {
        let projects = seed_projects();
        let visible = visible_projects(
            &projects,
            &GalleryQuery {
                search: "definitely-not-a-project".to_string(),
                ..Default::default()
            },
        );
        assert!(visible.is_empty());
    }

    #[test]
    fn all_tags_dedupes_in_first_seen_order() {
        let projects = seed_projects();
        let tags = all_tags(&projects);
        let mut deduped = tags.clone();
        deduped.dedup();
        assert_eq!(tags, deduped);
        assert!(tags.contains(&"React".to_string()));
    }

    #[test]
    fn recent_returns_the_newest_head() {
        let projects = seed_projects();
        let top = recent(&projects, 2);
        assert_eq!(top.len(), 2);
        assert!(top[0].created_at >= top[1].created_at);

        // Larger n than the collection is clamped, not an error.
        assert_eq!(recent(&projects, 100).len(), projects.len());
    }

    #[test]
    fn overview_sums_engagement_counters() {
        let projects = seed_projects();
        let stats = overview(&projects);
        assert_eq!(stats.total_projects, projects.len());
        assert_eq!(
            stats.total_likes,
            projects.iter().map(|p| u64::from(p.likes)).sum::<u64>()
        );
    }

    #[test]
    fn like_then_resort_keeps_relative_order_until_overtaken() {
        // Seed likes are {45, 32, 28}: liking the last-place project
        // once moves it to 29 and leaves the order unchanged.
        let mut catalog = seed::catalog();
        let query = GalleryQuery {
            sort: SortKey::Popular,
            ..Default::default()
        };

        let before: Vec<u32> = visible_projects(catalog.projects(), &query)
            .iter()
            .map(|p| p.likes)
            .collect();
        assert_eq!(before, vec![45, 32, 28]);

        let last = visible_projects(catalog.projects(), &query)
            .last()
            .map(|p| p.id)
            .unwrap();
        catalog.like_project(last).unwrap();

        let after: Vec<u32> = visible_projects(catalog.projects(), &query)
            .iter()
            .map(|p| p.likes)
            .collect();
        assert_eq!(after, vec![45, 32, 29]);
        assert_eq!(
            visible_projects(catalog.projects(), &query).last().map(|p| p.id),
            Some(last)
        );
    }
}
