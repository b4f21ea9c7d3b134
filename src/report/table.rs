// src/report/table.rs
//! API × project aggregation with first-seen ordering.

use crate::config::ColumnPolicy;
use crate::types::{display_path, SearchResult};

/// One match location inside a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file_path: String,
    pub line_number: usize,
}

#[derive(Debug, Clone)]
pub struct ProjectHits {
    pub project: String,
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone)]
pub struct ApiHits {
    pub api: String,
    pub projects: Vec<ProjectHits>,
}

impl ApiHits {
    /// Matches of this API in `project`, zero when absent.
    #[must_use]
    pub fn count_for(&self, project: &str) -> usize {
        self.projects
            .iter()
            .find(|p| p.project == project)
            .map_or(0, |p| p.locations.len())
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.projects.iter().map(|p| p.locations.len()).sum()
    }
}

/// A summary row: API name and one count per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub api: String,
    pub counts: Vec<usize>,
}

/// A per-project detail row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub api: String,
    pub file_path: String,
    pub line_number: usize,
}

/// Matches grouped by API, then project, preserving arrival order.
#[derive(Debug, Clone, Default)]
pub struct UsageTable {
    apis: Vec<ApiHits>,
}

impl UsageTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_results(results: &[SearchResult]) -> Self {
        let mut table = Self::new();
        for r in results {
            table.insert(r);
        }
        table
    }

    pub fn insert(&mut self, result: &SearchResult) {
        let project = result.project_name();
        let location = Location {
            file_path: display_path(&result.file_path),
            line_number: result.line_number,
        };

        let api_idx = match self.apis.iter().position(|a| a.api == result.api_name) {
            Some(i) => i,
            None => {
                self.apis.push(ApiHits { api: result.api_name.clone(), projects: Vec::new() });
                self.apis.len() - 1
            }
        };
        let projects = &mut self.apis[api_idx].projects;
        match projects.iter().position(|p| p.project == project) {
            Some(i) => projects[i].locations.push(location),
            None => projects.push(ProjectHits { project, locations: vec![location] }),
        }
    }

    #[must_use]
    pub fn apis(&self) -> &[ApiHits] {
        &self.apis
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }

    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.apis.iter().map(ApiHits::total).sum()
    }

    /// Every project with at least one match, in first-seen order.
    #[must_use]
    pub fn projects(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for api in &self.apis {
            for p in &api.projects {
                if !seen.contains(&p.project) {
                    seen.push(p.project.clone());
                }
            }
        }
        seen
    }

    /// Project columns of the summary under `policy`.
    #[must_use]
    pub fn columns(&self, policy: ColumnPolicy) -> Vec<String> {
        match policy {
            ColumnPolicy::Union => self.projects(),
            ColumnPolicy::FirstApi => self.apis.first().map_or_else(Vec::new, |a| {
                a.projects.iter().map(|p| p.project.clone()).collect()
            }),
        }
    }

    /// One zero-filled row per API, counts aligned with `columns`.
    #[must_use]
    pub fn summary_rows(&self, columns: &[String]) -> Vec<SummaryRow> {
        self.apis
            .iter()
            .map(|a| SummaryRow {
                api: a.api.clone(),
                counts: columns.iter().map(|c| a.count_for(c)).collect(),
            })
            .collect()
    }

    /// Every match of `project`, APIs in processing order.
    #[must_use]
    pub fn detail_rows(&self, project: &str) -> Vec<DetailRow> {
        self.apis
            .iter()
            .flat_map(|a| {
                a.projects
                    .iter()
                    .filter(move |p| p.project == project)
                    .flat_map(move |p| {
                        p.locations.iter().map(move |l| DetailRow {
                            api: a.api.clone(),
                            file_path: l.file_path.clone(),
                            line_number: l.line_number,
                        })
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn hit(api: &str, path: &str, line: usize) -> SearchResult {
        SearchResult::new(PathBuf::from(path), line, api, api)
    }

    #[test]
    fn counts_per_api_and_project() {
        let table = UsageTable::from_results(&[
            hit("foo", "X/a.cmake", 1),
            hit("foo", "X/a.cmake", 9),
            hit("foo", "Y/b.cmake", 2),
            hit("foo", "X/c/CMakeLists.txt", 3),
        ]);
        let cols = table.columns(ColumnPolicy::Union);
        assert_eq!(cols, vec!["X", "Y"]);
        let rows = table.summary_rows(&cols);
        assert_eq!(rows, vec![SummaryRow { api: "foo".into(), counts: vec![3, 1] }]);
        assert_eq!(table.total_matches(), 4);
    }

    #[test]
    fn union_columns_zero_fill_late_projects() {
        let table = UsageTable::from_results(&[
            hit("foo", "X/a.cmake", 1),
            hit("bar", "Z/a.cmake", 1),
            hit("bar", "X/a.cmake", 2),
        ]);
        let cols = table.columns(ColumnPolicy::Union);
        assert_eq!(cols, vec!["X", "Z"]);
        let rows = table.summary_rows(&cols);
        assert_eq!(rows[0].counts, vec![1, 0]);
        assert_eq!(rows[1].counts, vec![1, 1]);
    }

    #[test]
    fn first_api_columns_drop_late_projects() {
        let table = UsageTable::from_results(&[
            hit("foo", "X/a.cmake", 1),
            hit("bar", "Z/a.cmake", 1),
        ]);
        let cols = table.columns(ColumnPolicy::FirstApi);
        assert_eq!(cols, vec!["X"]);
        assert_eq!(table.summary_rows(&cols)[1].counts, vec![0]);
        assert_eq!(table.projects(), vec!["X", "Z"]);
    }

    #[test]
    fn detail_rows_span_all_apis_in_order() {
        let table = UsageTable::from_results(&[
            hit("foo", "X/a.cmake", 1),
            hit("bar", "X/b.cmake", 4),
            hit("foo", "Y/a.cmake", 2),
            hit("foo", "X/c.cmake", 7),
        ]);
        let rows = table.detail_rows("X");
        let flat: Vec<(&str, &str, usize)> = rows
            .iter()
            .map(|r| (r.api.as_str(), r.file_path.as_str(), r.line_number))
            .collect();
        assert_eq!(
            flat,
            vec![("foo", "X/a.cmake", 1), ("foo", "X/c.cmake", 7), ("bar", "X/b.cmake", 4)]
        );
    }
}
