use crate::domain_model::*;

/// One page of a client-side shaped list, 1-based.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(items.len());
    let slice = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };
    Page {
        items: slice,
        total: items.len(),
        page,
        per_page,
    }
}

#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub assignee: Option<UserId>,
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
}

pub fn filter_issues(items: &[Issue], filter: &IssueFilter) -> Vec<Issue> {
    let needle = filter.search.as_ref().map(|s| s.to_lowercase());
    items
        .iter()
        .filter(|issue| filter.status.is_none_or(|s| issue.status == s))
        .filter(|issue| filter.priority.is_none_or(|p| issue.priority == p))
        .filter(|issue| filter.assignee.is_none_or(|a| issue.assignee == Some(a)))
        .filter(|issue| {
            needle.as_ref().is_none_or(|n| {
                issue.title.to_lowercase().contains(n)
                    || issue.description.to_lowercase().contains(n)
            })
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSort {
    Created,
    Updated,
    Priority,
    Status,
}

pub fn sort_issues(items: &mut [Issue], key: IssueSort, descending: bool) {
    items.sort_by(|a, b| {
        let ordering = match key {
            IssueSort::Created => a.created_at.cmp(&b.created_at),
            IssueSort::Updated => a.updated_at.cmp(&b.updated_at),
            IssueSort::Priority => a.priority.cmp(&b.priority),
            IssueSort::Status => a.status.cmp(&b.status),
        };
        if descending { ordering.reverse() } else { ordering }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn issue(id: u64, status: IssueStatus, priority: IssuePriority, title: &str) -> Issue {
        Issue {
            id: IssueId(id),
            title: title.to_string(),
            description: String::new(),
            status,
            priority,
            reporter: UserId(uuid::Uuid::nil()),
            assignee: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, id as u32 % 60).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 8, 2, 0, 0, id as u32 % 60).unwrap(),
        }
    }

    #[test]
    fn filters_compose() {
        let items = vec![
            issue(1, IssueStatus::Open, IssuePriority::High, "Printer jam"),
            issue(2, IssueStatus::Closed, IssuePriority::High, "Printer noise"),
            issue(3, IssueStatus::Open, IssuePriority::Low, "Login broken"),
        ];
        let filter = IssueFilter {
            status: Some(IssueStatus::Open),
            search: Some("printer".into()),
            ..Default::default()
        };
        let found = filter_issues(&items, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, IssueId(1));
    }

    #[test]
    fn sorting_by_priority_descending_puts_urgent_first() {
        let mut items = vec![
            issue(1, IssueStatus::Open, IssuePriority::Low, "a"),
            issue(2, IssueStatus::Open, IssuePriority::Urgent, "b"),
            issue(3, IssueStatus::Open, IssuePriority::Medium, "c"),
        ];
        sort_issues(&mut items, IssueSort::Priority, true);
        assert_eq!(items[0].id, IssueId(2));
        assert_eq!(items[2].id, IssueId(1));
    }

    #[test]
    fn pagination_clamps_out_of_range_pages() {
        let items: Vec<u32> = (0..10).collect();

        let page = paginate(&items, 2, 4);
        assert_eq!(page.items, vec![4, 5, 6, 7]);
        assert_eq!(page.total, 10);

        let last = paginate(&items, 3, 4);
        assert_eq!(last.items, vec![8, 9]);

        let beyond = paginate(&items, 9, 4);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 10);

        // page and per_page of zero are treated as one.
        let clamped = paginate(&items, 0, 0);
        assert_eq!(clamped.items, vec![0]);
    }
}
