//! Task Statistics
//!
//! Counters for the public view, computed from the loaded task list.

use std::f64::consts::PI;

use crate::models::{Status, Task};

/// Radius of the progress ring in the stats panel
const RING_RADIUS: f64 = 45.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub in_progress: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let count = |status: Status| tasks.iter().filter(|t| t.status == status).count();
        Self {
            total: tasks.len(),
            completed: count(Status::Completed),
            pending: count(Status::Pending),
            in_progress: count(Status::InProgress),
        }
    }

    /// Completion percentage, rounded; 0 for an empty list
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// `stroke-dashoffset` of the progress ring
    pub fn ring_offset(&self) -> f64 {
        let circumference = ring_circumference();
        circumference - f64::from(self.percent()) / 100.0 * circumference
    }
}

pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn task_with(id: u32, status: Status) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            category_id: None,
            priority: Priority::Medium,
            status,
            due_date: None,
            category_name: None,
            category_color: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_list() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(stats, TaskStats::default());
        assert_eq!(stats.percent(), 0);
        assert!((stats.ring_offset() - ring_circumference()).abs() < 1e-9);
    }

    #[test]
    fn test_counts_and_rounding() {
        let tasks = vec![
            task_with(1, Status::Completed),
            task_with(2, Status::Pending),
            task_with(3, Status::InProgress),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.in_progress, 1);
        // 33.33 -> 33
        assert_eq!(stats.percent(), 33);

        let two_of_three = vec![
            task_with(1, Status::Completed),
            task_with(2, Status::Completed),
            task_with(3, Status::Pending),
        ];
        // 66.67 -> 67
        assert_eq!(TaskStats::from_tasks(&two_of_three).percent(), 67);
    }

    #[test]
    fn test_all_completed_closes_ring() {
        let tasks = vec![task_with(1, Status::Completed), task_with(2, Status::Completed)];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.percent(), 100);
        assert!(stats.ring_offset().abs() < 1e-9);
    }
}
