use std::cmp::Ordering;

use crate::model::task::Task;

/// Total order for the task list: higher priority first, then name ascending
/// (byte-wise).
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.name.cmp(&b.name))
}

/// Stable sort by [`compare_tasks`]. Tasks equal under the comparator keep
/// their relative order, so sorting a sorted list changes nothing.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(compare_tasks);
}

/// Remove the task at `index`. Out of range is a no-op.
pub fn remove_task(tasks: &mut Vec<Task>, index: usize) -> Option<Task> {
    if index < tasks.len() {
        Some(tasks.remove(index))
    } else {
        None
    }
}

/// Drop every done task, keeping the survivors in order. Returns how many
/// were removed.
pub fn clear_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|t| !t.done);
    before - tasks.len()
}

/// Clamp a cursor into `[0, len - 1]`, or 0 for an empty list.
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { cursor.min(len - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;

    fn task(name: &str, done: bool, priority: Priority) -> Task {
        Task {
            name: name.to_string(),
            done,
            priority,
        }
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn higher_priority_sorts_first_regardless_of_name() {
        let mut tasks = vec![
            task("a", false, Priority::Low),
            task("z", false, Priority::Fire),
            task("m", false, Priority::High),
        ];
        sort_tasks(&mut tasks);
        assert_eq!(names(&tasks), vec!["z", "m", "a"]);
    }

    #[test]
    fn equal_priority_sorts_by_name() {
        let mut tasks = vec![
            task("B", false, Priority::Low),
            task("A", false, Priority::Low),
            task("a", false, Priority::Low),
        ];
        sort_tasks(&mut tasks);
        // byte order: uppercase before lowercase
        assert_eq!(names(&tasks), vec!["A", "B", "a"]);
    }

    #[test]
    fn sort_is_stable_for_duplicates() {
        let mut tasks = vec![
            task("same", true, Priority::High),
            task("other", false, Priority::Low),
            task("same", false, Priority::High),
        ];
        sort_tasks(&mut tasks);
        assert_eq!(tasks[0], task("same", true, Priority::High));
        assert_eq!(tasks[1], task("same", false, Priority::High));
        assert_eq!(tasks[2].name, "other");
    }

    #[test]
    fn sort_is_idempotent() {
        let mut tasks = vec![
            task("c", false, Priority::High),
            task("b", true, Priority::Fire),
            task("a", false, Priority::High),
            task("d", false, Priority::Low),
        ];
        sort_tasks(&mut tasks);
        let once = tasks.clone();
        sort_tasks(&mut tasks);
        assert_eq!(tasks, once);
    }

    #[test]
    fn compare_is_consistent() {
        let a = task("a", false, Priority::Low);
        let b = task("b", true, Priority::Low);
        assert_eq!(compare_tasks(&a, &b), Ordering::Less);
        assert_eq!(compare_tasks(&b, &a), Ordering::Greater);
        assert_eq!(compare_tasks(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn clear_completed_keeps_survivor_order() {
        let mut tasks = vec![
            task("one", false, Priority::Low),
            task("two", true, Priority::Low),
            task("three", false, Priority::Low),
            task("four", true, Priority::Fire),
        ];
        assert_eq!(clear_completed(&mut tasks), 2);
        assert_eq!(names(&tasks), vec!["one", "three"]);
    }

    #[test]
    fn remove_task_out_of_range() {
        let mut tasks = vec![task("only", false, Priority::Low)];
        assert!(remove_task(&mut tasks, 1).is_none());
        assert_eq!(remove_task(&mut tasks, 0).map(|t| t.name), Some("only".into()));
        assert!(tasks.is_empty());
    }

    #[test]
    fn clamp_cursor_bounds() {
        assert_eq!(clamp_cursor(0, 0), 0);
        assert_eq!(clamp_cursor(5, 0), 0);
        assert_eq!(clamp_cursor(2, 2), 1);
        assert_eq!(clamp_cursor(1, 3), 1);
    }
}
