//! Task Board
//!
//! Three buckets of plain task labels. A task has no identity beyond its
//! position, so every operation is expressed as (bucket, index).

use serde::{Deserialize, Serialize};

/// One of the three board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    Todo,
    Doing,
    Done,
}

impl Bucket {
    /// Display order on the board
    pub const ALL: [Bucket; 3] = [Bucket::Todo, Bucket::Doing, Bucket::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Todo => "Todo",
            Bucket::Doing => "Doing",
            Bucket::Done => "Done",
        }
    }

    /// Label of the per-card button that moves a task into this bucket
    pub fn move_label(&self) -> &'static str {
        match self {
            Bucket::Todo => "Back",
            Bucket::Doing => "Start",
            Bucket::Done => "Done",
        }
    }

    /// Buttons offered on a card sitting in `self`, in display order
    pub fn move_targets(&self) -> impl Iterator<Item = Bucket> + '_ {
        [Bucket::Done, Bucket::Doing, Bucket::Todo]
            .into_iter()
            .filter(move |target| target != self)
    }
}

/// Task labels grouped by bucket, most recently added or moved first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBoard {
    #[serde(rename = "Todo", default)]
    pub todo: Vec<String>,
    #[serde(rename = "Doing", default)]
    pub doing: Vec<String>,
    #[serde(rename = "Done", default)]
    pub done: Vec<String>,
}

impl Default for TaskBoard {
    /// Demo board used when nothing usable is stored yet
    fn default() -> Self {
        Self {
            todo: vec![
                "Call back Rohini lead".to_string(),
                "Upload site photos".to_string(),
            ],
            doing: vec!["Prepare brochure for Sawasdee Heights".to_string()],
            done: vec!["Follow-up email sent".to_string()],
        }
    }
}

impl TaskBoard {
    pub fn empty() -> Self {
        Self {
            todo: Vec::new(),
            doing: Vec::new(),
            done: Vec::new(),
        }
    }

    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Todo => &self.todo,
            Bucket::Doing => &self.doing,
            Bucket::Done => &self.done,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::Todo => &mut self.todo,
            Bucket::Doing => &mut self.doing,
            Bucket::Done => &mut self.done,
        }
    }

    /// Puts a new task at the head of Todo. Blank labels are ignored.
    pub fn add_task(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        self.todo.insert(0, label.to_string());
        true
    }

    /// Removes the task at `index` in `from` and puts it at the head of `to`.
    ///
    /// Returns `false` and leaves the board untouched when `index` is out of
    /// range. `from == to` moves the task to the head of its own bucket.
    pub fn move_task(&mut self, from: Bucket, to: Bucket, index: usize) -> bool {
        let source = self.bucket_mut(from);
        if index >= source.len() {
            log::debug!("ignoring move of {:?}[{}]: out of range", from, index);
            return false;
        }
        let task = source.remove(index);
        self.bucket_mut(to).insert(0, task);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(todo: &[&str], doing: &[&str], done: &[&str]) -> TaskBoard {
        let own = |xs: &[&str]| -> Vec<String> { xs.iter().map(|s| s.to_string()).collect() };
        TaskBoard {
            todo: own(todo),
            doing: own(doing),
            done: own(done),
        }
    }

    #[test]
    fn test_move_task_between_buckets() {
        let mut b = board(&["a", "b", "c"], &["x"], &[]);

        assert!(b.move_task(Bucket::Todo, Bucket::Doing, 1));

        assert_eq!(b.todo, vec!["a", "c"]);
        assert_eq!(b.doing, vec!["b", "x"]);
        assert!(b.done.is_empty());
    }

    #[test]
    fn test_move_task_out_of_range_is_noop() {
        let mut b = board(&["a"], &[], &[]);
        let before = b.clone();

        assert!(!b.move_task(Bucket::Todo, Bucket::Done, 5));
        assert!(!b.move_task(Bucket::Doing, Bucket::Done, 0));
        assert_eq!(b, before);
    }

    #[test]
    fn test_move_task_within_same_bucket() {
        let mut b = board(&["a", "b"], &[], &[]);
        assert!(b.move_task(Bucket::Todo, Bucket::Todo, 1));
        assert_eq!(b.todo, vec!["b", "a"]);
    }

    #[test]
    fn test_add_task_prepends_to_todo() {
        let mut b = TaskBoard::empty();
        assert!(b.add_task("first"));
        assert!(b.add_task("  second  "));
        assert!(!b.add_task("   "));

        assert_eq!(b.todo, vec!["second", "first"]);
        assert!(b.doing.is_empty() && b.done.is_empty());
    }

    #[test]
    fn test_wire_format_uses_bucket_names() {
        let json = serde_json::to_string(&board(&["t"], &[], &["d"])).unwrap();
        assert_eq!(json, r#"{"Todo":["t"],"Doing":[],"Done":["d"]}"#);
    }

    #[test]
    fn test_missing_bucket_loads_empty() {
        let b: TaskBoard = serde_json::from_str(r#"{"Todo":["t"]}"#).unwrap();
        assert_eq!(b.todo, vec!["t"]);
        assert!(b.doing.is_empty());
        assert!(b.done.is_empty());
    }

    #[test]
    fn test_move_targets_skip_current_bucket() {
        let targets: Vec<_> = Bucket::Doing.move_targets().collect();
        assert_eq!(targets, vec![Bucket::Done, Bucket::Todo]);
        assert_eq!(Bucket::Todo.move_targets().count(), 2);
    }
}
