use crate::{
    problem::task::{Task, TaskIdx},
    utils::enumerate_idx::EnumerateIdx,
};

/// Ordered collection of tasks. The order is the iteration order used by the
/// initial assignment and determines each task's [`TaskIdx`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskSet { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, task_idx: TaskIdx) -> &Task {
        &self.tasks[task_idx]
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn iter_idx(&self) -> impl Iterator<Item = (TaskIdx, &Task)> {
        self.tasks.iter().enumerate_idx()
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Copy of this set with `task` appended last.
    pub fn with_task(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend_from_slice(&self.tasks);
        tasks.push(task);
        TaskSet { tasks }
    }

    pub fn contains_id(&self, id: u32) -> bool {
        self.tasks.iter().any(|task| task.id() == id)
    }
}

impl FromIterator<Task> for TaskSet {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        TaskSet {
            tasks: iter.into_iter().collect(),
        }
    }
}
