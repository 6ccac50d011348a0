use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tasks::{comments::Comment, repo::Task};

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub is_resolved: bool,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub value: String,
    pub is_resolved: bool,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            value: t.value,
            is_resolved: t.is_resolved,
        }
    }
}

/// Single-task response, with the synthesized comments attached.
#[derive(Debug, Serialize)]
pub struct TaskDetails {
    pub id: Uuid,
    pub value: String,
    pub is_resolved: bool,
    pub comments: Vec<Comment>,
}

impl TaskDetails {
    pub fn new(task: Task, comments: Vec<Comment>) -> Self {
        Self {
            id: task.id,
            value: task.value,
            is_resolved: task.is_resolved,
            comments,
        }
    }
}
