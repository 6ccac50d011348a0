use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

/// Placeholder comment attached to a fetched task. Not persisted: synthesized
/// fresh on every read, pending a real comments feature.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub value: String,
    pub author: String,
    pub task_id: Uuid,
}

/// Zero to nine placeholder comments for the given task.
pub fn synthesize_comments(task_id: Uuid) -> Vec<Comment> {
    let n = rand::thread_rng().gen_range(0..10);
    (0..n)
        .map(|_| Comment {
            id: Uuid::new_v4(),
            value: "Best comment".to_string(),
            author: "I am the author".to_string(),
            task_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_count_stays_in_range() {
        for _ in 0..100 {
            let comments = synthesize_comments(Uuid::new_v4());
            assert!(comments.len() < 10);
        }
    }

    #[test]
    fn comments_reference_parent_task() {
        let task_id = Uuid::new_v4();
        for comment in synthesize_comments(task_id) {
            assert_eq!(comment.task_id, task_id);
        }
    }
}
