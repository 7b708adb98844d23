use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use super::models::{CreateTask, Task, UpdateTask};
use crate::error::{PlannerError, PlannerResult};

/// Repository trait for Task persistence
///
/// Implementations do not check that referenced projects or users exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, input: CreateTask) -> PlannerResult<Task>;

    async fn get_by_id(&self, id: i32) -> PlannerResult<Option<Task>>;

    /// All tasks ordered by id
    async fn list(&self) -> PlannerResult<Vec<Task>>;

    /// Tasks of one project ordered by id
    async fn list_by_project(&self, project_id: i32) -> PlannerResult<Vec<Task>>;

    /// Apply the present fields; `NotFound` if the id is unknown
    async fn update(&self, id: i32, input: UpdateTask) -> PlannerResult<Task>;

    /// Returns false when no row had this id
    async fn delete(&self, id: i32) -> PlannerResult<bool>;

    /// Delete every task of a project, returning how many were removed
    async fn delete_by_project(&self, project_id: i32) -> PlannerResult<u64>;

    /// Clear `assignee_id` on every task assigned to the user, returning how many changed
    async fn unassign_user(&self, user_id: i32) -> PlannerResult<u64>;
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<BTreeMap<i32, Task>>>,
    last_id: Arc<AtomicI32>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: CreateTask) -> PlannerResult<Task> {
        let task = Task {
            id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            status: input.status,
            priority: input.priority,
            assignee_id: input.assignee_id,
            project_id: input.project_id,
            created_at: Utc::now(),
        };

        self.tasks.write().await.insert(task.id, task.clone());

        tracing::info!(task_id = %task.id, project_id = %task.project_id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: i32) -> PlannerResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list(&self) -> PlannerResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.values().cloned().collect())
    }

    async fn list_by_project(&self, project_id: i32) -> PlannerResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, input: UpdateTask) -> PlannerResult<Task> {
        let mut tasks = self.tasks.write().await;

        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| PlannerError::task_not_found(id))?;
        task.apply_update(input);

        tracing::info!(task_id = %id, "Updated task");
        Ok(task.clone())
    }

    async fn delete(&self, id: i32) -> PlannerResult<bool> {
        let mut tasks = self.tasks.write().await;

        if tasks.remove(&id).is_some() {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete_by_project(&self, project_id: i32) -> PlannerResult<u64> {
        let mut tasks = self.tasks.write().await;

        let before = tasks.len();
        tasks.retain(|_, t| t.project_id != project_id);
        Ok((before - tasks.len()) as u64)
    }

    async fn unassign_user(&self, user_id: i32) -> PlannerResult<u64> {
        let mut tasks = self.tasks.write().await;

        let mut changed = 0;
        for task in tasks.values_mut() {
            if task.assignee_id == Some(user_id) {
                task.assignee_id = None;
                changed += 1;
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::models::{TaskPriority, TaskStatus};

    fn new_task(project_id: i32, assignee_id: Option<i32>) -> CreateTask {
        CreateTask {
            title: "Write docs".to_string(),
            description: None,
            due_date: None,
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            assignee_id,
            project_id,
        }
    }

    #[tokio::test]
    async fn test_list_by_project_filters() {
        let repo = InMemoryTaskRepository::new();
        repo.create(new_task(1, None)).await.unwrap();
        repo.create(new_task(2, None)).await.unwrap();
        repo.create(new_task(1, None)).await.unwrap();

        let ids: Vec<i32> = repo
            .list_by_project(1)
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(repo.list_by_project(9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_project_leaves_other_projects() {
        let repo = InMemoryTaskRepository::new();
        repo.create(new_task(1, None)).await.unwrap();
        repo.create(new_task(1, None)).await.unwrap();
        let other = repo.create(new_task(2, None)).await.unwrap();

        assert_eq!(repo.delete_by_project(1).await.unwrap(), 2);

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining, vec![other]);
    }

    #[tokio::test]
    async fn test_unassign_user_touches_only_that_user() {
        let repo = InMemoryTaskRepository::new();
        let mine = repo.create(new_task(1, Some(7))).await.unwrap();
        let theirs = repo.create(new_task(1, Some(8))).await.unwrap();

        assert_eq!(repo.unassign_user(7).await.unwrap(), 1);

        let mine = repo.get_by_id(mine.id).await.unwrap().unwrap();
        let theirs = repo.get_by_id(theirs.id).await.unwrap().unwrap();
        assert!(mine.assignee_id.is_none());
        assert_eq!(theirs.assignee_id, Some(8));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(new_task(1, None)).await.unwrap();

        assert!(repo.delete(task.id).await.unwrap());
        assert!(!repo.delete(task.id).await.unwrap());
    }
}
