//! In-memory integration tests for the task store contract.

use super::helpers::{seed, store, titles, user};
use rstest::rstest;
use taskdeck::{
    auth::domain::UserId,
    task::{
        adapters::memory::InMemoryTaskStore,
        domain::{OrderAssignment, OrderIndex, TaskId, TaskPatch, TaskStatus, TaskTitle},
        ports::{TaskStore, TaskStoreError},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_appends_with_owner_count(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let other = UserId::new();
    seed(&store, other, &["Elsewhere"]).await?;

    let created = seed(&store, owner, &["A", "B", "C"]).await?;

    let orders: Vec<u32> = created.iter().map(|task| task.order().value()).collect();
    eyre::ensure!(orders == vec![0, 1, 2], "unexpected orders {orders:?}");
    eyre::ensure!(
        created.iter().all(|task| task.status() == TaskStatus::Pending),
        "new tasks must be pending"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_is_owner_scoped_and_ordered(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let ada = user("ada@example.com")?;
    let grace = user("grace@example.com")?;
    seed(&store, ada.id(), &["A1", "A2"]).await?;
    seed(&store, grace.id(), &["G1"]).await?;

    let listed = store.list(ada.id()).await?;

    assert_eq!(titles(&listed), vec!["A1", "A2"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_breaks_order_ties_by_creation(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let mut created = seed(&store, owner, &["First", "Second", "Third"]).await?;
    for task in &created {
        store
            .update(owner, task.id(), TaskPatch::new().with_order(OrderIndex::FIRST))
            .await?;
    }
    created.sort_by_key(|task| (task.created_at(), task.id().into_inner()));

    let listed = store.list(owner).await?;

    let expected: Vec<TaskId> = created.iter().map(|task| task.id()).collect();
    let actual: Vec<TaskId> = listed.iter().map(|task| task.id()).collect();
    assert_eq!(actual, expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_foreign_task(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let created = seed(&store, owner, &["Mine"]).await?;
    let intruder = UserId::new();

    let result = store
        .update(
            intruder,
            created[0].id(),
            TaskPatch::new().with_title(TaskTitle::new("Stolen")?),
        )
        .await;

    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == created[0].id()));
    assert_eq!(titles(&store.list(owner).await?), vec!["Mine"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_inconsistent_lifecycle(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let created = seed(&store, owner, &["Mine"]).await?;
    let patch = TaskPatch {
        started_at: Some(Some(chrono::Utc::now())),
        ..TaskPatch::new()
    };

    let result = store.update(owner, created[0].id(), patch).await;

    assert!(matches!(result, Err(TaskStoreError::Persistence(_))));
    let listed = store.list(owner).await?;
    eyre::ensure!(listed[0].started_at().is_none(), "rejected patch was written");
    eyre::ensure!(listed[0].status() == TaskStatus::Pending);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_is_permanent_and_scoped(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let created = seed(&store, owner, &["A", "B"]).await?;

    let foreign = store.delete(UserId::new(), created[0].id()).await;
    assert!(matches!(foreign, Err(TaskStoreError::NotFound(_))));

    store.delete(owner, created[0].id()).await?;
    let again = store.delete(owner, created[0].id()).await;
    assert!(matches!(again, Err(TaskStoreError::NotFound(_))));
    assert_eq!(titles(&store.list(owner).await?), vec!["B"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_order_writes_every_assignment(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let created = seed(&store, owner, &["A", "B", "C"]).await?;
    let assignments = [
        OrderAssignment {
            task_id: created[2].id(),
            order: OrderIndex::new(0)?,
        },
        OrderAssignment {
            task_id: created[0].id(),
            order: OrderIndex::new(1)?,
        },
        OrderAssignment {
            task_id: created[1].id(),
            order: OrderIndex::new(2)?,
        },
    ];

    store.apply_order(owner, &assignments).await?;

    assert_eq!(titles(&store.list(owner).await?), vec!["C", "A", "B"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_order_is_all_or_nothing(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let created = seed(&store, owner, &["A", "B"]).await?;
    let foreign = seed(&store, UserId::new(), &["X"]).await?;
    let stranger = TaskId::new();

    for rogue in [foreign[0].id(), stranger] {
        let assignments = [
            OrderAssignment {
                task_id: created[1].id(),
                order: OrderIndex::new(0)?,
            },
            OrderAssignment {
                task_id: rogue,
                order: OrderIndex::new(1)?,
            },
            OrderAssignment {
                task_id: created[0].id(),
                order: OrderIndex::new(2)?,
            },
        ];

        let result = store.apply_order(owner, &assignments).await;

        assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == rogue));
        assert_eq!(titles(&store.list(owner).await?), vec!["A", "B"]);
    }
    Ok(())
}
