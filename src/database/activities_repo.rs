use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::ActivityDirectory;

/// In-memory activity directory shared by all handlers.
///
/// Cloning is cheap and every clone sees the same directory. Each command
/// holds the write lock for its whole check-then-modify step.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityDirectory>>,
}

impl ActivityStore {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }
}

pub async fn list_activities(store: &ActivityStore) -> ActivityDirectory {
    store.inner.read().await.clone()
}

pub async fn count_activities(store: &ActivityStore) -> usize {
    store.inner.read().await.len()
}

/// Appends `email` to the roster. Returns `None` for an unknown activity,
/// otherwise the number of roster rows added (0 when already present).
pub async fn insert_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Option<u64> {
    let mut directory = store.inner.write().await;
    let activity = directory.get_mut(activity_name)?;
    if activity.has_participant(email) {
        return Some(0);
    }
    activity.participants.push(email.to_string());
    Some(1)
}

/// Removes `email` from the roster. Returns `None` for an unknown activity,
/// otherwise the number of roster rows removed.
pub async fn delete_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Option<u64> {
    let mut directory = store.inner.write().await;
    let activity = directory.get_mut(activity_name)?;
    let before = activity.participants.len();
    activity.participants.retain(|p| p != email);
    Some((before - activity.participants.len()) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    fn store() -> ActivityStore {
        ActivityStore::new(
            [(
                "Chess Club",
                Activity::new("Chess", "Fridays", 2).with_participants(&["m@x", "d@x"]),
            )]
            .into_iter()
            .collect(),
        )
    }

    #[tokio::test]
    async fn insert_appends_at_end_of_roster() {
        let store = store();
        assert_eq!(insert_participant(&store, "Chess Club", "a@x").await, Some(1));
        let listed = list_activities(&store).await;
        assert_eq!(
            listed.get("Chess Club").unwrap().participants,
            vec!["m@x", "d@x", "a@x"]
        );
    }

    #[tokio::test]
    async fn insert_ignores_capacity() {
        let store = store();
        insert_participant(&store, "Chess Club", "a@x").await;
        insert_participant(&store, "Chess Club", "b@x").await;
        let listed = list_activities(&store).await;
        let chess = listed.get("Chess Club").unwrap();
        assert_eq!(chess.participants.len(), 4);
        assert_eq!(chess.max_participants, 2);
    }

    #[tokio::test]
    async fn insert_existing_email_changes_nothing() {
        let store = store();
        assert_eq!(insert_participant(&store, "Chess Club", "m@x").await, Some(0));
        assert_eq!(
            list_activities(&store).await.get("Chess Club").unwrap().participants.len(),
            2
        );
    }

    #[tokio::test]
    async fn unknown_activity_returns_none() {
        let store = store();
        assert_eq!(insert_participant(&store, "Chess", "a@x").await, None);
        assert_eq!(delete_participant(&store, "chess club", "m@x").await, None);
    }

    #[tokio::test]
    async fn delete_reports_removed_rows() {
        let store = store();
        assert_eq!(delete_participant(&store, "Chess Club", "m@x").await, Some(1));
        assert_eq!(delete_participant(&store, "Chess Club", "m@x").await, Some(0));
        assert_eq!(
            list_activities(&store).await.get("Chess Club").unwrap().participants,
            vec!["d@x"]
        );
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = store();
        let other = store.clone();
        insert_participant(&other, "Chess Club", "a@x").await;
        assert!(list_activities(&store)
            .await
            .get("Chess Club")
            .unwrap()
            .has_participant("a@x"));
        assert_eq!(count_activities(&store).await, 1);
    }
}
