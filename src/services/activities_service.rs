use tracing::info;

use crate::database::activities_repo::{self, ActivityStore};
use crate::error::DirectoryError;
use crate::models::ActivityDirectory;

pub async fn list_activities(store: &ActivityStore) -> ActivityDirectory {
    activities_repo::list_activities(store).await
}

/// Adds `email` to the roster. Capacity is not checked.
pub async fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    match activities_repo::insert_participant(store, activity_name, email).await {
        None => Err(DirectoryError::ActivityNotFound {
            activity: activity_name.to_string(),
        }),
        Some(0) => Err(DirectoryError::AlreadySignedUp {
            activity: activity_name.to_string(),
            email: email.to_string(),
        }),
        Some(_) => {
            info!(activity = %activity_name, email = %email, "participant signed up");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
    }
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    match activities_repo::delete_participant(store, activity_name, email).await {
        None => Err(DirectoryError::ActivityNotFound {
            activity: activity_name.to_string(),
        }),
        Some(0) => Err(DirectoryError::NotRegistered {
            activity: activity_name.to_string(),
            email: email.to_string(),
        }),
        Some(_) => {
            info!(activity = %activity_name, email = %email, "participant unregistered");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::default_activities;

    fn chess_count(directory: &ActivityDirectory) -> usize {
        directory.get("Chess Club").unwrap().participants.len()
    }

    #[tokio::test]
    async fn chess_club_walkthrough() {
        let store = ActivityStore::new(default_activities());
        assert_eq!(chess_count(&list_activities(&store).await), 2);

        let msg = sign_up(&store, "Chess Club", "alice@x").await.unwrap();
        assert_eq!(msg, "Signed up alice@x for Chess Club");
        assert_eq!(chess_count(&list_activities(&store).await), 3);

        let err = sign_up(&store, "Chess Club", "alice@x").await.unwrap_err();
        assert!(err.to_string().contains("already signed up"));
        assert_eq!(err.activity(), "Chess Club");
        assert_eq!(err.email(), Some("alice@x"));
        assert_eq!(chess_count(&list_activities(&store).await), 3);

        let msg = unregister(&store, "Chess Club", "alice@x").await.unwrap();
        assert_eq!(msg, "Unregistered alice@x from Chess Club");
        assert_eq!(chess_count(&list_activities(&store).await), 2);

        let err = unregister(&store, "Chess Club", "alice@x").await.unwrap_err();
        assert!(err.to_string().contains("not registered"));
    }

    #[tokio::test]
    async fn unknown_activity_mutates_nothing() {
        let store = ActivityStore::new(default_activities());
        let before = list_activities(&store).await;

        let err = sign_up(&store, "Underwater Basket Weaving", "a@x")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        let err = unregister(&store, "Underwater Basket Weaving", "a@x")
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(list_activities(&store).await, before);
    }

    #[tokio::test]
    async fn emails_compare_exactly() {
        let store = ActivityStore::new(default_activities());
        sign_up(&store, "Chess Club", "Michael@mergington.edu")
            .await
            .unwrap();
        assert_eq!(chess_count(&list_activities(&store).await), 3);
    }
}
