use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

#[tokio::test]
async fn test_find_by_phone() {
    let repo = MockUserRepository::new().with_user(User::new("user123", "+919999999999"));

    let found = repo.find_by_phone("+919999999999").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some("user123".to_string()));

    let missing = repo.find_by_phone("+918888888888").await.unwrap();
    assert!(missing.is_none());

    assert_eq!(repo.lookups(), vec!["+919999999999", "+918888888888"]);
}

#[tokio::test]
async fn test_failing_repository() {
    let repo = MockUserRepository::failing();
    let result = repo.find_by_phone("+919999999999").await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
    assert_eq!(repo.lookups().len(), 1);
}

#[tokio::test]
async fn test_clones_share_state() {
    let repo = MockUserRepository::new();
    let handle = repo.clone();
    handle.insert(User::new("user456", "+14155552671"));

    assert!(repo.find_by_phone("+14155552671").await.unwrap().is_some());
    assert_eq!(handle.lookups().len(), 1);
}
