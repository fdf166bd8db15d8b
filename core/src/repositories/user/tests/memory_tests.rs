use crate::domain::entities::user::User;
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

#[tokio::test]
async fn test_find_registered_user() {
    let repository = InMemoryUserRepository::from_users(vec![
        User::new("user123", "+919999999999"),
        User::new("admin", "+14155550100"),
    ]);

    let user = repository.find_by_phone("+919999999999").await.unwrap();
    assert_eq!(user, Some(User::new("user123", "+919999999999")));
    assert_eq!(repository.len(), 2);
}

#[tokio::test]
async fn test_unknown_phone_is_none() {
    let repository = InMemoryUserRepository::new();
    assert!(repository.is_empty());
    assert_eq!(repository.find_by_phone("+919999999999").await.unwrap(), None);
}

#[tokio::test]
async fn test_later_entry_wins_for_same_phone() {
    let repository = InMemoryUserRepository::from_users(vec![
        User::new("old", "+919999999999"),
        User::new("new", "+919999999999"),
    ]);

    assert_eq!(repository.len(), 1);
    let user = repository.find_by_phone("+919999999999").await.unwrap().unwrap();
    assert_eq!(user.id, "new");
}

#[tokio::test]
async fn test_repeated_lookups_do_not_grow_state() {
    let repository =
        InMemoryUserRepository::from_users(vec![User::new("user123", "+919999999999")]);
    for _ in 0..1000 {
        repository.find_by_phone("+918888888888").await.unwrap();
    }
    assert_eq!(repository.len(), 1);
}
