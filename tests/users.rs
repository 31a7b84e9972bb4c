mod common;

use common::seeded_pool;
use lightbnb::db::users;
use lightbnb::models::NewUser;
use lightbnb::AppError;

#[tokio::test]
async fn find_by_email_returns_matching_user() {
    let pool = seeded_pool().await;

    let user = users::find_by_email(&pool, "sue@example.com")
        .await
        .unwrap()
        .expect("user exists");

    assert_eq!(user.id, 2);
    assert_eq!(user.name, "Sue Luna");
}

#[tokio::test]
async fn unknown_user_is_none() {
    let pool = seeded_pool().await;

    assert!(users::find_by_email(&pool, "nobody@example.com")
        .await
        .unwrap()
        .is_none());
    assert!(users::find_by_id(&pool, 42).await.unwrap().is_none());
}

#[tokio::test]
async fn find_by_id_returns_matching_user() {
    let pool = seeded_pool().await;

    let user = users::find_by_id(&pool, 3).await.unwrap().expect("user exists");

    assert_eq!(user.email, "eva@example.com");
}

#[tokio::test]
async fn create_user_returns_stored_row() {
    let pool = seeded_pool().await;
    let new_user = NewUser {
        name: "Kim Park".to_string(),
        email: "kim@example.com".to_string(),
        password: "hashed-password".to_string(),
    };

    let created = users::create_user(&pool, &new_user).await.unwrap();
    assert_eq!(created.id, 4);
    assert_eq!(created.name, "Kim Park");

    let found = users::find_by_email(&pool, "kim@example.com")
        .await
        .unwrap()
        .expect("user was stored");
    assert_eq!(found.id, created.id);
    assert_eq!(found.password, "hashed-password");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let pool = seeded_pool().await;
    let new_user = NewUser {
        name: "Devin Again".to_string(),
        email: "devin@example.com".to_string(),
        password: "hashed-password".to_string(),
    };

    let result = users::create_user(&pool, &new_user).await;

    assert!(matches!(result, Err(AppError::Conflict(_))), "{:?}", result);
}

#[tokio::test]
async fn password_is_not_serialized() {
    let pool = seeded_pool().await;

    let user = users::find_by_id(&pool, 1).await.unwrap().expect("user exists");
    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["email"], "devin@example.com");
    assert!(json.get("password").is_none());
}
