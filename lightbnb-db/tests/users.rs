//! User repository against a live database

mod common;

use common::TestDb;
use lightbnb_db::{DbError, NewUser, UserRepo};

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Eva Stanley".to_owned(),
        email: email.to_owned(),
        password: "password".to_owned(),
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn find_by_email_absent_is_none() {
    let db = TestDb::new().await;

    let found = UserRepo::new(&db.pool)
        .find_by_email("nobody@example.com")
        .await
        .expect("lookup should not fail");
    assert_eq!(found, None);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn find_by_email_returns_single_match() {
    let db = TestDb::new().await;
    let id = db.user("Eva Stanley", "sebastianguerra@ymail.com").await;
    db.user("Louisa Meyer", "jacksonrose@hotmail.com").await;

    let user = UserRepo::new(&db.pool)
        .find_by_email("sebastianguerra@ymail.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(user.id, id);
    assert_eq!(user.name, "Eva Stanley");

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn find_by_email_is_exact() {
    let db = TestDb::new().await;
    db.user("Eva Stanley", "sebastianguerra@ymail.com").await;

    let found = UserRepo::new(&db.pool)
        .find_by_email("SebastianGuerra@ymail.com")
        .await
        .unwrap();
    assert_eq!(found, None);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn find_by_id() {
    let db = TestDb::new().await;
    let id = db.user("Dominic Parks", "victoriablackwell@outlook.com").await;
    let repo = UserRepo::new(&db.pool);

    let user = repo.find_by_id(id).await.unwrap().expect("user should exist");
    assert_eq!(user.email, "victoriablackwell@outlook.com");

    assert_eq!(repo.find_by_id(id + 1000).await.unwrap(), None);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_returns_stored_row() {
    let db = TestDb::new().await;

    let created = UserRepo::new(&db.pool)
        .create(&new_user("allisonjackson@mail.com"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.email, "allisonjackson@mail.com");
    assert_eq!(created.password, "password");

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_email_is_typed_failure() {
    let db = TestDb::new().await;
    let repo = UserRepo::new(&db.pool);

    repo.create(&new_user("gdocircus@hello.com")).await.unwrap();
    let err = repo
        .create(&new_user("gdocircus@hello.com"))
        .await
        .unwrap_err();

    assert!(err.is_unique_violation(), "unexpected error: {err}");
    assert!(matches!(
        err,
        DbError::UniqueViolation { constraint: Some(ref name) } if name == "users_email_key"
    ));

    db.teardown().await;
}
