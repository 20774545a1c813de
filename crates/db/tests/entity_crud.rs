//! Integration tests for the repository layer against a real database:
//! - Create/read/update/delete for every table
//! - Partial updates touch only resolved columns plus audit columns
//! - List filters and ordering
//! - Foreign key and unique constraint violations

use assert_matches::assert_matches;
use chrono::Utc;
use cms_core::category::{CreateCategory, UpdateCategory};
use cms_core::comment::{CreateComment, UpdateComment};
use cms_core::post::{CreatePost, UpdatePost};
use cms_core::user::{CreateUser, UpdateUser};
use cms_core::types::DbId;
use cms_db::models::category::Category;
use cms_db::models::post::Post;
use cms_db::models::user::User;
use cms_db::repositories::{CategoryRepo, CommentRepo, PostRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, username: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@shop.example"),
        password: "pw".to_string(),
        role: None,
    }
    .validate()
    .unwrap();
    UserRepo::create(pool, &input, "not-a-real-hash", None)
        .await
        .unwrap()
}

async fn seed_category(pool: &PgPool, name: &str, created_by: DbId) -> Category {
    let input = CreateCategory {
        name: name.to_string(),
    }
    .validate()
    .unwrap();
    CategoryRepo::create(pool, &input, Some(created_by))
        .await
        .unwrap()
}

async fn seed_post(pool: &PgPool, user_id: DbId, category_id: DbId, status: &str) -> Post {
    let input = CreatePost {
        user_id,
        category_id,
        title: "Hi".to_string(),
        body: "World".to_string(),
        status: Some(status.to_string()),
        media_url: None,
    }
    .validate(Utc::now())
    .unwrap();
    PostRepo::create(pool, &input, Some(user_id)).await.unwrap()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_user_without_creator_references_itself(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    assert_eq!(user.created_by, Some(user.user_id));
    assert_eq!(user.updated_by, Some(user.user_id));
    assert_eq!(user.role, "author");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_with_creator_keeps_creator(pool: PgPool) {
    let admin = seed_user(&pool, "admin").await;
    let input = CreateUser {
        username: "bob".into(),
        email: "bob@shop.example".into(),
        password: "pw".into(),
        role: Some("admin".into()),
    }
    .validate()
    .unwrap();

    let bob = UserRepo::create(&pool, &input, "hash", Some(admin.user_id))
        .await
        .unwrap();
    assert_eq!(bob.created_by, Some(admin.user_id));
    assert_eq!(bob.updated_by, Some(admin.user_id));
    assert_eq!(bob.role, "admin");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_is_rejected_without_partial_row(pool: PgPool) {
    seed_user(&pool, "jane").await;
    let input = CreateUser {
        username: "jane2".into(),
        email: "jane@shop.example".into(),
        password: "pw".into(),
        role: None,
    }
    .validate()
    .unwrap();

    let err = UserRepo::create(&pool, &input, "hash", None).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"));
    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_update_applies_only_supplied_columns(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    let set = UpdateUser {
        role: Some("admin".into()),
        ..Default::default()
    }
    .resolve(user.user_id, None, Utc::now())
    .unwrap();

    let updated = UserRepo::update(&pool, user.user_id, set)
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(updated.role, "admin");
    assert_eq!(updated.username, "jane");
    assert_eq!(updated.email, "jane@shop.example");
    assert_eq!(updated.updated_by, Some(user.user_id));
    assert!(updated.updated_at >= user.updated_at);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_category_update_missing_row_returns_none(pool: PgPool) {
    let set = UpdateCategory {
        name: Some("Shoes".into()),
    }
    .resolve(Some(1), Utc::now())
    .unwrap();
    let result = CategoryRepo::update(&pool, 999_999, set).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_category_delete_then_find(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    let category = seed_category(&pool, "Shoes", user.user_id).await;

    assert!(CategoryRepo::delete(&pool, category.category_id).await.unwrap());
    assert!(!CategoryRepo::delete(&pool, category.category_id).await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, category.category_id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_publish_stamp_is_sticky(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    let category = seed_category(&pool, "News", user.user_id).await;
    let post = seed_post(&pool, user.user_id, category.category_id, "draft").await;
    assert!(post.published_at.is_none());

    let before = Utc::now();
    let set = UpdatePost {
        status: Some("published".into()),
        ..Default::default()
    }
    .resolve(Some(user.user_id), Utc::now())
    .unwrap();
    let published = PostRepo::update(&pool, post.post_id, set)
        .await
        .unwrap()
        .unwrap();
    let stamp = published.published_at.expect("published_at should be set");
    assert!(stamp >= before);

    let set = UpdatePost {
        status: Some("draft".into()),
        ..Default::default()
    }
    .resolve(Some(user.user_id), Utc::now())
    .unwrap();
    let reverted = PostRepo::update(&pool, post.post_id, set)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reverted.status, "draft");
    assert_eq!(reverted.published_at, Some(stamp));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_media_url_can_be_cleared(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    let category = seed_category(&pool, "News", user.user_id).await;
    let post = seed_post(&pool, user.user_id, category.category_id, "draft").await;

    let set = UpdatePost {
        media_url: Some("https://cdn.example/a.png".into()),
        ..Default::default()
    }
    .resolve(None, Utc::now())
    .unwrap();
    let post = PostRepo::update(&pool, post.post_id, set).await.unwrap().unwrap();
    assert_eq!(post.media_url.as_deref(), Some("https://cdn.example/a.png"));
    assert_eq!(post.updated_by, None);

    let set = UpdatePost {
        media_url: Some(String::new()),
        ..Default::default()
    }
    .resolve(Some(user.user_id), Utc::now())
    .unwrap();
    let post = PostRepo::update(&pool, post.post_id, set).await.unwrap().unwrap();
    assert_eq!(post.media_url, None);
    assert_eq!(post.title, "Hi");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_list_filters_by_status(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    let category = seed_category(&pool, "News", user.user_id).await;
    let first = seed_post(&pool, user.user_id, category.category_id, "published").await;
    seed_post(&pool, user.user_id, category.category_id, "draft").await;
    let third = seed_post(&pool, user.user_id, category.category_id, "published").await;

    let published = PostRepo::list(&pool, Some("published")).await.unwrap();
    let ids: Vec<DbId> = published.iter().map(|p| p.post_id).collect();
    assert_eq!(ids, vec![first.post_id, third.post_id]);

    assert_eq!(PostRepo::list(&pool, None).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_with_unknown_user_violates_foreign_key(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    let category = seed_category(&pool, "News", user.user_id).await;
    let input = CreatePost {
        user_id: 424_242,
        category_id: category.category_id,
        title: "Hi".into(),
        body: "World".into(),
        status: None,
        media_url: None,
    }
    .validate(Utc::now())
    .unwrap();

    let err = PostRepo::create(&pool, &input, None).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_referenced_category_cannot_be_deleted(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    let category = seed_category(&pool, "News", user.user_id).await;
    seed_post(&pool, user.user_id, category.category_id, "draft").await;

    let err = CategoryRepo::delete(&pool, category.category_id)
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"));
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_comment_list_filters_by_post(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    let category = seed_category(&pool, "News", user.user_id).await;
    let post_a = seed_post(&pool, user.user_id, category.category_id, "published").await;
    let post_b = seed_post(&pool, user.user_id, category.category_id, "published").await;

    let mut expected = Vec::new();
    for (post_id, body) in [
        (post_a.post_id, "first"),
        (post_b.post_id, "other"),
        (post_a.post_id, "second"),
    ] {
        let input = CreateComment {
            post_id,
            user_id: user.user_id,
            category_id: category.category_id,
            body: body.to_string(),
        }
        .validate()
        .unwrap();
        let comment = CommentRepo::create(&pool, &input, Some(user.user_id))
            .await
            .unwrap();
        if post_id == post_a.post_id {
            expected.push(comment.comment_id);
        }
    }

    let comments = CommentRepo::list(&pool, Some(post_a.post_id)).await.unwrap();
    let ids: Vec<DbId> = comments.iter().map(|c| c.comment_id).collect();
    assert_eq!(ids, expected);
    assert!(comments.iter().all(|c| c.post_id == post_a.post_id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_comment_update_and_delete(pool: PgPool) {
    let user = seed_user(&pool, "jane").await;
    let category = seed_category(&pool, "News", user.user_id).await;
    let post = seed_post(&pool, user.user_id, category.category_id, "published").await;
    let input = CreateComment {
        post_id: post.post_id,
        user_id: user.user_id,
        category_id: category.category_id,
        body: "  Nice  ".into(),
    }
    .validate()
    .unwrap();
    let comment = CommentRepo::create(&pool, &input, Some(user.user_id))
        .await
        .unwrap();
    assert_eq!(comment.body, "Nice");

    let set = UpdateComment {
        body: Some("Edited".into()),
        ..Default::default()
    }
    .resolve(Some(user.user_id), Utc::now())
    .unwrap();
    let edited = CommentRepo::update(&pool, comment.comment_id, set)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(edited.body, "Edited");
    assert_eq!(edited.category_id, category.category_id);

    assert!(CommentRepo::delete(&pool, comment.comment_id).await.unwrap());
    assert!(CommentRepo::find_by_id(&pool, comment.comment_id)
        .await
        .unwrap()
        .is_none());
}
