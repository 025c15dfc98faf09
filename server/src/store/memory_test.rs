use super::*;
use crate::model::{Template, User};
use time::OffsetDateTime;

fn template(title: &str, created_at: OffsetDateTime) -> Template {
    Template {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        description: String::new(),
        elements: Vec::new(),
        created_at,
        user_id: Uuid::new_v4(),
    }
}

fn record(username: &str) -> UserRecord {
    UserRecord {
        user: User {
            id: Uuid::new_v4(),
            email: format!("{username}@example.com"),
            username: username.to_owned(),
            full_name: username.to_owned(),
        },
        password_salt: "salt".into(),
        password_hash: "hash".into(),
    }
}

// =============================================================================
// users
// =============================================================================

#[tokio::test]
async fn put_user_is_retrievable_by_all_keys() {
    let store = MemoryStore::new();
    let rec = record("jane");
    store.put_user(rec.clone()).await.unwrap();

    assert!(store.user_by_id(rec.user.id).await.unwrap().is_some());
    assert!(store.user_by_email("jane@example.com").await.unwrap().is_some());
    assert!(store.user_by_username("jane").await.unwrap().is_some());
    assert!(store.user_by_username("janet").await.unwrap().is_none());
}

#[tokio::test]
async fn put_user_replaces_existing_record() {
    let store = MemoryStore::new();
    let mut rec = record("jane");
    store.put_user(rec.clone()).await.unwrap();

    rec.password_hash = "new-hash".into();
    store.put_user(rec.clone()).await.unwrap();

    let fetched = store.user_by_id(rec.user.id).await.unwrap().unwrap();
    assert_eq!(fetched.password_hash, "new-hash");
}

// =============================================================================
// templates
// =============================================================================

#[tokio::test]
async fn list_templates_orders_newest_first() {
    let store = MemoryStore::new();
    let base = OffsetDateTime::UNIX_EPOCH;
    let old = template("old", base);
    let new = template("new", base + time::Duration::days(1));
    store.put_template(old.clone()).await.unwrap();
    store.put_template(new.clone()).await.unwrap();

    let (data, total) = store.list_templates(0, 10).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(data[0].id, new.id);
    assert_eq!(data[1].id, old.id);
}

#[tokio::test]
async fn list_templates_respects_offset_and_limit() {
    let store = MemoryStore::new();
    let base = OffsetDateTime::UNIX_EPOCH;
    for i in 0..5 {
        store
            .put_template(template(&format!("t{i}"), base + time::Duration::hours(i)))
            .await
            .unwrap();
    }

    let (data, total) = store.list_templates(2, 2).await.unwrap();
    assert_eq!(total, 5);
    assert_eq!(data.len(), 2);
}

#[tokio::test]
async fn delete_template_reports_presence() {
    let store = MemoryStore::new();
    let t = template("t", OffsetDateTime::UNIX_EPOCH);
    store.put_template(t.clone()).await.unwrap();

    assert!(store.delete_template(t.id).await.unwrap());
    assert!(!store.delete_template(t.id).await.unwrap());
}

#[tokio::test]
async fn search_is_case_insensitive_over_title_and_description() {
    let store = MemoryStore::new();
    let mut a = template("Business Card", OffsetDateTime::UNIX_EPOCH);
    a.description = "modern layout".into();
    store.put_template(a).await.unwrap();
    store
        .put_template(template("Unrelated", OffsetDateTime::UNIX_EPOCH))
        .await
        .unwrap();

    let (by_title, _) = store.search_templates("bUsInEsS", 0, 10).await.unwrap();
    assert_eq!(by_title.len(), 1);
    let (by_desc, total) = store.search_templates("LAYOUT", 0, 10).await.unwrap();
    assert_eq!(by_desc.len(), 1);
    assert_eq!(total, 1);
}

// =============================================================================
// likes
// =============================================================================

#[tokio::test]
async fn insert_like_is_idempotent_and_reports_novelty() {
    let store = MemoryStore::new();
    let template_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    assert!(store.insert_like(template_id, user_id).await.unwrap());
    assert!(!store.insert_like(template_id, user_id).await.unwrap());
    assert_eq!(store.like_count(template_id).await.unwrap(), 1);
}

#[tokio::test]
async fn delete_like_reports_presence() {
    let store = MemoryStore::new();
    let template_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    assert!(!store.delete_like(template_id, user_id).await.unwrap());
    store.insert_like(template_id, user_id).await.unwrap();
    assert!(store.delete_like(template_id, user_id).await.unwrap());
    assert!(!store.has_liked(template_id, user_id).await.unwrap());
}

#[tokio::test]
async fn deleting_template_clears_likes_and_comments() {
    let store = MemoryStore::new();
    let t = template("t", OffsetDateTime::UNIX_EPOCH);
    store.put_template(t.clone()).await.unwrap();
    store.insert_like(t.id, Uuid::new_v4()).await.unwrap();
    store
        .add_comment(
            t.id,
            Comment {
                id: Uuid::new_v4(),
                content: "hi".into(),
                user_id: Uuid::new_v4(),
                username: "jane".into(),
                created_at: OffsetDateTime::UNIX_EPOCH,
            },
        )
        .await
        .unwrap();

    store.delete_template(t.id).await.unwrap();
    assert_eq!(store.like_count(t.id).await.unwrap(), 0);
    assert!(store.comments_for(t.id).await.unwrap().is_empty());
}

// =============================================================================
// sessions & images
// =============================================================================

#[tokio::test]
async fn session_lifecycle() {
    let store = MemoryStore::new();
    let session = Session {
        token: "tok".into(),
        user_id: Uuid::new_v4(),
        expires_at: OffsetDateTime::UNIX_EPOCH,
    };
    store.put_session(session.clone()).await.unwrap();
    assert!(store.session_by_token("tok").await.unwrap().is_some());

    store.delete_session("tok").await.unwrap();
    assert!(store.session_by_token("tok").await.unwrap().is_none());
}

#[tokio::test]
async fn image_round_trip() {
    let store = MemoryStore::new();
    let image = StoredImage { id: Uuid::new_v4(), content_type: "image/png".into(), bytes: vec![7; 32] };
    store.put_image(image.clone()).await.unwrap();

    let fetched = store.image_by_id(image.id).await.unwrap().unwrap();
    assert_eq!(fetched.bytes, image.bytes);
    assert!(store.image_by_id(Uuid::new_v4()).await.unwrap().is_none());
}
