mod common;

use common::TestApp;
use tag_api::{errors::ServiceError, services::tags::TagRequest};

#[tokio::test]
async fn create_then_find_by_id_round_trips_the_name() {
    let app = TestApp::new().await;
    let service = app.state.services.tags.clone();

    let created = service
        .create(TagRequest {
            name: "Tag One".into(),
        })
        .await
        .expect("create tag");

    let fetched = service.find_by_id(created.id).await.expect("fetch tag");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Tag One");
}

#[tokio::test]
async fn invalid_name_never_reaches_the_store() {
    let app = TestApp::new().await;
    let service = app.state.services.tags.clone();

    let result = service.create(TagRequest { name: "abc".into() }).await;
    assert!(matches!(result, Err(ServiceError::ValidationError(_))));

    let tags = service.find_all().await.expect("list tags");
    assert!(tags.is_empty());
}

#[tokio::test]
async fn find_by_id_on_absent_row_is_not_found() {
    let app = TestApp::new().await;
    let service = app.state.services.tags.clone();

    let result = service.find_by_id(42).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn delete_distinguishes_absent_from_existing_rows() {
    let app = TestApp::new().await;
    let service = app.state.services.tags.clone();

    let result = service.delete(42).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));

    let created = service
        .create(TagRequest {
            name: "Short lived".into(),
        })
        .await
        .expect("create tag");

    service.delete(created.id).await.expect("delete tag");

    let result = service.find_by_id(created.id).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn update_validates_before_checking_existence() {
    let app = TestApp::new().await;
    let service = app.state.services.tags.clone();

    // Invalid name on an id that does not exist still fails validation
    let result = service.update(999, TagRequest { name: "x".into() }).await;
    assert!(matches!(result, Err(ServiceError::ValidationError(_))));

    // A valid name on the same absent id fails the existence check
    let result = service
        .update(
            999,
            TagRequest {
                name: "Valid Name".into(),
            },
        )
        .await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn update_overwrites_the_name_in_place() {
    let app = TestApp::new().await;
    let service = app.state.services.tags.clone();

    let created = service
        .create(TagRequest {
            name: "Before rename".into(),
        })
        .await
        .expect("create tag");

    service
        .update(
            created.id,
            TagRequest {
                name: "After rename".into(),
            },
        )
        .await
        .expect("update tag");

    let fetched = service.find_by_id(created.id).await.expect("fetch tag");
    assert_eq!(fetched.name, "After rename");

    // The id is stable across updates
    let tags = service.find_all().await.expect("list tags");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].id, created.id);
}
