use super::*;

/// Drives a future that must finish without touching the network.
fn ready<T>(future: impl Future<Output = T>) -> T {
    let mut future = std::pin::pin!(future);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    match future.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(value) => value,
        std::task::Poll::Pending => panic!("future should resolve without I/O"),
    }
}

fn complete_draft() -> BlogDraft {
    BlogDraft {
        title: "Hello".to_owned(),
        body: "Body text".to_owned(),
        category: "c1".to_owned(),
        status: crate::net::types::BlogStatus::Published,
        tags: vec!["t1".to_owned()],
        cover_image: Some(crate::net::types::ImageUpload {
            file_name: "cover.jpg".to_owned(),
            mime_type: "image/jpeg".to_owned(),
            bytes: vec![1, 2, 3],
        }),
    }
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn create_rejects_blank_title() {
    let mut draft = complete_draft();
    draft.title = "   ".to_owned();
    let err = validate_draft(&draft, true).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "title" }));
}

#[test]
fn create_rejects_blank_body() {
    let mut draft = complete_draft();
    draft.body = String::new();
    let err = validate_draft(&draft, true).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "body" }));
}

#[test]
fn create_requires_category() {
    let mut draft = complete_draft();
    draft.category = String::new();
    let err = validate_draft(&draft, true).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "category" }));
}

#[test]
fn create_requires_cover_image() {
    let mut draft = complete_draft();
    draft.cover_image = None;
    let err = validate_draft(&draft, true).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "coverImage" }));
}

#[test]
fn update_keeps_existing_category_and_cover() {
    let mut draft = complete_draft();
    draft.category = String::new();
    draft.cover_image = None;
    validate_draft(&draft, false).unwrap();
}

#[test]
fn complete_draft_passes_create_validation() {
    validate_draft(&complete_draft(), true).unwrap();
}

// =============================================================
// Endpoint argument checks
// =============================================================

#[test]
fn by_slug_rejects_empty_slug() {
    let err = ready(by_slug("")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "slug" }));
}

#[test]
fn by_id_rejects_empty_id() {
    let err = ready(by_id(" ")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "id" }));
}

#[test]
fn delete_rejects_empty_id() {
    let err = ready(delete("")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "id" }));
}

#[test]
fn toggle_like_rejects_empty_id() {
    let err = ready(toggle_like("")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "id" }));
}

#[test]
fn validation_precedes_any_dispatch() {
    // An invalid draft fails the same way on and off the browser.
    let mut draft = complete_draft();
    draft.title = String::new();
    let err = ready(create(&draft)).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "title" }));
}
