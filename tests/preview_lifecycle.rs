use admin_ui_state::file_utils::load_file;
use admin_ui_state::{
    Confirmation, ConfirmationState, ImagePreview, ImagePreviewState, ObjectUrlRegistry,
};
use std::fs;

#[test]
fn pick_then_reset_restores_empty_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("product.png");
    fs::write(&path, b"\x89PNG\r\n\x1a\nrest-of-image").unwrap();

    let registry = ObjectUrlRegistry::new();
    let mut state = ImagePreviewState::new(registry.clone(), None);
    let file_a = load_file(&path).unwrap();

    state.handle_file_change(Some(file_a.clone()));
    assert_eq!(state.file(), Some(&file_a));
    let derived = state.preview().to_string();
    assert_eq!(registry.resolve(&derived), Some(file_a));

    state.reset();
    assert!(state.file().is_none());
    assert_eq!(state.preview(), "");
    assert!(!registry.is_live(&derived));
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn existing_image_survives_replace_and_reset() {
    let server_url = "https://cdn.example.com/products/17.jpg".to_string();
    let registry = ObjectUrlRegistry::new();
    let mut state = ImagePreviewState::new(registry.clone(), Some(server_url.clone()));
    let mut delete = ConfirmationState::new();

    delete.open(17_u64);
    assert!(delete.is_open());
    delete.close();

    state.handle_file_change(Some(admin_ui_state::BinaryFile::new(
        "new.jpg",
        "image/jpeg",
        vec![0xFF, 0xD8, 0xFF],
    )));
    assert_ne!(state.preview(), server_url);
    assert_eq!(registry.live_count(), 1);

    state.reset();
    assert_eq!(state.preview(), server_url);
    assert_eq!(registry.live_count(), 0);
    assert_eq!(delete.item(), None);
}
