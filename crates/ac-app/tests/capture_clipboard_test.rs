mod common;

use std::sync::Arc;
use std::time::Duration;

use ac_app::usecases::capture_clipboard::{CaptureClipboard, CAPTURE_ATTEMPTS};
use ac_core::clipboard::{ContentType, ImagePayload, IMAGE_CONTENT_MARKER};
use ac_core::ports::ClipboardAccessError;
use common::{png_bytes, ManualClock, MockClipboard, T0_MS};

fn capture_with(clipboard: MockClipboard) -> CaptureClipboard {
    CaptureClipboard::new(Arc::new(clipboard), Arc::new(ManualClock::at(T0_MS)))
}

#[tokio::test]
async fn text_is_preferred_over_image() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_text()
        .returning(|| Ok(Some("hello".to_string())));
    clipboard.expect_has_image().times(0);

    let item = capture_with(clipboard).execute().await.unwrap();

    assert_eq!(item.content_type, ContentType::Text);
    assert_eq!(item.content, "hello");
    assert!(!item.is_code);
    assert_eq!(item.timestamp.timestamp_millis(), T0_MS);
}

#[tokio::test]
async fn code_heuristic_is_applied() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_text()
        .returning(|| Ok(Some("  import os\n".to_string())));

    let item = capture_with(clipboard).execute().await.unwrap();

    assert!(item.is_code);
    assert_eq!(item.content, "  import os\n");
}

#[tokio::test]
async fn whitespace_text_falls_through_to_image() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_text()
        .returning(|| Ok(Some(" \n\t".to_string())));
    clipboard.expect_has_image().returning(|| Ok(true));

    let item = capture_with(clipboard).execute().await.unwrap();

    assert_eq!(item.content_type, ContentType::Image);
    assert_eq!(item.content, IMAGE_CONTENT_MARKER);
}

#[tokio::test]
async fn empty_clipboard_captures_nothing() {
    let mut clipboard = MockClipboard::new();
    clipboard.expect_read_text().returning(|| Ok(None));
    clipboard.expect_has_image().returning(|| Ok(false));

    assert!(capture_with(clipboard).execute().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn lock_contention_is_retried_with_backoff() {
    let mut clipboard = MockClipboard::new();
    let mut calls = 0;
    clipboard
        .expect_read_text()
        .times(CAPTURE_ATTEMPTS as usize)
        .returning(move || {
            calls += 1;
            if calls < CAPTURE_ATTEMPTS {
                Err(ClipboardAccessError::Locked)
            } else {
                Ok(Some("finally".to_string()))
            }
        });

    let start = tokio::time::Instant::now();
    let item = capture_with(clipboard).execute().await.unwrap();

    assert_eq!(item.content, "finally");
    let waited = start.elapsed();
    assert!(waited >= Duration::from_millis(200), "waited {waited:?}");
    assert!(waited < Duration::from_millis(250), "waited {waited:?}");
}

#[tokio::test(start_paused = true)]
async fn persistent_lock_gives_up_silently() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_text()
        .times(CAPTURE_ATTEMPTS as usize)
        .returning(|| Err(ClipboardAccessError::Locked));

    assert!(capture_with(clipboard).execute().await.is_none());
}

#[tokio::test]
async fn non_transient_error_aborts_without_retry() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_text()
        .times(1)
        .returning(|| Err(ClipboardAccessError::Unavailable("no display".into())));

    assert!(capture_with(clipboard).execute().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn lock_while_probing_image_is_retried_too() {
    let mut clipboard = MockClipboard::new();
    clipboard.expect_read_text().times(2).returning(|| Ok(None));
    let mut calls = 0;
    clipboard.expect_has_image().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Err(ClipboardAccessError::Locked)
        } else {
            Ok(true)
        }
    });

    let item = capture_with(clipboard).execute().await.unwrap();
    assert_eq!(item.content_type, ContentType::Image);
}

#[tokio::test]
async fn timestamps_strictly_increase_with_a_frozen_clock() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_text()
        .returning(|| Ok(Some("same".to_string())));
    let capture = capture_with(clipboard);

    let a = capture.execute().await.unwrap();
    let b = capture.execute().await.unwrap();
    let c = capture.execute().await.unwrap();

    assert!(a.timestamp < b.timestamp);
    assert!(b.timestamp < c.timestamp);
    assert_ne!(a.id, b.id);
}

#[tokio::test(start_paused = true)]
async fn image_payload_read_waits_out_a_lock() {
    let mut clipboard = MockClipboard::new();
    let mut calls = 0;
    clipboard.expect_read_image().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Err(ClipboardAccessError::Locked)
        } else {
            Ok(Some(ImagePayload::png(png_bytes())))
        }
    });

    let start = tokio::time::Instant::now();
    let payload = capture_with(clipboard).read_image_payload().await.unwrap();

    assert_eq!(payload.data(), png_bytes().as_slice());
    assert!(start.elapsed() >= Duration::from_millis(50));
}

#[tokio::test(start_paused = true)]
async fn image_payload_read_gives_up_after_all_attempts() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_read_image()
        .times(CAPTURE_ATTEMPTS as usize)
        .returning(|| Err(ClipboardAccessError::Locked));

    assert!(capture_with(clipboard).read_image_payload().await.is_none());
}
