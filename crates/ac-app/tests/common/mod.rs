//! Test doubles shared by the ac-app integration tests.
#![allow(dead_code)]

use std::io::Cursor;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use ac_app::AppDeps;
use ac_core::clipboard::ImagePayload;
use ac_core::ports::{ClipboardAccessError, ClockPort, SystemClipboardPort};
use ac_infra::{FileHistoryStore, FileSettingsRepository};
use mockall::mock;
use tempfile::TempDir;

mock! {
    pub Clipboard {}

    impl SystemClipboardPort for Clipboard {
        fn read_text(&self) -> Result<Option<String>, ClipboardAccessError>;
        fn has_image(&self) -> Result<bool, ClipboardAccessError>;
        fn read_image(&self) -> Result<Option<ImagePayload>, ClipboardAccessError>;
        fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError>;
        fn write_image(&self, image: &ImagePayload) -> Result<(), ClipboardAccessError>;
    }
}

/// In-memory clipboard that behaves like a real one: setting text drops
/// the image and the other way round.
#[derive(Default)]
pub struct FakeClipboard {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    text: Option<String>,
    image: Option<ImagePayload>,
    written_text: Vec<String>,
    written_images: Vec<ImagePayload>,
}

impl FakeClipboard {
    pub fn set_text(&self, text: &str) {
        let mut state = self.state.lock().unwrap();
        state.text = Some(text.to_string());
        state.image = None;
    }

    pub fn set_image(&self, image: ImagePayload) {
        let mut state = self.state.lock().unwrap();
        state.text = None;
        state.image = Some(image);
    }

    pub fn written_text(&self) -> Vec<String> {
        self.state.lock().unwrap().written_text.clone()
    }

    pub fn written_images(&self) -> Vec<ImagePayload> {
        self.state.lock().unwrap().written_images.clone()
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardAccessError> {
        Ok(self.state.lock().unwrap().text.clone())
    }

    fn has_image(&self) -> Result<bool, ClipboardAccessError> {
        Ok(self.state.lock().unwrap().image.is_some())
    }

    fn read_image(&self) -> Result<Option<ImagePayload>, ClipboardAccessError> {
        Ok(self.state.lock().unwrap().image.clone())
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        self.state.lock().unwrap().written_text.push(text.to_string());
        Ok(())
    }

    fn write_image(&self, image: &ImagePayload) -> Result<(), ClipboardAccessError> {
        self.state.lock().unwrap().written_images.push(image.clone());
        Ok(())
    }
}

/// Clock that only moves when told to.
pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn at(ms: i64) -> Self {
        Self(AtomicI64::new(ms))
    }

    pub fn advance(&self, ms: i64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl ClockPort for ManualClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub const T0_MS: i64 = 1_700_000_000_000;

pub struct Harness {
    pub dir: TempDir,
    pub clipboard: Arc<FakeClipboard>,
    pub history: Arc<FileHistoryStore>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let history = Arc::new(FileHistoryStore::new(
            dir.path().join("history_v2.json"),
            dir.path().join("images"),
        ));
        Self {
            clipboard: Arc::new(FakeClipboard::default()),
            history,
            clock: Arc::new(ManualClock::at(T0_MS)),
            dir,
        }
    }

    pub fn deps(&self) -> AppDeps {
        AppDeps {
            clipboard: self.clipboard.clone(),
            history: self.history.clone(),
            settings: Arc::new(FileSettingsRepository::new(
                self.dir.path().join("settings.json"),
            )),
            clock: self.clock.clone(),
        }
    }
}

pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::new(2, 2);
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}
