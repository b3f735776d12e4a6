use ac_core::clipboard::ImagePayload;
use ac_core::ports::ClipboardAccessError;
use clipboard_rs::{common::RustImage, Clipboard, ClipboardContext, ContentFormat, RustImageData};

type ClipboardRsResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub(crate) struct CommonClipboardImpl;

impl CommonClipboardImpl {
    pub fn read_text(ctx: &ClipboardContext) -> Result<Option<String>, ClipboardAccessError> {
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        map_clipboard_err(ctx.get_text()).map(Some)
    }

    pub fn has_image(ctx: &ClipboardContext) -> Result<bool, ClipboardAccessError> {
        Ok(ctx.has(ContentFormat::Image))
    }

    pub fn read_image(ctx: &ClipboardContext) -> Result<Option<ImagePayload>, ClipboardAccessError> {
        if !ctx.has(ContentFormat::Image) {
            return Ok(None);
        }
        let image = map_clipboard_err(ctx.get_image())?;
        let png = map_clipboard_err(image.to_png())?;
        Ok(Some(ImagePayload::png(png.get_bytes().to_vec())))
    }

    pub fn write_text(ctx: &ClipboardContext, text: &str) -> Result<(), ClipboardAccessError> {
        map_clipboard_err(ctx.set_text(text.to_string()))
    }

    pub fn write_image(
        ctx: &ClipboardContext,
        image: &ImagePayload,
    ) -> Result<(), ClipboardAccessError> {
        let data = RustImageData::from_bytes(image.data())
            .map_err(|e| ClipboardAccessError::Unavailable(format!("decode image: {e}")))?;
        map_clipboard_err(ctx.set_image(data))
    }
}

pub(crate) fn map_clipboard_err<T>(result: ClipboardRsResult<T>) -> Result<T, ClipboardAccessError> {
    result.map_err(|e| classify(e.to_string()))
}

/// Another process holding the clipboard open is the one retryable failure.
pub(crate) fn classify(message: String) -> ClipboardAccessError {
    if clipboard_held_elsewhere() {
        ClipboardAccessError::Locked
    } else {
        ClipboardAccessError::Unavailable(message)
    }
}

#[cfg(target_os = "windows")]
fn clipboard_held_elsewhere() -> bool {
    use winapi::um::winuser::GetOpenClipboardWindow;
    unsafe { !GetOpenClipboardWindow().is_null() }
}

#[cfg(not(target_os = "windows"))]
fn clipboard_held_elsewhere() -> bool {
    false
}
