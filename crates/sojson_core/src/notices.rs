//! User-facing notice texts.

pub const INPUT_REQUIRED: &str = "Input required: enter the text to process";
pub const PROCESSED: &str = "Processed successfully";
pub const VALID_JSON: &str = "Valid JSON";
pub const INVALID_JSON: &str = "Invalid JSON";
pub const PROCESSING_FAILED: &str = "Processing failed";
pub const CLIPBOARD_UNAVAILABLE: &str = "Cannot access the clipboard, paste manually";
pub const NOTHING_TO_COPY: &str = "Nothing to copy";
pub const COPIED: &str = "Copied to clipboard";
pub const SELECTED_FOR_COPY: &str = "Clipboard unavailable, text shown for manual selection";
pub const COPY_FAILED: &str = "Copy failed, copy manually";
pub const NOTHING_TO_DOWNLOAD: &str = "Nothing to download";
pub const DOWNLOAD_FAILED: &str = "Download failed";
pub const SURFACE_WRITE_FAILED: &str = "Could not update the editor";
