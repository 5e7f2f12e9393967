//! SoJSON client: the HTTP exchange with the JSON-processing service and the
//! file IO behind downloads.
mod client;
mod filename;
mod handle;
mod persist;
mod settings;
mod types;
mod wire;

pub use client::{ReqwestClient, RequestClient};
pub use filename::{download_filename, is_download_filename};
pub use handle::ClientHandle;
pub use persist::{ensure_output_dir, save_download, write_atomically, PersistError};
pub use settings::{ClientSettings, DEFAULT_BASE_URL};
pub use types::{ClientError, ClientEvent, FailureKind};
pub use wire::{interpret, ApiRequest, ApiResponse};
