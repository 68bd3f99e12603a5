use std::path::PathBuf;

use crate::client::models::api::{MarketplaceResults, ProductInfo};
use crate::client::services::image_intake::ImagePayload;

/// Every event the application reacts to. Remote settlements carry the
/// sequence stamp of the flow that issued them so stale responses can be
/// discarded.
#[derive(Debug, Clone)]
pub enum Message {
    // Image intake
    FileHovered,
    FileHoverLeft,
    FileDropped(PathBuf),
    BrowseImage,
    ImagePicked(Option<PathBuf>),
    ImageRead {
        seq: u64,
        result: Result<ImagePayload, String>,
    },
    // Remote flow settlements
    UploadFinished {
        seq: u64,
        /// (original file name, server-assigned filename)
        result: Result<(String, String), String>,
    },
    SearchFinished {
        seq: u64,
        result: Result<(MarketplaceResults, Option<ProductInfo>), String>,
    },
    // UI actions
    RemoveImage,
    DismissError,
    CopySearchUrl(String),
}
