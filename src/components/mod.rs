// Shared UI components

mod options;
mod preview;
mod upload_form;

pub use options::PaintingOptions;
pub use preview::PaintingPreview;
pub use upload_form::UploadForm;
