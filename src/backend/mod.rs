mod hayro;
mod loader;
mod traits;

pub use hayro::PdfDoc;
pub use loader::open_document;
pub(crate) use loader::spawn_loader_task;
pub use traits::{PdfBackend, RgbaFrame};
