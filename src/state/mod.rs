pub mod session;

pub use session::{save_document, Session};
