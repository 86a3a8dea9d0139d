pub mod header;
pub mod layout;
pub mod modal;
pub mod page;

pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorAlert, LoadingIndicator, Page};
