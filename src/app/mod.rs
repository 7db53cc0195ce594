pub mod page;
pub mod session;

pub use page::Page;
pub use session::Session;
