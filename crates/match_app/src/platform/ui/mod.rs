pub mod bindings;
pub mod console;
pub mod page;
pub mod render;

pub use bindings::{ElementId, PageBindings};
pub use page::{Page, PageCommand};

/// The page the controller is bound to.
pub const PAGE_TEMPLATE: &str = include_str!("../../../assets/page.html");
