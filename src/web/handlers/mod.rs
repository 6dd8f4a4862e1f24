//! HTML template rendering handlers for the dashboard.

mod page;

pub use page::{GraphPanel, NavLink, PageTemplate, page_handler};
