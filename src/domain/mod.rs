//! Domain layer: the query-to-chart pipeline.
//!
//! Nothing here touches the database or HTTP; the repository trait describes
//! what the infrastructure layer must provide.
//!
//! # Modules
//!
//! - [`event`] - Event log row and event types
//! - [`query`] - Aggregation query definitions and their SQL
//! - [`aggregation`] - Result tables returned by queries
//! - [`chart`] - Chart specifications bound to results
//! - [`view`] - Router and static view catalog
//! - [`page`] - Composed page payload
//! - [`repositories`] - Data access trait definitions
//!
//! # Request Flow
//!
//! 1. [`view::ViewId::from_path`] routes the request path
//! 2. [`view::ViewCatalog`] yields the view's panels
//! 3. [`repositories::EventRepository::run_queries`] returns one
//!    [`aggregation::AggregationResult`] per panel
//! 4. [`chart::ChartShape::build`] turns each result into a [`chart::ChartSpec`]
//! 5. The charts are assembled into a [`page::Page`]

pub mod aggregation;
pub mod chart;
pub mod event;
pub mod page;
pub mod query;
pub mod repositories;
pub mod view;
