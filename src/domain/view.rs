//! Navigable views and the static catalog describing them.
//!
//! [`ViewId::from_path`] is the router: it never fails, unknown paths land on
//! [`ViewId::Home`]. [`ViewCatalog`] pairs each view with the queries it runs
//! and the chart drawn from each result.

use serde::Serialize;

use crate::domain::aggregation::Column;
use crate::domain::chart::ChartShape;
use crate::domain::event::EventType;
use crate::domain::query::{GroupKey, QueryDefinition};

/// Identifier of a dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Home,
    Product,
    Event,
    Category,
}

impl ViewId {
    /// Views reachable from the navigation bar, in display order.
    pub const NAVIGABLE: [ViewId; 3] = [ViewId::Product, ViewId::Event, ViewId::Category];

    /// Maps a request path to a view.
    ///
    /// Leading and trailing slashes are ignored. The `tipo-N` paths are kept
    /// for links into the first version of the dashboard.
    pub fn from_path(path: &str) -> Self {
        match path.trim().trim_matches('/') {
            "product" | "tipo-1" => Self::Product,
            "event" | "tipo-2" => Self::Event,
            "category" | "tipo-3" => Self::Category,
            _ => Self::Home,
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Product => "product",
            Self::Event => "event",
            Self::Category => "category",
        }
    }

    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Product => "/product",
            Self::Event => "/event",
            Self::Category => "/category",
        }
    }

    /// Text of the navigation link pointing at this view.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Product => "Quantity by product",
            Self::Event => "Quantity by event",
            Self::Category => "Quantity by category",
        }
    }
}

/// One query and the chart drawn from its result.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub query: QueryDefinition,
    pub shape: ChartShape,
    pub title: String,
}

impl Panel {
    pub fn new(query: QueryDefinition, shape: ChartShape, title: impl Into<String>) -> Self {
        Self {
            query,
            shape,
            title: title.into(),
        }
    }
}

/// A navigable view: its heading and ordered panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewDefinition {
    pub id: ViewId,
    pub heading: &'static str,
    pub panels: Vec<Panel>,
}

impl ViewDefinition {
    pub fn route(&self) -> &'static str {
        self.id.route()
    }

    pub fn queries(&self) -> Vec<QueryDefinition> {
        self.panels.iter().map(|p| p.query).collect()
    }
}

/// The fixed set of view definitions, built once at startup.
#[derive(Debug, Clone)]
pub struct ViewCatalog {
    views: Vec<ViewDefinition>,
}

impl ViewCatalog {
    /// The product, event and category breakdowns.
    pub fn standard() -> Self {
        let product = ViewDefinition {
            id: ViewId::Product,
            heading: "Products",
            panels: vec![
                Panel::new(
                    QueryDefinition::top_by_revenue(GroupKey::ProductId),
                    ChartShape::Pie,
                    "Units sold per product (top 5 by revenue)",
                ),
                Panel::new(
                    QueryDefinition::top_by_revenue(GroupKey::ProductId),
                    ChartShape::Bar {
                        value: Column::Total,
                        color: Some(Column::Count),
                    },
                    "Revenue per product (top 5)",
                ),
            ],
        };

        let mut event_panels = vec![Panel::new(
            QueryDefinition::EventMix,
            ChartShape::Pie,
            "Products per event type",
        )];
        event_panels.extend(EventType::ALL.into_iter().map(|kind| {
            Panel::new(
                QueryDefinition::EventHourly(kind),
                ChartShape::Line,
                format!("Hourly {kind} events"),
            )
        }));

        let event = ViewDefinition {
            id: ViewId::Event,
            heading: "Events",
            panels: event_panels,
        };

        let category = ViewDefinition {
            id: ViewId::Category,
            heading: "Categories",
            panels: vec![Panel::new(
                QueryDefinition::top_by_revenue(GroupKey::CategoryId),
                ChartShape::Pie,
                "Products per category (top 5 by revenue)",
            )],
        };

        Self {
            views: vec![product, event, category],
        }
    }

    /// Returns the definition for a view; `None` for [`ViewId::Home`].
    pub fn get(&self, id: ViewId) -> Option<&ViewDefinition> {
        self.views.iter().find(|v| v.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewDefinition> {
        self.views.iter()
    }
}

impl Default for ViewCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_known_views() {
        assert_eq!(ViewId::from_path("/product"), ViewId::Product);
        assert_eq!(ViewId::from_path("/event"), ViewId::Event);
        assert_eq!(ViewId::from_path("/category"), ViewId::Category);
        assert_eq!(ViewId::from_path("category"), ViewId::Category);
        assert_eq!(ViewId::from_path("/product/"), ViewId::Product);
    }

    #[test]
    fn test_from_path_legacy_aliases() {
        assert_eq!(ViewId::from_path("/tipo-1"), ViewId::Product);
        assert_eq!(ViewId::from_path("/tipo-2"), ViewId::Event);
        assert_eq!(ViewId::from_path("/tipo-3"), ViewId::Category);
    }

    #[test]
    fn test_from_path_falls_back_to_home() {
        for path in ["", "/", "/products", "/Product", "/product/extra", "/tipo-4", "home"] {
            assert_eq!(ViewId::from_path(path), ViewId::Home, "path {path:?}");
        }
    }

    #[test]
    fn test_routes_resolve_to_themselves() {
        for id in ViewId::NAVIGABLE {
            assert_eq!(ViewId::from_path(id.route()), id);
        }
        assert_eq!(ViewId::from_path(ViewId::Home.route()), ViewId::Home);
    }

    #[test]
    fn test_catalog_covers_navigable_views() {
        let catalog = ViewCatalog::standard();

        for id in ViewId::NAVIGABLE {
            let view = catalog.get(id).expect("view defined");
            assert!(!view.panels.is_empty());
        }
        assert!(catalog.get(ViewId::Home).is_none());
    }

    #[test]
    fn test_event_view_has_mix_and_one_hourly_panel_per_type() {
        let catalog = ViewCatalog::standard();
        let event = catalog.get(ViewId::Event).unwrap();

        assert_eq!(event.queries()[0], QueryDefinition::EventMix);
        let hourly: Vec<_> = event.queries()[1..].to_vec();
        assert_eq!(
            hourly,
            EventType::ALL
                .into_iter()
                .map(QueryDefinition::EventHourly)
                .collect::<Vec<_>>()
        );
        assert!(event.panels[1..].iter().all(|p| p.shape == ChartShape::Line));
    }

    #[test]
    fn test_product_view_panels() {
        let catalog = ViewCatalog::standard();
        let product = catalog.get(ViewId::Product).unwrap();

        assert_eq!(product.panels.len(), 2);
        assert_eq!(product.panels[0].shape, ChartShape::Pie);
        assert_eq!(
            product.panels[1].shape,
            ChartShape::Bar {
                value: Column::Total,
                color: Some(Column::Count),
            }
        );
        assert_eq!(product.route(), "/product");
    }
}
