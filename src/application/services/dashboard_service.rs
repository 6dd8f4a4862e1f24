//! View resolution: routed view in, composed page out.

use std::sync::Arc;

use serde_json::json;

use crate::domain::page::{Page, PageNode};
use crate::domain::repositories::EventRepository;
use crate::domain::view::{ViewCatalog, ViewId};
use crate::error::AppError;

/// Service resolving dashboard views into pages.
///
/// Runs each view's queries through the repository, then binds every result
/// to its panel's chart. A failing query fails the whole page; charts that
/// could have been drawn are not returned on their own.
pub struct DashboardService<R: EventRepository> {
    repository: Arc<R>,
    catalog: ViewCatalog,
}

impl<R: EventRepository> DashboardService<R> {
    /// Creates a new dashboard service.
    pub fn new(repository: Arc<R>, catalog: ViewCatalog) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub fn catalog(&self) -> &ViewCatalog {
        &self.catalog
    }

    /// Routes `path` and resolves the resulting view.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub async fn resolve_path(&self, path: &str) -> Result<Page, AppError> {
        self.resolve(ViewId::from_path(path)).await
    }

    /// Resolves a view into a page.
    ///
    /// [`ViewId::Home`] needs no data and always succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Query`] if the database fails.
    /// Returns [`AppError::Internal`] if a result cannot be bound to its chart.
    pub async fn resolve(&self, view: ViewId) -> Result<Page, AppError> {
        metrics::counter!("dashboard_views_total", "view" => view.slug()).increment(1);

        let Some(definition) = self.catalog.get(view) else {
            return Ok(Page::welcome());
        };

        let results = self.repository.run_queries(definition.queries()).await?;

        if results.len() != definition.panels.len() {
            return Err(AppError::internal(
                "Result count does not match view panels",
                json!({
                    "view": view.slug(),
                    "expected": definition.panels.len(),
                    "actual": results.len(),
                }),
            ));
        }

        let mut nodes = Vec::with_capacity(definition.panels.len() + 1);
        nodes.push(PageNode::Heading {
            text: definition.heading.to_string(),
        });

        for (index, (panel, result)) in definition.panels.iter().zip(results).enumerate() {
            let chart = panel.shape.build(&panel.title, result)?;
            nodes.push(PageNode::Graph {
                id: format!("{}-{}", view.slug(), index + 1),
                chart,
            });
        }

        tracing::info!(view = view.slug(), charts = nodes.len() - 1, "View resolved");

        Ok(Page::new(view, nodes))
    }

    /// Checks database connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the database is unreachable.
    pub async fn check_database(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregation::{AggregateRow, AggregationResult};
    use crate::domain::chart::ChartKind;
    use crate::domain::event::EventType;
    use crate::domain::page::WELCOME_HEADING;
    use crate::domain::query::{GroupKey, QueryDefinition};
    use crate::domain::repositories::MockEventRepository;

    fn answer(queries: Vec<QueryDefinition>) -> Vec<AggregationResult> {
        queries
            .into_iter()
            .map(|query| {
                let total = query.has_total().then_some(10.0);
                AggregationResult::new(query, vec![AggregateRow::new("1", 2, total)])
            })
            .collect()
    }

    fn service(mock_repo: MockEventRepository) -> DashboardService<MockEventRepository> {
        DashboardService::new(Arc::new(mock_repo), ViewCatalog::standard())
    }

    #[tokio::test]
    async fn test_home_runs_no_queries() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_run_queries().times(0);

        let page = service(mock_repo).resolve(ViewId::Home).await.unwrap();

        assert_eq!(page.view, ViewId::Home);
        assert_eq!(page.heading(), Some(WELCOME_HEADING));
    }

    #[tokio::test]
    async fn test_unknown_path_resolves_to_home() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_run_queries().times(0);

        let page = service(mock_repo).resolve_path("/nowhere").await.unwrap();

        assert_eq!(page.view, ViewId::Home);
    }

    #[tokio::test]
    async fn test_product_view_builds_pie_and_bar() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_run_queries()
            .withf(|queries| {
                queries
                    == &vec![
                        QueryDefinition::top_by_revenue(GroupKey::ProductId),
                        QueryDefinition::top_by_revenue(GroupKey::ProductId),
                    ]
            })
            .times(1)
            .returning(|queries| Ok(answer(queries)));

        let page = service(mock_repo).resolve_path("/product").await.unwrap();

        assert_eq!(page.view, ViewId::Product);
        let charts: Vec<_> = page.charts().collect();
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].0, "product-1");
        assert_eq!(charts[0].1.kind(), ChartKind::Pie);
        assert_eq!(charts[1].1.kind(), ChartKind::Bar);
        assert_eq!(charts[1].1.color_column(), Some("cantidad"));
    }

    #[tokio::test]
    async fn test_event_view_builds_mix_and_hourly_lines() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_run_queries()
            .times(1)
            .returning(|queries| Ok(answer(queries)));

        let page = service(mock_repo).resolve(ViewId::Event).await.unwrap();

        let kinds: Vec<_> = page.charts().map(|(_, chart)| chart.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Pie,
                ChartKind::Line,
                ChartKind::Line,
                ChartKind::Line,
                ChartKind::Line,
            ]
        );
        let hourly: Vec<_> = page
            .charts()
            .skip(1)
            .map(|(_, chart)| chart.data().query())
            .collect();
        assert_eq!(
            hourly,
            EventType::ALL
                .into_iter()
                .map(QueryDefinition::EventHourly)
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_query_failure_fails_whole_view() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_run_queries()
            .times(1)
            .returning(|_| Err(AppError::unavailable("Database unavailable", json!({}))));

        let result = service(mock_repo).resolve(ViewId::Category).await;

        assert!(matches!(result.unwrap_err(), AppError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_short_result_set_is_internal_error() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_run_queries()
            .times(1)
            .returning(|_| Ok(vec![]));

        let result = service(mock_repo).resolve(ViewId::Product).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_check_database_delegates_to_ping() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_ping().times(1).returning(|| Ok(()));

        assert!(service(mock_repo).check_database().await.is_ok());
    }
}
