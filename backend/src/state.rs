//! Application state management
//!
//! Shared state passed to every handler via Axum's state extraction. The
//! reference tables are built once at startup and only read afterwards.

use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use nutrition_targets_shared::{NutritionCalculator, ReferenceTables};
use std::sync::Arc;

/// Shared application state
///
/// Every field is reference counted, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Immutable reference value store
    pub tables: Arc<ReferenceTables>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Prometheus renderer; absent when no recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state with the standard reference tables
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self::with_tables(ReferenceTables::standard(), config, metrics)
    }

    pub fn with_tables(
        tables: ReferenceTables,
        config: AppConfig,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            tables: Arc::new(tables),
            config: Arc::new(config),
            metrics,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Calculator bound to this state's tables and policy
    #[inline]
    pub fn calculator(&self) -> NutritionCalculator<'_> {
        NutritionCalculator::new(&self.tables, &self.config.calculator)
    }
}
