use crate::analyzer::Analyzer;
use crate::insight::InsightGenerator;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,

    /// Configured insight backend, if any
    pub insight: Option<Arc<dyn InsightGenerator>>,

    /// Directory exported reports are written to
    pub reports_dir: PathBuf,
}

impl AppState {
    pub fn new(
        analyzer: Arc<Analyzer>,
        insight: Option<Arc<dyn InsightGenerator>>,
        reports_dir: PathBuf,
    ) -> Self {
        Self {
            analyzer,
            insight,
            reports_dir,
        }
    }
}
