use std::sync::Arc;

use crate::assist::bridge::FormFillBus;
use crate::assist::client::FillClient;
use crate::cvs::store::CvStore;
use crate::jobs::store::JobStore;
use crate::latency::Latency;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<JobStore>,
    pub cvs: Arc<CvStore>,
    pub fill: FillClient,
    pub form_fill: FormFillBus,
    /// Round-trip simulation for operations that aggregate across stores.
    pub latency: Latency,
}
