//! HTTP Handlers
//!
//! Every handler here sits behind the route guard, except `landing`.

use auth::middleware::CurrentSession;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kernel::id::EmergencyContactId;
use std::sync::Arc;

use crate::application::config::DashboardConfig;
use crate::application::{
    ActivateSosUseCase, DriverDashboardUseCase, DriverHelpUseCase, FleetDashboardUseCase,
    LandingUseCase, RosterQuery,
};
use crate::domain::entities::{
    DriverOverview, DriverProfile, DriverSettings, EmergencyContact, FleetAnalytics,
    FleetOverview, HelpContent, LandingContent, NewEmergencyContact, SupportRequest,
};
use crate::domain::repository::{DriverRepository, FleetRepository};
use crate::domain::value_objects::{StatusFilter, TimeRange};
use crate::error::DashboardResult;
use crate::presentation::dto::{
    AnalyticsParams, RosterParams, RosterResponse, SosResponse, SupportResponse,
};

/// Shared state for dashboard handlers
#[derive(Clone)]
pub struct DashboardAppState<R>
where
    R: Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<DashboardConfig>,
}

// ============================================================================
// Driver
// ============================================================================

/// GET /driver
pub async fn driver_overview<R>(
    State(state): State<DashboardAppState<R>>,
) -> DashboardResult<Json<DriverOverview>>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverDashboardUseCase::new(state.repo.clone());
    Ok(Json(use_case.overview().await?))
}

/// GET /driver/profile
pub async fn get_profile<R>(
    State(state): State<DashboardAppState<R>>,
) -> DashboardResult<Json<DriverProfile>>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverDashboardUseCase::new(state.repo.clone());
    Ok(Json(use_case.profile().await?))
}

/// PUT /driver/profile
pub async fn put_profile<R>(
    State(state): State<DashboardAppState<R>>,
    Json(req): Json<DriverProfile>,
) -> DashboardResult<Json<DriverProfile>>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverDashboardUseCase::new(state.repo.clone());
    Ok(Json(use_case.update_profile(req).await?))
}

/// GET /driver/emergency-contacts
pub async fn list_contacts<R>(
    State(state): State<DashboardAppState<R>>,
) -> DashboardResult<Json<Vec<EmergencyContact>>>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverDashboardUseCase::new(state.repo.clone());
    Ok(Json(use_case.contacts().await?))
}

/// POST /driver/emergency-contacts
pub async fn add_contact<R>(
    State(state): State<DashboardAppState<R>>,
    Json(req): Json<NewEmergencyContact>,
) -> DashboardResult<(StatusCode, Json<EmergencyContact>)>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverDashboardUseCase::new(state.repo.clone());
    let contact = use_case.add_contact(req).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// DELETE /driver/emergency-contacts/{id}
pub async fn remove_contact<R>(
    State(state): State<DashboardAppState<R>>,
    Path(id): Path<EmergencyContactId>,
) -> DashboardResult<StatusCode>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverDashboardUseCase::new(state.repo.clone());
    use_case.remove_contact(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /driver/settings
pub async fn get_settings<R>(
    State(state): State<DashboardAppState<R>>,
) -> DashboardResult<Json<DriverSettings>>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverDashboardUseCase::new(state.repo.clone());
    Ok(Json(use_case.settings().await?))
}

/// PUT /driver/settings
pub async fn put_settings<R>(
    State(state): State<DashboardAppState<R>>,
    Json(req): Json<DriverSettings>,
) -> DashboardResult<Json<DriverSettings>>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverDashboardUseCase::new(state.repo.clone());
    Ok(Json(use_case.update_settings(req).await?))
}

/// POST /driver/sos
pub async fn activate_sos<R>(
    State(state): State<DashboardAppState<R>>,
    Extension(session): Extension<CurrentSession>,
) -> DashboardResult<Json<SosResponse>>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = ActivateSosUseCase::new(state.repo.clone(), state.config.clone());
    let driver = session.0.profile.name().map(str::to_string);
    let output = use_case.execute(driver).await?;
    Ok(Json(SosResponse::from(output)))
}

/// GET /driver/help
pub async fn help<R>(
    State(state): State<DashboardAppState<R>>,
) -> DashboardResult<Json<HelpContent>>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverHelpUseCase::new(state.repo.clone(), state.config.clone());
    Ok(Json(use_case.content().await?))
}

/// POST /driver/help/contact
pub async fn contact_support<R>(
    State(state): State<DashboardAppState<R>>,
    Json(req): Json<SupportRequest>,
) -> DashboardResult<(StatusCode, Json<SupportResponse>)>
where
    R: DriverRepository + Clone + Send + Sync + 'static,
{
    let use_case = DriverHelpUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.contact(req).await?;
    Ok((StatusCode::CREATED, Json(SupportResponse::from(output))))
}

// ============================================================================
// Fleet
// ============================================================================

/// GET /fleet
pub async fn fleet_overview<R>(
    State(state): State<DashboardAppState<R>>,
) -> DashboardResult<Json<FleetOverview>>
where
    R: FleetRepository + Clone + Send + Sync + 'static,
{
    let use_case = FleetDashboardUseCase::new(state.repo.clone(), state.config.clone());
    Ok(Json(use_case.overview().await?))
}

/// GET /fleet/drivers
pub async fn fleet_roster<R>(
    State(state): State<DashboardAppState<R>>,
    Query(params): Query<RosterParams>,
) -> DashboardResult<Json<RosterResponse>>
where
    R: FleetRepository + Clone + Send + Sync + 'static,
{
    let filter = match params.status.as_deref() {
        Some(status) => status.parse::<StatusFilter>()?,
        None => StatusFilter::All,
    };
    let query = RosterQuery {
        search: params.search.unwrap_or_default(),
        filter,
    };

    let use_case = FleetDashboardUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.roster(&query).await?;
    Ok(Json(RosterResponse::from(output)))
}

/// GET /fleet/analytics
pub async fn fleet_analytics<R>(
    State(state): State<DashboardAppState<R>>,
    Query(params): Query<AnalyticsParams>,
) -> DashboardResult<Json<FleetAnalytics>>
where
    R: FleetRepository + Clone + Send + Sync + 'static,
{
    let range = params
        .range
        .as_deref()
        .map(str::parse::<TimeRange>)
        .transpose()?;

    let use_case = FleetDashboardUseCase::new(state.repo.clone(), state.config.clone());
    Ok(Json(use_case.analytics(range).await?))
}

// ============================================================================
// Landing
// ============================================================================

/// GET /api/landing
pub async fn landing<R>(
    State(state): State<DashboardAppState<R>>,
) -> DashboardResult<Json<LandingContent>>
where
    R: FleetRepository + Clone + Send + Sync + 'static,
{
    let use_case = LandingUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute().await?))
}
