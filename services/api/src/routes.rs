use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;
use solar_ops::workflows::content::{ContentDraft, ContentKind};
use solar_ops::workflows::jobs::JobCode;
use solar_ops::workflows::onboarding::{
    onboarding_router, ApplicationRepository, CrmAlertPublisher, OnboardingService,
    OnboardingSnapshot, OnboardingWizard, ReviewTier, ScoreComponent, ScoringConfig,
    ScoringEngine, StepProgressView,
};

pub(crate) fn with_back_office_routes<R, A>(service: Arc<OnboardingService<R, A>>) -> axum::Router
where
    R: ApplicationRepository + 'static,
    A: CrmAlertPublisher + 'static,
{
    onboarding_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/onboarding/score",
            axum::routing::post(score_preview_endpoint),
        )
        .route(
            "/api/v1/jobs/codes/:code",
            axum::routing::get(job_code_endpoint),
        )
        .route(
            "/api/v1/content/slugs",
            axum::routing::post(slug_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScorePreviewRequest {
    pub(crate) snapshot: OnboardingSnapshot,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScorePreviewResponse {
    pub(crate) total: u8,
    pub(crate) max: u8,
    pub(crate) tier: ReviewTier,
    pub(crate) tier_label: &'static str,
    pub(crate) components: Vec<ScoreComponent>,
    pub(crate) steps: Vec<StepProgressView>,
    pub(crate) ready_to_submit: bool,
}

/// Stateless preview: scores a wizard snapshot without storing anything, so
/// the admin screens can show live progress while the partner types.
pub(crate) async fn score_preview_endpoint(
    Json(payload): Json<ScorePreviewRequest>,
) -> Json<ScorePreviewResponse> {
    let ScorePreviewRequest { snapshot } = payload;

    let engine = ScoringEngine::new(ScoringConfig::default());
    let breakdown = engine.score(&snapshot);

    let wizard = OnboardingWizard::for_snapshot(&snapshot);
    let steps = wizard.progress(&snapshot);
    let ready_to_submit = wizard.ready_to_submit(&snapshot);

    Json(ScorePreviewResponse {
        total: breakdown.total,
        max: breakdown.max,
        tier: breakdown.tier,
        tier_label: breakdown.tier.label(),
        components: breakdown.components,
        steps,
        ready_to_submit,
    })
}

#[derive(Debug, Serialize)]
pub(crate) struct JobCodeView {
    pub(crate) code: String,
    pub(crate) segment: &'static str,
    pub(crate) segment_label: &'static str,
    pub(crate) service: &'static str,
    pub(crate) service_label: &'static str,
    pub(crate) year: u16,
    pub(crate) sequence: u32,
}

pub(crate) async fn job_code_endpoint(Path(code): Path<String>) -> impl IntoResponse {
    match JobCode::from_str(&code) {
        Ok(parsed) => {
            let view = JobCodeView {
                code: parsed.to_string(),
                segment: parsed.segment.code(),
                segment_label: parsed.segment.label(),
                service: parsed.service.code(),
                service_label: parsed.service.label(),
                year: parsed.year,
                sequence: parsed.sequence,
            };
            (StatusCode::OK, Json(json!(view)))
        }
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SlugPreviewRequest {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) kind: Option<ContentKind>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SlugPreviewResponse {
    pub(crate) title: String,
    pub(crate) slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) permalink: Option<String>,
}

pub(crate) async fn slug_preview_endpoint(
    Json(payload): Json<SlugPreviewRequest>,
) -> Json<SlugPreviewResponse> {
    let SlugPreviewRequest { title, kind } = payload;

    let (slug, permalink) = match kind {
        Some(kind) => {
            let draft = ContentDraft::new(kind, title.clone());
            let permalink = draft.permalink();
            (draft.slug, Some(permalink))
        }
        None => (solar_ops::workflows::content::derive_slug(&title), None),
    };

    Json(SlugPreviewResponse {
        title,
        slug,
        permalink,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_ops::workflows::onboarding::{BaseLocation, PartnerClass};

    #[tokio::test]
    async fn score_preview_reports_breakdown_and_progress() {
        let mut snapshot = OnboardingSnapshot::default();
        snapshot.base_location = BaseLocation {
            city: "Porto".to_string(),
            country: "Portugal".to_string(),
        };
        snapshot.partner_class = Some(PartnerClass::Installer);

        let Json(body) = score_preview_endpoint(Json(ScorePreviewRequest { snapshot })).await;

        assert_eq!(body.total, 4);
        assert_eq!(body.max, 20);
        assert_eq!(body.tier, ReviewTier::NeedsImprovement);
        assert_eq!(body.components.len(), 10);
        assert!(!body.ready_to_submit);
        assert!(!body.steps.is_empty());
    }

    #[tokio::test]
    async fn job_code_endpoint_round_trips_canonical_codes() {
        let response = job_code_endpoint(Path("RES-EPC-2025-0001".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(payload.get("segment_label"), Some(&json!("Residential")));
        assert_eq!(
            payload.get("service_label"),
            Some(&json!("Engineering, Procurement, Construction"))
        );
        assert_eq!(payload.get("sequence"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn job_code_endpoint_rejects_malformed_codes() {
        let response = job_code_endpoint(Path("not-a-code".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn slug_preview_matches_the_marketing_site() {
        let Json(body) = slug_preview_endpoint(Json(SlugPreviewRequest {
            title: "50kW Solar Installation for Tech Corp!".to_string(),
            kind: Some(ContentKind::CaseStudy),
        }))
        .await;

        assert_eq!(body.slug, "50kw-solar-installation-for-tech-corp");
        assert_eq!(
            body.permalink.as_deref(),
            Some("/case-studies/50kw-solar-installation-for-tech-corp")
        );
    }
}
