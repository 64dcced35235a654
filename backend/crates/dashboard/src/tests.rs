//! Router tests for the dashboard crate
//! Drives the guarded routers the way the API binary nests them.

#[cfg(test)]
mod router_tests {
    use auth::models::{Profile, Role, SessionRecord};
    use auth::store::{InMemorySessionStore, SessionStore};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::application::config::DashboardConfig;
    use crate::infra::InMemoryDashboard;
    use crate::presentation::router::{driver_router, fleet_router, landing_router};

    fn app(repo: &InMemoryDashboard, store: &InMemorySessionStore) -> Router {
        let repo = Arc::new(repo.clone());
        let store = Arc::new(store.clone());
        let config = Arc::new(DashboardConfig::default());
        Router::new()
            .nest(
                "/driver",
                driver_router(repo.clone(), store.clone(), config.clone()),
            )
            .nest("/fleet", fleet_router(repo.clone(), store, config.clone()))
            .nest("/api/landing", landing_router(repo, config))
    }

    async fn signed_in(role: Role) -> InMemorySessionStore {
        let store = InMemorySessionStore::new();
        let profile = Profile::new().with("name", "John Doe");
        store
            .write(&SessionRecord::signed_in(role, profile))
            .await
            .unwrap();
        store
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_driver_routes_redirect_without_session() {
        let app = app(&InMemoryDashboard::new(), &InMemorySessionStore::new());

        let response = app
            .oneshot(request("GET", "/driver/settings", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/driver/login");
    }

    #[tokio::test]
    async fn test_fleet_routes_send_drivers_to_landing() {
        let store = signed_in(Role::Driver).await;
        let app = app(&InMemoryDashboard::new(), &store);

        let response = app.oneshot(request("GET", "/fleet", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_driver_overview_and_profile() {
        let store = signed_in(Role::Driver).await;
        let app = app(&InMemoryDashboard::new(), &store);

        let response = app
            .clone()
            .oneshot(request("GET", "/driver", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["drowsiness"]["status"], "safe");
        assert_eq!(body["drowsiness"]["level"], 15);
        assert_eq!(body["vitals"]["heartRate"]["value"], 72);
        assert_eq!(body["vitals"]["bloodPressure"]["value"], "120/80");
        assert_eq!(body["notifications"].as_array().unwrap().len(), 3);

        let response = app
            .oneshot(request("GET", "/driver/profile", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "name": "John Doe",
                "email": "john.doe@example.com",
                "phone": "+1 (555) 123-4567",
                "licenseId": "DL123456789",
                "vehicleId": "VH987654321",
                "address": "123 Main St, City, State 12345"
            })
        );
    }

    #[tokio::test]
    async fn test_profile_update_is_validated_and_kept() {
        let store = signed_in(Role::Driver).await;
        let app = app(&InMemoryDashboard::new(), &store);
        let mut profile = json!({
            "name": "John Doe",
            "email": "john.doe@example.com",
            "phone": "+1 (555) 000-1111",
            "licenseId": "DL123456789",
            "vehicleId": "VH987654321",
            "address": "9 Elm St, Springfield"
        });

        let response = app
            .clone()
            .oneshot(request("PUT", "/driver/profile", Some(profile.clone())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(request("GET", "/driver/profile", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["address"], "9 Elm St, Springfield");

        profile["licenseId"] = json!(" ");
        profile["phone"] = json!("call me");
        let response = app
            .clone()
            .oneshot(request("PUT", "/driver/profile", Some(profile)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["errors"]["licenseId"], "License ID is required");
        assert_eq!(body["errors"]["phone"], "Please enter a valid phone number");

        let response = app
            .oneshot(request("GET", "/driver/profile", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["phone"], "+1 (555) 000-1111");
    }

    #[tokio::test]
    async fn test_help_content() {
        let store = signed_in(Role::Driver).await;
        let app = app(&InMemoryDashboard::new(), &store);

        let response = app
            .oneshot(request("GET", "/driver/help", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["faqs"].as_array().unwrap().len(), 6);
        assert_eq!(
            body["faqs"][0]["question"],
            "How does SmartGuard detect drowsiness?"
        );
        let steps = body["troubleshooting"].as_array().unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0]["step"], 1);
        assert_eq!(steps[0]["title"], "Check Camera Access");
        assert_eq!(body["support"]["email"], "support@smartguard.com");
        assert_eq!(body["support"]["phone"], "1-800-SMARTGUARD");
    }

    #[tokio::test]
    async fn test_help_requires_driver_session() {
        let store = signed_in(Role::FleetManager).await;
        let app = app(&InMemoryDashboard::new(), &store);

        let response = app
            .oneshot(request("GET", "/driver/help", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_help_contact_form() {
        let store = signed_in(Role::Driver).await;
        let repo = InMemoryDashboard::new();
        let app = app(&repo, &store);

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/driver/help/contact",
                Some(json!({ "name": "John Doe", "email": "john.doe@example.com", "subject": "", "message": "" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["errors"]["subject"], "Subject is required");
        assert_eq!(body["errors"]["message"], "Message is required");
        assert!(repo.support_requests().unwrap().is_empty());

        let response = app
            .oneshot(request(
                "POST",
                "/driver/help/contact",
                Some(json!({
                    "name": "John Doe",
                    "email": "john.doe@example.com",
                    "subject": "Camera alerts",
                    "message": "The camera stops after an hour."
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(
            body["message"],
            "Thank you for your message. We'll get back to you soon!"
        );

        let tickets = repo.support_requests().unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].subject, "Camera alerts");
        assert_eq!(body["id"], tickets[0].id.to_string());
    }

    #[tokio::test]
    async fn test_add_contact_with_bad_phone_is_rejected() {
        let store = signed_in(Role::Driver).await;
        let repo = InMemoryDashboard::new();
        let app = app(&repo, &store);

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/driver/emergency-contacts",
                Some(json!({ "name": "Ann", "phone": "call me", "relationship": "Sister" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["errors"]["phone"],
            "Please enter a valid phone number"
        );

        let response = app
            .oneshot(request("GET", "/driver/emergency-contacts", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_add_then_remove_contact() {
        let store = signed_in(Role::Driver).await;
        let app = app(&InMemoryDashboard::new(), &store);

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/driver/emergency-contacts",
                Some(json!({ "name": "Ann", "phone": "+1 555 0100", "relationship": "Sister" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["id"]
            .as_str()
            .unwrap()
            .to_string();

        let uri = format!("/driver/emergency-contacts/{id}");
        let response = app
            .clone()
            .oneshot(request("DELETE", &uri, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(request("DELETE", &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_settings_replace() {
        let store = signed_in(Role::Driver).await;
        let app = app(&InMemoryDashboard::new(), &store);

        let response = app
            .clone()
            .oneshot(request("GET", "/driver/settings", None))
            .await
            .unwrap();
        let mut settings = body_json(response).await;
        assert_eq!(settings["notifications"]["sms"], false);
        assert_eq!(settings["privacy"]["locationTracking"], true);
        assert_eq!(settings["language"], "en");

        settings["notifications"]["sms"] = json!(true);
        settings["language"] = json!("fr");
        let response = app
            .clone()
            .oneshot(request("PUT", "/driver/settings", Some(settings.clone())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("GET", "/driver/settings", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, settings);
    }

    #[tokio::test]
    async fn test_sos_is_recorded() {
        let store = signed_in(Role::Driver).await;
        let repo = InMemoryDashboard::new();
        let app = app(&repo, &store);

        let response = app
            .oneshot(request("POST", "/driver/sos", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().starts_with("Emergency SOS activated"));
        assert!(body["activatedAt"].is_string());

        let events = repo.sos_events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].driver.as_deref(), Some("John Doe"));
        assert_eq!(body["id"], events[0].id.to_string());
    }

    #[tokio::test]
    async fn test_roster_search_and_filter() {
        let store = signed_in(Role::FleetManager).await;
        let app = app(&InMemoryDashboard::new(), &store);

        let response = app
            .clone()
            .oneshot(request("GET", "/fleet/drivers?search=JOHN&status=all", None))
            .await
            .unwrap();
        let body = body_json(response).await;
        let names: Vec<&str> = body["drivers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["John Doe", "Mike Johnson"]);
        assert_eq!(
            body["counts"],
            json!({ "total": 5, "safe": 2, "warning": 2, "critical": 1 })
        );

        let response = app
            .clone()
            .oneshot(request("GET", "/fleet/drivers?status=warning", None))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["drivers"].as_array().unwrap().len(), 2);
        assert_eq!(body["drivers"][0]["vehicleId"], "VH789012");

        let response = app
            .oneshot(request("GET", "/fleet/drivers?status=asleep", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analytics_echoes_range() {
        let store = signed_in(Role::FleetManager).await;
        let app = app(&InMemoryDashboard::new(), &store);

        let response = app
            .clone()
            .oneshot(request("GET", "/fleet/analytics?range=30d", None))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["range"], "30d");
        assert_eq!(body["drowsinessTrends"].as_array().unwrap().len(), 7);
        assert_eq!(body["alertDistribution"][0]["type"], "Drowsiness");
        assert_eq!(body["driverPerformance"][3]["safetyScore"], 97);

        let response = app
            .clone()
            .oneshot(request("GET", "/fleet/analytics", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["range"], "7d");

        let response = app
            .oneshot(request("GET", "/fleet/analytics?range=1y", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_fleet_overview_and_public_landing() {
        let store = signed_in(Role::FleetManager).await;
        let app = app(&InMemoryDashboard::new(), &store);

        let response = app
            .clone()
            .oneshot(request("GET", "/fleet", None))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["stats"][0]["label"], "Active Drivers");
        assert_eq!(body["recentAlerts"][2]["type"], "critical");
        assert_eq!(body["driverStatuses"].as_array().unwrap().len(), 4);

        let anonymous = self::app(&InMemoryDashboard::new(), &InMemorySessionStore::new());
        let response = anonymous
            .oneshot(request("GET", "/api/landing", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["features"].as_array().unwrap().len(), 3);
        assert_eq!(body["stats"][0]["value"], "10,000+");
    }
}
