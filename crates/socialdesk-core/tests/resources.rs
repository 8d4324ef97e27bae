mod common;

use common::{client_with_tokens, pair, tokens, user_json};
use serde_json::json;
use socialdesk_core::models::{
    BulkEntry, CalendarRequest, CaptionRequest, NewBioPage, NewFirstComment, NewPost, PostIdeasRequest,
    PreferencesUpdate, ProfileUpdate,
};
use socialdesk_core::ApiError;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_stores_pair_and_loads_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "qa@example.com", "password": "hunter22"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(pair("A1", "R1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, None, None);
    let rx = client.session().subscribe();
    let user = client.login(" qa@example.com ", "hunter22").await.unwrap();

    assert_eq!(user.plan, "pro");
    assert_eq!(tokens(&client), (Some("A1".into()), Some("R1".into())));
    assert!(rx.borrow().authenticated);
    assert_eq!(rx.borrow().user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
}

#[tokio::test]
async fn login_rejection_does_not_attempt_renewal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid email or password"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pair("A2", "R2")))
        .expect(0)
        .mount(&server)
        .await;

    let (client, routes) = client_with_tokens(&server, Some("OLD"), Some("R0"));
    let err = client.login("qa@example.com", "wrong").await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(routes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn restore_session_without_tokens_skips_network() {
    let server = MockServer::start().await;
    let (client, _) = client_with_tokens(&server, None, None);

    assert!(client.restore_session().await.unwrap().is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn restore_session_with_dead_tokens_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (client, routes) = client_with_tokens(&server, Some("A1"), Some("R1"));
    assert!(client.restore_session().await.unwrap().is_none());
    assert_eq!(tokens(&client), (None, None));
    assert_eq!(routes.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn client_side_validation_never_hits_the_server() {
    let server = MockServer::start().await;
    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));

    let err = client.create_post(&NewPost::new("   ", vec!["acc-1".into()])).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = client.create_bio_page(&NewBioPage::new("bad slug!", "Acme")).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = client.bulk_upload_csv("posts.csv", b"  \n".to_vec()).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = client.bulk_confirm(&[]).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = client.delete_post("p-1/../../accounts/a-1").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = client.get_media("m-1?include=all").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = client.reorder_feed("a-1", &[]).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = client.change_password("old-secret", "short").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let long = "x".repeat(2201);
    let err = client.schedule_first_comment(&NewFirstComment::new("pp-1", long)).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = client.generate_caption(&CaptionRequest::new("launch", vec![])).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn bulk_upload_sends_multipart_csv() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bulk/upload"))
        .and(header("authorization", "Bearer A1"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("caption,platforms,schedule_time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_rows": 2,
            "valid_count": 1,
            "error_count": 1,
            "entries": [
                {"row_number": 2, "caption": "Hello", "platforms": ["twitter"], "schedule_time": "2025-06-01T09:00:00", "is_valid": true, "error": null},
                {"row_number": 3, "caption": "", "platforms": [], "schedule_time": "", "is_valid": false, "error": "Caption is required"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));
    let csv = b"caption,platforms,schedule_time\nHello,twitter,2025-06-01T09:00:00\n,,\n".to_vec();
    let preview = client.bulk_upload_csv("posts.csv", csv).await.unwrap();

    assert!(!preview.is_clean());
    assert_eq!(preview.invalid_rows()[0].row_number, 3);
}

#[tokio::test]
async fn bulk_confirm_and_template() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bulk/confirm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"created": 1, "failed": 0, "errors": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bulk/template"))
        .respond_with(ResponseTemplate::new(200).set_body_string("caption,hashtags,platforms,schedule_time,post_type,media_urls\n"))
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));
    let entry: BulkEntry = serde_json::from_value(json!({
        "caption": "Hello",
        "platforms": ["twitter"],
        "schedule_time": "2025-06-01T09:00:00"
    }))
    .unwrap();
    let result = client.bulk_confirm(&[entry]).await.unwrap();
    assert_eq!(result.created, 1);

    let template = client.bulk_template().await.unwrap();
    assert!(template.starts_with("caption,"));
}

#[tokio::test]
async fn categories_unwrap_item_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/content/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "c-1",
                "user_id": "u-1",
                "name": "Evergreen",
                "color": "#22c55e",
                "icon": null,
                "description": null,
                "is_recyclable": true,
                "recycle_interval_days": 30,
                "post_count": 4,
                "created_at": "2025-01-01T00:00:00Z"
            }]
        })))
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));
    let categories = client.list_categories().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Evergreen");
}

#[tokio::test]
async fn analytics_days_are_clamped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/dashboard"))
        .and(query_param("days", "365"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"loc": ["query", "days"], "msg": "stop here", "type": "value_error"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));
    let err = client.analytics_dashboard(10_000).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(ref m) if m == "days: stop here"));
}

#[tokio::test]
async fn post_ideas_unwraps_ideas() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/strategy/post-ideas"))
        .and(body_json(json!({"strategy_context": "coffee shop", "count": 20, "platform": "twitter"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ideas": [{"caption": "Latte art Monday", "hashtags": ["coffee"], "post_type": "image", "platform": "twitter"}]
        })))
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));
    let ideas = client
        .post_ideas(&PostIdeasRequest::new("coffee shop", "twitter", 50))
        .await
        .unwrap();
    assert_eq!(ideas[0].caption, "Latte art Monday");
}

#[tokio::test]
async fn login_without_profile_leaves_no_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pair("A1", "R1")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let (client, routes) = client_with_tokens(&server, None, None);
    let err = client.login("qa@example.com", "hunter22").await.unwrap_err();

    assert!(matches!(err, ApiError::ServerError(_)));
    assert_eq!(tokens(&client), (None, None));
    assert!(!client.session().is_authenticated());
    assert!(routes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn ai_helpers_unwrap_responses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai/generate-caption"))
        .and(body_json(json!({
            "description": "Spring launch",
            "platforms": ["twitter", "instagram"],
            "tone": "professional"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "captions": {"twitter": "Spring is here", "instagram": "New season, new drop"},
            "variations": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ai/generate-hashtags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hashtags": ["spring", "launch"],
            "broad": ["spring"],
            "niche": ["launch"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ai/rewrite"))
        .and(body_json(json!({
            "caption": "Spring is here",
            "source_platform": "twitter",
            "target_platform": "linkedin"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rewritten_caption": "Announcing our spring line"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ai/generate-calendar"))
        .and(body_string_contains("\"posts_per_day\":2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slots": [{
                "date": "2025-04-01",
                "time": "09:00",
                "platform": "twitter",
                "content_type": "text",
                "theme": "launch",
                "suggested_caption": "Day one"
            }]
        })))
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));

    let request = CaptionRequest::new("Spring launch", vec!["twitter".into(), "instagram".into()]);
    let captions = client.generate_caption(&request).await.unwrap();
    assert_eq!(captions.captions["twitter"], "Spring is here");
    assert!(captions.variations.is_none());

    let hashtags = client
        .generate_hashtags(&socialdesk_core::models::HashtagRequest {
            caption: "Spring is here".into(),
            platform: "instagram".into(),
            category: None,
        })
        .await
        .unwrap();
    assert_eq!(hashtags.joined(), "#spring #launch");

    let rewritten = client.rewrite_caption("Spring is here", "twitter", "linkedin").await.unwrap();
    assert_eq!(rewritten, "Announcing our spring line");

    let slots = client
        .generate_calendar(&CalendarRequest {
            start_date: "2025-04-01".into(),
            end_date: "2025-04-07".into(),
            platforms: vec!["twitter".into()],
            content_themes: None,
            posts_per_day: 2,
        })
        .await
        .unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].suggested_caption, "Day one");
}

#[tokio::test]
async fn feed_preview_clamps_slots_and_reorder_sends_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed-planner/a-1"))
        .and(query_param("limit", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_id": "a-1",
            "items": [
                {"post_id": "p-2", "status": "scheduled", "scheduled_time": "2025-04-02T09:00:00Z", "grid_position": 1, "row": 0, "col": 1},
                {"post_id": "p-1", "status": "published", "grid_position": 0, "row": 0, "col": 0}
            ],
            "total_published": 1,
            "total_scheduled": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/feed-planner/a-1/reorder"))
        .and(body_json(json!({"post_ids": ["p-3", "p-2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": "Reordered 2 posts"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));

    let grid = client.feed_preview("a-1", Some(200)).await.unwrap();
    assert_eq!(grid.platform, "instagram");
    let rows = grid.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0].post_id, "p-1");
    assert!(rows[0][1].is_scheduled());

    let result = client.reorder_feed("a-1", &["p-3".to_string(), "p-2".to_string()]).await.unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn best_times_heatmap_and_analyze() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/best-times/a-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_id": "a-1",
            "platform": "twitter",
            "best_times": [{
                "day_of_week": 4,
                "hour_utc": 17,
                "avg_engagement_rate": 0.061,
                "avg_impressions": 830.0,
                "sample_count": 12,
                "day_name": "Friday"
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/best-times/a-1/heatmap"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_id": "a-1",
            "platform": "twitter",
            "data": [
                {"day_of_week": 0, "hour_utc": 9, "value": 0.02},
                {"day_of_week": 4, "hour_utc": 17, "value": 0.06}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/best-times/a-1/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_id": "a-1",
            "platform": "twitter",
            "slots_updated": 14,
            "message": "Analysis complete"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));

    let times = client.best_times("a-1").await.unwrap();
    assert_eq!(times.best_times[0].label(), "Friday 17:00 UTC");

    let heatmap = client.engagement_heatmap("a-1").await.unwrap();
    assert_eq!(heatmap.peak().map(|c| c.day_of_week), Some(4));

    let analysis = client.analyze_engagement("a-1").await.unwrap();
    assert_eq!(analysis.slots_updated, 14);
}

#[tokio::test]
async fn first_comment_schedule_and_fetch() {
    let server = MockServer::start().await;
    let comment = json!({
        "id": "fc-1",
        "post_platform_id": "pp-1",
        "comment_text": "Link in bio",
        "delay_seconds": 5,
        "status": "pending",
        "platform_comment_id": null,
        "error_message": null,
        "posted_at": null,
        "created_at": "2025-04-01T09:00:00Z"
    });
    Mock::given(method("POST"))
        .and(path("/first-comment/"))
        .and(body_json(json!({"post_platform_id": "pp-1", "comment_text": "Link in bio", "delay_seconds": 5})))
        .respond_with(ResponseTemplate::new(201).set_body_json(comment.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/first-comment/pp-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(comment))
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));

    let created = client
        .schedule_first_comment(&NewFirstComment::new("pp-1", "Link in bio"))
        .await
        .unwrap();
    assert_eq!(created.status, "pending");

    let fetched = client.first_comment("pp-1").await.unwrap();
    assert_eq!(fetched.id, "fc-1");
    assert!(fetched.posted_at.is_none());
}

#[tokio::test]
async fn settings_profile_updates_session_user() {
    let server = MockServer::start().await;
    let mut updated = user_json();
    updated["full_name"] = json!("Renamed Tester");
    Mock::given(method("PUT"))
        .and(path("/settings/profile"))
        .and(body_json(json!({"full_name": "Renamed Tester"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/settings/change-password"))
        .and(body_json(json!({"current_password": "hunter22", "new_password": "correct-horse"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Password changed successfully"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/settings/preferences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"default_platforms": ["twitter"]})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/settings/preferences"))
        .and(body_json(json!({"auto_hashtags": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"auto_hashtags": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with_tokens(&server, Some("A1"), Some("R1"));
    let rx = client.session().subscribe();

    let update = ProfileUpdate {
        full_name: Some("Renamed Tester".into()),
        email: None,
    };
    let user = client.update_profile(&update).await.unwrap();
    assert_eq!(user.full_name, "Renamed Tester");
    assert_eq!(
        rx.borrow().user.as_ref().map(|u| u.full_name.as_str()),
        Some("Renamed Tester")
    );

    let message = client.change_password("hunter22", "correct-horse").await.unwrap();
    assert_eq!(message, "Password changed successfully");

    let prefs = client.preferences().await.unwrap();
    assert_eq!(prefs.default_tone, "professional");
    assert_eq!(prefs.default_platforms, vec!["twitter".to_string()]);

    let update = PreferencesUpdate {
        auto_hashtags: Some(true),
        ..Default::default()
    };
    let prefs = client.update_preferences(&update).await.unwrap();
    assert!(prefs.auto_hashtags);
    assert_eq!(prefs.posting_timezone, "UTC");
}
