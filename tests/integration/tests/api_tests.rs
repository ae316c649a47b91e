//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, smtp_configured, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_signup() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupBody::unique();

    let response = server.post("/signup", &request).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Signup successful");
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupBody::unique();

    server.post("/signup", &request).await.unwrap();

    // Duplicates report plain bad request, not conflict
    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupBody::unique();
    server.post("/signup", &request).await.unwrap();

    let mut second = SignupBody::unique();
    second.username = request.username.clone();
    let response = server.post("/signup", &second).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_signup_invalid_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SignupBody::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_check_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupBody::unique();

    let response = server
        .get(&format!("/allusers/{}", request.username))
        .await
        .unwrap();
    let body: ExistsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body.exists);

    server.post("/signup", &request).await.unwrap();

    let response = server
        .get(&format!("/allusers/{}", request.username))
        .await
        .unwrap();
    let body: ExistsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.exists);
}

// ============================================================================
// Game Tests
// ============================================================================

#[tokio::test]
async fn test_start_and_end_game() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = StartGameBody::unique();

    let response = server.post("/start_game", &request).await.unwrap();
    let game: GameCodeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(game.code.len(), 6);

    let end = EndGameBody {
        code: game.code.clone(),
        show_creatures: None,
    };
    let response = server.post("/end_game", &end).await.unwrap();
    let body: GameEndedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Game ended");
    assert!(body.creatures.is_none());

    // Ending again succeeds; the status write is an overwrite
    let response = server.post("/end_game", &end).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_end_unknown_game() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let end = EndGameBody {
        code: "ZZZZZZ".to_string(),
        show_creatures: None,
    };

    let response = server.post("/end_game", &end).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_end_game_with_rosters() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = StartGameBody::unique();

    server
        .post(
            "/creatures/add",
            &CreatureBody {
                username: request.user1.clone(),
                creature: "Blazuma".to_string(),
            },
        )
        .await
        .unwrap();

    let response = server.post("/start_game", &request).await.unwrap();
    let game: GameCodeBody = assert_json(response, StatusCode::OK).await.unwrap();

    let end = EndGameBody {
        code: game.code,
        show_creatures: Some(true),
    };
    let response = server.post("/end_game", &end).await.unwrap();
    let body: GameEndedBody = assert_json(response, StatusCode::OK).await.unwrap();

    let creatures = body.creatures.expect("rosters should be present");
    assert_eq!(creatures[&request.user1].len(), 1);
    assert_eq!(creatures[&request.user1][0].name, "Blazuma");
    assert!(creatures[&request.user2].is_empty());
}

// ============================================================================
// Roster Tests
// ============================================================================

#[tokio::test]
async fn test_roster_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let username = format!("trainer{}", unique_suffix());

    // Empty roster is an empty list, not an error
    let response = server.get(&format!("/creatures/{username}")).await.unwrap();
    let roster: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(roster.creatures.is_empty());

    // Add two creatures
    for name in ["Blazuma", "Aquarion"] {
        let response = server
            .post(
                "/creatures/add",
                &CreatureBody {
                    username: username.clone(),
                    creature: name.to_string(),
                },
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get(&format!("/creatures/{username}")).await.unwrap();
    let roster: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roster.creatures.len(), 2);
    assert_eq!(roster.creatures[0].name, "Blazuma");
    assert_eq!(roster.creatures[0].level, 1);
    assert_eq!(roster.creatures[0].health, 100);
    assert_eq!(roster.creatures[0].power, 10);

    // Update a stat on the first match
    let response = server
        .post(
            "/creatures/data",
            &CreatureDataBody {
                username: username.clone(),
                creature: "Blazuma".to_string(),
                key: "level".to_string(),
                value: 12,
            },
        )
        .await
        .unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "level updated for Blazuma");

    let response = server.get(&format!("/creatures/{username}")).await.unwrap();
    let roster: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roster.creatures[0].level, 12);
    assert_eq!(roster.creatures[1].level, 1);

    // Remove one creature
    let response = server
        .post(
            "/creatures/remove",
            &CreatureBody {
                username: username.clone(),
                creature: "Blazuma".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/creatures/{username}")).await.unwrap();
    let roster: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roster.creatures.len(), 1);
    assert_eq!(roster.creatures[0].name, "Aquarion");
}

#[tokio::test]
async fn test_update_unknown_stat_field() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/creatures/data",
            &CreatureDataBody {
                username: format!("trainer{}", unique_suffix()),
                creature: "Blazuma".to_string(),
                key: "name".to_string(),
                value: 1,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Verification Tests
// ============================================================================

#[tokio::test]
async fn test_get_code_unknown_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = GetCodeBody {
        email: format!("nobody{}@example.com", unique_suffix()),
    };

    let response = server.post("/codes", &request).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_send_verification_without_smtp_config() {
    if !check_test_env() {
        return;
    }
    if smtp_configured() {
        eprintln!("Skipping test: SMTP credentials configured");
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SendVerificationBody {
        email: format!("trainer{}@example.com", unique_suffix()),
        username: None,
    };

    let response = server
        .post("/send-verification-email", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_send_verification_invalid_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SendVerificationBody {
        email: "not-an-email".to_string(),
        username: None,
    };

    let response = server
        .post("/send-verification-email", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}
