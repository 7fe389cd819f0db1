//! Relay Integration Tests
//!
//! Each test runs the relay in-process against a scripted chat server on
//! localhost and drives it through the webhook listener.
//!
//! Run with: cargo test -p integration-tests --test relay_tests

use std::time::{Duration, Instant};

use hook_common::AppError;
use hook_relay::ShutdownReason;
use integration_tests::*;
use tokio::sync::oneshot;

// ============================================================================
// Startup
// ============================================================================

#[tokio::test]
async fn test_init_lines_then_joins() {
    let peer = IrcPeer::bind().await.unwrap();
    let options = RelayOptions::default()
        .destinations(&[("elvish", "en"), ("#elvish-zh", "zh")])
        .init_lines(&["NICK elvish-bot", "USER elvish-bot 0 * :bot", ""]);

    let (_relay, mut conn) = TestRelay::start(&peer, options).await.unwrap();

    assert_eq!(
        conn.expect_lines(4).await.unwrap(),
        [
            "NICK elvish-bot",
            "USER elvish-bot 0 * :bot",
            "JOIN :#elvish",
            "JOIN :#elvish-zh",
        ]
    );
}

#[tokio::test]
async fn test_connection_refused_is_fatal() {
    // Grab a free port, then stop listening on it
    let server = IrcPeer::bind().await.unwrap().server().unwrap();
    let init_file = write_init_file(&[]).await.unwrap();
    let config =
        relay_config(&server, get_test_port(), &init_file, &RelayOptions::default()).unwrap();
    let (_quit_tx, quit_rx) = oneshot::channel();

    let err = hook_relay::run(config, quit_rx).await.unwrap_err();

    assert!(matches!(err, AppError::Connection(_)));
    assert!(err.is_startup_error());
}

#[tokio::test]
async fn test_missing_init_file_is_fatal() {
    let peer = IrcPeer::bind().await.unwrap();
    let config = relay_config(
        &peer.server().unwrap(),
        get_test_port(),
        std::path::Path::new("/nonexistent/hook-relay/init"),
        &RelayOptions::default(),
    )
    .unwrap();
    let (_quit_tx, quit_rx) = oneshot::channel();

    let err = hook_relay::run(config, quit_rx).await.unwrap_err();

    assert!(matches!(err, AppError::InitFile { .. }));
}

// ============================================================================
// Relaying
// ============================================================================

#[tokio::test]
async fn test_push_relayed_in_order_with_pacing() {
    let peer = IrcPeer::bind().await.unwrap();
    let (relay, mut conn) = TestRelay::start(&peer, RelayOptions::default().pacing_ms(100))
        .await
        .unwrap();
    assert_eq!(conn.next_line().await.unwrap(), "JOIN :#elvish");

    let push = push_event(
        "refs/heads/master",
        &[("Fix edit mode\n\nLong story", "Qi Xiao"), ("Add docs", "Someone")],
    );
    let response = relay.post_event("push", &push).await.unwrap();
    assert!(response.status().is_success());

    let first = conn.next_line().await.unwrap();
    let started = Instant::now();
    let rest = conn.expect_lines(2).await.unwrap();

    assert_eq!(
        first,
        format!("PRIVMSG #elvish :xiaq pushed 2 commits to branch master ({REPO_URL}/compare/1111111...2222222):")
    );
    assert_eq!(
        rest,
        [
            "PRIVMSG #elvish :  Fix edit mode (by Qi Xiao)",
            "PRIVMSG #elvish :  Add docs (by Someone)",
        ]
    );
    // Two paced gaps, with slack for scheduling jitter on the reading side
    assert!(started.elapsed() >= Duration::from_millis(150));
}

#[tokio::test]
async fn test_every_destination_gets_its_language() {
    let peer = IrcPeer::bind().await.unwrap();
    let options = RelayOptions::default().destinations(&[("elvish", "en"), ("elvish-zh", "zh")]);
    let (relay, mut conn) = TestRelay::start(&peer, options).await.unwrap();
    conn.expect_lines(2).await.unwrap();

    relay
        .post_event("pull_request", &pull_request_event("closed", true))
        .await
        .unwrap();

    assert_eq!(
        conn.expect_lines(2).await.unwrap(),
        [
            format!("PRIVMSG #elvish :carol merged pull request #7 Speed up parser ({REPO_URL}/pull/7)"),
            format!("PRIVMSG #elvish-zh :carol 合并了 PR #7 Speed up parser ({REPO_URL}/pull/7)"),
        ]
    );
}

#[tokio::test]
async fn test_comment_body_is_abbreviated() {
    let peer = IrcPeer::bind().await.unwrap();
    let (relay, mut conn) = TestRelay::start(&peer, RelayOptions::default()).await.unwrap();
    conn.next_line().await.unwrap();

    relay
        .post_event("issue_comment", &issue_comment_event(&"x".repeat(130)))
        .await
        .unwrap();

    assert_eq!(
        conn.expect_lines(2).await.unwrap(),
        [
            format!("PRIVMSG #elvish :bob commented on issue #42 Crash on startup ({REPO_URL}/issues/42):"),
            format!("PRIVMSG #elvish :  {} ...(10 bytes omitted)", "x".repeat(120)),
        ]
    );
}

#[tokio::test]
async fn test_unrelayed_deliveries_produce_no_output() {
    let peer = IrcPeer::bind().await.unwrap();
    let (relay, mut conn) = TestRelay::start(&peer, RelayOptions::default()).await.unwrap();
    conn.next_line().await.unwrap();

    for (event, body) in [
        ("ping", ping_event().to_string()),
        ("issues", issues_event("labeled").to_string()),
        ("pull_request", pull_request_event("synchronize", false).to_string()),
        ("watch", "{}".to_string()),
        ("push", "{ definitely not json".to_string()),
    ] {
        let response = relay.post_raw(event, body).await.unwrap();
        assert!(response.status().is_success(), "{event} should be acknowledged");
    }

    relay.post_event("issues", &issues_event("opened")).await.unwrap();

    // The first line after the join belongs to the only relayed event
    assert_eq!(
        conn.next_line().await.unwrap(),
        format!("PRIVMSG #elvish :alice opened issue #42 Crash on startup ({REPO_URL}/issues/42)")
    );
}

// ============================================================================
// Keepalive
// ============================================================================

#[tokio::test]
async fn test_ping_answered_before_paced_backlog() {
    let peer = IrcPeer::bind().await.unwrap();
    let (relay, mut conn) = TestRelay::start(&peer, RelayOptions::default().pacing_ms(1_000))
        .await
        .unwrap();
    assert_eq!(conn.next_line().await.unwrap(), "JOIN :#elvish");

    let push = push_event("refs/heads/master", &[("a", "x"), ("b", "x"), ("c", "x")]);
    relay.post_event("push", &push).await.unwrap();
    assert!(conn.next_line().await.unwrap().starts_with("PRIVMSG #elvish :xiaq pushed 3 commits"));

    conn.send_line(":irc.example.net PING :irc.example.net").await.unwrap();

    assert_eq!(conn.next_line().await.unwrap(), "PONG :irc.example.net");
    assert_eq!(conn.next_line().await.unwrap(), "PRIVMSG #elvish :  a (by x)");
}

// ============================================================================
// Shutdown
// ============================================================================

#[tokio::test]
async fn test_server_hangup_stops_the_relay() {
    let peer = IrcPeer::bind().await.unwrap();
    let (relay, conn) = TestRelay::start(&peer, RelayOptions::default()).await.unwrap();

    drop(conn);

    assert_eq!(relay.finish().await.unwrap(), ShutdownReason::ServerDisconnected);
}

#[tokio::test]
async fn test_quit_then_server_hangs_up() {
    let peer = IrcPeer::bind().await.unwrap();
    let (mut relay, mut conn) = TestRelay::start(&peer, RelayOptions::default()).await.unwrap();

    relay.request_quit();
    conn.read_until("QUIT").await.unwrap();
    drop(conn);

    assert_eq!(relay.finish().await.unwrap(), ShutdownReason::DisconnectedAfterQuit);
}

#[tokio::test]
async fn test_quit_times_out_when_server_stays() {
    let peer = IrcPeer::bind().await.unwrap();
    let options = RelayOptions::default().quit_timeout_ms(200);
    let (mut relay, mut conn) = TestRelay::start(&peer, options).await.unwrap();

    relay.request_quit();
    conn.read_until("QUIT").await.unwrap();

    assert_eq!(relay.finish().await.unwrap(), ShutdownReason::QuitTimedOut);
    drop(conn);
}

#[tokio::test]
async fn test_quit_does_not_wait_for_blocked_delivery() {
    let peer = IrcPeer::bind().await.unwrap();
    let options = RelayOptions::default()
        .pacing_ms(60_000)
        .queue_capacity(1)
        .quit_timeout_ms(1_000);
    let (mut relay, mut conn) = TestRelay::start(&peer, options).await.unwrap();
    assert_eq!(conn.next_line().await.unwrap(), "JOIN :#elvish");

    // Eleven lines against a one-slot queue paced a minute apart
    let commits: Vec<(&str, &str)> = (0..10).map(|_| ("change", "Qi Xiao")).collect();
    let delivery = relay.spawn_post_event("push", &push_event("refs/heads/master", &commits));
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(!delivery.is_finished());

    let started = Instant::now();
    relay.request_quit();
    conn.read_until("QUIT").await.unwrap();

    assert_eq!(relay.finish().await.unwrap(), ShutdownReason::QuitTimedOut);
    assert!(started.elapsed() < Duration::from_secs(5));
    delivery.abort();
    drop(conn);
}
