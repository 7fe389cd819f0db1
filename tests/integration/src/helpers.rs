//! Test helpers for integration tests
//!
//! Provides a scripted chat-server peer over plain TCP and a harness that
//! runs the relay in-process against it.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU16, AtomicU64, Ordering};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use hook_common::{AppConfig, AppError};
use hook_relay::ShutdownReason;
use reqwest::{Client, Response};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Counter for unique webhook ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19100);

/// Counter for unique init file names
static FILE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// How long to wait for a single line before failing
pub const LINE_TIMEOUT: Duration = Duration::from_secs(10);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Listening side of the scripted chat server
pub struct IrcPeer {
    listener: TcpListener,
}

impl IrcPeer {
    pub async fn bind() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Ok(Self { listener })
    }

    /// `host:port` the relay should connect to
    pub fn server(&self) -> Result<String> {
        Ok(self.listener.local_addr()?.to_string())
    }

    /// Accept the relay's connection
    pub async fn accept(&self) -> Result<PeerConnection> {
        let (stream, _) = tokio::time::timeout(LINE_TIMEOUT, self.listener.accept())
            .await
            .context("relay never connected")??;
        let (read_half, writer) = stream.into_split();

        Ok(PeerConnection {
            lines: BufReader::new(read_half).lines(),
            writer,
        })
    }
}

/// One accepted connection, seen from the server side
pub struct PeerConnection {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl PeerConnection {
    /// Next line the relay sent, without its terminator
    pub async fn next_line(&mut self) -> Result<String> {
        match tokio::time::timeout(LINE_TIMEOUT, self.lines.next_line()).await {
            Ok(Ok(Some(line))) => Ok(line),
            Ok(Ok(None)) => bail!("relay closed the connection"),
            Ok(Err(e)) => Err(e.into()),
            Err(_) => bail!("no line within {LINE_TIMEOUT:?}"),
        }
    }

    /// The next `n` lines
    pub async fn expect_lines(&mut self, n: usize) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(n);
        for _ in 0..n {
            lines.push(self.next_line().await?);
        }
        Ok(lines)
    }

    /// Read until `wanted` shows up, returning everything read before it
    pub async fn read_until(&mut self, wanted: &str) -> Result<Vec<String>> {
        let mut before = Vec::new();
        loop {
            let line = self.next_line().await?;
            if line == wanted {
                return Ok(before);
            }
            before.push(line);
        }
    }

    /// Send one line to the relay
    pub async fn send_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(format!("{line}\r\n").as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

/// Relay settings a test cares about
#[derive(Debug, Clone)]
pub struct RelayOptions {
    /// (channel, language) pairs
    pub destinations: Vec<(String, String)>,
    pub init_lines: Vec<String>,
    pub pacing_ms: u64,
    pub queue_capacity: usize,
    pub quit_timeout_ms: u64,
}

impl Default for RelayOptions {
    fn default() -> Self {
        Self {
            destinations: vec![("elvish".to_string(), "en".to_string())],
            init_lines: Vec::new(),
            pacing_ms: 50,
            queue_capacity: 1024,
            quit_timeout_ms: 1_000,
        }
    }
}

impl RelayOptions {
    pub fn destinations(mut self, pairs: &[(&str, &str)]) -> Self {
        self.destinations = pairs
            .iter()
            .map(|(c, l)| ((*c).to_string(), (*l).to_string()))
            .collect();
        self
    }

    pub fn init_lines(mut self, lines: &[&str]) -> Self {
        self.init_lines = lines.iter().map(|l| (*l).to_string()).collect();
        self
    }

    pub fn pacing_ms(mut self, pacing_ms: u64) -> Self {
        self.pacing_ms = pacing_ms;
        self
    }

    pub fn queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn quit_timeout_ms(mut self, quit_timeout_ms: u64) -> Self {
        self.quit_timeout_ms = quit_timeout_ms;
        self
    }
}

/// Write an init file with one command per line
pub async fn write_init_file(lines: &[String]) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(format!(
        "hook-relay-init-{}-{}",
        std::process::id(),
        FILE_COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    // Blank lines must be skipped by the relay
    tokio::fs::write(&path, format!("{}\n\n", lines.join("\r\n"))).await?;
    Ok(path)
}

/// Build a relay configuration pointing at a local plain-TCP server
pub fn relay_config(
    server: &str,
    webhook_port: u16,
    init_file: &std::path::Path,
    options: &RelayOptions,
) -> Result<AppConfig> {
    let channels: Vec<&str> = options.destinations.iter().map(|(c, _)| c.as_str()).collect();
    let languages: Vec<&str> = options.destinations.iter().map(|(_, l)| l.as_str()).collect();

    let vars = [
        ("WEBHOOK_HOST", "127.0.0.1".to_string()),
        ("WEBHOOK_PORT", webhook_port.to_string()),
        ("IRC_SERVER", server.to_string()),
        ("IRC_TLS", "false".to_string()),
        ("IRC_PACING_MS", options.pacing_ms.to_string()),
        ("IRC_QUEUE_CAPACITY", options.queue_capacity.to_string()),
        ("IRC_QUIT_TIMEOUT_MS", options.quit_timeout_ms.to_string()),
        ("RELAY_INIT_FILE", init_file.display().to_string()),
        ("RELAY_CHANNELS", channels.join(",")),
        ("RELAY_LANGUAGES", languages.join(",")),
    ];

    AppConfig::from_lookup(|key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.clone())
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Relay running in-process against an [`IrcPeer`]
pub struct TestRelay {
    pub webhook: SocketAddr,
    pub client: Client,
    quit: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<ShutdownReason, AppError>>,
    init_file: PathBuf,
}

impl TestRelay {
    /// Start the relay and accept its connection on `peer`
    ///
    /// Returns once the webhook listener answers.
    pub async fn start(peer: &IrcPeer, options: RelayOptions) -> Result<(Self, PeerConnection)> {
        let port = get_test_port();
        let init_file = write_init_file(&options.init_lines).await?;
        let config = relay_config(&peer.server()?, port, &init_file, &options)?;

        let (quit_tx, quit_rx) = oneshot::channel();
        let handle = tokio::spawn(hook_relay::run(config, quit_rx));
        let connection = peer.accept().await?;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(0)
            .build()?;

        let relay = Self {
            webhook: SocketAddr::from(([127, 0, 0, 1], port)),
            client,
            quit: Some(quit_tx),
            handle,
            init_file,
        };
        relay.wait_ready().await?;

        Ok((relay, connection))
    }

    /// Get base URL for the webhook listener
    pub fn base_url(&self) -> String {
        format!("http://{}", self.webhook)
    }

    async fn wait_ready(&self) -> Result<()> {
        for _ in 0..100 {
            if let Ok(response) = self.client.get(format!("{}/health", self.base_url())).send().await {
                if response.status().is_success() {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        bail!("webhook listener never came up")
    }

    /// Deliver a webhook event
    pub async fn post_event(&self, event: &str, body: &Value) -> Result<Response> {
        self.post_raw(event, body.to_string()).await
    }

    /// Deliver a webhook event with an arbitrary body
    pub async fn post_raw(&self, event: &str, body: impl Into<reqwest::Body>) -> Result<Response> {
        Ok(self
            .client
            .post(format!("{}/", self.base_url()))
            .header("X-GitHub-Event", event)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Deliver a webhook event from a background task
    ///
    /// For deliveries expected to stay in flight.
    pub fn spawn_post_event(&self, event: &str, body: &Value) -> JoinHandle<Result<Response>> {
        let request = self
            .client
            .post(format!("{}/", self.base_url()))
            .header("X-GitHub-Event", event)
            .header("Content-Type", "application/json")
            .body(body.to_string());

        tokio::spawn(async move { Ok(request.send().await?) })
    }

    /// Ask the relay to quit, as a signal would
    pub fn request_quit(&mut self) {
        if let Some(quit) = self.quit.take() {
            let _ = quit.send(());
        }
    }

    /// Wait for the relay to stop and return why it stopped
    pub async fn finish(self) -> Result<ShutdownReason> {
        let result = tokio::time::timeout(Duration::from_secs(15), self.handle)
            .await
            .context("relay did not stop")?;
        let _ = tokio::fs::remove_file(&self.init_file).await;

        Ok(result??)
    }
}
