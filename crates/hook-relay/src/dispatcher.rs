//! Dispatcher
//!
//! Parses a webhook delivery and fans the resulting event out to every
//! formatter, queueing each produced line for the formatter's channel.

use crate::formatter::Formatter;
use async_trait::async_trait;
use hook_core::{EventKind, EventParser, ParseOutcome, TypedEvent};
use hook_irc::{OutboundMessage, Transport, TransportError};
use std::sync::Arc;

/// Where formatted lines go
#[async_trait]
pub trait OutboundSink: Send + Sync {
    /// Queue one message; may wait while the queue is full
    async fn send(&self, message: OutboundMessage) -> Result<(), TransportError>;
}

#[async_trait]
impl OutboundSink for Transport {
    async fn send(&self, message: OutboundMessage) -> Result<(), TransportError> {
        self.privmsg(message).await
    }
}

/// What became of one delivery
#[derive(Debug)]
pub enum DeliveryReport {
    /// An event was parsed and `messages` lines were queued
    Delivered { kind: EventKind, messages: usize },
    /// The delivery produced no event
    NotRelayed(ParseOutcome),
}

impl DeliveryReport {
    /// Number of lines queued for the delivery
    pub fn messages(&self) -> usize {
        match self {
            Self::Delivered { messages, .. } => *messages,
            Self::NotRelayed(_) => 0,
        }
    }
}

/// Fans events out to all destinations
pub struct Dispatcher {
    formatters: Vec<Box<dyn Formatter>>,
    sink: Arc<dyn OutboundSink>,
}

impl Dispatcher {
    pub fn new(formatters: Vec<Box<dyn Formatter>>, sink: Arc<dyn OutboundSink>) -> Self {
        Self { formatters, sink }
    }

    /// Parse a raw delivery and dispatch the event, if any
    ///
    /// Never fails: anything that does not produce an event is logged and
    /// reported.
    pub async fn handle_delivery(&self, discriminator: &str, payload: &[u8]) -> DeliveryReport {
        match EventParser::parse(discriminator, payload) {
            Ok(event) => {
                let messages = self.dispatch(&event).await;
                tracing::info!(event = %event, messages, "Event relayed");
                DeliveryReport::Delivered {
                    kind: event.kind(),
                    messages,
                }
            }
            Err(outcome) => {
                log_outcome(&outcome);
                DeliveryReport::NotRelayed(outcome)
            }
        }
    }

    /// Queue every line every formatter produces for the event
    ///
    /// Lines keep the order their formatter produced them in, and formatters
    /// run in destination order. Returns the number of lines queued.
    pub async fn dispatch(&self, event: &TypedEvent) -> usize {
        let mut queued = 0;

        for formatter in &self.formatters {
            let channel = &formatter.destination().channel;

            for line in formatter.format(event) {
                match self.sink.send(OutboundMessage::new(channel.clone(), line)).await {
                    Ok(()) => queued += 1,
                    Err(e) => {
                        tracing::warn!(channel = %channel, error = %e, "Cannot queue message, dropping the rest of the event");
                        return queued;
                    }
                }
            }
        }

        queued
    }
}

fn log_outcome(outcome: &ParseOutcome) {
    match outcome {
        ParseOutcome::Pinged => tracing::info!("pinged"),
        ParseOutcome::Ignored { discriminator } => {
            tracing::info!(discriminator = %discriminator, "Ignored event");
        }
        ParseOutcome::IgnoredAction { kind, action } => {
            tracing::info!(event = %kind, action = %action, "Ignored action");
        }
        ParseOutcome::Malformed { kind, source, .. } => {
            tracing::warn!(
                event = %kind,
                error = %source,
                payload = %outcome.payload_lossy().unwrap_or_default(),
                "Malformed payload"
            );
        }
    }
}
