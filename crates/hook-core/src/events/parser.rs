//! Event parser
//!
//! Turns a discriminator and a raw payload into a [`TypedEvent`]. Everything
//! that does not end up as an event is reported as a [`ParseOutcome`] so the
//! caller can log it and move on.

use super::event_kind::EventKind;
use super::payloads::{
    IssueCommentPayload, IssuesPayload, PullRequestEventPayload, PushPayload,
};
use super::typed_event::{
    compare_url, CommentAction, IssueAction, IssueCommented, IssuesChanged, PullRequestAction,
    PullRequestChanged, Push, TypedEvent,
};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use thiserror::Error;

/// Why a delivery did not produce an event
#[derive(Debug, Error)]
pub enum ParseOutcome {
    /// The liveness check was acknowledged
    #[error("pinged")]
    Pinged,

    /// The discriminator is not one the relay handles
    #[error("ignored event {discriminator}")]
    Ignored { discriminator: String },

    /// The payload parsed, but its action is not relayed
    #[error("ignored {kind} event being {action}")]
    IgnoredAction { kind: EventKind, action: String },

    /// The payload does not have the shape expected for its discriminator
    #[error("cannot decode {kind} event: {source}")]
    Malformed {
        kind: EventKind,
        payload: Vec<u8>,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseOutcome {
    /// Whether the outcome is one of the deliberate "not relayed" cases
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. } | Self::IgnoredAction { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Raw payload of a malformed delivery, decoded for logging
    pub fn payload_lossy(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Malformed { payload, .. } => Some(String::from_utf8_lossy(payload)),
            _ => None,
        }
    }
}

/// Stateless webhook payload parser
pub struct EventParser;

impl EventParser {
    /// Parse a delivery into a typed event
    pub fn parse(discriminator: &str, raw: &[u8]) -> Result<TypedEvent, ParseOutcome> {
        let Some(kind) = EventKind::from_discriminator(discriminator) else {
            return Err(ParseOutcome::Ignored {
                discriminator: discriminator.to_string(),
            });
        };

        match kind {
            EventKind::Ping => Err(ParseOutcome::Pinged),
            EventKind::Push => {
                let payload: PushPayload = decode(kind, raw)?;
                Ok(TypedEvent::Push(Push {
                    actor: payload.sender.login,
                    git_ref: payload.git_ref,
                    compare_url: compare_url(payload.compare),
                    commits: payload.commits.into_iter().map(Into::into).collect(),
                }))
            }
            EventKind::Issues => {
                let payload: IssuesPayload = decode(kind, raw)?;
                let action = IssueAction::from_action(&payload.action)
                    .ok_or_else(|| ignored_action(kind, payload.action))?;
                Ok(TypedEvent::IssuesChanged(IssuesChanged {
                    actor: payload.sender.login,
                    action,
                    issue: payload.issue.into(),
                }))
            }
            EventKind::IssueComment => {
                let payload: IssueCommentPayload = decode(kind, raw)?;
                let action = CommentAction::from_action(&payload.action)
                    .ok_or_else(|| ignored_action(kind, payload.action))?;
                Ok(TypedEvent::IssueCommented(IssueCommented {
                    actor: payload.sender.login,
                    action,
                    issue: payload.issue.into(),
                    comment: payload.comment.into(),
                }))
            }
            EventKind::PullRequest => {
                let payload: PullRequestEventPayload = decode(kind, raw)?;
                let action =
                    PullRequestAction::resolve(&payload.action, payload.pull_request.merged)
                        .ok_or_else(|| ignored_action(kind, payload.action))?;
                Ok(TypedEvent::PullRequestChanged(PullRequestChanged {
                    actor: payload.sender.login,
                    action,
                    pull_request: payload.pull_request.into(),
                }))
            }
        }
    }
}

fn decode<T: DeserializeOwned>(kind: EventKind, raw: &[u8]) -> Result<T, ParseOutcome> {
    serde_json::from_slice(raw).map_err(|source| ParseOutcome::Malformed {
        kind,
        payload: raw.to_vec(),
        source,
    })
}

fn ignored_action(kind: EventKind, action: String) -> ParseOutcome {
    ParseOutcome::IgnoredAction { kind, action }
}
