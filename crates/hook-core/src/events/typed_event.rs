//! Typed events
//!
//! The closed set of events the formatters render. An event is built once per
//! delivery from a validated payload and only ever handed out by reference.

use super::event_kind::EventKind;
use super::payloads::{CommitPayload, CommentPayload, IssuePayload, PullRequestPayload};
use std::fmt;

/// A single pushed commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub author: String,
    pub message: String,
}

impl Commit {
    /// First line of the commit message, the only part that is ever rendered
    pub fn first_line(&self) -> &str {
        self.message.split('\n').next().unwrap_or_default()
    }
}

/// Commits pushed to a ref
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Push {
    pub actor: String,
    pub git_ref: String,
    pub compare_url: Option<String>,
    pub commits: Vec<Commit>,
}

/// Issue identity shared by issue and comment events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    pub number: u64,
    pub title: String,
    pub url: Option<String>,
}

/// Issue actions that are relayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueAction {
    Opened,
    Closed,
}

impl IssueAction {
    /// Map a payload action onto the allow-list
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "opened" => Some(Self::Opened),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuesChanged {
    pub actor: String,
    pub action: IssueAction,
    pub issue: IssueRef,
}

/// Comment actions that are relayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAction {
    Created,
}

impl CommentAction {
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "created" => Some(Self::Created),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRef {
    pub body: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCommented {
    pub actor: String,
    pub action: CommentAction,
    pub issue: IssueRef,
    pub comment: CommentRef,
}

/// Pull request actions that are relayed
///
/// `Merged` never appears in payloads; it is a `closed` action whose pull
/// request has the merged flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestAction {
    Opened,
    Closed,
    Merged,
    Reopened,
}

impl PullRequestAction {
    /// Map a payload action onto the allow-list, relabelling merged closes
    #[must_use]
    pub fn resolve(action: &str, merged: bool) -> Option<Self> {
        match action {
            "opened" => Some(Self::Opened),
            "closed" if merged => Some(Self::Merged),
            "closed" => Some(Self::Closed),
            "reopened" => Some(Self::Reopened),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Merged => "merged",
            Self::Reopened => "reopened",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub number: u64,
    pub title: String,
    pub merged: bool,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestChanged {
    pub actor: String,
    pub action: PullRequestAction,
    pub pull_request: PullRequestRef,
}

/// Events that produce chat output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedEvent {
    Push(Push),
    IssuesChanged(IssuesChanged),
    IssueCommented(IssueCommented),
    PullRequestChanged(PullRequestChanged),
}

impl TypedEvent {
    /// The discriminator this event was parsed from
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Push(_) => EventKind::Push,
            Self::IssuesChanged(_) => EventKind::Issues,
            Self::IssueCommented(_) => EventKind::IssueComment,
            Self::PullRequestChanged(_) => EventKind::PullRequest,
        }
    }

    /// Login of the account that triggered the event
    pub fn actor(&self) -> &str {
        match self {
            Self::Push(e) => &e.actor,
            Self::IssuesChanged(e) => &e.actor,
            Self::IssueCommented(e) => &e.actor,
            Self::PullRequestChanged(e) => &e.actor,
        }
    }
}

impl fmt::Display for TypedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.kind(), self.actor())
    }
}

fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.is_empty())
}

impl From<CommitPayload> for Commit {
    fn from(payload: CommitPayload) -> Self {
        Self {
            author: payload.author.name,
            message: payload.message,
        }
    }
}

impl From<IssuePayload> for IssueRef {
    fn from(payload: IssuePayload) -> Self {
        Self {
            number: payload.number,
            title: payload.title,
            url: non_empty(payload.html_url),
        }
    }
}

impl From<CommentPayload> for CommentRef {
    fn from(payload: CommentPayload) -> Self {
        Self {
            body: payload.body.unwrap_or_default(),
            url: non_empty(payload.html_url),
        }
    }
}

impl From<PullRequestPayload> for PullRequestRef {
    fn from(payload: PullRequestPayload) -> Self {
        Self {
            number: payload.number,
            title: payload.title,
            merged: payload.merged,
            url: non_empty(payload.html_url),
        }
    }
}

pub(crate) fn compare_url(compare: Option<String>) -> Option<String> {
    non_empty(compare)
}
