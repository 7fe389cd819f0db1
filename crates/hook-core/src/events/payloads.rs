//! Raw webhook payload shapes
//!
//! Each struct only declares the fields the relay reads; serde skips everything
//! else in the document.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Sender {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GitAuthor {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitPayload {
    pub author: GitAuthor,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssuePayload {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentPayload {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PullRequestPayload {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PushPayload {
    pub sender: Sender,
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub compare: Option<String>,
    #[serde(default)]
    pub commits: Vec<CommitPayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssuesPayload {
    pub sender: Sender,
    pub action: String,
    pub issue: IssuePayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueCommentPayload {
    pub sender: Sender,
    pub action: String,
    pub issue: IssuePayload,
    pub comment: CommentPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PullRequestEventPayload {
    pub sender: Sender,
    pub action: String,
    pub pull_request: PullRequestPayload,
}
