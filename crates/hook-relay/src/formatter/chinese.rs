//! Chinese formatter

use super::text::{branch_name, excerpt, url_suffix, Excerpt};
use super::Formatter;
use hook_core::{
    Destination, IssueAction, IssueCommented, IssuesChanged, PullRequestAction,
    PullRequestChanged, Push,
};
use std::borrow::Cow;

pub struct ChineseFormatter {
    destination: Destination,
}

impl ChineseFormatter {
    #[must_use]
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }
}

impl Formatter for ChineseFormatter {
    fn destination(&self) -> &Destination {
        &self.destination
    }

    fn on_push(&self, event: &Push) -> Vec<String> {
        let header = format!(
            "{} 向 {}推了 {} 个 commit：",
            event.actor,
            humanize_ref(&event.git_ref),
            event.commits.len(),
        );

        std::iter::once(header)
            .chain(
                event
                    .commits
                    .iter()
                    .map(|commit| format!("  {} (by {})", commit.first_line(), commit.author)),
            )
            .collect()
    }

    fn on_issues_changed(&self, event: &IssuesChanged) -> Vec<String> {
        vec![format!(
            "{} {} issue #{} {}{}",
            event.actor,
            issue_verb(event.action),
            event.issue.number,
            event.issue.title,
            url_suffix(event.issue.url.as_deref()),
        )]
    }

    fn on_issue_commented(&self, event: &IssueCommented) -> Vec<String> {
        vec![
            format!(
                "{} 评论了 issue #{} {}{}:",
                event.actor,
                event.issue.number,
                event.issue.title,
                url_suffix(event.issue.url.as_deref()),
            ),
            format!("  {}", abbreviate(&event.comment.body)),
        ]
    }

    fn on_pull_request_changed(&self, event: &PullRequestChanged) -> Vec<String> {
        vec![format!(
            "{} {} PR #{} {}{}",
            event.actor,
            pull_request_verb(event.action),
            event.pull_request.number,
            event.pull_request.title,
            url_suffix(event.pull_request.url.as_deref()),
        )]
    }
}

const fn issue_verb(action: IssueAction) -> &'static str {
    match action {
        IssueAction::Opened => "提出了",
        IssueAction::Closed => "关闭了",
    }
}

const fn pull_request_verb(action: PullRequestAction) -> &'static str {
    match action {
        PullRequestAction::Opened => "提出了",
        PullRequestAction::Closed => "关闭了",
        PullRequestAction::Merged => "合并了",
        PullRequestAction::Reopened => "重开了",
    }
}

fn humanize_ref(git_ref: &str) -> Cow<'_, str> {
    match branch_name(git_ref) {
        Some(branch) => Cow::Owned(format!("{branch} 分支")),
        None => Cow::Borrowed(git_ref),
    }
}

fn abbreviate(body: &str) -> Cow<'_, str> {
    match excerpt(body) {
        Excerpt::Whole(body) => Cow::Borrowed(body),
        Excerpt::Soft { kept, omitted } => Cow::Owned(format!("{kept} ... (略去 {omitted} 字节)")),
        Excerpt::Hard { kept, omitted } => Cow::Owned(format!("{kept}... (略去 {omitted} 字节)")),
    }
}
