//! English formatter

use super::text::{branch_name, excerpt, url_suffix, Excerpt};
use super::Formatter;
use hook_core::{Destination, IssueCommented, IssuesChanged, PullRequestChanged, Push};
use std::borrow::Cow;

pub struct EnglishFormatter {
    destination: Destination,
}

impl EnglishFormatter {
    #[must_use]
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }
}

impl Formatter for EnglishFormatter {
    fn destination(&self) -> &Destination {
        &self.destination
    }

    fn on_push(&self, event: &Push) -> Vec<String> {
        let header = format!(
            "{} pushed {} to {}{}:",
            event.actor,
            commit_count(event.commits.len()),
            humanize_ref(&event.git_ref),
            url_suffix(event.compare_url.as_deref()),
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
            event.action.as_str(),
            event.issue.number,
            event.issue.title,
            url_suffix(event.issue.url.as_deref()),
        )]
    }

    fn on_issue_commented(&self, event: &IssueCommented) -> Vec<String> {
        vec![
            format!(
                "{} commented on issue #{} {}{}:",
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
            "{} {} pull request #{} {}{}",
            event.actor,
            event.action.as_str(),
            event.pull_request.number,
            event.pull_request.title,
            url_suffix(event.pull_request.url.as_deref()),
        )]
    }
}

fn commit_count(n: usize) -> String {
    if n == 1 {
        "1 commit".to_string()
    } else {
        format!("{n} commits")
    }
}

fn humanize_ref(git_ref: &str) -> Cow<'_, str> {
    match branch_name(git_ref) {
        Some(branch) => Cow::Owned(format!("branch {branch}")),
        None => Cow::Borrowed(git_ref),
    }
}

fn abbreviate(body: &str) -> Cow<'_, str> {
    match excerpt(body) {
        Excerpt::Whole(body) => Cow::Borrowed(body),
        Excerpt::Soft { kept, omitted } => Cow::Owned(format!("{kept} ... ({omitted} bytes omitted)")),
        Excerpt::Hard { kept, omitted } => Cow::Owned(format!("{kept} ...({omitted} bytes omitted)")),
    }
}
