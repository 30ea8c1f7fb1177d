use crate::redmine::Issue;

/// Chat link to an issue, e.g. `<https://host/issues/42|Issue #42>`.
pub fn issue_link(base_url: &str, issue_id: u64) -> String {
    format!("<{}/issues/{}|Issue #{}>", base_url, issue_id, issue_id)
}

pub fn format_issue_list(base_url: &str, requester: &str, issues: &[&Issue]) -> String {
    let mut output = format!(
        "I found {} open issues assigned to you, {}:\n",
        issues.len(),
        requester
    );

    for issue in issues {
        let project = issue
            .project
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("Unknown");

        output.push_str(&format!(
            "{} {} - {}\n",
            project,
            issue_link(base_url, issue.id),
            issue.subject
        ));
    }

    output
}

pub fn format_closed(base_url: &str, issue_id: u64) -> String {
    format!("Alrighty, I've closed {}.", issue_link(base_url, issue_id))
}

pub fn format_ready_to_test(base_url: &str, issue_id: u64) -> String {
    format!(
        "Alright, I've marked {} as ready to test.",
        issue_link(base_url, issue_id)
    )
}

pub fn close_note(bot_name: &str, requester: &str) -> String {
    format!("Closed by {} on behalf of {}.", bot_name, requester)
}

pub fn ready_to_test_note(bot_name: &str, requester: &str) -> String {
    format!(
        "Marked Ready to Test by {} on behalf of {}.",
        bot_name, requester
    )
}
