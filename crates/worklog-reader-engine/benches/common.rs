// Shared by the bench targets in this directory; each target only uses part of it
#[allow(dead_code)]
pub fn generate_worklog(logs: usize) -> String {
    let mut content = String::from(
        "# Project Worklog\n\n## Current Understanding\n\nMode: **execution**\n\n#### Open Questions\n\n## Key Events Index\n\n| Log | Type | Summary |\n|-----|------|---------|\n| LOG-001 | PLAN | Start |\n\n---\n\n",
    );

    for i in 1..=logs {
        let kind = ["DECISION", "EXEC", "DISCOVERY", "PLAN"][i % 4];
        content.push_str(&format!(
            "### [LOG-{i:03}] - [{kind}] - Entry number {i} - Task: BENCH-{i}\n\n"
        ));
        content.push_str("#### Context\n\nSome *context* with `code` and a [link](https://example.com).\n\n");
        content.push_str("##### Detail\n\n```rust\nfn step() -> usize {\n    42\n}\n```\n\n");
    }

    content
}
