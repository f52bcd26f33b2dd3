//! Human-readable summary renderer for project diffs.

use crate::diff::model::{ChangeType, ProjectDiff};
use crate::diff::summary::{generate_diff_summary, ChangeCounts};

/// Render a Markdown summary of a [`ProjectDiff`].
///
/// Meant for review and commit displays. It is informational only and
/// carries no data beyond what the structured diff already holds.
pub fn render_human_summary(diff: &ProjectDiff) -> String {
    let mut out = String::new();
    let summary = generate_diff_summary(diff);

    // Header
    out.push_str("## Project Diff\n\n");
    out.push_str(&format!(
        "| | Version | Timestamp |\n\
         |---|---|---|\n\
         | From | `{}` | {} |\n\
         | To | `{}` | {} |\n\n",
        diff.from_version, diff.from_timestamp, diff.to_version, diff.to_timestamp,
    ));

    if diff.is_empty() && !diff.has_conflicts {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str(&format!("**Total changes**: {}\n\n", summary.total_changes));

    // Streams
    if !diff.stream_diffs.is_empty() {
        push_section_header(&mut out, "Stream Changes", &summary.stream_changes);
        for d in &diff.stream_diffs {
            match (d.change_type, &d.event_changes) {
                (ChangeType::Modified, Some(ec)) => out.push_str(&format!(
                    "- **modified** `{}` (events: +{} -{} ~{})\n",
                    d.stream_id, ec.added, ec.removed, ec.modified
                )),
                (change_type, _) => {
                    out.push_str(&format!("- **{}** `{}`\n", change_type.as_str(), d.stream_id))
                }
            }
        }
        out.push('\n');
    }

    // Clips
    if !diff.clip_diffs.is_empty() {
        push_section_header(&mut out, "Clip Changes", &summary.clip_changes);
        for d in &diff.clip_diffs {
            match &d.changed_fields {
                Some(fields) if !fields.is_empty() => {
                    let names: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
                    out.push_str(&format!(
                        "- **{}** `{}` ({})\n",
                        d.change_type.as_str(),
                        d.clip_id,
                        names.join(", ")
                    ));
                }
                _ => out.push_str(&format!("- **{}** `{}`\n", d.change_type.as_str(), d.clip_id)),
            }
        }
        out.push('\n');
    }

    // Routing
    if !diff.routing_diffs.is_empty() {
        push_section_header(&mut out, "Routing Changes", &summary.routing_changes);
        for d in &diff.routing_diffs {
            let endpoints = d
                .new_connection
                .as_ref()
                .or(d.old_connection.as_ref())
                .map(|c| format!(" {} → {} ({})", c.source_id, c.target_id, c.route_type))
                .unwrap_or_default();
            out.push_str(&format!(
                "- **{}** `{}`{}\n",
                d.change_type.as_str(),
                d.connection_id,
                endpoints
            ));
        }
        out.push('\n');
    }

    // Conflicts
    if diff.has_conflicts {
        out.push_str(&format!("### ⚠ Merge Conflicts ({})\n\n", diff.conflicts.len()));
        for c in &diff.conflicts {
            out.push_str(&format!(
                "- `{}` [{}]: {}\n",
                c.id,
                c.conflict_type.as_str(),
                c.description
            ));
        }
        out.push('\n');
    }

    out
}

fn push_section_header(out: &mut String, title: &str, counts: &ChangeCounts) {
    out.push_str(&format!(
        "### {title}\n\n_{} added, {} removed, {} modified_\n\n",
        counts.added, counts.removed, counts.modified
    ));
}
