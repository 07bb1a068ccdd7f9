//! Stateless text rendering of the result list.

use super::view::{LoadState, ViewState};
use crate::config::AppearanceConfig;
use crate::core::CommandEntry;

/// Knobs for [`render`] that come from configuration, not from view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Examples shown while an entry is collapsed
    pub collapsed_examples: usize,
    /// Mark the selected result with `>`
    pub show_selection: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            collapsed_examples: 2,
            show_selection: false,
        }
    }
}

impl From<&AppearanceConfig> for RenderOptions {
    fn from(appearance: &AppearanceConfig) -> Self {
        Self {
            collapsed_examples: appearance.collapsed_examples,
            ..Self::default()
        }
    }
}

/// Render the whole list view as text.
pub fn render(
    load: &LoadState,
    results: &[&CommandEntry],
    view: &ViewState,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();

    match load {
        LoadState::Loading => {
            push_line(&mut out, "Loading commands...");
        }
        LoadState::Failed(message) => {
            push_line(&mut out, "Error loading commands");
            push_line(&mut out, message);
        }
        LoadState::Ready { total } => {
            let query = view.query.trim();
            if results.is_empty() && query.is_empty() {
                push_line(&mut out, "Start typing to search commands...");
                push_line(&mut out, &format!("Search through {} available commands", total));
            } else if results.is_empty() {
                push_line(&mut out, &format!("No commands found matching \"{}\"", query));
                push_line(&mut out, "Try a different search term or browse all commands");
            } else {
                push_line(&mut out, &format!("{} found", results.len()));
                for (index, command) in results.iter().enumerate() {
                    out.push('\n');
                    let selected = options.show_selection && index == view.selected_index;
                    render_entry(
                        &mut out,
                        command,
                        view.is_expanded(&command.name, index),
                        selected,
                        options,
                    );
                }
            }
        }
    }

    out
}

/// Render a single entry. `expanded` shows every example.
pub fn render_entry(
    out: &mut String,
    command: &CommandEntry,
    expanded: bool,
    selected: bool,
    options: &RenderOptions,
) {
    let marker = if selected { "> " } else { "" };
    push_line(out, &format!("{}{}", marker, command.name));
    if let Some(stands_for) = &command.stands_for {
        push_line(out, &format!("  {}", stands_for));
    }
    if !command.description.is_empty() {
        push_line(out, &format!("  {}", command.description));
    }

    let badges = badges(command);
    if !badges.is_empty() {
        push_line(out, &format!("  {}", badges));
    }

    let visible = if expanded {
        command.examples.len()
    } else {
        options.collapsed_examples.min(command.examples.len())
    };
    for example in command.parsed_examples().take(visible) {
        let line = match example.comment {
            Some(comment) => format!("  $ {}  # {}", example.command, comment),
            None => format!("  $ {}", example.command),
        };
        push_line(out, &line);
    }

    let hidden = command.examples.len() - visible;
    if hidden > 0 {
        push_line(out, &format!("  +{} more", hidden));
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn badges(command: &CommandEntry) -> String {
    let mut parts: Vec<String> = command.platform.iter().map(|p| format!("[{}]", p)).collect();
    if let Some(category) = &command.category {
        parts.push(format!("({})", category));
    }
    parts.join(" ")
}

/// Estimated pixel height of rendered text, for window sizing.
pub fn content_height(rendered: &str, line_height: u32, padding: u32) -> u32 {
    let lines = rendered.lines().count() as u32;
    lines.saturating_mul(line_height).saturating_add(padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{search, Platform};

    fn fixture() -> Vec<CommandEntry> {
        vec![
            CommandEntry::new("test-cmd", "A command for testing")
                .with_stands_for("testing command")
                .with_examples([
                    "test-cmd -a  # Option a",
                    "test-cmd -b  # Option b",
                    "test-cmd -c",
                ])
                .with_platforms(&[Platform::Linux, Platform::Mac])
                .with_category("testing"),
            CommandEntry::new("another-cmd", "Another command for testing")
                .with_examples(["another-cmd -x  # Option x"])
                .with_platforms(&[Platform::Linux])
                .with_category("utilities"),
        ]
    }

    fn ready(commands: &[CommandEntry]) -> LoadState {
        LoadState::Ready {
            total: commands.len(),
        }
    }

    #[test]
    fn test_render_loading() {
        let out = render(&LoadState::Loading, &[], &ViewState::new(), &RenderOptions::default());
        assert_eq!(out, "Loading commands...\n");
    }

    #[test]
    fn test_render_failed() {
        let load = LoadState::Failed("Failed to load commands. Please try again later.".into());
        let out = render(&load, &[], &ViewState::new(), &RenderOptions::default());
        assert!(out.starts_with("Error loading commands\n"));
        assert!(out.contains("Please try again later."));
    }

    #[test]
    fn test_render_empty_query_prompt() {
        let commands = fixture();
        let out = render(&ready(&commands), &[], &ViewState::new(), &RenderOptions::default());
        assert!(out.contains("Start typing to search commands..."));
        assert!(out.contains("Search through 2 available commands"));
    }

    #[test]
    fn test_render_no_results() {
        let commands = fixture();
        let mut view = ViewState::new();
        view.set_query("nonexistent");
        let results = search(&view.query, &commands);
        let out = render(&ready(&commands), &results, &view, &RenderOptions::default());
        assert!(out.contains("No commands found matching \"nonexistent\""));
    }

    #[test]
    fn test_render_results() {
        let commands = fixture();
        let mut view = ViewState::new();
        view.set_query("TEST");
        let results = search(&view.query, &commands);
        let out = render(&ready(&commands), &results, &view, &RenderOptions::default());

        assert!(out.starts_with("2 found\n"));
        assert!(out.contains("testing command"));
        assert!(out.contains("[linux] [mac] (testing)"));
        assert!(out.contains("  $ test-cmd -a  # Option a\n"));
        assert!(out.contains("  $ test-cmd -b  # Option b\n"));
        assert!(!out.contains("test-cmd -c"));
        assert!(out.contains("  +1 more\n"));
        // Name hit comes first
        assert!(out.find("test-cmd").unwrap() < out.find("another-cmd").unwrap());
    }

    #[test]
    fn test_render_expanded_shows_all_examples() {
        let commands = fixture();
        let mut view = ViewState::new();
        view.set_query("test-cmd");
        view.toggle_expanded("test-cmd", 0);
        let results = search(&view.query, &commands);
        let out = render(&ready(&commands), &results, &view, &RenderOptions::default());

        assert!(out.contains("  $ test-cmd -c\n"));
        assert!(!out.contains("more"));
    }

    #[test]
    fn test_render_selection_marker() {
        let commands = fixture();
        let mut view = ViewState::new();
        view.set_query("cmd");
        let results = search(&view.query, &commands);
        let options = RenderOptions {
            show_selection: true,
            ..RenderOptions::default()
        };
        let out = render(&ready(&commands), &results, &view, &options);
        assert!(out.contains("> test-cmd\n"));
        assert!(!out.contains("> another-cmd"));
    }

    #[test]
    fn test_render_repeated_platform_tag_once() {
        let commands =
            crate::data::parse(r#"[{"name": "ls", "platform": ["linux", "linux"]}]"#).unwrap();
        let mut out = String::new();
        render_entry(&mut out, &commands[0], false, false, &RenderOptions::default());
        assert_eq!(out, "ls\n  [linux]\n");
    }

    #[test]
    fn test_content_height() {
        assert_eq!(content_height("a\nb\nc\n", 20, 40), 100);
        assert_eq!(content_height("", 20, 40), 40);
    }
}
