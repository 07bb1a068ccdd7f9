//! Line-driven interactive search for `tldr interactive`.
//!
//! Every line is a new query unless it starts with `:`, in which case it is a
//! view command (`:n`, `:p`, `:open N`, `:q`).

use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::core::{CommandEntry, QueryTracker, SearchEngine};
use crate::platform::{fit_window_to_content, RecordingWindow, WindowSize};
use crate::ui::{self, LoadState, RenderOptions, ViewEvent, ViewState};

/// Pixel height of one rendered line in the desktop list.
const LINE_HEIGHT: u32 = 20;

/// Height of the search bar above the list.
const SEARCH_BAR_HEIGHT: u32 = 80;

/// Screen height assumed for window sizing when there is no real screen.
const VIRTUAL_SCREEN_HEIGHT: u32 = 1080;

const HELP: &str = "\
Type a query and press Enter to search.
  :n          select next result
  :p          select previous result
  :open N     show or hide all examples of result N
  :help       show this help
  :q          quit
";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Query(String),
    Event(ViewEvent),
    /// `:open N`, 1-based
    Open(usize),
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Input::Query(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("q" | "quit"), None) => Input::Quit,
        (Some("n" | "next"), None) => Input::Event(ViewEvent::SelectNext),
        (Some("p" | "prev"), None) => Input::Event(ViewEvent::SelectPrevious),
        (Some("help" | "h"), None) => Input::Help,
        (Some("open" | "o"), Some(n)) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Input::Open(n),
            _ => Input::Unknown(line.trim().to_string()),
        },
        _ => Input::Unknown(line.trim().to_string()),
    }
}

/// Run the interactive loop until `:q` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    commands: &[CommandEntry],
    load: &LoadState,
    config: &Config,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let engine = SearchEngine::with_options(config.search.engine_options());
    let tracker = QueryTracker::new();
    let render_options = RenderOptions {
        show_selection: true,
        ..RenderOptions::from(&config.appearance)
    };
    let mut window = RecordingWindow::new(WindowSize::new(
        config.appearance.window_width,
        config.appearance.min_height,
    ));

    let mut view = ViewState::new();
    let mut results: Vec<&CommandEntry> = Vec::new();

    let mut draw = |view: &ViewState, results: &[&CommandEntry], out: &mut W| -> io::Result<()> {
        let rendered = ui::render(load, results, view, &render_options);
        let height = ui::content_height(&rendered, LINE_HEIGHT, SEARCH_BAR_HEIGHT);
        if let Err(e) = fit_window_to_content(
            &mut window,
            height,
            VIRTUAL_SCREEN_HEIGHT,
            &config.appearance,
        ) {
            tracing::warn!("Failed to fit window: {}", e);
        }
        write!(out, "{}", rendered)?;
        out.flush()
    };

    draw(&view, &results, out)?;
    if matches!(load, LoadState::Failed(_)) {
        return Ok(());
    }

    for line in input.lines() {
        let line = line?;
        match parse_input(&line) {
            Input::Quit => break,
            Input::Help => {
                write!(out, "{}", HELP)?;
                continue;
            }
            Input::Unknown(command) => {
                writeln!(out, "Unknown command: {} (try :help)", command)?;
                continue;
            }
            Input::Query(query) => {
                view.update(ViewEvent::QueryChanged(query), results.len());
                // Always current on this thread; a frontend searching off the
                // input thread drops results here once a newer query started.
                let ticket = tracker.begin();
                let found = engine.search(&view.query, commands);
                match tracker.accept(ticket, found) {
                    Some(found) => results = found,
                    None => continue,
                }
            }
            Input::Event(event) => view.update(event, results.len()),
            Input::Open(n) => match results.get(n - 1) {
                Some(command) => view.update(
                    ViewEvent::ToggleExpanded {
                        name: command.name.clone(),
                        index: n - 1,
                    },
                    results.len(),
                ),
                None => {
                    writeln!(out, "No result {}", n)?;
                    continue;
                }
            },
        }

        writeln!(out)?;
        draw(&view, &results, out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Platform;

    fn fixture() -> Vec<CommandEntry> {
        vec![
            CommandEntry::new("test-cmd", "A command for testing")
                .with_examples(["test-cmd -a  # Option a", "test-cmd -b  # Option b", "test-cmd -c"])
                .with_platforms(&[Platform::Linux]),
            CommandEntry::new("another-cmd", "Another command for testing"),
        ]
    }

    fn run(input: &str, commands: &[CommandEntry], load: LoadState) -> String {
        let mut out = Vec::new();
        run_interactive(commands, &load, &Config::default(), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("git"), Input::Query("git".to_string()));
        assert_eq!(parse_input("  :q "), Input::Quit);
        assert_eq!(parse_input(":n"), Input::Event(ViewEvent::SelectNext));
        assert_eq!(parse_input(":open 2"), Input::Open(2));
        assert_eq!(parse_input(":open 0"), Input::Unknown(":open 0".to_string()));
        assert_eq!(parse_input(":bogus"), Input::Unknown(":bogus".to_string()));
    }

    #[test]
    fn test_prompt_then_results() {
        let commands = fixture();
        let out = run("another\n:q\n", &commands, LoadState::Ready { total: 2 });

        assert!(out.starts_with("Start typing to search commands..."));
        assert!(out.contains("1 found\n"));
        assert!(out.contains("> another-cmd\n"));
    }

    #[test]
    fn test_open_expands_examples() {
        let commands = fixture();
        let out = run("test-cmd\n:open 1\n", &commands, LoadState::Ready { total: 2 });

        let (before, after) = out.split_at(out.rfind("1 found").unwrap());
        assert!(before.contains("+1 more"));
        assert!(after.contains("$ test-cmd -c"));
    }

    #[test]
    fn test_open_out_of_range() {
        let commands = fixture();
        let out = run("test-cmd\n:open 5\n", &commands, LoadState::Ready { total: 2 });
        assert!(out.contains("No result 5"));
    }

    #[test]
    fn test_navigation_moves_selection() {
        let commands = fixture();
        let out = run("cmd\n:n\n", &commands, LoadState::Ready { total: 2 });
        let last = &out[out.rfind("2 found").unwrap()..];
        assert!(last.contains("> another-cmd"));
        assert!(!last.contains("> test-cmd"));
    }

    #[test]
    fn test_failed_load_stops_early() {
        let out = run(
            "git\n",
            &[],
            LoadState::Failed(crate::ui::LOAD_FAILED_MESSAGE.to_string()),
        );
        assert!(out.contains("Failed to load commands"));
        assert!(!out.contains("found"));
    }
}
