use crate::interactive::domain::models::LoadStatus;
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::keymap::SHORT_HELP;
use crate::interactive::ui::theme::Theme;
use ratatui::text::{Line, Span};

pub const LOADING_TEXT: &str = "Loading emojis...";
pub const NO_RESULTS_TEXT: &str = "No emojis found";

/// Lines for the grid area: the emoji grid, the loading text, or the error.
pub fn render_lines(state: &AppState, theme: &Theme) -> Vec<Line<'static>> {
    match state.status {
        LoadStatus::Loading => vec![Line::from(LOADING_TEXT)],
        LoadStatus::Error => {
            let message = state.error.as_deref().unwrap_or("unknown error");
            vec![Line::from(Span::styled(
                format!("Error: {message}"),
                theme.error,
            ))]
        }
        LoadStatus::Ready if state.filtered.is_empty() => {
            vec![Line::from(Span::styled(NO_RESULTS_TEXT, theme.dimmed))]
        }
        LoadStatus::Ready => state
            .visible_rows()
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|cell| {
                        let text = format!(" {} ", cell.emoji);
                        if cell.selected {
                            Span::styled(text, theme.selected)
                        } else {
                            Span::raw(text)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect(),
    }
}

/// "13 results · page 2/3", or nothing until the dataset is ready.
pub fn status_line(state: &AppState, theme: &Theme) -> Line<'static> {
    if state.status != LoadStatus::Ready {
        return Line::default();
    }

    let count = state.filtered.len();
    let noun = if count == 1 { "result" } else { "results" };
    let mut text = format!("{count} {noun}");
    if state.page_count() > 1 {
        text.push_str(&format!(" · page {}/{}", state.page + 1, state.page_count()));
    }

    Line::from(Span::styled(text, theme.dimmed))
}

pub fn help_line(theme: &Theme) -> Line<'static> {
    let text = SHORT_HELP
        .iter()
        .map(|(keys, description)| format!("{keys} {description}"))
        .collect::<Vec<_>>()
        .join(" • ");

    Line::from(Span::styled(text, theme.dimmed))
}
