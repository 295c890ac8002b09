use assistant_core::{AppViewModel, BackendStatus, ChatView, EntryView, Screen, Sender};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::constants::*;
use super::layout::{chat_areas, entry_areas, form_areas};
use super::palette::Palette;

pub fn draw(frame: &mut Frame, view: &AppViewModel, palette: Palette) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    match (view.screen, &view.chat) {
        (Screen::Chat, Some(chat)) => draw_chat(frame, area, chat, palette),
        _ => draw_entry(frame, area, view, palette),
    }
}

fn draw_entry(frame: &mut Frame, area: Rect, view: &AppViewModel, palette: Palette) {
    let areas = entry_areas(area);
    frame.render_widget(header(APP_TITLE, None, palette), areas.header);

    let block = Block::bordered()
        .title(ENTRY_TITLE)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(areas.form);
    frame.render_widget(block, areas.form);

    let form = form_areas(inner);
    let entry = &view.entry;
    draw_input(
        frame,
        form.input,
        &entry.input,
        ENTRY_PLACEHOLDER,
        None,
        palette,
    );
    frame.render_widget(Paragraph::new(entry_actions(entry, palette)), form.actions);

    if let Some(error) = &entry.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(palette.error)),
            form.error,
        );
    }
    frame.render_widget(
        Paragraph::new(backend_label(view.backend)).style(Style::default().fg(palette.muted)),
        form.status,
    );
    frame.render_widget(hints(ENTRY_HINTS, palette), areas.hints);
}

fn draw_chat(frame: &mut Frame, area: Rect, chat: &ChatView, palette: Palette) {
    let areas = chat_areas(area);
    frame.render_widget(
        header(APP_TITLE, chat.extra_url.as_deref(), palette),
        areas.header,
    );

    let width = areas.transcript.width.saturating_sub(2);
    let lines = transcript_lines(chat, width as usize, palette);
    let visible = areas.transcript.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible);
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::bordered().border_style(Style::default().fg(palette.muted)))
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
        areas.transcript,
    );

    let send = button(SEND_LABEL, chat.send_enabled, palette);
    draw_input(
        frame,
        areas.input,
        &chat.input,
        CHAT_PLACEHOLDER,
        Some(send),
        palette,
    );
    frame.render_widget(hints(CHAT_HINTS, palette), areas.hints);
}

fn header<'a>(title: &'a str, context: Option<&'a str>, palette: Palette) -> Paragraph<'a> {
    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(url) = context {
        spans.push(Span::styled(
            format!("  ({url})"),
            Style::default().fg(palette.muted),
        ));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM))
}

fn draw_input(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    placeholder: &str,
    action: Option<Span<'_>>,
    palette: Palette,
) {
    let mut block = Block::bordered().border_style(Style::default().fg(palette.accent));
    if let Some(action) = action {
        block = block.title_bottom(Line::from(action).alignment(Alignment::Right));
    }
    let content = if text.is_empty() {
        Span::styled(placeholder, Style::default().fg(palette.muted))
    } else {
        Span::raw(text)
    };
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    let inner_width = area.width.saturating_sub(2);
    let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    frame.set_cursor_position((area.x + 1 + typed.min(inner_width), area.y + 1));
}

fn entry_actions(entry: &EntryView, palette: Palette) -> Line<'static> {
    let crawl = if entry.crawl_enabled {
        CRAWL_LABEL
    } else {
        CRAWL_PENDING_LABEL
    };
    let skip = if entry.skip_enabled {
        SKIP_LABEL
    } else {
        SKIP_PENDING_LABEL
    };
    Line::from(vec![
        button(crawl, entry.crawl_enabled, palette),
        Span::raw("   "),
        button(skip, entry.skip_enabled, palette),
    ])
}

fn button(label: &str, enabled: bool, palette: Palette) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    Span::styled(format!("[ {label} ]"), style)
}

fn backend_label(status: BackendStatus) -> &'static str {
    match status {
        BackendStatus::Unknown => "Backend: checking...",
        BackendStatus::Online => "Backend: online",
        BackendStatus::Offline => "Backend: offline",
    }
}

fn hints(text: &str, palette: Palette) -> Paragraph<'_> {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted))
}

fn transcript_lines(chat: &ChatView, width: usize, palette: Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in &chat.messages {
        let (prefix, color) = match message.sender {
            Sender::User => (USER_PREFIX, palette.user),
            Sender::Bot => (BOT_PREFIX, palette.bot),
        };
        push_message(&mut lines, prefix, &message.text, color, width);
    }
    if let Some(frame) = chat.typing_frame {
        let dots = ".".repeat(usize::from(frame % 3) + 1);
        push_message(&mut lines, BOT_PREFIX, &dots, palette.muted, width);
    }
    lines
}

fn push_message(
    lines: &mut Vec<Line<'static>>,
    prefix: &str,
    text: &str,
    color: Color,
    width: usize,
) {
    let label = format!("{prefix}: ");
    let body_width = width.saturating_sub(label.chars().count()).max(1);
    let indent = " ".repeat(label.chars().count());

    for (index, row) in wrap_text(text, body_width).into_iter().enumerate() {
        let lead = if index == 0 {
            Span::styled(
                label.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(indent.clone())
        };
        lines.push(Line::from(vec![lead, Span::styled(row, Style::default().fg(color))]));
    }
    lines.push(Line::default());
}

/// Greedy word wrap by character count. Words longer than `width` are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if row_len > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_len = 0;
                }
                let rest = word.split_off(width);
                rows.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if row_len == 0 { word.len() } else { word.len() + 1 };
            if row_len + needed > width {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            if row_len > 0 {
                row.push(' ');
                row_len += 1;
            }
            row_len += word.len();
            row.extend(word);
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use assistant_core::{update, AppState, CrawlAction, Msg};
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn rendered(view: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal
            .draw(|frame| draw(frame, view, Palette::light()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn chat_state() -> AppState {
        let (state, _) = update(AppState::new(), Msg::SkipClicked);
        let (state, _) = update(
            state,
            Msg::CrawlFinished {
                action: CrawlAction::Skip,
                result: Ok(()),
            },
        );
        state
    }

    #[test]
    fn entry_screen_shows_form_and_labels() {
        let screen = rendered(&AppState::new().view());
        assert!(screen.contains(APP_TITLE));
        assert!(screen.contains(ENTRY_TITLE));
        assert!(screen.contains(ENTRY_PLACEHOLDER));
        assert!(screen.contains("[ Crawl Website ]"));
        assert!(screen.contains("[ Skip and chat with me ]"));
    }

    #[test]
    fn pending_crawl_swaps_label() {
        let (state, _) = update(AppState::new(), Msg::InputChanged("https://a.b".into()));
        let (state, _) = update(state, Msg::CrawlClicked);
        let screen = rendered(&state.view());
        assert!(screen.contains("[ Crawling... ]"));
        assert!(screen.contains("https://a.b"));
    }

    #[test]
    fn chat_screen_shows_greeting_and_typing_indicator() {
        let (state, _) = update(chat_state(), Msg::InputChanged("hello".into()));
        let (state, _) = update(state, Msg::SendClicked);
        let screen = rendered(&state.view());

        assert!(screen.contains("Assistant: Hi!"));
        assert!(screen.contains("You: hello"));
        assert_eq!(screen.matches("Assistant:").count(), 2);

        let (state, _) = update(state, Msg::ChatFinished(Ok("done".into())));
        let screen = rendered(&state.view());
        assert!(screen.contains("Assistant: done"));
        assert_eq!(screen.matches("Assistant:").count(), 2);
    }

    #[test]
    fn wrap_keeps_words_together_and_splits_long_ones() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }
}
