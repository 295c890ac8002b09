use ratatui::layout::{Constraint, Layout, Rect};

const ENTRY_WIDTH: u16 = 64;
const ENTRY_HEIGHT: u16 = 11;

pub struct EntryAreas {
    pub header: Rect,
    pub form: Rect,
    pub hints: Rect,
}

pub struct FormAreas {
    pub input: Rect,
    pub actions: Rect,
    pub error: Rect,
    pub status: Rect,
}

pub struct ChatAreas {
    pub header: Rect,
    pub transcript: Rect,
    pub input: Rect,
    pub hints: Rect,
}

pub fn entry_areas(area: Rect) -> EntryAreas {
    let [header, body, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(ENTRY_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);
    EntryAreas {
        header,
        form: centered(body, ENTRY_WIDTH, ENTRY_HEIGHT),
        hints,
    }
}

/// Splits the inside of the entry form box.
pub fn form_areas(inner: Rect) -> FormAreas {
    let [input, actions, error, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(1),
    ])
    .areas(inner);
    FormAreas {
        input,
        actions,
        error,
        status,
    }
}

pub fn chat_areas(area: Rect) -> ChatAreas {
    let [header, transcript, input, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);
    ChatAreas {
        header,
        transcript,
        input,
        hints,
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
