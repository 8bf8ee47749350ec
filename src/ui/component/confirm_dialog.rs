use crate::access::Decision;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListState};

// Asks before an approve or reject is sent
#[derive(Default)]
pub struct ConfirmDialog<'a> {
    pub decision: Option<(String, Decision)>,
    pub widget: List<'a>,
    pub state: ListState,
    pub len: usize,
}

impl ConfirmDialog<'_> {
    pub fn new(request_id: String, decision: Decision, folder_name: &str, employee_name: &str) -> Self {
        let title = format!(" {} {employee_name}'s request for {folder_name}? ", capitalize(decision.verb()));
        let border_style = Style::default().fg(Color::Gray).bg(Color::Black);
        let block = Block::default().borders(Borders::ALL).title(title).border_style(border_style);

        let widget = List::new([Span::raw("Ok"), Span::raw("Cancel")])
            .block(block)
            .style(Style::default())
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Gray))
            .highlight_symbol(">> ");

        Self {
            decision: Some((request_id, decision)),
            state: ListState::default().with_selected(Some(0)),
            widget,
            len: 2,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.state.selected() == Some(0)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
