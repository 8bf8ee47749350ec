use super::common::*;
use crate::access::RequestBoard;
use crate::api::AccessRequest;
use crate::util::format;
use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::widgets::{Block, Cell, Row, Table, TableState};
use std::sync::atomic::Ordering;

pub struct RequestTable<'a> {
    headers: Row<'a>,
    widths: [Constraint; 5],
    board: RequestBoard,
    requests: Vec<AccessRequest>,
    pub block: Block<'a>,
    pub highlight_style: Style,
    pub state: TableState,
    pub widget: Table<'a>,
    pub len: usize,
}

impl RequestTable<'_> {
    pub fn new(board: RequestBoard) -> Self {
        let block = DEFAULT_BLOCK.title(" Access requests ");
        let headers = headers(false);
        let widths = [
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 6),
            Constraint::Length(22),
            Constraint::Fill(1),
            Constraint::Length(10),
        ];

        Self {
            headers,
            widths,
            board,
            requests: vec![],
            block,
            highlight_style: Style::default(),
            state: TableState::default(),
            widget: Table::default().widths(widths),
            len: 0,
        }
    }

    pub async fn refresh(&mut self) -> bool {
        if self.board.has_changed.swap(false, Ordering::Relaxed) {
            self.requests = self.board.visible().await;
            let rows: Vec<Row> = self
                .requests
                .iter()
                .enumerate()
                .map(|(i, request)| {
                    Row::new(vec![
                        Cell::from(request.folder_name().to_string()),
                        Cell::from(request.employee_name().to_string()),
                        Cell::from(status_badge(request.status)),
                        Cell::from(request.reason().to_string()),
                        Cell::from(format::date_part(request.created_at.as_deref().unwrap_or_default()).to_string()),
                    ])
                    .style(LIST_STYLES[i % 2])
                })
                .collect();
            self.len = rows.len();
            if self.state.selected().is_some_and(|i| i >= self.len) {
                self.state.select(self.len.checked_sub(1));
            }
            self.headers = headers(self.board.is_pending_only());
            self.widget = Table::new(rows, self.widths)
                .header(self.headers.to_owned())
                .block(self.block.to_owned())
                .row_highlight_style(self.highlight_style);
            return true;
        }
        false
    }

    pub fn request(&self, index: usize) -> Option<&AccessRequest> {
        self.requests.get(index)
    }
}

fn headers<'a>(pending_only: bool) -> Row<'a> {
    let status = match pending_only {
        true => "Status (pending only)",
        false => "Status",
    };
    Row::new(vec![
        Cell::from(header_text("Folder")),
        Cell::from(header_text("Employee")),
        Cell::from(header_text(status)),
        Cell::from(header_text("Reason")),
        Cell::from(header_text("Date")),
    ])
}
