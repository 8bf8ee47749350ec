use super::common::*;
use crate::access::{AccessStore, ControlState};
use crate::util::format;
use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::widgets::{Block, Cell, Row, Table, TableState};
use std::sync::atomic::Ordering;

pub struct FolderTable<'a> {
    headers: Row<'a>,
    widths: [Constraint; 4],
    store: AccessStore,
    // Folder id of every row, in display order
    folder_ids: Vec<String>,
    pub block: Block<'a>,
    pub highlight_style: Style,
    pub state: TableState,
    pub widget: Table<'a>,
    pub len: usize,
}

impl FolderTable<'_> {
    pub fn new(store: AccessStore) -> Self {
        let block = DEFAULT_BLOCK.title(" Folders ");
        let headers = Row::new(vec![
            Cell::from(header_text("Name")),
            Cell::from(header_text("Subfolders")),
            Cell::from(header_text("Files")),
            Cell::from(header_text("Access")),
        ]);
        let widths = [
            Constraint::Ratio(2, 5),
            Constraint::Ratio(1, 5),
            Constraint::Length(6),
            Constraint::Ratio(2, 5),
        ];

        Self {
            headers,
            widths,
            store,
            folder_ids: vec![],
            block,
            highlight_style: Style::default(),
            state: TableState::default(),
            widget: Table::default().widths(widths),
            len: 0,
        }
    }

    pub async fn refresh(&mut self) -> bool {
        if self.store.has_changed.swap(false, Ordering::Relaxed) {
            let folders = self.store.snapshot().await;
            let rows: Vec<Row> = folders
                .iter()
                .enumerate()
                .map(|(i, folder)| {
                    Row::new(vec![
                        Cell::from(folder.name.clone()),
                        Cell::from(format::subfolder_badge(folder.subfolders.len()).unwrap_or_default()),
                        Cell::from(folder.file_count().to_string()),
                        Cell::from(control_text(ControlState::for_folder(folder))),
                    ])
                    .style(LIST_STYLES[i % 2])
                })
                .collect();
            self.folder_ids = folders.into_iter().map(|folder| folder.id).collect();
            self.len = rows.len();
            if self.state.selected().is_some_and(|i| i >= self.len) {
                self.state.select(self.len.checked_sub(1));
            }
            self.widget = Table::new(rows, self.widths)
                .header(self.headers.to_owned())
                .block(self.block.to_owned())
                .row_highlight_style(self.highlight_style);
            return true;
        }
        false
    }

    pub fn folder_id(&self, index: usize) -> Option<&str> {
        self.folder_ids.get(index).map(|id| id.as_str())
    }
}
