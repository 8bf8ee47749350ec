use super::common::*;
use crate::Logger;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState};
use std::sync::atomic::Ordering;

pub struct LogList<'a> {
    list_items: Vec<ListItem<'a>>,
    logger: Logger,
    pub block: Block<'a>,
    pub state: ListState,
    pub highlight_style: Style,
    pub widget: List<'a>,
    pub len: usize,
}

impl LogList<'_> {
    pub fn new(logger: Logger) -> Self {
        let block = DEFAULT_BLOCK.title(" Log ");
        let widget = List::default().block(block.clone());

        Self {
            list_items: vec![],
            logger,
            block,
            state: ListState::default(),
            highlight_style: Style::default(),
            widget,
            len: 0,
        }
    }

    // Moves new messages out of the logger. Keeps following the last line if it was selected.
    pub fn refresh(&mut self) -> bool {
        if self.logger.has_changed.swap(false, Ordering::Relaxed) {
            let Ok(mut msgs_lock) = self.logger.messages.write() else {
                return false;
            };
            self.list_items.extend(msgs_lock.drain(..).map(|msg| ListItem::new(Line::from(msg))));
            let old_last_index = self.len.checked_sub(1);
            self.len = self.list_items.len();

            if self.state.selected().is_none() && self.len > 0 || self.state.selected() == old_last_index {
                self.state.select(self.len.checked_sub(1));
            }

            self.widget = self.widget.clone().items(self.list_items.clone());
            return true;
        }
        false
    }

    pub fn delete(&mut self, index: usize) {
        if index < self.list_items.len() {
            self.list_items.remove(index);
            self.len = self.list_items.len();
            self.widget = self.widget.clone().items(self.list_items.clone());
        }
    }
}
