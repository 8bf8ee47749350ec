use crate::ui::component::common::{BLOCK_HIGHLIGHT_STYLE, BLOCK_STYLE, HIGHLIGHT_LINE_STYLE};
use crate::ui::component::{AuthorizedTable, FolderTable, LogList, RequestTable};
use ratatui::style::Style;

// Tables and lists name the setter for the selected row differently
macro_rules! impl_highlight {
    ($T:ty, $setter:ident) => {
        impl Highlight for $T {
            fn focus(&mut self) {
                self.highlight_style = HIGHLIGHT_LINE_STYLE;
                self.block = self.block.clone().border_style(BLOCK_HIGHLIGHT_STYLE);
                self.widget = self.widget.clone().$setter(self.highlight_style).block(self.block.clone());
            }

            fn unfocus(&mut self) {
                self.highlight_style = Style::reset();
                self.block = self.block.clone().border_style(BLOCK_STYLE);
                self.widget = self.widget.clone().$setter(self.highlight_style).block(self.block.clone());
            }
        }
    };
}

impl_highlight!(AuthorizedTable<'_>, row_highlight_style);
impl_highlight!(FolderTable<'_>, row_highlight_style);
impl_highlight!(LogList<'_>, highlight_style);
impl_highlight!(RequestTable<'_>, row_highlight_style);

pub trait Highlight {
    fn focus(&mut self);
    fn unfocus(&mut self);
}
