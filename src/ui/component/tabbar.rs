use crate::ui::navigation::Tab;
use ratatui::style::{Color, Style};
use ratatui::widgets::Tabs;

pub struct TabBar<'a> {
    pub widget: Tabs<'a>,
    selected_tab: usize,
    needs_redraw: bool,
}

impl TabBar<'_> {
    pub fn new() -> Self {
        let highlight_style = Style::new().bg(Color::White).fg(Color::Black);
        let selected_tab = 0;
        let widget = Tabs::new(Tab::ALL.map(|tab| tab.name())).select(selected_tab).highlight_style(highlight_style);

        Self {
            widget,
            selected_tab,
            needs_redraw: true,
        }
    }

    pub fn refresh(&mut self) -> bool {
        if self.needs_redraw {
            self.widget = self.widget.clone().select(self.selected_tab);
            self.needs_redraw = false;
            return true;
        }
        false
    }

    pub fn select_tab(&mut self, index: usize) {
        self.selected_tab = index;
        self.needs_redraw = true;
    }
}
