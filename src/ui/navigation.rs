use super::component::traits::{Highlight, Select};
use super::main_ui::MainUI;

impl MainUI<'_> {
    pub fn next_tab(&mut self) {
        self.focused_widget_mut().unfocus();
        self.tabs.next();
        self.tab_bar.select_tab(self.tabs.active_index);
        self.focused_widget_mut().focus();
        self.redraw_terminal = true;
    }

    pub fn previous_tab(&mut self) {
        self.focused_widget_mut().unfocus();
        self.tabs.previous();
        self.tab_bar.select_tab(self.tabs.active_index);
        self.focused_widget_mut().focus();
        self.redraw_terminal = true;
    }

    pub fn focused_widget(&self) -> &dyn Focusable {
        match self.tabs.focused() {
            Focused::FolderTable => &self.folders_view,
            Focused::RequestTable => &self.requests_view,
            Focused::AuthorizedTable => &self.authorized_view,
            Focused::LogList => &self.log_view,
        }
    }

    pub fn focused_widget_mut(&mut self) -> &mut dyn Focusable {
        match self.tabs.focused() {
            Focused::FolderTable => &mut self.folders_view,
            Focused::RequestTable => &mut self.requests_view,
            Focused::AuthorizedTable => &mut self.authorized_view,
            Focused::LogList => &mut self.log_view,
        }
    }

    // h and l swap between the tab's table and the log
    pub fn toggle_log_focus(&mut self) {
        let target = match self.tabs.focused() {
            Focused::LogList => self.tabs.active().table(),
            _ => Focused::LogList,
        };
        self.focused_widget_mut().unfocus();
        self.tabs.focus(target);
        self.focused_widget_mut().focus();
        self.redraw_terminal = true;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.focused_widget().selected()
    }

    pub fn select_next(&mut self) {
        self.focused_widget_mut().next();
        self.redraw_terminal = true;
    }

    pub fn select_previous(&mut self) {
        self.focused_widget_mut().previous();
        self.redraw_terminal = true;
    }
}

pub trait Focusable: Highlight + Select {}

impl<T: Highlight + Select> Focusable for T {}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Focused {
    FolderTable,
    RequestTable,
    AuthorizedTable,
    LogList,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tab {
    Folders,
    Requests,
    Authorized,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Folders, Tab::Requests, Tab::Authorized];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Folders => "Folders",
            Tab::Requests => "Requests",
            Tab::Authorized => "Authorized",
        }
    }

    pub fn table(&self) -> Focused {
        match self {
            Tab::Folders => Focused::FolderTable,
            Tab::Requests => Focused::RequestTable,
            Tab::Authorized => Focused::AuthorizedTable,
        }
    }
}

// Remembers which pane had focus on each tab
pub struct Tabs {
    pub active_index: usize,
    pub focused_per_tab: Vec<Focused>,
}

impl Tabs {
    pub fn new() -> Self {
        Self {
            active_index: 0,
            focused_per_tab: Tab::ALL.iter().map(Tab::table).collect(),
        }
    }

    pub fn active(&self) -> Tab {
        Tab::ALL[self.active_index]
    }

    pub fn focused(&self) -> Focused {
        self.focused_per_tab[self.active_index]
    }

    pub fn focus(&mut self, to_focus: Focused) {
        self.focused_per_tab[self.active_index] = to_focus;
    }
}

impl Select for Tabs {
    fn len(&self) -> usize {
        self.focused_per_tab.len()
    }

    fn select(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            if index < self.len() {
                self.active_index = index;
            }
        }
    }

    fn selected(&self) -> Option<usize> {
        Some(self.active_index)
    }
}
