use super::component::*;
use super::event::{Events, TickEvent};
use super::navigation::*;
use super::rectangles::{self, Layouts, Rectangles};
use super::{handle_sigwinch, term_setup};
use crate::access::Workflow;
use crate::api::Client;
use crate::cache::JsonFileStore;
use crate::config::Config;
use crate::Logger;

use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Terminal;
use signal_hook::consts::signal::*;
use signal_hook_tokio::Signals;
use tokio::task;

pub type AppWorkflow = Workflow<Client, JsonFileStore>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputMode {
    Normal,
    ReadLine,
    Confirm,
}

pub struct MainUI<'a> {
    pub workflow: AppWorkflow,
    pub logger: Logger,
    events: Events,
    pub tabs: Tabs,
    pub tab_bar: TabBar<'a>,
    hotkey_bar: HotkeyBar<'a>,
    bottom_bar: BottomBar<'a>,
    pub folders_view: FolderTable<'a>,
    pub requests_view: RequestTable<'a>,
    pub authorized_view: AuthorizedTable<'a>,
    pub log_view: LogList<'a>,
    pub popup_dialog: PopupDialog<'a>,
    pub confirm_dialog: ConfirmDialog<'a>,
    pub input_mode: InputMode,
    layouts: Layouts,
    pub rectangles: Rectangles,
    pub window_size: Rect,
    pub redraw_terminal: bool,
    pub should_run: bool,
}

impl MainUI<'_> {
    pub fn new(workflow: AppWorkflow, config: &Config, logger: Logger) -> Self {
        let tabs = Tabs::new();

        Self {
            folders_view: FolderTable::new(workflow.folders.clone()),
            requests_view: RequestTable::new(workflow.requests.clone()),
            authorized_view: AuthorizedTable::new(workflow.library.clone()),
            log_view: LogList::new(logger.clone()),
            tab_bar: TabBar::new(),
            hotkey_bar: HotkeyBar::new(tabs.focused()),
            bottom_bar: BottomBar::new(&config.profile, config.api_host()),
            popup_dialog: PopupDialog::default(),
            confirm_dialog: ConfirmDialog::default(),
            input_mode: InputMode::Normal,
            events: Events::new(),
            layouts: Layouts::new(),
            rectangles: Rectangles::default(),
            window_size: Rect::default(),
            redraw_terminal: true,
            should_run: true,
            tabs,
            workflow,
            logger,
        }
    }

    pub async fn run(mut self) -> Result<(), Box<dyn Error>> {
        let mut terminal = term_setup()?;

        /* X11 (and maybe Wayland?) sends SIGWINCH when the window is resized, so we can listen to that. Otherwise we
         * redraw when something has changed.
         * We set this to true so that the layout is calculated in the first loop. */
        let got_sigwinch = Arc::new(AtomicBool::new(true));
        let signals = Signals::new([SIGWINCH])?;
        let handle = signals.handle();
        let _sigwinch_task = task::spawn(handle_sigwinch(signals, got_sigwinch.clone()));

        self.focused_widget_mut().focus();
        for tab in Tab::ALL {
            self.spawn_load(tab);
        }

        while self.should_run {
            if got_sigwinch.swap(false, Ordering::Relaxed) {
                let (width, height) = termion::terminal_size()?;
                self.window_size = Rect::new(0, 0, width, height);
                self.rectangles.recalculate(&self.layouts, self.window_size);
                self.recalculate_dialogs();
                self.redraw_terminal = true;
            }

            self.refresh_widgets().await;

            if self.redraw_terminal {
                self.draw_terminal(&mut terminal)?;
                self.redraw_terminal = false;
            }

            match self.events.next().await {
                Some(TickEvent::Input(event)) => self.handle_events(event).await,
                Some(TickEvent::Tick) => {}
                None => self.should_run = false,
            }
        }
        handle.close();
        Ok(())
    }

    // Failures are reported to the log by the workflow
    pub fn spawn_load(&self, tab: Tab) {
        let workflow = self.workflow.clone();
        task::spawn(async move {
            let _res = match tab {
                Tab::Folders => workflow.load_folders().await,
                Tab::Requests => workflow.load_requests().await,
                Tab::Authorized => workflow.load_authorized().await,
            };
        });
    }

    pub fn open_dialog(&mut self, input_mode: InputMode) {
        self.input_mode = input_mode;
        self.recalculate_dialogs();
        self.redraw_terminal = true;
    }

    pub fn close_dialog(&mut self) {
        self.input_mode = InputMode::Normal;
        self.popup_dialog = PopupDialog::default();
        self.confirm_dialog = ConfirmDialog::default();
        self.redraw_terminal = true;
    }

    fn recalculate_dialogs(&mut self) {
        self.rectangles.recalculate_popup(self.popup_dialog.fields.len(), self.window_size);
        self.rectangles.recalculate_confirmdialog(self.confirm_dialog.len as u16, self.window_size);
    }

    async fn refresh_widgets(&mut self) {
        let mut changed = self.tab_bar.refresh();
        changed |= self.hotkey_bar.refresh(self.input_mode, self.tabs.focused());
        changed |= self.folders_view.refresh().await;
        changed |= self.requests_view.refresh().await;
        changed |= self.authorized_view.refresh().await;
        changed |= self.log_view.refresh();
        if changed {
            self.redraw_terminal = true;
        }
    }

    fn draw_terminal<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), Box<dyn Error>> {
        terminal.draw(|frame| {
            let rects = &self.rectangles.main_vertical;
            frame.render_widget(self.tab_bar.widget.clone(), rects[0]);
            frame.render_widget(self.hotkey_bar.widget.clone(), rects[1]);
            match self.tabs.active() {
                Tab::Folders => {
                    frame.render_stateful_widget(
                        self.folders_view.widget.clone(),
                        rects[2],
                        &mut self.folders_view.state,
                    );
                }
                Tab::Requests => {
                    frame.render_stateful_widget(
                        self.requests_view.widget.clone(),
                        rects[2],
                        &mut self.requests_view.state,
                    );
                }
                Tab::Authorized => {
                    frame.render_stateful_widget(
                        self.authorized_view.widget.clone(),
                        rects[2],
                        &mut self.authorized_view.state,
                    );
                }
            }
            frame.render_stateful_widget(self.log_view.widget.clone(), rects[3], &mut self.log_view.state);
            frame.render_widget(self.bottom_bar.widget.clone(), rects[4]);

            match self.input_mode {
                InputMode::ReadLine => {
                    let popup = &self.rectangles.dialogpopup;
                    let area = popup.iter().fold(popup[0], |area, rect| area.union(*rect));
                    frame.render_widget(Clear, area);
                    frame.render_widget(self.popup_dialog.title.clone(), popup[0]);
                    let fields = self.popup_dialog.labels.iter().zip(&self.popup_dialog.fields);
                    for ((label, field), row) in fields.zip(popup.iter().skip(1)) {
                        let row = rectangles::label_and_input(*row);
                        frame.render_widget(label.clone(), row[0]);
                        frame.render_widget(field, row[1]);
                    }
                }
                InputMode::Confirm => {
                    let area = self.rectangles.confirmdialog[0];
                    frame.render_widget(Clear, area);
                    frame.render_stateful_widget(
                        self.confirm_dialog.widget.clone(),
                        area,
                        &mut self.confirm_dialog.state,
                    );
                }
                InputMode::Normal => {}
            }
        })?;
        Ok(())
    }
}
