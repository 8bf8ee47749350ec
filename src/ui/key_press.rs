use super::component::traits::*;
use super::component::*;
use super::main_ui::*;
use super::navigation::{Focused, Tab};
use crate::access::Decision;

use termion::event::{Event, Key};
use tokio::task;

impl MainUI<'_> {
    pub async fn handle_events(&mut self, event: Event) {
        match self.input_mode {
            InputMode::ReadLine => {
                self.handle_dialog_input(event);
                return;
            }
            InputMode::Confirm => {
                if let Event::Key(key) = event {
                    self.handle_confirm_keys(key);
                }
                return;
            }
            InputMode::Normal => {}
        }

        let Event::Key(key) = event else {
            return;
        };

        if let Key::Char('q') | Key::Ctrl('c') = key {
            self.should_run = false;
            return;
        }

        match key {
            Key::Down | Key::Char('j') => {
                self.select_next();
            }
            Key::Up | Key::Char('k') => {
                self.select_previous();
            }
            Key::Left | Key::Char('h') | Key::Right | Key::Char('l') => {
                self.toggle_log_focus();
            }
            Key::Char('\t') => {
                self.next_tab();
            }
            Key::BackTab => {
                self.previous_tab();
            }
            _ => {
                // Uncomment to log keypresses
                //self.logger.log(format!("{:?}", key));
            }
        }
        match self.tabs.focused() {
            Focused::FolderTable => {
                self.handle_folder_keys(key).await;
            }
            Focused::RequestTable => {
                self.handle_request_keys(key).await;
            }
            Focused::AuthorizedTable => {
                self.handle_authorized_keys(key);
            }
            Focused::LogList => {
                self.handle_log_keys(key);
            }
        }
    }

    async fn handle_folder_keys(&mut self, key: Key) {
        match key {
            Key::Char('r') => {
                let Some(folder_id) = self.selected_index().and_then(|i| self.folders_view.folder_id(i)) else {
                    return;
                };
                let folder = self.workflow.folders.get(folder_id).await;
                match folder {
                    Some(folder) if folder.may_request() => {
                        self.popup_dialog = PopupDialog::request_access(folder.id, &folder.name);
                        self.open_dialog(InputMode::ReadLine);
                    }
                    Some(_) => self.logger.info("You have already requested access to this folder."),
                    None => {}
                }
            }
            Key::Char('u') => {
                self.spawn_load(Tab::Folders);
            }
            _ => {}
        }
    }

    async fn handle_request_keys(&mut self, key: Key) {
        match key {
            Key::Char('a') => {
                self.ask_decision(Decision::Approve);
            }
            Key::Char('x') => {
                self.ask_decision(Decision::Reject);
            }
            Key::Char('p') => {
                self.workflow.requests.toggle_pending_only();
            }
            Key::Char('g') => {
                let folders = self.workflow.folders.snapshot().await.into_iter().map(|f| (f.id, f.name)).collect();
                let employees = self.workflow.requests.employees().await;
                self.popup_dialog = PopupDialog::grant_access(folders, employees);
                self.open_dialog(InputMode::ReadLine);
            }
            Key::Char('u') => {
                self.spawn_load(Tab::Requests);
            }
            _ => {}
        }
    }

    fn handle_authorized_keys(&mut self, key: Key) {
        match key {
            Key::Char('\n') => {
                if let Some(i) = self.selected_index() {
                    if self.authorized_view.toggle(i) {
                        self.redraw_terminal = true;
                    }
                }
            }
            Key::Char('u') => {
                self.spawn_load(Tab::Authorized);
            }
            _ => {}
        }
    }

    fn handle_log_keys(&mut self, key: Key) {
        if let Key::Delete = key {
            if let Some(i) = self.selected_index() {
                self.log_view.delete(i);
                self.log_view.select(Some(i));
                self.redraw_terminal = true;
            }
        }
    }

    // Only pending requests can be decided on
    fn ask_decision(&mut self, decision: Decision) {
        let Some(request) = self.selected_index().and_then(|i| self.requests_view.request(i)) else {
            return;
        };
        if !request.is_pending() {
            self.logger.info(format!("Request is already {}.", request.status));
            return;
        }
        self.confirm_dialog =
            ConfirmDialog::new(request.id.clone(), decision, request.folder_name(), request.employee_name());
        self.open_dialog(InputMode::Confirm);
    }

    fn handle_confirm_keys(&mut self, key: Key) {
        match key {
            Key::Esc | Key::Ctrl('c') => {
                self.close_dialog();
            }
            Key::Down | Key::Char('j') => {
                self.confirm_dialog.next();
                self.redraw_terminal = true;
            }
            Key::Up | Key::Char('k') => {
                self.confirm_dialog.previous();
                self.redraw_terminal = true;
            }
            Key::Char('\n') => {
                if let (true, Some((request_id, decision))) =
                    (self.confirm_dialog.is_confirmed(), self.confirm_dialog.decision.take())
                {
                    let workflow = self.workflow.clone();
                    task::spawn(async move {
                        let _res = workflow.set_request_status(&request_id, decision).await;
                    });
                }
                self.close_dialog();
            }
            _ => {}
        }
    }

    fn handle_dialog_input(&mut self, event: Event) {
        match event {
            Event::Key(Key::Esc) | Event::Key(Key::Ctrl('c')) => {
                self.close_dialog();
            }
            Event::Key(Key::Char('\n')) => {
                self.submit_dialog();
            }
            event => {
                self.popup_dialog.input(event);
            }
        }
        self.redraw_terminal = true;
    }

    // The dialog closes either way, validation failures show up in the log
    fn submit_dialog(&mut self) {
        let workflow = self.workflow.clone();
        let contents = self.popup_dialog.contents();
        match std::mem::take(&mut self.popup_dialog.purpose) {
            DialogPurpose::RequestAccess { folder_id } => {
                let reason = contents.into_iter().next().unwrap_or_default();
                task::spawn(async move {
                    let _res = workflow.submit_request(&folder_id, &reason).await;
                });
            }
            DialogPurpose::GrantAccess => {
                let [folder_id, employee_id, reason] = <[String; 3]>::try_from(contents).unwrap_or_default();
                task::spawn(async move {
                    let _res = workflow.grant_access(&folder_id, &employee_id, &reason).await;
                });
            }
            DialogPurpose::None => {}
        }
        self.close_dialog();
    }
}
