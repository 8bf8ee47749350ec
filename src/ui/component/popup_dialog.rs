use super::common::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use termion::event::{Event, Key};
use tui_textarea::{CursorMove, TextArea};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum DialogPurpose {
    #[default]
    None,
    RequestAccess {
        folder_id: String,
    },
    GrantAccess,
}

// (id, name) pairs a field can be filled from
pub type Choices = Vec<(String, String)>;

/* One or more labeled single line inputs. Tab and the arrow keys move between fields. Fields with choices can also
 * be filled with Ctrl-n and Ctrl-p, which cycle through them and show the chosen name next to the label. */
#[derive(Default)]
pub struct PopupDialog<'a> {
    pub purpose: DialogPurpose,
    pub title: Paragraph<'a>,
    pub labels: Vec<Paragraph<'a>>,
    pub fields: Vec<TextArea<'a>>,
    label_names: Vec<String>,
    choices: Vec<Choices>,
    picked: Vec<Option<usize>>,
    active: usize,
}

impl PopupDialog<'_> {
    pub fn new(purpose: DialogPurpose, title: String, labels: &[&str]) -> Self {
        let title = Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
        let label_names: Vec<String> = labels.iter().map(|label| label.to_string()).collect();
        let fields = labels
            .iter()
            .map(|_| {
                let mut textarea = TextArea::default();
                textarea.set_cursor_line_style(Style::default());
                textarea.set_block(DEFAULT_BLOCK);
                textarea
            })
            .collect();

        let mut ret = Self {
            purpose,
            title,
            labels: label_names.iter().map(|label| Paragraph::new(format!("\n{label}:"))).collect(),
            fields,
            choices: vec![vec![]; label_names.len()],
            picked: vec![None; label_names.len()],
            label_names,
            active: 0,
        };
        ret.restyle();
        ret
    }

    pub fn request_access(folder_id: String, folder_name: &str) -> Self {
        Self::new(
            DialogPurpose::RequestAccess { folder_id },
            format!("Request access to {folder_name}"),
            &["Reason"],
        )
    }

    pub fn grant_access(folders: Choices, employees: Choices) -> Self {
        let mut dialog =
            Self::new(DialogPurpose::GrantAccess, "Give access".to_string(), &["Folder id", "Instructor id", "Reason"]);
        dialog.choices[0] = folders;
        dialog.choices[1] = employees;
        dialog
    }

    pub fn input(&mut self, event: Event) {
        match event {
            Event::Key(Key::Char('\t')) | Event::Key(Key::Down) => {
                self.active = (self.active + 1) % self.fields.len().max(1);
                self.restyle();
            }
            Event::Key(Key::BackTab) | Event::Key(Key::Up) => {
                self.active = self.active.checked_sub(1).unwrap_or(self.fields.len().saturating_sub(1));
                self.restyle();
            }
            Event::Key(Key::Ctrl('n')) => {
                self.pick(true);
            }
            Event::Key(Key::Ctrl('p')) => {
                self.pick(false);
            }
            Event::Key(Key::Ctrl('z')) => {
                if let Some(field) = self.fields.get_mut(self.active) {
                    field.undo();
                }
            }
            Event::Key(Key::Ctrl('y')) => {
                if let Some(field) = self.fields.get_mut(self.active) {
                    field.redo();
                }
            }
            Event::Key(key) => {
                if let Some(field) = self.fields.get_mut(self.active) {
                    field.input(key);
                }
            }
            _ => {}
        }
    }

    fn pick(&mut self, forward: bool) {
        let i = self.active;
        let count = self.choices.get(i).map_or(0, |choices| choices.len());
        if count == 0 {
            return;
        }
        let next = match (self.picked[i], forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(n), true) => (n + 1) % count,
            (Some(n), false) => n.checked_sub(1).unwrap_or(count - 1),
        };
        self.picked[i] = Some(next);

        let (id, name) = &self.choices[i][next];
        let field = &mut self.fields[i];
        field.move_cursor(CursorMove::Head);
        field.delete_line_by_end();
        field.insert_str(id);
        self.labels[i] = Paragraph::new(format!("\n{}: {name}", self.label_names[i]));
    }

    fn restyle(&mut self) {
        let cursor_style = Style::default().fg(Color::Black).bg(Color::Gray);
        for (i, field) in self.fields.iter_mut().enumerate() {
            if i == self.active {
                field.set_cursor_style(cursor_style);
                field.set_block(DEFAULT_BLOCK.border_style(BLOCK_HIGHLIGHT_STYLE));
            } else {
                field.set_cursor_style(Style::default());
                field.set_block(DEFAULT_BLOCK);
            }
        }
    }

    pub fn contents(&self) -> Vec<String> {
        self.fields.iter().map(|field| field.lines().join(" ")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{DialogPurpose, PopupDialog};
    use termion::event::{Event, Key};

    fn type_str(dialog: &mut PopupDialog, text: &str) {
        for c in text.chars() {
            dialog.input(Event::Key(Key::Char(c)));
        }
    }

    fn choices(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(id, name)| (id.to_string(), name.to_string())).collect()
    }

    #[test]
    fn grant_dialog_fields() {
        let mut dialog = PopupDialog::grant_access(vec![], vec![]);
        assert_eq!(dialog.purpose, DialogPurpose::GrantAccess);
        type_str(&mut dialog, "f1");
        dialog.input(Event::Key(Key::Char('\t')));
        type_str(&mut dialog, "e1");
        dialog.input(Event::Key(Key::Down));
        type_str(&mut dialog, "new hire");
        dialog.input(Event::Key(Key::Down));
        type_str(&mut dialog, "!");
        assert_eq!(dialog.contents(), vec!["f1!", "e1", "new hire"]);
    }

    #[test]
    fn grant_dialog_picks_from_choices() {
        let folders = choices(&[("f1", "Onboarding"), ("f2", "Safety")]);
        let employees = choices(&[("e1", "jdoe")]);
        let mut dialog = PopupDialog::grant_access(folders, employees);

        type_str(&mut dialog, "typed");
        dialog.input(Event::Key(Key::Ctrl('n')));
        dialog.input(Event::Key(Key::Ctrl('n')));
        dialog.input(Event::Key(Key::Ctrl('n')));
        dialog.input(Event::Key(Key::Char('\t')));
        dialog.input(Event::Key(Key::Ctrl('p')));
        dialog.input(Event::Key(Key::Char('\t')));
        // The reason has nothing to pick from
        dialog.input(Event::Key(Key::Ctrl('n')));
        type_str(&mut dialog, "new hire");

        assert_eq!(dialog.contents(), vec!["f1", "e1", "new hire"]);
    }

    #[test]
    fn request_dialog() {
        let mut dialog = PopupDialog::request_access("f1".to_string(), "Onboarding");
        type_str(&mut dialog, "training");
        dialog.input(Event::Key(Key::Backspace));
        assert_eq!(dialog.contents(), vec!["trainin"]);
        assert_eq!(
            dialog.purpose,
            DialogPurpose::RequestAccess {
                folder_id: "f1".to_string()
            }
        );
    }
}
