use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct Layouts {
    main_vertical: Layout,
}

impl Layouts {
    pub fn new() -> Self {
        let main_vertical = Layout::default().direction(Direction::Vertical).constraints([
            Constraint::Length(1),      // tab bar
            Constraint::Length(1),      // hotkey bar
            Constraint::Percentage(70), // table of the active tab
            Constraint::Fill(1),        // log view
            Constraint::Length(1),      // bottom bar
        ]);

        Self { main_vertical }
    }
}

pub struct Rectangles {
    pub main_vertical: Rc<[Rect]>,
    pub confirmdialog: Rc<[Rect]>,
    pub dialogpopup: Rc<[Rect]>,
}

impl Rectangles {
    pub fn recalculate(&mut self, layout: &Layouts, window_size: Rect) {
        self.main_vertical = layout.main_vertical.split(window_size);
    }

    // Title line, then a label and an input box for every field
    pub fn recalculate_popup(&mut self, field_count: usize, window_size: Rect) {
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend((0..field_count).map(|_| Constraint::Length(3)));
        let dialog_vertical = Layout::default().direction(Direction::Vertical).constraints(constraints).flex(Flex::Center);

        let dialog_horizontal =
            Layout::default().direction(Direction::Horizontal).constraints([Constraint::Max(80)]).flex(Flex::Center);

        self.dialogpopup = dialog_vertical.split(dialog_horizontal.split(window_size)[0]);
    }

    pub fn recalculate_confirmdialog(&mut self, list_height: u16, window_size: Rect) {
        let dialog_vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(list_height + 2)])
            .flex(Flex::Center);

        let dialog_horizontal =
            Layout::default().direction(Direction::Horizontal).constraints([Constraint::Max(70)]).flex(Flex::Center);

        self.confirmdialog = dialog_vertical.split(dialog_horizontal.split(window_size)[0]);
    }
}

// The label column next to each input box
pub fn label_and_input(row: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Fill(1)])
        .split(row)
}

impl Default for Rectangles {
    fn default() -> Self {
        Self {
            main_vertical: [Rect::default(); 5].into(),
            confirmdialog: [Rect::default()].into(),
            dialogpopup: [Rect::default()].into(),
        }
    }
}
