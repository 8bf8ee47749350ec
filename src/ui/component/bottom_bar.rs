use ratatui::layout::Alignment;
use ratatui::widgets::Paragraph;

pub struct BottomBar<'a> {
    pub widget: Paragraph<'a>,
}

impl BottomBar<'_> {
    pub fn new(profile: &str, api_host: &str) -> Self {
        let widget = Paragraph::new(format!("Profile: {profile} | Backend: {api_host}")).alignment(Alignment::Right);
        Self { widget }
    }
}
