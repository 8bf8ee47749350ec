use super::common::*;
use crate::access::{Folder, Library};
use crate::util::format;
use ratatui::layout::Constraint;
use ratatui::style::{Style, Stylize};
use ratatui::text::Text;
use ratatui::widgets::{Block, Cell, Row, Table, TableState};
use std::collections::HashSet;
use std::sync::atomic::Ordering;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Node {
    Folder { key: String },
    Subfolder { key: String },
    File,
}

// Folder > subfolder > file tree of everything the employee may open
pub struct AuthorizedTable<'a> {
    headers: Row<'a>,
    widths: [Constraint; 3],
    library: Library,
    folders: Vec<Folder>,
    expanded: HashSet<String>,
    nodes: Vec<Node>,
    pub block: Block<'a>,
    pub highlight_style: Style,
    pub state: TableState,
    pub widget: Table<'a>,
    pub len: usize,
}

impl AuthorizedTable<'_> {
    pub fn new(library: Library) -> Self {
        let block = DEFAULT_BLOCK.title(" Training material ");
        let headers = Row::new(vec![
            Cell::from(header_text("Name")),
            Cell::from(header_text("Type")),
            Cell::from(header_text("Download")),
        ]);
        let widths = [Constraint::Ratio(2, 5), Constraint::Length(8), Constraint::Fill(1)];

        Self {
            headers,
            widths,
            library,
            folders: vec![],
            expanded: HashSet::new(),
            nodes: vec![],
            block,
            highlight_style: Style::default(),
            state: TableState::default(),
            widget: Table::default().widths(widths),
            len: 0,
        }
    }

    pub async fn refresh(&mut self) -> bool {
        if self.library.has_changed.swap(false, Ordering::Relaxed) {
            self.folders = self.library.snapshot().await;
            self.rebuild();
            return true;
        }
        false
    }

    // Returns true if the row at index could be expanded or collapsed
    pub fn toggle(&mut self, index: usize) -> bool {
        let key = match self.nodes.get(index) {
            Some(Node::Folder { key }) | Some(Node::Subfolder { key }) => key.clone(),
            Some(Node::File) | None => return false,
        };
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        let mut nodes = vec![];
        let mut rows = vec![];
        for folder in &self.folders {
            let folder_key = folder.id.clone();
            let folder_open = self.expanded.contains(&folder_key);
            let badge = format::subfolder_badge(folder.subfolders.len()).unwrap_or_default();
            rows.push(Row::new(vec![
                Cell::from(Text::from(format!("{} {}", marker(folder_open), folder.name)).bold()),
                Cell::from(""),
                Cell::from(badge),
            ]));
            nodes.push(Node::Folder { key: folder_key.clone() });
            if !folder_open {
                continue;
            }
            for (i, subfolder) in folder.subfolders.iter().enumerate() {
                let subfolder_key = format!("{folder_key}/{i}");
                let subfolder_open = self.expanded.contains(&subfolder_key);
                rows.push(Row::new(vec![
                    Cell::from(format!("  {} {}", marker(subfolder_open), subfolder.name)),
                    Cell::from(""),
                    Cell::from(format!("{} files", subfolder.files.len())),
                ]));
                nodes.push(Node::Subfolder { key: subfolder_key });
                if !subfolder_open {
                    continue;
                }
                for file in &subfolder.files {
                    rows.push(Row::new(vec![
                        Cell::from(format!("      {}", file.original_name)),
                        Cell::from(file.kind().to_string()),
                        Cell::from(file.download_url.clone()),
                    ]));
                    nodes.push(Node::File);
                }
            }
        }
        let rows: Vec<Row> = rows.into_iter().enumerate().map(|(i, row)| row.style(LIST_STYLES[i % 2])).collect();

        self.len = rows.len();
        self.nodes = nodes;
        if self.state.selected().is_some_and(|i| i >= self.len) {
            self.state.select(self.len.checked_sub(1));
        }
        self.widget = Table::new(rows, self.widths)
            .header(self.headers.to_owned())
            .block(self.block.to_owned())
            .row_highlight_style(self.highlight_style);
    }
}

fn marker(expanded: bool) -> &'static str {
    match expanded {
        true => "-",
        false => "+",
    }
}

#[cfg(test)]
mod tests {
    use super::AuthorizedTable;
    use crate::access::Library;
    use crate::api::{FileEntry, SubfolderEntry};
    use crate::test::folder_entry;

    #[tokio::test]
    async fn expand_and_collapse() {
        let mut entry = folder_entry("f1", "Onboarding", None);
        entry.subfolders = Some(vec![SubfolderEntry {
            id: Some("s1".to_string()),
            name: "Week 1".to_string(),
            files: Some(vec![FileEntry {
                id: Some("file1".to_string()),
                original_name: "handbook.pdf".to_string(),
                mimetype: "application/pdf".to_string(),
                secure_url: "https://cdn.example.com/handbook.pdf".to_string(),
            }]),
        }]);
        let library = Library::default();
        library.replace(vec![entry, folder_entry("f2", "Safety", None)]).await;

        let mut table = AuthorizedTable::new(library);
        assert!(table.refresh().await);
        assert_eq!(table.len, 2);

        assert!(table.toggle(0));
        assert_eq!(table.len, 3);
        assert!(table.toggle(1));
        assert_eq!(table.len, 4);
        assert!(!table.toggle(2));

        assert!(table.toggle(0));
        assert_eq!(table.len, 2);
        // Subfolders stay open underneath a collapsed folder
        assert!(table.toggle(0));
        assert_eq!(table.len, 4);
    }
}
