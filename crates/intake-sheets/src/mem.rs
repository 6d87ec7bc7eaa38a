//! In-memory implementation of the store.
//!
//! Used by every test and by local development without Google
//! credentials. Mirrors the vendor semantics the rest of the system
//! relies on: append lands after the last data row of a tab, range reads
//! drop trailing empty cells and rows, and a range addressing a missing
//! tab is an error.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::SheetsError;
use crate::store::{AccessRole, CreatedDocument, SheetsStore};

#[derive(Clone, Default)]
pub struct MemorySheets {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    documents: HashMap<String, Document>,
}

struct Document {
    title: String,
    tabs: Vec<Tab>,
    grants: Vec<(String, AccessRole)>,
}

impl Document {
    fn tab(&self, title: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.title == title)
    }

    fn tab_mut(&mut self, title: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.title == title)
    }
}

struct Tab {
    title: String,
    grid: Vec<Vec<String>>,
}

/// A parsed A1-notation range, normalized to 0-based columns and 1-based
/// rows. `None` bounds are open (limited by the data actually present).
struct Rect {
    tab: String,
    start_col: usize,
    start_row: usize,
    end_col: Option<usize>,
    end_row: Option<usize>,
}

struct CellRef {
    col: usize,
    row: Option<usize>,
}

fn parse_cell(s: &str) -> Option<CellRef> {
    let letters: String = s.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    let rest = &s[letters.len()..];
    if letters.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let col = letters
        .chars()
        .fold(0usize, |acc, c| acc * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1))
        - 1;
    let row = if rest.is_empty() {
        None
    } else {
        match rest.parse::<usize>() {
            Ok(r) if r >= 1 => Some(r),
            _ => return None,
        }
    };

    Some(CellRef { col, row })
}

fn parse_range(range: &str) -> Result<Rect, SheetsError> {
    let malformed = || SheetsError::MalformedRange(range.to_string());

    let (tab, cells) = match range.split_once('!') {
        Some((tab, cells)) => (tab, Some(cells)),
        None => (range, None),
    };
    if tab.is_empty() {
        return Err(malformed());
    }

    let Some(cells) = cells.filter(|c| !c.is_empty()) else {
        // Bare tab reference: the whole grid.
        return Ok(Rect {
            tab: tab.to_string(),
            start_col: 0,
            start_row: 1,
            end_col: None,
            end_row: None,
        });
    };

    let (start, end) = match cells.split_once(':') {
        Some((a, b)) => {
            let start = parse_cell(a).ok_or_else(malformed)?;
            let end = parse_cell(b).ok_or_else(malformed)?;
            (start, end)
        }
        None => {
            let start = parse_cell(cells).ok_or_else(malformed)?;
            let end = CellRef {
                col: start.col,
                row: start.row,
            };
            (start, end)
        }
    };

    Ok(Rect {
        tab: tab.to_string(),
        start_col: start.col,
        start_row: start.row.unwrap_or(1),
        end_col: Some(end.col),
        end_row: end.row,
    })
}

impl MemorySheets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document under a fixed id (tests address the central
    /// registry this way).
    pub fn insert_document(&self, document_id: &str, title: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.documents.insert(
            document_id.to_string(),
            Document {
                title: title.to_string(),
                tabs: Vec::new(),
                grants: Vec::new(),
            },
        );
    }

    /// Seed (or replace) a tab with the given grid.
    pub fn seed_tab(&self, document_id: &str, tab: &str, grid: Vec<Vec<String>>) {
        let mut inner = self.inner.lock().unwrap();
        let doc = inner
            .documents
            .get_mut(document_id)
            .expect("seed_tab: unknown document");
        match doc.tab_mut(tab) {
            Some(existing) => existing.grid = grid,
            None => doc.tabs.push(Tab {
                title: tab.to_string(),
                grid,
            }),
        }
    }

    /// Full grid of a tab, for assertions. `None` when the document or
    /// tab does not exist.
    pub fn tab_rows(&self, document_id: &str, tab: &str) -> Option<Vec<Vec<String>>> {
        let inner = self.inner.lock().unwrap();
        Some(inner.documents.get(document_id)?.tab(tab)?.grid.clone())
    }

    pub fn tab_titles(&self, document_id: &str) -> Option<Vec<String>> {
        let inner = self.inner.lock().unwrap();
        Some(
            inner
                .documents
                .get(document_id)?
                .tabs
                .iter()
                .map(|t| t.title.clone())
                .collect(),
        )
    }

    pub fn document_count(&self) -> usize {
        self.inner.lock().unwrap().documents.len()
    }

    pub fn document_title(&self, document_id: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        Some(inner.documents.get(document_id)?.title.clone())
    }

    /// Access grants recorded for a document, as (email, role) pairs.
    pub fn grants(&self, document_id: &str) -> Vec<(String, AccessRole)> {
        let inner = self.inner.lock().unwrap();
        inner
            .documents
            .get(document_id)
            .map(|d| d.grants.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SheetsStore for MemorySheets {
    async fn get_range(
        &self,
        document_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, SheetsError> {
        let rect = parse_range(range)?;
        let inner = self.inner.lock().unwrap();
        let doc = inner
            .documents
            .get(document_id)
            .ok_or_else(|| SheetsError::DocumentNotFound {
                document_id: document_id.to_string(),
            })?;
        let tab = doc.tab(&rect.tab).ok_or_else(|| SheetsError::RangeNotFound {
            document_id: document_id.to_string(),
            range: range.to_string(),
        })?;

        let last_row = rect.end_row.unwrap_or(tab.grid.len()).min(tab.grid.len());
        let mut out = Vec::new();
        for r in rect.start_row..=last_row {
            let row = &tab.grid[r - 1];
            let end = rect
                .end_col
                .map(|c| c + 1)
                .unwrap_or(row.len())
                .min(row.len());
            let mut cells: Vec<String> = if rect.start_col < end {
                row[rect.start_col..end].to_vec()
            } else {
                Vec::new()
            };
            while cells.last().is_some_and(|c| c.is_empty()) {
                cells.pop();
            }
            out.push(cells);
        }
        while out.last().is_some_and(|r| r.is_empty()) {
            out.pop();
        }
        Ok(out)
    }

    async fn append_rows(
        &self,
        document_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<(), SheetsError> {
        let rect = parse_range(range)?;
        let mut inner = self.inner.lock().unwrap();
        let doc = inner
            .documents
            .get_mut(document_id)
            .ok_or_else(|| SheetsError::DocumentNotFound {
                document_id: document_id.to_string(),
            })?;
        let tab = doc
            .tab_mut(&rect.tab)
            .ok_or_else(|| SheetsError::RangeNotFound {
                document_id: document_id.to_string(),
                range: range.to_string(),
            })?;

        let last_data = tab
            .grid
            .iter()
            .rposition(|row| row.iter().any(|c| !c.is_empty()))
            .map(|i| i + 1)
            .unwrap_or(0);
        write_rows(&mut tab.grid, last_data + 1, rect.start_col, rows);
        Ok(())
    }

    async fn update_range(
        &self,
        document_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<(), SheetsError> {
        let rect = parse_range(range)?;
        let mut inner = self.inner.lock().unwrap();
        let doc = inner
            .documents
            .get_mut(document_id)
            .ok_or_else(|| SheetsError::DocumentNotFound {
                document_id: document_id.to_string(),
            })?;
        let tab = doc
            .tab_mut(&rect.tab)
            .ok_or_else(|| SheetsError::RangeNotFound {
                document_id: document_id.to_string(),
                range: range.to_string(),
            })?;

        write_rows(&mut tab.grid, rect.start_row, rect.start_col, rows);
        Ok(())
    }

    async fn create_document(
        &self,
        title: &str,
        initial_tabs: &[&str],
    ) -> Result<CreatedDocument, SheetsError> {
        let document_id = Uuid::new_v4().to_string();
        let mut inner = self.inner.lock().unwrap();
        inner.documents.insert(
            document_id.clone(),
            Document {
                title: title.to_string(),
                tabs: initial_tabs
                    .iter()
                    .map(|t| Tab {
                        title: t.to_string(),
                        grid: Vec::new(),
                    })
                    .collect(),
                grants: Vec::new(),
            },
        );
        let url = format!("https://docs.google.com/spreadsheets/d/{document_id}");
        Ok(CreatedDocument { document_id, url })
    }

    async fn add_tab(&self, document_id: &str, title: &str) -> Result<(), SheetsError> {
        let mut inner = self.inner.lock().unwrap();
        let doc = inner
            .documents
            .get_mut(document_id)
            .ok_or_else(|| SheetsError::DocumentNotFound {
                document_id: document_id.to_string(),
            })?;
        if doc.tab(title).is_some() {
            return Err(SheetsError::AddTab(format!(
                "a tab named {title:?} already exists"
            )));
        }
        doc.tabs.push(Tab {
            title: title.to_string(),
            grid: Vec::new(),
        });
        Ok(())
    }

    async fn grant_access(
        &self,
        document_id: &str,
        email: &str,
        role: AccessRole,
    ) -> Result<(), SheetsError> {
        let mut inner = self.inner.lock().unwrap();
        let doc = inner
            .documents
            .get_mut(document_id)
            .ok_or_else(|| SheetsError::DocumentNotFound {
                document_id: document_id.to_string(),
            })?;
        doc.grants.push((email.to_string(), role));
        Ok(())
    }
}

/// Write `rows` into the grid with its top-left cell at
/// (`start_row` 1-based, `start_col` 0-based), growing the grid as needed.
fn write_rows(grid: &mut Vec<Vec<String>>, start_row: usize, start_col: usize, rows: Vec<Vec<String>>) {
    for (i, cells) in rows.into_iter().enumerate() {
        let r = start_row + i;
        if grid.len() < r {
            grid.resize(r, Vec::new());
        }
        let row = &mut grid[r - 1];
        for (j, cell) in cells.into_iter().enumerate() {
            let c = start_col + j;
            if row.len() <= c {
                row.resize(c + 1, String::new());
            }
            row[c] = cell;
        }
    }
}
