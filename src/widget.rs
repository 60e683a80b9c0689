//! The column view widget.
//!
//! Owns the row store, selection state, and the currently built element
//! tree. Every mutator reconstructs the entire body tree from the store
//! before returning; rendering only draws whatever tree is current. This
//! full-rebuild strategy is deliberate — there is no diffing.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::store::{RowId, RowSnapshot, RowStore};
use crate::style::Styles;
use crate::view::{self, CHECKED, CheckTarget, Element, ElementKind, Line, UNCHECKED};

/// One column of the schema: header label and fixed display width.
/// The schema is fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: String,
    pub width: u16,
}

/// Scrollable, sortable, checkbox-selectable tabular view.
#[derive(Debug)]
pub struct ColumnView {
    columns: Vec<ColumnSpec>,
    enable_check: bool,
    store: RowStore,
    select_all: bool,
    sort_column: Option<usize>,

    header: Line,
    body: Vec<Line>,
    scroll: usize,

    // On-screen rectangles from the last render, for mouse hit-testing.
    header_area: Rect,
    body_area: Rect,
}

impl ColumnView {
    /// Creates an empty view. `headers` and `widths` are parallel; when
    /// `widths` is shorter, the remaining columns get zero width and are
    /// never positioned. `enable_check` gates the checkbox column entirely,
    /// in the header ("select all") and in every row.
    pub fn new<H, S>(headers: H, widths: &[u16], enable_check: bool) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<ColumnSpec> = headers
            .into_iter()
            .enumerate()
            .map(|(i, header)| ColumnSpec {
                header: header.into(),
                width: widths.get(i).copied().unwrap_or(0),
            })
            .collect();
        let store = RowStore::new(columns.len());
        let mut view = Self {
            header: Line {
                elements: Vec::new(),
                min_size: (0, 0),
            },
            body: Vec::new(),
            store,
            select_all: false,
            sort_column: None,
            enable_check,
            columns,
            scroll: 0,
            header_area: Rect::default(),
            body_area: Rect::default(),
        };
        view.rebuild();
        view
    }

    // --- mutators -------------------------------------------------------

    /// Appends a row (padded to the column count) and returns its ID.
    pub fn add_row(&mut self, cells: Vec<String>) -> RowId {
        let id = self.store.add_row(cells);
        self.rebuild();
        id
    }

    /// Replaces a row's cells wholesale. Out-of-bounds is a silent no-op.
    pub fn update_item(&mut self, row_index: usize, cells: Vec<String>) {
        self.store.update_item(row_index, cells);
        self.rebuild();
    }

    /// Replaces a single cell. Out-of-bounds on either axis is a no-op.
    pub fn update_column_item(&mut self, row_index: usize, col_index: usize, value: String) {
        self.store.update_column_item(row_index, col_index, value);
        self.rebuild();
    }

    /// Removes every checked row; survivors come out unchecked. The
    /// select-all control keeps its state, matching the widget's behavior
    /// of only forcing it off on a full reset.
    pub fn remove_selected(&mut self) {
        self.store.remove_selected();
        self.rebuild();
    }

    /// Clears everything: rows, selection, the ID counter, and the
    /// select-all control.
    pub fn remove_all(&mut self) {
        self.store.remove_all();
        self.select_all = false;
        self.scroll = 0;
        self.rebuild();
    }

    // --- interaction ----------------------------------------------------

    /// Stable ascending sort on `col`, as triggered by a header click.
    /// Selection travels with the rows.
    pub fn sort_by_column(&mut self, col: usize) {
        self.store.sort_by_column(col);
        self.sort_column = Some(col);
        self.rebuild();
    }

    /// Sets a single row's checkbox.
    pub fn set_row_checked(&mut self, id: RowId, checked: bool) {
        self.store.set_checked(id, checked);
        self.rebuild();
    }

    /// Toggles the select-all control, setting every present row at once.
    pub fn toggle_select_all(&mut self) {
        self.select_all = !self.select_all;
        self.store.set_all_checked(self.select_all);
        self.rebuild();
    }

    /// Routes a left-click at screen coordinates to the element under it:
    /// header buttons sort, checkboxes toggle, anything else is ignored.
    pub fn click(&mut self, x: u16, y: u16) {
        match self.hit_test(x, y) {
            Some(Hit::SelectAll) => self.toggle_select_all(),
            Some(Hit::SortColumn(col)) => self.sort_by_column(col),
            Some(Hit::ToggleRow(id, checked)) => self.set_row_checked(id, !checked),
            None => {}
        }
    }

    /// Resolves screen coordinates to the interactive element under them,
    /// using the rectangles recorded by the last render.
    fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        let pos = Position::new(x, y);
        if self.header_area.contains(pos) {
            let rel = x - self.header_area.x;
            return match hit(&self.header.elements, rel)? {
                ElementKind::Checkbox {
                    target: CheckTarget::SelectAll,
                    ..
                } => Some(Hit::SelectAll),
                ElementKind::HeaderButton { col, .. } => Some(Hit::SortColumn(*col)),
                _ => None,
            };
        }
        if self.body_area.contains(pos) {
            let index = (y - self.body_area.y) as usize + self.scroll;
            let rel = x - self.body_area.x;
            let line = self.body.get(index)?;
            if let ElementKind::Checkbox {
                checked,
                target: CheckTarget::Row(id),
            } = hit(&line.elements, rel)?
            {
                return Some(Hit::ToggleRow(*id, *checked));
            }
        }
        None
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
        debug!(scroll = self.scroll, "scrolled");
    }

    /// One viewport height, from the last render.
    pub fn page_size(&self) -> usize {
        (self.body_area.height as usize).max(1)
    }

    // --- readers --------------------------------------------------------

    /// Snapshots of all checked rows, in display order.
    pub fn list_selected(&self) -> Vec<RowSnapshot> {
        self.store.list_selected()
    }

    /// Snapshots of every row, in display order.
    pub fn list_all(&self) -> Vec<RowSnapshot> {
        self.store.list_all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Current state of the header's select-all control.
    pub fn select_all_checked(&self) -> bool {
        self.select_all
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Minimum size of the widget content: the fixed-column line width by
    /// header plus all body lines.
    pub fn min_size(&self) -> (u16, u16) {
        let (width, header_height) = self.header.min_size;
        let body_height: u16 = self
            .body
            .iter()
            .map(|line| line.min_size.1)
            .sum();
        (width, header_height.saturating_add(body_height))
    }

    // --- rendering ------------------------------------------------------

    /// Draws the header and the visible slice of the body into `area`, and
    /// records the on-screen rectangles for subsequent hit-testing.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            self.header_area = Rect::default();
            self.body_area = Rect::default();
            return;
        }
        self.header_area = Rect { height: 1, ..area };
        self.body_area = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };

        // Clamp against the now-known viewport.
        self.scroll = self.scroll.min(self.max_scroll());

        let buf = frame.buffer_mut();
        buf.set_style(self.header_area, Styles::header());
        draw_line(buf, &self.header, self.header_area, true);

        let visible = self
            .body
            .iter()
            .skip(self.scroll)
            .take(self.body_area.height as usize);
        for (i, line) in visible.enumerate() {
            let line_area = Rect {
                y: self.body_area.y + i as u16,
                height: 1,
                ..self.body_area
            };
            draw_line(buf, line, line_area, false);
        }
    }

    /// Full rebuild from current store state. The previous body tree is
    /// discarded wholesale.
    fn rebuild(&mut self) {
        self.header = view::build_header(
            &self.columns,
            self.enable_check,
            self.select_all,
            self.sort_column,
        );
        self.body = view::build_body(&self.store, &self.columns, self.enable_check);
        self.scroll = self.scroll.min(self.body.len().saturating_sub(1));
        debug!(rows = self.body.len(), "body rebuilt");
    }

    fn max_scroll(&self) -> usize {
        let viewport = self.body_area.height as usize;
        if viewport == 0 {
            return self.body.len().saturating_sub(1);
        }
        self.body.len().saturating_sub(viewport)
    }
}

/// An interactive element resolved from a click position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    SelectAll,
    SortColumn(usize),
    ToggleRow(RowId, bool),
}

/// Finds the element whose assigned column contains the relative x offset.
fn hit(elements: &[Element], rel_x: u16) -> Option<&ElementKind> {
    elements
        .iter()
        .find(|e| rel_x >= e.area.x && rel_x < e.area.x.saturating_add(e.area.width))
        .map(|e| &e.kind)
}

/// Draws one line's elements at their layout-assigned offsets, clipped to
/// the line's on-screen area.
fn draw_line(buf: &mut Buffer, line: &Line, area: Rect, header: bool) {
    for element in &line.elements {
        let x = area.x.saturating_add(element.area.x);
        if x >= area.right() {
            continue;
        }
        let max_width = (area.right() - x).min(element.area.width) as usize;
        let (text, style) = match &element.kind {
            ElementKind::Checkbox { checked, .. } => {
                let glyph = if *checked { CHECKED } else { UNCHECKED };
                let style = if header {
                    Styles::header()
                } else {
                    Styles::checkbox()
                };
                (glyph, style)
            }
            ElementKind::HeaderButton { label, .. } => (label.as_str(), Styles::header()),
            ElementKind::Label { text } => (text.as_str(), Styles::cell()),
        };
        buf.set_stringn(x, area.y, text, max_width, style);
    }
}
