//! Format-neutral tabular report document.
//!
//! A [`ReportDocument`] is a grid of typed cells. Every cell carries a
//! [`CellStyle`] so that any writer renders statuses with the same visual
//! distinction. The column geometry is fixed: two identity columns, 31 day
//! columns and three totals columns, whatever the month length.

use serde::Serialize;

/// Number of reserved day columns in every section.
pub const DAY_COLUMNS: usize = 31;

/// Column index of the first day column.
pub const FIRST_DAY_COLUMN: usize = 2;

/// Column index of the first totals column.
pub const FIRST_TOTAL_COLUMN: usize = FIRST_DAY_COLUMN + DAY_COLUMNS;

/// Total number of columns in the document.
pub const COLUMN_COUNT: usize = FIRST_TOTAL_COLUMN + 3;

/// The value held by a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// A reserved but unused cell.
    Empty,
    /// Text content.
    Text(String),
    /// A numeric counter.
    Number(u32),
}

/// Visual style of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    /// Document title.
    Title,
    /// Month section title.
    SectionTitle,
    /// Column header.
    Header,
    /// Header cell of a rest day column.
    RestDayHeader,
    /// Employee code and name.
    Employee,
    /// Present day.
    Present,
    /// Absent day.
    Absent,
    /// Half day.
    HalfDay,
    /// Work stoppage day.
    WorkStoppage,
    /// Rest day.
    RestDay,
    /// Reserved cell past the end of the month.
    Blank,
    /// Summary counter.
    Total,
}

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// What the cell shows.
    pub value: CellValue,
    /// How the cell is styled.
    pub style: CellStyle,
}

impl Cell {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>, style: CellStyle) -> Self {
        Self {
            value: CellValue::Text(value.into()),
            style,
        }
    }

    /// Creates a numeric cell.
    pub fn number(value: u32, style: CellStyle) -> Self {
        Self {
            value: CellValue::Number(value),
            style,
        }
    }

    /// Creates an empty cell.
    pub fn empty(style: CellStyle) -> Self {
        Self {
            value: CellValue::Empty,
            style,
        }
    }

    /// Returns the text content, if any.
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// What a row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Document title spanning every column.
    Title,
    /// Month title spanning every column.
    SectionTitle,
    /// Column headers with day numbers.
    Header,
    /// Weekday names under the day numbers.
    WeekdayHeader,
    /// One employee's statuses and totals.
    Employee,
    /// Empty separator between month sections.
    Spacer,
}

/// One row of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// What the row represents.
    pub kind: RowKind,
    /// The cells, left to right.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Creates a single-cell row that spans the full column width.
    pub fn spanning(kind: RowKind, text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            kind,
            cells: vec![Cell::text(text, style)],
        }
    }

    /// Creates an empty separator row.
    pub const fn spacer() -> Self {
        Self {
            kind: RowKind::Spacer,
            cells: Vec::new(),
        }
    }

    /// Returns true if the row's single cell is merged across every column.
    pub fn spans_all_columns(&self) -> bool {
        matches!(self.kind, RowKind::Title | RowKind::SectionTitle)
    }

    /// Returns the cells in the reserved day columns, or an empty slice for rows
    /// without the full column layout.
    pub fn day_cells(&self) -> &[Cell] {
        self.cells
            .get(FIRST_DAY_COLUMN..FIRST_TOTAL_COLUMN)
            .unwrap_or(&[])
    }

    /// Returns the cells in the totals columns, or an empty slice for rows
    /// without the full column layout.
    pub fn total_cells(&self) -> &[Cell] {
        self.cells.get(FIRST_TOTAL_COLUMN..COLUMN_COUNT).unwrap_or(&[])
    }
}

/// The rows rendered for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSection {
    /// The calendar year.
    pub year: i32,
    /// Zero-based month index.
    pub month: u32,
    /// Section title, headers and employee rows.
    pub rows: Vec<Row>,
}

impl MonthSection {
    /// Returns the employee rows of the section.
    pub fn employee_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.kind == RowKind::Employee)
    }

    /// Returns the day-number header row.
    pub fn header(&self) -> Option<&Row> {
        self.rows.iter().find(|row| row.kind == RowKind::Header)
    }
}

/// A complete report: a title row followed by one or more month sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    title: Row,
    sections: Vec<MonthSection>,
    column_widths: Vec<f64>,
}

impl ReportDocument {
    /// Creates a document from its title and sections, using the standard column widths.
    pub fn new(title: Row, sections: Vec<MonthSection>) -> Self {
        Self {
            title,
            sections,
            column_widths: standard_column_widths(),
        }
    }

    /// Returns the title row.
    pub fn title(&self) -> &Row {
        &self.title
    }

    /// Returns the month sections in calendar order.
    pub fn sections(&self) -> &[MonthSection] {
        &self.sections
    }

    /// Returns the width of every column, left to right.
    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    /// Returns every row in output order, with a spacer row between sections.
    pub fn rows(&self) -> Vec<&Row> {
        let mut rows = vec![&self.title];
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                rows.push(&SPACER);
            }
            rows.extend(section.rows.iter());
        }
        rows
    }
}

static SPACER: Row = Row::spacer();

fn standard_column_widths() -> Vec<f64> {
    let mut widths = Vec::with_capacity(COLUMN_COUNT);
    widths.push(14.0); // Employee ID
    widths.push(26.0); // Employee Name
    widths.extend(std::iter::repeat_n(5.0, DAY_COLUMNS));
    widths.extend([10.0, 10.0, 8.0]);
    widths
}
