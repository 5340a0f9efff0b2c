//
//  tc-goggles
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Tables rendered with `comfy_table`, using UTF-8 box-drawing characters and
//! dynamic content arrangement to fit the terminal width.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a new styled table with default settings.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing formatted tables with a fluent API.
///
/// Headers are shown in cyan when color is enabled. Color defaults to
/// whether stdout is a color-capable terminal.
///
/// ```rust
/// use tc_goggles::output::TableBuilder;
///
/// let table = TableBuilder::new()
///     .color(false)
///     .headers(["ID", "Name"])
///     .row(["Proj_Build", "Build"])
///     .build();
///
/// assert!(table.to_string().contains("Proj_Build"));
/// ```
pub struct TableBuilder {
    table: Table,
    headers: Vec<String>,
    color: bool,
}

impl TableBuilder {
    /// Starts an empty table without headers.
    pub fn new() -> Self {
        Self {
            table: create_table(),
            headers: Vec::new(),
            color: console::colors_enabled(),
        }
    }

    /// Enables or disables colored headers.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a data row.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(cells);
        self
    }

    /// Prints the table to stdout.
    pub fn print(self) {
        println!("{}", self.build());
    }

    /// Finishes the table, applying the header row.
    pub fn build(mut self) -> Table {
        if !self.headers.is_empty() {
            let color = self.color;
            let header: Vec<Cell> = self
                .headers
                .iter()
                .map(|h| {
                    let cell = Cell::new(h);
                    if color {
                        cell.fg(Color::Cyan)
                    } else {
                        cell
                    }
                })
                .collect();
            self.table.set_header(header);
        }
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
