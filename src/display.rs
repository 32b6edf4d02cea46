//! Text rendering for heap snapshots and sort results.
//!
//! Everything here works on read-only slices; nothing holds on to a heap.

use std::fmt::{self, Display};

pub const SEPARATOR: &str = "+-----+-------------------------+-------------------------+";

/// Renders values as `{a,b,c}`, or `{}` when there are none.
pub fn braced<T: Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{}}}", joined)
}

/// One row of the sort table: a test number with its input and output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortRow {
    pub test: usize,
    pub unsorted: String,
    pub sorted: String,
}

/// The heap sort results table.
#[derive(Clone, Debug, Default)]
pub struct SortTable {
    rows: Vec<SortRow>,
}

impl SortTable {
    pub fn new() -> Self {
        SortTable { rows: Vec::new() }
    }

    pub fn push<T: Display>(&mut self, unsorted: &[T], sorted: &[T]) {
        let test = self.rows.len() + 1;
        self.rows.push(SortRow {
            test,
            unsorted: braced(unsorted),
            sorted: braced(sorted),
        });
    }

    pub fn rows(&self) -> &[SortRow] {
        &self.rows
    }
}

fn line(
    f: &mut fmt::Formatter<'_>,
    a: &dyn Display,
    b: &dyn Display,
    c: &dyn Display,
) -> fmt::Result {
    writeln!(f, "|{:>5}|{:>25}|{:>25}|", a.to_string(), b.to_string(), c.to_string())
}

impl Display for SortTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        line(f, &"Test", &"Unsorted array", &"Sorted array")?;
        writeln!(f, "{}", SEPARATOR)?;
        for row in &self.rows {
            line(f, &row.test, &row.unsorted, &row.sorted)?;
        }
        Ok(())
    }
}
