// table.rs - Row and column shuffles over a generic table with anchors

use std::io::{Read, Write};

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TableError;
use crate::shuffle::{permutation, shuffle_in_place};

/// Ordered rows of ordered cells. Rows may be ragged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table<T> {
    rows: Vec<Vec<T>>,
}

/// Which leading row/column keeps its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchors {
    pub header_row: bool,
    pub first_column: bool,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            header_row: true,
            first_column: true,
        }
    }
}

impl<T> Table<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows, header included.
    #[inline(always)]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row; column shuffles are sized from it.
    #[inline(always)]
    pub fn n_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Cells of column `c`, skipping rows too short to have one.
    pub fn column(&self, c: usize) -> Vec<&T> {
        self.rows.iter().filter_map(|row| row.get(c)).collect()
    }
}

impl Table<String> {
    /// Read every CSV record as a row. The first record is data like any
    /// other; anchoring it is the shuffler's business.
    pub fn read_csv<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut rows = Vec::new();
        for record in rdr.records() {
            rows.push(record?.iter().map(str::to_owned).collect());
        }
        Ok(Self::new(rows))
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TableError> {
        let mut wtr = WriterBuilder::new().flexible(true).from_writer(writer);
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Permute the rows below the anchor row. Returns the advanced seed.
///
/// With fewer than two shuffleable rows nothing moves and `seed` is returned.
pub fn shuffle_rows<T>(table: &mut Table<T>, seed: u32, anchors: Anchors) -> u32 {
    let skip = anchors.header_row as usize;
    if table.rows.len() < skip + 2 {
        debug!(rows = table.rows.len(), "too few rows to shuffle");
        return seed;
    }
    let final_seed = shuffle_in_place(&mut table.rows[skip..], seed);
    debug!(seed, final_seed, rows = table.rows.len() - skip, "shuffled rows");
    final_seed
}

/// Permute the columns right of the anchor column, using one permutation for
/// every row so columns stay intact. Returns the advanced seed.
///
/// The width comes from the first row. Cells past that width stay at the end
/// of their row; rows narrower than it are left untouched.
pub fn shuffle_columns<T>(table: &mut Table<T>, seed: u32, anchors: Anchors) -> u32 {
    let skip = anchors.first_column as usize;
    let n_cols = table.n_cols();
    if n_cols < skip + 2 {
        debug!(cols = n_cols, "too few columns to shuffle");
        return seed;
    }
    let (perm, final_seed) = permutation(n_cols - skip, seed);
    debug!(seed, final_seed, ?perm, "shuffled columns");

    for (r, row) in table.rows.iter_mut().enumerate() {
        if row.len() < n_cols {
            debug!(row = r, len = row.len(), width = n_cols, "row too short, left in place");
            continue;
        }
        permute_segment(row, skip, &perm);
    }
    final_seed
}

/// Reorder `row[start..start + perm.len()]` so position `k` holds the old
/// `row[start + perm[k]]`.
fn permute_segment<T>(row: &mut Vec<T>, start: usize, perm: &[usize]) {
    let tail = row.split_off(start + perm.len());
    let mut segment: Vec<Option<T>> = row.split_off(start).into_iter().map(Some).collect();
    row.extend(perm.iter().filter_map(|&p| segment[p].take()));
    row.extend(tail);
}
