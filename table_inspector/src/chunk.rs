//! Output chunk / 输出数据块

use crate::{Col, Val};

/// Bounded batch of output rows / 有上限的输出行批次
#[derive(Debug, Clone)]
pub struct Chunk {
  col_li: &'static [Col],
  cap: usize,
  row_li: Vec<Vec<Val>>,
}

impl Chunk {
  pub fn new(col_li: &'static [Col], cap: usize) -> Self {
    let cap = cap.max(1);
    Self {
      col_li,
      cap,
      row_li: Vec::with_capacity(cap),
    }
  }

  #[inline]
  pub fn col_li(&self) -> &'static [Col] {
    self.col_li
  }

  #[inline]
  pub fn cap(&self) -> usize {
    self.cap
  }

  /// Cardinality / 行数
  #[inline]
  pub fn len(&self) -> usize {
    self.row_li.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.row_li.is_empty()
  }

  #[inline]
  pub fn is_full(&self) -> bool {
    self.row_li.len() >= self.cap
  }

  #[inline]
  pub fn clear(&mut self) {
    self.row_li.clear();
  }

  pub(crate) fn push(&mut self, row: Vec<Val>) {
    debug_assert_eq!(row.len(), self.col_li.len());
    debug_assert!(!self.is_full());
    self.row_li.push(row);
  }

  #[inline]
  pub fn get(&self, row: usize, col: usize) -> Option<&Val> {
    self.row_li.get(row)?.get(col)
  }

  /// Value by column name / 按列名取值
  pub fn by_name(&self, row: usize, name: &str) -> Option<&Val> {
    let col = self.col_li.iter().position(|c| c.name == name)?;
    self.get(row, col)
  }

  #[inline]
  pub fn row_li(&self) -> &[Vec<Val>] {
    &self.row_li
  }

  #[inline]
  pub fn into_row_li(self) -> Vec<Vec<Val>> {
    self.row_li
  }
}
