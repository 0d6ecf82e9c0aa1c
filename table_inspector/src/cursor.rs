//! Offset cursor over a result snapshot / 结果快照上的偏移游标
//!
//! `init` builds the snapshot once, each `execute` emits the next batch.
//! `init` 一次性构建快照，每次 `execute` 输出下一批。

use std::fmt;

use crate::{Chunk, Col, Val};

/// Entry that renders to one output row / 可渲染为一行输出的条目
pub trait Row {
  const COL_LI: &'static [Col];

  fn write(&self, out: &mut Vec<Val>);
}

/// Result buffer plus monotonically increasing offset
/// 结果缓冲及单调递增偏移
#[derive(Debug, Clone)]
pub struct Cursor<T> {
  li: Vec<T>,
  offset: usize,
}

impl<T: Row> Cursor<T> {
  pub fn new(li: Vec<T>) -> Self {
    Self { li, offset: 0 }
  }

  #[inline]
  pub fn offset(&self) -> usize {
    self.offset
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.li.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.li.is_empty()
  }

  #[inline]
  pub fn is_done(&self) -> bool {
    self.offset >= self.li.len()
  }

  /// Fill `out` from the current offset, return the cardinality
  /// 从当前偏移填充 `out`，返回行数
  pub fn execute(&mut self, out: &mut Chunk) -> usize {
    out.clear();
    while self.offset < self.li.len() && !out.is_full() {
      let mut row = Vec::with_capacity(T::COL_LI.len());
      self.li[self.offset].write(&mut row);
      out.push(row);
      self.offset += 1;
    }
    out.len()
  }
}

/// Type-erased cursor / 类型擦除的游标
pub trait ScanT {
  fn col_li(&self) -> &'static [Col];
  fn execute(&mut self, out: &mut Chunk) -> usize;
  fn is_done(&self) -> bool;
}

impl<T: Row> ScanT for Cursor<T> {
  #[inline]
  fn col_li(&self) -> &'static [Col] {
    T::COL_LI
  }

  #[inline]
  fn execute(&mut self, out: &mut Chunk) -> usize {
    Cursor::execute(self, out)
  }

  #[inline]
  fn is_done(&self) -> bool {
    Cursor::is_done(self)
  }
}

/// Running table function: yields chunks of at most `batch_rows` rows
/// 运行中的表函数：每次产出至多 `batch_rows` 行
pub struct Scan {
  inner: Box<dyn ScanT>,
  batch_rows: usize,
}

impl Scan {
  pub fn new<T: Row + 'static>(cursor: Cursor<T>, batch_rows: usize) -> Self {
    Self {
      inner: Box::new(cursor),
      batch_rows,
    }
  }

  #[inline]
  pub fn col_li(&self) -> &'static [Col] {
    self.inner.col_li()
  }

  #[inline]
  pub fn is_done(&self) -> bool {
    self.inner.is_done()
  }

  #[inline]
  pub fn execute(&mut self, out: &mut Chunk) -> usize {
    self.inner.execute(out)
  }

  /// Drain every remaining row / 取出剩余全部行
  pub fn collect_row_li(self) -> Vec<Vec<Val>> {
    self.flat_map(Chunk::into_row_li).collect()
  }
}

impl fmt::Debug for Scan {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Scan")
      .field("col_li", &self.col_li())
      .field("batch_rows", &self.batch_rows)
      .field("done", &self.is_done())
      .finish()
  }
}

impl Iterator for Scan {
  type Item = Chunk;

  fn next(&mut self) -> Option<Chunk> {
    if self.is_done() {
      return None;
    }
    let mut chunk = Chunk::new(self.col_li(), self.batch_rows);
    self.execute(&mut chunk);
    Some(chunk)
  }
}
