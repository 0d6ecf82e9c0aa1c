//! File-level block partition / 文件级块划分
//!
//! table_data + index + metadata + free_blocks == total.
//! Index blocks are the residual: persisted index layout is not reliable
//! after the index is rebuilt in memory.
//! 索引块数为剩余值：索引在内存中重建后其持久化布局不可靠。

use std::fmt;

use log::debug;
use size_fmt::format_pct;

use crate::{BlockSet, DbSize, Error, MetaBlockInfo, Result};

/// Storage category / 存储类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
  TableData,
  Index,
  Metadata,
  FreeBlocks,
  Total,
}

impl Component {
  /// Row order / 输出行顺序
  pub const ALL: [Component; 5] = [
    Component::TableData,
    Component::Index,
    Component::Metadata,
    Component::FreeBlocks,
    Component::Total,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      Component::TableData => "table_data",
      Component::Index => "index",
      Component::Metadata => "metadata",
      Component::FreeBlocks => "free_blocks",
      Component::Total => "total",
    }
  }
}

impl fmt::Display for Component {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
  pub component: Component,
  pub block_count: u64,
  pub size_bytes: u64,
  pub percentage: String,
}

/// Block counts per category / 各类别块数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
  pub total: u64,
  pub table_data: u64,
  pub index: u64,
  pub metadata: u64,
  pub free: u64,
  pub block_alloc_size: u64,
}

impl Summary {
  /// Infer index blocks from the other categories
  /// 由其它类别推算索引块数
  pub fn new(total: u64, free: u64, metadata: u64, table_data: u64, block_alloc_size: u64) -> Result<Self> {
    let index = total
      .checked_sub(table_data)
      .and_then(|n| n.checked_sub(metadata))
      .and_then(|n| n.checked_sub(free))
      .ok_or(Error::BlockOverflow {
        total,
        table_data,
        metadata,
        free,
      })?;

    debug!("blocks total {total} table_data {table_data} index {index} metadata {metadata} free {free}");

    Ok(Self {
      total,
      table_data,
      index,
      metadata,
      free,
      block_alloc_size,
    })
  }

  /// Each metadata descriptor is one physical block
  /// 每个元数据描述对应一个物理块
  pub fn from_db(db: &DbSize, meta_li: &[MetaBlockInfo], table_data: &BlockSet) -> Result<Self> {
    Self::new(
      db.total_blocks,
      db.free_blocks,
      meta_li.len() as u64,
      table_data.len(),
      db.block_size,
    )
  }

  #[inline]
  pub fn blocks(&self, component: Component) -> u64 {
    match component {
      Component::TableData => self.table_data,
      Component::Index => self.index,
      Component::Metadata => self.metadata,
      Component::FreeBlocks => self.free,
      Component::Total => self.total,
    }
  }

  pub fn entry(&self, component: Component) -> SummaryEntry {
    let block_count = self.blocks(component);
    SummaryEntry {
      component,
      block_count,
      size_bytes: block_count * self.block_alloc_size,
      percentage: format_pct(block_count, self.total),
    }
  }

  /// Five rows: table_data, index, metadata, free_blocks, total
  pub fn entry_li(&self) -> Vec<SummaryEntry> {
    Component::ALL.iter().map(|&c| self.entry(c)).collect()
  }
}
