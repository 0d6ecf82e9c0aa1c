//! block_stat - block accounting for persisted database files
//! 持久化数据库文件的块统计
//!
//! Turns host segment / index / metadata descriptors into block counts and
//! per-segment compressed sizes. Pure functions, no I/O.
//! 将宿主的段、索引、元数据描述转换为块数与每段压缩大小。纯函数，无 I/O。

#![cfg_attr(docsrs, feature(doc_cfg))]

mod block_set;
mod col_seg;
mod db_size;
mod error;
mod index;
mod seg;
mod summary;
mod ty;

pub use block_set::BlockSet;
pub use col_seg::{BlockOffsets, ColSeg, col_seg_li};
pub use db_size::{DbSize, MetaBlockInfo};
pub use error::{Error, Result};
pub use index::{
  AllocInfo, BlockPointer, Index, IndexSizeMode, IndexStorageInfo, index_size, table_index_size,
};
pub use seg::{BlockId, INVALID_BLOCK, SegInfo};
pub use summary::{Component, Summary, SummaryEntry};
pub use ty::{LogicalType, est_decompressed};
