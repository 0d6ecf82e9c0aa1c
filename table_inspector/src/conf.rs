//! Inspector configuration / 检查器配置

use block_stat::IndexSizeMode;

/// Rows per output chunk, the host's vector size / 每个输出块的行数
pub const DEFAULT_BATCH_ROWS: usize = 2048;

/// Configuration options / 配置选项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Max rows per `execute` call / 每次 `execute` 最大行数
  BatchRows(usize),
  /// Index size strategy / 索引大小统计策略
  IndexSize(IndexSizeMode),
}

/// Parsed config / 解析后的配置
#[derive(Debug, Clone, Copy)]
pub struct ParsedConf {
  pub batch_rows: usize,
  pub index_size: IndexSizeMode,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self::parse(&[])
  }
}

impl ParsedConf {
  pub fn parse(conf: &[Conf]) -> Self {
    let mut c = Self {
      batch_rows: DEFAULT_BATCH_ROWS,
      index_size: IndexSizeMode::default(),
    };
    for item in conf {
      match *item {
        Conf::BatchRows(v) => c.batch_rows = v,
        Conf::IndexSize(v) => c.index_size = v,
      }
    }
    c.batch_rows = c.batch_rows.max(1);
    c
  }
}
