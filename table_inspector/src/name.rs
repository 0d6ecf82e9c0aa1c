//! Qualified table names / 限定表名
//!
//! `table`, `schema.table`, `catalog.schema.table`; parts may be double
//! quoted, `""` inside quotes is a literal quote.
//! 各部分可用双引号包裹，引号内 `""` 表示字面引号。

use crate::{Error, Result};

/// Schema used when a name carries none / 名称未带 schema 时使用
pub const DEFAULT_SCHEMA: &str = "main";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualifiedName {
  pub catalog: Option<String>,
  pub schema: Option<String>,
  pub name: String,
}

impl QualifiedName {
  pub fn parse(s: &str) -> Result<Self> {
    let bad = || Error::BadName(s.into());

    let mut part_li = Vec::new();
    let mut cur = String::new();
    let mut quoted = false;
    // Part was quoted, keep it even if empty / 带引号的部分即使为空也保留
    let mut had_quote = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
      match c {
        '"' if quoted => {
          if chars.peek() == Some(&'"') {
            chars.next();
            cur.push('"');
          } else {
            quoted = false;
          }
        }
        '"' if cur.is_empty() && !had_quote => {
          quoted = true;
          had_quote = true;
        }
        '.' if !quoted => {
          if cur.is_empty() && !had_quote {
            return Err(bad());
          }
          part_li.push(std::mem::take(&mut cur));
          had_quote = false;
        }
        _ => {
          if had_quote && !quoted {
            // Text after closing quote / 闭合引号后仍有字符
            return Err(bad());
          }
          cur.push(c);
        }
      }
    }

    if quoted || (cur.is_empty() && !had_quote) {
      return Err(bad());
    }
    part_li.push(cur);

    let mut it = part_li.into_iter().rev();
    let name = it.next().ok_or_else(bad)?;
    let schema = it.next();
    let catalog = it.next();
    if it.next().is_some() {
      return Err(bad());
    }
    Ok(Self {
      catalog,
      schema,
      name,
    })
  }

  #[inline]
  pub fn schema_or_default(&self) -> &str {
    self.schema.as_deref().unwrap_or(DEFAULT_SCHEMA)
  }
}
