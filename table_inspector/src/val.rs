//! Output values and column schema / 输出值与列定义

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column type of table function output / 表函数输出列类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Ty {
  BigInt,
  Varchar,
}

impl fmt::Display for Ty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Ty::BigInt => "BIGINT",
      Ty::Varchar => "VARCHAR",
    })
  }
}

/// Output column / 输出列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Col {
  pub name: &'static str,
  pub ty: Ty,
}

impl Col {
  pub const fn big(name: &'static str) -> Self {
    Self { name, ty: Ty::BigInt }
  }

  pub const fn str(name: &'static str) -> Self {
    Self { name, ty: Ty::Varchar }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Val {
  Null,
  BigInt(i64),
  Varchar(String),
}

impl Val {
  #[inline]
  pub fn ty(&self) -> Option<Ty> {
    match self {
      Val::Null => None,
      Val::BigInt(_) => Some(Ty::BigInt),
      Val::Varchar(_) => Some(Ty::Varchar),
    }
  }

  #[inline]
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Val::Varchar(s) => Some(s),
      _ => None,
    }
  }

  #[inline]
  pub fn as_i64(&self) -> Option<i64> {
    match self {
      Val::BigInt(n) => Some(*n),
      _ => None,
    }
  }
}

impl From<u64> for Val {
  /// Saturates at `i64::MAX` / 超出 `i64::MAX` 时饱和
  #[inline]
  fn from(n: u64) -> Self {
    Val::BigInt(i64::try_from(n).unwrap_or(i64::MAX))
  }
}

impl From<i64> for Val {
  #[inline]
  fn from(n: i64) -> Self {
    Val::BigInt(n)
  }
}

impl From<String> for Val {
  #[inline]
  fn from(s: String) -> Self {
    Val::Varchar(s)
  }
}

impl From<&str> for Val {
  #[inline]
  fn from(s: &str) -> Self {
    Val::Varchar(s.into())
  }
}

impl fmt::Display for Val {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Val::Null => f.write_str("NULL"),
      Val::BigInt(n) => write!(f, "{n}"),
      Val::Varchar(s) => f.write_str(s),
    }
  }
}
