//! Extension entry: function registry and bind / init dispatch
//! 扩展入口：函数注册表与 bind / init 分发

use block_stat::SummaryEntry;
use log::debug;

use crate::{
  Col, Conf, Error, Host, ParsedConf, Result, Row, Scan, Ty, Val,
  func::{
    inspect_column::{self, ColumnBind, ColumnRow},
    inspect_database::{self, TableRow},
    inspect_storage::{self, StorageRow},
    inspect_storage_summary,
  },
};

pub const EXT_NAME: &str = "table_inspector";

/// Registered overload / 已注册的重载
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnSig {
  pub name: &'static str,
  pub arg_li: &'static [Ty],
}

pub const FN_LI: [FnSig; 5] = [
  FnSig {
    name: inspect_column::NAME,
    arg_li: &[Ty::Varchar, Ty::Varchar, Ty::Varchar],
  },
  FnSig {
    name: inspect_database::NAME,
    arg_li: &[],
  },
  FnSig {
    name: inspect_storage::NAME,
    arg_li: &[],
  },
  FnSig {
    name: inspect_storage_summary::NAME,
    arg_li: &[Ty::Varchar],
  },
  FnSig {
    name: inspect_storage_summary::NAME,
    arg_li: &[],
  },
];

/// Bound call, arguments validated / 已绑定的调用，参数已校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bind {
  Column(ColumnBind),
  Database,
  Storage,
  /// `None` for the active catalog / `None` 为当前活动目录
  StorageSummary(Option<String>),
}

impl Bind {
  /// Output schema / 输出列
  pub fn col_li(&self) -> &'static [Col] {
    match self {
      Bind::Column(_) => ColumnRow::COL_LI,
      Bind::Database => TableRow::COL_LI,
      Bind::Storage => StorageRow::COL_LI,
      Bind::StorageSummary(_) => SummaryEntry::COL_LI,
    }
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Extension {
  conf: ParsedConf,
}

fn str_arg<'a>(func: &'static str, arg_li: &'a [Val], idx: usize) -> Result<&'a str> {
  arg_li
    .get(idx)
    .and_then(Val::as_str)
    .ok_or(Error::BadArg {
      func,
      idx,
      expect: Ty::Varchar,
    })
}

impl Extension {
  pub fn new(conf: &[Conf]) -> Self {
    Self {
      conf: ParsedConf::parse(conf),
    }
  }

  #[inline]
  pub fn name(&self) -> &'static str {
    EXT_NAME
  }

  #[inline]
  pub fn version(&self) -> &'static str {
    env!("CARGO_PKG_VERSION")
  }

  #[inline]
  pub fn conf(&self) -> &ParsedConf {
    &self.conf
  }

  /// Registered overloads / 已注册的重载
  #[inline]
  pub fn fn_li(&self) -> &'static [FnSig] {
    &FN_LI
  }

  /// Resolve overload by name and arity, validate arguments
  /// 按名称与参数个数解析重载并校验参数
  pub fn bind<H: Host>(&self, host: &H, name: &str, arg_li: &[Val]) -> Result<Bind> {
    let sig = FN_LI
      .iter()
      .find(|s| s.name.eq_ignore_ascii_case(name) && s.arg_li.len() == arg_li.len())
      .ok_or_else(|| Error::NoSuchFn {
        name: name.into(),
        arity: arg_li.len(),
      })?;

    Ok(match (sig.name, arg_li.len()) {
      (inspect_column::NAME, _) => Bind::Column(inspect_column::bind(
        host,
        str_arg(sig.name, arg_li, 0)?,
        str_arg(sig.name, arg_li, 1)?,
        str_arg(sig.name, arg_li, 2)?,
      )?),
      (inspect_database::NAME, _) => Bind::Database,
      (inspect_storage::NAME, _) => Bind::Storage,
      (_, 0) => Bind::StorageSummary(None),
      _ => Bind::StorageSummary(Some(str_arg(sig.name, arg_li, 0)?.into())),
    })
  }

  /// Snapshot host state into a scan / 将宿主状态快照为扫描
  pub fn init<H: Host>(&self, host: &H, bind: &Bind) -> Result<Scan> {
    let batch_rows = self.conf.batch_rows;
    Ok(match bind {
      Bind::Column(b) => Scan::new(inspect_column::init(host, b)?, batch_rows),
      Bind::Database => Scan::new(inspect_database::init(host, self.conf.index_size)?, batch_rows),
      Bind::Storage => Scan::new(inspect_storage::init(host)?, batch_rows),
      Bind::StorageSummary(db) => {
        Scan::new(inspect_storage_summary::init(host, db.as_deref())?, batch_rows)
      }
    })
  }

  /// bind + init
  pub fn scan<H: Host>(&self, host: &H, name: &str, arg_li: &[Val]) -> Result<Scan> {
    let bind = self.bind(host, name, arg_li)?;
    debug!("{EXT_NAME}: {name} bound as {bind:?}");
    self.init(host, &bind)
  }
}
