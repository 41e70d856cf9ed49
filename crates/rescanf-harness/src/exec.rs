//! Fixture execution: bridging serialized slot descriptions to typed slots.

use serde::{Deserialize, Serialize};

use rescanf_core::stdio::ScanArg;
use rescanf_core::stdio::sscanf;
use rescanf_core::string::strlen;

use crate::error::HarnessError;

/// Serializable description of one destination slot.
///
/// Slot kinds must match what the format's conversions expect (`%d` needs
/// `i32`, `%hd` needs `i16`, `%s` needs `str`, and so on); a mismatch is a
/// contract violation and panics, the same as handing `sscanf` the wrong
/// slot directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotSpec {
    Char,
    I16,
    I32,
    I64,
    U16,
    U32,
    U64,
    F32,
    F64,
    Str { capacity: usize },
}

impl std::str::FromStr for SlotSpec {
    type Err = HarnessError;

    /// Parses the CLI shorthand: a bare kind name, or `str:<capacity>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "char" => Ok(Self::Char),
            "i16" => Ok(Self::I16),
            "i32" => Ok(Self::I32),
            "i64" => Ok(Self::I64),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" => Ok(Self::U64),
            "f32" => Ok(Self::F32),
            "f64" => Ok(Self::F64),
            other => match other.strip_prefix("str:").and_then(|c| c.parse().ok()) {
                Some(capacity) => Ok(Self::Str { capacity }),
                None => Err(HarnessError::SlotKind(other.to_string())),
            },
        }
    }
}

/// Owned backing storage for one slot during a scan.
#[derive(Debug)]
enum SlotStorage {
    Char(u8),
    I16(i16),
    I32(i32),
    I64(i64),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(Vec<u8>),
}

impl SlotStorage {
    fn zeroed(spec: &SlotSpec) -> Self {
        match spec {
            SlotSpec::Char => Self::Char(0),
            SlotSpec::I16 => Self::I16(0),
            SlotSpec::I32 => Self::I32(0),
            SlotSpec::I64 => Self::I64(0),
            SlotSpec::U16 => Self::U16(0),
            SlotSpec::U32 => Self::U32(0),
            SlotSpec::U64 => Self::U64(0),
            SlotSpec::F32 => Self::F32(0.0),
            SlotSpec::F64 => Self::F64(0.0),
            SlotSpec::Str { capacity } => Self::Str(vec![0; *capacity]),
        }
    }

    /// Deterministic textual rendering used for fixture comparison.
    fn render(&self) -> String {
        match self {
            Self::Char(v) => format!("char:{v}"),
            Self::I16(v) => format!("i16:{v}"),
            Self::I32(v) => format!("i32:{v}"),
            Self::I64(v) => format!("i64:{v}"),
            Self::U16(v) => format!("u16:{v}"),
            Self::U32(v) => format!("u32:{v}"),
            Self::U64(v) => format!("u64:{v}"),
            Self::F32(v) => format!("f32:{v}"),
            Self::F64(v) => format!("f64:{v}"),
            Self::Str(buf) => {
                let text = String::from_utf8_lossy(&buf[..strlen(buf)]);
                format!("str:{text}")
            }
        }
    }
}

/// Result of executing one fixture case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Value returned by the scan.
    pub ret: i32,
    /// Rendered slot values, one per supplied slot.
    pub slots: Vec<String>,
}

impl ExecOutcome {
    /// Single-line rendering used for diffs and reports.
    #[must_use]
    pub fn render(&self) -> String {
        format!("ret={} slots=[{}]", self.ret, self.slots.join(", "))
    }
}

/// Run one scan scenario: allocate zeroed storage for each slot spec, scan,
/// then render what landed in the slots.
pub fn execute_case(source: &[u8], format: &[u8], slots: &[SlotSpec]) -> ExecOutcome {
    let mut storage: Vec<SlotStorage> = slots.iter().map(SlotStorage::zeroed).collect();

    let mut args: Vec<ScanArg<'_>> = storage
        .iter_mut()
        .map(|slot| match slot {
            SlotStorage::Char(v) => ScanArg::Char(v),
            SlotStorage::I16(v) => ScanArg::I16(v),
            SlotStorage::I32(v) => ScanArg::I32(v),
            SlotStorage::I64(v) => ScanArg::I64(v),
            SlotStorage::U16(v) => ScanArg::U16(v),
            SlotStorage::U32(v) => ScanArg::U32(v),
            SlotStorage::U64(v) => ScanArg::U64(v),
            SlotStorage::F32(v) => ScanArg::F32(v),
            SlotStorage::F64(v) => ScanArg::F64(v),
            SlotStorage::Str(buf) => ScanArg::Str(buf.as_mut_slice()),
        })
        .collect();

    let ret = sscanf(source, format, &mut args);
    drop(args);

    ExecOutcome {
        ret,
        slots: storage.iter().map(SlotStorage::render).collect(),
    }
}
