//! Trace-line parsing.
//!
//! A trace is a text file with one memory operation per line, in the form
//! `[whitespace] <kind-char> <hex-address>,<decimal-size>` where the kind
//! character is one of `I` (instruction fetch), `L` (load), `S` (store), or
//! `M` (modify). The hex address carries no `0x` prefix.
//!
//! The parser is deliberately permissive: a line that does not match the
//! pattern yields `None` and the caller skips it. The trace format is
//! trusted to be mostly well-formed, and one malformed line must not abort
//! a long simulation run.

use std::fmt;

/// The kind of one traced memory operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    /// Instruction fetch; out of scope for a data cache, never replayed.
    Instruction,
    /// Data load; one cache access.
    Load,
    /// Data store; one cache access.
    Store,
    /// Read-modify-write; two cache accesses to the same address.
    Modify,
}

impl OpKind {
    /// Maps a trace kind character to its operation kind.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::Instruction),
            'L' => Some(Self::Load),
            'S' => Some(Self::Store),
            'M' => Some(Self::Modify),
            _ => None,
        }
    }

    /// Number of cache accesses this kind generates during replay.
    pub const fn accesses(self) -> u32 {
        match self {
            Self::Instruction => 0,
            Self::Load | Self::Store => 1,
            Self::Modify => 2,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Instruction => 'I',
            Self::Load => 'L',
            Self::Store => 'S',
            Self::Modify => 'M',
        };
        write!(f, "{c}")
    }
}

/// One parsed trace operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceOp {
    /// Operation kind.
    pub kind: OpKind,
    /// 64-bit byte address.
    pub addr: u64,
    /// Access size in bytes; accepted but never used by the model
    /// (block-crossing accesses are out of scope).
    pub size: u64,
}

/// Parses one trace line, or `None` if it does not match the format.
///
/// Leading whitespace is ignored, as is whitespace between the kind
/// character and the address. The address is hexadecimal without prefix.
/// The size is the leading run of decimal digits after the comma; anything
/// following it (annotations, carriage returns) is ignored, mirroring
/// scanf-style scanning. Unknown kinds, a missing comma, or unparsable
/// fields disqualify the line.
pub fn parse_line(line: &str) -> Option<TraceOp> {
    let line = line.trim_start();
    let mut chars = line.chars();
    let kind = OpKind::from_char(chars.next()?)?;

    let rest = chars.as_str().trim_start();
    let (addr_str, size_str) = rest.split_once(',')?;
    let addr = u64::from_str_radix(addr_str.trim(), 16).ok()?;
    let size_digits = size_str
        .trim_start()
        .split(|c: char| !c.is_ascii_digit())
        .next()?;
    let size = size_digits.parse::<u64>().ok()?;

    Some(TraceOp { kind, addr, size })
}
