//! sscanf scanning engine.
//!
//! Clean-room implementation of the C `sscanf` format string interpreter,
//! restricted to in-memory buffers. A format string compiles
//! into a directive sequence (whitespace skips, literal word matches, typed
//! conversions); the engine then walks the source buffer once, directive by
//! directive, converting matched text into caller-supplied typed slots.
//!
//! Reference: POSIX.1-2024 fscanf, ISO C11 7.21.6.2 (in-memory subset)
//!
//! Design invariant: the source cursor only moves forward, and scanning
//! stops permanently at the first directive that fails to match. Directives
//! completed before the failure keep their effects.

use crate::ctype::{is_digit, is_space, is_xdigit};
use crate::stdlib::conversion::{atoi, strntoull, strtod};
use crate::string::{strcpy, strspn};

/// Return value when the source is empty or all-whitespace before any
/// directive runs. Distinct from an assignment count of zero.
pub const EOF: i32 = -1;

/// Hard cap on the number of directives one format string may compile to.
/// Exceeding it is a caller contract violation, not a scan failure.
pub const MAX_DIRECTIVES: usize = 512;

// ---------------------------------------------------------------------------
// Directive types
// ---------------------------------------------------------------------------

/// Length modifier narrowing or widening the destination storage width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthMod {
    #[default]
    None,
    H,    // 'h'
    L,    // 'l'
    Ll,   // 'll'
    BigL, // 'L'
}

/// Width specification of a conversion directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Width {
    #[default]
    None,
    /// `*`: read and discard without writing; no destination slot is bound.
    Suppressed,
    /// Explicit maximum number of characters to consume.
    Fixed(usize),
}

/// A parsed `%`-conversion directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvSpec {
    /// Raw specifier byte (`d`, `i`, `u`, `f`, `g`, `G`, `s`, `c`, `p`,
    /// `x`, `X`, `o`, `n`); `0` for a `%` at the end of the format.
    /// Unrecognized bytes compile but match nothing and write nothing.
    pub conversion: u8,
    pub length: LengthMod,
    pub width: Width,
    /// Index of the destination slot bound to this directive, in format
    /// order. `None` iff assignment is suppressed.
    pub arg: Option<usize>,
}

/// One compiled unit of format-string meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Matches zero or more whitespace characters in the source.
    SkipWhitespace,
    /// A run of non-whitespace, non-`%` format bytes. Matched as a
    /// character *class* against the source, not byte-for-byte.
    Literal(&'a [u8]),
    /// A typed conversion.
    Convert(ConvSpec),
}

// ---------------------------------------------------------------------------
// Destination slots
// ---------------------------------------------------------------------------

/// Typed destination slot for one non-suppressed conversion.
///
/// Slots are supplied in the order the format's non-suppressed conversions
/// appear. Integer conversions select the slot width through their length
/// modifier (`%d`→`I32`, `%hd`→`I16`, `%ld`/`%lld`→`I64`, and likewise for
/// the unsigned family); `%i` uses the signed family whichever base it
/// detects; `%p` writes the pointer-sized `U64` slot; `%n` writes `I32`;
/// `%f`→`F32`, `%lf`/`%Lf`→`F64`. `Str` buffers receive the matched bytes
/// plus a terminating NUL.
#[derive(Debug)]
pub enum ScanArg<'a> {
    Char(&'a mut u8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Str(&'a mut [u8]),
}

// ---------------------------------------------------------------------------
// Directive compiler
// ---------------------------------------------------------------------------

/// Compile a format string into its directive sequence.
///
/// Consecutive whitespace bytes collapse into a single [`Directive::SkipWhitespace`];
/// runs of other non-`%` bytes become one [`Directive::Literal`] each. Every
/// non-suppressed `%`-directive (including `%n` and unrecognized specifiers)
/// binds the next destination slot index in order of appearance.
///
/// Compilation itself never fails: malformed trailing directives yield a
/// null-specifier conversion that matches nothing at run time.
pub fn compile(fmt: &[u8]) -> Vec<Directive<'_>> {
    let mut directives = Vec::new();
    let mut pos = 0;
    let mut next_arg = 0;
    let len = fmt.len();

    while pos < len {
        let b = fmt[pos];
        if is_space(b) {
            while pos < len && is_space(fmt[pos]) {
                pos += 1;
            }
            directives.push(Directive::SkipWhitespace);
        } else if b == b'%' {
            pos += 1;
            let (mut spec, consumed) = parse_conv_spec(&fmt[pos..]);
            pos += consumed;
            if spec.width != Width::Suppressed {
                spec.arg = Some(next_arg);
                next_arg += 1;
            }
            directives.push(Directive::Convert(spec));
        } else {
            let start = pos;
            while pos < len && !is_space(fmt[pos]) && fmt[pos] != b'%' {
                pos += 1;
            }
            directives.push(Directive::Literal(&fmt[start..pos]));
        }
    }
    directives
}

/// Parse a single conversion directive starting after the `%` byte.
///
/// Returns `(spec, bytes_consumed)` with `spec.arg` unbound; a `%` at the
/// end of the format yields a null specifier (`conversion == 0`).
fn parse_conv_spec(fmt: &[u8]) -> (ConvSpec, usize) {
    let mut pos = 0;
    let len = fmt.len();

    // --- assignment suppression / explicit width ---
    let width = if pos < len && fmt[pos] == b'*' {
        pos += 1;
        Width::Suppressed
    } else {
        let start = pos;
        while pos < len && is_digit(fmt[pos]) {
            pos += 1;
        }
        let n = atoi(&fmt[start..pos]);
        // A parsed width of 0 counts as no width at all.
        if n > 0 {
            Width::Fixed(n as usize)
        } else {
            Width::None
        }
    };

    // --- length modifier ---
    let mut length = LengthMod::None;
    if pos < len {
        match fmt[pos] {
            b'h' => {
                length = LengthMod::H;
                pos += 1;
            }
            b'l' => {
                length = LengthMod::L;
                pos += 1;
                if pos < len && fmt[pos] == b'l' {
                    length = LengthMod::Ll;
                    pos += 1;
                }
            }
            b'L' => {
                length = LengthMod::BigL;
                pos += 1;
            }
            _ => {}
        }
    }

    // --- conversion specifier ---
    let conversion = if pos < len {
        let c = fmt[pos];
        pos += 1;
        c
    } else {
        0
    };

    let mut spec = ConvSpec {
        conversion,
        length,
        width,
        arg: None,
    };
    // Pointer conversions ignore any length modifier.
    if spec.conversion == b'p' {
        spec.length = LengthMod::None;
    }
    (spec, pos)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Scan `src` according to `format`, writing converted values into `args`.
///
/// Returns [`EOF`] if `src` is empty or all-whitespace before any directive
/// runs; otherwise the number of successful non-suppressed assignments
/// (`%n` directives write but never count).
///
/// # Panics
///
/// Panics on caller contract violations: a slot whose kind does not match
/// its conversion and length modifier, fewer slots than the format binds,
/// a `Str` buffer too small for the matched text plus NUL, or a format
/// compiling to more than [`MAX_DIRECTIVES`] directives.
pub fn sscanf(src: &[u8], format: &[u8], args: &mut [ScanArg<'_>]) -> i32 {
    if src.iter().all(|&b| is_space(b)) {
        return EOF;
    }

    let directives = compile(format);
    assert!(
        directives.len() <= MAX_DIRECTIVES,
        "sscanf: format compiles to {} directives (limit {MAX_DIRECTIVES})",
        directives.len()
    );
    run_directives(src, &directives, args)
}

// ---------------------------------------------------------------------------
// Match-and-convert engine
// ---------------------------------------------------------------------------

/// Outcome of one directive against the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// A value was decoded and written to a destination slot.
    Assigned,
    /// Input was consumed (or there was nothing to do) without an assignment.
    Matched,
    /// The directive did not match; scanning stops here.
    NoMatch,
}

/// Forward-only read position into the source buffer.
struct Cursor<'s> {
    src: &'s [u8],
    pos: usize,
}

impl<'s> Cursor<'s> {
    fn rest(&self) -> &'s [u8] {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    fn skip_spaces(&mut self) {
        while let Some(b) = self.peek() {
            if !is_space(b) {
                break;
            }
            self.pos += 1;
        }
    }
}

fn run_directives(src: &[u8], directives: &[Directive<'_>], args: &mut [ScanArg<'_>]) -> i32 {
    let mut cur = Cursor { src, pos: 0 };
    let mut assigned = 0;

    for directive in directives.iter().copied() {
        let step = match directive {
            Directive::SkipWhitespace => {
                cur.skip_spaces();
                Step::Matched
            }
            Directive::Literal(word) => match_literal(&mut cur, word),
            Directive::Convert(spec) => match spec.conversion {
                b'c' => scan_char(&mut cur, &spec, args),
                b'd' => scan_decimal(&mut cur, &spec, args, false),
                b'i' => scan_auto_int(&mut cur, &spec, args),
                b'u' => {
                    cur.skip_spaces();
                    scan_decimal(&mut cur, &spec, args, true)
                }
                b'x' | b'X' | b'p' => scan_radix(&mut cur, &spec, args, 16),
                b'o' => scan_radix(&mut cur, &spec, args, 8),
                b'f' | b'g' | b'G' => scan_float(&mut cur, &spec, args),
                b's' => scan_string(&mut cur, &spec, args),
                b'n' => scan_count(&cur, &spec, args),
                // Null or unrecognized specifier: matches nothing, writes
                // nothing (it still occupied a destination slot at compile).
                _ => Step::Matched,
            },
        };

        match step {
            Step::Assigned => assigned += 1,
            Step::Matched => {}
            Step::NoMatch => break,
        }
    }
    assigned
}

/// Matches a literal format word against the source as a character class:
/// after skipping leading source whitespace, the leading run of source
/// bytes drawn from the word's byte set must have exactly the word's length.
fn match_literal(cur: &mut Cursor<'_>, word: &[u8]) -> Step {
    cur.skip_spaces();
    if strspn(cur.rest(), word) != word.len() {
        return Step::NoMatch;
    }
    cur.advance(word.len());
    Step::Matched
}

fn scan_char(cur: &mut Cursor<'_>, spec: &ConvSpec, args: &mut [ScanArg<'_>]) -> Step {
    let Some(b) = cur.peek() else {
        return Step::NoMatch;
    };
    cur.advance(1);
    match spec.arg {
        Some(idx) => {
            write_char(args, idx, b);
            Step::Assigned
        }
        None => Step::Matched,
    }
}

/// `%d`/`%u` (and the decimal arm of `%i`): optional single sign, then a
/// width-bounded digit run, converted with saturation to the `i32` range.
/// The sign byte counts against an explicit width; a sign with width <= 1
/// leaves no room for digits and fails.
fn scan_decimal(
    cur: &mut Cursor<'_>,
    spec: &ConvSpec,
    args: &mut [ScanArg<'_>],
    unsigned: bool,
) -> Step {
    let rest = cur.rest();
    if strspn(rest, b"0123456789+-") == 0 {
        return Step::NoMatch;
    }
    let sign = strspn(rest, b"+-");
    if sign > 1 {
        return Step::NoMatch;
    }
    if sign == 1 && matches!(spec.width, Width::Fixed(w) if w <= 1) {
        return Step::NoMatch;
    }

    let mut staged = vec![rest[0]];
    cur.advance(1);
    take_class(cur, b"0123456789", spec.width, &mut staged);

    let value = i64::from(atoi(&staged));
    let step = match spec.arg {
        Some(idx) => {
            if unsigned {
                // Permissive by design: a negative numeral writes its
                // two's-complement bit pattern into the unsigned slot.
                write_unsigned(args, idx, spec.length, value as u64);
            } else {
                write_signed(args, idx, spec.length, value);
            }
            Step::Assigned
        }
        None => Step::Matched,
    };

    // Without an explicit width the cursor absorbs the rest of the numeral.
    if !matches!(spec.width, Width::Fixed(_)) {
        drain_class(cur, b"0123456789");
    }
    step
}

/// `%i`: base auto-detection. A `0x`/`0X` head selects hex, a bare leading
/// `0` selects octal, a sign or digit selects decimal; anything else fails.
fn scan_auto_int(cur: &mut Cursor<'_>, spec: &ConvSpec, args: &mut [ScanArg<'_>]) -> Step {
    cur.skip_spaces();
    let rest = cur.rest();
    if strspn(rest, b"0x") == 2 {
        scan_radix(cur, spec, args, 16)
    } else if strspn(rest, b"0") == 1 {
        scan_radix(cur, spec, args, 8)
    } else if strspn(rest, b"+-0123456789") > 0 {
        scan_decimal(cur, spec, args, false)
    } else {
        Step::NoMatch
    }
}

/// `%x`/`%X`/`%o`/`%p` (and the hex/octal arms of `%i`).
fn scan_radix(cur: &mut Cursor<'_>, spec: &ConvSpec, args: &mut [ScanArg<'_>], base: u32) -> Step {
    cur.skip_spaces();

    let mut width = spec.width;
    let mut negative = false;
    if cur.peek() == Some(b'-') {
        negative = true;
        // The sign byte shrinks an explicit width budget instead of being
        // independent of it. A budget left at zero cannot match any digit.
        if let Width::Fixed(w) = width {
            if w <= 1 {
                return Step::NoMatch;
            }
            width = Width::Fixed(w - 1);
        }
        cur.advance(1);
    }

    let rest = cur.rest();
    let starts_with_digit = rest.first().is_some_and(|&b| is_xdigit(b));
    if !starts_with_digit && strspn(rest, b"xX0123456789abcdefABCDEF") < 2 {
        return Step::NoMatch;
    }

    let limit = match width {
        Width::Fixed(w) => w,
        Width::None | Width::Suppressed => rest.len(),
    };
    let (magnitude, consumed, _status) = strntoull(rest, base, limit);
    cur.advance(consumed);

    let Some(idx) = spec.arg else {
        return Step::Matched;
    };
    if spec.conversion == b'p' {
        // %p ignores the sign and writes the raw magnitude into the
        // pointer-sized slot.
        write_pointer(args, idx, magnitude);
    } else {
        let value = if negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        };
        if spec.conversion == b'i' {
            // %i's slot kind cannot depend on the detected base, so the hex
            // and octal arms write the same signed slot the decimal arm
            // does, as the identical bit pattern.
            write_signed(args, idx, spec.length, value as i64);
        } else {
            write_unsigned(args, idx, spec.length, value);
        }
    }
    Step::Assigned
}

/// `%f`/`%g`/`%G`. Float conversions never fail the scan: a non-matching
/// head is a silent no-op, though the cursor still absorbs whatever run of
/// the conversion's character class is present.
fn scan_float(cur: &mut Cursor<'_>, spec: &ConvSpec, args: &mut [ScanArg<'_>]) -> Step {
    let plain = spec.conversion == b'f';
    let valid_class: &[u8] = if plain {
        b"0123456789+-"
    } else {
        b"0123456789eE+-NnaAifIF"
    };
    let stage_class: &[u8] = if plain {
        b".0123456789+-"
    } else {
        b".0123456789eE+-NnaAifIF"
    };
    let drain: &[u8] = if plain {
        b".0123456789"
    } else {
        b".0123456789eE+-NnaAifIF"
    };

    let mut step = Step::Matched;
    let rest = cur.rest();
    if strspn(rest, valid_class) > 0 {
        let sign = strspn(rest, b"+-");
        let sign_blocked =
            sign > 1 || (sign == 1 && matches!(spec.width, Width::Fixed(w) if w <= 1));
        if !sign_blocked {
            let mut staged = Vec::new();
            if sign == 1 {
                staged.push(rest[0]);
                cur.advance(1);
            }
            take_class(cur, stage_class, spec.width, &mut staged);

            if let Some(idx) = spec.arg {
                let value = strtod(&staged);
                write_float(args, idx, spec.length, value);
                step = Step::Assigned;
            }
        }
    }

    if !matches!(spec.width, Width::Fixed(_)) {
        drain_class(cur, drain);
    }
    step
}

/// `%s`: skip leading whitespace, then copy a width-bounded run of
/// non-whitespace bytes. Reaching end-of-source while skipping whitespace
/// makes no assignment but cannot fail the scan.
fn scan_string(cur: &mut Cursor<'_>, spec: &ConvSpec, args: &mut [ScanArg<'_>]) -> Step {
    cur.skip_spaces();
    if cur.peek().is_none() {
        return Step::Matched;
    }

    let mut staged = Vec::new();
    while let Some(b) = cur.peek() {
        if is_space(b) {
            break;
        }
        staged.push(b);
        cur.advance(1);
        if let Width::Fixed(limit) = spec.width {
            if staged.len() >= limit {
                break;
            }
        }
    }

    match spec.arg {
        Some(idx) => {
            write_str(args, idx, &staged);
            Step::Assigned
        }
        None => Step::Matched,
    }
}

/// `%n`: writes bytes consumed since the start of the call. Never fails
/// and never contributes to the assignment count.
fn scan_count(cur: &Cursor<'_>, spec: &ConvSpec, args: &mut [ScanArg<'_>]) -> Step {
    if let Some(idx) = spec.arg {
        write_count(args, idx, cur.pos as i32);
    }
    Step::Matched
}

// ---------------------------------------------------------------------------
// Class consumption helpers
// ---------------------------------------------------------------------------

/// Stages source bytes belonging to `class` into `staged`, stopping at the
/// first byte outside the class, at whitespace, or when an explicit width
/// budget (counting bytes already staged) is exhausted.
fn take_class(cur: &mut Cursor<'_>, class: &[u8], width: Width, staged: &mut Vec<u8>) {
    while let Some(b) = cur.peek() {
        if !class.contains(&b) || is_space(b) {
            break;
        }
        if let Width::Fixed(limit) = width {
            if staged.len() >= limit {
                break;
            }
        }
        staged.push(b);
        cur.advance(1);
    }
}

/// Advances the cursor over the leading run of `class` bytes, discarding them.
fn drain_class(cur: &mut Cursor<'_>, class: &[u8]) {
    while let Some(b) = cur.peek() {
        if !class.contains(&b) || is_space(b) {
            break;
        }
        cur.advance(1);
    }
}

// ---------------------------------------------------------------------------
// Slot writers
// ---------------------------------------------------------------------------

fn slot<'x, 'a>(args: &'x mut [ScanArg<'a>], idx: usize) -> &'x mut ScanArg<'a> {
    assert!(
        idx < args.len(),
        "sscanf: format binds destination slot {idx} but only {} slot(s) were supplied",
        args.len()
    );
    &mut args[idx]
}

fn write_signed(args: &mut [ScanArg<'_>], idx: usize, length: LengthMod, value: i64) {
    match (length, slot(args, idx)) {
        (LengthMod::None, ScanArg::I32(out)) => **out = value as i32,
        (LengthMod::H, ScanArg::I16(out)) => **out = value as i16,
        (LengthMod::L, ScanArg::I64(out)) | (LengthMod::Ll, ScanArg::I64(out)) => **out = value,
        (length, other) => {
            panic!("sscanf: signed conversion with {length:?} modifier cannot write {other:?}")
        }
    }
}

fn write_unsigned(args: &mut [ScanArg<'_>], idx: usize, length: LengthMod, value: u64) {
    match (length, slot(args, idx)) {
        (LengthMod::None, ScanArg::U32(out)) => **out = value as u32,
        (LengthMod::H, ScanArg::U16(out)) => **out = value as u16,
        (LengthMod::L, ScanArg::U64(out)) | (LengthMod::Ll, ScanArg::U64(out)) => **out = value,
        (length, other) => {
            panic!("sscanf: unsigned conversion with {length:?} modifier cannot write {other:?}")
        }
    }
}

fn write_float(args: &mut [ScanArg<'_>], idx: usize, length: LengthMod, value: f64) {
    match (length, slot(args, idx)) {
        (LengthMod::None, ScanArg::F32(out)) => **out = value as f32,
        (LengthMod::L, ScanArg::F64(out)) | (LengthMod::BigL, ScanArg::F64(out)) => **out = value,
        (length, other) => {
            panic!("sscanf: float conversion with {length:?} modifier cannot write {other:?}")
        }
    }
}

fn write_char(args: &mut [ScanArg<'_>], idx: usize, value: u8) {
    match slot(args, idx) {
        ScanArg::Char(out) => **out = value,
        other => panic!("sscanf: %c cannot write {other:?}"),
    }
}

fn write_pointer(args: &mut [ScanArg<'_>], idx: usize, value: u64) {
    match slot(args, idx) {
        ScanArg::U64(out) => **out = value,
        other => panic!("sscanf: %p requires a pointer-sized unsigned slot, got {other:?}"),
    }
}

fn write_count(args: &mut [ScanArg<'_>], idx: usize, value: i32) {
    match slot(args, idx) {
        ScanArg::I32(out) => **out = value,
        other => panic!("sscanf: %n requires an i32 slot, got {other:?}"),
    }
}

fn write_str(args: &mut [ScanArg<'_>], idx: usize, staged: &[u8]) {
    match slot(args, idx) {
        ScanArg::Str(out) => {
            strcpy(out, staged);
        }
        other => panic!("sscanf: %s cannot write {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- directive compiler ---

    #[test]
    fn test_compile_whitespace_collapses() {
        let a = compile(b"  %d");
        let b = compile(b" %d");
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_eq!(a[0], Directive::SkipWhitespace);
    }

    #[test]
    fn test_compile_literal_runs() {
        let directives = compile(b"abc %d");
        assert_eq!(directives.len(), 3);
        assert_eq!(directives[0], Directive::Literal(b"abc"));
        assert_eq!(directives[1], Directive::SkipWhitespace);
        assert!(matches!(
            directives[2],
            Directive::Convert(ConvSpec { conversion: b'd', .. })
        ));
    }

    #[test]
    fn test_compile_literal_stops_at_percent() {
        let directives = compile(b"id:%d");
        assert_eq!(directives[0], Directive::Literal(b"id:"));
        assert_eq!(directives.len(), 2);
    }

    #[test]
    fn test_compile_width_and_length() {
        let directives = compile(b"%10ld");
        let Directive::Convert(spec) = directives[0] else {
            panic!("expected conversion");
        };
        assert_eq!(spec.width, Width::Fixed(10));
        assert_eq!(spec.length, LengthMod::L);
        assert_eq!(spec.conversion, b'd');
    }

    #[test]
    fn test_compile_length_modifiers() {
        let cases: &[(&[u8], LengthMod)] = &[
            (b"%hd", LengthMod::H),
            (b"%ld", LengthMod::L),
            (b"%lld", LengthMod::Ll),
            (b"%Lf", LengthMod::BigL),
        ];
        for &(fmt, expected) in cases {
            let Directive::Convert(spec) = compile(fmt)[0] else {
                panic!("expected conversion for {fmt:?}");
            };
            assert_eq!(spec.length, expected);
        }
    }

    #[test]
    fn test_compile_suppressed_binds_no_slot() {
        let Directive::Convert(spec) = compile(b"%*s")[0] else {
            panic!("expected conversion");
        };
        assert_eq!(spec.width, Width::Suppressed);
        assert_eq!(spec.arg, None);
    }

    #[test]
    fn test_compile_slot_binding_order() {
        let directives = compile(b"%d %*d %s");
        let specs: Vec<_> = directives
            .iter()
            .filter_map(|d| match d {
                Directive::Convert(spec) => Some(spec.arg),
                _ => None,
            })
            .collect();
        assert_eq!(specs, vec![Some(0), None, Some(1)]);
    }

    #[test]
    fn test_compile_zero_width_is_none() {
        let Directive::Convert(spec) = compile(b"%0d")[0] else {
            panic!("expected conversion");
        };
        assert_eq!(spec.width, Width::None);
    }

    #[test]
    fn test_compile_trailing_percent_null_specifier() {
        let directives = compile(b"%");
        let Directive::Convert(spec) = directives[0] else {
            panic!("expected conversion");
        };
        assert_eq!(spec.conversion, 0);
        // A null specifier still binds a slot; it just never writes.
        assert_eq!(spec.arg, Some(0));
    }

    #[test]
    fn test_compile_pointer_drops_length_modifier() {
        let Directive::Convert(spec) = compile(b"%lp")[0] else {
            panic!("expected conversion");
        };
        assert_eq!(spec.conversion, b'p');
        assert_eq!(spec.length, LengthMod::None);
    }

    // --- decimal conversions ---

    #[test]
    fn test_scan_decimal_basic() {
        let mut i = 0i32;
        let ret = sscanf(b"42", b"%d", &mut [ScanArg::I32(&mut i)]);
        assert_eq!(ret, 1);
        assert_eq!(i, 42);
    }

    #[test]
    fn test_scan_decimal_signs() {
        let mut i = 0i32;
        assert_eq!(sscanf(b"-42", b"%d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, -42);
        assert_eq!(sscanf(b"+7", b"%d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 7);
    }

    #[test]
    fn test_scan_decimal_double_sign_fails() {
        let mut i = 5i32;
        assert_eq!(sscanf(b"--3", b"%d", &mut [ScanArg::I32(&mut i)]), 0);
        assert_eq!(i, 5);
    }

    #[test]
    fn test_scan_decimal_saturates() {
        let mut i = 0i32;
        assert_eq!(sscanf(b"99999999999", b"%d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, i32::MAX);
        assert_eq!(sscanf(b"-99999999999", b"%d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, i32::MIN);
    }

    #[test]
    fn test_scan_decimal_length_modifiers() {
        let mut h = 0i16;
        let mut l = 0i64;
        let ret = sscanf(
            b"300 87654321",
            b"%hd %ld",
            &mut [ScanArg::I16(&mut h), ScanArg::I64(&mut l)],
        );
        assert_eq!(ret, 2);
        assert_eq!(h, 300);
        assert_eq!(l, 87_654_321);
    }

    #[test]
    fn test_scan_decimal_short_truncates() {
        let mut h = 0i16;
        assert_eq!(sscanf(b"65537", b"%hd", &mut [ScanArg::I16(&mut h)]), 1);
        // Saturated to i32 range first, then truncated to 16 bits.
        assert_eq!(h, 1);
    }

    #[test]
    fn test_scan_decimal_width() {
        let mut i = 0i32;
        let mut n = 0i32;
        let ret = sscanf(
            b"12345",
            b"%3d%n",
            &mut [ScanArg::I32(&mut i), ScanArg::I32(&mut n)],
        );
        assert_eq!(ret, 1);
        assert_eq!(i, 123);
        assert_eq!(n, 3);
    }

    #[test]
    fn test_scan_decimal_sign_needs_width_room() {
        let mut i = 9i32;
        assert_eq!(sscanf(b"-12", b"%1d", &mut [ScanArg::I32(&mut i)]), 0);
        assert_eq!(i, 9);
        assert_eq!(sscanf(b"-12", b"%2d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, -1);
    }

    #[test]
    fn test_scan_decimal_absorbs_whole_numeral() {
        // Saturation still leaves the cursor past the full digit run.
        let mut i = 0i32;
        let mut n = 0i32;
        let ret = sscanf(
            b"99999999999",
            b"%d%n",
            &mut [ScanArg::I32(&mut i), ScanArg::I32(&mut n)],
        );
        assert_eq!(ret, 1);
        assert_eq!(i, i32::MAX);
        assert_eq!(n, 11);
    }

    #[test]
    fn test_scan_decimal_no_leading_whitespace_skip() {
        // %d itself does not skip whitespace; the format must say so.
        let mut i = 0i32;
        assert_eq!(sscanf(b" 7", b"%d", &mut [ScanArg::I32(&mut i)]), 0);
        assert_eq!(sscanf(b" 7", b" %d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 7);
    }

    // --- unsigned ---

    #[test]
    fn test_scan_unsigned_basic() {
        let mut u = 0u32;
        assert_eq!(sscanf(b"3000000000", b"%u", &mut [ScanArg::U32(&mut u)]), 1);
        // Saturated through the shared i32 decimal parse.
        assert_eq!(u, i32::MAX as u32);
        assert_eq!(sscanf(b"123", b"%u", &mut [ScanArg::U32(&mut u)]), 1);
        assert_eq!(u, 123);
    }

    #[test]
    fn test_scan_unsigned_negative_bit_pattern() {
        let mut u = 0u32;
        assert_eq!(sscanf(b"-1", b"%u", &mut [ScanArg::U32(&mut u)]), 1);
        assert_eq!(u, u32::MAX);
    }

    #[test]
    fn test_scan_unsigned_skips_whitespace() {
        let mut u = 0u32;
        assert_eq!(sscanf(b"   55", b"%u", &mut [ScanArg::U32(&mut u)]), 1);
        assert_eq!(u, 55);
    }

    #[test]
    fn test_scan_unsigned_long() {
        let mut u = 0u64;
        assert_eq!(sscanf(b"1234567", b"%lu", &mut [ScanArg::U64(&mut u)]), 1);
        assert_eq!(u, 1_234_567);
    }

    // --- auto-base %i ---

    #[test]
    fn test_scan_auto_int_hex() {
        let mut i = 0i32;
        assert_eq!(sscanf(b"0x1A", b"%i", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 26);
    }

    #[test]
    fn test_scan_auto_int_octal() {
        let mut i = 0i32;
        assert_eq!(sscanf(b"017", b"%i", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 15);
    }

    #[test]
    fn test_scan_auto_int_one_slot_serves_every_base() {
        // The caller cannot know the base in advance, so the same i32 slot
        // must accept all three detected bases.
        let mut i = 0i32;
        assert_eq!(sscanf(b"17", b"%i", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 17);
        assert_eq!(sscanf(b"0x1A", b"%i", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 26);
        assert_eq!(sscanf(b"017", b"%i", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 15);
    }

    #[test]
    fn test_scan_auto_int_length_modifiers() {
        let mut h = 0i16;
        assert_eq!(sscanf(b"0x10", b"%hi", &mut [ScanArg::I16(&mut h)]), 1);
        assert_eq!(h, 16);

        let mut l = 0i64;
        assert_eq!(sscanf(b"0xff", b"%li", &mut [ScanArg::I64(&mut l)]), 1);
        assert_eq!(l, 255);
    }

    #[test]
    fn test_scan_auto_int_zero_run_dispatch() {
        // "00" has a {0,x}-class run of exactly 2 and takes the hex path;
        // "000" has a run of 3 and falls through to decimal.
        let mut i = 7i32;
        let mut n = 0i32;
        let ret = sscanf(
            b"00",
            b"%i%n",
            &mut [ScanArg::I32(&mut i), ScanArg::I32(&mut n)],
        );
        assert_eq!(ret, 1);
        assert_eq!((i, n), (0, 2));

        let mut j = 7i32;
        let mut m = 0i32;
        let ret = sscanf(
            b"000",
            b"%i%n",
            &mut [ScanArg::I32(&mut j), ScanArg::I32(&mut m)],
        );
        assert_eq!(ret, 1);
        assert_eq!((j, m), (0, 3));
    }

    #[test]
    fn test_scan_auto_int_decimal() {
        let mut i = 0i32;
        assert_eq!(sscanf(b"17", b"%i", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 17);
        assert_eq!(sscanf(b"-17", b"%i", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, -17);
    }

    #[test]
    fn test_scan_auto_int_rejects_garbage() {
        let mut i = 3i32;
        assert_eq!(sscanf(b"zz", b"%i", &mut [ScanArg::I32(&mut i)]), 0);
        assert_eq!(i, 3);
    }

    // --- hex / octal / pointer ---

    #[test]
    fn test_scan_hex_basic() {
        let mut u = 0u32;
        assert_eq!(sscanf(b"ff", b"%x", &mut [ScanArg::U32(&mut u)]), 1);
        assert_eq!(u, 255);
        assert_eq!(sscanf(b"0xFF", b"%X", &mut [ScanArg::U32(&mut u)]), 1);
        assert_eq!(u, 255);
    }

    #[test]
    fn test_scan_hex_skips_whitespace() {
        let mut u = 0u32;
        assert_eq!(sscanf(b"  1f", b"%x", &mut [ScanArg::U32(&mut u)]), 1);
        assert_eq!(u, 0x1F);
    }

    #[test]
    fn test_scan_octal_basic() {
        let mut u = 0u32;
        assert_eq!(sscanf(b"755", b"%o", &mut [ScanArg::U32(&mut u)]), 1);
        assert_eq!(u, 0o755);
    }

    #[test]
    fn test_scan_hex_negative_shrinks_width() {
        // The sign byte eats one unit of the explicit width budget.
        let mut u = 0u32;
        let mut n = 0i32;
        let ret = sscanf(
            b"-fff",
            b"%3x%n",
            &mut [ScanArg::U32(&mut u), ScanArg::I32(&mut n)],
        );
        assert_eq!(ret, 1);
        assert_eq!(u, 0xFFu32.wrapping_neg());
        assert_eq!(n, 3);
    }

    #[test]
    fn test_scan_hex_sign_exhausts_width() {
        let mut u = 7u32;
        assert_eq!(sscanf(b"-f", b"%1x", &mut [ScanArg::U32(&mut u)]), 0);
        assert_eq!(u, 7);
    }

    #[test]
    fn test_scan_hex_negative_unbounded() {
        let mut u = 0u32;
        assert_eq!(sscanf(b"-ff", b"%x", &mut [ScanArg::U32(&mut u)]), 1);
        assert_eq!(u, 0xFFu32.wrapping_neg());
    }

    #[test]
    fn test_scan_hex_no_digits_fails() {
        let mut u = 1u32;
        assert_eq!(sscanf(b"ghi", b"%x", &mut [ScanArg::U32(&mut u)]), 0);
        assert_eq!(u, 1);
    }

    #[test]
    fn test_scan_pointer() {
        let mut p = 0u64;
        assert_eq!(sscanf(b"0xdeadbeef", b"%p", &mut [ScanArg::U64(&mut p)]), 1);
        assert_eq!(p, 0xDEAD_BEEF);
    }

    // --- floats ---

    #[test]
    fn test_scan_float_basic() {
        let mut f = 0f32;
        assert_eq!(sscanf(b"3.25", b"%f", &mut [ScanArg::F32(&mut f)]), 1);
        assert_eq!(f, 3.25);
        assert_eq!(sscanf(b"-1.5", b"%f", &mut [ScanArg::F32(&mut f)]), 1);
        assert_eq!(f, -1.5);
    }

    #[test]
    fn test_scan_float_double_slot() {
        let mut d = 0f64;
        assert_eq!(sscanf(b"2.5", b"%lf", &mut [ScanArg::F64(&mut d)]), 1);
        assert_eq!(d, 2.5);
        assert_eq!(sscanf(b"2.5", b"%Lf", &mut [ScanArg::F64(&mut d)]), 1);
        assert_eq!(d, 2.5);
    }

    #[test]
    fn test_scan_general_float_exponent() {
        let mut d = 0f64;
        assert_eq!(sscanf(b"2.5e2", b"%lg", &mut [ScanArg::F64(&mut d)]), 1);
        assert_eq!(d, 250.0);
    }

    #[test]
    fn test_scan_general_float_special_values() {
        let mut d = 0f64;
        assert_eq!(sscanf(b"inf", b"%lG", &mut [ScanArg::F64(&mut d)]), 1);
        assert_eq!(d, f64::INFINITY);
        assert_eq!(sscanf(b"nan", b"%lg", &mut [ScanArg::F64(&mut d)]), 1);
        assert!(d.is_nan());
    }

    #[test]
    fn test_scan_float_never_fails_scan() {
        // A non-matching %f head is a silent no-op, not a mismatch.
        let mut f = 0f32;
        let mut c = 0u8;
        let ret = sscanf(
            b"x",
            b"%f%c",
            &mut [ScanArg::F32(&mut f), ScanArg::Char(&mut c)],
        );
        assert_eq!(ret, 1);
        assert_eq!(c, b'x');
    }

    #[test]
    fn test_scan_float_width() {
        let mut f = 0f32;
        let mut n = 0i32;
        let ret = sscanf(
            b"3.25",
            b"%3f%n",
            &mut [ScanArg::F32(&mut f), ScanArg::I32(&mut n)],
        );
        assert_eq!(ret, 1);
        assert_eq!(f, 3.2);
        assert_eq!(n, 3);
    }

    // --- chars and strings ---

    #[test]
    fn test_scan_char_raw() {
        let mut c = 0u8;
        assert_eq!(sscanf(b" x", b"%c", &mut [ScanArg::Char(&mut c)]), 1);
        // %c takes the raw next byte, whitespace included.
        assert_eq!(c, b' ');
    }

    #[test]
    fn test_scan_char_suppressed_advances() {
        let mut c = 0u8;
        let ret = sscanf(b"ab", b"%*c%c", &mut [ScanArg::Char(&mut c)]);
        assert_eq!(ret, 1);
        assert_eq!(c, b'b');
    }

    #[test]
    fn test_scan_string_stops_at_whitespace() {
        let mut buf = [0u8; 16];
        assert_eq!(sscanf(b"hello world", b"%s", &mut [ScanArg::Str(&mut buf)]), 1);
        assert_eq!(&buf[..6], b"hello\0");
    }

    #[test]
    fn test_scan_string_width() {
        let mut buf = [0u8; 16];
        assert_eq!(sscanf(b"hello world", b"%5s", &mut [ScanArg::Str(&mut buf)]), 1);
        assert_eq!(&buf[..6], b"hello\0");
    }

    #[test]
    fn test_scan_string_skips_leading_whitespace() {
        let mut buf = [0u8; 16];
        assert_eq!(sscanf(b"   abc", b"%s", &mut [ScanArg::Str(&mut buf)]), 1);
        assert_eq!(&buf[..4], b"abc\0");
    }

    #[test]
    fn test_scan_string_exhausted_input_is_noop() {
        let mut c = 0u8;
        let mut buf = [0xFFu8; 8];
        let ret = sscanf(
            b"x ",
            b"%c%s",
            &mut [ScanArg::Char(&mut c), ScanArg::Str(&mut buf)],
        );
        // %s finds only whitespace: no assignment, no failure.
        assert_eq!(ret, 1);
        assert_eq!(c, b'x');
        assert_eq!(buf[0], 0xFF);
    }

    // --- literals and whitespace directives ---

    #[test]
    fn test_literal_match() {
        let mut i = 0i32;
        assert_eq!(sscanf(b"abc1", b"abc%d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 1);
    }

    #[test]
    fn test_literal_mismatch_stops_scan() {
        let mut i = 77i32;
        assert_eq!(sscanf(b"xbc1", b"abc%d", &mut [ScanArg::I32(&mut i)]), 0);
        assert_eq!(i, 77);
    }

    #[test]
    fn test_literal_matches_as_class() {
        // Literal words match by character class, not byte order.
        let mut i = 0i32;
        assert_eq!(sscanf(b"cba 9", b"abc %d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 9);
    }

    #[test]
    fn test_literal_run_length_must_match() {
        let mut i = 0i32;
        // "aabc" spans 4 bytes of the class {a,b,c}; the word is 3 long.
        assert_eq!(sscanf(b"aabc 1", b"abc %d", &mut [ScanArg::I32(&mut i)]), 0);
    }

    #[test]
    fn test_whitespace_directive_idempotent() {
        let mut i = 0i32;
        assert_eq!(sscanf(b"   7", b" %d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 7);
        assert_eq!(sscanf(b"7", b"  %d", &mut [ScanArg::I32(&mut i)]), 1);
        assert_eq!(i, 7);
    }

    // --- suppression, %n, unknown specifiers ---

    #[test]
    fn test_suppressed_conversion_never_writes() {
        let mut j = 0i32;
        assert_eq!(sscanf(b"12 34", b"%*d %d", &mut [ScanArg::I32(&mut j)]), 1);
        assert_eq!(j, 34);
    }

    #[test]
    fn test_byte_count_not_counted() {
        let mut n = 0i32;
        assert_eq!(sscanf(b"abc", b"abc%n", &mut [ScanArg::I32(&mut n)]), 0);
        assert_eq!(n, 3);
    }

    #[test]
    fn test_byte_count_mid_scan() {
        let mut i = 0i32;
        let mut n = 0i32;
        let mut j = 0i32;
        let ret = sscanf(
            b"12 34",
            b"%d%n %d",
            &mut [
                ScanArg::I32(&mut i),
                ScanArg::I32(&mut n),
                ScanArg::I32(&mut j),
            ],
        );
        assert_eq!(ret, 2);
        assert_eq!((i, n, j), (12, 2, 34));
    }

    #[test]
    fn test_unknown_specifier_is_noop_but_binds_slot() {
        let mut a = 0i32;
        let mut b = 0i32;
        let ret = sscanf(
            b"5",
            b"%q%d",
            &mut [ScanArg::I32(&mut a), ScanArg::I32(&mut b)],
        );
        assert_eq!(ret, 1);
        assert_eq!(a, 0);
        assert_eq!(b, 5);
    }

    // --- top-level behavior ---

    #[test]
    fn test_eof_sentinel() {
        let mut i = 42i32;
        assert_eq!(sscanf(b"", b"%d", &mut [ScanArg::I32(&mut i)]), EOF);
        assert_eq!(sscanf(b"   ", b"%d", &mut [ScanArg::I32(&mut i)]), EOF);
        assert_eq!(sscanf(b"\t\n", b"%d", &mut [ScanArg::I32(&mut i)]), EOF);
        assert_eq!(i, 42);
    }

    #[test]
    fn test_partial_match_keeps_earlier_assignments() {
        let mut a = 0i32;
        let mut b = 0i32;
        let ret = sscanf(
            b"12 x",
            b"%d %d",
            &mut [ScanArg::I32(&mut a), ScanArg::I32(&mut b)],
        );
        assert_eq!(ret, 1);
        assert_eq!(a, 12);
        assert_eq!(b, 0);
    }

    #[test]
    fn test_mixed_format_line() {
        let mut id = 0i32;
        let mut name = [0u8; 16];
        let mut flags = 0u32;
        let ret = sscanf(
            b"id 42 bob 0x1f",
            b"id %d %s %x",
            &mut [
                ScanArg::I32(&mut id),
                ScanArg::Str(&mut name),
                ScanArg::U32(&mut flags),
            ],
        );
        assert_eq!(ret, 3);
        assert_eq!(id, 42);
        assert_eq!(&name[..4], b"bob\0");
        assert_eq!(flags, 0x1F);
    }

    // --- contract violations ---

    #[test]
    #[should_panic(expected = "slot(s) were supplied")]
    fn test_missing_slot_panics() {
        sscanf(b"1 2", b"%d %d", &mut []);
    }

    #[test]
    #[should_panic(expected = "cannot write")]
    fn test_mismatched_slot_kind_panics() {
        let mut u = 0u32;
        sscanf(b"1", b"%d", &mut [ScanArg::U32(&mut u)]);
    }

    #[test]
    #[should_panic(expected = "destination buffer too small")]
    fn test_string_buffer_too_small_panics() {
        let mut buf = [0u8; 3];
        sscanf(b"hello", b"%s", &mut [ScanArg::Str(&mut buf)]);
    }
}
