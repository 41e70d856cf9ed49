//! String operations: strlen, strncmp, strcpy, strspn.
//!
//! These are safe Rust implementations operating on byte slices. Buffers
//! written by the scanning engine follow the NUL-terminated C string model:
//! a `0x00` byte marks the logical end of the string. Inputs being scanned
//! are plain slices with no terminator.

/// Returns the length of a NUL-terminated byte string (not counting the NUL).
///
/// Equivalent to C `strlen`. Scans `s` for the first `0x00` byte and returns
/// its index. If no NUL is found, returns the full slice length.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Compares at most `n` bytes of two byte strings.
///
/// Equivalent to C `strncmp`. Bytes past the end of a slice compare as NUL.
/// Returns a negative value if `s1 < s2`, zero if equal, positive if `s1 > s2`.
pub fn strncmp(s1: &[u8], s2: &[u8], n: usize) -> i32 {
    for i in 0..n {
        let a = if i < s1.len() { s1[i] } else { 0 };
        let b = if i < s2.len() { s2[i] } else { 0 };

        if a != b {
            return (a as i32) - (b as i32);
        }
        if a == 0 {
            return 0;
        }
    }
    0
}

/// Copies `src` into `dest` and NUL-terminates it.
///
/// Equivalent to C `strcpy` with the source length known up front: all of
/// `src` is copied, followed by a terminating NUL byte.
///
/// Returns the number of bytes written (including the NUL).
///
/// # Panics
///
/// Panics if `dest` is too small to hold `src` plus the NUL.
pub fn strcpy(dest: &mut [u8], src: &[u8]) -> usize {
    assert!(
        dest.len() > src.len(),
        "strcpy: destination buffer too small ({} bytes for {} byte string + NUL)",
        dest.len(),
        src.len()
    );
    dest[..src.len()].copy_from_slice(src);
    dest[src.len()] = 0;
    src.len() + 1
}

/// Returns the length of the leading run of bytes in `s` drawn from `accept`.
///
/// Equivalent to C `strspn`. The scanning engine uses this both to test
/// whether a buffer starts with a character class and to measure how much
/// of the class is present.
pub fn strspn(s: &[u8], accept: &[u8]) -> usize {
    s.iter().take_while(|b| accept.contains(b)).count()
}
