//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
///
/// Walks both inputs to exhaustion, so surplus lines on either side show
/// up as one-sided hunks instead of being dropped.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");

    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();
    let mut line = 0usize;
    loop {
        line += 1;
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => break,
            (e, a) if e == a => {}
            (e, a) => {
                out.push_str(&format!("@@ line {line} @@\n"));
                if let Some(e) = e {
                    out.push_str(&format!("-{e}\n"));
                }
                if let Some(a) = a {
                    out.push_str(&format!("+{a}\n"));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_short_circuit() {
        assert_eq!(render_diff("ret=1", "ret=1"), "[identical]");
    }

    #[test]
    fn mismatched_line_is_marked() {
        let diff = render_diff("ret=1 slots=[i32:42]", "ret=0 slots=[i32:0]");
        assert!(diff.contains("-ret=1 slots=[i32:42]"));
        assert!(diff.contains("+ret=0 slots=[i32:0]"));
    }

    #[test]
    fn surplus_lines_are_reported() {
        let diff = render_diff("ret=1", "ret=1\nextra");
        assert!(diff.contains("+extra"));
        assert!(!diff.contains("-ret=1"));

        let diff = render_diff("ret=1\ntrailing", "ret=1");
        assert!(diff.contains("-trailing"));
    }
}
