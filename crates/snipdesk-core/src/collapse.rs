//! Line-count heuristic for collapsing long code blocks.

/// Blocks with more lines than this start collapsed
pub const DEFAULT_COLLAPSE_THRESHOLD: usize = 20;

/// Number of `\n`-separated pieces in `code`.
///
/// A trailing newline counts as one more (empty) line, so `"a\n"` has two
/// lines and the empty string has one.
pub fn line_count(code: &str) -> usize {
    code.split('\n').count()
}

/// Whether `code` is long enough to be collapsed
pub fn should_collapse(code: &str, threshold: usize) -> bool {
    line_count(code) > threshold
}

/// Collapse state of a single code block.
///
/// `collapsible` decides whether an expand/collapse control exists at all;
/// `collapsed` is the current position of that control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollapseState {
    pub collapsible: bool,
    pub collapsed: bool,
}

impl CollapseState {
    /// Initial state for freshly rendered code
    pub fn for_code(code: &str, threshold: usize) -> Self {
        let long = should_collapse(code, threshold);
        Self {
            collapsible: long,
            collapsed: long,
        }
    }

    /// Flip between collapsed and expanded. Returns false if the block has no control.
    pub fn toggle(&mut self) -> bool {
        if !self.collapsible {
            return false;
        }
        self.collapsed = !self.collapsed;
        true
    }

    /// Make the block collapsible and collapsed if it is long and not yet
    /// collapsible. Returns true if anything changed.
    ///
    /// Blocks that already have a control are left alone, so repeated calls
    /// never add a second control or re-collapse a block the user expanded.
    pub fn auto_collapse(&mut self, code: &str, threshold: usize) -> bool {
        if self.collapsible || !should_collapse(code, threshold) {
            return false;
        }
        self.collapsible = true;
        self.collapsed = true;
        true
    }

    /// Label for the expand/collapse control
    pub fn label(&self) -> &'static str {
        if self.collapsed {
            "Expand"
        } else {
            "Collapse"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_follows_split_semantics() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("one"), 1);
        assert_eq!(line_count("one\n"), 2);
        assert_eq!(line_count("a\nb\nc"), 3);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let twenty = vec!["x"; 20].join("\n");
        let twenty_one = vec!["x"; 21].join("\n");
        assert!(!should_collapse(&twenty, DEFAULT_COLLAPSE_THRESHOLD));
        assert!(should_collapse(&twenty_one, DEFAULT_COLLAPSE_THRESHOLD));
    }

    #[test]
    fn test_repeated_line_code_collapses() {
        let code = "console.log(1)\n".repeat(25);
        let state = CollapseState::for_code(&code, DEFAULT_COLLAPSE_THRESHOLD);
        assert!(state.collapsible);
        assert!(state.collapsed);
        assert_eq!(state.label(), "Expand");
    }

    #[test]
    fn test_toggle_flips_once_per_call() {
        let mut state = CollapseState::for_code(&"l\n".repeat(30), 20);

        assert!(state.toggle());
        assert!(!state.collapsed);
        assert_eq!(state.label(), "Collapse");

        assert!(state.toggle());
        assert!(state.collapsed);
        assert_eq!(state.label(), "Expand");
    }

    #[test]
    fn test_toggle_without_control_is_noop() {
        let mut state = CollapseState::for_code("short", 20);
        assert!(!state.toggle());
        assert_eq!(state, CollapseState::default());
    }

    #[test]
    fn test_auto_collapse_is_idempotent() {
        let code = "l\n".repeat(30);
        let mut state = CollapseState::default();

        assert!(state.auto_collapse(&code, 20));
        assert!(state.collapsed);
        assert!(!state.auto_collapse(&code, 20));

        // User expands; a later pass must not collapse it again
        state.toggle();
        assert!(!state.auto_collapse(&code, 20));
        assert!(!state.collapsed);
    }

    #[test]
    fn test_auto_collapse_skips_short_code() {
        let mut state = CollapseState::default();
        assert!(!state.auto_collapse("a\nb", 20));
        assert!(!state.collapsible);
    }
}
