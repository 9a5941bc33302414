// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;

fn comment_filter() -> LineFilter {
    LineFilter::new([";;"])
}

#[test]
fn test_significant_line_is_kept() {
    assert!(comment_filter().keep("soil_water 0.31"));
}

#[test]
fn test_ignored_prefix_is_dropped() {
    assert!(!comment_filter().keep(";; written by the checkpoint logger"));
}

#[test]
fn test_prefix_test_runs_after_whitespace_strip() {
    assert!(!comment_filter().keep("   ;; indented comment"));
    assert!(!comment_filter().keep("\t;; tab-indented comment\n"));
}

#[test]
fn test_token_in_the_middle_of_a_line_does_not_drop_it() {
    assert!(comment_filter().keep("value 3 ;; trailing note"));
}

#[test]
fn test_blank_line_is_significant() {
    // A blank line strips to the empty string, which starts with no token.
    assert!(comment_filter().keep(""));
    assert!(comment_filter().keep("   "));
}

#[rstest]
#[case("RUN: 2024-03-01T10:12:55", false)]
#[case("SIMFILE: /home/ci/programs/wheat.loam", false)]
#[case(";; column definitions follow", false)]
#[case("1991\t8\t12\t0.42", true)]
fn test_multiple_tokens(#[case] line: &str, #[case] kept: bool) {
    let filter = LineFilter::new([";;", "RUN:", "SIMFILE:"]);
    assert_eq!(filter.keep(line), kept);
}

#[test]
fn test_custom_strip_characters() {
    let filter = LineFilter::new(["#"]).with_strip_chars(['-']);
    assert!(!filter.keep("--# decorated heading --"));
    // Whitespace is no longer stripped, so an indented marker survives.
    assert!(filter.keep("  # indented"));
}

proptest! {
    /// The verdict is a pure function of the line: repeated calls agree.
    #[test]
    fn prop_keep_is_deterministic(line in ".*") {
        let filter = LineFilter::new([";;", "RUN:"]);
        prop_assert_eq!(filter.keep(&line), filter.keep(&line));
    }

    /// Surrounding whitespace never changes the verdict under the default
    /// strip policy.
    #[test]
    fn prop_whitespace_padding_is_irrelevant(line in "[^ \t].*[^ \t]|[^ \t]?") {
        let filter = LineFilter::new([";;", "Time"]);
        let padded = format!("  \t{line} \t ");
        prop_assert_eq!(filter.keep(&padded), filter.keep(&line));
    }
}
