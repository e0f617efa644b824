use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::extractors::go::helpers::comment_text;

#[rstest]
#[case(&["// hello"], "hello\n")]
#[case(&["//hello"], "hello\n")]
#[case(&["//  indented"], " indented\n")]
#[case(&["// first", "// second"], "first\nsecond\n")]
#[case(&["//", "// body", "//"], "body\n")]
#[case(&["// a", "//", "//", "// b"], "a\n\nb\n")]
#[case(&["// trailing   "], "trailing\n")]
#[case(&["//go:generate stringer", "// doc"], "doc\n")]
#[case(&["//nolint:all"], "")]
#[case(&["// MethodGroup: Sectors"], "MethodGroup: Sectors\n")]
#[case(&["/* block */"], " block\n")]
#[case(&["//"], "")]
fn go_comment_text(#[case] raw: &[&str], #[case] expected: &str) {
    assert_eq!(comment_text(raw), expected);
}
