//! Resolution of method documentation and `MethodGroup:` markers.
//!
//! Input is, per method, the ordered texts of the comment groups attached to
//! it (already normalized the way Go's `CommentGroup.Text()` does).

use std::collections::BTreeMap;

/// Comment used for a method with no documentation of its own.
pub const NO_COMMENT: &str = "There are not yet any comments for this method.";

/// Prefix of a comment group that declares a method group.
pub const GROUP_MARKER: &str = "MethodGroup:";

/// Method comments and group headers recovered from the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentIndex {
    methods: BTreeMap<String, String>,
    groups: BTreeMap<String, String>,
}

impl CommentIndex {
    /// Build the index from `(method name, attached comment groups)` pairs.
    ///
    /// Methods are processed in name order, so when two methods declare the
    /// same group the header of the later name wins.
    pub fn from_methods<'a, I>(methods: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [String])>,
    {
        let mut sorted: Vec<_> = methods.into_iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut index = Self::default();
        for (name, comments) in sorted {
            if let Some((group, header)) = comments.iter().find_map(|c| parse_group_marker(c)) {
                tracing::debug!(method = name, group = %group, "found method group marker");
                index.groups.insert(group, header);
            }
            index
                .methods
                .insert(name.to_string(), own_comment(comments).to_string());
        }
        index
    }

    /// The comment for `method`, or [`NO_COMMENT`] if the method is unknown.
    #[must_use]
    pub fn comment_for(&self, method: &str) -> &str {
        self.methods.get(method).map_or(NO_COMMENT, String::as_str)
    }

    /// The header declared for `group`, empty if none was declared.
    #[must_use]
    pub fn group_header(&self, group: &str) -> &str {
        self.groups.get(group).map_or("", String::as_str)
    }

    /// All declared group headers keyed by group name.
    #[must_use]
    pub const fn groups(&self) -> &BTreeMap<String, String> {
        &self.groups
    }
}

/// The method's own documentation: its last comment group, unless that group
/// is a group marker.
#[must_use]
pub fn own_comment(comments: &[String]) -> &str {
    match comments.last() {
        Some(last) if !last.starts_with(GROUP_MARKER) => last,
        _ => NO_COMMENT,
    }
}

/// Split a `MethodGroup:` comment into `(group name, header)`.
///
/// The name is the rest of the first line, trimmed; the header is every
/// following line joined with `\n`.
#[must_use]
pub fn parse_group_marker(text: &str) -> Option<(String, String)> {
    let rest = text.strip_prefix(GROUP_MARKER)?;
    let mut lines = rest.split('\n');
    let name = lines.next().unwrap_or_default().trim().to_string();
    let header = lines.collect::<Vec<_>>().join("\n");
    Some((name, header))
}
