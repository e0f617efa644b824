//! Method grouping by name prefix.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::comments::CommentIndex;

/// One documented API method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_example: Option<String>,
}

impl Method {
    #[must_use]
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            input_example: None,
            response_example: None,
        }
    }
}

/// Methods sharing a name prefix, with the header declared by a
/// `MethodGroup:` marker (empty when none was declared).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodGroup {
    pub name: String,
    pub header: String,
    pub methods: Vec<Method>,
}

/// Group name of a method: everything before the second capitalized word.
///
/// `GetThing` -> `Get`. Names without a second capital map to the empty
/// (catch-all) group.
#[must_use]
pub fn method_group_from_name(name: &str) -> &str {
    let mut chars = name.char_indices();
    chars.next();
    chars
        .find(|(_, c)| c.is_uppercase())
        .map_or("", |(i, _)| &name[..i])
}

/// Bucket the enumerated method names into groups.
///
/// Methods keep their enumeration order while being appended, then each
/// group is sorted by method name and the groups by group name.
#[must_use]
pub fn group_methods<S: AsRef<str>>(names: &[S], comments: &CommentIndex) -> Vec<MethodGroup> {
    let mut groups: BTreeMap<String, MethodGroup> = BTreeMap::new();

    for name in names {
        let name = name.as_ref();
        let group_name = method_group_from_name(name);
        let group = groups
            .entry(group_name.to_string())
            .or_insert_with(|| MethodGroup {
                name: group_name.to_string(),
                header: comments.group_header(group_name).to_string(),
                methods: Vec::new(),
            });
        group
            .methods
            .push(Method::new(name, comments.comment_for(name)));
    }

    let mut sorted: Vec<MethodGroup> = groups.into_values().collect();
    for group in &mut sorted {
        group.methods.sort_by(|a, b| a.name.cmp(&b.name));
    }
    tracing::debug!(groups = sorted.len(), methods = names.len(), "grouped methods");
    sorted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::comments::NO_COMMENT;

    #[rstest]
    #[case("GetThing", "Get")]
    #[case("SectorsList", "Sectors")]
    #[case("ChainNotify", "Chain")]
    #[case("ActorSectorSize", "Actor")]
    #[case("Version", "")]
    #[case("V", "")]
    #[case("", "")]
    fn group_name_is_prefix_before_second_capital(#[case] name: &str, #[case] group: &str) {
        assert_eq!(method_group_from_name(name), group);
    }

    #[test]
    fn groups_and_methods_are_sorted() {
        let names = ["SectorsStatus", "ActorAddress", "SectorsList", "Version"];
        let groups = group_methods(&names, &CommentIndex::default());

        let group_names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(group_names, vec!["", "Actor", "Sectors"]);

        let sectors: Vec<_> = groups[2].methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(sectors, vec!["SectorsList", "SectorsStatus"]);
    }

    #[test]
    fn single_word_names_share_empty_group_without_header() {
        let groups = group_methods(&["Version", "Shutdown"], &CommentIndex::default());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "");
        assert_eq!(groups[0].header, "");
        assert_eq!(groups[0].methods.len(), 2);
    }

    #[test]
    fn methods_carry_comments_and_groups_carry_headers() {
        let list = vec![
            "MethodGroup: Sectors\nSector management.\n".to_string(),
            "SectorsList lists sectors.\n".to_string(),
        ];
        let index = CommentIndex::from_methods([("SectorsList", list.as_slice())]);
        let groups = group_methods(&["SectorsList", "SectorsRefs"], &index);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].header, "Sector management.\n");
        assert_eq!(
            groups[0].methods,
            vec![
                Method::new("SectorsList", "SectorsList lists sectors.\n"),
                Method::new("SectorsRefs", NO_COMMENT),
            ]
        );
    }

    #[test]
    fn every_enumerated_name_is_grouped_once() {
        let names = ["AuthNew", "AuthVerify", "ChainNotify", "Closing"];
        let groups = group_methods(&names, &CommentIndex::default());
        let total: usize = groups.iter().map(|g| g.methods.len()).sum();
        assert_eq!(total, names.len());
    }
}
