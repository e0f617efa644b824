use ast_grep_core::Node;
use schemagen_core::{GoField, GoType};

use crate::types::{CommentGroup, EmbeddedInterface};

const METHOD_KINDS: &[&str] = &["method_elem", "method_spec"];
const EMBED_KINDS: &[&str] = &["type_elem", "constraint_elem", "interface_type_name"];
const PUNCTUATION: &[&str] = &["*", "(", ")", "comment"];

#[allow(clippy::cast_possible_truncation)]
pub(super) fn start_line<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    node.start_pos().line() as u32 + 1
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn end_line<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    node.end_pos().line() as u32 + 1
}

/// Collapse all whitespace runs to single spaces.
pub(super) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Comment text ──────────────────────────────────────────────────

/// Text of a comment group, following Go's `CommentGroup.Text()`.
///
/// Markers are removed (plus one space after `//`), directive lines are
/// dropped, trailing whitespace is trimmed, leading and trailing blank lines
/// are removed and blank-line runs collapse to one. Non-empty text ends with
/// a newline.
pub(crate) fn comment_text<S: AsRef<str>>(raw: &[S]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for comment in raw {
        let comment = comment.as_ref();
        if let Some(rest) = comment.strip_prefix("//") {
            if is_directive(rest) {
                continue;
            }
            lines.push(rest.strip_prefix(' ').unwrap_or(rest));
        } else if let Some(body) = comment
            .strip_prefix("/*")
            .map(|b| b.strip_suffix("*/").unwrap_or(b))
        {
            lines.extend(body.split('\n'));
        }
    }

    let mut out: Vec<&str> = Vec::new();
    for line in lines {
        let line = line.trim_end();
        if line.is_empty() && out.last().is_none_or(|prev| prev.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }

    if out.is_empty() {
        return String::new();
    }
    let mut text = out.join("\n");
    text.push('\n');
    text
}

/// `//go:generate`, `//nolint:all`, `//line ...` and similar tool directives.
fn is_directive(rest: &str) -> bool {
    if rest.starts_with("line ") || rest.starts_with("extern ") || rest.starts_with("export ") {
        return true;
    }
    let Some(colon) = rest.find(':') else {
        return false;
    };
    let (head, tail) = rest.split_at(colon);
    let word = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    !head.is_empty()
        && head.chars().all(word)
        && tail[1..].chars().next().is_some_and(word)
}

// ── Interface body ────────────────────────────────────────────────

/// What an interface body element declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ElementKind {
    Method {
        name: String,
        signature: String,
        params: Vec<GoType>,
        results: Vec<GoType>,
    },
    Embedded(EmbeddedInterface),
}

/// One element of an interface body with the comment groups attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct BodyElement {
    pub kind: ElementKind,
    pub start_line: u32,
    pub end_line: u32,
    pub comments: Vec<CommentGroup>,
}

struct RawComment {
    text: String,
    start_line: u32,
    end_line: u32,
}

enum Entry {
    Comment(RawComment),
    /// Element index and its last line.
    Element(usize, u32),
}

enum Slot {
    Group(CommentGroup),
    Element(usize),
}

/// Elements of an `interface_type` node in source order, each carrying the
/// comment groups that Go's comment map would associate with it.
pub(super) fn interface_elements<D: ast_grep_core::Doc>(body: &Node<D>) -> Vec<BodyElement> {
    let mut elements = Vec::new();
    let mut entries = Vec::new();

    for child in body.children() {
        let kind = child.kind();
        let kind = kind.as_ref();
        if kind == "comment" {
            entries.push(Entry::Comment(raw_comment(&child)));
        } else if let Some(element_kind) = lower_element(&child, kind) {
            let end = element_end_line(&child);
            entries.push(Entry::Element(elements.len(), end));
            elements.push(BodyElement {
                kind: element_kind,
                start_line: start_line(&child),
                end_line: end,
                comments: Vec::new(),
            });
            // Trailing comments can be parsed as children of the element.
            for nested in child.children() {
                if nested.kind().as_ref() == "comment" {
                    entries.push(Entry::Comment(raw_comment(&nested)));
                }
            }
        }
    }

    let slots = group_comments(entries);
    attach_comments(&slots, &mut elements);
    elements
}

fn raw_comment<D: ast_grep_core::Doc>(node: &Node<D>) -> RawComment {
    RawComment {
        text: node.text().to_string(),
        start_line: start_line(node),
        end_line: end_line(node),
    }
}

/// Last line of an element, ignoring any comment parsed inside it.
fn element_end_line<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    node.children()
        .filter(|c| c.kind().as_ref() != "comment")
        .last()
        .map_or_else(|| end_line(node), |c| end_line(&c))
}

/// Merge consecutive comments on adjacent lines into groups.
fn group_comments(entries: Vec<Entry>) -> Vec<Slot> {
    let mut slots = Vec::new();
    let mut pending: Vec<RawComment> = Vec::new();

    let flush = |pending: &mut Vec<RawComment>, slots: &mut Vec<Slot>| {
        if let (Some(first), Some(last)) = (pending.first(), pending.last()) {
            let raw: Vec<&str> = pending.iter().map(|c| c.text.as_str()).collect();
            slots.push(Slot::Group(CommentGroup {
                text: comment_text(&raw),
                start_line: first.start_line,
                end_line: last.end_line,
            }));
        }
        pending.clear();
    };

    let mut element_end: Option<u32> = None;
    for entry in entries {
        match entry {
            // A comment on the line an element ends on is a group of its own.
            Entry::Comment(comment) if element_end == Some(comment.start_line) => {
                flush(&mut pending, &mut slots);
                pending.push(comment);
                flush(&mut pending, &mut slots);
            }
            Entry::Comment(comment) => {
                if pending
                    .last()
                    .is_some_and(|prev| comment.start_line > prev.end_line + 1)
                {
                    flush(&mut pending, &mut slots);
                }
                pending.push(comment);
            }
            Entry::Element(index, end) => {
                flush(&mut pending, &mut slots);
                slots.push(Slot::Element(index));
                element_end = Some(end);
            }
        }
    }
    flush(&mut pending, &mut slots);
    slots
}

/// Go comment-map association:
/// 1. a group starting on the line where the previous element ends belongs
///    to that element;
/// 2. so does a group starting on the next line that is followed by a blank
///    line (or the end of the body);
/// 3. anything else belongs to the next element.
///
/// A group after the last element that matches neither 1 nor 2 belongs to
/// whatever follows the interface, so no method gets it.
fn attach_comments(slots: &[Slot], elements: &mut [BodyElement]) {
    for (i, slot) in slots.iter().enumerate() {
        let Slot::Group(group) = slot else {
            continue;
        };
        let prev = slots[..i].iter().rev().find_map(|s| match s {
            Slot::Element(idx) => Some(*idx),
            Slot::Group(_) => None,
        });
        let next = slots[i + 1..].iter().find_map(|s| match s {
            Slot::Element(idx) => Some(*idx),
            Slot::Group(_) => None,
        });

        let owner = match (prev, next) {
            (Some(p), _) if group.start_line == elements[p].end_line => Some(p),
            (Some(p), Some(n))
                if group.start_line == elements[p].end_line + 1
                    && elements[n].start_line > group.end_line + 1 =>
            {
                Some(p)
            }
            (_, Some(n)) => Some(n),
            (Some(p), None) if group.start_line == elements[p].end_line + 1 => Some(p),
            (_, None) => None,
        };

        if let Some(owner) = owner {
            elements[owner].comments.push(group.clone());
        } else {
            tracing::trace!(line = group.start_line, "comment group belongs to no interface element");
        }
    }
}

fn lower_element<D: ast_grep_core::Doc>(node: &Node<D>, kind: &str) -> Option<ElementKind> {
    if METHOD_KINDS.contains(&kind) {
        let name = node
            .children()
            .find(|c| c.kind().as_ref() == "field_identifier")
            .map(|n| n.text().to_string())?;
        let params_node = node.field("parameters");
        let result_node = node.field("result");

        let params = params_node
            .as_ref()
            .map(|p| expand_params(p))
            .unwrap_or_default();
        let results = match &result_node {
            Some(r) if r.kind().as_ref() == "parameter_list" => expand_params(r),
            Some(r) => vec![lower_type(r)],
            None => Vec::new(),
        };

        let mut signature = name.clone();
        if let Some(p) = &params_node {
            signature.push_str(&p.text());
        }
        if let Some(r) = &result_node {
            signature.push(' ');
            signature.push_str(&r.text());
        }

        return Some(ElementKind::Method {
            name,
            signature: normalize_whitespace(&signature),
            params,
            results,
        });
    }

    if EMBED_KINDS.contains(&kind) {
        return Some(ElementKind::Embedded(embedded_from(node)));
    }
    None
}

fn embedded_from<D: ast_grep_core::Doc>(node: &Node<D>) -> EmbeddedInterface {
    let terms: Vec<_> = node
        .children()
        .filter(|c| c.kind().as_ref() != "comment")
        .collect();
    match terms.as_slice() {
        [only] => embedded_term(only),
        // Older grammars put the name directly on the element.
        _ => embedded_term(node),
    }
}

fn embedded_term<D: ast_grep_core::Doc>(term: &Node<D>) -> EmbeddedInterface {
    let text = term.text().to_string();
    match term.kind().as_ref() {
        "type_identifier" | "interface_type_name" => EmbeddedInterface::Local { name: text },
        "qualified_type" => match text.split_once('.') {
            Some((package, name)) => EmbeddedInterface::Qualified {
                package: package.trim().to_string(),
                name: name.trim().to_string(),
            },
            None => EmbeddedInterface::Other { text },
        },
        _ => EmbeddedInterface::Other {
            text: normalize_whitespace(&text),
        },
    }
}

// ── Parameters and types ──────────────────────────────────────────

/// Expand a `parameter_list` into one type per parameter.
///
/// `a, b int` yields two `int`s; `...T` yields `[]T`.
pub(super) fn expand_params<D: ast_grep_core::Doc>(list: &Node<D>) -> Vec<GoType> {
    let mut types = Vec::new();
    for decl in list.children() {
        let kind = decl.kind();
        let variadic = match kind.as_ref() {
            "parameter_declaration" => false,
            "variadic_parameter_declaration" => true,
            _ => continue,
        };
        let Some(type_node) = decl.field("type") else {
            continue;
        };
        let mut ty = lower_type(&type_node);
        if variadic {
            ty = GoType::slice(ty);
        }
        let names = decl
            .children()
            .filter(|c| c.kind().as_ref() == "identifier")
            .count()
            .max(1);
        types.extend(std::iter::repeat_n(ty, names));
    }
    types
}

/// Lower a tree-sitter type node into a [`GoType`].
pub(crate) fn lower_type<D: ast_grep_core::Doc>(node: &Node<D>) -> GoType {
    let text = node.text().to_string();
    match node.kind().as_ref() {
        "type_identifier" if text == "any" => GoType::Interface,
        "type_identifier" => GoType::named(text),
        "qualified_type" => match text.split_once('.') {
            Some((package, name)) => GoType::qualified(package.trim(), name.trim()),
            None => GoType::named(text),
        },
        "pointer_type" => inner_type(node).map_or(GoType::Other { text }, GoType::pointer),
        "parenthesized_type" => inner_type(node).unwrap_or(GoType::Other { text }),
        "slice_type" => node
            .field("element")
            .map_or(GoType::Other { text }, |e| GoType::slice(lower_type(&e))),
        "array_type" => match node.field("element") {
            Some(e) => {
                let len = node
                    .field("length")
                    .and_then(|l| l.text().trim().parse::<usize>().ok());
                GoType::array(len, lower_type(&e))
            }
            None => GoType::Other { text },
        },
        "implicit_length_array_type" => node
            .field("element")
            .map_or(GoType::Other { text }, |e| GoType::array(None, lower_type(&e))),
        "channel_type" => node
            .field("value")
            .map_or(GoType::Other { text }, |v| GoType::chan(lower_type(&v))),
        "map_type" => match (node.field("key"), node.field("value")) {
            (Some(k), Some(v)) => GoType::map(lower_type(&k), lower_type(&v)),
            _ => GoType::Other { text },
        },
        "struct_type" => GoType::Struct {
            fields: struct_fields(node),
        },
        "interface_type" => GoType::Interface,
        "function_type" => GoType::Func {
            text: normalize_whitespace(&text),
        },
        _ => GoType::Other {
            text: normalize_whitespace(&text),
        },
    }
}

fn inner_type<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<GoType> {
    node.children()
        .find(|c| !PUNCTUATION.contains(&c.kind().as_ref()))
        .map(|c| lower_type(&c))
}

/// Fields of a `struct_type`. Embedded fields are named after their type.
fn struct_fields<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<GoField> {
    let mut fields = Vec::new();
    let Some(list) = node
        .children()
        .find(|c| c.kind().as_ref() == "field_declaration_list")
    else {
        return fields;
    };

    for decl in list.children() {
        if decl.kind().as_ref() != "field_declaration" {
            continue;
        }
        let Some(type_node) = decl.field("type") else {
            continue;
        };
        let ty = lower_type(&type_node);
        let names: Vec<String> = decl
            .children()
            .filter(|c| c.kind().as_ref() == "field_identifier")
            .map(|n| n.text().to_string())
            .collect();

        if names.is_empty() {
            let pointer = decl.children().any(|c| c.kind().as_ref() == "*");
            let name = match &ty {
                GoType::Named { name, .. } => name.clone(),
                other => other.to_string(),
            };
            fields.push(GoField {
                name,
                ty: if pointer { GoType::pointer(ty) } else { ty },
                embedded: true,
            });
        } else {
            for name in names {
                fields.push(GoField {
                    name,
                    ty: ty.clone(),
                    embedded: false,
                });
            }
        }
    }
    fields
}
