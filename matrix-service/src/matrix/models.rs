// Matrix data model
// Canonical matrix, combinations, action trace and per-matrix results

use serde::Serialize;

use std::collections::BTreeMap;
use std::fmt;

/// One concrete row of an expanded matrix: dimension name to value
pub type Combination = BTreeMap<String, String>;

/// An include or exclude rule: dimension name to a single value
pub type Directive = BTreeMap<String, String>;

/// Declared dimensions, each with its ordered list of allowed values
pub type Entries = BTreeMap<String, Vec<String>>;

/// A validated, shape-normalized matrix block ready for expansion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonicalMatrix {
    pub entries: Entries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<Directive>>,
}

impl CanonicalMatrix {
    pub fn new(entries: Entries) -> Self {
        Self {
            entries,
            include: None,
            exclude: None,
        }
    }

    pub fn with_include(mut self, include: Vec<Directive>) -> Self {
        self.include = Some(include);
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<Directive>) -> Self {
        self.exclude = Some(exclude);
        self
    }
}

/// What an action did to the combination list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Add,
    Edit,
    Remove,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Add => write!(f, "add"),
            ActionKind::Edit => write!(f, "edit"),
            ActionKind::Remove => write!(f, "remove"),
        }
    }
}

/// A fragment of an action description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionDetail {
    Text(String),
    Values(BTreeMap<String, String>),
}

impl fmt::Display for ActionDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionDetail::Text(text) => write!(f, "{}", text),
            ActionDetail::Values(values) => write!(f, "{}", format_values(values)),
        }
    }
}

/// One entry of the action trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub kind: ActionKind,
    pub details: Vec<ActionDetail>,
}

impl Action {
    pub fn removed(combination: Combination, directive: Directive) -> Self {
        Self {
            kind: ActionKind::Remove,
            details: vec![
                ActionDetail::Text("removed".to_string()),
                ActionDetail::Values(combination),
                ActionDetail::Text("because it matched".to_string()),
                ActionDetail::Values(directive),
            ],
        }
    }

    pub fn changed(changes: Combination, original: Combination, directive: Directive) -> Self {
        Self {
            kind: ActionKind::Edit,
            details: vec![
                ActionDetail::Text("changed".to_string()),
                ActionDetail::Values(changes),
                ActionDetail::Text("in".to_string()),
                ActionDetail::Values(original),
                ActionDetail::Text("because it matched".to_string()),
                ActionDetail::Values(directive),
            ],
        }
    }

    pub fn added(directive: Directive) -> Self {
        Self {
            kind: ActionKind::Add,
            details: vec![
                ActionDetail::Text("added".to_string()),
                ActionDetail::Values(directive),
                ActionDetail::Text("because it was not part of the original values".to_string()),
            ],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, detail) in self.details.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", detail)?;
        }
        Ok(())
    }
}

/// Engine output for one canonical matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub combinations: Vec<Combination>,
    pub actions: Vec<Action>,
}

/// A discovered matrix together with its expansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixResult {
    /// Stable id used to reattach presentation state across re-parses
    pub id: String,
    /// Dotted key path where the matrix was found
    pub path: String,
    #[serde(flatten)]
    pub matrix: CanonicalMatrix,
    pub combinations: Vec<Combination>,
    pub actions: Vec<Action>,
}

impl MatrixResult {
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        matrix: CanonicalMatrix,
        expansion: Expansion,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            matrix,
            combinations: expansion.combinations,
            actions: expansion.actions,
        }
    }

    /// Every key mentioned by the matrix, in first-seen order:
    /// declared dimensions (sorted), then include keys, then exclude keys.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        let directives = self
            .matrix
            .include
            .iter()
            .chain(self.matrix.exclude.iter())
            .flatten();

        let keys = self
            .matrix
            .entries
            .keys()
            .chain(directives.flat_map(|d| d.keys()));

        for key in keys {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
        columns
    }
}

/// Render a flat map as `key: value, key: value` in key order
pub fn format_values(values: &BTreeMap<String, String>) -> String {
    values
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}
