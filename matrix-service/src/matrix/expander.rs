// Matrix Expansion
// Expands a canonical matrix into concrete combinations with an audit trail

use crate::matrix::models::{Action, CanonicalMatrix, Combination, Directive, Entries, Expansion};

use tracing::{debug, trace};

/// Matrix expander: cross product, then excludes, then includes
pub struct MatrixExpander;

impl MatrixExpander {
    /// Expand a canonical matrix into its final combinations and action trace.
    ///
    /// Total over any canonical input. All excludes run before any include,
    /// and include conflicts are only checked against the declared dimensions.
    pub fn expand(matrix: &CanonicalMatrix) -> Expansion {
        let mut actions = Vec::new();

        let mut combinations = Self::cross_product(&matrix.entries);
        debug!(
            dimensions = matrix.entries.len(),
            combinations = combinations.len(),
            "computed cross product"
        );

        if let Some(exclude) = &matrix.exclude {
            combinations = Self::apply_excludes(combinations, exclude, &mut actions);
        }

        if let Some(include) = &matrix.include {
            combinations = Self::apply_includes(combinations, include, &matrix.entries, &mut actions);
        }

        debug!(
            combinations = combinations.len(),
            actions = actions.len(),
            "expanded matrix"
        );

        Expansion {
            combinations,
            actions,
        }
    }

    /// Cartesian product over dimensions in sorted name order.
    ///
    /// No dimensions means no combinations, not a single empty one.
    pub fn cross_product(entries: &Entries) -> Vec<Combination> {
        if entries.is_empty() {
            return Vec::new();
        }

        entries
            .iter()
            .fold(vec![Combination::new()], |state, (name, values)| {
                state
                    .iter()
                    .flat_map(|combination| {
                        values.iter().map(move |value| {
                            let mut next = combination.clone();
                            next.insert(name.clone(), value.clone());
                            next
                        })
                    })
                    .collect()
            })
    }

    /// Apply each exclude against the state left by the previous one
    fn apply_excludes(
        mut combinations: Vec<Combination>,
        excludes: &[Directive],
        actions: &mut Vec<Action>,
    ) -> Vec<Combination> {
        for directive in excludes {
            combinations.retain(|combination| {
                if Self::matches(combination, directive) {
                    trace!(?combination, ?directive, "excluded combination");
                    actions.push(Action::removed(combination.clone(), directive.clone()));
                    false
                } else {
                    true
                }
            });
        }
        combinations
    }

    /// Apply each include in order, merging into every eligible combination
    /// or appending it as a standalone combination when none is eligible
    fn apply_includes(
        combinations: Vec<Combination>,
        includes: &[Directive],
        declared: &Entries,
        actions: &mut Vec<Action>,
    ) -> Vec<Combination> {
        let mut state = combinations;

        for directive in includes {
            let mut matched = false;
            let mut next_state = Vec::with_capacity(state.len() + 1);

            for combination in state {
                if Self::conflicts(&combination, directive, declared) {
                    next_state.push(combination);
                    continue;
                }

                matched = true;
                let changes: Combination = directive
                    .iter()
                    .filter(|(key, value)| combination.get(*key) != Some(*value))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();

                let mut merged = combination.clone();
                merged.extend(directive.iter().map(|(k, v)| (k.clone(), v.clone())));

                trace!(?combination, ?directive, "included into combination");
                actions.push(Action::changed(changes, combination, directive.clone()));
                next_state.push(merged);
            }

            if !matched {
                trace!(?directive, "appended standalone combination");
                next_state.push(directive.clone());
                actions.push(Action::added(directive.clone()));
            }

            state = next_state;
        }

        state
    }

    /// Whether every key of `directive` is present in `combination` with an equal value
    pub fn matches(combination: &Combination, directive: &Directive) -> bool {
        directive
            .iter()
            .all(|(key, value)| combination.get(key) == Some(value))
    }

    /// Whether `directive` disagrees with `combination` on a declared dimension.
    ///
    /// A shared declared dimension conflicts when the values differ, or when the
    /// directive's value is not one of the dimension's declared values.
    pub fn conflicts(combination: &Combination, directive: &Directive, declared: &Entries) -> bool {
        declared.iter().any(|(dimension, allowed)| {
            match (directive.get(dimension), combination.get(dimension)) {
                (Some(wanted), Some(current)) => wanted != current || !allowed.contains(wanted),
                _ => false,
            }
        })
    }
}
