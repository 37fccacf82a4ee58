//! Integer reductions over the parsed argument values.

/// The closed set of reductions selectable on the command line.
///
/// The reduction is fixed during parsing; nothing downstream dispatches
/// dynamically on operation identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Arithmetic sum of all values (`--sum`).
    Sum,
    /// Maximum element (the default).
    Max,
}

impl Op {
    /// Apply the reduction to `values`.
    ///
    /// Returns `None` for an empty slice. The CLI grammar guarantees at
    /// least one value, but the library will not invent a result.
    pub fn apply(self, values: &[i64]) -> Option<i64> {
        match self {
            Op::Sum => (!values.is_empty()).then(|| values.iter().sum()),
            Op::Max => values.iter().copied().max(),
        }
    }
}

/// The structured result of a successful command-line parse: the integers
/// to reduce plus the reduction selected by flag presence.
///
/// Built once per invocation, consumed immediately, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    /// Positional integers, in the order given.
    pub values: Vec<i64>,
    /// Selected reduction.
    pub operation: Op,
}

impl ParsedArguments {
    pub fn new(values: Vec<i64>, operation: Op) -> Self {
        Self { values, operation }
    }

    /// Reduce `values` with `operation`. `None` when `values` is empty.
    pub fn evaluate(&self) -> Option<i64> {
        self.operation.apply(&self.values)
    }
}
