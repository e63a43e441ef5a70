use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CalculationRequest
// ---------------------------------------------------------------------------

/// A validated calculation request, tagged by `type` on the wire.
///
/// Only serializable: incoming payloads go through [`crate::validate`], which
/// reports structural problems as a `ValidationError`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CalculationRequest {
    Basic {
        operation: BasicOperation,
        a: f64,
        b: f64,
    },
    Advanced {
        operation: AdvancedOperation,
        a: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        b: Option<f64>,
    },
    Constant {
        operation: ConstantOperation,
    },
}

impl CalculationRequest {
    pub fn basic(operation: BasicOperation, a: f64, b: f64) -> Self {
        Self::Basic { operation, a, b }
    }

    pub fn advanced(operation: AdvancedOperation, a: f64, b: Option<f64>) -> Self {
        Self::Advanced { operation, a, b }
    }

    pub fn constant(operation: ConstantOperation) -> Self {
        Self::Constant { operation }
    }

    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Basic { .. } => RequestKind::Basic,
            Self::Advanced { .. } => RequestKind::Advanced,
            Self::Constant { .. } => RequestKind::Constant,
        }
    }

    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::Basic { operation, .. } => operation.name(),
            Self::Advanced { operation, .. } => operation.name(),
            Self::Constant { operation } => operation.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Basic,
    Advanced,
    Constant,
}

impl RequestKind {
    pub const ALL: [RequestKind; 3] = [Self::Basic, Self::Advanced, Self::Constant];

    /// Exact, case-sensitive lookup of a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
            Self::Constant => "constant",
        }
    }

    /// Operation names accepted under this tag.
    pub fn operation_names(self) -> Vec<&'static str> {
        match self {
            Self::Basic => BasicOperation::ALL.iter().map(|op| op.name()).collect(),
            Self::Advanced => AdvancedOperation::ALL.iter().map(|op| op.name()).collect(),
            Self::Constant => ConstantOperation::ALL.iter().map(|op| op.name()).collect(),
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// BasicOperation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicOperation {
    Sum,
    Subtract,
    Multiply,
    Divide,
}

impl BasicOperation {
    pub const ALL: [BasicOperation; 4] = [Self::Sum, Self::Subtract, Self::Multiply, Self::Divide];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for BasicOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BasicOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.to_lowercase()).ok_or_else(|| format!("invalid basic operation: {s}"))
    }
}

// ---------------------------------------------------------------------------
// AdvancedOperation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvancedOperation {
    // Powers and roots
    Power,
    Sqrt,
    Cbrt,
    // Logarithms
    Log,
    Ln,
    Log10,
    // Trigonometric, radians only
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    // Hyperbolic
    Sinh,
    Cosh,
    Tanh,
    // Misc
    Factorial,
    Abs,
    Ceil,
    Floor,
    Round,
    Mod,
    Percent,
}

impl AdvancedOperation {
    pub const ALL: [AdvancedOperation; 22] = [
        Self::Power,
        Self::Sqrt,
        Self::Cbrt,
        Self::Log,
        Self::Ln,
        Self::Log10,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Factorial,
        Self::Abs,
        Self::Ceil,
        Self::Floor,
        Self::Round,
        Self::Mod,
        Self::Percent,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Factorial => "factorial",
            Self::Abs => "abs",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Round => "round",
            Self::Mod => "mod",
            Self::Percent => "percent",
        }
    }

    /// Operations that take `b` as well as `a`.
    pub fn requires_second_operand(self) -> bool {
        matches!(self, Self::Power | Self::Log | Self::Mod)
    }

    /// Forward trigonometric functions, whose argument is an angle.
    pub fn takes_angle(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }
}

impl fmt::Display for AdvancedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AdvancedOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.to_lowercase())
            .ok_or_else(|| format!("invalid advanced operation: {s}"))
    }
}

// ---------------------------------------------------------------------------
// ConstantOperation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstantOperation {
    Pi,
    E,
    Phi,
    Tau,
}

impl ConstantOperation {
    pub const ALL: [ConstantOperation; 4] = [Self::Pi, Self::E, Self::Phi, Self::Tau];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
            Self::Phi => "phi",
            Self::Tau => "tau",
        }
    }
}

impl fmt::Display for ConstantOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ConstantOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.to_lowercase()).ok_or_else(|| format!("invalid constant: {s}"))
    }
}
