use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection raised before a value reaches SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `0` is reserved as the "no reference" sentinel.
    ReservedId { entity: &'static str },
    /// A reference field holds `Some(0)` instead of `None`.
    ReservedReference { field: &'static str },
    NegativeSalary,
    FractionalSalary,
    SalaryOutOfRange,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReservedId { entity } => {
                write!(f, "{entity} id 0 is reserved for \"no reference\"")
            }
            Self::ReservedReference { field } => {
                write!(f, "{field} must be None rather than Some(0)")
            }
            Self::NegativeSalary => write!(f, "salary must not be negative"),
            Self::FractionalSalary => write!(f, "salary must be whole currency units"),
            Self::SalaryOutOfRange => write!(f, "salary does not fit a 64-bit integer"),
        }
    }
}

impl Error for ValidationError {}
