//! # lagcast-var
//!
//! Vector autoregression: ordinary-least-squares fitting of VAR(p) models
//! over `k` variables, and recursive multi-step forecasting.
//!
//! ## Typestate Workflow
//!
//! ```mermaid
//! graph LR
//!     A["VarSpec::new(p, k)"] -->|".fit(&data)?"| B["VarFit"]
//!     A -->|".prepare_data(&data)?"| D["Design { Y, X }"]
//!     B --> C[".coefficients(): per-lag k x k matrices"]
//!     B --> E[".predict(&data, steps)"]
//! ```
//!
//! ## Two Usage Paths
//!
//! **Typestate** (a fit value that cannot be used unfitted):
//! ```ignore
//! let fit = VarSpec::new(2, 3).fit(&series)?;
//! let path = fit.predict(&series, 12)?;
//! ```
//!
//! **In-place model** (fit and re-fit one value):
//! ```ignore
//! let mut model = VectorAutoregression::new(2, 3);
//! model.fit(&series)?;
//! let path = model.predict(&series, 12)?;
//! ```
//!
//! ## Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | p | [`VarSpec::p()`] | Lag order: number of past observations used |
//! | k | [`VarSpec::k()`] | Number of variables per observation |
//! | A_i | [`VarFit::coefficient()`] | `k x k` effect of lag `i` on the next observation |
//! | Y, X | [`Design::y()`], [`Design::x()`] | Response and lagged design matrices |

mod design;
mod error;
mod fit;
mod model;
mod spec;

pub use design::Design;
pub use error::VarError;
pub use fit::VarFit;
pub use model::VectorAutoregression;
pub use spec::VarSpec;

pub use lagcast_matrix::{Matrix, MatrixError};
