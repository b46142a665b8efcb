//! Teaching claims: the record, the role scoping rule, the filter predicate,
//! status aggregation and the approve/reject transition.
//!
//! The pieces compose in one direction:
//!
//! ```text
//! all claims --ClaimScope--> working set --ClaimFilter--> visible rows
//!                                 \--StatusCounts--> summary cards
//! ```

pub mod decision;
pub mod filter;
pub mod form;
pub mod queries;
pub mod scope;
pub mod summary;
pub mod types;

pub use decision::{ClaimError, Decision};
pub use filter::{ClaimFilter, FilterParams};
pub use form::ClaimForm;
pub use queries::*;
pub use scope::ClaimScope;
pub use summary::StatusCounts;
pub use types::*;
