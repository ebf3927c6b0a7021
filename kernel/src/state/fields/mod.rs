//! One module per field cluster, grouped by shared wire shape rather than
//! by discriminator order — spec.md §9 asks for "one explicit function per
//! field" over a macro-generated table; these modules are that function
//! set, dispatched from [`crate::state::discriminator`]'s closed table.

pub mod authorizations;
pub mod entropy;
pub mod history;
pub mod judgements;
pub mod misc;
pub mod reports;
pub mod statistics;
pub mod timeslot;
pub mod validators;
