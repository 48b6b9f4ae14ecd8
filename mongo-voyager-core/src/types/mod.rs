//! Domain type definitions

mod profile;
mod query;

pub use profile::{ConnectionProfile, ConnectionTestReport, ResolvedProfile};
pub use query::{QueryInput, QuerySpec, ResultPage};
