pub use crate::driver::{CaseOutcome, HarnessConfig, Subject};
pub use crate::errors::{SourceArc, SpecError};
pub use crate::fixture::{Case, SpecFile};
pub use crate::sections::SectionGroups;

pub mod cli;
pub mod discovery;
pub mod driver;
pub mod errors;
pub mod fixture;
pub mod sections;
