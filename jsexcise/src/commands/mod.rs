//! Commands module - CLI command implementations.

mod excise;

pub use excise::{
    excise_methods, run_excise, ExciseError, ExciseOptions, ExciseReport, Excision, Removal,
};
