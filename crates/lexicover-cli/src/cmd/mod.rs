pub mod cycles;
pub mod free;
pub mod input;
pub mod reduce;
pub mod run;
pub mod stats;
