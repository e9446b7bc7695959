pub mod hospital;
pub mod outcome;
pub mod report;

pub use hospital::*;
pub use outcome::*;
pub use report::*;
