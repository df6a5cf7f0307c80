pub mod analyze;
pub mod generate;
pub mod run;
pub mod util;

pub use analyze::*;
pub use generate::*;
pub use run::*;
pub use util::*;
