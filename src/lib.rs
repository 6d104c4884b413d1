pub mod fast_io;
pub mod formula;
pub mod solve;

pub use solve::run;
