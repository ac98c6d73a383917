mod logger;
#[allow(unused_imports)]
pub use logger::*;
