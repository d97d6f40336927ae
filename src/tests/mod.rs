#[macro_use]
mod util;

mod flatten;
