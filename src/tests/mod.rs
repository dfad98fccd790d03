pub mod util;

#[cfg(test)]
mod reconstruct;
#[cfg(all(test, feature = "svg"))]
mod svg;
