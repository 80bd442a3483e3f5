// Turns user-supplied file references into canonical module identifiers.

mod resolver;

pub use crate::resolver::Resolver;
