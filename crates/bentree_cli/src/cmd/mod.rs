/// Decode-and-print command.
pub mod decode;
/// Summary statistics command.
pub mod inspect;
/// Shared input and decode-option arguments.
pub mod input;

#[cfg(test)]
mod test_support;
pub(crate) mod util;
