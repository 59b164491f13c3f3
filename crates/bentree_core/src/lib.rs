//! Public library API for decoding bencode into owned value trees.

/// Bencode cursor, value model, decoder, and structured-tree conversion.
pub mod bencode;
