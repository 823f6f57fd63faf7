//! Fuzz testing harnesses.
//!
//! These targets can be driven by cargo-fuzz or any byte source.

use crate::generators::ViewOperation;
use crate::model::ModelPair;

/// Fuzz target for a view built and driven from arbitrary bytes.
///
/// The first byte selects the segment count, each segment takes a length
/// byte followed by that many data bytes, and the remaining bytes are decoded
/// as operations. Every operation is checked against the reference model;
/// any divergence panics.
pub fn fuzz_view_operations(data: &[u8]) {
    let Some((&count, mut rest)) = data.split_first() else {
        return;
    };

    let mut segments = Vec::new();
    for _ in 0..(count % 16) {
        let Some((&len, tail)) = rest.split_first() else {
            break;
        };
        let len = (len as usize % 32).min(tail.len());
        segments.push(tail[..len].to_vec());
        rest = &tail[len..];
    }

    let Ok(mut pair) = ModelPair::new(segments) else {
        return;
    };

    for op in rest.chunks_exact(3) {
        let a = op[1] as usize;
        let b = op[2] as usize;
        let op = if op[0] % 4 == 0 {
            ViewOperation::Discard { count: a }
        } else {
            ViewOperation::Read { offset: a, len: b }
        };
        pair.apply(&op);
    }

    pair.assert_consistent();
}
