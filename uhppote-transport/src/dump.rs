//! Packet hex dump for debug logging

use tracing::debug;

/// Logs a packet as four rows of 16 hex bytes, split into two groups of 8.
pub(crate) fn dump(packet: &[u8], label: &str) {
    for (row, chunk) in packet.chunks(16).enumerate() {
        let (left, right) = chunk.split_at(chunk.len().min(8));

        debug!(
            "{}  {:08x}  {}  {}",
            label,
            row * 16,
            hexify(left),
            hexify(right)
        );
    }
}

fn hexify(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}
