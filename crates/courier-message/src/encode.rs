//! Size-bounded payload encoding with alert text shortening.

use courier_core::constants::PAYLOAD_MAXIMUM_SIZE;
use courier_core::text::shrink_to_bytes;
use courier_core::{MessageError, Result};
use tracing::{debug, warn};

use crate::message::Message;

impl Message {
    /// Encode the message as an APNs JSON payload.
    ///
    /// If the payload is larger than [`PAYLOAD_MAXIMUM_SIZE`] and
    /// auto-adjustment is enabled, trailing characters are dropped from the
    /// alert text and the payload is encoded again, until it fits. The
    /// shortened text is kept on the message. Fails with
    /// [`MessageError::PayloadTooLarge`] when auto-adjustment is disabled or
    /// the text cannot be shortened enough.
    ///
    /// Only the alert text is ever shortened; a structured alert, custom
    /// properties, and the other `aps` fields are never modified.
    pub fn payload(&mut self) -> Result<String> {
        loop {
            let encoded = self.encode_document()?;
            let size = encoded.len();
            if size <= PAYLOAD_MAXIMUM_SIZE {
                return Ok(encoded);
            }

            if !self.auto_adjust_long_payload {
                warn!(size, max = PAYLOAD_MAXIMUM_SIZE, "payload too large, auto-adjust disabled");
                return Err(MessageError::PayloadTooLarge {
                    size,
                    max: PAYLOAD_MAXIMUM_SIZE,
                    adjustable: false,
                });
            }

            // First estimate only: escaping can make the text cost more
            // bytes in JSON than it does raw, so the loop re-checks.
            let overflow = size - PAYLOAD_MAXIMUM_SIZE;
            let text_len = self.text.as_ref().map_or(0, String::len);
            if text_len <= overflow {
                warn!(
                    size,
                    max = PAYLOAD_MAXIMUM_SIZE,
                    text_len,
                    "payload too large, alert text can not be shortened enough"
                );
                return Err(MessageError::PayloadTooLarge {
                    size,
                    max: PAYLOAD_MAXIMUM_SIZE,
                    adjustable: true,
                });
            }

            let target = text_len - overflow;
            let removed = self
                .text
                .as_mut()
                .map_or(0, |text| shrink_to_bytes(text, target));
            debug!(size, target, removed, "shortened alert text to fit payload");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
