//! MAC address formatting and the `mac` command.

use super::{push_response, Context};
use crate::command::{Command, Line};
use crate::error::Error;
use heapless::String;

/// Length of a formatted MAC address, `XX:XX:XX:XX:XX:XX`.
pub const MAC_STRING_LEN: usize = 17;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const SEPARATOR: char = ':';

/// Render six bytes as colon-separated uppercase hex.
///
/// ```rust
/// use serialcmd::handlers::format_mac;
///
/// let text = format_mac(&[0x01, 0x02, 0xAB, 0xCD, 0xEF, 0x00]);
/// assert_eq!(text.as_str(), "01:02:AB:CD:EF:00");
/// ```
pub fn format_mac(mac: &[u8; 6]) -> String<MAC_STRING_LEN> {
    let mut out = String::new();
    // Capacity is exact, none of these pushes can fail.
    for (i, byte) in mac.iter().enumerate() {
        if i > 0 {
            let _ = out.push(SEPARATOR);
        }
        let _ = out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
        let _ = out.push(HEX_DIGITS[usize::from(byte & 0x0F)] as char);
    }
    out
}

/// Handler for the `mac` command.
pub fn handle(ctx: &Context<'_>, _cmd: &Command, out: &mut Line) -> Result<(), Error> {
    let mac = ctx.platform.read_mac(ctx.config.mac_type);
    push_response(out, "MAC ")?;
    push_response(out, &format_mac(&mac))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mac() {
        let text = format_mac(&[0x01, 0x02, 0xAB, 0xCD, 0xEF, 0x00]);
        assert_eq!(text.as_str(), "01:02:AB:CD:EF:00");
        assert_eq!(text.len(), MAC_STRING_LEN);
        assert_eq!(text.matches(':').count(), 5);
    }

    #[test]
    fn test_format_mac_extremes() {
        assert_eq!(format_mac(&[0; 6]).as_str(), "00:00:00:00:00:00");
        assert_eq!(format_mac(&[0xFF; 6]).as_str(), "FF:FF:FF:FF:FF:FF");
    }

    #[test]
    fn test_format_mac_high_nibble_first() {
        assert_eq!(
            format_mac(&[0x1F, 0xF1, 0x0A, 0xA0, 0x5C, 0xC5]).as_str(),
            "1F:F1:0A:A0:5C:C5"
        );
    }
}
