//! Constants and limits for the PRT-7 wire format

/// The rotor alphabet in its initial order
pub const ROTOR_ALPHABET: &[u8; ROTOR_SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols on the rotor
pub const ROTOR_SIZE: usize = 26;

/// Tag character for load frames (`L,<char>`)
pub const LOAD_TAG: char = 'L';

/// Tag character for map frames (`M,<signed-int>`)
pub const MAP_TAG: char = 'M';

/// Separator between the frame tag and its field
pub const FIELD_SEPARATOR: char = ',';

/// Textual stand-in for a space payload character
///
/// Matched as a prefix of the load field: any field starting with these three
/// characters decodes to a space. The transport cannot carry a literal space
/// token reliably, hence the special case.
pub const SPACE_TOKEN_PREFIX: &str = "Spa";

/// Sentinel line that terminates a session
pub const SENTINEL_FIN: &str = "FIN";

/// Handshake banner emitted by the sender; acknowledged but carries no data
pub const SENTINEL_BANNER: &str = "SISTEMA PRT-7 ACTIVO";

/// Maximum accepted line length in bytes
///
/// Longer lines are a transport fault, not a frame; the line source rejects
/// them before parsing.
pub const MAX_LINE_LEN: usize = 256;
