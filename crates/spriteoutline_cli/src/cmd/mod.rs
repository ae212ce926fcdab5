/// Record decode command.
pub mod decode;
/// Texture dependency command.
pub mod deps;
/// Input loading and decompression.
pub mod input;
/// Outline reconstruction command.
pub mod outline;
/// Version predicate table command.
pub mod predicates;
/// Shared formatting helpers.
pub mod util;
