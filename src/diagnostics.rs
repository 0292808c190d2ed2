//! Uniform error message shaping.
//!
//! Every `bail!`/`Context` message in the crate goes through [`error_message`]
//! so that context chains printed by `anyhow` stay one line per cause, even
//! when a message embeds a JSON snippet or a multi-line path listing.

/// Collapse a message to a single trimmed line.
pub fn error_message(msg: impl Into<String>) -> String {
    let msg = msg.into();
    msg.split_whitespace().collect::<Vec<_>>().join(" ")
}
