//! Command interpreter payload

use serde::Serialize;

/// Body of `POST /voice/interpret`
#[derive(Debug, Clone, Serialize)]
pub(crate) struct InterpretArgs<'a> {
    pub text: &'a str,
}
