/// Coarse classification shared by every error in this crate.
///
/// Callers map the kind onto their own failure responses (for HTTP:
/// `InvalidInput` becomes 400, `AuthFailure` becomes 401) without having to
/// match on every concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied structurally invalid arguments.
    InvalidInput,

    /// Credentials or tokens were presented but did not check out.
    AuthFailure,

    /// The underlying primitive failed for reasons unrelated to the input.
    Internal,
}
