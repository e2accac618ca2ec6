/// Authorization header accepted by the stub token provider. The token body
/// is ignored; the stub answers with the configured user id.
pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
