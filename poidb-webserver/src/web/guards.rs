/// Crate version as reported by `GET /server/version`.
#[derive(Debug, Clone, Copy)]
pub struct Version(pub &'static str);
