//! Fixture accounts for demos and tests

/// A plaintext account to be hashed into a directory at startup
#[derive(Debug, Clone, Copy)]
pub struct SeedAccount {
    pub email: &'static str,
    pub password: &'static str,
}

/// The account every fresh in-memory directory starts with
pub const SEED_ACCOUNTS: &[SeedAccount] = &[SeedAccount {
    email: "test@example.com",
    password: "password123",
}];
