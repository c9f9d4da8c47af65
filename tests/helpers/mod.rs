mod test_server;

pub use test_server::TestServer;

#[allow(dead_code)]
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";
// bcrypt minimum cost keeps the suite fast
pub const TEST_HASH_COST: u32 = 4;
