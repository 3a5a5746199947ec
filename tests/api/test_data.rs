//! Shared test data constants to avoid magic strings across integration tests

pub const TEST_USERNAME: &str = "SimonaTsvet";
pub const TEST_PASSWORD: &str = "Simo1234";

/// Bearer token handed out by the mock authentication endpoint
pub const TEST_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.test-token";

/// Id the mock service assigns to every created story
pub const CREATED_STORY_ID: &str = "8c6f1b5e-2f43-4d4a-9b57-1f0e6a3d2c11";
