// Greeting providers
//
// GreetingGenerator is the production provider. MockGreetingService is the
// development stand-in selected by TYP_TMPL_USE_MOCK_GREETING; its output is
// prefixed so it is obvious in terminal output which provider answered.

use super::traits::GreetingService;

/// Real greeting provider
pub struct GreetingGenerator;

impl GreetingService for GreetingGenerator {
    fn generate_greeting(&self, name: &str) -> String {
        format!("Hello, {}", name)
    }

    fn provider(&self) -> &'static str {
        "real"
    }
}

/// Mock greeting provider for local development and tests
pub struct MockGreetingService;

impl GreetingService for MockGreetingService {
    fn generate_greeting(&self, name: &str) -> String {
        format!("[mock] Hello, {}", name)
    }

    fn provider(&self) -> &'static str {
        "mock"
    }
}
