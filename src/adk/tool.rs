use async_trait::async_trait;
use serde_json::Value;
use std::error::Error;

/// Trait for functions a model may call.
///
/// `name()`, `description()` and `schema()` return borrowed data; implementations
/// keep them in struct fields so nothing is rebuilt per request.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool name (must be unique within a request)
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does
    fn description(&self) -> &str;

    /// Returns the JSON schema for the tool's input parameters
    fn schema(&self) -> &Value;

    /// Validate and handle the arguments of a call
    async fn execute(&self, input: Value) -> Result<Value, Box<dyn Error + Send + Sync>>;
}
