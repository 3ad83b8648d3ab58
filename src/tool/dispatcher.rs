//! Tool registry and dispatcher.
//!
//! `invoke` is the single entry point: look the tool up, validate the whole
//! argument bag, run the operation, and sort failures into invalid input,
//! classified remote errors, or unexpected errors passed through untouched.

use super::Tool;
use super::schema::{self, FieldViolation};
use crate::github::{GitHubClient, GitHubError};
use futures::future::{self, BoxFuture};
use jsonschema::JSONSchema;
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// No tool registered under this name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The argument bag did not validate; every violation is listed
    #[error("Invalid input: {}", render_violations(.0))]
    InvalidInput(Vec<FieldViolation>),

    /// A remote failure with a taxonomy kind
    #[error(transparent)]
    Remote(GitHubError),

    /// Anything else, reported verbatim
    #[error(transparent)]
    Unexpected(GitHubError),

    #[error("Tool `{0}` is already registered")]
    DuplicateTool(String),

    #[error("Input schema for `{tool}` does not compile: {message}")]
    InvalidSchema { tool: &'static str, message: String },
}

impl From<GitHubError> for DispatchError {
    fn from(err: GitHubError) -> Self {
        if err.kind().is_some() {
            Self::Remote(err)
        } else {
            Self::Unexpected(err)
        }
    }
}

fn render_violations(violations: &[FieldViolation]) -> String {
    serde_json::to_string(violations).unwrap_or_else(|_| {
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    })
}

/// Behavioural hints advertised with each tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolHints {
    pub read_only: bool,
    pub destructive: bool,
    pub idempotent: bool,
    pub open_world: bool,
}

/// Discovery view of a registered tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    pub annotations: ToolHints,
}

trait ToolHandler: Send + Sync {
    fn check(&self, validator: &JSONSchema, args: &Value) -> Vec<FieldViolation>;

    fn call(
        &self,
        client: GitHubClient,
        validator: &JSONSchema,
        args: Value,
    ) -> BoxFuture<'static, Result<Value, DispatchError>>;
}

struct Handler<T>(Arc<T>);

/// Structural and tool-specific checks together, then typed decoding.
fn parse<T: Tool>(validator: &JSONSchema, args: Value) -> Result<T::Args, Vec<FieldViolation>> {
    let mut violations = schema::validate(validator, &args);
    for extra in T::validate(&args) {
        if !violations.iter().any(|v| v.field == extra.field) {
            violations.push(extra);
        }
    }
    if !violations.is_empty() {
        return Err(violations);
    }

    serde_json::from_value(args).map_err(|e| vec![FieldViolation::new("", e.to_string())])
}

impl<T: Tool> ToolHandler for Handler<T> {
    fn check(&self, validator: &JSONSchema, args: &Value) -> Vec<FieldViolation> {
        parse::<T>(validator, args.clone()).err().unwrap_or_default()
    }

    fn call(
        &self,
        client: GitHubClient,
        validator: &JSONSchema,
        args: Value,
    ) -> BoxFuture<'static, Result<Value, DispatchError>> {
        match parse::<T>(validator, args) {
            Err(violations) => Box::pin(future::ready(Err(DispatchError::InvalidInput(
                violations,
            )))),
            Ok(typed) => {
                let tool = Arc::clone(&self.0);
                Box::pin(async move {
                    tool.execute(&client, typed)
                        .await
                        .map_err(DispatchError::from)
                })
            }
        }
    }
}

/// A registered tool: name, description, input shape and the operation.
#[derive(Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    pub hints: ToolHints,
    validator: Arc<JSONSchema>,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    fn of<T: Tool>(tool: T) -> Result<Self, DispatchError> {
        let input_schema = schema::input_schema::<T::Args>();
        let validator =
            schema::compile(&input_schema).map_err(|message| DispatchError::InvalidSchema {
                tool: T::name(),
                message,
            })?;

        Ok(Self {
            name: T::name(),
            description: T::description(),
            input_schema,
            hints: ToolHints {
                read_only: T::read_only(),
                destructive: T::destructive(),
                idempotent: T::idempotent(),
                open_world: T::open_world(),
            },
            validator: Arc::new(validator),
            handler: Arc::new(Handler(Arc::new(tool))),
        })
    }

    #[must_use]
    pub fn info(&self) -> ToolInfo {
        ToolInfo {
            name: self.name,
            description: self.description,
            input_schema: self.input_schema.clone(),
            annotations: self.hints,
        }
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("hints", &self.hints)
            .finish_non_exhaustive()
    }
}

/// Tools by unique name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Tool>(mut self, tool: T) -> Result<Self, DispatchError> {
        if self.get(T::name()).is_some() {
            return Err(DispatchError::DuplicateTool(T::name().to_string()));
        }
        self.tools.push(ToolDescriptor::of(tool)?);
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: GitHubClient,
    registry: ToolRegistry,
}

impl Dispatcher {
    /// Dispatcher over the full GitHub tool catalogue.
    pub fn new(client: GitHubClient) -> Result<Self, DispatchError> {
        Ok(Self::with_registry(client, super::github_tools()?))
    }

    #[must_use]
    pub fn with_registry(client: GitHubClient, registry: ToolRegistry) -> Self {
        Self { client, registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Every registered tool with its input shape. No side effects.
    #[must_use]
    pub fn list(&self) -> Vec<ToolInfo> {
        self.registry.iter().map(ToolDescriptor::info).collect()
    }

    /// Validate an argument bag without invoking anything.
    pub fn validate(&self, name: &str, arguments: &Value) -> Result<(), DispatchError> {
        let descriptor = self.lookup(name)?;
        let violations = descriptor
            .handler
            .check(&descriptor.validator, &normalise(arguments.clone()));
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::InvalidInput(violations))
        }
    }

    /// Run one tool to completion.
    pub async fn invoke(&self, name: &str, arguments: Value) -> Result<Value, DispatchError> {
        let descriptor = self.lookup(name)?;
        info!("invoking {name}");

        let result = descriptor
            .handler
            .call(
                self.client.clone(),
                &descriptor.validator,
                normalise(arguments),
            )
            .await;

        match &result {
            Ok(_) => debug!("{name} succeeded"),
            Err(DispatchError::InvalidInput(violations)) => {
                debug!("{name} rejected {} invalid field(s)", violations.len());
            }
            Err(err) => warn!("{name} failed: {err}"),
        }
        result
    }

    fn lookup(&self, name: &str) -> Result<&ToolDescriptor, DispatchError> {
        self.registry
            .get(name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))
    }
}

/// A missing argument bag is an empty one.
fn normalise(arguments: Value) -> Value {
    match arguments {
        Value::Null => Value::Object(Map::new()),
        other => whole_numbers(other),
    }
}

/// `1.0` satisfies an integer schema; rewrite it so it also decodes as one.
fn whole_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && (0.0..u64::MAX as f64).contains(&f) => {
                Value::from(f as u64)
            }
            Some(f) if f.fract() == 0.0 && (i64::MIN as f64..0.0).contains(&f) => {
                Value::from(f as i64)
            }
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(whole_numbers).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key, whole_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}
